//! Builds requests and hands them to a [`Transport`].

use log::debug;

use crate::config::EndpointConfig;
use crate::error::{RequestError, TransportError};
use crate::options::QueryOptions;
use crate::query::{Query, compose_url};
use crate::request::{
    ServiceRequest, request_matching, request_nearest, request_route, request_table,
    request_timestamp, request_trip,
};
use crate::transport::{RoutedResponse, Transport};
use crate::waypoint::{TableWaypoint, Waypoint};

/// A routing server endpoint bound to a transport.
///
/// # Examples
///
/// ```
/// use harness_core::{
///     EndpointConfig, Query, QueryOptions, RoutedResponse, Session, Transport, TransportError,
///     Waypoint,
/// };
///
/// struct Echo;
///
/// impl Transport for Echo {
///     fn send(&self, uri: &str, _query: &Query) -> Result<RoutedResponse, TransportError> {
///         Ok(RoutedResponse { status: 200, body: uri.to_owned() })
///     }
/// }
///
/// let session = Session::new(EndpointConfig::default(), Echo);
/// let response = session.nearest(Waypoint::new(1.0, 2.0), &QueryOptions::default())?;
/// assert_eq!(response.body, "http://127.0.0.1:5000/nearest/v1/car");
/// # Ok::<(), TransportError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session<T> {
    endpoint: EndpointConfig,
    transport: T,
}

impl<T: Transport> Session<T> {
    /// Bind `transport` to `endpoint`.
    #[must_use]
    pub const fn new(endpoint: EndpointConfig, transport: T) -> Self {
        Self {
            endpoint,
            transport,
        }
    }

    /// Endpoint requests are addressed to.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    /// Underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a `route` request.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Validation`] before sending anything when the
    /// bearing or approach counts do not match the waypoints, and
    /// [`RequestError::Transport`] when the request does not complete.
    pub fn route<B, A>(
        &self,
        waypoints: &[Waypoint],
        bearings: &[B],
        approaches: &[A],
        options: &QueryOptions,
    ) -> Result<RoutedResponse, RequestError>
    where
        B: AsRef<str>,
        A: AsRef<str>,
    {
        let request = request_route(waypoints, bearings, approaches, options)?;
        Ok(self.dispatch(&request)?)
    }

    /// Send a `nearest` request.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request does not complete.
    pub fn nearest(
        &self,
        node: Waypoint,
        options: &QueryOptions,
    ) -> Result<RoutedResponse, TransportError> {
        self.dispatch(&request_nearest(node, options))
    }

    /// Send a `table` request.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request does not complete.
    pub fn table(
        &self,
        waypoints: &[TableWaypoint],
        options: &QueryOptions,
    ) -> Result<RoutedResponse, TransportError> {
        self.dispatch(&request_table(waypoints, options))
    }

    /// Send a `trip` request.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request does not complete.
    pub fn trip(
        &self,
        waypoints: &[Waypoint],
        options: &QueryOptions,
    ) -> Result<RoutedResponse, TransportError> {
        self.dispatch(&request_trip(waypoints, options))
    }

    /// Send a `match` request.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request does not complete.
    pub fn matching(
        &self,
        waypoints: &[Waypoint],
        timestamps: &[u64],
        options: &QueryOptions,
    ) -> Result<RoutedResponse, TransportError> {
        self.dispatch(&request_matching(waypoints, timestamps, options))
    }

    /// Ask the server for its data timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request does not complete.
    pub fn timestamp(&self) -> Result<RoutedResponse, TransportError> {
        self.dispatch(&request_timestamp())
    }

    /// Send a hand-written path such as `route/v1/car/1,1;2,2?steps=false`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request does not complete.
    pub fn request_url(&self, path: &str) -> Result<RoutedResponse, TransportError> {
        let url = self.endpoint.url_for(path);
        debug!("requesting {url}");
        self.transport.send(&url, &Query::new())
    }

    /// Resolve the path for `request` and send it.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request does not complete.
    pub fn dispatch(&self, request: &ServiceRequest) -> Result<RoutedResponse, TransportError> {
        let uri = request.path(&self.endpoint);
        debug!(
            "dispatching {} request to {}",
            request.operation,
            compose_url(&uri, &request.query)
        );
        self.transport.send(&uri, &request.query)
    }
}
