//! Test utilities for routing transports.
//!
//! This module provides [`StubTransport`], a deterministic test double for
//! [`Transport`] that records every request and answers with a pre-configured
//! outcome without opening a socket.

use std::sync::{Mutex, PoisonError};

use harness_core::{Query, RoutedResponse, Transport, TransportError, compose_url};

/// Stub `Transport` for testing.
///
/// # Example
///
/// ```
/// use harness_core::{EndpointConfig, Session, Waypoint};
/// use harness_http::test_support::StubTransport;
///
/// let stub = StubTransport::with_body(200, r#"{"code":"Ok"}"#);
/// let session = Session::new(EndpointConfig::default(), &stub);
///
/// let response = session
///     .nearest(Waypoint::new(13.0, 52.0), &Default::default())
///     .expect("stub answers");
/// assert_eq!(response.status, 200);
/// assert_eq!(stub.requests(), vec![
///     "http://127.0.0.1:5000/nearest/v1/car/13,52".to_owned(),
/// ]);
/// ```
#[derive(Debug)]
pub struct StubTransport {
    response: StubResponse,
    requests: Mutex<Vec<String>>,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Answer(RoutedResponse),
    Error(TransportError),
}

impl StubTransport {
    /// Create a transport answering every request with `status` and `body`.
    #[must_use]
    pub fn with_body(status: u16, body: impl Into<String>) -> Self {
        Self::with_response(RoutedResponse {
            status,
            body: body.into(),
        })
    }

    /// Create a transport answering every request with `response`.
    #[must_use]
    pub const fn with_response(response: RoutedResponse) -> Self {
        Self {
            response: StubResponse::Answer(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a transport failing every request with `error`.
    #[must_use]
    pub const fn with_error(error: TransportError) -> Self {
        Self {
            response: StubResponse::Error(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Full URLs received so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Transport for StubTransport {
    fn send(&self, uri: &str, query: &Query) -> Result<RoutedResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(compose_url(uri, query));

        match &self.response {
            StubResponse::Answer(response) => Ok(response.clone()),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}
