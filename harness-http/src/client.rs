//! Blocking HTTP transport for the routing server.
//!
//! [`Transport::send`] is synchronous, so scenarios can call the harness from
//! plain test functions. Each call drives a `reqwest` future to completion
//! and maps the outcome onto [`TransportError`].

use std::error::Error as StdError;
use std::future::Future;
use std::io;

use harness_core::{Query, RoutedResponse, Transport, TransportError, compose_url};
use log::{debug, warn};
use reqwest::{Client, Url};
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use crate::config::RoutedClientConfig;

/// Setting up a [`RoutedClient`] failed.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// `reqwest` rejected the client settings.
    #[error("cannot configure the HTTP client for osrm-routed: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// The fallback runtime could not start.
    #[error("cannot start the request runtime: {0}")]
    Runtime(#[source] io::Error),
}

/// Sends harness requests to a running `osrm-routed` over HTTP.
///
/// The configured timeout bounds the whole exchange, from connect to the
/// last body byte. Running out of time yields [`TransportError::Timeout`]
/// and a refused connection yields [`TransportError::NotRunning`]. Every
/// HTTP status the server answers with, 4xx and 5xx included, comes back
/// as a [`RoutedResponse`] so scenarios can assert on error bodies.
///
/// Requests issued from a multi-threaded Tokio runtime run on that runtime;
/// all other callers share a private `current_thread` runtime held by the
/// client.
#[derive(Debug)]
pub struct RoutedClient {
    client: Client,
    config: RoutedClientConfig,
    fallback: Runtime,
}

impl RoutedClient {
    /// Client with the default timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] when the HTTP client or the fallback
    /// runtime cannot be set up.
    pub fn new() -> Result<Self, ClientBuildError> {
        Self::with_config(RoutedClientConfig::default())
    }

    /// Client applying `config` to every request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] when the HTTP client or the fallback
    /// runtime cannot be set up.
    pub fn with_config(config: RoutedClientConfig) -> Result<Self, ClientBuildError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ClientBuildError::HttpClient)?;
        let fallback = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ClientBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            fallback,
        })
    }

    /// Drive `future` to completion from synchronous code.
    ///
    /// A caller inside a `current_thread` runtime is blocked for the duration
    /// of the request, since that runtime cannot lend its only worker.
    fn block_on<F: Future>(&self, future: F) -> F::Output {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.fallback.block_on(future),
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &RoutedClientConfig {
        &self.config
    }

    /// Perform the GET request, bounded by the configured timeout.
    async fn fetch_async(&self, url: &str) -> Result<RoutedResponse, TransportError> {
        let parsed = Url::parse(url).map_err(|err| TransportError::InvalidUrl {
            url: url.to_owned(),
            message: err.to_string(),
        })?;
        let exchange = async {
            let response = self.client.get(parsed).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>(RoutedResponse { status, body })
        };

        match tokio::time::timeout(self.config.timeout, exchange).await {
            Ok(Ok(response)) => {
                debug!("{url} answered with status {}", response.status);
                Ok(response)
            }
            Ok(Err(err)) => Err(self.classify(&err, url)),
            Err(_elapsed) => Err(self.timed_out(url)),
        }
    }

    fn timed_out(&self, url: &str) -> TransportError {
        warn!("osrm-routed did not respond to {url} within {:?}", self.config.timeout);
        TransportError::Timeout {
            url: url.to_owned(),
            timeout: self.config.timeout,
        }
    }

    /// Map a failed exchange onto the harness error taxonomy.
    fn classify(&self, error: &reqwest::Error, url: &str) -> TransportError {
        if error.is_timeout() {
            return self.timed_out(url);
        }

        if is_connection_refused(error) {
            warn!("osrm-routed refused the connection to {url}");
            return TransportError::NotRunning {
                url: url.to_owned(),
            };
        }

        TransportError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

/// Whether any error in the `source` chain is a refused connection.
fn is_connection_refused(error: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(error);
    while let Some(err) = current {
        if err
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::ConnectionRefused)
        {
            return true;
        }
        current = err.source();
    }
    false
}

impl Transport for RoutedClient {
    fn send(&self, uri: &str, query: &Query) -> Result<RoutedResponse, TransportError> {
        let url = compose_url(uri, query);
        self.block_on(self.fetch_async(&url))
    }
}
