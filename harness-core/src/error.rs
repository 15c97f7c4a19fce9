//! Error taxonomy shared by the request builders, transports and decoders.

use std::time::Duration;

use thiserror::Error;

/// Rejected caller input, raised before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Bearings were supplied but not one per waypoint.
    #[error("number of bearings ({bearings}) does not equal the number of waypoints ({waypoints})")]
    BearingCountMismatch {
        /// Number of bearings supplied.
        bearings: usize,
        /// Number of waypoints supplied.
        waypoints: usize,
    },
    /// Approaches were supplied but not one per waypoint.
    #[error(
        "number of approaches ({approaches}) does not equal the number of waypoints ({waypoints})"
    )]
    ApproachCountMismatch {
        /// Number of approaches supplied.
        approaches: usize,
        /// Number of waypoints supplied.
        waypoints: usize,
    },
}

/// Errors surfaced by a [`Transport`](crate::Transport).
///
/// Callers branch on [`TransportError::Timeout`] versus
/// [`TransportError::NotRunning`]; anything else is reported as
/// [`TransportError::Network`] with the transport's own description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// No response arrived within the configured duration.
    #[error("osrm-routed did not respond to {url} within {timeout:?}")]
    Timeout {
        /// Fully qualified request URL.
        url: String,
        /// Timeout enforced by the adapter.
        timeout: Duration,
    },
    /// The server refused the connection.
    #[error("osrm-routed is not running at {url}")]
    NotRunning {
        /// Fully qualified request URL.
        url: String,
    },
    /// The request URL could not be parsed.
    #[error("invalid request URL {url}: {message}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Parser diagnostic.
        message: String,
    },
    /// Any other transport failure, passed through verbatim.
    #[error("request to {url} failed: {message}")]
    Network {
        /// Fully qualified request URL.
        url: String,
        /// Description reported by the transport.
        message: String,
    },
}

impl TransportError {
    /// Status code reported for adapter-enforced timeouts.
    pub const TIMEOUT_STATUS: u16 = 408;

    /// Status code associated with the failure, if any.
    ///
    /// Only [`TransportError::Timeout`] carries one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Timeout { .. } => Some(Self::TIMEOUT_STATUS),
            _ => None,
        }
    }

    /// URL the failing request was addressed to.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Timeout { url, .. }
            | Self::NotRunning { url }
            | Self::InvalidUrl { url, .. }
            | Self::Network { url, .. } => url,
        }
    }
}

/// Errors raised while dispatching a request through a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request was rejected before it was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The transport failed to complete the request.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Errors raised while decoding a response.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The response body was not valid JSON for the expected shape.
    #[error("failed to parse response body: {0}")]
    Json(#[from] serde_json::Error),
    /// The instructions contain no legs.
    #[error("route instructions contain no legs")]
    NoLegs,
    /// The instructions carry no tracepoints.
    #[error("route instructions carry no tracepoints")]
    MissingTracepoints,
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable was set to a value that could not be parsed.
    #[error("invalid value {value:?} for {variable}")]
    InvalidValue {
        /// Name of the environment variable.
        variable: &'static str,
        /// The rejected value.
        value: String,
    },
}
