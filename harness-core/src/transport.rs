//! The seam between query construction and the network.

use crate::error::{DecodeError, TransportError};
use crate::query::Query;
use crate::response::ServiceResponse;

/// Raw outcome of a completed request.
///
/// Any HTTP status counts as completed; callers inspect `status` themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl RoutedResponse {
    /// Parse the body as a routing service response.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Json`] when the body is not a valid response.
    pub fn json(&self) -> Result<ServiceResponse, DecodeError> {
        ServiceResponse::from_body(&self.body)
    }
}

/// Sends a built query to the routing server.
///
/// Implementations block until the request completes or the configured
/// timeout elapses. They must report a timeout as
/// [`TransportError::Timeout`] and a refused connection as
/// [`TransportError::NotRunning`]; retries are left to the caller.
pub trait Transport {
    /// Send `query` to the service path `uri`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request does not complete.
    fn send(&self, uri: &str, query: &Query) -> Result<RoutedResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, uri: &str, query: &Query) -> Result<RoutedResponse, TransportError> {
        (**self).send(uri, query)
    }
}
