//! HTTP transport for driving a local `osrm-routed` instance.
//!
//! # Responsibilities
//!
//! - Implement [`harness_core::Transport`] over `reqwest` with a bounded
//!   per-request timeout.
//! - Classify failures into [`harness_core::TransportError`]: a timeout
//!   reports status 408, a refused connection reports that the server is not
//!   running, and anything else surfaces as a network error.
//!
//! # Boundaries
//!
//! - Request construction and response decoding live in `harness-core`.
//! - Starting and stopping the routing server is the caller's job.

#![forbid(unsafe_code)]

mod client;
mod config;
#[doc(hidden)]
pub mod test_support;

pub use client::{ClientBuildError, RoutedClient};
pub use config::{DEFAULT_USER_AGENT, RoutedClientConfig};
