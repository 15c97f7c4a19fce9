//! Request encoding and response decoding for the OSRM routing service.
//!
//! Responsibilities:
//! - Build queries for the `route`, `nearest`, `table`, `trip` and `match`
//!   operations, merging caller options over per-operation defaults.
//! - Resolve service paths against an [`EndpointConfig`].
//! - Flatten route instruction documents into one-line views for test
//!   oracles (see [`instructions`]).
//!
//! Boundaries:
//! - No network I/O happens here; requests go through a [`Transport`]
//!   implementation supplied by the caller.
//!
//! Invariants:
//! - Builders and decoders are pure and hold no shared state.
//! - Every list view walks legs in order, then steps within a leg in order.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod error;
mod format;
pub mod instructions;
mod options;
mod query;
mod request;
mod response;
mod session;
mod transport;
mod waypoint;

pub use config::{DEFAULT_HOST, DEFAULT_PROFILE, EndpointConfig};
pub use error::{ConfigError, DecodeError, RequestError, TransportError, ValidationError};
pub use format::format_decimal;
pub use options::QueryOptions;
pub use query::{Query, QueryValue, compose_url, overwrite_params};
pub use request::{
    DEFAULT_BEARING_RANGE, Operation, ServiceRequest, request_matching, request_nearest,
    request_route, request_table, request_timestamp, request_trip,
};
pub use response::{ServiceResponse, SnappedWaypoint};
pub use session::Session;
pub use transport::{RoutedResponse, Transport};
pub use waypoint::{TableWaypoint, Waypoint, WaypointKind, encode_waypoints};
