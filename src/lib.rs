//! Facade crate for the `osrm-routed` test harness.
//!
//! This crate re-exports request construction and response decoding from
//! `harness-core`, and the HTTP transport behind the `http` feature.

#![forbid(unsafe_code)]

pub use harness_core::{
    ConfigError, DEFAULT_BEARING_RANGE, DEFAULT_HOST, DEFAULT_PROFILE, DecodeError,
    EndpointConfig, Operation, Query, QueryOptions, QueryValue, RequestError, RoutedResponse,
    ServiceRequest, ServiceResponse, Session, SnappedWaypoint, TableWaypoint, Transport,
    TransportError, ValidationError, Waypoint, WaypointKind, compose_url, encode_waypoints,
    format_decimal, instructions, overwrite_params, request_matching, request_nearest,
    request_route, request_table, request_timestamp, request_trip,
};

#[cfg(feature = "http")]
pub use harness_http::{ClientBuildError, DEFAULT_USER_AGENT, RoutedClient, RoutedClientConfig};
