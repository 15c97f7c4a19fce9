//! Query construction for the routing service operations.
//!
//! Each builder overlays the caller's [`QueryOptions`] on the operation's
//! default set and then writes the derived fields (coordinates, bearings,
//! approaches, timestamps, source and destination indices). Builders are pure
//! and return a [`ServiceRequest`] that still has to be dispatched.

use std::fmt;

use crate::config::EndpointConfig;
use crate::error::ValidationError;
use crate::options::QueryOptions;
use crate::query::{COORDINATES, OUTPUT, Query, compose_url, overwrite_params};
use crate::waypoint::{TableWaypoint, Waypoint, WaypointKind, encode_waypoints};

/// Bearing range appended when a bearing has no explicit range.
pub const DEFAULT_BEARING_RANGE: u16 = 10;

/// Service operations exposed by the routing server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Shortest path between waypoints.
    Route,
    /// Snap a coordinate to the network.
    Nearest,
    /// Duration matrix between waypoints.
    Table,
    /// Travelling-salesman tour.
    Trip,
    /// Map matching of a trace.
    Match,
    /// Data timestamp of the loaded dataset.
    Timestamp,
}

impl Operation {
    /// Service name as used in the URL.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Route => "route",
            Self::Nearest => "nearest",
            Self::Table => "table",
            Self::Trip => "trip",
            Self::Match => "match",
            Self::Timestamp => "timestamp",
        }
    }

    /// Resolve the service path.
    ///
    /// `timestamp` lives directly below the host; every other operation is
    /// versioned and profile-scoped: `<host>/<operation>/v1/<profile>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use harness_core::{EndpointConfig, Operation};
    ///
    /// let endpoint = EndpointConfig::new("http://127.0.0.1:5000").with_profile("car");
    /// assert_eq!(Operation::Timestamp.path(&endpoint), "http://127.0.0.1:5000/timestamp");
    /// assert_eq!(Operation::Match.path(&endpoint), "http://127.0.0.1:5000/match/v1/car");
    /// ```
    #[must_use]
    pub fn path(self, endpoint: &EndpointConfig) -> String {
        match self {
            Self::Timestamp => format!("{}/{}", endpoint.base(), self.as_str()),
            _ => format!(
                "{}/{}/v1/{}",
                endpoint.base(),
                self.as_str(),
                endpoint.profile
            ),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built query addressed to one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRequest {
    /// Target operation.
    pub operation: Operation,
    /// Merged parameters.
    pub query: Query,
}

impl ServiceRequest {
    /// Pair an operation with its query.
    #[must_use]
    pub const fn new(operation: Operation, query: Query) -> Self {
        Self { operation, query }
    }

    /// Service path for this request.
    #[must_use]
    pub fn path(&self, endpoint: &EndpointConfig) -> String {
        self.operation.path(endpoint)
    }

    /// Complete URL including the encoded query.
    #[must_use]
    pub fn url(&self, endpoint: &EndpointConfig) -> String {
        compose_url(&self.path(endpoint), &self.query)
    }
}

fn json_defaults() -> Query {
    Query::new().with(OUTPUT, "json")
}

fn merged(defaults: &Query, options: &QueryOptions) -> Query {
    overwrite_params(defaults, &options.to_overrides())
}

/// Append the default range to bearings given as a bare value.
fn normalise_bearing(bearing: &str) -> String {
    if bearing.split(',').count() == 2 {
        bearing.to_owned()
    } else {
        format!("{bearing},{DEFAULT_BEARING_RANGE}")
    }
}

/// Build a `route` request.
///
/// Defaults are `output=json`, `steps=true` and `alternatives=false`.
/// Bearings lacking a range get `,10`; bearings and approaches are written
/// `;`-joined. Empty slices leave the respective parameter unset.
///
/// # Errors
///
/// Returns [`ValidationError`] when a non-empty `bearings` or `approaches`
/// slice does not hold exactly one entry per waypoint.
///
/// # Examples
///
/// ```
/// use harness_core::{QueryOptions, Waypoint, request_route};
///
/// let waypoints = [Waypoint::new(1.0, 1.0), Waypoint::new(2.0, 2.0)];
/// let request = request_route(&waypoints, &["90", "180,20"], &[] as &[&str], &QueryOptions::default())?;
/// assert_eq!(
///     request.query.get("bearings").map(ToString::to_string).as_deref(),
///     Some("90,10;180,20")
/// );
/// # Ok::<(), harness_core::ValidationError>(())
/// ```
pub fn request_route<B, A>(
    waypoints: &[Waypoint],
    bearings: &[B],
    approaches: &[A],
    options: &QueryOptions,
) -> Result<ServiceRequest, ValidationError>
where
    B: AsRef<str>,
    A: AsRef<str>,
{
    if !bearings.is_empty() && bearings.len() != waypoints.len() {
        return Err(ValidationError::BearingCountMismatch {
            bearings: bearings.len(),
            waypoints: waypoints.len(),
        });
    }
    if !approaches.is_empty() && approaches.len() != waypoints.len() {
        return Err(ValidationError::ApproachCountMismatch {
            approaches: approaches.len(),
            waypoints: waypoints.len(),
        });
    }

    let defaults = json_defaults()
        .with("steps", "true")
        .with("alternatives", "false");
    let mut query = merged(&defaults, options);
    query.insert(COORDINATES, encode_waypoints(waypoints));

    if !bearings.is_empty() {
        let normalised: Vec<String> = bearings
            .iter()
            .map(|bearing| normalise_bearing(bearing.as_ref()))
            .collect();
        query.insert("bearings", normalised.join(";"));
    }
    if !approaches.is_empty() {
        let joined: Vec<&str> = approaches.iter().map(AsRef::as_ref).collect();
        query.insert("approaches", joined.join(";"));
    }

    Ok(ServiceRequest::new(Operation::Route, query))
}

/// Build a `nearest` request for a single coordinate.
#[must_use]
pub fn request_nearest(node: Waypoint, options: &QueryOptions) -> ServiceRequest {
    let mut query = merged(&json_defaults(), options);
    query.insert(COORDINATES, vec![node.encode()]);
    ServiceRequest::new(Operation::Nearest, query)
}

/// Indices of the waypoints tagged `kind`, `;`-joined, or `None` if there
/// are none.
fn tagged_indices(waypoints: &[TableWaypoint], kind: WaypointKind) -> Option<String> {
    let indices: Vec<String> = waypoints
        .iter()
        .enumerate()
        .filter(|(_, waypoint)| waypoint.kind == Some(kind))
        .map(|(index, _)| index.to_string())
        .collect();
    (!indices.is_empty()).then(|| indices.join(";"))
}

/// Build a `table` request.
///
/// Waypoints tagged [`WaypointKind::Source`] populate `sources`, those tagged
/// [`WaypointKind::Destination`] populate `destinations`. A partition with no
/// members leaves its key out entirely.
///
/// # Examples
///
/// ```
/// use harness_core::{QueryOptions, TableWaypoint, Waypoint, request_table};
///
/// let point = Waypoint::new(1.0, 1.0);
/// let waypoints = [TableWaypoint::source(point), TableWaypoint::source(point)];
/// let request = request_table(&waypoints, &QueryOptions::default());
/// assert!(request.query.contains_key("sources"));
/// assert!(!request.query.contains_key("destinations"));
/// ```
#[must_use]
pub fn request_table(waypoints: &[TableWaypoint], options: &QueryOptions) -> ServiceRequest {
    let mut query = merged(&json_defaults(), options);
    let coordinates: Vec<String> = waypoints
        .iter()
        .map(|waypoint| waypoint.coord.encode())
        .collect();
    query.insert(COORDINATES, coordinates);
    if let Some(sources) = tagged_indices(waypoints, WaypointKind::Source) {
        query.insert("sources", sources);
    }
    if let Some(destinations) = tagged_indices(waypoints, WaypointKind::Destination) {
        query.insert("destinations", destinations);
    }
    ServiceRequest::new(Operation::Table, query)
}

/// Build a `trip` request.
#[must_use]
pub fn request_trip(waypoints: &[Waypoint], options: &QueryOptions) -> ServiceRequest {
    let mut query = merged(&json_defaults(), options);
    query.insert(COORDINATES, encode_waypoints(waypoints));
    ServiceRequest::new(Operation::Trip, query)
}

/// Build a `match` request; non-empty `timestamps` are written `;`-joined.
#[must_use]
pub fn request_matching(
    waypoints: &[Waypoint],
    timestamps: &[u64],
    options: &QueryOptions,
) -> ServiceRequest {
    let mut query = merged(&json_defaults(), options);
    query.insert(COORDINATES, encode_waypoints(waypoints));
    if !timestamps.is_empty() {
        let joined: Vec<String> = timestamps.iter().map(ToString::to_string).collect();
        query.insert("timestamps", joined.join(";"));
    }
    ServiceRequest::new(Operation::Match, query)
}

/// Build a `timestamp` request; it takes no parameters.
#[must_use]
pub const fn request_timestamp() -> ServiceRequest {
    ServiceRequest::new(Operation::Timestamp, Query::new())
}
