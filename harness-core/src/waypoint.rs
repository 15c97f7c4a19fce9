//! Waypoints and their coordinate encoding.

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::format::format_decimal;

/// A longitude/latitude pair sent to the routing server.
///
/// # Examples
///
/// ```
/// use harness_core::Waypoint;
///
/// let waypoint = Waypoint::new(13.0, 52.5);
/// assert_eq!(waypoint.encode(), "13,52.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

impl Waypoint {
    /// Create a waypoint from longitude and latitude.
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Encode as `"<lon>,<lat>"` using [`format_decimal`].
    #[must_use]
    pub fn encode(&self) -> String {
        format!("{},{}", format_decimal(self.lon), format_decimal(self.lat))
    }
}

impl From<Coord> for Waypoint {
    fn from(coord: Coord) -> Self {
        Self::new(coord.x, coord.y)
    }
}

impl From<Waypoint> for Coord {
    fn from(waypoint: Waypoint) -> Self {
        Self {
            x: waypoint.lon,
            y: waypoint.lat,
        }
    }
}

/// Role of a waypoint in a table request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaypointKind {
    /// The waypoint is a row of the matrix.
    #[serde(rename = "src")]
    Source,
    /// The waypoint is a column of the matrix.
    #[serde(rename = "dst")]
    Destination,
}

/// A waypoint tagged for the table operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableWaypoint {
    /// Position of the waypoint.
    pub coord: Waypoint,
    /// Optional source/destination tag.
    #[serde(rename = "type", default)]
    pub kind: Option<WaypointKind>,
}

impl TableWaypoint {
    /// Untagged waypoint; it participates in neither index list.
    #[must_use]
    pub const fn new(coord: Waypoint) -> Self {
        Self { coord, kind: None }
    }

    /// Waypoint listed in `sources`.
    #[must_use]
    pub const fn source(coord: Waypoint) -> Self {
        Self {
            coord,
            kind: Some(WaypointKind::Source),
        }
    }

    /// Waypoint listed in `destinations`.
    #[must_use]
    pub const fn destination(coord: Waypoint) -> Self {
        Self {
            coord,
            kind: Some(WaypointKind::Destination),
        }
    }
}

/// Encode every waypoint as `"<lon>,<lat>"`, preserving order.
///
/// # Examples
///
/// ```
/// use harness_core::{Waypoint, encode_waypoints};
///
/// let encoded = encode_waypoints(&[Waypoint::new(13.0, 52.0), Waypoint::new(13.0001, 52.5)]);
/// assert_eq!(encoded, vec!["13,52", "13.0001,52.5"]);
/// ```
#[must_use]
pub fn encode_waypoints(waypoints: &[Waypoint]) -> Vec<String> {
    waypoints.iter().map(Waypoint::encode).collect()
}
