//! OSRM service response envelope.
//!
//! The envelope is shared by all operations; each fills in the fields that
//! belong to it. See: <http://project-osrm.org/docs/v5.24.0/api/#responses>

use serde::Deserialize;

use crate::error::DecodeError;
use crate::instructions::{RouteInstructions, Tracepoint};

/// A waypoint snapped by the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SnappedWaypoint {
    /// Name of the street the waypoint snapped to.
    #[serde(default)]
    pub name: String,
    /// `[lon, lat]` of the snapped position.
    pub location: [f64; 2],
    /// Distance in metres from the input coordinate.
    #[serde(default)]
    pub distance: Option<f64>,
    /// Opaque hint for follow-up queries.
    #[serde(default)]
    pub hint: Option<String>,
}

/// Response body of any routing service operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceResponse {
    /// Status code, `"Ok"` on success.
    pub code: String,
    /// Error description when `code` is not `"Ok"`.
    #[serde(default)]
    pub message: Option<String>,
    /// Routes of a `route` response.
    #[serde(default)]
    pub routes: Vec<RouteInstructions>,
    /// Matchings of a `match` response.
    #[serde(default)]
    pub matchings: Vec<RouteInstructions>,
    /// Trips of a `trip` response.
    #[serde(default)]
    pub trips: Vec<RouteInstructions>,
    /// Tracepoints of a `match` response; `null` marks unmatched input.
    #[serde(default)]
    pub tracepoints: Option<Vec<Option<Tracepoint>>>,
    /// Snapped input waypoints.
    #[serde(default)]
    pub waypoints: Vec<SnappedWaypoint>,
    /// Duration matrix of a `table` response; `null` marks unreachable pairs.
    #[serde(default)]
    pub durations: Option<Vec<Vec<Option<f64>>>>,
    /// Distance matrix of a `table` response.
    #[serde(default)]
    pub distances: Option<Vec<Vec<Option<f64>>>>,
}

impl ServiceResponse {
    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Json`] when the body is not a valid response.
    pub fn from_body(body: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }

    /// The `index`-th route, matching or trip, whichever the response holds.
    ///
    /// Top-level tracepoints are attached so that
    /// [`alternatives_list`](crate::instructions::alternatives_list) works on
    /// match results.
    #[must_use]
    pub fn instructions(&self, index: usize) -> Option<RouteInstructions> {
        let route = self
            .routes
            .get(index)
            .or_else(|| self.matchings.get(index))
            .or_else(|| self.trips.get(index))?;
        let mut instructions = route.clone();
        if instructions.tracepoints.is_none() {
            instructions.tracepoints.clone_from(&self.tracepoints);
        }
        Some(instructions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn deserialise_route_response() {
        let json = r#"{
            "code": "Ok",
            "routes": [{
                "distance": 10.5,
                "weight_name": "routability",
                "legs": [{"summary": "Main", "steps": []}]
            }],
            "waypoints": [{"name": "Main", "location": [1.0, 2.0], "hint": "abc"}]
        }"#;

        let response = ServiceResponse::from_body(json).expect("should deserialise");

        assert!(response.is_ok());
        let instructions = response.instructions(0).expect("should hold a route");
        assert_eq!(instructions.weight_name.as_deref(), Some("routability"));
        assert_eq!(instructions.tracepoints, None);
        assert_eq!(response.waypoints[0].name, "Main");
        assert!(response.instructions(1).is_none());
    }

    #[rstest]
    fn matchings_carry_tracepoints() {
        let json = r#"{
            "code": "Ok",
            "matchings": [{"legs": []}],
            "tracepoints": [{"alternatives_count": 1}, null]
        }"#;

        let response = ServiceResponse::from_body(json).expect("should deserialise");
        let instructions = response.instructions(0).expect("should hold a matching");

        let tracepoints = instructions.tracepoints.expect("tracepoints attached");
        assert_eq!(tracepoints.len(), 2);
        assert!(tracepoints[1].is_none());
    }

    #[rstest]
    fn deserialise_error_response() {
        let json = r#"{"code": "InvalidQuery", "message": "Query string malformed"}"#;

        let response = ServiceResponse::from_body(json).expect("should deserialise");

        assert!(!response.is_ok());
        assert_eq!(response.message.as_deref(), Some("Query string malformed"));
        assert!(response.instructions(0).is_none());
    }

    #[rstest]
    fn table_keeps_unreachable_pairs() {
        let json = r#"{"code": "Ok", "durations": [[0.0, null], [null, 0.0]]}"#;

        let response = ServiceResponse::from_body(json).expect("should deserialise");

        let durations = response.durations.expect("should have durations");
        assert_eq!(durations[0][1], None);
        assert_eq!(durations[1][1], Some(0.0));
    }

    #[rstest]
    fn malformed_body_is_a_json_error() {
        let err = ServiceResponse::from_body("<html>").expect_err("should fail");

        assert!(matches!(err, DecodeError::Json(_)));
    }
}
