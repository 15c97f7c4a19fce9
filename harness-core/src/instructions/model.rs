//! Serde model of the route instruction document.
//!
//! Only fields the decoders read are modelled; everything else in the
//! server's JSON is ignored. Optional fields stay `Option` because some
//! decoders distinguish "absent" from "empty".

use geo::Coord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One route (or matching, or trip) as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteInstructions {
    /// Legs between consecutive waypoints, in travel order.
    pub legs: Vec<Leg>,
    /// Snapped trace points; present on map-matching results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracepoints: Option<Vec<Option<Tracepoint>>>,
    /// Name of the weight metric used by the profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_name: Option<String>,
}

impl RouteInstructions {
    /// Every step of every leg, in leg-then-step order.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.legs.iter().flat_map(|leg| leg.steps.iter())
    }
}

/// Route segment between two waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Maneuver-level instructions.
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Names of the most significant roads on the leg.
    #[serde(default)]
    pub summary: String,
    /// Per-segment annotation arrays keyed by annotation name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<Map<String, Value>>,
}

/// A single instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Way name.
    #[serde(default)]
    pub name: String,
    /// Road reference, e.g. `A 100`.
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Pronunciation hint for the way name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    /// Signposted destinations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinations: Option<String>,
    /// Approach side used for the step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approaches: Option<String>,
    /// Name of the rotary being traversed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotary_name: Option<String>,
    /// Mode of transportation.
    #[serde(default)]
    pub mode: String,
    /// Travel time in seconds.
    #[serde(default)]
    pub duration: f64,
    /// Travel distance in metres.
    #[serde(default)]
    pub distance: f64,
    /// Profile weight.
    #[serde(default)]
    pub weight: f64,
    /// The maneuver that starts the step.
    pub maneuver: Maneuver,
    /// Intersections passed during the step.
    #[serde(default)]
    pub intersections: Vec<Intersection>,
}

/// Maneuver at the start of a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maneuver {
    /// Maneuver type, e.g. `turn`, `roundabout` or `arrive`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Direction modifier, e.g. `left`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
    /// `[lon, lat]` of the maneuver.
    pub location: [f64; 2],
    /// Exit number for roundabouts and rotaries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit: Option<u32>,
}

impl Maneuver {
    /// Location as a geo coordinate.
    #[must_use]
    pub const fn coord(&self) -> Coord {
        let [x, y] = self.location;
        Coord { x, y }
    }
}

/// A junction passed during a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    /// Whether each bearing may be entered.
    #[serde(default)]
    pub entry: Vec<bool>,
    /// Bearings of all roads at the junction, in degrees.
    #[serde(default)]
    pub bearings: Vec<f64>,
    /// Index into `bearings` of the road we arrive on.
    #[serde(rename = "in", default, skip_serializing_if = "Option::is_none")]
    pub incoming: Option<usize>,
    /// Index into `bearings` of the road we leave on.
    #[serde(rename = "out", default, skip_serializing_if = "Option::is_none")]
    pub outgoing: Option<usize>,
    /// Turn lanes, when tagged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lanes: Option<Vec<Lane>>,
}

impl Intersection {
    /// Bearing at `index`, if the index is set and in range.
    #[must_use]
    pub fn bearing_at(&self, index: Option<usize>) -> Option<f64> {
        index.and_then(|position| self.bearings.get(position).copied())
    }
}

/// One turn lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    /// Indicated directions, e.g. `left` or `straight`.
    #[serde(default)]
    pub indications: Vec<String>,
    /// Whether the lane can be used for the maneuver.
    pub valid: bool,
}

/// A trace point snapped to the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracepoint {
    /// Number of other candidates considered for this point.
    pub alternatives_count: u32,
    /// Index of the matching this point belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matchings_index: Option<usize>,
    /// Index of the point within its matching's waypoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoint_index: Option<usize>,
    /// `[lon, lat]` of the snapped point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<[f64; 2]>,
}
