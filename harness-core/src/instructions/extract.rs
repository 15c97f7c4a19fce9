//! Per-step list views.
//!
//! Every view here is a projection of one step onto a string, applied to all
//! steps in leg-then-step order and joined with `,`. A missing document
//! yields `None` rather than an error.

use crate::format::format_decimal;

use super::model::{Lane, RouteInstructions, Step};

/// Project every step through `key` and join the results with `,`.
///
/// Returns `None` when `instructions` is `None`.
///
/// # Examples
///
/// ```
/// use harness_core::instructions::{RouteInstructions, extract_instruction_list};
///
/// let instructions: RouteInstructions = serde_json::from_str(r#"{
///     "legs": [{"steps": [
///         {"name": "Main", "maneuver": {"type": "depart", "location": [0, 0]}},
///         {"name": "", "maneuver": {"type": "arrive", "location": [1, 1]}}
///     ]}]
/// }"#)?;
/// let names = extract_instruction_list(Some(&instructions), |step| step.name.clone());
/// assert_eq!(names.as_deref(), Some("Main,"));
/// assert_eq!(extract_instruction_list(None, |step| step.name.clone()), None);
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn extract_instruction_list<F>(instructions: Option<&RouteInstructions>, key: F) -> Option<String>
where
    F: FnMut(&Step) -> String,
{
    instructions.map(|document| {
        document
            .steps()
            .map(key)
            .collect::<Vec<_>>()
            .join(",")
    })
}

fn optional(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

/// Way names.
#[must_use]
pub fn way_list(instructions: Option<&RouteInstructions>) -> Option<String> {
    extract_instruction_list(instructions, |step| step.name.clone())
}

/// Road references; steps without one contribute an empty token.
#[must_use]
pub fn ref_list(instructions: Option<&RouteInstructions>) -> Option<String> {
    extract_instruction_list(instructions, |step| optional(step.reference.as_ref()))
}

/// Pronunciations; steps without one contribute an empty token.
#[must_use]
pub fn pronunciation_list(instructions: Option<&RouteInstructions>) -> Option<String> {
    extract_instruction_list(instructions, |step| optional(step.pronunciation.as_ref()))
}

/// Destinations; steps without one contribute an empty token.
#[must_use]
pub fn destinations_list(instructions: Option<&RouteInstructions>) -> Option<String> {
    extract_instruction_list(instructions, |step| optional(step.destinations.as_ref()))
}

/// Approaches; steps without one contribute an empty token.
#[must_use]
pub fn approach_list(instructions: Option<&RouteInstructions>) -> Option<String> {
    extract_instruction_list(instructions, |step| optional(step.approaches.as_ref()))
}

/// Modes of transportation.
#[must_use]
pub fn mode_list(instructions: Option<&RouteInstructions>) -> Option<String> {
    extract_instruction_list(instructions, |step| step.mode.clone())
}

/// Durations suffixed with `s`.
#[must_use]
pub fn time_list(instructions: Option<&RouteInstructions>) -> Option<String> {
    extract_instruction_list(instructions, |step| {
        format!("{}s", format_decimal(step.duration))
    })
}

/// Distances suffixed with `m`.
#[must_use]
pub fn distance_list(instructions: Option<&RouteInstructions>) -> Option<String> {
    extract_instruction_list(instructions, |step| {
        format!("{}m", format_decimal(step.distance))
    })
}

/// Step weights.
#[must_use]
pub fn weight_list(instructions: Option<&RouteInstructions>) -> Option<String> {
    extract_instruction_list(instructions, |step| format_decimal(step.weight))
}

/// Reverse a bearing by 180 degrees.
///
/// An incoming bearing points into the intersection; reversing it gives the
/// direction of travel as seen from the previous step.
///
/// # Examples
///
/// ```
/// use harness_core::instructions::reverse_bearing;
///
/// assert_eq!(reverse_bearing(90.0), 270.0);
/// assert_eq!(reverse_bearing(200.0), 20.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "bearing reversal is a float offset in degrees"
)]
pub const fn reverse_bearing(bearing: f64) -> f64 {
    if bearing >= 180.0 {
        bearing - 180.0
    } else {
        bearing + 180.0
    }
}

/// `"<in>-><out>"` at the step's first intersection.
///
/// The incoming bearing is reversed. A missing `in` or `out` index, or one
/// outside the bearing list, renders that side as `0`.
fn step_bearings(step: &Step) -> String {
    let first = step.intersections.first();
    let incoming = first
        .and_then(|intersection| intersection.bearing_at(intersection.incoming))
        .map_or(0.0, reverse_bearing);
    let outgoing = first
        .and_then(|intersection| intersection.bearing_at(intersection.outgoing))
        .unwrap_or(0.0);
    format!(
        "{}->{}",
        format_decimal(incoming),
        format_decimal(outgoing)
    )
}

/// Bearing pairs per step.
#[must_use]
pub fn bearing_list(instructions: Option<&RouteInstructions>) -> Option<String> {
    extract_instruction_list(instructions, step_bearings)
}

fn describe_lane(lane: &Lane) -> String {
    format!("{}:{}", lane.indications.join(";"), lane.valid)
}

/// Lanes of the step's first intersection, space-joined.
fn step_lanes(step: &Step) -> String {
    step.intersections
        .first()
        .and_then(|intersection| intersection.lanes.as_deref())
        .map_or_else(String::new, |lanes| {
            lanes
                .iter()
                .map(describe_lane)
                .collect::<Vec<_>>()
                .join(" ")
        })
}

/// Turn lanes per step; steps without lanes contribute an empty token.
#[must_use]
pub fn lanes_list(instructions: Option<&RouteInstructions>) -> Option<String> {
    extract_instruction_list(instructions, step_lanes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn instructions() -> RouteInstructions {
        serde_json::from_str(
            r#"{
                "legs": [
                    {"steps": [
                        {"name": "Main Street", "ref": "B 1", "mode": "driving",
                         "duration": 12.5, "distance": 100, "weight": 13.1,
                         "maneuver": {"type": "depart", "location": [1, 1]},
                         "intersections": [{"entry": [true], "bearings": [90], "out": 0}]},
                        {"name": "Side Street", "mode": "driving",
                         "duration": 0, "distance": 0, "weight": 0,
                         "maneuver": {"type": "arrive", "location": [2, 1]},
                         "intersections": [{"entry": [true], "bearings": [270], "in": 0}]}
                    ]},
                    {"steps": [
                        {"name": "Ferry", "pronunciation": "fe-ri", "destinations": "Harbour",
                         "approaches": "curb", "mode": "ferry", "duration": 60, "distance": 1500.25, "weight": 60,
                         "maneuver": {"type": "depart", "location": [2, 1]},
                         "intersections": [{"entry": [true, false], "bearings": [10, 200],
                                            "in": 1, "out": 0,
                                            "lanes": [{"indications": ["left", "straight"], "valid": true},
                                                      {"indications": ["right"], "valid": false}]}]}
                    ]}
                ]
            }"#,
        )
        .expect("fixture should deserialise")
    }

    #[rstest]
    fn absent_document_yields_none() {
        assert_eq!(way_list(None), None);
        assert_eq!(bearing_list(None), None);
        assert_eq!(lanes_list(None), None);
    }

    #[rstest]
    fn walks_legs_then_steps(instructions: RouteInstructions) {
        assert_eq!(
            way_list(Some(&instructions)).as_deref(),
            Some("Main Street,Side Street,Ferry")
        );
        assert_eq!(
            mode_list(Some(&instructions)).as_deref(),
            Some("driving,driving,ferry")
        );
    }

    #[rstest]
    fn optional_fields_become_empty_tokens(instructions: RouteInstructions) {
        assert_eq!(ref_list(Some(&instructions)).as_deref(), Some("B 1,,"));
        assert_eq!(pronunciation_list(Some(&instructions)).as_deref(), Some(",,fe-ri"));
        assert_eq!(destinations_list(Some(&instructions)).as_deref(), Some(",,Harbour"));
        assert_eq!(approach_list(Some(&instructions)).as_deref(), Some(",,curb"));
    }

    #[rstest]
    fn numeric_lists_use_plain_decimals(instructions: RouteInstructions) {
        assert_eq!(time_list(Some(&instructions)).as_deref(), Some("12.5s,0s,60s"));
        assert_eq!(
            distance_list(Some(&instructions)).as_deref(),
            Some("100m,0m,1500.25m")
        );
        assert_eq!(weight_list(Some(&instructions)).as_deref(), Some("13.1,0,60"));
    }

    #[rstest]
    #[case(90.0, 270.0)]
    #[case(200.0, 20.0)]
    #[case(180.0, 0.0)]
    #[case(0.0, 180.0)]
    fn reverses_bearings(#[case] bearing: f64, #[case] expected: f64) {
        assert_eq!(reverse_bearing(bearing), expected);
    }

    #[rstest]
    fn bearings_default_missing_sides_to_zero(instructions: RouteInstructions) {
        assert_eq!(
            bearing_list(Some(&instructions)).as_deref(),
            Some("0->90,90->0,20->10")
        );
    }

    #[rstest]
    fn out_of_range_index_counts_as_missing() {
        let step: Step = serde_json::from_value(serde_json::json!({
            "maneuver": {"type": "turn", "location": [0, 0]},
            "intersections": [{"entry": [true], "bearings": [45], "in": 3, "out": 0}]
        }))
        .expect("step should deserialise");

        assert_eq!(step_bearings(&step), "0->45");
    }

    #[rstest]
    fn step_without_intersections_has_neutral_views() {
        let step: Step = serde_json::from_value(serde_json::json!({
            "maneuver": {"type": "turn", "location": [0, 0]}
        }))
        .expect("step should deserialise");

        assert_eq!(step_bearings(&step), "0->0");
        assert_eq!(step_lanes(&step), "");
    }

    #[rstest]
    fn lanes_describe_first_intersection(instructions: RouteInstructions) {
        assert_eq!(
            lanes_list(Some(&instructions)).as_deref(),
            Some(",,left;straight:true right:false")
        );
    }
}
