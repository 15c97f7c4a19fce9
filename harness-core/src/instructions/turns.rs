//! Turn tokens.

use super::model::{Maneuver, RouteInstructions, Step};

/// `"<type> <modifier>"`, or the type alone when there is no modifier.
fn with_modifier(maneuver: &Maneuver) -> String {
    maneuver.modifier.as_deref().map_or_else(
        || maneuver.kind.clone(),
        |modifier| format!("{} {modifier}", maneuver.kind),
    )
}

fn exit_label(maneuver: &Maneuver) -> String {
    maneuver.exit.map(|exit| exit.to_string()).unwrap_or_default()
}

/// Token describing the maneuver that starts `step`.
///
/// # Examples
///
/// ```
/// use harness_core::instructions::{Step, turn_token};
///
/// let step: Step = serde_json::from_str(
///     r#"{"maneuver": {"type": "roundabout", "exit": 2, "location": [0, 0]}}"#,
/// )?;
/// assert_eq!(turn_token(&step), "roundabout-exit-2");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[must_use]
pub fn turn_token(step: &Step) -> String {
    let maneuver = &step.maneuver;
    match maneuver.kind.as_str() {
        "depart" | "arrive" => maneuver.kind.clone(),
        "roundabout" => format!("roundabout-exit-{}", exit_label(maneuver)),
        "rotary" => format!(
            "{}-exit-{}",
            step.rotary_name.as_deref().unwrap_or("rotary"),
            exit_label(maneuver)
        ),
        "roundabout turn" => format!(
            "{} exit-{}",
            with_modifier(maneuver),
            exit_label(maneuver)
        ),
        // On and off ramps use the generic form too. Merge and fork get no
        // finer treatment than any other turn.
        _ => with_modifier(maneuver),
    }
}

/// Turn tokens for every step, joined with `,`.
#[must_use]
pub fn turn_list(instructions: &RouteInstructions) -> String {
    instructions
        .steps()
        .map(turn_token)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn step(maneuver: serde_json::Value) -> Step {
        serde_json::from_value(json!({ "maneuver": maneuver })).expect("step should deserialise")
    }

    #[rstest]
    #[case(json!({"type": "depart", "modifier": "left", "location": [0, 0]}), "depart")]
    #[case(json!({"type": "arrive", "location": [0, 0]}), "arrive")]
    #[case(json!({"type": "on ramp", "modifier": "slight right", "location": [0, 0]}), "on ramp slight right")]
    #[case(json!({"type": "off ramp", "modifier": "right", "location": [0, 0]}), "off ramp right")]
    #[case(json!({"type": "roundabout", "modifier": "left", "exit": 2, "location": [0, 0]}), "roundabout-exit-2")]
    #[case(json!({"type": "rotary", "exit": 1, "location": [0, 0]}), "rotary-exit-1")]
    #[case(json!({"type": "roundabout turn", "modifier": "left", "exit": 1, "location": [0, 0]}), "roundabout turn left exit-1")]
    #[case(json!({"type": "merge", "modifier": "slight left", "location": [0, 0]}), "merge slight left")]
    #[case(json!({"type": "fork", "modifier": "right", "location": [0, 0]}), "fork right")]
    #[case(json!({"type": "new name", "location": [0, 0]}), "new name")]
    fn tokens_by_maneuver_type(#[case] maneuver: serde_json::Value, #[case] expected: &str) {
        assert_eq!(turn_token(&step(maneuver)), expected);
    }

    #[rstest]
    fn named_rotary_uses_its_name() {
        let named: Step = serde_json::from_value(json!({
            "rotary_name": "Grand Circle",
            "maneuver": {"type": "rotary", "exit": 3, "location": [0, 0]}
        }))
        .expect("step should deserialise");

        assert_eq!(turn_token(&named), "Grand Circle-exit-3");
    }

    #[rstest]
    fn missing_exit_renders_empty() {
        assert_eq!(
            turn_token(&step(json!({"type": "roundabout", "location": [0, 0]}))),
            "roundabout-exit-"
        );
    }

    #[rstest]
    fn joins_tokens_across_legs() {
        let instructions: RouteInstructions = serde_json::from_value(json!({
            "legs": [
                {"steps": [
                    {"maneuver": {"type": "depart", "location": [0, 0]}},
                    {"maneuver": {"type": "turn", "modifier": "left", "location": [0, 0]}},
                    {"maneuver": {"type": "arrive", "location": [0, 0]}}
                ]},
                {"steps": [
                    {"maneuver": {"type": "depart", "location": [0, 0]}},
                    {"maneuver": {"type": "arrive", "location": [0, 0]}}
                ]}
            ]
        }))
        .expect("instructions should deserialise");

        assert_eq!(
            turn_list(&instructions),
            "depart,turn left,arrive,depart,arrive"
        );
    }
}
