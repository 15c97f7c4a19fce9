//! Document-level views that do not reduce to one token per step.

use std::collections::BTreeMap;

use geo::Coord;
use serde_json::Value;

use crate::error::DecodeError;
use crate::format::{format_decimal, format_number};

use super::model::{Intersection, RouteInstructions};

/// Merged annotation strings keyed by annotation name.
pub type AnnotationSummary = BTreeMap<String, String>;

/// Resolves a maneuver location to the name of a known node.
pub trait NodeLookup {
    /// Identifier of the node at `location`.
    fn find_node_by_location(&self, location: Coord) -> String;
}

impl<F> NodeLookup for F
where
    F: Fn(Coord) -> String,
{
    fn find_node_by_location(&self, location: Coord) -> String {
        self(location)
    }
}

/// Per-leg summaries joined with `;`; `None` when there is no document.
#[must_use]
pub fn summary(instructions: Option<&RouteInstructions>) -> Option<String> {
    instructions.map(|document| {
        document
            .legs
            .iter()
            .map(|leg| leg.summary.as_str())
            .collect::<Vec<_>>()
            .join(";")
    })
}

/// The weight name, or an empty string when absent.
#[must_use]
pub fn weight_name(instructions: Option<&RouteInstructions>) -> String {
    instructions
        .and_then(|document| document.weight_name.clone())
        .unwrap_or_default()
}

/// Node names at every maneuver location, joined with `,`.
#[must_use]
pub fn locations<L>(instructions: &RouteInstructions, lookup: &L) -> String
where
    L: NodeLookup + ?Sized,
{
    instructions
        .steps()
        .map(|step| lookup.find_node_by_location(step.maneuver.coord()))
        .collect::<Vec<_>>()
        .join(",")
}

/// `"<entry>:<bearing>"` pairs, space-joined.
fn describe_intersection(intersection: &Intersection) -> String {
    intersection
        .bearings
        .iter()
        .enumerate()
        .map(|(index, bearing)| {
            let entry = intersection.entry.get(index).copied().unwrap_or(false);
            format!("{entry}:{}", format_decimal(*bearing))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Intersections of each step joined with `,`; steps joined with `;`.
#[must_use]
pub fn intersection_list(instructions: &RouteInstructions) -> String {
    instructions
        .steps()
        .map(|step| {
            step.intersections
                .iter()
                .map(describe_intersection)
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join(";")
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => format_number(number),
        Value::String(text) => text.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// A list annotation is `:`-joined; anything else renders as a scalar.
fn render_annotation(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(render_scalar)
            .collect::<Vec<_>>()
            .join(":"),
        other => render_scalar(other),
    }
}

/// Merge leg annotations per key.
///
/// Returns `Ok(None)` when the first leg carries no annotation. Otherwise
/// every key seen on any leg maps to its per-leg values joined with `,` in
/// leg order; legs lacking a key contribute nothing to it.
///
/// # Errors
///
/// Returns [`DecodeError::NoLegs`] when the document has no legs.
pub fn annotation_list(
    instructions: &RouteInstructions,
) -> Result<Option<AnnotationSummary>, DecodeError> {
    let first = instructions.legs.first().ok_or(DecodeError::NoLegs)?;
    if first.annotation.is_none() {
        return Ok(None);
    }

    let mut merged: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for annotation in instructions
        .legs
        .iter()
        .filter_map(|leg| leg.annotation.as_ref())
    {
        for (key, value) in annotation {
            merged
                .entry(key.clone())
                .or_default()
                .push(render_annotation(value));
        }
    }

    Ok(Some(
        merged
            .into_iter()
            .map(|(key, parts)| (key, parts.join(",")))
            .collect(),
    ))
}

/// Alternative counts of every tracepoint, joined with `,`.
///
/// Unmatched (`null`) tracepoints contribute an empty token.
///
/// # Errors
///
/// Returns [`DecodeError::MissingTracepoints`] when the document has no
/// tracepoints.
pub fn alternatives_list(instructions: &RouteInstructions) -> Result<String, DecodeError> {
    let tracepoints = instructions
        .tracepoints
        .as_deref()
        .ok_or(DecodeError::MissingTracepoints)?;
    Ok(tracepoints
        .iter()
        .map(|tracepoint| {
            tracepoint
                .as_ref()
                .map(|point| point.alternatives_count.to_string())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(","))
}
