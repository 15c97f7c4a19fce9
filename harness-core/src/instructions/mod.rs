//! Flatten route instruction documents into one-line views.
//!
//! The views are built for equality checks in test oracles, so their layout
//! is part of the contract:
//!
//! - list views walk legs in order and steps within each leg in order, and
//!   join one token per step with `,`;
//! - [`intersection_list`] joins the intersections of a step with `,` and the
//!   steps with `;`;
//! - views taking `Option<&RouteInstructions>` yield `None` for a missing
//!   document instead of failing, except [`weight_name`], which yields an
//!   empty string.

mod aggregate;
mod extract;
mod model;
mod turns;

pub use aggregate::{
    AnnotationSummary, NodeLookup, alternatives_list, annotation_list, intersection_list,
    locations, summary, weight_name,
};
pub use extract::{
    approach_list, bearing_list, destinations_list, distance_list, extract_instruction_list,
    lanes_list, mode_list, pronunciation_list, ref_list, reverse_bearing, time_list, way_list,
    weight_list,
};
pub use model::{Intersection, Lane, Leg, Maneuver, RouteInstructions, Step, Tracepoint};
pub use turns::{turn_list, turn_token};
