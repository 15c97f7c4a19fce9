//! Behavioural tests for the instruction decoders against recorded responses.

use std::cell::RefCell;

use harness_core::ServiceResponse;
use harness_core::instructions::{
    RouteInstructions, alternatives_list, annotation_list, approach_list, bearing_list,
    intersection_list, lanes_list, mode_list, summary, turn_list, way_list, weight_name,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const TWO_LEG_ROUTE: &str = include_str!("fixtures/two_leg_route.json");
const MATCH_WITH_GAP: &str = include_str!("fixtures/match_with_gap.json");

#[fixture]
fn response() -> RefCell<Option<ServiceResponse>> {
    RefCell::new(None)
}

#[fixture]
fn decoded() -> RefCell<Option<RouteInstructions>> {
    RefCell::new(None)
}

fn parse(body: &str) -> ServiceResponse {
    ServiceResponse::from_body(body).expect("fixture should parse")
}

fn instructions(decoded: &RefCell<Option<RouteInstructions>>) -> RouteInstructions {
    decoded
        .borrow()
        .clone()
        .expect("instructions must have been decoded")
}

// --- Given steps ---

#[given("a two-leg route response")]
fn two_leg_route(#[from(response)] response: &RefCell<Option<ServiceResponse>>) {
    *response.borrow_mut() = Some(parse(TWO_LEG_ROUTE));
}

#[given("a match response with an unmatched tracepoint")]
fn match_with_gap(#[from(response)] response: &RefCell<Option<ServiceResponse>>) {
    *response.borrow_mut() = Some(parse(MATCH_WITH_GAP));
}

#[given("no response")]
fn no_response(#[from(response)] response: &RefCell<Option<ServiceResponse>>) {
    *response.borrow_mut() = None;
}

// --- When steps ---

#[when("I decode the first route")]
fn decode_first(
    #[from(response)] response: &RefCell<Option<ServiceResponse>>,
    #[from(decoded)] decoded: &RefCell<Option<RouteInstructions>>,
) {
    *decoded.borrow_mut() = response
        .borrow()
        .as_ref()
        .and_then(|parsed| parsed.instructions(0));
}

// --- Then steps ---

#[then("the way, turn and mode lists follow leg then step order")]
fn then_ordered_lists(#[from(decoded)] decoded: &RefCell<Option<RouteInstructions>>) {
    let route = instructions(decoded);
    assert_eq!(
        way_list(Some(&route)).as_deref(),
        Some("Main Street,Main Street,High Road,Harbour Way,Harbour Way")
    );
    assert_eq!(turn_list(&route), "depart,arrive,depart,turn right,arrive");
    assert_eq!(
        mode_list(Some(&route)).as_deref(),
        Some("driving,driving,driving,driving,driving")
    );
    assert_eq!(summary(Some(&route)).as_deref(), Some("Main Street;High Road"));
    assert_eq!(weight_name(Some(&route)), "routability");
}

#[then("the bearing list reverses incoming bearings")]
fn then_bearings(#[from(decoded)] decoded: &RefCell<Option<RouteInstructions>>) {
    let route = instructions(decoded);
    assert_eq!(
        bearing_list(Some(&route)).as_deref(),
        Some("0->90,90->0,0->10,0->90,90->0")
    );
}

#[then("the intersection list separates steps with semicolons")]
fn then_intersections(#[from(decoded)] decoded: &RefCell<Option<RouteInstructions>>) {
    let route = instructions(decoded);
    assert_eq!(
        intersection_list(&route),
        "true:90;true:270;true:10 false:270;false:180 true:0 true:90,true:90 true:270;true:270"
    );
}

#[then("the lane list describes the first intersection of each step")]
fn then_lanes(#[from(decoded)] decoded: &RefCell<Option<RouteInstructions>>) {
    let route = instructions(decoded);
    assert_eq!(
        lanes_list(Some(&route)).as_deref(),
        Some(",,,left:false straight;right:true,")
    );
}

#[then("the approach list names the approach side of each step")]
fn then_approaches(#[from(decoded)] decoded: &RefCell<Option<RouteInstructions>>) {
    let route = instructions(decoded);
    assert_eq!(approach_list(Some(&route)).as_deref(), Some(",,curb,,"));
}

#[then("each annotation key merges its legs in order")]
fn then_annotations(#[from(decoded)] decoded: &RefCell<Option<RouteInstructions>>) {
    let route = instructions(decoded);
    let merged = annotation_list(&route)
        .expect("annotations should decode")
        .expect("route should carry annotations");
    assert_eq!(merged.get("nodes").map(String::as_str), Some("1:2:3,3:4:5"));
    assert_eq!(merged.get("duration").map(String::as_str), Some("5:5.1,10:10"));
    assert_eq!(merged.get("datasources").map(String::as_str), Some("0:0,0:1"));
}

#[then("the alternatives list leaves the unmatched tracepoint empty")]
fn then_alternatives(#[from(decoded)] decoded: &RefCell<Option<RouteInstructions>>) {
    let route = instructions(decoded);
    assert_eq!(
        alternatives_list(&route).expect("tracepoints should be attached"),
        "0,,3"
    );
    assert_eq!(weight_name(Some(&route)), "duration");
}

#[then("the route has no annotations")]
fn then_no_annotations(#[from(decoded)] decoded: &RefCell<Option<RouteInstructions>>) {
    let route = instructions(decoded);
    assert_eq!(annotation_list(&route).expect("should decode"), None);
}

#[then("the list views report no data")]
fn then_no_data(#[from(decoded)] decoded: &RefCell<Option<RouteInstructions>>) {
    let borrowed = decoded.borrow();
    let route = borrowed.as_ref();
    assert_eq!(way_list(route), None);
    assert_eq!(summary(route), None);
    assert_eq!(weight_name(route), "");
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/instruction_decoder.feature", name = $title)]
        fn $fn_name(
            response: RefCell<Option<ServiceResponse>>,
            decoded: RefCell<Option<RouteInstructions>>,
        ) {
            let _ = (response, decoded);
        }
    };
}

register_scenario!(flattening_two_leg_route, "flattening a two-leg route");
register_scenario!(merging_leg_annotations, "merging leg annotations");
register_scenario!(counting_alternatives, "counting matching alternatives");
register_scenario!(decoding_missing_document, "decoding a missing document");
