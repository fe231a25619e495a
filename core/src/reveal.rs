//! The reveal engine — pure derivations from (waypoints, cursor year).
//!
//! RULE: nothing in this module has side effects. Identical inputs
//! always produce identical outputs; callers may recompute every tick.

use crate::{
    types::{LatLng, Year},
    waypoint::Waypoint,
};

/// Waypoints sorted ascending by effective year. The sort is stable:
/// equal years keep their original input order.
pub fn ordered(waypoints: &[Waypoint]) -> Vec<Waypoint> {
    let mut sorted = waypoints.to_vec();
    sorted.sort_by_key(Waypoint::effective_year);
    sorted
}

/// The ordered subsequence whose year has been reached by the cursor.
/// Monotonic in `current_year`: raising the cursor never shrinks the
/// result, lowering it never grows it.
pub fn revealed_set(waypoints: &[Waypoint], current_year: Year) -> Vec<Waypoint> {
    ordered(waypoints)
        .into_iter()
        .filter(|w| w.effective_year() <= current_year)
        .collect()
}

/// The most recent revealed waypoint, if any.
pub fn active_waypoint(waypoints: &[Waypoint], current_year: Year) -> Option<Waypoint> {
    revealed_set(waypoints, current_year).pop()
}

/// The ordered positions connecting the revealed waypoints. A path only
/// exists once two or more waypoints are revealed; below that it is
/// absent and nothing is drawn.
pub fn path_geometry(waypoints: &[Waypoint], current_year: Year) -> Option<Vec<LatLng>> {
    let revealed = revealed_set(waypoints, current_year);
    if revealed.len() < 2 {
        return None;
    }
    Some(revealed.iter().map(|w| w.position).collect())
}

/// Region highlight code of the active waypoint, if it carries one.
pub fn active_region_code(waypoints: &[Waypoint], current_year: Year) -> Option<String> {
    active_waypoint(waypoints, current_year).and_then(|w| w.region_code)
}
