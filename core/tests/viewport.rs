//! Viewport director tests: one focus command per active-waypoint
//! identity change.

use evolingo_core::{
    viewport::{ViewportDirector, FOCUS_SPEED, FOCUS_ZOOM},
    waypoint::Waypoint,
};

fn wp(year: i32, lat: f64, lng: f64) -> Waypoint {
    Waypoint::new(lat, lng).unwrap().with_year(year)
}

/// No active waypoint, no command.
#[test]
fn no_command_without_active_waypoint() {
    let mut director = ViewportDirector::new();
    assert!(director.direct(None).is_none());
}

/// First sighting of an active waypoint issues a focus with the fixed
/// framing policy.
#[test]
fn first_active_waypoint_focuses() {
    let mut director = ViewportDirector::new();
    let rome = wp(100, 41.9, 12.5);

    let command = director.direct(Some(&rome)).expect("focus command");
    assert_eq!(command.target.lat, 41.9);
    assert_eq!(command.target.lng, 12.5);
    assert_eq!(command.zoom, FOCUS_ZOOM);
    assert_eq!(command.speed, FOCUS_SPEED);
}

/// Two consecutive recalculations with the same active waypoint issue
/// at most one command total.
#[test]
fn unchanged_waypoint_issues_no_second_command() {
    let mut director = ViewportDirector::new();
    let rome = wp(100, 41.9, 12.5);

    assert!(director.direct(Some(&rome)).is_some());
    assert!(director.direct(Some(&rome)).is_none());
    assert!(director.direct(Some(&rome)).is_none());
}

/// Identity is position + year, not object reference: a clone of the
/// focused waypoint does not re-trigger.
#[test]
fn identity_is_by_value_not_reference() {
    let mut director = ViewportDirector::new();
    let rome = wp(100, 41.9, 12.5).with_label("Latin");
    let rome_again = wp(100, 41.9, 12.5).with_label("recomputed");

    assert!(director.direct(Some(&rome)).is_some());
    assert!(director.direct(Some(&rome_again)).is_none());
}

/// A different active waypoint refocuses; returning to the previous one
/// refocuses again.
#[test]
fn changing_waypoint_refocuses() {
    let mut director = ViewportDirector::new();
    let rome = wp(100, 41.9, 12.5);
    let paris = wp(1200, 48.8, 2.3);

    assert!(director.direct(Some(&rome)).is_some());
    let command = director.direct(Some(&paris)).expect("refocus");
    assert_eq!(command.target.lat, 48.8);
    assert!(director.direct(Some(&rome)).is_some());
}

/// Same position, different year is a different identity — the
/// timeline can revisit a place in a later era.
#[test]
fn same_position_different_year_refocuses() {
    let mut director = ViewportDirector::new();
    let old = wp(100, 41.9, 12.5);
    let new = wp(1200, 41.9, 12.5);

    assert!(director.direct(Some(&old)).is_some());
    assert!(director.direct(Some(&new)).is_some());
}

/// Reset forgets the last focus so the next frame refocuses.
#[test]
fn reset_allows_refocus() {
    let mut director = ViewportDirector::new();
    let rome = wp(100, 41.9, 12.5);

    assert!(director.direct(Some(&rome)).is_some());
    director.reset();
    assert!(director.direct(Some(&rome)).is_some());
}
