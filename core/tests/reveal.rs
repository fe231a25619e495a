//! Reveal engine tests: ordering, monotonic reveal, path and active
//! waypoint derivations.

use evolingo_core::{reveal, waypoint::Waypoint};

fn wp(year: i32, lat: f64, lng: f64) -> Waypoint {
    Waypoint::new(lat, lng).unwrap().with_year(year)
}

/// The worked three-waypoint scenario: steppe → Rome → Paris.
fn human_chain() -> Vec<Waypoint> {
    vec![
        wp(-3000, 48.0, 35.0),
        wp(100, 41.9, 12.5),
        wp(1200, 48.8, 2.3),
    ]
}

#[test]
fn ordered_sorts_ascending_by_year() {
    let waypoints = vec![wp(1200, 48.8, 2.3), wp(-3000, 48.0, 35.0), wp(100, 41.9, 12.5)];
    let sorted = reveal::ordered(&waypoints);
    let years: Vec<_> = sorted.iter().map(Waypoint::effective_year).collect();
    assert_eq!(years, vec![-3000, 100, 1200]);
}

/// Ties keep input order — reordering on ties is an observable bug.
#[test]
fn ordered_is_stable_on_equal_years() {
    let waypoints = vec![
        wp(100, 1.0, 1.0).with_label("first"),
        wp(100, 2.0, 2.0).with_label("second"),
        wp(100, 3.0, 3.0).with_label("third"),
    ];
    let sorted = reveal::ordered(&waypoints);
    let labels: Vec<_> = sorted.iter().map(|w| w.label.clone().unwrap()).collect();
    assert_eq!(labels, vec!["first", "second", "third"]);
}

/// Applying the sort twice yields the same sequence.
#[test]
fn ordered_is_idempotent() {
    let waypoints = vec![wp(100, 1.0, 1.0), wp(-5, 2.0, 2.0), wp(100, 3.0, 3.0)];
    let once = reveal::ordered(&waypoints);
    let twice = reveal::ordered(&once);
    assert_eq!(once, twice);
}

/// A missing year orders as year 0 — the legacy-compatibility policy.
#[test]
fn missing_year_orders_as_zero() {
    let waypoints = vec![wp(100, 1.0, 1.0), Waypoint::new(2.0, 2.0).unwrap(), wp(-100, 3.0, 3.0)];
    let sorted = reveal::ordered(&waypoints);
    let years: Vec<_> = sorted.iter().map(Waypoint::effective_year).collect();
    assert_eq!(years, vec![-100, 0, 100]);

    // Revealed exactly once the cursor reaches 0.
    assert_eq!(reveal::revealed_set(&waypoints, -1).len(), 1);
    assert_eq!(reveal::revealed_set(&waypoints, 0).len(), 2);
}

/// Raising the cursor never shrinks the revealed set.
#[test]
fn reveal_is_monotonic_in_cursor_year() {
    let waypoints = human_chain();
    let mut previous = 0usize;
    for year in (-3500..2100).step_by(250) {
        let revealed = reveal::revealed_set(&waypoints, year);
        assert!(
            revealed.len() >= previous,
            "revealed set shrank at year {year}: {} -> {}",
            previous,
            revealed.len()
        );
        previous = revealed.len();
    }
    assert_eq!(previous, waypoints.len());
}

/// Empty waypoint set: every derivation degrades to absent, never errors.
#[test]
fn empty_set_yields_absent_outputs() {
    let waypoints: Vec<Waypoint> = vec![];
    assert!(reveal::revealed_set(&waypoints, 2024).is_empty());
    assert!(reveal::active_waypoint(&waypoints, 2024).is_none());
    assert!(reveal::path_geometry(&waypoints, 2024).is_none());
    assert!(reveal::active_region_code(&waypoints, 2024).is_none());
}

/// One revealed waypoint: active is defined, the path is not drawn.
#[test]
fn single_waypoint_has_no_path() {
    let waypoints = vec![wp(100, 41.9, 12.5)];
    assert!(reveal::path_geometry(&waypoints, 2024).is_none());
    let active = reveal::active_waypoint(&waypoints, 2024).expect("active waypoint");
    assert_eq!(active.effective_year(), 100);
}

/// Equal years reveal simultaneously; the path appears at that instant
/// as a full two-point segment, never a partial one.
#[test]
fn equal_years_reveal_together() {
    let waypoints = vec![wp(100, 1.0, 1.0), wp(100, 2.0, 2.0)];
    assert!(reveal::revealed_set(&waypoints, 99).is_empty());
    assert!(reveal::path_geometry(&waypoints, 99).is_none());

    let revealed = reveal::revealed_set(&waypoints, 100);
    assert_eq!(revealed.len(), 2);
    let path = reveal::path_geometry(&waypoints, 100).expect("two-point segment");
    assert_eq!(path.len(), 2);
}

/// The steppe → Rome → Paris chain at three cursor positions.
#[test]
fn reveal_at_three_cursor_positions() {
    let waypoints = human_chain();

    // Mid-timeline: first two revealed, segment between them, Rome active.
    let revealed = reveal::revealed_set(&waypoints, 500);
    assert_eq!(revealed.len(), 2);
    assert_eq!(reveal::path_geometry(&waypoints, 500).unwrap().len(), 2);
    assert_eq!(reveal::active_waypoint(&waypoints, 500).unwrap().effective_year(), 100);

    // At the origin: one waypoint, no path.
    assert_eq!(reveal::revealed_set(&waypoints, -3000).len(), 1);
    assert!(reveal::path_geometry(&waypoints, -3000).is_none());
    assert_eq!(
        reveal::active_waypoint(&waypoints, -3000).unwrap().effective_year(),
        -3000
    );

    // Past the last waypoint: everything revealed, latest active.
    assert_eq!(reveal::revealed_set(&waypoints, 2050).len(), 3);
    assert_eq!(reveal::active_waypoint(&waypoints, 2050).unwrap().effective_year(), 1200);
}

/// Region highlight follows the active waypoint.
#[test]
fn region_code_tracks_active_waypoint() {
    let waypoints = vec![
        wp(-3000, 48.0, 35.0).with_region_code("UA"),
        wp(100, 41.9, 12.5).with_region_code("IT"),
    ];
    assert_eq!(reveal::active_region_code(&waypoints, -3000).as_deref(), Some("UA"));
    assert_eq!(reveal::active_region_code(&waypoints, 500).as_deref(), Some("IT"));
    assert!(reveal::active_region_code(&waypoints, -4000).is_none());
}
