//! Waypoints — dated, located stages in a word's journey.
//!
//! RULE: a waypoint is immutable once created. The visualization never
//! edits waypoints in place; a new search replaces the whole set.

use crate::{
    error::EvoResult,
    types::{LatLng, Year},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub position: LatLng,
    /// Absent years sort as year 0 — a legacy-compatibility ordering
    /// policy, not a claim about the data.
    pub year: Option<Year>,
    pub label: Option<String>,
    pub word_form: Option<String>,
    pub region_code: Option<String>,
}

impl Waypoint {
    /// Build a waypoint at a validated position.
    pub fn new(lat: f64, lng: f64) -> EvoResult<Self> {
        Ok(Self {
            position: LatLng::new(lat, lng)?,
            year: None,
            label: None,
            word_form: None,
            region_code: None,
        })
    }

    pub fn with_year(mut self, year: Year) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_word_form(mut self, word_form: impl Into<String>) -> Self {
        self.word_form = Some(word_form.into());
        self
    }

    pub fn with_region_code(mut self, region_code: impl Into<String>) -> Self {
        self.region_code = Some(region_code.into());
        self
    }

    /// The year used for ordering and reveal comparisons.
    pub fn effective_year(&self) -> Year {
        self.year.unwrap_or(0)
    }

    /// Identity for change detection: position + effective year.
    /// Object/reference identity is deliberately not used.
    pub fn identity(&self) -> WaypointIdentity {
        WaypointIdentity {
            lat_bits: self.position.lat.to_bits(),
            lng_bits: self.position.lng.to_bits(),
            year: self.effective_year(),
        }
    }
}

/// Value identity of a waypoint, comparable across recomputations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaypointIdentity {
    lat_bits: u64,
    lng_bits: u64,
    year: Year,
}

/// The normalized waypoint collection for the current search result.
/// Replaced wholesale when a new result arrives, cleared when the
/// sidebar closes or a new search begins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaypointStore {
    waypoints: Vec<Waypoint>,
}

impl WaypointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire set. Input order is preserved — it is the
    /// tiebreak for equal years.
    pub fn replace_all(&mut self, waypoints: Vec<Waypoint>) {
        self.waypoints = waypoints;
    }

    pub fn clear(&mut self) {
        self.waypoints.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn as_slice(&self) -> &[Waypoint] {
        &self.waypoints
    }
}
