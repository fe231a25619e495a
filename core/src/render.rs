//! Declarative render instructions for the map surface.
//!
//! The core never draws. It hands the surface a complete frame — show
//! these markers, this path, this region, focus here — and the surface
//! decides how.

use crate::{
    types::{LatLng, Year},
    viewport::FocusCommand,
    waypoint::Waypoint,
};
use serde::{Deserialize, Serialize};

/// One point marker on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: LatLng,
    pub label: Option<String>,
    pub word_form: Option<String>,
}

impl From<&Waypoint> for Marker {
    fn from(waypoint: &Waypoint) -> Self {
        Self {
            position: waypoint.position,
            label: waypoint.label.clone(),
            word_form: waypoint.word_form.clone(),
        }
    }
}

/// Everything the map surface needs for one repaint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    pub current_year: Year,
    pub is_playing: bool,
    /// Revealed waypoints, in reveal order.
    pub markers: Vec<Marker>,
    /// Present only with two or more revealed waypoints.
    pub path: Option<Vec<LatLng>>,
    /// Region code of the active waypoint, when it carries one.
    pub region_highlight: Option<String>,
    /// Present only when the active waypoint changed since the last frame.
    pub focus: Option<FocusCommand>,
    /// Whether the future-prediction panel should be visible.
    pub show_prediction: bool,
}

impl RenderFrame {
    /// The frame shown before any search, or after the sidebar closes:
    /// nothing on the map, nothing playing.
    pub fn empty(current_year: Year) -> Self {
        Self {
            current_year,
            is_playing: false,
            markers: Vec::new(),
            path: None,
            region_highlight: None,
            focus: None,
            show_prediction: false,
        }
    }
}
