//! The viewport director — turns the active waypoint into camera focus
//! commands for the map surface.
//!
//! RULE: one command per waypoint-identity change. Recomputing the same
//! active waypoint every timer tick must not re-trigger the camera.

use crate::{
    types::LatLng,
    waypoint::{Waypoint, WaypointIdentity},
};
use serde::{Deserialize, Serialize};

/// Fixed framing for "focus on a point" — policy constants, not derived
/// from data.
pub const FOCUS_ZOOM: f64 = 4.0;
pub const FOCUS_SPEED: f64 = 1.2;

/// A declarative camera instruction. The core does not know how the map
/// animates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusCommand {
    pub target: LatLng,
    pub zoom: f64,
    pub speed: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ViewportDirector {
    last_focus: Option<WaypointIdentity>,
}

impl ViewportDirector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a focus command when the active waypoint's identity
    /// (position + year) differs from the previously focused one.
    /// Idempotent under unchanged input; no command without an active
    /// waypoint.
    pub fn direct(&mut self, active: Option<&Waypoint>) -> Option<FocusCommand> {
        let waypoint = active?;
        let identity = waypoint.identity();
        if self.last_focus == Some(identity) {
            return None;
        }
        self.last_focus = Some(identity);
        Some(FocusCommand {
            target: waypoint.position,
            zoom: FOCUS_ZOOM,
            speed: FOCUS_SPEED,
        })
    }

    /// Forget the last focus so the next active waypoint refocuses,
    /// e.g. after a new search replaces the waypoint set.
    pub fn reset(&mut self) {
        self.last_focus = None;
    }
}
