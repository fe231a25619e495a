//! The playback driver — a cooperative timer state machine.
//!
//! RULES:
//!   - Two states only: Stopped and Playing.
//!   - One tick = one transition. The tick function is pure with respect
//!     to wall time; the embedding host owns the real timer and calls
//!     `tick` every `tick_interval_ms` while playing. Tests drive it
//!     with a plain loop.
//!   - Reaching the upper bound stops playback on the same tick. No
//!     overshoot, no extra tick beyond the bound.
//!   - All cursor mutation flows through this driver or the explicit
//!     scrub operation. Nothing else writes the cursor.

use crate::{
    cursor::Cursor,
    error::{EvoError, EvoResult},
    types::{Year, YearBounds},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    Stopped,
    Playing,
}

/// What a single tick did. Returned so hosts can drop their timer as
/// soon as playback halts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; the tick was ignored.
    Idle,
    /// Advanced to the given year, still playing.
    Advanced(Year),
    /// Reached the upper bound and stopped.
    Finished(Year),
}

/// Playback state is owned independently of the waypoint set and
/// survives waypoint replacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackDriver {
    state: PlaybackState,
    step_size: Year,
    tick_interval_ms: u32,
}

impl PlaybackDriver {
    pub fn new(step_size: Year, tick_interval_ms: u32) -> EvoResult<Self> {
        if step_size <= 0 {
            return Err(EvoError::InvalidStepSize(step_size));
        }
        if tick_interval_ms == 0 {
            return Err(EvoError::InvalidTickInterval(tick_interval_ms));
        }
        Ok(Self {
            state: PlaybackState::Stopped,
            step_size,
            tick_interval_ms,
        })
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn step_size(&self) -> Year {
        self.step_size
    }

    /// Timer period hint for the embedding host. The driver itself
    /// never sleeps.
    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    /// Stopped → Playing. No-op if already playing.
    pub fn play(&mut self) {
        if self.state == PlaybackState::Stopped {
            log::debug!("playback: play");
            self.state = PlaybackState::Playing;
        }
    }

    /// Playing → Stopped. No-op if already stopped.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            log::debug!("playback: pause");
            self.state = PlaybackState::Stopped;
        }
    }

    /// One timer firing: advance the cursor by the step size, clamped
    /// to the upper bound, stopping there on the same tick.
    pub fn tick(&mut self, cursor: &mut Cursor) -> TickOutcome {
        if self.state == PlaybackState::Stopped {
            return TickOutcome::Idle;
        }
        let year = cursor.advance(self.step_size);
        if cursor.at_upper_bound() {
            self.state = PlaybackState::Stopped;
            log::debug!("playback: reached {year}, stopping");
            TickOutcome::Finished(year)
        } else {
            TickOutcome::Advanced(year)
        }
    }

    /// Manual scrub. Allowed in either state; clamps, and never toggles
    /// playback by itself — but landing on the upper bound while
    /// playing triggers the same automatic stop as a tick.
    pub fn scrub(&mut self, cursor: &mut Cursor, year: Year) -> Year {
        let applied = cursor.set_year(year);
        self.stop_if_finished(cursor);
        applied
    }

    /// Replace the cursor bounds, re-clamping immediately. If the
    /// re-clamped year sits on the new upper bound while playing, stop.
    pub fn set_bounds(&mut self, cursor: &mut Cursor, bounds: YearBounds) {
        cursor.set_bounds(bounds);
        self.stop_if_finished(cursor);
    }

    fn stop_if_finished(&mut self, cursor: &Cursor) {
        if self.state == PlaybackState::Playing && cursor.at_upper_bound() {
            log::debug!("playback: cursor hit upper bound, stopping");
            self.state = PlaybackState::Stopped;
        }
    }
}
