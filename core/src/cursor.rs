//! The cursor — the single scalar "current year" driving the reveal.

use crate::types::{Year, YearBounds};
use serde::{Deserialize, Serialize};

/// Invariant: `bounds.min <= current_year <= bounds.max`, always.
/// Every write clamps; the cursor can never leave its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    current_year: Year,
    bounds: YearBounds,
}

impl Cursor {
    /// Cursor positioned at `year`, clamped into `bounds`.
    pub fn at(bounds: YearBounds, year: Year) -> Self {
        Self {
            current_year: bounds.clamp(year),
            bounds,
        }
    }

    /// Cursor positioned at the upper bound (the "present" when a
    /// search completes).
    pub fn at_max(bounds: YearBounds) -> Self {
        Self::at(bounds, bounds.max)
    }

    pub fn current_year(&self) -> Year {
        self.current_year
    }

    pub fn bounds(&self) -> YearBounds {
        self.bounds
    }

    pub fn at_upper_bound(&self) -> bool {
        self.current_year == self.bounds.max
    }

    /// Set the year, clamped. Returns the year actually applied.
    pub fn set_year(&mut self, year: Year) -> Year {
        self.current_year = self.bounds.clamp(year);
        self.current_year
    }

    /// Replace the bounds and re-clamp the current year immediately.
    /// Bounds validity is enforced by [`YearBounds::new`].
    pub fn set_bounds(&mut self, bounds: YearBounds) {
        self.bounds = bounds;
        self.current_year = bounds.clamp(self.current_year);
    }

    /// Advance by `step` years, clamped to the upper bound.
    pub fn advance(&mut self, step: Year) -> Year {
        self.set_year(self.current_year.saturating_add(step))
    }
}
