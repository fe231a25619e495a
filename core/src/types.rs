//! Shared primitive types used across the entire core.

use crate::error::{EvoError, EvoResult};
use serde::{Deserialize, Serialize};

/// A calendar year. Negative values are BCE.
pub type Year = i32;

/// Monotonic token identifying one search request.
/// A later generation supersedes every earlier one.
pub type Generation = u64;

/// A locale code, e.g. "en", "fr", "ja".
pub type Locale = String;

/// A WGS84-style latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Build a validated position. Non-finite values or values outside
    /// [-90, 90] / [-180, 180] are rejected as malformed, never coerced.
    pub fn new(lat: f64, lng: f64) -> EvoResult<Self> {
        let in_range = (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng);
        if !lat.is_finite() || !lng.is_finite() || !in_range {
            return Err(EvoError::MalformedPosition { lat, lng });
        }
        Ok(Self { lat, lng })
    }
}

/// Inclusive year range. Invariant: `min <= max`, checked at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBounds {
    pub min: Year,
    pub max: Year,
}

impl YearBounds {
    /// `min > max` is a contract violation — rejected, never swapped.
    pub fn new(min: Year, max: Year) -> EvoResult<Self> {
        if min > max {
            return Err(EvoError::MalformedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn clamp(&self, year: Year) -> Year {
        year.clamp(self.min, self.max)
    }

    pub fn contains(&self, year: Year) -> bool {
        self.min <= year && year <= self.max
    }
}
