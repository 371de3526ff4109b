//! Geographic coordinate handling.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair with optional accuracy.
///
/// Coordinates arrive from untrusted sources (browser geolocation, API
/// clients), so nothing here assumes they are in range. Callers validate with
/// [`Coordinates::is_valid`] and normalize with [`Coordinates::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Reported accuracy radius in meters, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_meters: Option<f64>,
}

impl Coordinates {
    /// Creates a coordinate pair without accuracy information.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            accuracy_meters: None,
        }
    }

    /// Returns true when both components are finite numbers.
    ///
    /// NaN and infinities are rejected outright rather than clamped; a
    /// non-finite coordinate means the caller sent garbage, not an
    /// out-of-range position.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Returns a copy clamped to the valid WGS84 ranges.
    ///
    /// Latitude is clamped to [-90, 90] and longitude to [-180, 180].
    /// Out-of-range values are snapped to the nearest bound rather than
    /// rejected, matching how the resolve endpoint treats them.
    pub fn clamped(&self) -> Self {
        Self {
            lat: self.lat.clamp(-90.0, 90.0),
            lng: self.lng.clamp(-180.0, 180.0),
            accuracy_meters: self.accuracy_meters,
        }
    }
}
