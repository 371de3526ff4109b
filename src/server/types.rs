//! Resolve server wire types.

use serde::{Deserialize, Serialize};

use crate::geocode::{AddressSource, ResolvedAddress};

/// Body of a `POST /resolve` request.
///
/// Coordinates are optional at the type level so a missing field produces the
/// same 400 as a non-finite one instead of a generic deserialization error.
#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    /// Latitude in degrees.
    pub lat: Option<f64>,
    /// Longitude in degrees.
    pub lng: Option<f64>,
    /// Preferred address language; the service default applies when absent.
    pub language: Option<String>,
}

/// Success body of `POST /resolve`.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    /// Always true.
    pub success: bool,
    /// The resolved address.
    pub address: ResolvedAddress,
    /// Which provider answered, echoed at the top level.
    pub source: AddressSource,
    /// Resolved addresses are safe to cache per coordinates.
    pub cacheable: bool,
}

/// Failure body of `POST /resolve`, for both 400 and 500 responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveFailure {
    /// Always false.
    pub success: bool,
    /// Human-readable failure description.
    pub error: String,
    /// Set on resolution failures: the client should fall back to manual
    /// address entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_entry: Option<bool>,
    /// Set on resolution failures: the coordinates exactly as received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<EchoedCoordinates>,
}

/// Coordinate echo in failure bodies, unclamped.
#[derive(Debug, Serialize)]
pub struct EchoedCoordinates {
    /// Latitude as received.
    pub lat: f64,
    /// Longitude as received.
    pub lng: f64,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always true when the process answers.
    pub success: bool,
    /// Fixed "healthy" marker.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// RFC 3339 timestamp of the response.
    pub timestamp: String,
    /// Seconds since the server started.
    pub uptime: u64,
    /// Deployment environment label.
    pub environment: String,
    /// The routes this server answers.
    pub endpoints: Vec<&'static str>,
}
