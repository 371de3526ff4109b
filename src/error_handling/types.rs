//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A provider was configured with a base URL that does not parse.
    #[error("Provider URL error: {0}")]
    ProviderUrlError(#[from] url::ParseError),
}

/// Failure modes of a geolocation source.
///
/// Mirrors the position error codes of browser-style geolocation APIs, which is
/// what widget hosts hand us.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum GeolocationError {
    /// The user denied the location permission prompt.
    #[error("location permission denied")]
    PermissionDenied,

    /// The source could not produce a position fix.
    #[error("position unavailable")]
    PositionUnavailable,

    /// The source did not answer within the acquisition timeout.
    #[error("position acquisition timed out")]
    Timeout,
}

impl GeolocationError {
    /// Returns a stable category label for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeolocationError::PermissionDenied => "permission denied",
            GeolocationError::PositionUnavailable => "position unavailable",
            GeolocationError::Timeout => "timeout",
        }
    }
}

/// Failure modes of a single reverse-geocoding provider request.
///
/// One value is produced per failed provider hop; the resolver logs it and
/// moves on to the next provider in the chain.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ProviderError {
    /// The provider did not answer within its per-request timeout.
    #[error("provider request timed out")]
    Timeout,

    /// TCP/TLS connection to the provider failed.
    #[error("provider connection failed")]
    Connect,

    /// The provider answered with a non-success HTTP status.
    #[error("provider returned HTTP status {0}")]
    Status(u16),

    /// The provider body could not be decoded as the expected JSON shape.
    #[error("provider response decode failed")]
    Decode,

    /// The provider answered 200 but without a usable formatted address.
    #[error("provider returned no display name")]
    NoDisplayName,

    /// Anything reqwest reports that does not fit the categories above.
    #[error("provider request failed: {0}")]
    Other(String),
}

impl ProviderError {
    /// Returns a stable category label for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderError::Timeout => "timeout",
            ProviderError::Connect => "connect",
            ProviderError::Status(_) => "status",
            ProviderError::Decode => "decode",
            ProviderError::NoDisplayName => "no display name",
            ProviderError::Other(_) => "other",
        }
    }
}

/// Error types for a full resolve operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// The request carried coordinates that are missing or not finite numbers.
    #[error("invalid coordinates: lat and lng must be finite numbers")]
    InvalidCoordinates,

    /// Every provider in the chain failed for these coordinates.
    #[error("no provider could resolve an address for ({lat}, {lng})")]
    ResolutionFailed {
        /// Latitude as received, before clamping.
        lat: f64,
        /// Longitude as received, before clamping.
        lng: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_geolocation_error_as_str() {
        assert_eq!(GeolocationError::PermissionDenied.as_str(), "permission denied");
        assert_eq!(GeolocationError::Timeout.as_str(), "timeout");
    }

    #[test]
    fn test_provider_error_as_str() {
        assert_eq!(ProviderError::Status(500).as_str(), "status");
        assert_eq!(ProviderError::NoDisplayName.as_str(), "no display name");
        assert_eq!(
            ProviderError::Other("boom".to_string()).as_str(),
            "other"
        );
    }

    #[test]
    fn test_all_geolocation_errors_have_string_representation() {
        // Verify all geolocation error types have non-empty string representations
        for error in GeolocationError::iter() {
            assert!(
                !error.as_str().is_empty(),
                "{:?} should have non-empty string",
                error
            );
        }
    }

    #[test]
    fn test_all_provider_errors_have_string_representation() {
        // Verify all provider error types have non-empty string representations
        for error in ProviderError::iter() {
            assert!(
                !error.as_str().is_empty(),
                "{:?} should have non-empty string",
                error
            );
        }
    }

    #[test]
    fn test_provider_error_display_includes_status() {
        let error = ProviderError::Status(503);
        assert_eq!(error.to_string(), "provider returned HTTP status 503");
    }

    #[test]
    fn test_resolve_error_display_includes_coordinates() {
        let error = ResolveError::ResolutionFailed {
            lat: 999.0,
            lng: -400.0,
        };
        let text = error.to_string();
        assert!(text.contains("999"), "display should echo latitude: {}", text);
        assert!(text.contains("-400"), "display should echo longitude: {}", text);
    }

    #[test]
    fn test_provider_error_equality() {
        // Verify ProviderError implements PartialEq correctly
        assert_eq!(ProviderError::Status(404), ProviderError::Status(404));
        assert_ne!(ProviderError::Status(404), ProviderError::Status(500));
        assert_ne!(ProviderError::Timeout, ProviderError::Connect);
    }
}
