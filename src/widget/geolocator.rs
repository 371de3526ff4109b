//! Position acquisition.
//!
//! The widget never talks to a geolocation source directly; it goes through
//! [`acquire`], which enforces a hard watchdog on top of the source's own
//! timeout option and sanitizes whatever comes back.

use futures::future::BoxFuture;

use crate::config::{DEFAULT_GEOLOCATION_MAX_AGE, DEFAULT_GEOLOCATION_TIMEOUT, GEOLOCATION_GRACE};
use crate::error_handling::GeolocationError;
use crate::geocode::Coordinates;

/// Options handed to the geolocation source, mirroring the browser
/// geolocation API's position options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeolocationOptions {
    /// Ask the source for its most accurate fix.
    pub high_accuracy: bool,
    /// How long the source may take to produce a position.
    pub timeout: std::time::Duration,
    /// Maximum age of a cached position the source may return.
    pub max_age: std::time::Duration,
}

impl Default for GeolocationOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: DEFAULT_GEOLOCATION_TIMEOUT,
            max_age: DEFAULT_GEOLOCATION_MAX_AGE,
        }
    }
}

/// A source of device positions.
///
/// Hosts implement this over whatever geolocation machinery they have.
/// Implementations are expected to honor `options.timeout` themselves, but
/// [`acquire`] does not rely on it.
pub trait Geolocator: Send + Sync {
    /// Produces the device's current position.
    fn current_position(
        &self,
        options: GeolocationOptions,
    ) -> BoxFuture<'_, Result<Coordinates, GeolocationError>>;
}

/// Acquires a position from `source` under a watchdog.
///
/// The watchdog fires at `options.timeout` plus a fixed grace period, so a
/// source that ignores its own timeout option still cannot hang the widget.
/// Returned positions are clamped to valid coordinate ranges.
pub async fn acquire(
    source: &dyn Geolocator,
    options: GeolocationOptions,
) -> Result<Coordinates, GeolocationError> {
    let deadline = options.timeout + GEOLOCATION_GRACE;
    match tokio::time::timeout(deadline, source.current_position(options)).await {
        Ok(Ok(position)) => Ok(position.clamped()),
        Ok(Err(e)) => Err(e),
        Err(_) => {
            log::warn!(
                "geolocation source ignored its {}ms timeout; watchdog fired",
                options.timeout.as_millis()
            );
            Err(GeolocationError::Timeout)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct FixedPosition(Result<Coordinates, GeolocationError>);

    impl Geolocator for FixedPosition {
        fn current_position(
            &self,
            _options: GeolocationOptions,
        ) -> BoxFuture<'_, Result<Coordinates, GeolocationError>> {
            let outcome = self.0;
            Box::pin(async move { outcome })
        }
    }

    struct NeverAnswers;

    impl Geolocator for NeverAnswers {
        fn current_position(
            &self,
            _options: GeolocationOptions,
        ) -> BoxFuture<'_, Result<Coordinates, GeolocationError>> {
            Box::pin(futures::future::pending())
        }
    }

    #[tokio::test]
    async fn test_position_is_clamped() {
        let source = FixedPosition(Ok(Coordinates::new(95.0, -200.0)));
        let position = acquire(&source, GeolocationOptions::default())
            .await
            .unwrap();
        assert_eq!(position, Coordinates::new(90.0, -180.0));
    }

    #[tokio::test]
    async fn test_source_errors_pass_through() {
        let source = FixedPosition(Err(GeolocationError::PermissionDenied));
        let result = acquire(&source, GeolocationOptions::default()).await;
        assert_eq!(result, Err(GeolocationError::PermissionDenied));
    }

    #[tokio::test]
    async fn test_watchdog_fires_on_a_hung_source() {
        // Short source timeout keeps the test fast; the grace period dominates
        let options = GeolocationOptions {
            timeout: Duration::from_millis(10),
            ..Default::default()
        };
        let result = acquire(&NeverAnswers, options).await;
        assert_eq!(result, Err(GeolocationError::Timeout));
    }
}
