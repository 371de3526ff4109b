//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the application,
//! including provider timeouts, widget timing, and endpoint defaults.

use std::time::Duration;

// Provider endpoints (used as defaults, overridable via CLI flags)
/// Default base URL of the primary reverse-geocoding provider (Nominatim).
pub const DEFAULT_PRIMARY_PROVIDER_URL: &str = "https://nominatim.openstreetmap.org";
/// Default base URL of the secondary reverse-geocoding provider (geocode.maps.co).
pub const DEFAULT_SECONDARY_PROVIDER_URL: &str = "https://geocode.maps.co";

// Provider timeouts
/// Per-request timeout for the primary provider.
/// Nominatim can be slow under load; 10s keeps the overall resolve latency bounded
/// while giving the free public instance room to answer.
pub const PRIMARY_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);
/// Per-request timeout for the secondary provider.
/// The paid fallback is expected to answer quickly, so it gets a tighter budget.
pub const SECONDARY_PROVIDER_TIMEOUT: Duration = Duration::from_secs(5);
/// TCP connection timeout for the shared HTTP client.
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Nominatim zoom level for reverse lookups.
/// 18 resolves down to building granularity, which is what a shipping form needs.
pub const NOMINATIM_ZOOM: u8 = 18;

// Geolocation acquisition
/// Default position acquisition timeout handed to the geolocation source.
pub const DEFAULT_GEOLOCATION_TIMEOUT: Duration = Duration::from_secs(10);
/// Default maximum age of a cached position the geolocation source may return.
pub const DEFAULT_GEOLOCATION_MAX_AGE: Duration = Duration::from_secs(60);
/// Watchdog grace period added on top of the acquisition timeout.
/// Some geolocation sources ignore their own timeout option; the watchdog fires
/// at timeout + grace so a hung source cannot stall the widget forever.
pub const GEOLOCATION_GRACE: Duration = Duration::from_millis(1000);

// Widget timing
/// Number of automatic retries after a failed detection run (total attempts = retries + 1).
pub const WIDGET_RETRY_COUNT: usize = 2;
/// Fixed delay between detection retries in milliseconds.
pub const WIDGET_RETRY_BACKOFF_MS: u64 = 1000;
/// How long success and error messages stay visible before auto-hiding.
/// Informational messages are not auto-hidden; they are replaced by the next message.
pub const MESSAGE_AUTO_HIDE: Duration = Duration::from_secs(5);
/// Duration of the transient highlight applied to a freshly filled field.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(1500);

/// Default widget language tag when the host page declares none.
pub const DEFAULT_LANGUAGE: &str = "ar";

// Service identity
/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "address-autofill";
/// User-Agent sent with outbound provider requests.
/// Nominatim's usage policy requires an identifying User-Agent.
pub const DEFAULT_USER_AGENT: &str = concat!("address-autofill/", env!("CARGO_PKG_VERSION"));
