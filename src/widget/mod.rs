//! The checkout widget: geolocation, resolution and fill orchestration.
//!
//! This module provides:
//! - The [`Geolocator`] seam and the watchdog around it
//! - The [`ResolverApi`] client for the resolve endpoint
//! - The localized message catalog
//! - The [`WidgetController`] state machine tying it all together
//!
//! Everything the controller touches is a trait object wired at mount time,
//! so hosts and tests swap in their own sources, sinks and surfaces.

mod client;
mod controller;
mod geolocator;
mod messages;

// Re-export public API
pub use client::{HttpResolverClient, ResolverApi};
pub use controller::{WidgetConfig, WidgetController, WidgetState, WidgetUi};
pub use geolocator::{acquire, GeolocationOptions, Geolocator};
pub use messages::{trigger_label, Language, MessageKey, MessageKind};
