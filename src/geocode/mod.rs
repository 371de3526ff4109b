//! Reverse geocoding: coordinates in, structured addresses out.
//!
//! This module provides:
//! - Coordinate validation and clamping
//! - The [`GeocodingProvider`] trait and the two upstream adapters
//! - The ordered [`ResolverChain`] with primary/secondary fallback
//!
//! The chain is the only entry point the server and widget use; provider
//! adapters are wiring details behind it.

mod address;
mod coordinates;
mod maps_co;
mod nominatim;
mod provider;
mod resolver;

// Re-export public API
pub use address::{AddressComponents, AddressSource, ResolvedAddress};
pub use coordinates::Coordinates;
pub use maps_co::MapsCoProvider;
pub use nominatim::NominatimProvider;
pub use provider::{GeocodingProvider, RawAddressParts, RawProviderAddress};
pub use resolver::ResolverChain;
