//! The provider chain that turns coordinates into addresses.

use std::sync::Arc;

use crate::config::Config;
use crate::error_handling::{InitializationError, ResolveError};
use crate::geocode::address::{AddressSource, ResolvedAddress};
use crate::geocode::coordinates::Coordinates;
use crate::geocode::maps_co::MapsCoProvider;
use crate::geocode::nominatim::NominatimProvider;
use crate::geocode::provider::GeocodingProvider;

/// An ordered chain of reverse-geocoding providers.
///
/// Providers are tried in order until one answers. The first provider is the
/// primary source; any later provider that answers is reported as secondary.
/// A resolve never panics and never gives up before every hop has been tried.
pub struct ResolverChain {
    providers: Vec<Box<dyn GeocodingProvider>>,
}

impl ResolverChain {
    /// Builds a chain from an explicit provider list.
    ///
    /// The list order is the fallback order.
    pub fn new(providers: Vec<Box<dyn GeocodingProvider>>) -> Self {
        Self { providers }
    }

    /// Builds the configured chain: Nominatim first, geocode.maps.co second
    /// when an API key is available.
    pub fn from_config(
        config: &Config,
        client: Arc<reqwest::Client>,
    ) -> Result<Self, InitializationError> {
        let mut providers: Vec<Box<dyn GeocodingProvider>> =
            vec![Box::new(NominatimProvider::new(
                Arc::clone(&client),
                &config.nominatim_url,
                config.nominatim_contact(),
            )?)];

        match config.fallback_api_key() {
            Some(api_key) => providers.push(Box::new(MapsCoProvider::new(
                Arc::clone(&client),
                &config.geocode_maps_url,
                api_key,
            )?)),
            None => log::warn!(
                "no secondary provider API key configured; resolver runs primary-only"
            ),
        }

        Ok(Self::new(providers))
    }

    /// Provider names in fallback order, for startup logging.
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Resolves `coordinates` into an address, walking the chain in order.
    ///
    /// Coordinates must be finite; out-of-range values are clamped rather
    /// than rejected. The primary provider is queried with the clamped pair.
    /// Fallback hops are queried with the coordinates exactly as received,
    /// since a clamped pair that the primary could not resolve is unlikely to
    /// fare better unmodified. Successful responses always carry the clamped
    /// pair so clients never see out-of-range coordinates echoed back as part
    /// of a resolved address.
    pub async fn resolve(
        &self,
        coordinates: Coordinates,
        language: &str,
    ) -> Result<ResolvedAddress, ResolveError> {
        if !coordinates.is_valid() {
            return Err(ResolveError::InvalidCoordinates);
        }
        let clamped = coordinates.clamped();

        for (index, provider) in self.providers.iter().enumerate() {
            let attempt = if index == 0 { clamped } else { coordinates };
            match provider.reverse(attempt, language).await {
                Ok(raw) => {
                    let source = if index == 0 {
                        AddressSource::Primary
                    } else {
                        AddressSource::Secondary
                    };
                    log::info!(
                        "resolved ({}, {}) via {} provider '{}'",
                        attempt.lat,
                        attempt.lng,
                        source,
                        provider.name()
                    );
                    log::debug!("formatted address: {}", raw.display_name);

                    let components = provider.normalize(&raw);
                    return Ok(ResolvedAddress {
                        formatted: raw.display_name,
                        components,
                        coordinates: clamped,
                        source,
                    });
                }
                Err(e) => {
                    log::warn!(
                        "provider '{}' failed for ({}, {}): {}",
                        provider.name(),
                        attempt.lat,
                        attempt.lng,
                        e
                    );
                }
            }
        }

        log::error!(
            "all {} provider(s) failed for ({}, {})",
            self.providers.len(),
            coordinates.lat,
            coordinates.lng
        );
        Err(ResolveError::ResolutionFailed {
            lat: coordinates.lat,
            lng: coordinates.lng,
        })
    }
}
