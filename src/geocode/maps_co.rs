//! Secondary provider adapter: geocode.maps.co.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use url::Url;

use crate::config::SECONDARY_PROVIDER_TIMEOUT;
use crate::error_handling::{categorize_provider_error, ProviderError};
use crate::geocode::address::AddressComponents;
use crate::geocode::coordinates::Coordinates;
use crate::geocode::provider::{
    first_non_empty, GeocodingProvider, RawProviderAddress,
};

/// Reverse-geocoding adapter for the geocode.maps.co fallback service.
///
/// The service requires an API key on every request, so this adapter is only
/// constructed when one is configured. There is no default key.
pub struct MapsCoProvider {
    client: Arc<reqwest::Client>,
    reverse_endpoint: String,
    api_key: String,
}

impl MapsCoProvider {
    /// Creates an adapter for the geocode.maps.co instance at `base_url`.
    pub fn new(
        client: Arc<reqwest::Client>,
        base_url: &str,
        api_key: String,
    ) -> Result<Self, url::ParseError> {
        Url::parse(base_url)?;
        Ok(Self {
            client,
            reverse_endpoint: format!("{}/reverse", base_url.trim_end_matches('/')),
            api_key,
        })
    }
}

impl GeocodingProvider for MapsCoProvider {
    fn name(&self) -> &'static str {
        "geocode.maps.co"
    }

    fn timeout(&self) -> Duration {
        SECONDARY_PROVIDER_TIMEOUT
    }

    fn reverse<'a>(
        &'a self,
        coordinates: Coordinates,
        _language: &'a str,
    ) -> BoxFuture<'a, Result<RawProviderAddress, ProviderError>> {
        Box::pin(async move {
            // The service has no localization parameter; language is ignored
            let params: Vec<(&str, String)> = vec![
                ("lat", coordinates.lat.to_string()),
                ("lon", coordinates.lng.to_string()),
                ("api_key", self.api_key.clone()),
            ];

            let raw: RawProviderAddress = self
                .client
                .get(&self.reverse_endpoint)
                .query(&params)
                .timeout(self.timeout())
                .send()
                .await
                .map_err(|e| categorize_provider_error(&e))?
                .error_for_status()
                .map_err(|e| categorize_provider_error(&e))?
                .json()
                .await
                .map_err(|e| categorize_provider_error(&e))?;

            if raw.display_name.is_empty() {
                return Err(ProviderError::NoDisplayName);
            }
            Ok(raw)
        })
    }

    fn normalize(&self, raw: &RawProviderAddress) -> AddressComponents {
        // The fallback service carries fewer component keys than Nominatim;
        // the fields it cannot supply stay empty.
        let parts = &raw.address;
        AddressComponents {
            address1: parts.road.clone(),
            city: first_non_empty(&[&parts.city, &parts.town]),
            state: parts.state.clone(),
            zip: parts.postcode.clone(),
            country: parts.country.clone(),
            country_code: parts.country_code.to_uppercase(),
            ..Default::default()
        }
    }
}
