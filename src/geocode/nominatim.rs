//! Primary provider adapter: OpenStreetMap Nominatim.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use url::Url;

use crate::config::{NOMINATIM_ZOOM, PRIMARY_PROVIDER_TIMEOUT};
use crate::error_handling::{categorize_provider_error, ProviderError};
use crate::geocode::address::AddressComponents;
use crate::geocode::coordinates::Coordinates;
use crate::geocode::provider::{
    first_non_empty, GeocodingProvider, RawProviderAddress,
};

/// Reverse-geocoding adapter for a Nominatim instance.
///
/// Defaults to the public openstreetmap.org instance but accepts any base URL
/// so self-hosted instances work too.
pub struct NominatimProvider {
    client: Arc<reqwest::Client>,
    reverse_endpoint: String,
    contact_email: Option<String>,
}

impl NominatimProvider {
    /// Creates an adapter for the Nominatim instance at `base_url`.
    ///
    /// The contact email is passed along with each request per Nominatim's
    /// usage policy for identifying heavy users.
    pub fn new(
        client: Arc<reqwest::Client>,
        base_url: &str,
        contact_email: Option<String>,
    ) -> Result<Self, url::ParseError> {
        // Parse up front so a bad --nominatim-url fails at startup, not per request
        Url::parse(base_url)?;
        Ok(Self {
            client,
            reverse_endpoint: format!("{}/reverse", base_url.trim_end_matches('/')),
            contact_email,
        })
    }
}

impl GeocodingProvider for NominatimProvider {
    fn name(&self) -> &'static str {
        "nominatim"
    }

    fn timeout(&self) -> Duration {
        PRIMARY_PROVIDER_TIMEOUT
    }

    fn reverse<'a>(
        &'a self,
        coordinates: Coordinates,
        language: &'a str,
    ) -> BoxFuture<'a, Result<RawProviderAddress, ProviderError>> {
        Box::pin(async move {
            let mut params: Vec<(&str, String)> = vec![
                ("format", "json".to_string()),
                ("lat", coordinates.lat.to_string()),
                ("lon", coordinates.lng.to_string()),
                ("zoom", NOMINATIM_ZOOM.to_string()),
                ("addressdetails", "1".to_string()),
                ("accept-language", language.to_string()),
            ];
            if let Some(email) = &self.contact_email {
                params.push(("email", email.clone()));
            }

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
        let parts = &raw.address;
        AddressComponents {
            address1: first_non_empty(&[&parts.road, &parts.highway]),
            address2: first_non_empty(&[&parts.house_number, &parts.house_name]),
            city: first_non_empty(&[
                &parts.city,
                &parts.town,
                &parts.village,
                &parts.municipality,
            ]),
            state: first_non_empty(&[&parts.state, &parts.region, &parts.county]),
            zip: parts.postcode.clone(),
            country: parts.country.clone(),
            country_code: parts.country_code.to_uppercase(),
            neighborhood: first_non_empty(&[&parts.neighbourhood, &parts.suburb]),
        }
    }
}
