//! The reverse-geocoding provider abstraction.
//!
//! Each provider adapter knows how to query one upstream service and how to
//! normalize that service's response into [`AddressComponents`]. The resolver
//! chain only ever talks to this trait.

use std::time::Duration;

use futures::future::BoxFuture;
use serde::Deserialize;

use crate::error_handling::ProviderError;
use crate::geocode::address::AddressComponents;
use crate::geocode::coordinates::Coordinates;

/// Raw reverse-geocoding response in the Nominatim-style JSON shape.
///
/// Both upstream providers speak this dialect: a `display_name` line plus an
/// `address` object of free-form component keys. Every field defaults so a
/// sparse response still deserializes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProviderAddress {
    /// Single-line display form of the address.
    #[serde(default)]
    pub display_name: String,
    /// Component breakdown; keys vary by location and provider.
    #[serde(default)]
    pub address: RawAddressParts,
}

/// The address component keys the normalizers care about.
///
/// Upstream responses carry many more keys than these; serde drops the rest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAddressParts {
    /// Street name.
    #[serde(default)]
    pub road: String,
    /// Highway name, used when no road is present.
    #[serde(default)]
    pub highway: String,
    /// House number on the street.
    #[serde(default)]
    pub house_number: String,
    /// Named building or house.
    #[serde(default)]
    pub house_name: String,
    /// City name.
    #[serde(default)]
    pub city: String,
    /// Town name, first fallback for city.
    #[serde(default)]
    pub town: String,
    /// Village name, second fallback for city.
    #[serde(default)]
    pub village: String,
    /// Municipality name, last fallback for city.
    #[serde(default)]
    pub municipality: String,
    /// State or province.
    #[serde(default)]
    pub state: String,
    /// Region, first fallback for state.
    #[serde(default)]
    pub region: String,
    /// County, second fallback for state.
    #[serde(default)]
    pub county: String,
    /// Postal code.
    #[serde(default)]
    pub postcode: String,
    /// Country display name.
    #[serde(default)]
    pub country: String,
    /// Lowercase ISO country code as Nominatim emits it.
    #[serde(default)]
    pub country_code: String,
    /// Neighbourhood name.
    #[serde(default)]
    pub neighbourhood: String,
    /// Suburb name, fallback for neighbourhood.
    #[serde(default)]
    pub suburb: String,
}

/// A single reverse-geocoding upstream.
///
/// Implementations are stateless per request and shared behind the resolver
/// chain; `reverse` borrows rather than consumes so one adapter serves
/// concurrent resolves.
pub trait GeocodingProvider: Send + Sync {
    /// Short provider name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Per-request timeout for this provider.
    fn timeout(&self) -> Duration;

    /// Looks up the address at `coordinates`, localized to `language`.
    fn reverse<'a>(
        &'a self,
        coordinates: Coordinates,
        language: &'a str,
    ) -> BoxFuture<'a, Result<RawProviderAddress, ProviderError>>;

    /// Maps this provider's raw response onto the common component shape.
    fn normalize(&self, raw: &RawProviderAddress) -> AddressComponents;
}

/// Returns the first non-empty candidate, or an empty string.
pub(crate) fn first_non_empty(candidates: &[&str]) -> String {
    candidates
        .iter()
        .find(|value| !value.is_empty())
        .map(|value| value.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_non_empty_picks_in_order() {
        assert_eq!(first_non_empty(&["", "Riyadh", "Jeddah"]), "Riyadh");
        assert_eq!(first_non_empty(&["Dammam", "Riyadh"]), "Dammam");
        assert_eq!(first_non_empty(&["", ""]), "");
        assert_eq!(first_non_empty(&[]), "");
    }

    #[test]
    fn test_sparse_response_deserializes() {
        // A minimal upstream body must not fail deserialization
        let raw: RawProviderAddress =
            serde_json::from_str(r#"{"display_name": "Somewhere"}"#).unwrap();
        assert_eq!(raw.display_name, "Somewhere");
        assert_eq!(raw.address.road, "");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let raw: RawProviderAddress = serde_json::from_str(
            r#"{"display_name": "X", "licence": "ODbL", "address": {"road": "Main", "ISO3166-2-lvl4": "SA-01"}}"#,
        )
        .unwrap();
        assert_eq!(raw.address.road, "Main");
    }
}
