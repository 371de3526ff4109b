//! Resolved address types.

use serde::{Deserialize, Serialize};

use crate::geocode::coordinates::Coordinates;

/// Which provider in the chain produced a resolved address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressSource {
    /// The first provider in the chain (Nominatim).
    Primary,
    /// A fallback provider that answered after the primary failed.
    Secondary,
}

impl AddressSource {
    /// Returns the wire label for this source.
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressSource::Primary => "primary",
            AddressSource::Secondary => "secondary",
        }
    }
}

impl std::fmt::Display for AddressSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured address fields in the shape checkout forms expect.
///
/// Fields a provider could not supply stay empty rather than being omitted,
/// so form filling can treat "empty" uniformly as "nothing to write".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressComponents {
    /// Primary street line (road or highway name).
    pub address1: String,
    /// Secondary street line (house number or house name).
    pub address2: String,
    /// City, falling back through town, village and municipality.
    pub city: String,
    /// State, region or county.
    pub state: String,
    /// Postal code.
    pub zip: String,
    /// Country display name.
    pub country: String,
    /// Uppercase ISO 3166-1 alpha-2 country code.
    pub country_code: String,
    /// Neighbourhood or suburb.
    pub neighborhood: String,
}

/// A fully resolved address, ready for the wire and for form filling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAddress {
    /// Single-line display form of the whole address.
    pub formatted: String,
    /// Structured per-field breakdown.
    pub components: AddressComponents,
    /// The coordinates the address was resolved for, after clamping.
    pub coordinates: Coordinates,
    /// Which provider produced this address.
    pub source: AddressSource,
}
