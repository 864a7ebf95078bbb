// src/data.rs
// Record types produced by the pipeline. All of them are append-only:
// each stage builds its records once and nothing downstream mutates them.

use serde::Serialize;

/// One state (or district) advertised on the root directory page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateRecord {
    /// Human-readable name as printed on the page, e.g. "Indiana".
    pub long_name: String,
    /// Lowercase URL segment, e.g. "in". Derived, unique per long name.
    pub short_code: String,
}

/// One city listed on a state directory page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityRecord {
    pub city_full_name: String,
    pub city_slug: String,
    /// Foreign key into `StateRecord::short_code`.
    pub state_code: String,
    /// `{base}/{state_code}/{city_slug}/`
    pub page_url: String,
}

/// One street address scraped off a city page. Deduplicated globally,
/// across the whole run, not per city.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct AddressRecord {
    #[serde(rename = "address")]
    pub raw_address: String,
}

impl AddressRecord {
    pub fn new(raw_address: impl Into<String>) -> Self {
        Self {
            raw_address: raw_address.into(),
        }
    }
}

/// An address row augmented with coordinates by the geocoder.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeocodedAddress {
    #[serde(rename = "address")]
    pub raw_address: String,
    pub longitude: f64,
    pub latitude: f64,
}
