// src/geocode.rs
// Address → (longitude, latitude) via the Nominatim (OpenStreetMap) API.
//
// Geocoding is delegated entirely to the external service; this module
// only shapes the request/response and decides the batch policy: a row
// that fails to resolve is logged and skipped, never fatal.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::core::GeocodeError;
use crate::data::{AddressRecord, GeocodedAddress};

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Coordinate resolver. One address in, one (longitude, latitude) out.
pub trait Geocoder {
    fn geocode(&self, address: &str) -> Result<(f64, f64), GeocodeError>;
}

#[derive(Debug, Deserialize)]
struct NominatimHit {
    lat: String,
    lon: String,
}

/// Live Nominatim client.
pub struct NominatimGeocoder {
    client: Client,
}

impl NominatimGeocoder {
    pub fn new() -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .user_agent(concat!("store_scrape/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

impl Geocoder for NominatimGeocoder {
    fn geocode(&self, address: &str) -> Result<(f64, f64), GeocodeError> {
        let url = format!(
            "{}?q={}&format=json&limit=1",
            NOMINATIM_URL,
            urlencoding::encode(address)
        );

        let hits: Vec<NominatimHit> = self.client.get(&url).send()?.json()?;

        let hit = hits.first().ok_or_else(|| GeocodeError::NoMatch {
            query: address.to_string(),
        })?;

        let lat: f64 = hit.lat.parse().map_err(|_| GeocodeError::BadCoordinate {
            value: hit.lat.clone(),
        })?;
        let lon: f64 = hit.lon.parse().map_err(|_| GeocodeError::BadCoordinate {
            value: hit.lon.clone(),
        })?;

        Ok((lon, lat))
    }
}

/// Geocode a whole address table. Rows that fail resolve to nothing;
/// the rest come back in input order.
pub fn geocode_all(geocoder: &dyn Geocoder, records: &[AddressRecord]) -> Vec<GeocodedAddress> {
    let mut out = Vec::with_capacity(records.len());

    for record in records {
        match geocoder.geocode(&record.raw_address) {
            Ok((lon, lat)) => out.push(GeocodedAddress {
                raw_address: record.raw_address.clone(),
                longitude: lon,
                latitude: lat,
            }),
            Err(e) => warn!("skipping address {:?}: {}", record.raw_address, e),
        }
    }

    info!("geocoded {}/{} addresses", out.len(), records.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Canned geocoder: address → coordinates, anything else fails.
    struct FixtureGeocoder(HashMap<String, (f64, f64)>);

    impl Geocoder for FixtureGeocoder {
        fn geocode(&self, address: &str) -> Result<(f64, f64), GeocodeError> {
            self.0.get(address).copied().ok_or(GeocodeError::NoMatch {
                query: address.to_string(),
            })
        }
    }

    #[test]
    fn failing_row_is_skipped_not_fatal() {
        let mut table = HashMap::new();
        table.insert("1 Main St".to_string(), (-93.27, 44.98));
        table.insert("2 Oak Ave".to_string(), (-92.10, 46.78));
        let g = FixtureGeocoder(table);

        let records = vec![
            AddressRecord::new("1 Main St"),
            AddressRecord::new("no such place"),
            AddressRecord::new("2 Oak Ave"),
        ];

        let got = geocode_all(&g, &records);
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].raw_address, "1 Main St");
        assert_eq!(got[0].longitude, -93.27);
        assert_eq!(got[0].latitude, 44.98);
        assert_eq!(got[1].raw_address, "2 Oak Ave");
    }
}
