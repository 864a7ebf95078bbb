// src/export.rs
// Flat CSV dumps: the address table (one column) and the geocoded table
// (address, longitude, latitude).

use std::fs;
use std::path::Path;

use crate::core::ScrapeError;
use crate::data::{AddressRecord, GeocodedAddress};

fn ensure_parent(path: &Path) -> Result<(), ScrapeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Write the single-column address table. Header comes from the record's
/// serde field names.
pub fn write_addresses(path: &Path, records: &[AddressRecord]) -> Result<(), ScrapeError> {
    ensure_parent(path)?;
    let mut w = csv::Writer::from_path(path)?;
    for r in records {
        w.serialize(r)?;
    }
    w.flush()?;
    Ok(())
}

/// Write the geocoded table: one row per resolved address.
pub fn write_geocoded(path: &Path, records: &[GeocodedAddress]) -> Result<(), ScrapeError> {
    ensure_parent(path)?;
    let mut w = csv::Writer::from_path(path)?;
    for r in records {
        w.serialize(r)?;
    }
    w.flush()?;
    Ok(())
}
