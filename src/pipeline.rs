// src/pipeline.rs
// Sequential three-stage driver: states → cities → addresses.
//
// Fetch policy: the single root page is fatal on failure (a partial state
// list means nothing). Per-state and per-city failures are logged and
// skipped so a flaky page costs one unit, not the run.
//
// Everything is fetched one page at a time, in order. Output ordering is
// therefore deterministic for a fixed fetcher, which the tests rely on.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::config::consts::{ADDRESS_BLOCK_SELECTOR, DIRECTORY_ITEM_SELECTOR};
use crate::core::{select_texts, PageFetcher, ScrapeError};
use crate::data::{AddressRecord, CityRecord, StateRecord};
use crate::specs::{addresses, cities, states};
use crate::specs::cities::SlugMode;

/// Everything one run produces, owned by the caller. Each stage only ever
/// appends; no ambient shared state.
pub struct PipelineOutput {
    pub states: Vec<StateRecord>,
    pub cities: Vec<CityRecord>,
    pub addresses: Vec<AddressRecord>,
}

/// Stage 1: root directory page → states.
/// A fetch failure here aborts the run.
pub fn collect_states(
    fetcher: &dyn PageFetcher,
    base_url: &str,
) -> Result<Vec<StateRecord>, ScrapeError> {
    let doc = fetcher.fetch(base_url)?;
    let texts = select_texts(&doc, DIRECTORY_ITEM_SELECTOR)?;
    let records = states::from_directory_texts(&texts);
    info!("found {} states", records.len());
    Ok(records)
}

/// Stage 2: per-state directory pages → cities, concatenated in state order.
/// A failed state page is skipped.
pub fn collect_cities(
    fetcher: &dyn PageFetcher,
    base_url: &str,
    state_records: &[StateRecord],
    mode: SlugMode,
) -> Result<Vec<CityRecord>, ScrapeError> {
    let mut out = Vec::new();

    for state in state_records {
        let url = cities::state_url(base_url, &state.short_code);
        let doc = match fetcher.fetch(&url) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("skipping state {}: {}", state.long_name, e);
                continue;
            }
        };
        let texts = select_texts(&doc, DIRECTORY_ITEM_SELECTOR)?;
        out.extend(cities::from_directory_texts(
            base_url,
            &state.short_code,
            &texts,
            mode,
        ));
    }

    info!("found {} cities", out.len());
    Ok(out)
}

/// Stage 3: per-city pages → addresses, deduplicated once over the whole
/// accumulated collection (first-seen order). A failed city page is skipped.
pub fn collect_addresses(
    fetcher: &dyn PageFetcher,
    city_records: &[CityRecord],
) -> Result<Vec<AddressRecord>, ScrapeError> {
    let mut accumulated = Vec::new();

    for city in city_records {
        let doc = match fetcher.fetch(&city.page_url) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(
                    "skipping city {} ({}): {}",
                    city.city_full_name, city.state_code, e
                );
                continue;
            }
        };
        let texts = select_texts(&doc, ADDRESS_BLOCK_SELECTOR)?;
        accumulated.extend(addresses::from_block_texts(&texts));
    }

    // Global dedup, applied once at the end.
    let mut seen: HashSet<String> = HashSet::new();
    let deduped: Vec<AddressRecord> = accumulated
        .into_iter()
        .filter(|a| seen.insert(a.raw_address.clone()))
        .collect();

    info!("found {} unique addresses", deduped.len());
    Ok(deduped)
}

/// Full run: all three stages against one fetcher.
pub fn run(
    fetcher: &dyn PageFetcher,
    base_url: &str,
    mode: SlugMode,
) -> Result<PipelineOutput, ScrapeError> {
    let states = collect_states(fetcher, base_url)?;
    let cities = collect_cities(fetcher, base_url, &states, mode)?;
    let addresses = collect_addresses(fetcher, &cities)?;
    Ok(PipelineOutput {
        states,
        cities,
        addresses,
    })
}
