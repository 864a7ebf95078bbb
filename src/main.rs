// src/main.rs
// CLI entry point: scrape one locator site's directory tree, dump the
// address table, optionally geocode it.
//
//   store_scrape --base-url https://locations.example.com
//   store_scrape --base-url https://locations.example.com --geocode

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use store_scrape::config::consts::{
    DEFAULT_ADDRESSES_FILE, DEFAULT_GEOCODED_FILE, DEFAULT_OUT_DIR,
};
use store_scrape::core::LiveFetcher;
use store_scrape::geocode::{self, NominatimGeocoder};
use store_scrape::pipeline;
use store_scrape::specs::cities::SlugMode;
use store_scrape::export;

#[derive(Parser, Debug)]
#[command(name = "store_scrape", version, about)]
struct Args {
    /// Root URL of the locator directory, e.g. https://locations.example.com
    #[arg(long)]
    base_url: String,

    /// Output directory for CSV tables
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    out: PathBuf,

    /// Also geocode the collected addresses via Nominatim
    #[arg(long)]
    geocode: bool,

    /// Strip every space from city slugs instead of only the first gap
    #[arg(long)]
    strip_all_spaces: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let mode = if args.strip_all_spaces {
        SlugMode::AllWhitespace
    } else {
        SlugMode::FirstGap
    };

    let fetcher = LiveFetcher::new()?;
    let output = pipeline::run(&fetcher, &args.base_url, mode)?;

    let addresses_path = args.out.join(DEFAULT_ADDRESSES_FILE);
    export::write_addresses(&addresses_path, &output.addresses)?;
    info!("wrote {}", addresses_path.display());

    if args.geocode {
        let geocoder = NominatimGeocoder::new()?;
        let rows = geocode::geocode_all(&geocoder, &output.addresses);
        let geocoded_path = args.out.join(DEFAULT_GEOCODED_FILE);
        export::write_geocoded(&geocoded_path, &rows)?;
        info!("wrote {}", geocoded_path.display());
    }

    Ok(())
}
