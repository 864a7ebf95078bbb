// src/core/error.rs
// Error types for the scrape pipeline and its collaborators.

use thiserror::Error;

/// A page could not be fetched. Network trouble, a non-2xx status, or
/// (for fixture runs) a URL with no canned document.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed for {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("no fixture registered for {url}")]
    MissingFixture { url: String },
}

/// An address could not be resolved to coordinates.
/// Always recoverable per row; never aborts a batch.
#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("no match for address: {query}")]
    NoMatch { query: String },

    #[error("unparsable coordinate in response: {value}")]
    BadCoordinate { value: String },
}

/// Top-level pipeline error.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The selector string itself is malformed. A selector that matches
    /// nothing is not an error; it yields zero results.
    #[error("invalid selector: {0}")]
    Selector(String),

    #[error("csv write failed: {0}")]
    Export(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
