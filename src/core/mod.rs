// src/core/mod.rs
// Low-level building blocks shared by all page specs:
// fetching, text extraction, error types.

pub mod error;
pub mod extract;
pub mod fetch;

pub use error::{FetchError, GeocodeError, ScrapeError};
pub use extract::{clean_text, select_texts};
pub use fetch::{FixtureFetcher, LiveFetcher, PageFetcher};
