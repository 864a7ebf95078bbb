// src/core/fetch.rs
// One blocking GET per page, parsed into a scraper document.
// No retries, no backoff; a failed page is the caller's policy problem.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::blocking::Client;
use scraper::Html;

use super::error::FetchError;

const USER_AGENT: &str = concat!("store_scrape/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Source of parsed pages. The pipeline never cares whether documents come
/// off the wire or out of a snapshot; callers pick the implementation.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<Html, FetchError>;
}

/// Live HTTP fetcher.
pub struct LiveFetcher {
    client: Client,
}

impl LiveFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Request {
                url: String::new(),
                source: e,
            })?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Request {
                url: url.to_string(),
                source: e,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        resp.text().map_err(|e| FetchError::Request {
            url: url.to_string(),
            source: e,
        })
    }
}

impl PageFetcher for LiveFetcher {
    fn fetch(&self, url: &str) -> Result<Html, FetchError> {
        let body = self.get(url)?;
        Ok(Html::parse_document(&body))
    }
}

/// Canned-page fetcher for offline runs and tests: URL → saved HTML.
#[derive(Default)]
pub struct FixtureFetcher {
    pages: HashMap<String, String>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, url: impl Into<String>, html: impl Into<String>) {
        self.pages.insert(url.into(), html.into());
    }

    /// Builder-style convenience for test setup.
    pub fn with(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.insert(url, html);
        self
    }
}

impl PageFetcher for FixtureFetcher {
    fn fetch(&self, url: &str) -> Result<Html, FetchError> {
        match self.pages.get(url) {
            Some(body) => Ok(Html::parse_document(body)),
            None => Err(FetchError::MissingFixture {
                url: url.to_string(),
            }),
        }
    }
}
