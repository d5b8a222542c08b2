use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::ContentFetcher;
use super::error::{FetchError, FetchResult};

/// In-memory fetcher for tests: canned content per URL, unknown URLs fail,
/// and every fetch is counted so tests can assert content is fetched at
/// most once.
#[derive(Default, Clone)]
pub struct MockFetcher {
    pages: Arc<RwLock<HashMap<String, String>>>,
    counts: Arc<RwLock<HashMap<String, usize>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `content` for `url`.
    pub fn insert(&self, url: &str, content: &str) {
        self.pages
            .write()
            .expect("lock poisoned")
            .insert(url.to_string(), content.to_string());
    }

    /// Number of fetch attempts seen for `url` (including failures).
    pub fn fetch_count(&self, url: &str) -> usize {
        self.counts
            .read()
            .expect("lock poisoned")
            .get(url)
            .copied()
            .unwrap_or(0)
    }

    /// Total fetch attempts across all URLs.
    pub fn total_fetches(&self) -> usize {
        self.counts.read().expect("lock poisoned").values().sum()
    }
}

impl ContentFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        *self
            .counts
            .write()
            .expect("lock poisoned")
            .entry(url.to_string())
            .or_insert(0) += 1;

        match self.pages.read().expect("lock poisoned").get(url) {
            Some(content) => Ok(content.clone()),
            None => Err(FetchError::NoContent {
                url: url.to_string(),
            }),
        }
    }
}
