//! Content fetching: URL in, extracted plain text out.
//!
//! The orchestrator only sees the [`ContentFetcher`] trait; the production
//! implementation is [`HttpFetcher`] (reqwest + tag stripping), and tests
//! substitute [`MockFetcher`].

pub mod error;
mod extract;
#[cfg(any(test, feature = "mock"))]
mod mock;

pub use error::{FetchError, FetchResult};
pub use extract::extract_text;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockFetcher;

use std::time::Duration;

use tracing::{debug, instrument};

/// Turns a URL into plain article text, or a failure signal.
pub trait ContentFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl std::future::Future<Output = FetchResult<String>> + Send;
}

/// Default request timeout for article downloads.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// HTTP implementation of [`ContentFetcher`].
///
/// Sends browser-like headers (some article hosts reject obvious bots),
/// follows redirects, and runs the HTML through [`extract_text`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Request` if the underlying client cannot be
    /// constructed.
    pub fn new(timeout: Duration) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(Self { client })
    }
}

impl ContentFetcher for HttpFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        let response = self
            .client
            .get(url)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header("Accept-Language", "en-US,en;q=0.5")
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let text = extract_text(&html);
        debug!(bytes = html.len(), extracted = text.len(), "page fetched");

        if text.is_empty() {
            return Err(FetchError::NoContent {
                url: url.to_string(),
            });
        }
        Ok(text)
    }
}
