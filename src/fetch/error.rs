use thiserror::Error;

/// Errors from content fetching.
///
/// A failure here is distinct from an empty-but-valid result; callers map
/// both onto their own "content unavailable" error.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP request itself failed (DNS, connect, timeout).
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The page yielded no extractable text.
    #[error("no extractable content at {url}")]
    NoContent {
        /// Requested URL.
        url: String,
    },
}

/// Convenience result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
