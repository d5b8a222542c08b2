use thiserror::Error;

use crate::judge::JudgeError;
use crate::store::StoreError;

/// Errors surfaced by the validation orchestrator.
///
/// Persistence conflicts never appear here: the store recovers them
/// internally by re-reading the raced row.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The fetcher returned no usable text for a brand-new URL. No state
    /// was mutated.
    #[error("could not extract content from the article URL: {url}")]
    ContentUnavailable {
        /// The URL that failed.
        url: String,
    },

    /// The id-form lookup failed: unknown article id, or an article row
    /// without content.
    #[error("article with ID {id} not found")]
    ArticleNotFound {
        /// The requested article id.
        id: i64,
    },

    /// External scoring failed. Any newly created article row is
    /// retained, so a retry resumes from the cached content.
    #[error("hypothesis validation failed: {0}")]
    Judge(#[from] JudgeError),

    /// The batch discovery step failed; the whole batch aborts before any
    /// per-article work.
    #[error("article discovery failed: {0}")]
    Discovery(#[source] JudgeError),

    /// Repository failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience result type for orchestrator operations. (The stored
/// entity is `domain::ValidationResult`, hence the distinct name.)
pub type OrchestrationResult<T> = Result<T, ValidationError>;
