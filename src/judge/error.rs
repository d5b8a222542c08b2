use thiserror::Error;

/// Errors returned by the judge.
#[derive(Debug, Error)]
pub enum JudgeError {
    /// The upstream LLM call failed.
    #[error("provider error: {0}")]
    Provider(String),

    /// The provider returned no text at all.
    #[error("provider returned an empty response")]
    EmptyResponse,

    /// The response text could not be parsed into the expected shape.
    #[error("malformed judge response: {reason}")]
    Malformed {
        /// What was wrong with the response.
        reason: String,
    },
}

/// Convenience result type for judge operations.
pub type JudgeResult<T> = Result<T, JudgeError>;
