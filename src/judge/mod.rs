//! The external reasoning service ("judge"): scores a hypothesis against
//! article text and suggests candidate articles.
//!
//! The orchestrator depends only on the [`Judge`] trait. The production
//! implementation is [`LlmJudge`] over a `genai` chat client with an
//! explicitly injected model (no process-global client state); its
//! response handling lives in [`parser`] so the integration can be swapped
//! without touching orchestration logic.

pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
pub mod parser;
mod types;

pub use client::{ARTICLE_EXCERPT_CHARS, DEFAULT_JUDGE_MODEL, JudgeConfig, LlmJudge};
pub use error::{JudgeError, JudgeResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockJudge;
pub use types::Assessment;

/// Scores hypotheses against article text and discovers candidate article
/// URLs.
pub trait Judge: Send + Sync {
    /// Score `article` against `hypothesis`.
    fn score(
        &self,
        hypothesis: &str,
        article: &str,
    ) -> impl std::future::Future<Output = JudgeResult<Assessment>> + Send;

    /// Suggest up to `count` candidate article URLs for `hypothesis`.
    ///
    /// Best-effort: may return fewer than `count`, may be empty. The
    /// implementation is responsible for only returning URLs from sources
    /// it trusts.
    fn discover(
        &self,
        hypothesis: &str,
        count: usize,
    ) -> impl std::future::Future<Output = JudgeResult<Vec<String>>> + Send;
}
