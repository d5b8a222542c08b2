//! Hypothesis validation orchestration.
//!
//! [`Validator`] ties the store, the [`crate::judge::Judge`], and the
//! [`crate::fetch::ContentFetcher`] together. The persisted row is the
//! cache; every external call happens at most once per
//! `(hypothesis, article)` pair.

mod batch;
mod error;
mod ingest;
mod validator;

pub use batch::{ArticleAssessment, BatchReport};
pub use error::{OrchestrationResult, ValidationError};
pub use ingest::{IngestOptions, IngestReport};
pub use validator::{ArticleRef, Validator};

#[cfg(test)]
mod tests;
