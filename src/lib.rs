//! Eureka library crate (used by the server binary and integration tests).
//!
//! Validates biological hypotheses against scientific articles, with the
//! persisted result row acting as a durable cache: each
//! `(hypothesis, article)` pair is fetched and scored at most once.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`Store`] - SQLite-backed repositories for all entities
//! - [`Validator`], [`ArticleRef`] - The validation orchestrator
//! - [`Assessment`] - A judge's structured verdict
//!
//! ## Collaborators
//! - [`Judge`], [`LlmJudge`], [`JudgeConfig`] - Hypothesis scoring and
//!   article discovery
//! - [`ContentFetcher`], [`HttpFetcher`] - Article download and text
//!   extraction
//!
//! ## Batch Operations
//! - [`BatchReport`], [`ArticleAssessment`] - Discover-and-validate
//! - [`IngestReport`], [`IngestOptions`] - Bulk article upload
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod domain;
pub mod fetch;
pub mod gateway;
pub mod judge;
pub mod store;
pub mod validation;

pub use config::{Config, ConfigError};
pub use domain::{
    Article, Disease, Drug, Effect, EntityType, Hypothesis, NewArticle, Research, Target,
    UNTITLED_ARTICLE, ValidationResult, derive_article_title, derive_topic_fields,
};
pub use fetch::{ContentFetcher, DEFAULT_FETCH_TIMEOUT_SECS, FetchError, HttpFetcher};
#[cfg(any(test, feature = "mock"))]
pub use fetch::MockFetcher;
pub use judge::{
    ARTICLE_EXCERPT_CHARS, Assessment, DEFAULT_JUDGE_MODEL, Judge, JudgeConfig, JudgeError,
    LlmJudge,
};
#[cfg(any(test, feature = "mock"))]
pub use judge::MockJudge;
pub use store::{Store, StoreError};
pub use validation::{
    ArticleAssessment, ArticleRef, BatchReport, IngestOptions, IngestReport, OrchestrationResult,
    ValidationError, Validator,
};
