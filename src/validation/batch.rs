//! Batch creation: discover articles for a hypothesis, ingest them, and
//! validate every one that survived ingestion.

use tracing::{info, instrument, warn};

use crate::domain::Article;
use crate::fetch::ContentFetcher;
use crate::judge::Judge;

use super::error::{OrchestrationResult, ValidationError};
use super::ingest::IngestOptions;
use super::validator::Validator;

/// One validated article inside a [`BatchReport`].
#[derive(Debug, Clone)]
pub struct ArticleAssessment {
    pub article: Article,
    pub relevancy: f64,
    pub key_take: String,
    pub validity: f64,
}

/// Outcome of [`Validator::create_and_validate`].
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub results: Vec<ArticleAssessment>,
    /// URLs that failed ingestion or validation, deduplicated.
    pub failed_articles: Vec<String>,
}

impl BatchReport {
    pub fn failed_count(&self) -> usize {
        self.failed_articles.len()
    }
}

impl<J: Judge, F: ContentFetcher> Validator<J, F> {
    /// Discover up to `article_count` articles for the hypothesis, ingest
    /// them, and validate each one.
    ///
    /// Discovery failure aborts the whole batch; after that point every
    /// failure is per-article and the rest of the batch proceeds. An
    /// empty discovery list yields an empty report.
    #[instrument(skip(self, hypothesis_title), fields(article_count))]
    pub async fn create_and_validate(
        &self,
        hypothesis_title: &str,
        article_count: usize,
    ) -> OrchestrationResult<BatchReport> {
        let urls = self
            .judge()
            .discover(hypothesis_title, article_count)
            .await
            .map_err(ValidationError::Discovery)?;

        if urls.is_empty() {
            warn!("discovery returned no articles for hypothesis");
            return Ok(BatchReport::default());
        }

        let ingest = self.upload_articles(&urls, &IngestOptions::default()).await?;
        let mut report = BatchReport {
            failed_articles: ingest.failed_urls,
            ..Default::default()
        };

        let mut seen = std::collections::HashSet::new();
        for url in &urls {
            let url = url.trim();
            if url.is_empty()
                || !seen.insert(url)
                || report.failed_articles.iter().any(|f| f == url)
            {
                continue;
            }

            match self.validate_url(hypothesis_title, url, None).await {
                Ok(assessment) => {
                    // The article row exists: ingestion just created or
                    // confirmed it.
                    let Some(article) = self.store().get_article_by_url(url, None).await? else {
                        report.failed_articles.push(url.to_string());
                        continue;
                    };
                    report.results.push(ArticleAssessment {
                        article,
                        relevancy: assessment.relevancy,
                        key_take: assessment.key_take,
                        validity: assessment.validity,
                    });
                }
                Err(err) => {
                    warn!(url, error = %err, "batch validation failed for article");
                    report.failed_articles.push(url.to_string());
                }
            }
        }

        info!(
            validated = report.results.len(),
            failed = report.failed_count(),
            "hypothesis batch complete"
        );
        Ok(report)
    }
}
