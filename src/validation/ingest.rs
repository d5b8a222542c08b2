//! Article ingestion: fetch and persist articles ahead of validation.

use tracing::{instrument, warn};

use crate::domain::{Article, NewArticle, derive_article_title};
use crate::fetch::ContentFetcher;
use crate::judge::Judge;

use super::error::{OrchestrationResult, ValidationError};
use super::validator::Validator;

/// Outcome of a bulk ingestion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// URLs now present in the store (fetched here or already there).
    pub uploaded_count: usize,
    /// URLs that yielded no content, in input order.
    pub failed_urls: Vec<String>,
}

/// Optional classification applied to every article in an ingestion pass.
#[derive(Debug, Clone, Default)]
pub struct IngestOptions {
    pub topic: Option<String>,
    pub main_item: Option<String>,
    pub secondary_item: Option<String>,
    pub research_id: Option<i64>,
}

impl<J: Judge, F: ContentFetcher> Validator<J, F> {
    /// Fetch and persist a single article, returning the existing row if
    /// the `(url, research_id)` pair is already known.
    #[instrument(skip(self, options))]
    pub async fn upload_article(
        &self,
        url: &str,
        title: Option<&str>,
        options: &IngestOptions,
    ) -> OrchestrationResult<Article> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ValidationError::ContentUnavailable {
                url: String::new(),
            });
        }

        if let Some(existing) = self
            .store()
            .get_article_by_url(url, options.research_id)
            .await?
        {
            return Ok(existing);
        }

        let content = match self.fetcher().fetch(url).await {
            Ok(content) if !content.is_empty() => content,
            Ok(_) | Err(_) => {
                warn!(url, "could not extract article content");
                return Err(ValidationError::ContentUnavailable {
                    url: url.to_string(),
                });
            }
        };

        let title = match title {
            Some(t) if !t.trim().is_empty() => t.trim().to_string(),
            _ => derive_article_title(&content),
        };

        Ok(self
            .store()
            .create_article(NewArticle {
                title: Some(title),
                url: url.to_string(),
                content,
                topic: options.topic.clone(),
                main_item: options.main_item.clone(),
                secondary_item: options.secondary_item.clone(),
                research_id: options.research_id,
            })
            .await?)
    }

    /// Bulk ingestion: fetch and persist every URL, skipping duplicates
    /// within the batch and URLs already in the store (both count as
    /// uploaded). A single URL's failure never aborts the pass.
    #[instrument(skip(self, urls, options), fields(urls = urls.len()))]
    pub async fn upload_articles(
        &self,
        urls: &[String],
        options: &IngestOptions,
    ) -> OrchestrationResult<IngestReport> {
        let mut report = IngestReport::default();
        let mut seen = std::collections::HashSet::new();

        for url in urls {
            let url = url.trim();
            if url.is_empty() || !seen.insert(url.to_string()) {
                continue;
            }

            match self.upload_article(url, None, options).await {
                Ok(_) => report.uploaded_count += 1,
                Err(ValidationError::ContentUnavailable { .. }) => {
                    report.failed_urls.push(url.to_string());
                }
                Err(other) => {
                    // Store and judge failures also mark just this URL,
                    // matching the per-article error policy.
                    warn!(url, error = %other, "article ingestion failed");
                    report.failed_urls.push(url.to_string());
                }
            }
        }

        Ok(report)
    }
}
