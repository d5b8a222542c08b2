//! The validation orchestrator: lookup, then compute, then cache.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::domain::{Article, Hypothesis, NewArticle, derive_article_title};
use crate::fetch::ContentFetcher;
use crate::judge::{Assessment, Judge};
use crate::store::Store;

use super::error::{OrchestrationResult, ValidationError};

/// Either side of the `article_reference` contract: a URL to fetch on
/// demand, or an id of an already-ingested article.
#[derive(Debug, Clone)]
pub enum ArticleRef<'a> {
    Url(&'a str),
    Id(i64),
}

/// Coordinates repositories, the fetcher, and the judge to answer "what is
/// the relevancy/validity of this article against this hypothesis".
///
/// The persisted `ValidationResult` row is the cache: repeated calls for
/// the same `(hypothesis, article)` pair return it verbatim without
/// touching the fetcher or the judge. The orchestrator holds no state of
/// its own beyond its collaborators.
pub struct Validator<J: Judge, F: ContentFetcher> {
    store: Arc<Store>,
    judge: J,
    fetcher: F,
}

impl<J: Judge, F: ContentFetcher> Validator<J, F> {
    pub fn new(store: Arc<Store>, judge: J, fetcher: F) -> Self {
        Self {
            store,
            judge,
            fetcher,
        }
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    pub(crate) fn judge(&self) -> &J {
        &self.judge
    }

    pub(crate) fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Validate a hypothesis against an article reference.
    pub async fn validate(
        &self,
        hypothesis_title: &str,
        article: ArticleRef<'_>,
    ) -> OrchestrationResult<Assessment> {
        match article {
            ArticleRef::Url(url) => self.validate_url(hypothesis_title, url, None).await,
            ArticleRef::Id(id) => self.validate_article_id(hypothesis_title, id).await,
        }
    }

    /// Validate a hypothesis against an article URL (§URL form).
    ///
    /// On a cache miss the article is fetched, persisted, scored, and the
    /// result stored — each step at most once. A judge failure leaves the
    /// persisted article in place, so the retry skips the fetch.
    #[instrument(skip(self, hypothesis_title), fields(hypothesis_len = hypothesis_title.len()))]
    pub async fn validate_url(
        &self,
        hypothesis_title: &str,
        url: &str,
        research_id: Option<i64>,
    ) -> OrchestrationResult<Assessment> {
        let url = url.trim();
        let hypothesis = self.store.get_or_create_hypothesis(hypothesis_title).await?;

        if let Some(article) = self.store.get_article_by_url(url, research_id).await? {
            if let Some(cached) = self.cached_assessment(&hypothesis, article.id).await? {
                return Ok(cached);
            }
            return self.score_and_store(&hypothesis, &article).await;
        }

        // Cache miss on the article itself: fetch before anything is
        // persisted, so a fetch failure leaves no partial row behind.
        let content = match self.fetcher.fetch(url).await {
            Ok(content) if !content.is_empty() => content,
            Ok(_) | Err(_) => {
                warn!(url, "could not extract article content");
                return Err(ValidationError::ContentUnavailable {
                    url: url.to_string(),
                });
            }
        };

        let title = derive_article_title(&content);
        let article = self
            .store
            .create_article(NewArticle {
                title: Some(title),
                url: url.to_string(),
                content,
                research_id,
                ..Default::default()
            })
            .await?;

        self.score_and_store(&hypothesis, &article).await
    }

    /// Validate a hypothesis against an already-ingested article
    /// (§article-id form). Used to revalidate a known article against a
    /// new hypothesis; never fetches.
    #[instrument(skip(self, hypothesis_title))]
    pub async fn validate_article_id(
        &self,
        hypothesis_title: &str,
        article_id: i64,
    ) -> OrchestrationResult<Assessment> {
        let article = self
            .store
            .get_article(article_id)
            .await?
            .filter(|a| !a.content.is_empty())
            .ok_or(ValidationError::ArticleNotFound { id: article_id })?;

        let hypothesis = self.store.get_or_create_hypothesis(hypothesis_title).await?;

        if let Some(cached) = self.cached_assessment(&hypothesis, article.id).await? {
            return Ok(cached);
        }
        self.score_and_store(&hypothesis, &article).await
    }

    async fn cached_assessment(
        &self,
        hypothesis: &Hypothesis,
        article_id: i64,
    ) -> OrchestrationResult<Option<Assessment>> {
        let Some(result) = self.store.get_result(hypothesis.id, article_id).await? else {
            return Ok(None);
        };

        debug!(
            hypothesis_id = hypothesis.id,
            article_id, "validation cache hit"
        );
        Ok(Some(Assessment {
            relevancy: result.relevancy,
            key_take: result.key_take,
            validity: result.validity,
        }))
    }

    async fn score_and_store(
        &self,
        hypothesis: &Hypothesis,
        article: &Article,
    ) -> OrchestrationResult<Assessment> {
        // A judge failure propagates here with the article already
        // persisted; that asymmetry is intentional, the next attempt
        // resumes from the stored content.
        let assessment = self
            .judge
            .score(&hypothesis.title, &article.content)
            .await?;

        let stored = self
            .store
            .create_result(hypothesis.id, article.id, &assessment)
            .await?;

        info!(
            hypothesis_id = hypothesis.id,
            article_id = article.id,
            relevancy = stored.relevancy,
            validity = stored.validity,
            "validation result stored"
        );

        Ok(Assessment {
            relevancy: stored.relevancy,
            key_take: stored.key_take,
            validity: stored.validity,
        })
    }
}

impl<J: Judge, F: ContentFetcher> std::fmt::Debug for Validator<J, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
