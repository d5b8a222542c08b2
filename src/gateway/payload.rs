//! Request and response bodies for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::domain::Article;
use crate::judge::Assessment;
use crate::validation::ArticleAssessment;

#[derive(Debug, Deserialize)]
pub struct ValidateUrlRequest {
    pub hypothesis: String,
    pub article_url: String,
    #[serde(default)]
    pub research_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateArticleRequest {
    pub hypothesis: String,
    pub article_id: i64,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub result: Assessment,
}

fn default_articles_amount() -> usize {
    5
}

#[derive(Debug, Deserialize)]
pub struct HypothesisCreationRequest {
    pub hypothesis: String,
    #[serde(default = "default_articles_amount")]
    pub articles_amount: usize,
}

/// One validated article inside a [`HypothesisCreationResponse`].
#[derive(Debug, Serialize)]
pub struct ArticleResultPayload {
    pub article_id: i64,
    pub article_url: String,
    pub article_title: Option<String>,
    pub relevancy: f64,
    pub key_take: String,
    pub validity: f64,
}

impl From<ArticleAssessment> for ArticleResultPayload {
    fn from(entry: ArticleAssessment) -> Self {
        Self {
            article_id: entry.article.id,
            article_url: entry.article.url,
            article_title: entry.article.title,
            relevancy: entry.relevancy,
            key_take: entry.key_take,
            validity: entry.validity,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HypothesisCreationResponse {
    pub validation_results: Vec<ArticleResultPayload>,
    pub failed_articles_amount: usize,
    pub failed_articles: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UploadArticlesRequest {
    pub urls: Vec<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub main_item: Option<String>,
    #[serde(default)]
    pub secondary_item: Option<String>,
    #[serde(default)]
    pub research_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct UploadArticlesResponse {
    pub uploaded_count: usize,
    pub failed_urls: Vec<String>,
}

/// Article without its (potentially large) content, for list endpoints.
#[derive(Debug, Serialize)]
pub struct ArticleSummary {
    pub id: i64,
    pub title: Option<String>,
    pub url: String,
    pub topic: Option<String>,
    pub main_item: Option<String>,
    pub secondary_item: Option<String>,
    pub research_id: Option<i64>,
}

impl From<Article> for ArticleSummary {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            url: article.url,
            topic: article.topic,
            main_item: article.main_item,
            secondary_item: article.secondary_item,
            research_id: article.research_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ArticlesQuery {
    pub research_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateResearchRequest {
    pub primary_item: String,
    pub secondary_item: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ResearchSearchQuery {
    #[serde(default)]
    pub primary_item: Option<String>,
    #[serde(default)]
    pub secondary_item: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct TargetsQuery {
    #[serde(default)]
    pub disease_id: Option<i64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct EffectsQuery {
    #[serde(default)]
    pub drug_id: Option<i64>,
}
