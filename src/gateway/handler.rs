//! Request handlers for the validation API.

use axum::{
    Json,
    extract::{Query, State},
};
use tracing::instrument;

use crate::fetch::ContentFetcher;
use crate::judge::Judge;
use crate::validation::{ArticleRef, IngestOptions};

use super::error::GatewayError;
use super::payload::{
    ArticleResultPayload, ArticleSummary, ArticlesQuery, CreateResearchRequest, EffectsQuery,
    HypothesisCreationRequest, HypothesisCreationResponse, ResearchSearchQuery, TargetsQuery,
    UploadArticlesRequest, UploadArticlesResponse, ValidateArticleRequest, ValidateResponse,
    ValidateUrlRequest,
};
use super::state::AppState;

type Result<T> = std::result::Result<Json<T>, GatewayError>;

fn require_hypothesis(hypothesis: &str) -> std::result::Result<&str, GatewayError> {
    let hypothesis = hypothesis.trim();
    if hypothesis.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "hypothesis must not be empty".to_string(),
        ));
    }
    Ok(hypothesis)
}

#[instrument(skip(state, request))]
pub async fn validate_url_handler<J: Judge, F: ContentFetcher>(
    State(state): State<AppState<J, F>>,
    Json(request): Json<ValidateUrlRequest>,
) -> Result<ValidateResponse> {
    let hypothesis = require_hypothesis(&request.hypothesis)?;
    if request.article_url.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(
            "article_url must not be empty".to_string(),
        ));
    }

    let result = state
        .validator
        .validate_url(hypothesis, &request.article_url, request.research_id)
        .await?;
    Ok(Json(ValidateResponse { result }))
}

#[instrument(skip(state, request))]
pub async fn validate_article_handler<J: Judge, F: ContentFetcher>(
    State(state): State<AppState<J, F>>,
    Json(request): Json<ValidateArticleRequest>,
) -> Result<ValidateResponse> {
    let hypothesis = require_hypothesis(&request.hypothesis)?;

    let result = state
        .validator
        .validate(hypothesis, ArticleRef::Id(request.article_id))
        .await?;
    Ok(Json(ValidateResponse { result }))
}

#[instrument(skip(state, request))]
pub async fn create_hypothesis_handler<J: Judge, F: ContentFetcher>(
    State(state): State<AppState<J, F>>,
    Json(request): Json<HypothesisCreationRequest>,
) -> Result<HypothesisCreationResponse> {
    let hypothesis = require_hypothesis(&request.hypothesis)?;

    let report = state
        .validator
        .create_and_validate(hypothesis, request.articles_amount)
        .await?;

    Ok(Json(HypothesisCreationResponse {
        failed_articles_amount: report.failed_count(),
        failed_articles: report.failed_articles,
        validation_results: report
            .results
            .into_iter()
            .map(ArticleResultPayload::from)
            .collect(),
    }))
}

#[instrument(skip(state, request), fields(urls = request.urls.len()))]
pub async fn upload_articles_handler<J: Judge, F: ContentFetcher>(
    State(state): State<AppState<J, F>>,
    Json(request): Json<UploadArticlesRequest>,
) -> Result<UploadArticlesResponse> {
    let options = IngestOptions {
        topic: request.topic,
        main_item: request.main_item,
        secondary_item: request.secondary_item,
        research_id: request.research_id,
    };

    let report = state
        .validator
        .upload_articles(&request.urls, &options)
        .await?;
    Ok(Json(UploadArticlesResponse {
        uploaded_count: report.uploaded_count,
        failed_urls: report.failed_urls,
    }))
}

#[instrument(skip(state))]
pub async fn list_articles_handler<J: Judge, F: ContentFetcher>(
    State(state): State<AppState<J, F>>,
    Query(query): Query<ArticlesQuery>,
) -> Result<Vec<ArticleSummary>> {
    let articles = state
        .store()
        .get_articles_by_research(query.research_id)
        .await?;
    Ok(Json(articles.into_iter().map(ArticleSummary::from).collect()))
}

#[instrument(skip(state, request))]
pub async fn create_research_handler<J: Judge, F: ContentFetcher>(
    State(state): State<AppState<J, F>>,
    Json(request): Json<CreateResearchRequest>,
) -> Result<crate::domain::Research> {
    let primary = request.primary_item.trim();
    let secondary = request.secondary_item.trim();
    if primary.is_empty() || secondary.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "primary_item and secondary_item must not be empty".to_string(),
        ));
    }

    let research = state.store().create_research(primary, secondary).await?;
    Ok(Json(research))
}

#[instrument(skip(state))]
pub async fn list_researches_handler<J: Judge, F: ContentFetcher>(
    State(state): State<AppState<J, F>>,
    Query(query): Query<ResearchSearchQuery>,
) -> Result<Vec<crate::domain::Research>> {
    let researches = if query.primary_item.is_none() && query.secondary_item.is_none() {
        state.store().list_researches().await?
    } else {
        state
            .store()
            .search_researches(query.primary_item.as_deref(), query.secondary_item.as_deref())
            .await?
    };
    Ok(Json(researches))
}

#[instrument(skip(state))]
pub async fn list_hypotheses_handler<J: Judge, F: ContentFetcher>(
    State(state): State<AppState<J, F>>,
) -> Result<Vec<crate::domain::Hypothesis>> {
    Ok(Json(state.store().list_hypotheses().await?))
}

#[instrument(skip(state))]
pub async fn list_entity_types_handler<J: Judge, F: ContentFetcher>(
    State(state): State<AppState<J, F>>,
) -> Result<Vec<crate::domain::EntityType>> {
    Ok(Json(state.store().list_entity_types().await?))
}

#[instrument(skip(state))]
pub async fn list_diseases_handler<J: Judge, F: ContentFetcher>(
    State(state): State<AppState<J, F>>,
) -> Result<Vec<crate::domain::Disease>> {
    Ok(Json(state.store().list_diseases().await?))
}

#[instrument(skip(state))]
pub async fn list_targets_handler<J: Judge, F: ContentFetcher>(
    State(state): State<AppState<J, F>>,
    Query(query): Query<TargetsQuery>,
) -> Result<Vec<crate::domain::Target>> {
    Ok(Json(state.store().list_targets(query.disease_id).await?))
}

#[instrument(skip(state))]
pub async fn list_drugs_handler<J: Judge, F: ContentFetcher>(
    State(state): State<AppState<J, F>>,
) -> Result<Vec<crate::domain::Drug>> {
    Ok(Json(state.store().list_drugs().await?))
}

#[instrument(skip(state))]
pub async fn list_effects_handler<J: Judge, F: ContentFetcher>(
    State(state): State<AppState<J, F>>,
    Query(query): Query<EffectsQuery>,
) -> Result<Vec<crate::domain::Effect>> {
    Ok(Json(state.store().list_effects(query.drug_id).await?))
}
