//! HTTP gateway (Axum) over the validation orchestrator.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use state::AppState;

use crate::fetch::ContentFetcher;
use crate::judge::Judge;

pub fn create_router_with_state<J, F>(state: AppState<J, F>) -> Router
where
    J: Judge + 'static,
    F: ContentFetcher + 'static,
{
    Router::new()
        .route("/", get(health_handler))
        .route("/health", get(health_handler))
        .route("/api/v1/validate", post(handler::validate_url_handler))
        .route(
            "/api/v1/validate/article",
            post(handler::validate_article_handler),
        )
        .route(
            "/api/v1/hypotheses",
            get(handler::list_hypotheses_handler).post(handler::create_hypothesis_handler),
        )
        .route(
            "/api/v1/articles",
            get(handler::list_articles_handler).post(handler::upload_articles_handler),
        )
        .route(
            "/api/v1/researches",
            get(handler::list_researches_handler).post(handler::create_research_handler),
        )
        .route("/api/v1/entity_types", get(handler::list_entity_types_handler))
        .route("/api/v1/diseases", get(handler::list_diseases_handler))
        .route("/api/v1/targets", get(handler::list_targets_handler))
        .route("/api/v1/drugs", get(handler::list_drugs_handler))
        .route("/api/v1/effects", get(handler::list_effects_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    (StatusCode::OK, Json(HealthResponse { status: "ok" })).into_response()
}
