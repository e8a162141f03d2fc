use super::engine::SearchService;
use super::types::{HealthResponse, SearchParams, SearchResponse};
use crate::error::SearchError;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json, Router, routing::get};
use std::sync::Arc;
use tracing::Instrument;

pub const ENDPOINT_SEARCH: &str = "/search";
pub const ENDPOINT_HEALTH: &str = "/health";

pub fn router(service: Arc<SearchService>) -> Router {
    Router::new()
        .route(ENDPOINT_SEARCH, get(handle_search))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(Extension(service))
}

pub async fn handle_search(
    Extension(service): Extension<Arc<SearchService>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let request_id = uuid::Uuid::new_v4();
    let query = SearchParams::from_pairs(pairs).query.unwrap_or_default();

    let result = service
        .search(&query)
        .instrument(tracing::info_span!("search", %request_id))
        .await;

    match result {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            match &e {
                SearchError::EmptyQuery(_) => {
                    tracing::debug!("Rejected request {}: {}", request_id, e)
                }
                SearchError::Tokenization(_) => {
                    tracing::error!("Search {} failed: {}", request_id, e)
                }
            }
            Err((e.status_code(), e.client_message()))
        }
    }
}

pub async fn handle_health(
    Extension(service): Extension<Arc<SearchService>>,
) -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(service.health()))
}
