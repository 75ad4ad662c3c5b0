//! Thin HTTP layer over the retrieval pipeline.
//!
//! `POST /search` runs one retrieval; any pipeline failure is mapped to a
//! 500 with a `detail` message. `GET /health` is a trivial liveness probe.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::error;

use crate::{SearchRequest, Searcher};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    searcher: Arc<Searcher>,
}

impl AppState {
    /// Creates state around a searcher.
    pub fn new(searcher: Searcher) -> Self {
        Self {
            searcher: Arc::new(searcher),
        }
    }
}

/// Error body returned on any failed retrieval.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    detail: String,
}

/// Creates the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/search", post(search))
        .route("/health", get(health))
        .with_state(state)
}

/// Search handler.
async fn search(State(state): State<AppState>, Json(request): Json<SearchRequest>) -> Response {
    match state.searcher.search(&request).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            error!("Search failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Health check handler.
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}
