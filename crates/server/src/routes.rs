use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::{ACCEPT, CONTENT_TYPE, ORIGIN};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use sift_core::{Pipeline, SearchRequest, SearchResponse};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::ApiError;

/// Browser origins allowed to call the API.
const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

pub type AppState = Arc<Pipeline>;

pub fn router(pipeline: AppState) -> Router {
    Router::new()
        .route("/api/search", post(search_handler))
        .route("/api/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer())
        .with_state(pipeline)
}

fn cors_layer() -> CorsLayer {
    let origins = ALLOWED_ORIGINS.map(HeaderValue::from_static);

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([ORIGIN, CONTENT_TYPE, ACCEPT])
}

/// POST /api/search
///
/// Runs the full pipeline for `{"query": "..."}`.
///
/// # Errors
/// - 400 Bad Request: body missing, not JSON, or query blank
/// - 500 Internal Server Error: search backend failed
async fn search_handler(
    State(pipeline): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected search body");
        ApiError::InvalidRequest
    })?;

    let span = tracing::info_span!("search", request_id = %Uuid::new_v4());
    let response = pipeline.run(&request.query).instrument(span).await?;

    Ok(Json(response))
}

/// GET /api/health
async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
