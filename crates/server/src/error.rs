use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use sift_core::SiftError;

/// Errors surfaced to HTTP clients as `{"error": "..."}` bodies.
#[derive(Debug)]
pub enum ApiError {
    /// Missing, malformed, or blank request body.
    InvalidRequest,
    /// No search results could be obtained.
    SearchFailed,
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::InvalidRequest => (StatusCode::BAD_REQUEST, "Invalid request: query is required"),
            ApiError::SearchFailed => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch search results"),
        }
    }
}

impl From<SiftError> for ApiError {
    fn from(err: SiftError) -> Self {
        match err {
            SiftError::InvalidQuery => ApiError::InvalidRequest,
            _ => ApiError::SearchFailed,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(json!({ "error": message }))).into_response()
    }
}
