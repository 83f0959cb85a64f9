//! Request-level error mapping.
//!
//! There is exactly one failure shape at this boundary: anything that
//! escapes the routing call chain becomes a generic server error whose
//! only detail is the error's display text. No error-code taxonomy, no
//! client/server distinction.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use askdocs_types::error::AgentError;

/// Error surfaced to HTTP clients as `500 {"detail": ...}`.
#[derive(Debug)]
pub struct AppError(pub String);

impl From<AgentError> for AppError {
    fn from(e: AgentError) -> Self {
        AppError(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": self.0 })),
        )
            .into_response()
    }
}
