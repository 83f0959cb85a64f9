//! Query endpoint.
//!
//! POST /query
//!
//! Each request is stateless and independent: the router starts a fresh
//! reasoning run from the single query string, and the answer is
//! returned in one JSON body.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for the query endpoint.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Response body for the query endpoint.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub answer: String,
}

/// POST /query -- route one query through the agent.
pub async fn handle_query(
    State(state): State<AppState>,
    Json(body): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, AppError> {
    let answer = state.router.run(&body.query).await?;
    Ok(Json(QueryResponse { answer }))
}
