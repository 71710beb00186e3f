// src/server/handlers/parse.rs
//! Handwritten recipe name normalization

use crate::error::NameError;
use crate::label::normalize;
use crate::server::SharedState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub msg: String,
}

/// Normalize a recipe name
///
/// POST /parse
///
/// Failures are answered in plain text rather than JSON.
pub async fn parse_name(
    State(state): State<SharedState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Response {
    state.metrics.record_parse();

    let normalized = match payload {
        Ok(Json(request)) => normalize(&request.input),
        Err(_) => Err(NameError::Empty),
    };

    match normalized {
        Ok(msg) => (StatusCode::OK, Json(ParseResponse { msg })).into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    }
}
