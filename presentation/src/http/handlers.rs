//! Request handlers

use super::{auth::AuthenticatedUser, response::ApiError, state::AppState};
use axum::{Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use interview_domain::RequestBody;
use serde_json::{Map, Value, json};
use tracing::{info, instrument};

/// Parse the raw body into a field mapping.
///
/// An empty body or a JSON value that is not an object both count as `{}`;
/// only syntactically broken JSON is rejected.
fn parse_body(bytes: &Bytes) -> Result<RequestBody, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Ok(Map::new()),
        Err(_) => Err(ApiError::invalid_json_body()),
    }
}

/// Health check endpoint.
#[instrument(skip_all)]
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// `POST /api/ai/generate-questions`
#[instrument(skip_all, fields(subject = %user.0.subject))]
pub async fn generate_questions(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let body = parse_body(&body)?;
    let value = state
        .questions
        .execute(&body)
        .await
        .map_err(|e| ApiError::from_generation(e, "Failed to generate questions"))?;
    info!("Generated interview questions");
    Ok(Json(value))
}

/// `POST /api/ai/generate-explanation`
#[instrument(skip_all, fields(subject = %user.0.subject))]
pub async fn generate_explanation(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let body = parse_body(&body)?;
    let value = state
        .explanations
        .execute(&body)
        .await
        .map_err(|e| ApiError::from_generation(e, "Failed to generate explanation"))?;
    info!("Generated concept explanation");
    Ok(Json(value))
}
