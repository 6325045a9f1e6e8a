//! Error to HTTP response mapping

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use interview_application::{AuthError, GenerationError};
use serde_json::{Value, json};
use tracing::{error, warn};

/// Error response: a status code plus a JSON body that always carries
/// a human-readable `message`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiError {
    fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    pub fn invalid_json_body() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            json!({ "message": "Invalid JSON body" }),
        )
    }

    /// Maps a use-case failure. `failure_message` names the operation,
    /// e.g. "Failed to generate questions".
    pub fn from_generation(err: GenerationError, failure_message: &str) -> Self {
        match err {
            GenerationError::Validation(e) => {
                warn!(error = %e, "Rejected request");
                Self::new(
                    StatusCode::BAD_REQUEST,
                    json!({ "message": "Missing required fields" }),
                )
            }
            GenerationError::MalformedOutput { reason, raw } => {
                error!(%reason, "Model output is not valid JSON");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "AI returned invalid JSON", "raw": raw }),
                )
            }
            GenerationError::Provider(e) => {
                error!(error = %e, "{}", failure_message);
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": failure_message, "error": e.to_string() }),
                )
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            json!({ "message": err.to_string() }),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
