//! Route table

use super::{
    handlers::{generate_explanation, generate_questions, health_check},
    state::AppState,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/ai/generate-questions", post(generate_questions))
        .route("/api/ai/generate-explanation", post(generate_explanation))
        .with_state(state)
}
