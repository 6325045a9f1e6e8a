//! HTTP API
//!
//! Thin axum layer over the application use cases: body parsing, bearer
//! authentication, and mapping [`GenerationError`](interview_application::GenerationError)
//! onto status codes and JSON bodies.

mod auth;
mod handlers;
mod response;
mod router;
mod state;

pub use auth::AuthenticatedUser;
pub use handlers::{generate_explanation, generate_questions, health_check};
pub use response::ApiError;
pub use router::create_router;
pub use state::AppState;

use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

/// Serve the API on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish after the shutdown signal.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Listening");
    }
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
