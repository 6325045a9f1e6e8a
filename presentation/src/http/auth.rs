//! Bearer-token extractor

use super::{response::ApiError, state::AppState};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use interview_application::Principal;
use tracing::debug;

/// The caller, admitted by the configured [`Authenticator`](interview_application::Authenticator).
///
/// Rejects with 401 before the handler body runs.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Principal);

/// Token from an `Authorization: Bearer <token>` header, if present.
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match state.authenticator.authenticate(bearer_token(parts)) {
            Ok(principal) => Ok(Self(principal)),
            Err(e) => {
                debug!(error = %e, path = %parts.uri.path(), "Authentication failed");
                Err(e.into())
            }
        }
    }
}
