//! LLM Gateway port
//!
//! Defines the interface for communicating with LLM providers.

use async_trait::async_trait;
use interview_domain::CompletionRequest;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Provider returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("Missing API key: set {0}")]
    MissingApiKey(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Whether the same call might succeed if repeated.
    pub fn is_transient(&self) -> bool {
        match self {
            GatewayError::ConnectionError(_)
            | GatewayError::Timeout
            | GatewayError::RateLimited(_) => true,
            GatewayError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with LLM providers.
/// Implementations (adapters) live in the infrastructure layer. One instance
/// is built at startup and shared across requests, so implementations must
/// not keep per-call state.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Provider name, for logs
    fn provider_name(&self) -> &str;

    /// Send one buffered completion and return the first choice's text.
    ///
    /// A reply without the expected fields yields an empty string rather than
    /// an error; judging the text is the caller's job.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(GatewayError::ConnectionError("reset".into()).is_transient());
        assert!(GatewayError::Timeout.is_transient());
        assert!(GatewayError::RateLimited("429".into()).is_transient());
        assert!(
            GatewayError::Api {
                status: 503,
                message: "unavailable".into()
            }
            .is_transient()
        );
        assert!(
            !GatewayError::Api {
                status: 404,
                message: "model not found".into()
            }
            .is_transient()
        );
        assert!(!GatewayError::Unauthorized("invalid key".into()).is_transient());
        assert!(!GatewayError::InvalidResponse("eof".into()).is_transient());
        assert!(!GatewayError::MissingApiKey("GROQ_API_KEY".into()).is_transient());
    }

    #[test]
    fn test_error_display() {
        let error = GatewayError::Api {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(error.to_string(), "Provider returned status 500: boom");
    }
}
