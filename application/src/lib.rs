//! Application layer for interview-prep
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{GenerationParams, RetryPolicy};
pub use ports::{
    authenticator::{AllowAllAuthenticator, AuthError, Authenticator, Principal},
    llm_gateway::{GatewayError, LlmGateway},
};
pub use use_cases::explain_concept::ExplainConceptUseCase;
pub use use_cases::generate_questions::GenerateQuestionsUseCase;
pub use use_cases::shared::GenerationError;
