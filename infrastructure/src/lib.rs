//! Infrastructure layer for interview-prep
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod auth;
pub mod config;
pub mod providers;

// Re-export commonly used types
pub use auth::StaticTokenAuthenticator;
pub use config::{
    ConfigLoader, FileAuthConfig, FileConfig, FileGenerationConfig, FileLogFormat,
    FileLoggingConfig, FileProviderConfig, FileRetryConfig, FileServerConfig,
};
pub use providers::OpenAiCompatGateway;
