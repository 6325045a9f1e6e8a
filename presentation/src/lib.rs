//! Presentation layer for interview-prep
//!
//! This crate contains the CLI definition and the HTTP API
//! (router, handlers, authentication extractor, error responses).

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{ApiError, AppState, AuthenticatedUser, create_router, serve};
