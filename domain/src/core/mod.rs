//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: provider model identifiers
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod string;
