//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required input field resolved to nothing after normalization.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The model replied with text that is not valid JSON, or that violates
    /// the requested output shape under a rejecting policy.
    #[error("AI returned invalid JSON: {reason}")]
    MalformedOutput { reason: String, raw: String },
}

impl DomainError {
    /// Check if this error is caused by bad client input
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::MissingFields(_))
    }

    /// The unparsable model text, if this error carries one
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            DomainError::MalformedOutput { raw, .. } => Some(raw),
            _ => None,
        }
    }
}
