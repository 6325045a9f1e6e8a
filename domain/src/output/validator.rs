//! Strict JSON parsing of model replies

use crate::core::error::DomainError;
use serde_json::Value;

/// Parse raw model text as JSON, returning the value untouched.
///
/// No trimming of code fences or other repair is attempted: the prompt
/// forbids them, and a reply that needs repair is reported, not guessed at.
///
/// # Errors
/// [`DomainError::MalformedOutput`] with the full raw text attached.
pub fn parse_model_output(raw: &str) -> Result<Value, DomainError> {
    serde_json::from_str(raw).map_err(|e| DomainError::MalformedOutput {
        reason: e.to_string(),
        raw: raw.to_string(),
    })
}
