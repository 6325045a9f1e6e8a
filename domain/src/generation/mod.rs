//! Generation request domain
//!
//! Canonical request value objects and the normalizer that builds them from
//! loosely-shaped client bodies.

pub mod normalizer;
pub mod request;

pub use normalizer::{
    FieldRule, RESOLUTION_TABLE, RequestBody, normalize_explanation, normalize_generation,
};
pub use request::{DEFAULT_QUESTION_COUNT, ExplanationRequest, GenerationRequest};
