//! Domain layer for interview-prep
//!
//! This crate contains the pure core of the AI generation endpoints.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Request flow
//!
//! ```text
//! body ──► normalizer ──► prompt builder ──► (provider) ──► output validator
//! ```
//!
//! - [`generation`] resolves loosely named client fields into canonical
//!   [`GenerationRequest`] / [`ExplanationRequest`] values
//! - [`prompt`] turns those into the user prompt, including the
//!   strict-output directive
//! - [`completion`] describes the provider call
//! - [`output`] parses the reply and checks its shape

pub mod completion;
pub mod config;
pub mod core;
pub mod generation;
pub mod output;
pub mod prompt;

// Re-export commonly used types
pub use completion::{ChatMessage, ChatRole, CompletionRequest};
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use crate::core::{error::DomainError, model::Model};
pub use generation::{
    DEFAULT_QUESTION_COUNT, ExplanationRequest, GenerationRequest, RequestBody,
    normalize_explanation, normalize_generation,
};
pub use output::{OutputKind, ShapeCheck, ShapeIssue, check_shape, parse_model_output};
pub use prompt::{
    InterviewPrompts, PromptTemplate, SYSTEM_PROMPT, explanation_prompt, question_answer_prompt,
    strict_output_directive,
};
