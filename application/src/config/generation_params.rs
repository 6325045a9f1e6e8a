//! Generation parameters: provider call settings.
//!
//! [`GenerationParams`] groups the static settings shared by every
//! structured completion: which model, how much sampling variance, whether
//! to request JSON mode, and how strictly to judge the reply.

use super::retry_policy::RetryPolicy;
use interview_domain::{Model, SYSTEM_PROMPT, ShapeCheck};

/// Low temperature keeps structured replies stable between calls.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

#[derive(Debug, Clone)]
pub struct GenerationParams {
    /// Model identifier sent to the provider.
    pub model: Model,
    /// Sampling temperature.
    pub temperature: f32,
    /// Request the provider's JSON-object response mode.
    pub json_mode: bool,
    /// Policy for structurally wrong (but parseable) replies.
    pub shape_check: ShapeCheck,
    /// System message preceding every prompt.
    pub system_prompt: String,
    /// Retry behavior for transient provider failures.
    pub retry: RetryPolicy,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: DEFAULT_TEMPERATURE,
            json_mode: true,
            shape_check: ShapeCheck::default(),
            system_prompt: SYSTEM_PROMPT.to_string(),
            retry: RetryPolicy::default(),
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_json_mode(mut self, json_mode: bool) -> Self {
        self.json_mode = json_mode;
        self
    }

    pub fn with_shape_check(mut self, shape_check: ShapeCheck) -> Self {
        self.shape_check = shape_check;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}
