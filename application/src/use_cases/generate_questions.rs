//! Generate Questions use case.
//!
//! Produces N interview question/answer pairs for a role, experience level
//! and topic focus.

use crate::config::GenerationParams;
use crate::ports::llm_gateway::LlmGateway;
use crate::use_cases::shared::{GenerationError, complete_structured};
use interview_domain::{
    GenerationRequest, InterviewPrompts, OutputKind, PromptTemplate, RequestBody,
    normalize_generation, question_answer_prompt,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Use case for generating interview question/answer pairs.
///
/// Flow:
/// 1. Normalize the raw body into a [`GenerationRequest`]
/// 2. Compose the prompt (template + notes + strict-output directive)
/// 3. One structured completion call
/// 4. Parse the reply and forward it untouched
#[derive(Clone)]
pub struct GenerateQuestionsUseCase {
    gateway: Arc<dyn LlmGateway>,
    prompts: Arc<dyn InterviewPrompts>,
    params: GenerationParams,
}

impl GenerateQuestionsUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            prompts: Arc::new(PromptTemplate),
            params: GenerationParams::default(),
        }
    }

    /// Replace the built-in prompt templates.
    pub fn with_prompts(mut self, prompts: Arc<dyn InterviewPrompts>) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Run the full flow on a raw request body.
    pub async fn execute(&self, body: &RequestBody) -> Result<Value, GenerationError> {
        let request = normalize_generation(body)?;
        self.generate(&request).await
    }

    /// Run the flow on an already normalized request.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Value, GenerationError> {
        info!(
            role = %request.role,
            experience = %request.experience,
            topics = %request.topics,
            count = request.count,
            "Generating interview questions"
        );

        let prompt = question_answer_prompt(self.prompts.as_ref(), request);
        complete_structured(
            self.gateway.as_ref(),
            &self.params,
            prompt,
            OutputKind::Questions,
        )
        .await
    }
}
