//! Explain Concept use case.
//!
//! Produces a single explanation for one interview question.

use crate::config::GenerationParams;
use crate::ports::llm_gateway::LlmGateway;
use crate::use_cases::shared::{GenerationError, complete_structured};
use interview_domain::{
    InterviewPrompts, OutputKind, PromptTemplate, RequestBody, explanation_prompt,
    normalize_explanation,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Use case for explaining the concept behind an interview question.
#[derive(Clone)]
pub struct ExplainConceptUseCase {
    gateway: Arc<dyn LlmGateway>,
    prompts: Arc<dyn InterviewPrompts>,
    params: GenerationParams,
}

impl ExplainConceptUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            prompts: Arc::new(PromptTemplate),
            params: GenerationParams::default(),
        }
    }

    pub fn with_prompts(mut self, prompts: Arc<dyn InterviewPrompts>) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub async fn execute(&self, body: &RequestBody) -> Result<Value, GenerationError> {
        let request = normalize_explanation(body)?;
        info!(question_len = request.question().len(), "Generating concept explanation");

        let prompt = explanation_prompt(self.prompts.as_ref(), &request);
        complete_structured(
            self.gateway.as_ref(),
            &self.params,
            prompt,
            OutputKind::Explanation,
        )
        .await
    }
}
