//! Shared handler state

use interview_application::{
    AllowAllAuthenticator, Authenticator, ExplainConceptUseCase, GenerateQuestionsUseCase,
    LlmGateway,
};
use std::sync::Arc;

/// State cloned into every handler. Everything inside is immutable.
#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<GenerateQuestionsUseCase>,
    pub explanations: Arc<ExplainConceptUseCase>,
    pub authenticator: Arc<dyn Authenticator>,
}

impl AppState {
    pub fn new(
        questions: GenerateQuestionsUseCase,
        explanations: ExplainConceptUseCase,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            questions: Arc::new(questions),
            explanations: Arc::new(explanations),
            authenticator,
        }
    }

    /// Both use cases over one gateway with default parameters, open auth.
    pub fn with_gateway(gateway: Arc<dyn LlmGateway>) -> Self {
        Self::new(
            GenerateQuestionsUseCase::new(gateway.clone()),
            ExplainConceptUseCase::new(gateway),
            Arc::new(AllowAllAuthenticator),
        )
    }

    pub fn with_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = authenticator;
        self
    }
}
