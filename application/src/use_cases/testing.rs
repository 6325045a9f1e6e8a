//! Test doubles shared by the use case tests.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use async_trait::async_trait;
use interview_domain::CompletionRequest;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Gateway that replays scripted results and records every request.
pub(crate) struct ScriptedGateway {
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedGateway {
    pub(crate) fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from(replies)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn replying(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    pub(crate) fn failing(error: GatewayError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    fn provider_name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more replies".to_string())))
    }
}
