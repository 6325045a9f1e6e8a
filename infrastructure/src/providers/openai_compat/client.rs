//! HTTP client implementing [`LlmGateway`] for OpenAI-compatible APIs.

use super::dto::{ChatRequest, ChatResponse, ErrorEnvelope};
use crate::config::FileProviderConfig;
use async_trait::async_trait;
use interview_application::{GatewayError, LlmGateway};
use interview_domain::CompletionRequest;
use interview_domain::core::string::truncate;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Gateway to any `/chat/completions` endpoint speaking the OpenAI format.
///
/// Built once at startup; the inner `reqwest::Client` pools connections
/// across requests.
#[derive(Debug, Clone)]
pub struct OpenAiCompatGateway {
    client: Client,
    endpoint: String,
    api_key: String,
    provider_name: String,
}

impl OpenAiCompatGateway {
    /// Creates a gateway for `base_url`, appending `/chat/completions`.
    pub fn new(
        provider_name: impl Into<String>,
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GatewayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;

        let endpoint = format!("{}/chat/completions", base_url.trim_end_matches('/'));
        let provider_name = provider_name.into();
        debug!(provider = %provider_name, url = %endpoint, "Created OpenAI-compatible gateway");

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
            provider_name,
        })
    }

    /// Creates a gateway from the `[provider]` config section.
    ///
    /// Fails with [`GatewayError::MissingApiKey`] when no key can be resolved.
    pub fn from_config(config: &FileProviderConfig) -> Result<Self, GatewayError> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(|| GatewayError::MissingApiKey(config.api_key_env.clone()))?;
        Self::new(
            config.name.clone(),
            &config.base_url,
            api_key,
            config.request_timeout(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_send_error(&self, e: reqwest::Error) -> GatewayError {
        error!(provider = %self.provider_name, error = ?e, "HTTP request failed");
        if e.is_timeout() {
            GatewayError::Timeout
        } else if e.is_connect() {
            GatewayError::ConnectionError(e.to_string())
        } else {
            GatewayError::Other(format!("Request failed: {}", e))
        }
    }
}

/// Maps a non-success status to a gateway error, preferring the provider's
/// own `error.message` over the raw body.
fn status_error(status: StatusCode, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::Unauthorized(message),
        StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited(message),
        _ => GatewayError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

#[async_trait]
impl LlmGateway for OpenAiCompatGateway {
    fn provider_name(&self) -> &str {
        &self.provider_name
    }

    #[instrument(skip(self, request), fields(provider = %self.provider_name, model = %request.model))]
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        debug!(
            message_count = request.messages.len(),
            json_mode = request.json_mode,
            "Sending completion request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&ChatRequest::from(request))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            error!(status = %status, body = %truncate(&body, 500), "Provider returned an error");
            return Err(status_error(status, &body));
        }

        let value: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Provider response is not JSON");
            GatewayError::InvalidResponse(format!("Failed to parse JSON: {}", e))
        })?;

        let parsed = serde_json::from_value::<ChatResponse>(value).unwrap_or_else(|e| {
            warn!(error = %e, "Unexpected completion shape; treating reply as empty");
            ChatResponse::default()
        });

        debug!(choices = parsed.choices.len(), "Received completion");
        Ok(parsed.into_text())
    }
}
