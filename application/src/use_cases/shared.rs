//! Pipeline shared by the generation use cases.

use crate::config::{GenerationParams, RetryPolicy};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use interview_domain::core::string::truncate;
use interview_domain::{
    CompletionRequest, DomainError, OutputKind, ShapeCheck, check_shape, parse_model_output,
};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors a generation use case can end with.
///
/// Each variant maps to one client-visible outcome: bad input, provider
/// failure, or an unusable reply.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("{0}")]
    Validation(DomainError),

    #[error("{0}")]
    Provider(#[from] GatewayError),

    #[error("AI returned invalid JSON: {reason}")]
    MalformedOutput { reason: String, raw: String },
}

impl From<DomainError> for GenerationError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::MalformedOutput { reason, raw } => {
                GenerationError::MalformedOutput { reason, raw }
            }
            other => GenerationError::Validation(other),
        }
    }
}

/// Send `prompt` as a structured completion and return the parsed reply.
pub async fn complete_structured(
    gateway: &dyn LlmGateway,
    params: &GenerationParams,
    prompt: String,
    kind: OutputKind,
) -> Result<Value, GenerationError> {
    let request = CompletionRequest::structured(
        params.model.clone(),
        params.system_prompt.as_str(),
        prompt,
        params.temperature,
    )
    .with_json_mode(params.json_mode);

    let raw = call_with_retry(gateway, &request, &params.retry).await?;
    debug!(
        provider = gateway.provider_name(),
        bytes = raw.len(),
        "Model reply: {}",
        truncate(&raw, 200)
    );

    let value = parse_model_output(&raw).inspect_err(|_| {
        warn!(
            provider = gateway.provider_name(),
            kind = %kind,
            "Model reply is not valid JSON"
        );
    })?;

    enforce_shape(value, raw, kind, params.shape_check)
}

fn enforce_shape(
    value: Value,
    raw: String,
    kind: OutputKind,
    policy: ShapeCheck,
) -> Result<Value, GenerationError> {
    if policy == ShapeCheck::Off {
        return Ok(value);
    }

    let issues = check_shape(&value, kind);
    if issues.is_empty() {
        return Ok(value);
    }

    let summary = issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");

    match policy {
        ShapeCheck::Reject => {
            warn!(kind = %kind, "Rejecting model reply: {}", summary);
            Err(GenerationError::MalformedOutput {
                reason: summary,
                raw,
            })
        }
        _ => {
            warn!(kind = %kind, "Model reply has unexpected shape: {}", summary);
            Ok(value)
        }
    }
}

async fn call_with_retry(
    gateway: &dyn LlmGateway,
    request: &CompletionRequest,
    policy: &RetryPolicy,
) -> Result<String, GatewayError> {
    let mut attempt = 0;
    loop {
        match gateway.complete(request).await {
            Ok(raw) => return Ok(raw),
            Err(e) if policy.should_retry(attempt, &e) => {
                let delay = policy.jittered_delay(attempt, &mut rand::thread_rng());
                attempt += 1;
                info!(
                    provider = gateway.provider_name(),
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "Retrying after transient provider error: {}",
                    e
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}
