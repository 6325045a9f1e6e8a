//! Generation configuration from TOML (`[generation]` section)

use interview_application::{GenerationParams, RetryPolicy};
use interview_domain::{ConfigIssue, ConfigIssueCode, Model, ShapeCheck};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retries above this count make a hung provider very slow to report.
const RETRY_WARN_THRESHOLD: u32 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Model identifier (default: "llama-3.1-8b-instant")
    pub model: String,
    /// Sampling temperature (default: 0.2)
    pub temperature: f32,
    /// Request JSON-object response mode (default: true)
    pub json_mode: bool,
    /// "off", "warn" or "reject" (default: "warn")
    pub shape_check: ShapeCheck,
    /// Transient failure retries
    pub retry: FileRetryConfig,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            temperature: 0.2,
            json_mode: true,
            shape_check: ShapeCheck::default(),
            retry: FileRetryConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    /// Extra attempts after the first call (default: 0, no retry)
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_retries: policy.max_retries,
            initial_backoff_ms: policy.initial_backoff.as_millis() as u64,
            max_backoff_ms: policy.max_backoff.as_millis() as u64,
        }
    }
}

impl FileRetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy::default()
            .with_max_retries(self.max_retries)
            .with_backoff(
                Duration::from_millis(self.initial_backoff_ms),
                Duration::from_millis(self.max_backoff_ms),
            )
    }
}

impl FileGenerationConfig {
    /// Convert into the application's [`GenerationParams`].
    pub fn to_params(&self) -> GenerationParams {
        // FromStr for Model is infallible
        let model: Model = self.model.trim().parse().unwrap_or_default();
        GenerationParams::default()
            .with_model(model)
            .with_temperature(self.temperature)
            .with_json_mode(self.json_mode)
            .with_shape_check(self.shape_check)
            .with_retry(self.retry.to_policy())
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "generation.model".to_string(),
                },
                "generation.model must not be empty",
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "generation.temperature".to_string(),
                    value: f64::from(self.temperature),
                    min: 0.0,
                    max: 2.0,
                },
                format!(
                    "generation.temperature must be between 0 and 2, got {}",
                    self.temperature
                ),
            ));
        }

        if !self.json_mode {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::Discouraged {
                    field: "generation.json_mode".to_string(),
                },
                "generation.json_mode is off; models are more likely to wrap replies in prose or code fences",
            ));
        }

        if self.retry.max_retries > RETRY_WARN_THRESHOLD {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "generation.retry.max_retries".to_string(),
                    value: f64::from(self.retry.max_retries),
                    min: 0.0,
                    max: f64::from(RETRY_WARN_THRESHOLD),
                },
                format!(
                    "generation.retry.max_retries = {} is high; requests may hang for a long time",
                    self.retry.max_retries
                ),
            ));
        }

        if self.retry.max_backoff_ms < self.retry.initial_backoff_ms {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::Inconsistent {
                    fields: vec![
                        "generation.retry.initial_backoff_ms".to_string(),
                        "generation.retry.max_backoff_ms".to_string(),
                    ],
                },
                "generation.retry.max_backoff_ms must not be below initial_backoff_ms",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_map_to_default_params() {
        let params = FileGenerationConfig::default().to_params();
        assert_eq!(params.model, Model::Llama31_8bInstant);
        assert!((params.temperature - 0.2).abs() < f32::EPSILON);
        assert!(params.json_mode);
        assert_eq!(params.shape_check, ShapeCheck::Warn);
        assert_eq!(params.retry, RetryPolicy::default());
    }

    #[test]
    fn test_custom_model_passes_through() {
        let config = FileGenerationConfig {
            model: "qwen-2.5-32b".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.to_params().model,
            Model::Custom("qwen-2.5-32b".to_string())
        );
    }

    #[test]
    fn test_retry_mapping() {
        let retry = FileRetryConfig {
            max_retries: 2,
            initial_backoff_ms: 100,
            max_backoff_ms: 1000,
        };
        let policy = retry.to_policy();
        assert_eq!(policy.max_retries, 2);
        assert_eq!(policy.initial_backoff, Duration::from_millis(100));
        assert_eq!(policy.max_backoff, Duration::from_secs(1));
    }

    #[test]
    fn test_validation_issues() {
        let config = FileGenerationConfig {
            json_mode: false,
            retry: FileRetryConfig {
                max_retries: 9,
                initial_backoff_ms: 500,
                max_backoff_ms: 100,
            },
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 1);
    }

    #[test]
    fn test_shape_check_from_toml() {
        let config: FileGenerationConfig = toml::from_str(r#"shape_check = "off""#).unwrap();
        assert_eq!(config.shape_check, ShapeCheck::Off);
        assert!(toml::from_str::<FileGenerationConfig>(r#"shape_check = "strict""#).is_err());
    }
}
