//! Provider configuration from TOML (`[provider]` section)

use interview_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI-compatible chat-completion provider (Groq by default).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Provider name, used in logs (default: "groq").
    pub name: String,
    /// Base URL; `/chat/completions` is appended.
    pub base_url: String,
    /// Environment variable name for the API key (default: "GROQ_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended; use the env var instead).
    pub api_key: Option<String>,
    /// Per-request timeout. Unset means no client-side timeout.
    pub request_timeout_secs: Option<u64>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            name: "groq".to_string(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            api_key: None,
            request_timeout_secs: None,
        }
    }
}

impl FileProviderConfig {
    /// Resolve the API key: explicit value first, then the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// [`resolve_api_key`](Self::resolve_api_key) with an injectable env lookup.
    pub fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| lookup(&self.api_key_env))
            .filter(|key| !key.trim().is_empty())
    }

    /// A [`ConfigIssueCode::MissingCredential`] error when no API key resolves.
    ///
    /// Kept out of [`FileConfig::validate`](super::FileConfig::validate) since
    /// it reads the process environment.
    pub fn credential_issue(&self) -> Option<ConfigIssue> {
        self.credential_issue_with(|name| std::env::var(name).ok())
    }

    pub fn credential_issue_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Option<ConfigIssue> {
        if self.resolve_api_key_with(lookup).is_some() {
            return None;
        }
        Some(ConfigIssue::error(
            ConfigIssueCode::MissingCredential {
                env_var: self.api_key_env.clone(),
            },
            format!(
                "No API key for provider '{}': set {} or provider.api_key",
                self.name, self.api_key_env
            ),
        ))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "provider.base_url".to_string(),
                },
                "provider.base_url must not be empty",
            ));
        }
        if self.api_key.is_some() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::Discouraged {
                    field: "provider.api_key".to_string(),
                },
                format!(
                    "provider.api_key is set in a config file; prefer the {} environment variable",
                    self.api_key_env
                ),
            ));
        }
        if self.request_timeout_secs == Some(0) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "provider.request_timeout_secs".to_string(),
                    value: 0.0,
                    min: 1.0,
                    max: f64::MAX,
                },
                "provider.request_timeout_secs must be at least 1 (omit it to disable the timeout)",
            ));
        }
        issues
    }
}
