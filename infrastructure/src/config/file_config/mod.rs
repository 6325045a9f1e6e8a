//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod auth;
mod generation;
mod logging;
mod provider;
mod server;

pub use auth::FileAuthConfig;
pub use generation::{FileGenerationConfig, FileRetryConfig};
pub use logging::{FileLogFormat, FileLoggingConfig};
pub use provider::FileProviderConfig;
pub use server::FileServerConfig;

use interview_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Listen address
    pub server: FileServerConfig,
    /// Chat-completion provider endpoint and credentials
    pub provider: FileProviderConfig,
    /// Model and output policy
    pub generation: FileGenerationConfig,
    /// Accepted bearer tokens
    pub auth: FileAuthConfig,
    /// Log output
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Credentials are not checked here since they may come from the
    /// environment at gateway construction time.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.server.validate());
        issues.extend(self.provider.validate());
        issues.extend(self.generation.validate());
        issues.extend(self.auth.validate());
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_domain::ShapeCheck;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
host = "127.0.0.1"
port = 8080

[provider]
base_url = "https://api.openai.com/v1"
api_key_env = "OPENAI_API_KEY"
request_timeout_secs = 30

[generation]
model = "gpt-4o-mini"
temperature = 0.1
shape_check = "reject"

[generation.retry]
max_retries = 2

[auth]
tokens = ["secret-1", "secret-2"]

[logging]
format = "json"
directory = "/var/log/interview-prep"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.provider.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.provider.request_timeout_secs, Some(30));
        assert_eq!(config.generation.model, "gpt-4o-mini");
        assert_eq!(config.generation.shape_check, ShapeCheck::Reject);
        assert_eq!(config.generation.retry.max_retries, 2);
        // Untouched retry keys keep their defaults
        assert_eq!(config.generation.retry.initial_backoff_ms, 250);
        assert_eq!(config.auth.tokens.len(), 2);
        assert_eq!(config.logging.format, FileLogFormat::Json);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[generation]
model = "llama-3.3-70b-versatile"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generation.model, "llama-3.3-70b-versatile");
        // Defaults should apply
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.provider.api_key_env, "GROQ_API_KEY");
        assert!(config.generation.json_mode);
    }

    #[test]
    fn test_default_config_only_warns_about_open_auth() {
        let issues = FileConfig::default().validate();
        assert_eq!(issues.len(), 1);
        assert!(!ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn test_validate_collects_every_issue() {
        let mut config = FileConfig::default();
        config.generation.model = " ".to_string();
        config.generation.temperature = 3.5;
        config.provider.base_url = String::new();
        let issues = config.validate();
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 3);
    }
}
