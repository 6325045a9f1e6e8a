//! Authentication configuration from TOML (`[auth]` section)

use interview_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuthConfig {
    /// Accepted bearer tokens. Blank entries are ignored; with none left,
    /// every request is admitted.
    pub tokens: Vec<String>,
}

impl FileAuthConfig {
    /// Tokens that can actually match a request.
    pub fn usable_tokens(&self) -> Vec<String> {
        self.tokens
            .iter()
            .filter(|t| !t.trim().is_empty())
            .cloned()
            .collect()
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let usable = self.usable_tokens().len();
        if usable < self.tokens.len() {
            issues.push(ConfigIssue::warning_empty(
                "auth.tokens",
                format!(
                    "auth.tokens contains {} blank token(s); they are ignored",
                    self.tokens.len() - usable
                ),
            ));
        }
        if usable == 0 {
            issues.push(ConfigIssue::warning_empty(
                "auth.tokens",
                "auth.tokens has no usable token; generation endpoints accept unauthenticated requests",
            ));
        }
        issues
    }
}
