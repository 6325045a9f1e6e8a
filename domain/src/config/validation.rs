//! Configuration issue reporting.
//!
//! Config validation never fails fast: it collects every problem as a
//! [`ConfigIssue`] so the caller can log warnings and refuse to start only
//! on errors.
//!
//! # Examples
//!
//! ```
//! use interview_domain::config::{ConfigIssue, Severity};
//!
//! let issues = vec![ConfigIssue::warning_empty("auth.tokens", "no tokens configured")];
//! assert!(!ConfigIssue::has_errors(&issues));
//! assert_eq!(issues[0].severity, Severity::Warning);
//! ```

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the service cannot start with this configuration.
    Error,
    /// Non-fatal: the service starts but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssueCode {
    /// A required value is empty.
    EmptyValue { field: String },
    /// A numeric value lies outside its accepted range.
    OutOfRange { field: String, value: f64, min: f64, max: f64 },
    /// Two related values contradict each other.
    Inconsistent { fields: Vec<String> },
    /// The provider API key could not be found.
    MissingCredential { env_var: String },
    /// A setting works but weakens the output contract.
    Discouraged { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    /// Shorthand for a warning about an empty field.
    pub fn warning_empty(field: &str, message: impl Into<String>) -> Self {
        Self::warning(
            ConfigIssueCode::EmptyValue {
                field: field.to_string(),
            },
            message,
        )
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Whether any issue in the list is fatal.
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(ConfigIssue::is_error)
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "[{}] {}", level, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_errors() {
        let warning = ConfigIssue::warning_empty("auth.tokens", "empty");
        let error = ConfigIssue::error(
            ConfigIssueCode::MissingCredential {
                env_var: "GROQ_API_KEY".to_string(),
            },
            "missing key",
        );
        assert!(!ConfigIssue::has_errors(std::slice::from_ref(&warning)));
        assert!(ConfigIssue::has_errors(&[warning, error]));
        assert!(!ConfigIssue::has_errors(&[]));
    }

    #[test]
    fn test_display() {
        let issue = ConfigIssue::error(
            ConfigIssueCode::EmptyValue {
                field: "generation.model".to_string(),
            },
            "generation.model must not be empty",
        );
        assert_eq!(issue.to_string(), "[error] generation.model must not be empty");
    }
}
