//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileLogFormat {
    /// Human-readable single-line output
    #[default]
    Compact,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    pub format: FileLogFormat,
    /// Also write daily-rotated log files into this directory
    pub directory: Option<PathBuf>,
}
