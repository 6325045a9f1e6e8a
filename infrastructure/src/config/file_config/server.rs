//! Server configuration from TOML (`[server]` section)

use interview_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Interface to bind (default: "0.0.0.0")
    pub host: String,
    /// Port to listen on (default: 5000)
    pub port: u16,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl FileServerConfig {
    /// `host:port`, suitable for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        if self.host.trim().is_empty() {
            vec![ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "server.host".to_string(),
                },
                "server.host must not be empty",
            )]
        } else {
            vec![]
        }
    }
}
