//! Configuration file loading for interview-prep
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `INTERVIEW_PREP_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./interview-prep.toml` or `./.interview-prep.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/interview-prep/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAuthConfig, FileConfig, FileGenerationConfig, FileLogFormat, FileLoggingConfig,
    FileProviderConfig, FileRetryConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
