//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for interview-prep
#[derive(Parser, Debug)]
#[command(name = "interview-prep")]
#[command(author, version, about = "AI backend for interview practice questions and concept explanations")]
#[command(long_about = r#"
interview-prep serves an HTTP API that turns a short candidate profile into
interview question/answer pairs, and explains single interview questions,
using an OpenAI-compatible chat-completion provider (Groq by default).

Endpoints:
  POST /api/ai/generate-questions
  POST /api/ai/generate-explanation
  GET  /api/health

Configuration files are loaded from (in priority order):
1. INTERVIEW_PREP_<SECTION>__<KEY>   Environment variables
2. --config <path>                   Explicit config file
3. ./interview-prep.toml             Project-level config
4. ~/.config/interview-prep/config.toml   Global config

Example:
  GROQ_API_KEY=gsk_... interview-prep --port 8080 -v
"#)]
pub struct Cli {
    /// Interface to bind (overrides server.host)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
