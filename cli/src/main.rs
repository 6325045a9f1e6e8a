//! CLI entrypoint for interview-prep
//!
//! This is the main binary that wires together all layers using
//! dependency injection, then serves the HTTP API until Ctrl-C.

use anyhow::{Context, Result, bail};
use clap::Parser;
use interview_application::{ExplainConceptUseCase, GenerateQuestionsUseCase, LlmGateway};
use interview_domain::{ConfigIssue, Severity};
use interview_infrastructure::{
    ConfigLoader, FileLogFormat, FileLoggingConfig, OpenAiCompatGateway, StaticTokenAuthenticator,
};
use interview_presentation::{AppState, Cli, serve};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize logging. `RUST_LOG` wins over the `-v` count when set.
///
/// The returned guard flushes the log file on drop and must live until exit.
fn init_logging(verbose: u8, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let (file_writer, guard) = match &logging.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "interview-prep.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(filter);
    match logging.format {
        FileLogFormat::Compact => {
            let file_layer = file_writer.map(|writer| {
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(writer)
            });
            registry
                .with(fmt::layer().compact().with_target(false))
                .with(file_layer)
                .try_init()?;
        }
        FileLogFormat::Json => {
            let file_layer = file_writer.map(|writer| fmt::layer().json().with_writer(writer));
            registry
                .with(fmt::layer().json())
                .with(file_layer)
                .try_init()?;
        }
    }

    Ok(guard)
}

/// Log every config issue; fail if any is an error.
fn report_config_issues(issues: &[ConfigIssue]) -> Result<()> {
    for issue in issues {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if ConfigIssue::has_errors(issues) {
        let count = issues.iter().filter(|i| i.is_error()).count();
        bail!("Invalid configuration: {} error(s), see log output", count);
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining in-flight requests");
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let _log_guard = init_logging(cli.verbose, &config.logging)?;
    info!("Starting interview-prep");

    let mut issues = config.validate();
    issues.extend(config.provider.credential_issue());
    report_config_issues(&issues)?;

    // === Dependency Injection ===
    let gateway: Arc<dyn LlmGateway> = Arc::new(
        OpenAiCompatGateway::from_config(&config.provider)
            .context("Failed to create provider gateway")?,
    );
    let params = config.generation.to_params();
    info!(
        provider = gateway.provider_name(),
        model = %params.model,
        shape_check = ?params.shape_check,
        max_retries = params.retry.max_retries,
        "Provider configured"
    );

    let authenticator = StaticTokenAuthenticator::new(config.auth.usable_tokens());
    if authenticator.is_open() {
        warn!("Authentication is disabled: no usable auth.tokens configured");
    }
    let state = AppState::new(
        GenerateQuestionsUseCase::new(gateway.clone()).with_params(params.clone()),
        ExplainConceptUseCase::new(gateway).with_params(params),
        Arc::new(authenticator),
    );

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    println!("interview-prep listening on http://{}", listener.local_addr()?);

    serve(listener, state, shutdown_signal()).await?;
    info!("Server stopped");
    Ok(())
}
