//! CLI entrypoint for ask-ai
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use askai_application::{AnswerRequestController, SubmitOutcome};
use askai_infrastructure::{ConfigLoader, FileConfig, GeminiGateway, JsonlConversationLogger};
use askai_presentation::{ChatApp, Cli, ConsoleFormatter, ask_once};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Log file name used in interactive mode when none is configured
const DEFAULT_LOG_FILE: &str = "ask-ai.log";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };

    // CLI flags win over every config source
    if let Some(model) = &cli.model {
        config.gemini.model = model.clone();
    }
    if let Some(url) = &cli.api_url {
        config.gemini.api_url = Some(url.clone());
    }

    if cli.no_color || !config.output.color {
        ConsoleFormatter::set_color_enabled(false);
    }

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_tracing(&cli, &config)?;

    info!("Starting ask-ai");

    // === Dependency Injection ===
    let settings = config.gemini.to_settings()?;
    info!(endpoint = %settings.endpoint, model = %settings.model, "Using Gemini endpoint");
    let gateway = Arc::new(GeminiGateway::new(settings)?);

    let (ui_tx, ui_rx) = mpsc::unbounded_channel();
    let mut controller = AnswerRequestController::new(gateway, ui_tx);

    let conversation_log = cli
        .conversation_log
        .clone()
        .or_else(|| config.logging.conversation_log.as_ref().map(PathBuf::from));
    if let Some(path) = conversation_log {
        match JsonlConversationLogger::open(&path) {
            Ok(logger) => {
                info!("Conversation log: {}", path.display());
                controller = controller.with_conversation_logger(Arc::new(logger));
            }
            Err(e) => warn!("Conversation log disabled: {}: {}", path.display(), e),
        }
    }

    // Interactive mode
    let Some(question) = cli.question.as_deref() else {
        ChatApp::new(controller, ui_rx).run().await?;
        return Ok(ExitCode::SUCCESS);
    };

    // Single question mode
    drop(ui_rx);
    match ask_once(&mut controller, question, !cli.quiet).await {
        Some(SubmitOutcome::Answered) | Some(SubmitOutcome::Degraded) => Ok(ExitCode::SUCCESS),
        Some(SubmitOutcome::Failed { .. }) | None => Ok(ExitCode::FAILURE),
    }
}

/// Initialize logging based on verbosity level.
///
/// `RUST_LOG` overrides the level. Interactive mode always logs to a file,
/// since the terminal belongs to the TUI; one-shot mode logs to stderr
/// unless a log file is configured.
fn init_tracing(cli: &Cli, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(cli)));

    let Some(path) = log_file_path(cli, config, dirs::data_dir()) else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.into());

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Default filter directive for the given flags.
///
/// One-shot mode already prints request failures itself, so without `-v`
/// it only logs errors.
fn log_level(cli: &Cli) -> &'static str {
    if cli.quiet {
        return "error";
    }
    match cli.verbose {
        0 if cli.is_interactive() => "warn",
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    }
}

/// Where logs go, or `None` for stderr.
///
/// Interactive mode never returns `None`: without a data directory the log
/// goes to the temp directory instead.
fn log_file_path(cli: &Cli, config: &FileConfig, data_dir: Option<PathBuf>) -> Option<PathBuf> {
    let configured = cli
        .log_file
        .clone()
        .or_else(|| config.logging.log_file.as_ref().map(PathBuf::from));

    match configured {
        Some(path) => Some(path),
        None if cli.is_interactive() => Some(
            data_dir
                .unwrap_or_else(std::env::temp_dir)
                .join("ask-ai")
                .join(DEFAULT_LOG_FILE),
        ),
        None => None,
    }
}
