//! F.R.A.N.K.I.E. command-line entry point.

mod cli;
mod output;
mod register;
mod repl;

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use frankie_config::{ConfigLoader, ConfigValidator, LoggingConfig};
use frankie_protocols::Agent;

use crate::cli::Cli;

pub(crate) type BoxError = Box<dyn Error + Send + Sync>;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Log to a daily file only; the terminal belongs to the REPL.
fn init_tracing(logging: &LoggingConfig, debug: bool) -> Result<PathBuf, BoxError> {
    let log_dir = ConfigLoader::expand_path(&logging.directory);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("frankie")
        .filename_suffix("log")
        .max_log_files(14)
        .build(&log_dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = LOG_GUARD.set(guard);

    let env_filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    Ok(log_dir)
}

async fn run(cli: Cli) -> Result<(), BoxError> {
    let config = ConfigLoader::resolve(cli.config.as_deref())?;
    let validation = ConfigValidator::validate(&config);
    if !validation.is_valid() {
        return Err(format!("Invalid configuration: {}", validation.summary()).into());
    }

    let log_dir = init_tracing(&config.logging, cli.debug)?;
    info!("F.R.A.N.K.I.E. starting; logs in {}", log_dir.display());
    for warning in &validation.warnings {
        tracing::warn!("{}: {}", warning.path, warning.message);
    }

    let work_dir = std::env::current_dir()?;
    let bypass_consent = config.automation.bypass_tool_consent;
    let app = register::build(config, work_dir).await?;
    let target = app.target(cli.agent.as_deref())?;
    let mut session = app.session(target)?;
    info!("Session {} routing to {}", session.id(), session.dispatch().target().id());

    match cli.one_shot() {
        Some(query) => {
            repl::process(&mut session, &query, bypass_consent).await;
            Ok(())
        }
        None => repl::run(session, bypass_consent).await,
    }
}

fn config_hint(path: Option<&Path>) -> String {
    match path {
        Some(path) => format!("Config file: {}", path.display()),
        None => match ConfigLoader::default_path() {
            Some(path) => format!("Config file: {} (optional)", path.display()),
            None => "No home directory; using built-in defaults".to_string(),
        },
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let hint = config_hint(cli.config.as_deref());

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Critical error: {}", e);
            output::critical(&format!("{e}\n{hint}"));
            ExitCode::from(1)
        }
    }
}
