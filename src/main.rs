//! ttt - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use ttt::{ExitStatus, Session, SessionEnd, SessionError, TttConfig};
use ttt_engine::RestartPolicy;

fn main() -> ExitCode {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => ExitStatus::Success.into(),
        Err(e) => {
            error!(error = %e, "Fatal error");
            eprintln!("Error: {:#}", e);
            e.downcast_ref::<SessionError>()
                .map(SessionError::exit_status)
                .unwrap_or(ExitStatus::Failure)
                .into()
        }
    }
}

fn run(cli: Cli) -> Result<SessionEnd> {
    let config = load_config(&cli)?;
    init_logging(&config)?;

    info!("Starting ttt");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(&config, stdin.lock(), stdout.lock());
    let end = session.run()?;

    info!(?end, "Exiting");
    Ok(end)
}

/// Loads the config file and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<TttConfig> {
    let mut config = TttConfig::load_or_default(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?;

    if cli.keep_names {
        config = config.with_restart_policy(RestartPolicy::Keep);
    }
    if let Some(lines) = cli.clear_lines {
        config = config.with_clear_lines(lines);
    }
    if cli.no_log {
        config = config.with_log_file(None);
    } else if let Some(path) = &cli.log_file {
        config = config.with_log_file(Some(path.clone()));
    }
    Ok(config)
}

/// Sends logs to the configured file, if any; stdout is the game surface.
fn init_logging(config: &TttConfig) -> Result<()> {
    let Some(path) = config.log_file() else {
        return Ok(());
    };
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Creating log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
