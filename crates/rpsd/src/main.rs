//! rpsd - Rock Paper Scissors, but Different.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rpsd::GameConfig;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            seed,
            difficulty,
            log_file,
        } => run_play(config, seed, difficulty, log_file).await,
        Command::Rules => {
            println!("{}", tui::HOW_TO_PLAY);
            Ok(())
        }
    }
}

/// Run the terminal game
#[instrument(skip_all, fields(config_path = %config.display()))]
async fn run_play(
    config: PathBuf,
    seed: Option<u64>,
    difficulty: Option<String>,
    log_file: PathBuf,
) -> Result<()> {
    initialize_file_tracing(&log_file)?;

    let config = GameConfig::load_or_default(&config)?
        .with_seed(seed)
        .with_pinned_difficulty(difficulty);
    info!(?config, "Starting rpsd");

    tui::run_tui(config).await
}

/// Logs go to a file so they do not interfere with the terminal UI.
fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
