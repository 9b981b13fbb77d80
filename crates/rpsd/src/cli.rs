//! Command-line interface for rpsd.

use clap::{Parser, Subcommand};

/// Rock Paper Scissors, but Different
#[derive(Parser, Debug)]
#[command(name = "rpsd")]
#[command(about = "Rock Paper Scissors, but Different - match the directive, not the hand", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to the game config file (defaults are used if missing)
        #[arg(short, long, default_value = "rpsd.toml")]
        config: std::path::PathBuf,

        /// Seed for a reproducible card sequence
        #[arg(long)]
        seed: Option<u64>,

        /// Play every round at this difficulty (easy, medium, hard)
        #[arg(long)]
        difficulty: Option<String>,

        /// Where to write logs while the terminal UI is active
        #[arg(long, default_value = "rpsd.log")]
        log_file: std::path::PathBuf,
    },

    /// Print how to play
    Rules,
}
