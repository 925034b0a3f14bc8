//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal against a greedy automated opponent
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Play tic-tac-toe against a greedy automated opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on stdin/stdout
    Play {
        /// Path to a TOML config file (defaults to ./tictac.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for the automated player's corner choice
        #[arg(long)]
        seed: Option<u64>,

        /// Delay before the automated reply, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Emit one JSON object per state change instead of drawing the board
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Path to a TOML config file (defaults to ./tictac.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
