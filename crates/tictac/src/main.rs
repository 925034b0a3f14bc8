//! tictac - play tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tictac::cli::{Cli, Command};
use tictac::{GameConfig, PacedGame, Presenter, logging};
use tictac_core::TurnController;
use tokio::io::BufReader;
use tracing::{info, instrument};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            seed,
            delay_ms,
            json,
        } => run_play(config, seed, delay_ms, json).await,
        Command::Config { config } => print_config(config),
    }
}

/// Play one interactive session on stdin/stdout
#[instrument]
async fn run_play(
    config: Option<PathBuf>,
    seed: Option<u64>,
    delay_ms: Option<u64>,
    json: bool,
) -> Result<()> {
    let config = GameConfig::load(config.as_deref())?.with_overrides(seed, delay_ms);
    logging::init(&config)?;

    info!(
        human = %config.human_mark(),
        delay_ms = config.delay_ms(),
        seed = ?config.seed(),
        "Starting game"
    );

    let controller = TurnController::new(config.seats(), config.strategy());
    let game = PacedGame::new(controller, config.delay());
    let mut presenter = Presenter::new(game, std::io::stdout(), json);
    presenter.run(BufReader::new(tokio::io::stdin())).await
}

/// Print the effective configuration
fn print_config(config: Option<PathBuf>) -> Result<()> {
    let config = GameConfig::load(config.as_deref())?;
    print!("{}", config.to_toml()?);
    Ok(())
}
