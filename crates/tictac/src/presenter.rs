//! Line-oriented terminal presenter.
//!
//! Reads one command per line: a square (1-9 or a name such as `center`),
//! `r` to start over, `q` to quit. Draws the board after every change, or
//! writes one JSON object per change with `--json`.

use crate::pacing::{PacedGame, PendingReply, wait_for_reply};
use anyhow::{Context, Result};
use derive_new::new;
use serde::Serialize;
use std::io::Write;
use tictac_core::{GameSnapshot, Move, MoveReport, Position, Strategy};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, instrument, warn};

const USAGE: &str = "Enter 1-9 or a square name, r to reset, q to quit.";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the square at this index.
    Play(usize),
    /// Start a new game.
    Reset,
    /// Leave.
    Quit,
}

impl Command {
    /// Parses one input line; `None` if it means nothing.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Some(Self::Quit),
            "r" | "reset" | "new" => Some(Self::Reset),
            other => Position::parse_input(other).map(|pos| Self::Play(pos.to_index())),
        }
    }
}

/// Draws the game and feeds input lines to it.
#[derive(Debug, new)]
pub struct Presenter<W, S = tictac_core::GreedyStrategy> {
    game: PacedGame<S>,
    out: W,
    json: bool,
}

impl<W: Write, S: Strategy + Send + 'static> Presenter<W, S> {
    /// Runs until `q` or end of input.
    #[instrument(skip_all)]
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<()> {
        let mut lines = input.lines();
        let mut pending: Option<PendingReply> = None;

        self.greet().await?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line.context("Failed to read input")? else {
                        debug!("End of input");
                        break;
                    };
                    match Command::parse(&line) {
                        Some(Command::Quit) => break,
                        Some(Command::Reset) => {
                            let state = self.game.reset().await;
                            self.show_state(&state)?;
                        }
                        Some(Command::Play(index)) => {
                            let (report, reply) = self.game.submit(index).await.into_parts();
                            self.show_report(&report)?;
                            if reply.is_some() {
                                pending = reply;
                            }
                        }
                        None if line.trim().is_empty() => {}
                        None => {
                            warn!(input = %line.trim(), "Unrecognized input");
                            self.message(&format!(
                                "Unrecognized input {:?}. {}",
                                line.trim(),
                                USAGE
                            ))?;
                        }
                    }
                }
                reply = wait_for_reply(&mut pending) => {
                    let reply = reply.context("Automated reply task failed")?;
                    self.show_reply(reply).await?;
                }
            }
        }

        if pending.is_some() {
            debug!("Waiting for scheduled reply before leaving");
            let reply = wait_for_reply(&mut pending)
                .await
                .context("Automated reply task failed")?;
            self.show_reply(reply).await?;
        }

        info!("Presenter finished");
        Ok(())
    }

    /// Returns the writer.
    pub fn into_output(self) -> W {
        self.out
    }

    async fn greet(&mut self) -> Result<()> {
        let state = self.game.state().await;
        if !self.json {
            let human = state.to_move().map(|p| p.to_string()).unwrap_or_default();
            writeln!(
                self.out,
                "Tic-tac-toe. You play {}. {}",
                human,
                USAGE
            )?;
        }
        self.show_state(&state)
    }

    fn show_report(&mut self, report: &MoveReport) -> Result<()> {
        if self.json {
            return self.emit(report);
        }
        if let Some(reason) = report.rejection() {
            return self.message(&format!("Invalid move: {}", reason));
        }
        if let Some(mov) = report.automated_move() {
            writeln!(self.out, "{}", describe(mov))?;
        }
        self.show_state(report.state())
    }

    async fn show_reply(&mut self, reply: Option<Move>) -> Result<()> {
        let Some(mov) = reply else {
            debug!("Scheduled reply discarded");
            return Ok(());
        };
        let state = self.game.state().await;
        if !self.json {
            writeln!(self.out, "{}", describe(&mov))?;
        }
        self.show_state(&state)
    }

    fn show_state(&mut self, state: &GameSnapshot) -> Result<()> {
        if self.json {
            return self.emit(state);
        }
        writeln!(self.out, "{}", render_board(state))?;
        writeln!(self.out, "{}", state.status_string())?;
        self.out.flush()?;
        Ok(())
    }

    fn message(&mut self, text: &str) -> Result<()> {
        if self.json {
            return self.emit(&serde_json::json!({ "message": text }));
        }
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    fn emit<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

fn describe(mov: &Move) -> String {
    format!("{} plays {}", mov.player(), mov.position().label())
}

/// Draws the board, numbering empty squares 1-9.
pub fn render_board(state: &GameSnapshot) -> String {
    state
        .board()
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Some(player) => player.to_string(),
                    None => (row * 3 + col + 1).to_string(),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n-+-+-\n")
}
