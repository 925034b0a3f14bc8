//! Read-only views handed to a presenter.

use super::action::{InvalidMove, Move};
use super::types::CELL_COUNT;
use super::{Phase, Player, Session};
use derive_getters::Getters;
use serde::Serialize;

/// Everything a presenter needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameSnapshot {
    /// Marks in row-major order, `None` for empty squares.
    board: [Option<Player>; CELL_COUNT],
    /// Mark to play, `None` once the game is over.
    to_move: Option<Player>,
    /// Turn-cycle phase.
    phase: Phase,
    /// True once the game is won or drawn.
    terminal: bool,
    /// Winning mark, if any.
    winner: Option<Player>,
    /// True if the game ended in a draw.
    draw: bool,
    /// Indices of the winning line, if any.
    winning_line: Option<[usize; 3]>,
    /// Reset counter of the session this was taken from.
    epoch: u64,
}

impl GameSnapshot {
    /// Returns a one-line status for display.
    pub fn status_string(&self) -> String {
        match (self.winner, self.draw, self.to_move) {
            (Some(winner), _, _) => format!("Game over. Player {} wins!", winner),
            (None, true, _) => "Game over. Draw!".to_string(),
            (None, false, Some(player)) if self.phase == Phase::AutomatedTurn => {
                format!("Player {} is thinking...", player)
            }
            (None, false, Some(player)) => format!("Player {}'s turn", player),
            (None, false, None) => "Game over".to_string(),
        }
    }
}

impl From<&Session> for GameSnapshot {
    fn from(session: &Session) -> Self {
        let outcome = session.outcome();
        Self {
            board: session.board().marks(),
            to_move: session.to_move(),
            phase: session.phase(),
            terminal: session.is_terminal(),
            winner: outcome.winner(),
            draw: outcome.is_draw(),
            winning_line: outcome.winning_line().map(|line| line.indices()),
            epoch: session.epoch(),
        }
    }
}

/// What happened to a submitted human move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct MoveReport {
    /// True if the human move was applied.
    accepted: bool,
    /// Why the move was refused, if it was.
    rejection: Option<InvalidMove>,
    /// The human move, if applied.
    human_move: Option<Move>,
    /// The automated reply, if one was applied before returning.
    automated_move: Option<Move>,
    /// State after the call.
    state: GameSnapshot,
}

impl MoveReport {
    pub(crate) fn applied(
        human_move: Move,
        automated_move: Option<Move>,
        state: GameSnapshot,
    ) -> Self {
        Self {
            accepted: true,
            rejection: None,
            human_move: Some(human_move),
            automated_move,
            state,
        }
    }

    pub(crate) fn refused(reason: InvalidMove, state: GameSnapshot) -> Self {
        Self {
            accepted: false,
            rejection: Some(reason),
            human_move: None,
            automated_move: None,
            state,
        }
    }
}
