//! Tic-tac-toe against a greedy automated opponent.
//!
//! Pure game logic: the board, the eight winning lines, outcome evaluation,
//! the fixed-priority move heuristic and the turn state machine a presenter
//! drives.
//!
//! # Architecture
//!
//! - **Board**: [`Board`], [`Square`], [`Position`]
//! - **Rules**: [`rules::evaluate`], [`rules::WINNING_LINES`]
//! - **Heuristic**: [`find_line_completion`], [`select_move`], [`GreedyStrategy`]
//! - **Session**: [`Session`] transitions by value; [`TurnController`] wraps
//!   one session for a presenter
//!
//! # Example
//!
//! ```
//! use tictac_core::{GreedyStrategy, Phase, Player, Seats, TurnController};
//!
//! let mut controller = TurnController::new(Seats::default(), GreedyStrategy::seeded(1));
//! let report = controller.apply_human_move(0);
//! assert!(*report.accepted());
//! // The automated reply has already been played: center.
//! assert_eq!(report.state().board()[4], Some(Player::O));
//! assert_eq!(report.state().phase(), &Phase::WaitingForFirstMover);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod heuristic;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod snapshot;
mod types;

pub use action::{InvalidMove, Move};
pub use controller::TurnController;
pub use heuristic::{
    Decision, GreedyStrategy, Rule, Strategy, decide, find_line_completion, select_move,
};
pub use position::Position;
pub use rules::{Outcome, WINNING_LINES, WinningLine, evaluate};
pub use session::{Phase, Seats, Session, Transition};
pub use snapshot::{GameSnapshot, MoveReport};
pub use types::{Board, CELL_COUNT, Player, Square};
