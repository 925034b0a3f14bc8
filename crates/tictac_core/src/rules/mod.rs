//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from board
//! storage so the session and the heuristic share one definition of a line.

pub mod draw;
pub mod lines;
pub mod outcome;
pub mod win;

pub use draw::{is_draw, is_full};
pub use lines::{WINNING_LINES, WinningLine};
pub use outcome::{Outcome, evaluate};
pub use win::check_winner;
