//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player};
use super::lines::{WINNING_LINES, WinningLine};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns the winning player and the first line (in scan order) they
/// completed, or `None` if no line holds three of the same mark.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    WINNING_LINES
        .iter()
        .find_map(|line| line.owner(board).map(|player| (player, *line)))
}
