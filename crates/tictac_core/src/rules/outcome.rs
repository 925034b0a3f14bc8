//! Outcome evaluation: ongoing, won or drawn.

use super::super::{Board, Player};
use super::draw::is_full;
use super::lines::WinningLine;
use super::win::check_winner;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    Ongoing,
    /// `mark` holds every square of `line`.
    Win {
        /// The winning mark.
        mark: Player,
        /// The first completed line in scan order.
        line: WinningLine,
    },
    /// The board is full and no line is complete.
    Draw,
}

impl Outcome {
    /// Returns true for wins and draws.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::Win { mark, .. } => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates a board.
///
/// A completed line wins even on a full board; only a full board with no
/// completed line is a draw.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = check_winner(board) {
        return Outcome::Win { mark, line };
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::Ongoing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn parse(rows: &str) -> Board {
        let mut squares = [Square::Empty; 9];
        for (i, c) in rows.chars().filter(|c| !c.is_whitespace()).enumerate() {
            squares[i] = match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_empty_board_ongoing() {
        assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
    }

    #[test]
    fn test_column_win() {
        let outcome = evaluate(&parse("O.X O.X .OX"));
        assert_eq!(outcome.winner(), Some(Player::X));
        assert_eq!(outcome.winning_line().map(|l| l.indices()), Some([2, 5, 8]));
        assert!(outcome.is_terminal());
    }

    #[test]
    fn test_full_board_draw() {
        let outcome = evaluate(&parse("XOX XOO OXX"));
        assert_eq!(outcome, Outcome::Draw);
        assert!(outcome.is_terminal());
        assert_eq!(outcome.winner(), None);
    }

    #[test]
    fn test_win_on_last_square_is_not_draw() {
        let outcome = evaluate(&parse("XOX OXO OXX"));
        assert_eq!(outcome.winner(), Some(Player::X));
        assert!(!outcome.is_draw());
    }

    #[test]
    fn test_partial_board_ongoing() {
        assert_eq!(evaluate(&parse("XO. .X. ..O")), Outcome::Ongoing);
    }
}
