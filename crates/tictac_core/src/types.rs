//! Core domain types for tic-tac-toe.

use super::action::InvalidMove;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small values: `place` returns the updated board and leaves the
/// receiver untouched, so a rejected move can never disturb existing marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from row-major squares.
    pub fn from_squares(squares: [Square; CELL_COUNT]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if the square at `index` is empty.
    ///
    /// Indices outside 0-8 are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.squares.get(index), Some(Square::Empty))
    }

    /// Places `mark` at `index` and returns the updated board.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::OutOfRange`] for indices past 8 and
    /// [`InvalidMove::SquareOccupied`] if the square already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&self, index: usize, mark: Player) -> Result<Board, InvalidMove> {
        let pos = Position::from_index(index).ok_or(InvalidMove::OutOfRange(index))?;
        if self.get(pos) != Square::Empty {
            return Err(InvalidMove::SquareOccupied(pos));
        }
        let mut next = *self;
        next.squares[index] = Square::Occupied(mark);
        Ok(next)
    }

    /// Checks if no square is empty.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns an empty board.
    pub fn reset(&self) -> Board {
        Board::new()
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Returns the marks in row-major order, `None` for empty squares.
    pub fn marks(&self) -> [Option<Player>; CELL_COUNT] {
        self.squares.map(Square::mark)
    }

    /// Returns the empty positions in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.get(*pos) == Square::Empty)
            .collect()
    }

    /// Counts the squares holding `mark`.
    pub fn count(&self, mark: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!((0..CELL_COUNT).all(|i| board.is_empty(i)));
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_returns_updated_board() {
        let board = Board::new();
        let next = board.place(4, Player::X).unwrap();
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        assert!(board.is_empty(4), "original board is untouched");
    }

    #[test]
    fn test_place_occupied_rejected_without_change() {
        let board = Board::new().place(0, Player::X).unwrap();
        let result = board.place(0, Player::O);
        assert_eq!(result, Err(InvalidMove::SquareOccupied(Position::TopLeft)));
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    }

    #[test]
    fn test_place_out_of_range() {
        let board = Board::new();
        assert_eq!(board.place(9, Player::X), Err(InvalidMove::OutOfRange(9)));
        assert!(!board.is_empty(9));
    }

    #[test]
    fn test_reset_clears_all() {
        let board = Board::new()
            .place(0, Player::X)
            .and_then(|b| b.place(8, Player::O))
            .unwrap();
        assert_eq!(board.reset(), Board::new());
    }

    #[test]
    fn test_display_layout() {
        let board = Board::new().place(0, Player::X).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }
}
