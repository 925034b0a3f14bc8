//! The eight fixed winning lines.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};

/// Three positions that win the game when they hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    cells: [Position; 3],
}

impl WinningLine {
    const fn new(a: Position, b: Position, c: Position) -> Self {
        Self { cells: [a, b, c] }
    }

    /// Returns the three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.cells
    }

    /// Returns the three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.cells.map(Position::to_index)
    }

    /// Counts the squares on this line holding `mark`.
    pub fn count(&self, board: &Board, mark: Player) -> usize {
        self.cells
            .iter()
            .filter(|pos| board.get(**pos) == Square::Occupied(mark))
            .count()
    }

    /// Returns the empty squares on this line, in line order.
    pub fn empty_cells(&self, board: &Board) -> Vec<Position> {
        self.cells
            .iter()
            .copied()
            .filter(|pos| board.get(*pos) == Square::Empty)
            .collect()
    }

    /// Returns the mark filling all three squares, if any.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.cells;
        let sq = board.get(a);
        if sq == board.get(b) && sq == board.get(c) {
            sq.mark()
        } else {
            None
        }
    }
}

/// All winning lines in scan order: rows, then columns, then diagonals.
///
/// Every scan over lines (win detection, line completion) walks this table
/// front to back, so the first match is deterministic.
pub const WINNING_LINES: [WinningLine; 8] = {
    use Position::*;
    [
        // Rows
        WinningLine::new(TopLeft, TopCenter, TopRight),
        WinningLine::new(MiddleLeft, Center, MiddleRight),
        WinningLine::new(BottomLeft, BottomCenter, BottomRight),
        // Columns
        WinningLine::new(TopLeft, MiddleLeft, BottomLeft),
        WinningLine::new(TopCenter, Center, BottomCenter),
        WinningLine::new(TopRight, MiddleRight, BottomRight),
        // Diagonals
        WinningLine::new(TopLeft, Center, BottomRight),
        WinningLine::new(TopRight, Center, BottomLeft),
    ]
};
