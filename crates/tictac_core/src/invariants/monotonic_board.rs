//! Monotonic board invariant: squares never change once set.

use super::super::{Board, Session};
use super::Invariant;

/// Invariant: replaying the history onto an empty board reproduces the
/// board, with every move landing on an empty square.
pub struct MonotonicBoardInvariant;

impl Invariant<Session> for MonotonicBoardInvariant {
    fn holds(session: &Session) -> bool {
        let replayed = session.history().iter().try_fold(Board::new(), |board, mov| {
            board.place(mov.position.to_index(), mov.player)
        });
        matches!(replayed, Ok(board) if board == *session.board())
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session_holds() {
        assert!(MonotonicBoardInvariant::holds(&Session::default()));
    }

    #[test]
    fn test_after_human_move_holds() {
        let session = Session::default().apply_human_move(4).into_session();
        assert!(MonotonicBoardInvariant::holds(&session));
    }
}
