//! Phase consistency: the phase agrees with the evaluated board.

use super::super::rules::evaluate;
use super::super::{Phase, Session};
use super::Invariant;

/// Invariant: the stored outcome is the board's evaluation, and the session
/// is terminal exactly when that outcome is.
pub struct PhaseConsistentInvariant;

impl Invariant<Session> for PhaseConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let outcome = evaluate(session.board());
        outcome == session.outcome()
            && outcome.is_terminal() == (session.phase() == Phase::Terminal)
    }

    fn description() -> &'static str {
        "Phase and outcome agree with the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_and_reset_sessions_hold() {
        let session = Session::default().apply_human_move(0).into_session();
        assert!(PhaseConsistentInvariant::holds(&session));
        assert!(PhaseConsistentInvariant::holds(&session.reset()));
    }
}
