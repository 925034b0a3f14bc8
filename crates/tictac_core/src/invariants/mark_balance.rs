//! Mark balance invariant: the first mover is never behind or two ahead.

use super::super::Session;
use super::Invariant;

/// Invariant: the human has as many marks as the automated player, or one
/// more.
pub struct MarkBalanceInvariant;

impl Invariant<Session> for MarkBalanceInvariant {
    fn holds(session: &Session) -> bool {
        let seats = session.seats();
        let human = session.board().count(seats.human());
        let automated = session.board().count(seats.automated());
        human == automated || human == automated + 1
    }

    fn description() -> &'static str {
        "First mover has the same number of marks or one more"
    }
}
