//! Turn controller: the entry point a presenter drives.
//!
//! The controller owns one [`Session`] and one [`Strategy`]. A human move and
//! the automated reply are applied back to back, so the next human move is
//! only ever seen after the reply has been placed and evaluated.

use super::action::{InvalidMove, Move};
use super::heuristic::{GreedyStrategy, Strategy};
use super::session::{Phase, Seats, Session};
use super::snapshot::{GameSnapshot, MoveReport};
use tracing::{debug, info, instrument, warn};

/// Drives a session for a presenter.
#[derive(Debug)]
pub struct TurnController<S = GreedyStrategy> {
    session: Session,
    strategy: S,
}

impl<S: Strategy> TurnController<S> {
    /// Creates a controller with a fresh session.
    pub fn new(seats: Seats, strategy: S) -> Self {
        Self {
            session: Session::new(seats),
            strategy,
        }
    }

    /// Applies the human move at `index` (0-8) and, if the game goes on, the
    /// automated reply.
    ///
    /// A refused move leaves the state unchanged and reports
    /// `accepted == false` with the reason.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, index: usize) -> MoveReport {
        let human_move = match self.place_human(index) {
            Ok(mov) => mov,
            Err(reason) => return MoveReport::refused(reason, self.state()),
        };

        let automated_move = self.run_automated_turn();
        MoveReport::applied(human_move, automated_move, self.state())
    }

    /// Applies only the human move at `index`, leaving the automated reply
    /// pending in [`Phase::AutomatedTurn`].
    ///
    /// Used when the reply is scheduled after a pacing delay; see
    /// [`TurnController::run_scheduled_automated_turn`].
    #[instrument(skip(self))]
    pub fn submit_human_move(&mut self, index: usize) -> MoveReport {
        match self.place_human(index) {
            Ok(human_move) => MoveReport::applied(human_move, None, self.state()),
            Err(reason) => MoveReport::refused(reason, self.state()),
        }
    }

    /// Plays the automated side if it is its turn.
    ///
    /// Returns the applied move, or `None` if it was not the automated
    /// player's turn (including after the game ended).
    #[instrument(skip(self))]
    pub fn run_automated_turn(&mut self) -> Option<Move> {
        if self.session.phase() != Phase::AutomatedTurn {
            debug!(phase = %self.session.phase(), "No automated turn pending");
            return None;
        }

        let session = std::mem::take(&mut self.session);
        let (session, applied) = session.apply_automated_move(&mut self.strategy).into_parts();
        self.session = session;
        match applied {
            Ok(mov) => Some(mov),
            Err(reason) => {
                warn!(%reason, "Automated turn produced no move");
                None
            }
        }
    }

    /// Plays an automated turn that was scheduled during `epoch`.
    ///
    /// Does nothing if the session was reset since, or if the turn is no
    /// longer pending.
    #[instrument(skip(self))]
    pub fn run_scheduled_automated_turn(&mut self, epoch: u64) -> Option<Move> {
        if self.session.epoch() != epoch {
            info!(
                scheduled = epoch,
                current = self.session.epoch(),
                "Discarding automated turn scheduled before reset"
            );
            return None;
        }
        self.run_automated_turn()
    }

    /// Returns the current state.
    pub fn state(&self) -> GameSnapshot {
        GameSnapshot::from(&self.session)
    }

    /// Starts a new game and returns its state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> GameSnapshot {
        let session = std::mem::take(&mut self.session);
        self.session = session.reset();
        self.state()
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Replays human moves from a fresh game, letting the strategy answer
    /// each one.
    ///
    /// # Errors
    ///
    /// Returns the first refused move's reason; the controller then holds
    /// the state just before that move.
    #[instrument(skip(self))]
    pub fn replay(&mut self, human_moves: &[usize]) -> Result<GameSnapshot, InvalidMove> {
        self.reset();
        for &index in human_moves {
            let report = self.apply_human_move(index);
            if let Some(reason) = report.rejection() {
                return Err(*reason);
            }
        }
        Ok(self.state())
    }

    fn place_human(&mut self, index: usize) -> Result<Move, InvalidMove> {
        let session = std::mem::take(&mut self.session);
        let (session, applied) = session.apply_human_move(index).into_parts();
        self.session = session;
        applied
    }
}

impl Default for TurnController<GreedyStrategy> {
    fn default() -> Self {
        Self::new(Seats::default(), GreedyStrategy::from_os_rng())
    }
}
