//! The game session and its turn state machine.
//!
//! A [`Session`] is an explicit value: every operation consumes it and hands
//! back the next session together with what happened. Nothing lives in
//! globals, and a rejected move returns the session exactly as it was.

use super::action::{InvalidMove, Move};
use super::heuristic::Strategy;
use super::invariants::{InvariantSet, SessionInvariants};
use super::rules::{Outcome, WinningLine, evaluate};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Where the session is in the turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// The human (first mover) is to play.
    WaitingForFirstMover,
    /// The automated player is to play; human input is rejected.
    AutomatedTurn,
    /// The game is won or drawn; only a reset leaves this phase.
    Terminal,
}

/// Which mark each side plays.
///
/// The human always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seats {
    human: Player,
    automated: Player,
}

impl Seats {
    /// Seats the human as `human`; the automated player takes the other mark.
    pub fn new(human: Player) -> Self {
        Self {
            human,
            automated: human.opponent(),
        }
    }

    /// The human's mark.
    pub fn human(&self) -> Player {
        self.human
    }

    /// The automated player's mark.
    pub fn automated(&self) -> Player {
        self.automated
    }
}

impl Default for Seats {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

/// One game of tic-tac-toe between a human and the automated player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    board: Board,
    seats: Seats,
    phase: Phase,
    outcome: Outcome,
    history: Vec<Move>,
    epoch: u64,
}

/// The session after an operation, and the move it applied or why it refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    session: Session,
    applied: Result<Move, InvalidMove>,
}

impl Transition {
    fn accepted(session: Session, mov: Move) -> Self {
        Self {
            session,
            applied: Ok(mov),
        }
    }

    fn rejected(session: Session, reason: InvalidMove) -> Self {
        Self {
            session,
            applied: Err(reason),
        }
    }

    /// Returns the resulting session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the applied move or the rejection reason.
    pub fn applied(&self) -> Result<Move, InvalidMove> {
        self.applied
    }

    /// Returns true if a move was applied.
    pub fn is_accepted(&self) -> bool {
        self.applied.is_ok()
    }

    /// Splits into the session and the result.
    pub fn into_parts(self) -> (Session, Result<Move, InvalidMove>) {
        (self.session, self.applied)
    }

    /// Discards the result and keeps the session.
    pub fn into_session(self) -> Session {
        self.session
    }
}

impl Session {
    /// Creates a fresh session with the human to move.
    #[instrument]
    pub fn new(seats: Seats) -> Self {
        Self {
            board: Board::new(),
            seats,
            phase: Phase::WaitingForFirstMover,
            outcome: Outcome::Ongoing,
            history: Vec::new(),
            epoch: 0,
        }
    }

    /// Applies the human's move at `index` (0-8).
    ///
    /// On success the session moves to [`Phase::AutomatedTurn`], or to
    /// [`Phase::Terminal`] if the move ended the game. Any rejection leaves the
    /// session unchanged.
    #[instrument(skip(self), fields(epoch = self.epoch, phase = %self.phase))]
    pub fn apply_human_move(self, index: usize) -> Transition {
        match self.phase {
            Phase::Terminal => return self.refuse(InvalidMove::GameOver),
            Phase::AutomatedTurn => {
                let human = self.seats.human;
                return self.refuse(InvalidMove::NotYourTurn(human));
            }
            Phase::WaitingForFirstMover => {}
        }

        let Some(position) = Position::from_index(index) else {
            return self.refuse(InvalidMove::OutOfRange(index));
        };
        let human = self.seats.human;
        self.commit(Move::new(human, position))
    }

    /// Lets `strategy` play the automated side.
    ///
    /// Only acts in [`Phase::AutomatedTurn`]; in any other phase this is a
    /// no-op reported as a rejection. The strategy is never consulted once
    /// the game is over.
    #[instrument(skip(self, strategy), fields(epoch = self.epoch, phase = %self.phase))]
    pub fn apply_automated_move<S: Strategy + ?Sized>(self, strategy: &mut S) -> Transition {
        match self.phase {
            Phase::Terminal => return self.refuse(InvalidMove::GameOver),
            Phase::WaitingForFirstMover => {
                let automated = self.seats.automated;
                return self.refuse(InvalidMove::NotYourTurn(automated));
            }
            Phase::AutomatedTurn => {}
        }

        let (own, opponent) = (self.seats.automated, self.seats.human);
        match strategy.select_move(&self.board, own, opponent) {
            Some(position) => self.commit(Move::new(own, position)),
            None => self.refuse(InvalidMove::NoMoveAvailable),
        }
    }

    /// Starts a new game with the same seats.
    ///
    /// Callable in any phase. The epoch advances so work scheduled against
    /// the old game can tell it is stale.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn reset(self) -> Session {
        let epoch = self.epoch.wrapping_add(1);
        info!(epoch, "Session reset");
        Session {
            epoch,
            ..Session::new(self.seats)
        }
    }

    fn refuse(self, reason: InvalidMove) -> Transition {
        warn!(%reason, "Move rejected");
        Transition::rejected(self, reason)
    }

    fn commit(mut self, mov: Move) -> Transition {
        let board = match self.board.place(mov.position.to_index(), mov.player) {
            Ok(board) => board,
            Err(reason) => return self.refuse(reason),
        };

        self.board = board;
        self.history.push(mov);
        self.outcome = evaluate(&self.board);
        self.phase = if self.outcome.is_terminal() {
            Phase::Terminal
        } else if mov.player == self.seats.human {
            Phase::AutomatedTurn
        } else {
            Phase::WaitingForFirstMover
        };

        info!(%mov, phase = %self.phase, "Move applied");
        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, "Game over");
        }

        if cfg!(debug_assertions) {
            if let Err(violations) = SessionInvariants::check_all(&self) {
                warn!(?violations, "Session invariants violated");
                debug_assert!(false, "Session invariants violated: {violations:?}");
            }
        }

        Transition::accepted(self, mov)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the seat assignment.
    pub fn seats(&self) -> Seats {
        self.seats
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the outcome of the last evaluation.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the reset counter.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Returns the mark to play, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        match self.phase {
            Phase::WaitingForFirstMover => Some(self.seats.human),
            Phase::AutomatedTurn => Some(self.seats.automated),
            Phase::Terminal => None,
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Terminal
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.outcome.winning_line()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Seats::default())
    }
}
