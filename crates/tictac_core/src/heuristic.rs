//! Greedy move selection for the automated player.
//!
//! A one-ply, fixed-priority policy: complete a line, block the opponent's
//! line, take the center, take a random free corner, take the lowest free
//! square. It looks no further ahead and can be beaten.

use super::rules::WINNING_LINES;
use super::{Board, Player, Position};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The rule that produced a move, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize, strum::Display)]
pub enum Rule {
    /// Complete one of our own lines.
    Win,
    /// Fill the gap in one of the opponent's lines.
    Block,
    /// Take the center square.
    Center,
    /// Take a free corner, chosen at random.
    Corner,
    /// Take the lowest-index free square.
    FirstFree,
}

/// A chosen square and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Square to play.
    pub position: Position,
    /// Rule that fired.
    pub rule: Rule,
}

/// Finds the square that completes a line for `mark`.
///
/// A line qualifies when `mark` holds exactly two of its squares and the
/// third is empty. Lines are scanned in [`WINNING_LINES`] order and the first
/// qualifying line wins. Called with the opponent's mark this is the block
/// check.
#[instrument]
pub fn find_line_completion(board: &Board, mark: Player) -> Option<Position> {
    WINNING_LINES.iter().find_map(|line| {
        let empty = line.empty_cells(board);
        if line.count(board, mark) == 2 && empty.len() == 1 {
            empty.first().copied()
        } else {
            None
        }
    })
}

/// Chooses a move and reports which rule fired.
///
/// Returns `None` only when the board has no empty square.
#[instrument(skip(rng))]
pub fn decide<R: Rng + ?Sized>(
    board: &Board,
    own: Player,
    opponent: Player,
    rng: &mut R,
) -> Option<Decision> {
    let pick = |position, rule| Some(Decision { position, rule });

    if let Some(position) = find_line_completion(board, own) {
        return pick(position, Rule::Win);
    }
    if let Some(position) = find_line_completion(board, opponent) {
        return pick(position, Rule::Block);
    }
    if board.is_empty(Position::Center.to_index()) {
        return pick(Position::Center, Rule::Center);
    }

    let corners: Vec<Position> = Position::CORNERS
        .iter()
        .copied()
        .filter(|pos| board.is_empty(pos.to_index()))
        .collect();
    if let Some(&position) = corners.choose(rng) {
        return pick(position, Rule::Corner);
    }

    let decision = board
        .empty_positions()
        .first()
        .map(|&position| Decision {
            position,
            rule: Rule::FirstFree,
        });
    if decision.is_none() {
        debug!("No empty square left");
    }
    decision
}

/// Chooses the square to play for `own` against `opponent`.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    own: Player,
    opponent: Player,
    rng: &mut R,
) -> Option<Position> {
    decide(board, own, opponent, rng).map(|d| d.position)
}

/// Something that picks the automated player's move.
pub trait Strategy {
    /// Picks a square for `own`, or `None` if the board is full.
    fn select_move(&mut self, board: &Board, own: Player, opponent: Player) -> Option<Position>;
}

/// The fixed-priority heuristic with an injected random source.
///
/// The random source only breaks ties between free corners; seed it to make
/// games reproducible.
#[derive(Debug, Clone)]
pub struct GreedyStrategy<R = StdRng> {
    rng: R,
}

impl<R: Rng> GreedyStrategy<R> {
    /// Creates a strategy drawing corner choices from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl GreedyStrategy<StdRng> {
    /// Creates a reproducible strategy.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a strategy seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Strategy for GreedyStrategy<R> {
    #[instrument(skip(self))]
    fn select_move(&mut self, board: &Board, own: Player, opponent: Player) -> Option<Position> {
        let decision = decide(board, own, opponent, &mut self.rng)?;
        debug!(
            position = %decision.position,
            rule = %decision.rule,
            "Automated player chose square"
        );
        Some(decision.position)
    }
}
