//! Delayed automated replies.
//!
//! The human move is applied at once; the automated reply runs on a tokio
//! task after the configured delay. The task re-checks the session when it
//! wakes and gives up if the game was reset in the meantime.

use std::sync::Arc;
use std::time::Duration;
use tictac_core::{GameSnapshot, GreedyStrategy, Move, MoveReport, Strategy, TurnController};
use tokio::sync::Mutex;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info, instrument};

/// A scheduled automated reply.
pub type PendingReply = JoinHandle<Option<Move>>;

/// Result of submitting a human move.
#[derive(Debug)]
pub struct Submission {
    report: MoveReport,
    pending: Option<PendingReply>,
}

impl Submission {
    /// Returns what happened to the human move.
    pub fn report(&self) -> &MoveReport {
        &self.report
    }

    /// Returns true if an automated reply is scheduled.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Splits into the report and the scheduled reply, if any.
    pub fn into_parts(self) -> (MoveReport, Option<PendingReply>) {
        (self.report, self.pending)
    }
}

/// A turn controller shared with its scheduled replies.
#[derive(Debug)]
pub struct PacedGame<S = GreedyStrategy> {
    controller: Arc<Mutex<TurnController<S>>>,
    delay: Duration,
}

impl<S> Clone for PacedGame<S> {
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
            delay: self.delay,
        }
    }
}

impl<S: Strategy + Send + 'static> PacedGame<S> {
    /// Wraps a controller; a zero delay plays the reply before returning.
    pub fn new(controller: TurnController<S>, delay: Duration) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            delay,
        }
    }

    /// Returns the pacing delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Applies the human move at `index` and schedules the reply.
    ///
    /// While the reply is pending the session is in the automated phase and
    /// further human moves are refused.
    #[instrument(skip(self))]
    pub async fn submit(&self, index: usize) -> Submission {
        let mut controller = self.controller.lock().await;

        if self.delay.is_zero() {
            return Submission {
                report: controller.apply_human_move(index),
                pending: None,
            };
        }

        let report = controller.submit_human_move(index);
        if !*report.accepted() || *report.state().terminal() {
            return Submission { report, pending: None };
        }

        let epoch = *report.state().epoch();
        let shared = Arc::clone(&self.controller);
        let delay = self.delay;
        debug!(epoch, delay_ms = delay.as_millis() as u64, "Scheduling automated reply");
        let pending = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            shared.lock().await.run_scheduled_automated_turn(epoch)
        });

        Submission {
            report,
            pending: Some(pending),
        }
    }

    /// Returns the current state.
    pub async fn state(&self) -> GameSnapshot {
        self.controller.lock().await.state()
    }

    /// Starts a new game. A reply scheduled before the reset does nothing.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> GameSnapshot {
        let state = self.controller.lock().await.reset();
        info!(epoch = *state.epoch(), "Game reset");
        state
    }
}

/// Waits for a scheduled reply, or forever if none is scheduled.
///
/// Clears `pending` once the reply has resolved, so it can sit in a
/// `tokio::select!` loop.
pub async fn wait_for_reply(pending: &mut Option<PendingReply>) -> Result<Option<Move>, JoinError> {
    let result = match pending.as_mut() {
        Some(handle) => handle.await,
        None => std::future::pending().await,
    };
    *pending = None;
    result
}
