//! Terminal front end for `tictac_core`.
//!
//! Command-line parsing, TOML configuration, tracing setup, the paced
//! automated reply and a line-oriented presenter.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod pacing;
pub mod presenter;

pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};
pub use pacing::{PacedGame, PendingReply, Submission, wait_for_reply};
pub use presenter::{Command, Presenter, render_board};
