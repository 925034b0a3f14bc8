//! Tracing subscriber setup.

use crate::config::GameConfig;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured filter. Logs go to the configured file
/// so they stay out of the board on stdout, and to stderr otherwise.
pub fn init(config: &GameConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_filter()))
        .with_context(|| format!("Invalid log filter {:?}", config.log_filter()))?;

    match config.log_file() {
        Some(path) => {
            let log_file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .try_init(); // Don't panic if already initialized
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }

    info!(filter = %config.log_filter(), "Tracing initialized");
    Ok(())
}
