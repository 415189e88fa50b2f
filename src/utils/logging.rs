//! Structured logging configuration.
//!
//! The codec itself never logs on error paths; this module configures the
//! `tracing` subscriber for hosts that want the framer's trace events and
//! their own spans on one pipeline.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber at `INFO`, honoring `RUST_LOG` when set.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initializes the global subscriber at the given level, honoring
/// `RUST_LOG` when set. Safe to call more than once; later calls are
/// no-ops.
pub fn init_with_level(level: Level) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
