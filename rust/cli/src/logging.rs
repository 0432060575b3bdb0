//! Structured logging setup for the `crib` binary.
//!
//! The engine only emits `tracing` events; this module installs the
//! subscriber that prints them to stderr.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Picks the filter: `RUST_LOG` when set and valid, then the configured level.
pub fn build_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_LEVEL))
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_logging(configured: &str) {
    let _ = fmt()
        .with_env_filter(build_filter(configured))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_logging("debug");
        init_logging("info");
        tracing::debug!("still fine");
    }
}
