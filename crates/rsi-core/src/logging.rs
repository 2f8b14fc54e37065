//! Logging init: diagnostics to stderr, filtered by `RUST_LOG`.
//!
//! Stdout is reserved for the run report and workflow commands, so the
//! subscriber never writes there.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,rsi=info,rsi_core=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize structured logging to stderr.
/// Returns Err if a global subscriber is already installed.
pub fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("init logging: {}", e))?;

    tracing::debug!("rsi logging initialized");
    Ok(())
}
