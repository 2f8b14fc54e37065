//! Per-issue resolution failure.

use thiserror::Error;

/// Why one issue could not be resolved. Never aborts the run.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The transfer itself failed (DNS, connect, TLS, bad URL, read error).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// The server answered with a non-2xx status.
    #[error("Status: {status_text}, Exception: {body}")]
    Http {
        code: u32,
        status_text: String,
        body: String,
    },
    /// The blocking transfer task panicked or was cancelled.
    #[error("{0}")]
    Task(String),
}
