//! Triggering event payload (the JSON file GitHub Actions exposes via
//! `GITHUB_EVENT_PATH`).

mod parse;

pub use parse::{EventPayload, Issue};

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("read event file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse event JSON {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Loads the event payload from `path`.
///
/// No path, or a path that does not exist, yields an empty payload (and so an
/// empty issue body). A file that exists but cannot be read or parsed is an error.
pub fn load_event(path: Option<&Path>) -> Result<EventPayload, EventError> {
    let Some(path) = path else {
        tracing::debug!("no event path set; using empty payload");
        return Ok(EventPayload::default());
    };
    if !path.exists() {
        tracing::warn!("event path {} does not exist", path.display());
        return Ok(EventPayload::default());
    }
    let bytes = std::fs::read(path).map_err(|source| EventError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_event(&bytes).map_err(|source| EventError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses an event document from raw JSON bytes.
pub fn parse_event(bytes: &[u8]) -> Result<EventPayload, serde_json::Error> {
    serde_json::from_slice(bytes)
}
