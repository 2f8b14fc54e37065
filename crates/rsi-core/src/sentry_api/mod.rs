//! Sentry issue update API.
//!
//! Uses the curl crate (libcurl) for one `PUT` per issue. Transfers are
//! blocking; [`resolve_issue`] moves each onto Tokio's blocking pool and
//! awaits it, so requests never overlap.

mod error;
mod request;
mod status;

pub use error::ResolveError;
pub use request::{IssueStatus, ResolveRequest, StatusUpdate};
pub use status::StatusLine;

use std::str;
use std::sync::Arc;
use std::time::Instant;

const MAX_REDIRECTS: u32 = 20;

/// Transport seam for the update call. The run only depends on this trait.
pub trait IssueResolver: Send + Sync {
    /// Sends `request` once. `Ok` means the server answered 2xx.
    fn resolve(&self, request: &ResolveRequest) -> Result<(), ResolveError>;
}

/// libcurl-backed resolver. No timeouts beyond libcurl's defaults, no retries.
/// Redirects are followed; HTTP/1.1 is pinned so failures carry a reason phrase.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlResolver;

impl IssueResolver for CurlResolver {
    fn resolve(&self, request: &ResolveRequest) -> Result<(), ResolveError> {
        put(request)
    }
}

/// Performs the PUT and classifies the response.
/// Runs in the current thread; call through [`resolve_issue`] from async code.
pub fn put(request: &ResolveRequest) -> Result<(), ResolveError> {
    let mut header_lines: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();
    let started = Instant::now();

    let mut easy = curl::easy::Easy::new();
    easy.url(&request.url)?;
    easy.http_version(curl::easy::HttpVersion::V11)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTS)?;
    easy.custom_request(ResolveRequest::METHOD)?;
    easy.post_fields_copy(request.body.as_bytes())?;

    let mut list = curl::easy::List::new();
    for (k, v) in &request.headers {
        list.append(&format!("{}: {}", k.trim(), v.trim()))?;
    }
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    tracing::debug!(
        issue = %request.issue_id,
        url = %request.url,
        code,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "issue update finished"
    );
    if (200..300).contains(&code) {
        return Ok(());
    }

    let status_text = status::status_text(code, &header_lines);
    Err(ResolveError::Http {
        code,
        status_text,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

/// Runs one blocking resolution on the blocking pool and waits for it.
pub async fn resolve_issue(
    resolver: Arc<dyn IssueResolver>,
    request: ResolveRequest,
) -> Result<(), ResolveError> {
    tokio::task::spawn_blocking(move || resolver.resolve(&request))
        .await
        .map_err(|e| ResolveError::Task(e.to_string()))?
}
