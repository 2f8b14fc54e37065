//! Status line parsing from collected response header lines.

/// Final status of a response: numeric code and reason phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub code: u32,
    /// Reason phrase; empty when the protocol has none (HTTP/2 and later).
    pub reason: String,
}

/// Returns the last status line among `lines`, skipping interim `1xx`
/// responses that precede the real one.
pub(crate) fn parse_status_line(lines: &[String]) -> Option<StatusLine> {
    lines
        .iter()
        .filter_map(|line| parse_one(line.trim()))
        .last()
}

/// Reason phrase for the final response, or the standard phrase for `code`
/// when the status line carries none.
pub(crate) fn status_text(code: u32, lines: &[String]) -> String {
    parse_status_line(lines)
        .map(|s| s.reason)
        .filter(|reason| !reason.is_empty())
        .unwrap_or_else(|| canonical_reason(code).to_string())
}

/// Standard reason phrases (RFC 9110) for the codes an API is likely to return.
fn canonical_reason(code: u32) -> &'static str {
    match code {
        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        413 => "Content Too Large",
        415 => "Unsupported Media Type",
        422 => "Unprocessable Content",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "",
    }
}

fn parse_one(line: &str) -> Option<StatusLine> {
    if !line.starts_with("HTTP/") {
        return None;
    }
    let mut parts = line.splitn(3, ' ');
    let _version = parts.next()?;
    let code = parts.next()?.trim().parse::<u32>().ok()?;
    let reason = parts.next().unwrap_or("").trim().to_string();
    Some(StatusLine { code, reason })
}
