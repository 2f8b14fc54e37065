//! Minimal slice of a GitHub webhook event: only what the run reads.

use serde::Deserialize;

/// Root of the event document. Every other top-level field is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub issue: Option<Issue>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Issue {
    /// `null` in the JSON for issues opened without a description.
    #[serde(default)]
    pub body: Option<String>,
}

impl EventPayload {
    /// Issue body text; empty when the event has no issue or the issue has no body.
    pub fn issue_body(&self) -> &str {
        self.issue
            .as_ref()
            .and_then(|issue| issue.body.as_deref())
            .unwrap_or("")
    }
}
