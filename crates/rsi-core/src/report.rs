//! User-visible run report: the log sink seam and the exact report lines.

use std::sync::Mutex;

use crate::links::IssueId;
use crate::sentry_api::ResolveError;

pub const SUCCESS_MARK: &str = "\u{2705}";
pub const FAILURE_MARK: &str = "\u{274c}";

/// Host log sink. One call per report line.
pub trait Reporter: Send + Sync {
    fn info(&self, line: &str);
    fn error(&self, line: &str);
    /// Marks the whole run failed. Only configuration failures reach this.
    fn set_failed(&self, message: &str);
}

pub fn no_issues_line() -> &'static str {
    "No Sentry issues found."
}

pub fn found_line(links: &[&str]) -> String {
    format!("Found Sentry issues: {}", links.join(", "))
}

pub fn resolving_line(id: &IssueId) -> String {
    format!("Resolving Sentry issue: {}", id)
}

/// Outcome of one issue's update call.
#[derive(Debug)]
pub enum Resolution {
    Resolved(IssueId),
    Failed { id: IssueId, error: ResolveError },
}

impl Resolution {
    pub fn from_result(id: IssueId, result: Result<(), ResolveError>) -> Self {
        match result {
            Ok(()) => Resolution::Resolved(id),
            Err(error) => Resolution::Failed { id, error },
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn line(&self) -> String {
        match self {
            Resolution::Resolved(id) => {
                format!("{} Successfully resolved Sentry issue: {}", SUCCESS_MARK, id)
            }
            Resolution::Failed { id, error } => {
                format!("{} Error resolving Sentry issue {}: Error: {}", FAILURE_MARK, id, error)
            }
        }
    }

    /// Successes go to the info stream, failures to the error stream.
    pub fn report(&self, reporter: &dyn Reporter) {
        let line = self.line();
        if self.is_resolved() {
            reporter.info(&line);
        } else {
            reporter.error(&line);
        }
    }
}

/// One line captured by [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Info(String),
    Error(String),
    Failed(String),
}

/// In-memory sink; keeps every line in order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<ReportLine>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<ReportLine> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn failure(&self) -> Option<String> {
        self.lines().into_iter().find_map(|line| match line {
            ReportLine::Failed(msg) => Some(msg),
            _ => None,
        })
    }

    fn push(&self, line: ReportLine) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, line: &str) {
        self.push(ReportLine::Info(line.to_string()));
    }

    fn error(&self, line: &str) {
        self.push(ReportLine::Error(line.to_string()));
    }

    fn set_failed(&self, message: &str) {
        self.push(ReportLine::Failed(message.to_string()));
    }
}
