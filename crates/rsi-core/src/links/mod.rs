//! Sentry issue link extraction from free-form issue text.
//!
//! The organization slug is spliced into the pattern verbatim, so a slug
//! containing regex metacharacters changes what matches (or fails to compile).
//! Slugs come from workflow configuration, not from the issue author.

mod issue_id;

pub use issue_id::IssueId;

use regex::Regex;

/// Builds the link pattern for `organization`.
///
/// The `.` before `sentry.io` is left unescaped and digits are ASCII only.
pub fn link_pattern(organization: &str) -> String {
    format!("https://{}.sentry.io/issues/[0-9]+", organization)
}

/// Result of scanning an issue body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction<'a> {
    /// No link matched; the run ends without network calls.
    NoneFound,
    /// Matched links in order of appearance, duplicates kept.
    Found(Vec<&'a str>),
}

/// Compiled, organization-scoped link matcher.
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    pattern: Regex,
}

impl LinkExtractor {
    pub fn new(organization: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&link_pattern(organization))?;
        Ok(Self { pattern })
    }

    /// Finds every link in `body`. The match is unanchored, so trailing `/`,
    /// `)` or further path after the digit run does not prevent a match.
    pub fn extract<'a>(&self, body: &'a str) -> Extraction<'a> {
        let links: Vec<&str> = self.pattern.find_iter(body).map(|m| m.as_str()).collect();
        if links.is_empty() {
            Extraction::NoneFound
        } else {
            Extraction::Found(links)
        }
    }
}
