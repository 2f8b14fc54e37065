use std::fmt;

/// Numeric Sentry issue identifier, kept as the digit string from the link.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueId(String);

impl IssueId {
    /// Takes the trailing run of ASCII digits of a link produced by
    /// [`LinkExtractor`](super::LinkExtractor), which always ends in one.
    pub fn from_link(link: &str) -> Self {
        let head = link.trim_end_matches(|c: char| c.is_ascii_digit());
        Self(link[head.len()..].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
