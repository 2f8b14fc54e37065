//! Shape of the "mark resolved" API call, independent of the transport.

use serde::Serialize;

use crate::config::ResolverConfig;
use crate::links::IssueId;

/// Issue status values the update endpoint accepts (only `resolved` is sent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    Resolved,
}

/// JSON body of the issue update call.
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub status: IssueStatus,
}

/// Fully built PUT request for one issue.
#[derive(Clone)]
pub struct ResolveRequest {
    pub issue_id: IssueId,
    pub url: String,
    /// Header name/value pairs, sent in this order.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ResolveRequest {
    pub const METHOD: &'static str = "PUT";

    /// Builds the request for `issue_id`. Organization and id go into the path as-is.
    pub fn new(config: &ResolverConfig, issue_id: &IssueId) -> Self {
        let url = format!(
            "{}/api/0/organizations/{}/issues/{}/",
            config.api_base(),
            config.organization(),
            issue_id
        );
        let headers = vec![
            (
                "Authorization".to_string(),
                format!("Bearer {}", config.credential()),
            ),
            ("Content-Type".to_string(), "application/json".to_string()),
        ];
        Self {
            issue_id: issue_id.clone(),
            url,
            headers,
            body: resolved_body(),
        }
    }
}

impl std::fmt::Debug for ResolveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header_names: Vec<&str> = self.headers.iter().map(|(k, _)| k.as_str()).collect();
        f.debug_struct("ResolveRequest")
            .field("issue_id", &self.issue_id)
            .field("url", &self.url)
            .field("headers", &header_names)
            .field("body", &self.body)
            .finish()
    }
}

/// `{"status":"resolved"}`
fn resolved_body() -> String {
    let update = StatusUpdate {
        status: IssueStatus::Resolved,
    };
    // A unit-variant struct always serializes.
    serde_json::to_string(&update).unwrap_or_else(|_| r#"{"status":"resolved"}"#.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ResolverConfig {
        ResolverConfig::new(Some("valid-token".into()), Some("acme".into())).unwrap()
    }

    #[test]
    fn request_targets_issue_update_endpoint() {
        let req = ResolveRequest::new(&config(), &IssueId::from_link("https://acme.sentry.io/issues/42"));
        assert_eq!(ResolveRequest::METHOD, "PUT");
        assert_eq!(req.url, "https://sentry.io/api/0/organizations/acme/issues/42/");
        assert_eq!(req.issue_id.as_str(), "42");
    }

    #[test]
    fn request_headers_and_body() {
        let req = ResolveRequest::new(&config(), &IssueId::from_link("42"));
        assert_eq!(
            req.headers,
            vec![
                ("Authorization".to_string(), "Bearer valid-token".to_string()),
                ("Content-Type".to_string(), "application/json".to_string()),
            ]
        );
        assert_eq!(req.body, r#"{"status":"resolved"}"#);
        let parsed: serde_json::Value = serde_json::from_str(&req.body).unwrap();
        assert_eq!(parsed, serde_json::json!({ "status": "resolved" }));
    }

    #[test]
    fn same_issue_builds_identical_requests() {
        let id = IssueId::from_link("7");
        let a = ResolveRequest::new(&config(), &id);
        let b = ResolveRequest::new(&config(), &id);
        assert_eq!(a.url, b.url);
        assert_eq!(a.headers, b.headers);
        assert_eq!(a.body, b.body);
    }

    #[test]
    fn api_base_override_keeps_path_shape() {
        let cfg = config().with_api_base("http://127.0.0.1:9999");
        let req = ResolveRequest::new(&cfg, &IssueId::from_link("5"));
        assert_eq!(req.url, "http://127.0.0.1:9999/api/0/organizations/acme/issues/5/");
    }

    #[test]
    fn debug_hides_authorization_value() {
        let req = ResolveRequest::new(&config(), &IssueId::from_link("5"));
        let dbg = format!("{:?}", req);
        assert!(dbg.contains("Authorization"));
        assert!(!dbg.contains("valid-token"));
    }
}
