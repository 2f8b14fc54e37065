//! Run orchestration: validate, extract, resolve each issue in order, report.

use std::sync::Arc;
use thiserror::Error;

use crate::config::{ConfigError, InputSource, ResolverConfig};
use crate::event::EventPayload;
use crate::links::{Extraction, IssueId, LinkExtractor};
use crate::report::{self, Reporter, Resolution};
use crate::sentry_api::{self, IssueResolver, ResolveRequest};

/// How a run ended. Only `Failed` should turn into a failing exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Configuration was rejected; nothing was sent.
    Failed,
    /// The body had no links; nothing was sent.
    NoIssues,
    /// Every link was attempted. Failed resolutions do not fail the run.
    Completed { resolved: usize, failed: usize },
}

/// Errors that abort the run before any request.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Runs the pipeline with inputs read from `inputs`.
pub async fn run(
    inputs: &dyn InputSource,
    event: &EventPayload,
    resolver: Arc<dyn IssueResolver>,
    reporter: &dyn Reporter,
) -> RunStatus {
    match ResolverConfig::from_inputs(inputs) {
        Ok(config) => run_with_config(&config, event, resolver, reporter).await,
        Err(err) => fail(reporter, err.into()),
    }
}

/// Runs the pipeline with already validated configuration.
pub async fn run_with_config(
    config: &ResolverConfig,
    event: &EventPayload,
    resolver: Arc<dyn IssueResolver>,
    reporter: &dyn Reporter,
) -> RunStatus {
    match resolve_linked_issues(config, event.issue_body(), resolver, reporter).await {
        Ok(status) => status,
        Err(err) => fail(reporter, err),
    }
}

fn fail(reporter: &dyn Reporter, err: RunError) -> RunStatus {
    tracing::debug!("run failed: {}", err);
    reporter.set_failed(&err.to_string());
    RunStatus::Failed
}

async fn resolve_linked_issues(
    config: &ResolverConfig,
    body: &str,
    resolver: Arc<dyn IssueResolver>,
    reporter: &dyn Reporter,
) -> Result<RunStatus, RunError> {
    let extractor = LinkExtractor::new(config.organization()).map_err(ConfigError::from)?;
    let links = match extractor.extract(body) {
        Extraction::NoneFound => {
            reporter.info(report::no_issues_line());
            return Ok(RunStatus::NoIssues);
        }
        Extraction::Found(links) => links,
    };
    reporter.info(&report::found_line(&links));

    let mut resolved = 0;
    let mut failed = 0;
    for link in links {
        let id = IssueId::from_link(link);
        reporter.info(&report::resolving_line(&id));
        let request = ResolveRequest::new(config, &id);
        let result = sentry_api::resolve_issue(Arc::clone(&resolver), request).await;
        let resolution = Resolution::from_result(id, result);
        resolution.report(reporter);
        if resolution.is_resolved() {
            resolved += 1;
        } else {
            failed += 1;
        }
    }
    tracing::debug!(resolved, failed, "run completed");
    Ok(RunStatus::Completed { resolved, failed })
}
