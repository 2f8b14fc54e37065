//! CLI entry point for the Sentry issue resolver.

mod actions;

use anyhow::{Context, Result};
use clap::Parser;
use rsi_core::sentry_api::CurlResolver;
use rsi_core::{event, run, RunStatus};
use std::sync::Arc;

pub use actions::ActionsHost;

/// Resolve Sentry issues linked from the triggering GitHub issue.
///
/// Inputs come from the Actions runtime (`INPUT_TOKEN`, `INPUT_ORG`) and the
/// issue text from the event file at `GITHUB_EVENT_PATH`.
#[derive(Debug, Parser)]
#[command(name = "rsi", version)]
#[command(about = "Resolve Sentry issues linked from a GitHub issue", long_about = None)]
pub struct Cli {}

impl Cli {
    /// Parses arguments, runs once, and returns the process exit code.
    pub async fn run_from_args() -> Result<i32> {
        let _cli = Cli::parse();
        let host = ActionsHost::from_env();
        let status = run_once(&host).await?;
        tracing::debug!(?status, "run finished");
        Ok(host.exit_code())
    }
}

/// Loads the event named by the host and runs the pipeline against the live API.
pub async fn run_once<W>(host: &ActionsHost<W>) -> Result<RunStatus>
where
    W: std::io::Write + Send,
{
    let payload = event::load_event(host.event_path().as_deref()).context("load triggering event")?;
    Ok(run(host, &payload, Arc::new(CurlResolver), host).await)
}

#[cfg(test)]
mod tests;
