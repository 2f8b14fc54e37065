//! Resolve Sentry issues referenced from a GitHub issue body.
//!
//! One run: validate the inputs, pull `https://<org>.sentry.io/issues/<id>`
//! links out of the issue text, and mark each issue resolved through the
//! Sentry API, one request at a time.

pub mod config;
pub mod event;
pub mod links;
pub mod logging;
pub mod report;
pub mod run;
pub mod sentry_api;

pub use config::{InputSource, ResolverConfig};
pub use event::{load_event, EventPayload};
pub use report::Reporter;
pub use run::{run, RunStatus};
