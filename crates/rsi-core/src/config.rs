use std::fmt;
use thiserror::Error;

/// Base URL of the Sentry web API.
pub const SENTRY_API_BASE: &str = "https://sentry.io";

/// Input carrying the Sentry auth token.
pub const TOKEN_INPUT: &str = "token";
/// Input carrying the Sentry organization slug.
pub const ORG_INPUT: &str = "org";

/// Named string inputs supplied by the host (e.g. GitHub Actions `with:` values).
pub trait InputSource {
    /// Returns the raw value of `name`, or `None` if the host has nothing for it.
    fn input(&self, name: &str) -> Option<String>;
}

/// Run configuration failures. All of them abort before any network activity.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Sentry token is not set as a secret.")]
    MissingToken,
    #[error("Sentry organization name is not set")]
    MissingOrganization,
    /// The organization name produced a link pattern that does not compile.
    #[error("{0}")]
    InvalidLinkPattern(#[from] regex::Error),
}

/// Validated, immutable configuration for one run.
#[derive(Clone)]
pub struct ResolverConfig {
    credential: String,
    organization: String,
    api_base: String,
}

impl ResolverConfig {
    /// Validates the two required inputs. The token is checked before the organization.
    /// Empty values count as missing; present values are kept as given.
    pub fn new(credential: Option<String>, organization: Option<String>) -> Result<Self, ConfigError> {
        let credential = credential
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingToken)?;
        let organization = organization
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingOrganization)?;
        Ok(Self {
            credential,
            organization,
            api_base: SENTRY_API_BASE.to_string(),
        })
    }

    /// Reads `token` then `org` from the host and validates them.
    pub fn from_inputs(source: &dyn InputSource) -> Result<Self, ConfigError> {
        Self::new(source.input(TOKEN_INPUT), source.input(ORG_INPUT))
    }

    /// Points API calls at another base URL (local test servers).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl fmt::Debug for ResolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverConfig")
            .field("credential", &"<redacted>")
            .field("organization", &self.organization)
            .field("api_base", &self.api_base)
            .finish()
    }
}
