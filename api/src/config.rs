//! Client configuration module.
//!
//! Handles loading configuration from environment variables with sensible defaults.

use std::time::Duration;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Default Railway GraphQL endpoint.
pub const DEFAULT_API_URL: &str = "https://backboard.railway.com/graphql/v2";

/// Per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `RAILWAY_API_TOKEN` is unset or empty.
    #[error("RAILWAY_API_TOKEN not found in environment variables")]
    MissingToken,

    /// A configured value failed validation.
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// Client configuration.
///
/// Configuration values can be set via environment variables:
/// - `RAILWAY_API_TOKEN`: Bearer token for the Railway API (required)
/// - `RAILWAY_API_URL`: GraphQL endpoint (default: Railway's public endpoint)
/// - `RAILWAY_PROJECT_ID`: Default project ID
/// - `RAILWAY_ENVIRONMENT_ID`: Default environment ID
/// - `RAILWAY_SERVICE_ID`: Default service ID
#[derive(Clone, Validate)]
pub struct Config {
    /// GraphQL endpoint URL.
    #[validate(url)]
    pub api_url: String,
    /// Bearer token.
    #[validate(length(min = 1))]
    pub api_token: String,
    /// Default project ID.
    pub project_id: Option<String>,
    /// Default environment ID.
    pub environment_id: Option<String>,
    /// Default service ID.
    pub service_id: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Config {
    /// Creates a configuration for `api_token` against the default endpoint.
    #[must_use]
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: api_token.into(),
            project_id: None,
            environment_id: None,
            service_id: None,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Overrides the endpoint URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Creates a new configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `RAILWAY_API_TOKEN` is unset or empty
    /// - `RAILWAY_API_URL` is set but is not a valid URL
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates a configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_token = get("RAILWAY_API_TOKEN").ok_or(ConfigError::MissingToken)?;

        let config = Self {
            api_url: get("RAILWAY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_token,
            project_id: get("RAILWAY_PROJECT_ID"),
            environment_id: get("RAILWAY_ENVIRONMENT_ID"),
            service_id: get("RAILWAY_SERVICE_ID"),
            timeout: REQUEST_TIMEOUT,
        };
        config.validate()?;
        Ok(config)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("api_token", &"<redacted>")
            .field("project_id", &self.project_id)
            .field("environment_id", &self.environment_id)
            .field("service_id", &self.service_id)
            .field("timeout", &self.timeout)
            .finish()
    }
}
