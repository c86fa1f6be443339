//! Configuration for the geocoding client
//!
//! Values come from `ferias.toml` (see [`ferias_core::config`]) and can be
//! overridden through environment variables.

use ferias_core::config::GeocodingConfig;
use ferias_core::rate_limit::RateLimitConfig;
use ferias_core::{Error, ErrorCode, Result};
use reqwest::Url;
use std::env;
use std::time::Duration;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Nominatim-compatible service (without `/search`)
    pub base_url: String,
    /// User-Agent header; the public Nominatim instance rejects anonymous clients
    pub user_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Outbound request rate
    pub rate_limit: RateLimitConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_schema(&GeocodingConfig::default())
    }
}

impl ClientConfig {
    /// Build from the `[geocoding]` section of the config file
    #[must_use]
    pub fn from_schema(schema: &GeocodingConfig) -> Self {
        Self {
            base_url: schema.base_url.clone(),
            user_agent: schema.user_agent.clone(),
            timeout: Duration::from_secs(schema.timeout_secs),
            rate_limit: RateLimitConfig::per_second(schema.requests_per_second),
        }
    }

    /// Apply environment overrides on top of the current values
    ///
    /// Reads the following environment variables:
    /// - `FERIAS_GEOCODER_URL`: Base URL of the geocoding service
    /// - `FERIAS_GEOCODER_TIMEOUT_SECS`: Request timeout in seconds
    /// - `FERIAS_USER_AGENT`: User-Agent header
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = env::var("FERIAS_GEOCODER_URL") {
            self.base_url = url;
        }

        if let Some(timeout) = env::var("FERIAS_GEOCODER_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.timeout = Duration::from_secs(timeout);
        }

        if let Ok(agent) = env::var("FERIAS_USER_AGENT") {
            self.user_agent = agent;
        }

        self
    }

    /// Defaults plus environment overrides
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder-style method to set the User-Agent
    #[must_use]
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Builder-style method to set rate limit config
    #[must_use]
    pub fn with_rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// URL of the search endpoint
    pub fn search_url(&self) -> Result<Url> {
        let base = Url::parse(self.base_url.trim_end_matches('/')).map_err(|e| {
            Error::new(ErrorCode::ConfigValidationError, format!("Invalid geocoder URL: {e}"))
        })?;
        base.join(&format!("{}/search", base.path().trim_end_matches('/')))
            .map_err(|e| Error::new(ErrorCode::ConfigValidationError, format!("Invalid geocoder URL: {e}")))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(invalid("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(invalid("base_url must start with http:// or https://"));
        }

        if self.user_agent.trim().is_empty() {
            return Err(invalid("user_agent cannot be empty"));
        }

        if self.timeout.is_zero() {
            return Err(invalid("timeout cannot be zero"));
        }

        self.search_url().map(|_| ())
    }
}

fn invalid(message: &str) -> Error {
    Error::new(ErrorCode::ConfigValidationError, message)
        .with_suggestion("Check the [geocoding] section of ferias.toml")
}
