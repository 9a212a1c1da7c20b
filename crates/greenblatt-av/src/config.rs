//! Client configuration.

use crate::{Result, error::AvError};
use std::{env, fmt, time::Duration};

/// Default Alpha Vantage host.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "ALPHAVANTAGE_KEY";

/// Environment variable overriding the host.
pub const BASE_URL_VAR: &str = "ALPHAVANTAGE_BASE_URL";

/// Environment variable overriding the timeout, in seconds.
pub const TIMEOUT_VAR: &str = "ALPHAVANTAGE_TIMEOUT_SECS";

/// Settings for [`AlphaVantageClient`](crate::AlphaVantageClient).
#[derive(Clone)]
pub struct ClientConfig {
    /// API key sent with every request.
    pub api_key: String,
    /// Scheme and host, without the `/query` path.
    pub base_url: String,
    /// Upper bound on a single request, connect included.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Configuration with default host and timeout.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the host.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read configuration from the environment.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if `ALPHAVANTAGE_KEY` is not set or the timeout is
    /// not a positive integer.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_key = env::var(API_KEY_VAR).map_err(|_| AvError::MissingApiKey)?;
        Self::from_parts(
            api_key,
            env::var(BASE_URL_VAR).ok(),
            env::var(TIMEOUT_VAR).ok(),
        )
    }

    fn from_parts(
        api_key: String,
        base_url: Option<String>,
        timeout_secs: Option<String>,
    ) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(AvError::MissingApiKey);
        }

        let mut config = Self::new(api_key);
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(url);
        }
        if let Some(secs) = timeout_secs {
            let secs: u64 = secs
                .trim()
                .parse()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| AvError::InvalidConfig(format!("{TIMEOUT_VAR}={secs}")))?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Full URL of the query endpoint.
    #[must_use]
    pub fn query_url(&self) -> String {
        format!("{}/query", self.base_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
