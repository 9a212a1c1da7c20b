//! Error types for the Alpha Vantage client.

use greenblatt_traits::GreenblattError;
use thiserror::Error;

/// Errors that can occur when using the Alpha Vantage API.
#[derive(Debug, Error)]
pub enum AvError {
    /// Missing API key.
    #[error("ALPHAVANTAGE_KEY environment variable not set")]
    MissingApiKey,

    /// A configuration value could not be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// HTTP request failed before a response arrived, including timeouts.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// The API answered with a non-success status.
    #[error("Request failed with status code {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Rate limit exceeded.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// The API answered 200 with an error or notice in place of data.
    #[error("Alpha Vantage API error: {0}")]
    Api(String),

    /// No data available.
    #[error("No data available for {0}")]
    NoData(String),
}

impl From<AvError> for GreenblattError {
    fn from(err: AvError) -> Self {
        match err {
            AvError::MissingApiKey | AvError::InvalidConfig(_) => Self::Config(err.to_string()),
            AvError::Request(e) => Self::DataFetch(e.to_string()),
            AvError::Json(e) => Self::InvalidData(e.to_string()),
            AvError::Status { status } => Self::UpstreamStatus { status },
            AvError::RateLimitExceeded => Self::UpstreamStatus { status: 429 },
            AvError::Api(message) => Self::Provider(message),
            AvError::NoData(symbol) => Self::NoData(symbol),
        }
    }
}
