//! Error types for the greenblatt crates.
//!
//! Missing line items are never errors; they are recovered by the extractors.
//! What remains is upstream failure, malformed provider data, and short
//! price histories.

use thiserror::Error;

/// The main error type for greenblatt operations.
#[derive(Debug, Error)]
pub enum GreenblattError {
    /// The provider answered with a non-success HTTP status.
    #[error("Upstream request failed with status code {status}")]
    UpstreamStatus {
        /// HTTP status code returned by the provider.
        status: u16,
    },

    /// The provider answered successfully but reported an error in the body.
    #[error("Upstream provider error: {0}")]
    Provider(String),

    /// The request never produced a response (connect failure, timeout).
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    /// The provider had nothing for the requested symbol.
    #[error("No data available for {0}")]
    NoData(String),

    /// A reported value could not be interpreted.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Not enough history for the requested computation.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Client configuration is missing or unusable.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GreenblattError {
    /// Whether this error originated at the data provider rather than in
    /// local computation.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::UpstreamStatus { .. } | Self::Provider(_) | Self::DataFetch(_) | Self::NoData(_)
        )
    }
}

/// A specialized Result type for greenblatt operations.
pub type Result<T> = std::result::Result<T, GreenblattError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GreenblattError::UpstreamStatus { status: 503 };
        assert_eq!(err.to_string(), "Upstream request failed with status code 503");

        let err = GreenblattError::InsufficientData("3 of 12 months".to_string());
        assert_eq!(err.to_string(), "Insufficient data: 3 of 12 months");
    }

    #[test]
    fn test_upstream_classification() {
        assert!(GreenblattError::UpstreamStatus { status: 500 }.is_upstream());
        assert!(GreenblattError::Provider("Invalid API call".into()).is_upstream());
        assert!(GreenblattError::NoData("XYZ".into()).is_upstream());
        assert!(!GreenblattError::InvalidData("abc".into()).is_upstream());
        assert!(!GreenblattError::Config("no key".into()).is_upstream());
    }
}
