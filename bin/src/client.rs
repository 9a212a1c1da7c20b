//! Client construction utilities for the greenblatt CLI.

use greenblatt::av::{AlphaVantageClient, ClientConfig};
use greenblatt::{Analyzer, GreenblattError};
use std::time::Duration;

/// Build an Alpha Vantage backed analyzer from the environment, with an
/// optional timeout override in seconds.
pub(crate) fn build_analyzer(
    timeout_secs: Option<u64>,
) -> Result<Analyzer<AlphaVantageClient>, GreenblattError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(secs) = timeout_secs {
        config = config.with_timeout(timeout_from_secs(secs)?);
    }
    tracing::debug!(?config, "building client");
    Ok(Analyzer::new(AlphaVantageClient::new(config)?))
}

fn timeout_from_secs(secs: u64) -> Result<Duration, GreenblattError> {
    if secs == 0 {
        return Err(GreenblattError::Config(
            "timeout must be at least one second".to_string(),
        ));
    }
    Ok(Duration::from_secs(secs))
}

/// Validate and upper-case a ticker symbol.
pub(crate) fn parse_ticker(raw: &str) -> Result<String, String> {
    let ticker = raw.trim();
    if ticker.is_empty() {
        return Err("ticker must not be empty".to_string());
    }
    if !ticker
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
    {
        return Err(format!("invalid ticker symbol: {ticker}"));
    }
    Ok(ticker.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ticker() {
        assert_eq!(parse_ticker(" ibm ").unwrap(), "IBM");
        assert_eq!(parse_ticker("brk.b").unwrap(), "BRK.B");
        assert_eq!(parse_ticker("rds-a").unwrap(), "RDS-A");
    }

    #[test]
    fn test_parse_ticker_invalid() {
        assert!(parse_ticker("").is_err());
        assert!(parse_ticker("IBM&apikey=x").is_err());
        assert!(parse_ticker("a b").is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(matches!(
            timeout_from_secs(0),
            Err(GreenblattError::Config(_))
        ));
        assert_eq!(timeout_from_secs(7).unwrap(), Duration::from_secs(7));
    }
}
