//! Alpha Vantage API client implementation.

use crate::{
    Result,
    config::ClientConfig,
    error::AvError,
    types::{AnnualReports, Function, GlobalQuoteEnvelope, MonthlySeriesEnvelope, ProviderNotice},
};
use greenblatt_traits::{BalanceSheetRecord, IncomeStatementRecord, MonthlySeries, PriceQuote};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Alpha Vantage API client.
///
/// Every request carries the configured timeout, so a hung upstream call
/// fails with [`AvError::Request`] instead of blocking the caller.
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    client: Client,
    config: ClientConfig,
}

impl AlphaVantageClient {
    /// Create a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Create a client from `ALPHAVANTAGE_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Make a query request and parse the JSON response.
    async fn get<T: DeserializeOwned>(&self, function: Function, symbol: &str) -> Result<T> {
        let symbol = symbol.trim().to_uppercase();
        debug!(function = function.as_str(), %symbol, "querying alpha vantage");

        let response = self
            .client
            .get(self.config.query_url())
            .query(&[
                ("function", function.as_str()),
                ("symbol", symbol.as_str()),
                ("apikey", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AvError::Request(e.without_url()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!(function = function.as_str(), %symbol, "rate limited");
            return Err(AvError::RateLimitExceeded);
        }
        if !status.is_success() {
            warn!(function = function.as_str(), %symbol, status = status.as_u16(), "request failed");
            return Err(AvError::Status {
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(|e| AvError::Request(e.without_url()))?;

        // Errors and throttling notices arrive with status 200
        if let Some(message) = serde_json::from_str::<ProviderNotice>(&text)
            .ok()
            .and_then(ProviderNotice::into_message)
        {
            warn!(function = function.as_str(), %symbol, %message, "provider notice");
            return Err(AvError::Api(message));
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Most recent annual balance sheet.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no annual report exists.
    pub async fn balance_sheet(&self, symbol: &str) -> Result<BalanceSheetRecord> {
        let reports: AnnualReports<BalanceSheetRecord> =
            self.get(Function::BalanceSheet, symbol).await?;
        reports
            .into_latest()
            .ok_or_else(|| AvError::NoData(symbol.to_uppercase()))
    }

    /// Most recent annual income statement.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no annual report exists.
    pub async fn income_statement(&self, symbol: &str) -> Result<IncomeStatementRecord> {
        let reports: AnnualReports<IncomeStatementRecord> =
            self.get(Function::IncomeStatement, symbol).await?;
        reports
            .into_latest()
            .ok_or_else(|| AvError::NoData(symbol.to_uppercase()))
    }

    /// Latest quote.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the symbol is unknown.
    pub async fn quote(&self, symbol: &str) -> Result<PriceQuote> {
        let envelope: GlobalQuoteEnvelope = self.get(Function::GlobalQuote, symbol).await?;
        envelope
            .quote
            .filter(|q| !q.is_empty())
            .ok_or_else(|| AvError::NoData(symbol.to_uppercase()))
    }

    /// Monthly open/close history, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the series is missing.
    pub async fn monthly_series(&self, symbol: &str) -> Result<MonthlySeries> {
        let envelope: MonthlySeriesEnvelope =
            self.get(Function::TimeSeriesMonthly, symbol).await?;
        envelope
            .series
            .ok_or_else(|| AvError::NoData(symbol.to_uppercase()))
    }
}
