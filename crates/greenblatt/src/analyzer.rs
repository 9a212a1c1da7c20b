//! Ticker-level entry points.
//!
//! An [`Analyzer`] fetches what a ratio needs from its
//! [`StatementSource`], concurrently, and hands the records to the ratio
//! engine. The first failed fetch aborts the computation; nothing is
//! computed from a partial set of records.

use chrono::{Local, NaiveDate};
use greenblatt_av::AlphaVantageClient;
use greenblatt_ratios::{
    EarningsYield, Ratio, ReturnOnTangibleCapital, extract,
    price::{average_yearly_price, average_yearly_price_on},
};
use greenblatt_traits::{Result, StatementSource};
use serde::Serialize;
use tracing::{debug, instrument};

/// Both ratios for one ticker, computed from a single fetch of each record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Upper-cased ticker symbol.
    pub symbol: String,
    /// Fiscal year end of the balance sheet used.
    pub fiscal_date_ending: Option<NaiveDate>,
    /// Current price, zero if the quote carried none.
    pub price: f64,
    /// Earnings yield and its components.
    pub earnings_yield: EarningsYield,
    /// Return on tangible capital and its components.
    pub return_on_tangible_capital: ReturnOnTangibleCapital,
}

/// Computes ratios for a ticker using a [`StatementSource`].
#[derive(Debug, Clone)]
pub struct Analyzer<S> {
    source: S,
}

impl Analyzer<AlphaVantageClient> {
    /// Analyzer backed by Alpha Vantage, configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`GreenblattError::Config`](crate::GreenblattError::Config)
    /// if `ALPHAVANTAGE_KEY` is missing.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(AlphaVantageClient::from_env()?))
    }
}

impl<S: StatementSource> Analyzer<S> {
    /// Create an analyzer over `source`.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying data source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Earnings yield in percent.
    ///
    /// # Errors
    ///
    /// Returns the first upstream error among the balance-sheet,
    /// income-statement and quote fetches.
    pub async fn earnings_yield(&self, ticker: &str) -> Result<Ratio> {
        Ok(self.earnings_yield_breakdown(ticker).await?.ratio)
    }

    /// Earnings yield with its intermediate figures.
    ///
    /// # Errors
    ///
    /// See [`Analyzer::earnings_yield`].
    #[instrument(skip(self))]
    pub async fn earnings_yield_breakdown(&self, ticker: &str) -> Result<EarningsYield> {
        let (balance, income, quote) = tokio::try_join!(
            self.source.balance_sheet(ticker),
            self.source.income_statement(ticker),
            self.source.quote(ticker),
        )?;

        let ey = EarningsYield::compute(&balance, &income, extract::current_price(&quote));
        debug!(enterprise_value = ey.enterprise_value, ratio = %ey.ratio, "earnings yield");
        Ok(ey)
    }

    /// Return on tangible capital in percent.
    ///
    /// # Errors
    ///
    /// Returns the first upstream error among the balance-sheet and
    /// income-statement fetches.
    pub async fn return_on_tangible_capital(&self, ticker: &str) -> Result<Ratio> {
        Ok(self.return_on_tangible_capital_breakdown(ticker).await?.ratio)
    }

    /// Return on tangible capital with its components.
    ///
    /// # Errors
    ///
    /// See [`Analyzer::return_on_tangible_capital`].
    #[instrument(skip(self))]
    pub async fn return_on_tangible_capital_breakdown(
        &self,
        ticker: &str,
    ) -> Result<ReturnOnTangibleCapital> {
        let (balance, income) = tokio::try_join!(
            self.source.balance_sheet(ticker),
            self.source.income_statement(ticker),
        )?;

        let rotc = ReturnOnTangibleCapital::compute(&balance, &income);
        debug!(tangible_capital = rotc.tangible_capital, ratio = %rotc.ratio, "return on tangible capital");
        Ok(rotc)
    }

    /// Both ratios from one fetch of each record.
    ///
    /// # Errors
    ///
    /// See [`Analyzer::earnings_yield`].
    #[instrument(skip(self))]
    pub async fn snapshot(&self, ticker: &str) -> Result<Snapshot> {
        let (balance, income, quote) = tokio::try_join!(
            self.source.balance_sheet(ticker),
            self.source.income_statement(ticker),
            self.source.quote(ticker),
        )?;

        let price = extract::current_price(&quote);
        Ok(Snapshot {
            symbol: ticker.trim().to_uppercase(),
            fiscal_date_ending: balance.fiscal_date_ending,
            price,
            earnings_yield: EarningsYield::compute(&balance, &income, price),
            return_on_tangible_capital: ReturnOnTangibleCapital::compute(&balance, &income),
        })
    }

    /// Average yearly price with the window offset taken from the current
    /// local month.
    ///
    /// # Errors
    ///
    /// Returns upstream errors from the monthly-series fetch, or
    /// [`GreenblattError::InsufficientData`](crate::GreenblattError::InsufficientData)
    /// when the series is too short.
    pub async fn average_yearly_price(&self, ticker: &str) -> Result<f64> {
        self.average_yearly_price_as_of(ticker, Local::now().date_naive())
            .await
    }

    /// Average yearly price with the window offset taken from `date`'s month.
    ///
    /// # Errors
    ///
    /// See [`Analyzer::average_yearly_price`].
    #[instrument(skip(self))]
    pub async fn average_yearly_price_as_of(&self, ticker: &str, date: NaiveDate) -> Result<f64> {
        let series = self.source.monthly_series(ticker).await?;
        debug!(months = series.len(), "monthly series");
        average_yearly_price_on(&series, date)
    }

    /// Average yearly price with an explicit month offset (1 = January).
    ///
    /// # Errors
    ///
    /// See [`Analyzer::average_yearly_price`].
    #[instrument(skip(self))]
    pub async fn average_yearly_price_for_month(&self, ticker: &str, month: u32) -> Result<f64> {
        let series = self.source.monthly_series(ticker).await?;
        debug!(months = series.len(), "monthly series");
        average_yearly_price(&series, month)
    }
}
