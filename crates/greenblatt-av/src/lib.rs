//! Alpha Vantage API client for greenblatt.
//!
//! This crate fetches the latest annual statements and price data from the
//! [Alpha Vantage](https://www.alphavantage.co/) query API and implements
//! [`StatementSource`](greenblatt_traits::StatementSource) on top of it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use greenblatt_av::{AlphaVantageClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AlphaVantageClient::new(ClientConfig::from_env()?)?;
//!
//!     // Most recent annual balance sheet
//!     let balance = client.balance_sheet("IBM").await?;
//!
//!     // Current price
//!     let quote = client.quote("IBM").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `ALPHAVANTAGE_KEY` in your environment or `.env` file:
//!
//! ```bash
//! ALPHAVANTAGE_KEY=your_api_key_here
//! # optional
//! ALPHAVANTAGE_TIMEOUT_SECS=10
//! ALPHAVANTAGE_BASE_URL=https://www.alphavantage.co
//! ```

mod client;
pub mod config;
mod error;
mod source;
mod types;

pub use client::AlphaVantageClient;
pub use config::ClientConfig;
pub use error::AvError;
pub use types::{AnnualReports, Function, GlobalQuoteEnvelope, MonthlySeriesEnvelope};

/// Result type for Alpha Vantage operations.
pub type Result<T> = std::result::Result<T, AvError>;
