#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/greenblatt/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # greenblatt
//!
//! Umbrella crate re-exporting the greenblatt sub-crates, plus the
//! ticker-level [`Analyzer`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use greenblatt::Analyzer;
//!
//! #[tokio::main]
//! async fn main() -> greenblatt::Result<()> {
//!     let analyzer = Analyzer::from_env()?;
//!
//!     let ey = analyzer.earnings_yield("IBM").await?;
//!     let rotc = analyzer.return_on_tangible_capital("IBM").await?;
//!
//!     println!("earnings yield: {ey}, return on tangible capital: {rotc}");
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Records, errors and the [`StatementSource`] trait
//! - [`ratios`] - The ratio engine (extractors and formulas)
//! - [`av`] - Alpha Vantage client

/// Version information for the greenblatt crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod analyzer;

pub use analyzer::{Analyzer, Snapshot};

// ============================================================================
// Core Types
// ============================================================================

/// Records, errors and the data-source trait.
pub mod traits {
    pub use greenblatt_traits::*;
}

pub use greenblatt_traits::{
    BalanceSheetRecord, GreenblattError, IncomeStatementRecord, MonthlyBar, MonthlySeries,
    PriceQuote, Result, StatementSource,
};

// ============================================================================
// Ratio Engine
// ============================================================================

/// Ratio engine.
///
/// ## Earnings Yield
///
/// ```text
/// EY = EBIT / (price * shares + short debt + long debt - cash) * 100
/// ```
///
/// ## Return on Tangible Capital
///
/// ```text
/// ROTC = EBIT / ((current assets - current liabilities)
///              + (non-current assets - goodwill - other intangibles)) * 100
/// ```
///
/// Both come back as a [`Ratio`]; a zero denominator is
/// [`Ratio::Undefined`], never an infinity.
pub mod ratios {
    pub use greenblatt_ratios::*;
}

pub use greenblatt_ratios::{EarningsYield, Ratio, ReturnOnTangibleCapital, Undefined};

// ============================================================================
// Data Providers
// ============================================================================

/// Alpha Vantage API client.
///
/// ## Setup
///
/// 1. Get a free API key at <https://www.alphavantage.co/support/#api-key>
/// 2. Set the `ALPHAVANTAGE_KEY` environment variable or add to `.env` file
pub mod av {
    pub use greenblatt_av::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use greenblatt::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Analyzer, Snapshot};
    pub use crate::{EarningsYield, Ratio, ReturnOnTangibleCapital};
    pub use crate::{GreenblattError, Result, StatementSource};
}
