#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/greenblatt/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core definitions shared by the greenblatt crates.

/// The version of the greenblatt-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod records;
pub mod reported;
pub mod source;

pub use error::{GreenblattError, Result};
pub use records::{BalanceSheetRecord, IncomeStatementRecord, MonthlyBar, MonthlySeries, PriceQuote};
pub use source::StatementSource;
