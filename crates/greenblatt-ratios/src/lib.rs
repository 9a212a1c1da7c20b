//! Ratio engine for greenblatt.
//!
//! Pure functions over already-fetched statement records:
//! - Value: earnings yield (EBIT over enterprise value)
//! - Quality: return on tangible capital (EBIT over net working capital plus
//!   net fixed assets)
//! - Price: average yearly price from a monthly series
//!
//! Ratios are expressed in percent and come back as a [`Ratio`], which keeps
//! a degenerate denominator apart from a computed value.
//!
//! # Example
//!
//! ```ignore
//! use greenblatt_ratios::value::EarningsYield;
//!
//! let ey = EarningsYield::compute(&balance, &income, 187.24);
//! println!("{}", ey.ratio);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod extract;
pub mod price;
pub mod quality;
pub mod ratio;
pub mod registry;
pub mod value;

pub use quality::{ReturnOnTangibleCapital, return_on_tangible_capital};
pub use ratio::{Ratio, Undefined};
pub use registry::{RatioCategory, RatioInfo, RatioKind};
pub use value::{EarningsYield, earnings_yield};
