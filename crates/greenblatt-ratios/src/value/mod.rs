//! Value ratios comparing operating earnings to what the market charges for
//! the whole business.

mod earnings_yield;

pub use earnings_yield::{EarningsYield, earnings_yield};
