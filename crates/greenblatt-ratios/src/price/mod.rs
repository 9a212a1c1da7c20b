//! Price utilities over monthly history.

mod average;

pub use average::{AVERAGING_WINDOW, average_yearly_price, average_yearly_price_on};
