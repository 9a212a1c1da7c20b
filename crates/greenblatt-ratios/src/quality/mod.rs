//! Quality ratios measuring how much operating profit the tangible capital
//! of a business produces.

mod tangible_capital;

pub use tangible_capital::{ReturnOnTangibleCapital, return_on_tangible_capital};
