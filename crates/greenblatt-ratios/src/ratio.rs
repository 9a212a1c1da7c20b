//! Outcome of a percentage ratio.

use serde::{Serialize, Serializer};
use std::fmt;

/// Why a ratio has no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Undefined {
    /// The denominator came out as exactly zero.
    ZeroDenominator,
    /// The quotient overflowed to infinity or NaN.
    NonFinite,
}

impl Undefined {
    /// Short human-readable reason.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::ZeroDenominator => "zero denominator",
            Self::NonFinite => "non-finite result",
        }
    }
}

/// A ratio in percent, or an explicit undefined outcome.
///
/// Serializes as a number, or `null` when undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
    /// Computed value in percent (8.5 means 8.5%).
    Value(f64),
    /// The inputs do not admit a ratio.
    Undefined(Undefined),
}

impl Ratio {
    /// `numerator / denominator * 100`, or undefined when the denominator is
    /// zero or the result is not finite.
    #[must_use]
    pub fn percent(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            return Self::Undefined(Undefined::ZeroDenominator);
        }
        let value = numerator / denominator * 100.0;
        if value.is_finite() {
            Self::Value(value)
        } else {
            Self::Undefined(Undefined::NonFinite)
        }
    }

    /// The value in percent, if defined.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Undefined(_) => None,
        }
    }

    /// Whether the ratio could not be computed.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined(_))
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v:.2}%"),
            Self::Undefined(why) => write!(f, "undefined ({})", why.reason()),
        }
    }
}

impl Serialize for Ratio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_f64(*v),
            Self::Undefined(_) => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_percent() {
        let ratio = Ratio::percent(50.0, 250.0);
        assert_relative_eq!(ratio.value().unwrap(), 20.0);
        assert!(!ratio.is_undefined());
    }

    #[test]
    fn test_zero_denominator_is_undefined() {
        assert_eq!(
            Ratio::percent(100.0, 0.0),
            Ratio::Undefined(Undefined::ZeroDenominator)
        );
        assert_eq!(
            Ratio::percent(0.0, -0.0),
            Ratio::Undefined(Undefined::ZeroDenominator)
        );
    }

    #[test]
    fn test_overflow_is_undefined() {
        assert_eq!(
            Ratio::percent(f64::MAX, f64::MIN_POSITIVE),
            Ratio::Undefined(Undefined::NonFinite)
        );
    }

    #[test]
    fn test_display_and_json() {
        assert_eq!(Ratio::Value(8.5).to_string(), "8.50%");
        assert_eq!(
            Ratio::Undefined(Undefined::ZeroDenominator).to_string(),
            "undefined (zero denominator)"
        );
        assert_eq!(serde_json::to_string(&Ratio::Value(8.5)).unwrap(), "8.5");
        assert_eq!(
            serde_json::to_string(&Ratio::Undefined(Undefined::NonFinite)).unwrap(),
            "null"
        );
    }
}
