//! Registry of the ratios this crate computes.

use serde::{Deserialize, Serialize};

/// Ratio category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatioCategory {
    /// Earnings relative to price
    Value,
    /// Profitability relative to capital employed
    Quality,
    /// Price history utilities
    Price,
}

impl RatioCategory {
    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Value => "Valuation metrics comparing earnings to enterprise value",
            Self::Quality => "Operating return on tangible capital",
            Self::Price => "Price history utilities",
        }
    }
}

/// Identifier of a computable ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioKind {
    /// EBIT over enterprise value.
    EarningsYield,
    /// EBIT over net working capital plus net fixed assets.
    ReturnOnTangibleCapital,
    /// Mean of monthly open/close midpoints over a year.
    AverageYearlyPrice,
}

impl RatioKind {
    /// All kinds, in display order.
    pub const ALL: [Self; 3] = [
        Self::EarningsYield,
        Self::ReturnOnTangibleCapital,
        Self::AverageYearlyPrice,
    ];

    /// Metadata for this kind.
    #[must_use]
    pub const fn info(&self) -> RatioInfo {
        match self {
            Self::EarningsYield => RatioInfo {
                kind: *self,
                name: "earnings_yield",
                alias: "ey",
                category: RatioCategory::Value,
                description: "Operating earnings relative to enterprise value",
                formula: "ebit / (price * shares + debt - cash) * 100",
            },
            Self::ReturnOnTangibleCapital => RatioInfo {
                kind: *self,
                name: "return_on_tangible_capital",
                alias: "rotc",
                category: RatioCategory::Quality,
                description: "Operating earnings relative to tangible capital employed",
                formula: "ebit / (net working capital + net fixed assets) * 100",
            },
            Self::AverageYearlyPrice => RatioInfo {
                kind: *self,
                name: "average_yearly_price",
                alias: "avg_price",
                category: RatioCategory::Price,
                description: "Average of monthly open/close midpoints over twelve months",
                formula: "mean((open + close) / 2) over 12 months",
            },
        }
    }

    /// Look up a kind by name or alias, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|kind| {
            let info = kind.info();
            info.name == name || info.alias == name
        })
    }
}

/// Metadata about a ratio.
#[derive(Debug, Clone, Serialize)]
pub struct RatioInfo {
    /// Which ratio this describes
    pub kind: RatioKind,

    /// Unique identifier for the ratio
    pub name: &'static str,

    /// Short alias accepted on the command line
    pub alias: &'static str,

    /// Category classification
    pub category: RatioCategory,

    /// Human-readable description
    pub description: &'static str,

    /// How the ratio is computed
    pub formula: &'static str,
}

/// Get information about all available ratios.
#[must_use]
pub fn available_ratios() -> Vec<RatioInfo> {
    RatioKind::ALL.iter().map(RatioKind::info).collect()
}

/// Get ratios in a specific category.
#[must_use]
pub fn ratios_by_category(category: RatioCategory) -> Vec<RatioInfo> {
    available_ratios()
        .into_iter()
        .filter(|r| r.category == category)
        .collect()
}
