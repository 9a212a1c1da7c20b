//! Typed financial-statement records.
//!
//! Each record is a read-only snapshot of one provider response. Line items
//! the company did not report are `None`; turning them into numbers is the
//! job of the ratio engine's extractors. Statement line items the ratios do
//! not read are kept verbatim in `other`.

use crate::reported;
use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Most recent annual balance sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetRecord {
    /// End of the fiscal year this sheet covers.
    #[serde(default, deserialize_with = "reported::date")]
    pub fiscal_date_ending: Option<NaiveDate>,
    /// Currency the figures are reported in.
    #[serde(default, deserialize_with = "reported::text")]
    pub reported_currency: Option<String>,
    /// Common shares outstanding.
    #[serde(default, deserialize_with = "reported::count")]
    pub common_stock_shares_outstanding: Option<u64>,
    /// Short-term debt.
    #[serde(default, deserialize_with = "reported::amount")]
    pub short_term_debt: Option<f64>,
    /// Long-term debt.
    #[serde(default, deserialize_with = "reported::amount")]
    pub long_term_debt: Option<f64>,
    /// Cash and short-term investments.
    #[serde(default, deserialize_with = "reported::amount")]
    pub cash_and_short_term_investments: Option<f64>,
    /// Total current assets.
    #[serde(default, deserialize_with = "reported::amount")]
    pub total_current_assets: Option<f64>,
    /// Total current liabilities.
    #[serde(default, deserialize_with = "reported::amount")]
    pub total_current_liabilities: Option<f64>,
    /// Total non-current assets.
    #[serde(default, deserialize_with = "reported::amount")]
    pub total_non_current_assets: Option<f64>,
    /// Goodwill.
    #[serde(default, deserialize_with = "reported::amount")]
    pub goodwill: Option<f64>,
    /// Intangible assets other than goodwill.
    #[serde(default, deserialize_with = "reported::amount")]
    pub intangible_assets_excluding_goodwill: Option<f64>,
    /// Remaining line items (`totalAssets`, `inventory`, ...) as reported.
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// Most recent annual income statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatementRecord {
    /// End of the fiscal year this statement covers.
    #[serde(default, deserialize_with = "reported::date")]
    pub fiscal_date_ending: Option<NaiveDate>,
    /// Currency the figures are reported in.
    #[serde(default, deserialize_with = "reported::text")]
    pub reported_currency: Option<String>,
    /// Earnings before interest and taxes.
    #[serde(default, deserialize_with = "reported::amount")]
    pub ebit: Option<f64>,
    /// Remaining line items (`totalRevenue`, `netIncome`, ...) as reported.
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// Current quote for a symbol.
///
/// The provider answers unknown symbols with an empty object, so every
/// field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Ticker symbol.
    #[serde(rename = "01. symbol", default)]
    pub symbol: Option<String>,
    /// Last traded price.
    #[serde(rename = "05. price", default, deserialize_with = "reported::amount")]
    pub price: Option<f64>,
    /// Day the price was observed.
    #[serde(
        rename = "07. latest trading day",
        default,
        deserialize_with = "reported::date"
    )]
    pub latest_trading_day: Option<NaiveDate>,
}

impl PriceQuote {
    /// Whether the provider returned an empty quote object.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.symbol.is_none() && self.price.is_none()
    }
}

/// Open and close of one month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBar {
    /// First traded price of the month.
    #[serde(rename = "1. open", deserialize_with = "reported::required_amount")]
    pub open: f64,
    /// Last traded price of the month.
    #[serde(rename = "4. close", deserialize_with = "reported::required_amount")]
    pub close: f64,
}

impl MonthlyBar {
    /// Midpoint of open and close.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.open + self.close) / 2.0
    }
}

/// Monthly price history keyed by month, in the provider's document order
/// (most recent first).
///
/// Decoding keeps the order in which the keys appear; positional access
/// depends on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySeries {
    entries: Vec<(String, MonthlyBar)>,
}

impl MonthlySeries {
    /// Build a series from entries already in provider order.
    #[must_use]
    pub const fn new(entries: Vec<(String, MonthlyBar)>) -> Self {
        Self { entries }
    }

    /// All entries in provider order.
    #[must_use]
    pub fn entries(&self) -> &[(String, MonthlyBar)] {
        &self.entries
    }

    /// Number of months in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the series is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bars only, in provider order.
    pub fn bars(&self) -> impl Iterator<Item = &MonthlyBar> {
        self.entries.iter().map(|(_, bar)| bar)
    }
}

impl Serialize for MonthlySeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, bar) in &self.entries {
            map.serialize_entry(key, bar)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MonthlySeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SeriesVisitor;

        impl<'de> Visitor<'de> for SeriesVisitor {
            type Value = MonthlySeries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of month keys to open/close bars")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, bar)) = map.next_entry::<String, MonthlyBar>()? {
                    entries.push((key, bar));
                }
                Ok(MonthlySeries { entries })
            }
        }

        deserializer.deserialize_map(SeriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_sheet_decoding() {
        let json = r#"{
            "fiscalDateEnding": "2023-12-31",
            "reportedCurrency": "USD",
            "totalAssets": "135241000000",
            "commonStockSharesOutstanding": "915013486",
            "shortTermDebt": "6426000000",
            "longTermDebt": "None",
            "cashAndShortTermInvestments": "13068000000",
            "goodwill": "60178000000"
        }"#;
        let sheet: BalanceSheetRecord = serde_json::from_str(json).unwrap();

        assert_eq!(sheet.fiscal_date_ending, NaiveDate::from_ymd_opt(2023, 12, 31));
        assert_eq!(sheet.reported_currency.as_deref(), Some("USD"));
        assert_eq!(sheet.common_stock_shares_outstanding, Some(915_013_486));
        assert_eq!(sheet.short_term_debt, Some(6_426_000_000.0));
        assert_eq!(sheet.long_term_debt, None);
        assert_eq!(sheet.goodwill, Some(60_178_000_000.0));
        // absent keys
        assert_eq!(sheet.total_current_assets, None);
        assert_eq!(sheet.intangible_assets_excluding_goodwill, None);
        assert_eq!(sheet.other.len(), 1);
    }

    #[test]
    fn test_unmodeled_line_items_survive() {
        let json = r#"{
            "fiscalDateEnding": "2023-12-31",
            "reportedCurrency": "USD",
            "totalAssets": "135241000000",
            "inventory": "None",
            "shortTermDebt": "6426000000"
        }"#;
        let sheet: BalanceSheetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(sheet.other["totalAssets"], "135241000000");
        assert_eq!(sheet.other["inventory"], "None");
        assert!(!sheet.other.contains_key("shortTermDebt"));

        let out = serde_json::to_string(&sheet).unwrap();
        assert!(out.contains(r#""totalAssets":"135241000000""#));
        assert!(out.contains(r#""inventory":"None""#));

        let statement: IncomeStatementRecord = serde_json::from_str(
            r#"{"ebit": "11450000000", "totalRevenue": "61860000000"}"#,
        )
        .unwrap();
        assert_eq!(statement.ebit, Some(11_450_000_000.0));
        let out = serde_json::to_string(&statement).unwrap();
        assert!(out.contains(r#""totalRevenue":"61860000000""#));
    }

    #[test]
    fn test_unreported_currency() {
        let sheet: BalanceSheetRecord =
            serde_json::from_str(r#"{"reportedCurrency": "None"}"#).unwrap();
        assert_eq!(sheet.reported_currency, None);

        let statement: IncomeStatementRecord =
            serde_json::from_str(r#"{"reportedCurrency": "EUR"}"#).unwrap();
        assert_eq!(statement.reported_currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn test_malformed_line_item_fails() {
        let json = r#"{"ebit": "lots"}"#;
        let err = serde_json::from_str::<IncomeStatementRecord>(json).unwrap_err();
        assert!(err.to_string().contains("lots"));
    }

    #[test]
    fn test_empty_quote() {
        let quote: PriceQuote = serde_json::from_str("{}").unwrap();
        assert!(quote.is_empty());

        let quote: PriceQuote = serde_json::from_str(
            r#"{"01. symbol": "IBM", "05. price": "187.2400", "07. latest trading day": "2024-05-03"}"#,
        )
        .unwrap();
        assert!(!quote.is_empty());
        assert_eq!(quote.price, Some(187.24));
    }

    #[test]
    fn test_monthly_series_keeps_document_order() {
        let json = r#"{
            "2024-05-03": {"1. open": "166.5", "2. high": "168.0", "4. close": "165.0"},
            "2024-04-30": {"1. open": "190.0", "4. close": "166.2"},
            "2024-03-28": {"1. open": "185.5", "4. close": "190.9"}
        }"#;
        let series: MonthlySeries = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = series.entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["2024-05-03", "2024-04-30", "2024-03-28"]);
        assert_eq!(series.len(), 3);
        assert!((series.entries()[0].1.midpoint() - 165.75).abs() < 1e-12);

        let rendered = serde_json::to_string(&series).unwrap();
        assert!(rendered.find("2024-05-03").unwrap() < rendered.find("2024-03-28").unwrap());
    }

    #[test]
    fn test_monthly_bar_requires_prices() {
        let json = r#"{"2024-05-03": {"1. open": "None", "4. close": "1.0"}}"#;
        assert!(serde_json::from_str::<MonthlySeries>(json).is_err());
    }
}
