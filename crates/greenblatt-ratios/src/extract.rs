//! Line-item extractors.
//!
//! Every extractor fails soft: a line item that was not reported counts as
//! zero (0.00 for money, 0 for share counts). Malformed values never get
//! this far; they are rejected when the record is decoded.

use greenblatt_traits::{BalanceSheetRecord, IncomeStatementRecord, PriceQuote};

/// Default for an unreported monetary line item.
pub const MONEY_DEFAULT: f64 = 0.0;

/// Default for an unreported share count.
pub const SHARES_DEFAULT: u64 = 0;

fn money(value: Option<f64>) -> f64 {
    value.unwrap_or(MONEY_DEFAULT)
}

/// Earnings before interest and taxes.
#[must_use]
pub fn ebit(income: &IncomeStatementRecord) -> f64 {
    money(income.ebit)
}

/// Common shares outstanding.
#[must_use]
pub fn shares_outstanding(balance: &BalanceSheetRecord) -> u64 {
    balance
        .common_stock_shares_outstanding
        .unwrap_or(SHARES_DEFAULT)
}

/// Short-term plus long-term debt. Each part defaults independently.
#[must_use]
pub fn total_debt(balance: &BalanceSheetRecord) -> f64 {
    money(balance.short_term_debt) + money(balance.long_term_debt)
}

/// Cash and short-term investments.
#[must_use]
pub fn excess_cash(balance: &BalanceSheetRecord) -> f64 {
    money(balance.cash_and_short_term_investments)
}

/// Total current assets.
#[must_use]
pub fn current_assets(balance: &BalanceSheetRecord) -> f64 {
    money(balance.total_current_assets)
}

/// Total current liabilities.
#[must_use]
pub fn current_liabilities(balance: &BalanceSheetRecord) -> f64 {
    money(balance.total_current_liabilities)
}

/// Total non-current assets.
#[must_use]
pub fn non_current_assets(balance: &BalanceSheetRecord) -> f64 {
    money(balance.total_non_current_assets)
}

/// Goodwill plus other intangible assets. Each part defaults independently.
#[must_use]
pub fn intangibles(balance: &BalanceSheetRecord) -> f64 {
    money(balance.goodwill) + money(balance.intangible_assets_excluding_goodwill)
}

/// Non-current assets less intangibles.
#[must_use]
pub fn net_fixed_assets(balance: &BalanceSheetRecord) -> f64 {
    non_current_assets(balance) - intangibles(balance)
}

/// Current assets less current liabilities.
#[must_use]
pub fn net_working_capital(balance: &BalanceSheetRecord) -> f64 {
    current_assets(balance) - current_liabilities(balance)
}

/// Last traded price.
#[must_use]
pub fn current_price(quote: &PriceQuote) -> f64 {
    money(quote.price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ALL_NONE: &str = r#"{
        "commonStockSharesOutstanding": "None",
        "shortTermDebt": "None",
        "longTermDebt": "None",
        "cashAndShortTermInvestments": "None",
        "totalCurrentAssets": "None",
        "totalCurrentLiabilities": "None",
        "totalNonCurrentAssets": "None",
        "goodwill": "None",
        "intangibleAssetsExcludingGoodwill": "None"
    }"#;

    #[test]
    fn test_unreported_fields_default_to_zero() {
        let balance: BalanceSheetRecord = serde_json::from_str(ALL_NONE).unwrap();
        let income: IncomeStatementRecord = serde_json::from_str(r#"{"ebit": "None"}"#).unwrap();
        let quote: PriceQuote = serde_json::from_str(r#"{"05. price": "None"}"#).unwrap();

        assert_eq!(ebit(&income), 0.0);
        assert_eq!(shares_outstanding(&balance), 0);
        assert_eq!(total_debt(&balance), 0.0);
        assert_eq!(excess_cash(&balance), 0.0);
        assert_eq!(current_assets(&balance), 0.0);
        assert_eq!(current_liabilities(&balance), 0.0);
        assert_eq!(non_current_assets(&balance), 0.0);
        assert_eq!(intangibles(&balance), 0.0);
        assert_eq!(net_fixed_assets(&balance), 0.0);
        assert_eq!(current_price(&quote), 0.0);
    }

    #[test]
    fn test_partial_sums_default_independently() {
        let balance = BalanceSheetRecord {
            short_term_debt: Some(25.0),
            long_term_debt: None,
            goodwill: None,
            intangible_assets_excluding_goodwill: Some(40.0),
            ..Default::default()
        };
        assert_relative_eq!(total_debt(&balance), 25.0);
        assert_relative_eq!(intangibles(&balance), 40.0);
    }

    #[test]
    fn test_derived_items() {
        let balance = BalanceSheetRecord {
            total_current_assets: Some(200.0),
            total_current_liabilities: Some(150.0),
            total_non_current_assets: Some(300.0),
            goodwill: Some(60.0),
            intangible_assets_excluding_goodwill: Some(40.0),
            ..Default::default()
        };
        assert_relative_eq!(net_working_capital(&balance), 50.0);
        assert_relative_eq!(net_fixed_assets(&balance), 200.0);
    }
}
