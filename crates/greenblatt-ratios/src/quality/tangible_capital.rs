//! Return on tangible capital: EBIT relative to the capital actually needed
//! to run the business.

use crate::{Ratio, extract};
use greenblatt_traits::{BalanceSheetRecord, IncomeStatementRecord};
use serde::Serialize;

/// Return on tangible capital with its components.
///
/// ```text
/// net working capital = current assets - current liabilities
/// net fixed assets    = non-current assets - (goodwill + other intangibles)
/// return              = EBIT / (net working capital + net fixed assets) * 100
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnOnTangibleCapital {
    /// Earnings before interest and taxes.
    pub ebit: f64,
    /// Current assets less current liabilities.
    pub net_working_capital: f64,
    /// Non-current assets less intangibles.
    pub net_fixed_assets: f64,
    /// Net working capital plus net fixed assets.
    pub tangible_capital: f64,
    /// EBIT over tangible capital, in percent.
    #[serde(rename = "returnOnTangibleCapital")]
    pub ratio: Ratio,
}

impl ReturnOnTangibleCapital {
    /// Compute from the latest annual statements.
    #[must_use]
    pub fn compute(balance: &BalanceSheetRecord, income: &IncomeStatementRecord) -> Self {
        let ebit = extract::ebit(income);
        let net_working_capital = extract::net_working_capital(balance);
        let net_fixed_assets = extract::net_fixed_assets(balance);
        let tangible_capital = net_working_capital + net_fixed_assets;

        Self {
            ebit,
            net_working_capital,
            net_fixed_assets,
            tangible_capital,
            ratio: Ratio::percent(ebit, tangible_capital),
        }
    }
}

/// Return on tangible capital in percent.
#[must_use]
pub fn return_on_tangible_capital(
    balance: &BalanceSheetRecord,
    income: &IncomeStatementRecord,
) -> Ratio {
    ReturnOnTangibleCapital::compute(balance, income).ratio
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Undefined;
    use approx::assert_relative_eq;

    #[test]
    fn test_worked_example() {
        let balance = BalanceSheetRecord {
            total_current_assets: Some(200.0),
            total_current_liabilities: Some(150.0),
            total_non_current_assets: Some(300.0),
            goodwill: Some(100.0),
            intangible_assets_excluding_goodwill: Some(0.0),
            ..Default::default()
        };
        let income = IncomeStatementRecord {
            ebit: Some(50.0),
            ..Default::default()
        };

        let rotc = ReturnOnTangibleCapital::compute(&balance, &income);
        assert_relative_eq!(rotc.net_working_capital, 50.0);
        assert_relative_eq!(rotc.net_fixed_assets, 200.0);
        assert_relative_eq!(rotc.tangible_capital, 250.0);
        assert_relative_eq!(rotc.ratio.value().unwrap(), 20.0);
    }

    #[test]
    fn test_unreported_balance_sheet_is_undefined() {
        let income = IncomeStatementRecord {
            ebit: Some(50.0),
            ..Default::default()
        };
        let ratio = return_on_tangible_capital(&BalanceSheetRecord::default(), &income);
        assert_eq!(ratio, Ratio::Undefined(Undefined::ZeroDenominator));
    }

    #[test]
    fn test_capital_cancelling_out_is_undefined() {
        // working capital deficit exactly offsets fixed assets
        let balance = BalanceSheetRecord {
            total_current_assets: Some(100.0),
            total_current_liabilities: Some(300.0),
            total_non_current_assets: Some(250.0),
            goodwill: Some(50.0),
            ..Default::default()
        };
        let income = IncomeStatementRecord {
            ebit: Some(10.0),
            ..Default::default()
        };
        assert!(return_on_tangible_capital(&balance, &income).is_undefined());
    }
}
