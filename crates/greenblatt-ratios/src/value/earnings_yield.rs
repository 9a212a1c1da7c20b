//! Earnings yield: EBIT relative to enterprise value.

use crate::{Ratio, extract};
use greenblatt_traits::{BalanceSheetRecord, IncomeStatementRecord};
use serde::Serialize;

/// Earnings yield with the intermediate figures that produced it.
///
/// ```text
/// market cap       = price * shares outstanding
/// enterprise value = market cap + total debt - excess cash
/// earnings yield   = EBIT / enterprise value * 100
/// ```
///
/// A zero enterprise value (for instance when every input was unreported)
/// yields [`Ratio::Undefined`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsYield {
    /// Earnings before interest and taxes.
    pub ebit: f64,
    /// Price times shares outstanding.
    pub market_cap: f64,
    /// Short-term plus long-term debt.
    pub total_debt: f64,
    /// Cash and short-term investments.
    pub excess_cash: f64,
    /// Market cap plus debt less excess cash.
    pub enterprise_value: f64,
    /// EBIT over enterprise value, in percent.
    #[serde(rename = "earningsYield")]
    pub ratio: Ratio,
}

impl EarningsYield {
    /// Compute from the latest annual statements and the current price.
    #[must_use]
    pub fn compute(
        balance: &BalanceSheetRecord,
        income: &IncomeStatementRecord,
        price: f64,
    ) -> Self {
        let ebit = extract::ebit(income);
        let market_cap = price * extract::shares_outstanding(balance) as f64;
        let total_debt = extract::total_debt(balance);
        let excess_cash = extract::excess_cash(balance);
        let enterprise_value = market_cap + total_debt - excess_cash;

        Self {
            ebit,
            market_cap,
            total_debt,
            excess_cash,
            enterprise_value,
            ratio: Ratio::percent(ebit, enterprise_value),
        }
    }
}

/// Earnings yield in percent.
#[must_use]
pub fn earnings_yield(
    balance: &BalanceSheetRecord,
    income: &IncomeStatementRecord,
    price: f64,
) -> Ratio {
    EarningsYield::compute(balance, income, price).ratio
}
