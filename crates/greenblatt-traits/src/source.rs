//! The data-source seam between the ratio engine and a market-data provider.

use crate::{
    BalanceSheetRecord, IncomeStatementRecord, MonthlySeries, PriceQuote, Result,
};
use std::future::Future;

/// Retrieves raw statements and prices for a ticker.
///
/// Every call is an independent, side-effect-free read, so callers are free
/// to issue them concurrently. Only the most recent annual report is ever
/// returned.
///
/// Implementations report transport and status problems as upstream errors
/// (see [`GreenblattError::is_upstream`](crate::GreenblattError::is_upstream)).
pub trait StatementSource {
    /// Most recent annual balance sheet.
    fn balance_sheet(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<BalanceSheetRecord>> + Send;

    /// Most recent annual income statement.
    fn income_statement(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<IncomeStatementRecord>> + Send;

    /// Current price quote.
    fn quote(&self, symbol: &str) -> impl Future<Output = Result<PriceQuote>> + Send;

    /// Monthly open/close history, most recent first.
    fn monthly_series(&self, symbol: &str) -> impl Future<Output = Result<MonthlySeries>> + Send;
}
