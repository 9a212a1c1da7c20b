//! [`StatementSource`] backed by Alpha Vantage.

use crate::AlphaVantageClient;
use greenblatt_traits::{
    BalanceSheetRecord, IncomeStatementRecord, MonthlySeries, PriceQuote, Result, StatementSource,
};

impl StatementSource for AlphaVantageClient {
    async fn balance_sheet(&self, symbol: &str) -> Result<BalanceSheetRecord> {
        Ok(Self::balance_sheet(self, symbol).await?)
    }

    async fn income_statement(&self, symbol: &str) -> Result<IncomeStatementRecord> {
        Ok(Self::income_statement(self, symbol).await?)
    }

    async fn quote(&self, symbol: &str) -> Result<PriceQuote> {
        Ok(Self::quote(self, symbol).await?)
    }

    async fn monthly_series(&self, symbol: &str) -> Result<MonthlySeries> {
        Ok(Self::monthly_series(self, symbol).await?)
    }
}
