//! Response envelopes of the Alpha Vantage query endpoint.

use greenblatt_traits::{MonthlySeries, PriceQuote};
use serde::Deserialize;

/// Query `function` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Annual and quarterly balance sheets.
    BalanceSheet,
    /// Annual and quarterly income statements.
    IncomeStatement,
    /// Latest quote.
    GlobalQuote,
    /// Monthly OHLCV history.
    TimeSeriesMonthly,
}

impl Function {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BalanceSheet => "BALANCE_SHEET",
            Self::IncomeStatement => "INCOME_STATEMENT",
            Self::GlobalQuote => "GLOBAL_QUOTE",
            Self::TimeSeriesMonthly => "TIME_SERIES_MONTHLY",
        }
    }
}

/// Statement responses: reports ordered most recent first.
///
/// Quarterly reports are present in the payload but never read.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnualReports<T> {
    /// Annual reports, most recent first.
    #[serde(rename = "annualReports", default = "Vec::new")]
    pub annual_reports: Vec<T>,
}

impl<T> AnnualReports<T> {
    /// The most recent annual report.
    #[must_use]
    pub fn into_latest(self) -> Option<T> {
        self.annual_reports.into_iter().next()
    }
}

/// `GLOBAL_QUOTE` response.
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalQuoteEnvelope {
    /// The quote object; empty for unknown symbols.
    #[serde(rename = "Global Quote", default)]
    pub quote: Option<PriceQuote>,
}

/// `TIME_SERIES_MONTHLY` response.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthlySeriesEnvelope {
    /// Month-end keyed bars, most recent first.
    #[serde(rename = "Monthly Time Series", default)]
    pub series: Option<MonthlySeries>,
}

/// Messages the API returns with status 200 in place of data: invalid
/// calls, throttling notices and premium-endpoint notices.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ProviderNotice {
    #[serde(rename = "Error Message", default)]
    error_message: Option<String>,
    #[serde(rename = "Information", default)]
    information: Option<String>,
    #[serde(rename = "Note", default)]
    note: Option<String>,
}

impl ProviderNotice {
    pub(crate) fn into_message(self) -> Option<String> {
        self.error_message.or(self.information).or(self.note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenblatt_traits::{BalanceSheetRecord, IncomeStatementRecord};

    #[test]
    fn test_latest_annual_report() {
        let json = r#"{
            "symbol": "IBM",
            "annualReports": [
                {"fiscalDateEnding": "2023-12-31", "ebit": "11450000000"},
                {"fiscalDateEnding": "2022-12-31", "ebit": "1"}
            ],
            "quarterlyReports": [{"fiscalDateEnding": "2024-03-31", "ebit": "2"}]
        }"#;
        let reports: AnnualReports<IncomeStatementRecord> = serde_json::from_str(json).unwrap();
        let latest = reports.into_latest().unwrap();
        assert_eq!(latest.ebit, Some(11_450_000_000.0));
    }

    #[test]
    fn test_missing_reports() {
        let reports: AnnualReports<BalanceSheetRecord> = serde_json::from_str("{}").unwrap();
        assert!(reports.into_latest().is_none());
    }

    #[test]
    fn test_provider_notice() {
        let notice: ProviderNotice = serde_json::from_str(
            r#"{"Error Message": "Invalid API call. Please retry or visit the documentation."}"#,
        )
        .unwrap();
        assert!(notice.into_message().unwrap().starts_with("Invalid API call"));

        let notice: ProviderNotice = serde_json::from_str(r#"{"annualReports": []}"#).unwrap();
        assert!(notice.into_message().is_none());
    }

    #[test]
    fn test_function_names() {
        assert_eq!(Function::BalanceSheet.as_str(), "BALANCE_SHEET");
        assert_eq!(Function::TimeSeriesMonthly.as_str(), "TIME_SERIES_MONTHLY");
    }
}
