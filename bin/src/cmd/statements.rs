//! Raw statement commands: balance sheet, income statement and price.

use crate::output::{OutputFormat, banner, heading, print_json, reported, reported_value};
use anyhow::Result;
use greenblatt::{Analyzer, StatementSource};
use serde_json::Value;
use std::collections::BTreeMap;

/// Show the latest annual balance sheet.
pub(crate) async fn balance<S: StatementSource>(
    analyzer: &Analyzer<S>,
    ticker: &str,
    format: OutputFormat,
) -> Result<()> {
    let sheet = analyzer.source().balance_sheet(ticker).await?;

    if format == OutputFormat::Json {
        return print_json(&sheet);
    }

    banner("Balance Sheet");
    heading(&format!(
        "{ticker} (fiscal year ending {}, {})",
        sheet
            .fiscal_date_ending
            .map_or_else(|| "unknown".to_string(), |d| d.to_string()),
        sheet.reported_currency.as_deref().unwrap_or("currency unknown"),
    ));

    let shares = sheet
        .common_stock_shares_outstanding
        .map_or_else(|| "not reported".to_string(), |s| s.to_string());
    let rows = [
        ("Short-term debt", reported(sheet.short_term_debt)),
        ("Long-term debt", reported(sheet.long_term_debt)),
        ("Cash & short-term investments", reported(sheet.cash_and_short_term_investments)),
        ("Total current assets", reported(sheet.total_current_assets)),
        ("Total current liabilities", reported(sheet.total_current_liabilities)),
        ("Total non-current assets", reported(sheet.total_non_current_assets)),
        ("Goodwill", reported(sheet.goodwill)),
        ("Other intangibles", reported(sheet.intangible_assets_excluding_goodwill)),
        ("Shares outstanding", shares),
    ];
    for (label, value) in rows {
        println!("{label:<32} {value:>24}");
    }
    print_other_items(&sheet.other);
    Ok(())
}

/// Show the latest annual income statement.
pub(crate) async fn income<S: StatementSource>(
    analyzer: &Analyzer<S>,
    ticker: &str,
    format: OutputFormat,
) -> Result<()> {
    let statement = analyzer.source().income_statement(ticker).await?;

    if format == OutputFormat::Json {
        return print_json(&statement);
    }

    banner("Income Statement");
    heading(&format!(
        "{ticker} (fiscal year ending {})",
        statement
            .fiscal_date_ending
            .map_or_else(|| "unknown".to_string(), |d| d.to_string()),
    ));
    println!("{:<32} {:>24}", "EBIT", reported(statement.ebit));
    print_other_items(&statement.other);
    Ok(())
}

/// Show the current price.
pub(crate) async fn price<S: StatementSource>(
    analyzer: &Analyzer<S>,
    ticker: &str,
    format: OutputFormat,
) -> Result<()> {
    let quote = analyzer.source().quote(ticker).await?;

    if format == OutputFormat::Json {
        return print_json(&quote);
    }

    let day = quote
        .latest_trading_day
        .map_or_else(|| "latest".to_string(), |d| d.to_string());
    println!("{ticker} {} ({day})", reported(quote.price));
    Ok(())
}

/// Print the line items the ratios do not use, in key order.
fn print_other_items(items: &BTreeMap<String, Value>) {
    if !items.is_empty() {
        println!();
        for (key, value) in items {
            println!("{key:<40} {:>24}", reported_value(value));
        }
    }
    println!();
}
