//! Ratio commands: earnings yield, return on tangible capital, snapshot and
//! average yearly price.

use crate::output::{OutputFormat, banner, heading, money, print_json};
use anyhow::Result;
use greenblatt::{Analyzer, EarningsYield, ReturnOnTangibleCapital, StatementSource};
use serde_json::json;

/// Print the earnings yield.
pub(crate) async fn earnings_yield<S: StatementSource>(
    analyzer: &Analyzer<S>,
    ticker: &str,
    format: OutputFormat,
) -> Result<()> {
    let ey = analyzer.earnings_yield_breakdown(ticker).await?;

    match format {
        OutputFormat::Json => print_json(&json!({ "earningsYield": ey.ratio })),
        OutputFormat::Text => {
            banner("Earnings Yield");
            print_earnings_yield(ticker, &ey);
            Ok(())
        }
    }
}

/// Print the return on tangible capital.
pub(crate) async fn return_on_tangible_capital<S: StatementSource>(
    analyzer: &Analyzer<S>,
    ticker: &str,
    format: OutputFormat,
) -> Result<()> {
    let rotc = analyzer.return_on_tangible_capital_breakdown(ticker).await?;

    match format {
        OutputFormat::Json => print_json(&json!({ "returnOnTangibleCapital": rotc.ratio })),
        OutputFormat::Text => {
            banner("Return on Tangible Capital");
            print_tangible_capital(ticker, &rotc);
            Ok(())
        }
    }
}

/// Print both ratios with their components.
pub(crate) async fn snapshot<S: StatementSource>(
    analyzer: &Analyzer<S>,
    ticker: &str,
    format: OutputFormat,
) -> Result<()> {
    let snapshot = analyzer.snapshot(ticker).await?;

    if format == OutputFormat::Json {
        return print_json(&snapshot);
    }

    banner("Ratio Snapshot");
    if let Some(date) = snapshot.fiscal_date_ending {
        println!("Fiscal year ending: {date}");
    }
    println!("Current price:      {}\n", money(snapshot.price));
    print_earnings_yield(&snapshot.symbol, &snapshot.earnings_yield);
    print_tangible_capital(&snapshot.symbol, &snapshot.return_on_tangible_capital);
    Ok(())
}

/// Print the average yearly price.
pub(crate) async fn average_price<S: StatementSource>(
    analyzer: &Analyzer<S>,
    ticker: &str,
    month: Option<u32>,
    format: OutputFormat,
) -> Result<()> {
    let average = match month {
        Some(m) => analyzer.average_yearly_price_for_month(ticker, m).await?,
        None => analyzer.average_yearly_price(ticker).await?,
    };

    match format {
        OutputFormat::Json => print_json(&json!({ "averageYearlyPrice": average })),
        OutputFormat::Text => {
            println!("{ticker} average yearly price: {}", money(average));
            Ok(())
        }
    }
}

fn print_earnings_yield(ticker: &str, ey: &EarningsYield) {
    heading(&format!("EARNINGS YIELD ({ticker})"));
    println!("{:<24} {:>24}", "EBIT", money(ey.ebit));
    println!("{:<24} {:>24}", "Market cap", money(ey.market_cap));
    println!("{:<24} {:>24}", "+ Total debt", money(ey.total_debt));
    println!("{:<24} {:>24}", "- Excess cash", money(ey.excess_cash));
    println!("{:<24} {:>24}", "= Enterprise value", money(ey.enterprise_value));
    println!();
    println!("{:<24} {:>24}\n", "Earnings yield", ey.ratio.to_string());
}

fn print_tangible_capital(ticker: &str, rotc: &ReturnOnTangibleCapital) {
    heading(&format!("RETURN ON TANGIBLE CAPITAL ({ticker})"));
    println!("{:<24} {:>24}", "EBIT", money(rotc.ebit));
    println!("{:<24} {:>24}", "Net working capital", money(rotc.net_working_capital));
    println!("{:<24} {:>24}", "+ Net fixed assets", money(rotc.net_fixed_assets));
    println!("{:<24} {:>24}", "= Tangible capital", money(rotc.tangible_capital));
    println!();
    println!("{:<24} {:>24}\n", "Return", rotc.ratio.to_string());
}
