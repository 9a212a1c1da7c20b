//! Score command implementation.

use crate::output::{OutputFormat, banner, money, print_json};
use anyhow::{Result, bail};
use greenblatt::ratios::registry::RatioKind;
use greenblatt::{Analyzer, StatementSource};
use serde::Serialize;

/// One row of the score table.
#[derive(Debug, Serialize)]
struct ScoreRow {
    symbol: String,
    value: Option<f64>,
    error: Option<String>,
}

/// Compute one ratio for each ticker. A failed ticker is reported in its row
/// and does not stop the others.
pub(crate) async fn score<S: StatementSource>(
    analyzer: &Analyzer<S>,
    ratio_name: &str,
    tickers: &[String],
    format: OutputFormat,
) -> Result<()> {
    let Some(kind) = RatioKind::from_name(ratio_name) else {
        bail!("Unknown ratio: '{ratio_name}'. Use 'greenblatt ratios' to list available ratios.");
    };

    let mut rows = Vec::with_capacity(tickers.len());
    for ticker in tickers {
        let outcome = match kind {
            RatioKind::EarningsYield => analyzer.earnings_yield(ticker).await.map(|r| r.value()),
            RatioKind::ReturnOnTangibleCapital => analyzer
                .return_on_tangible_capital(ticker)
                .await
                .map(|r| r.value()),
            RatioKind::AverageYearlyPrice => analyzer.average_yearly_price(ticker).await.map(Some),
        };

        let row = match outcome {
            Ok(value) => ScoreRow {
                symbol: ticker.clone(),
                value,
                error: None,
            },
            Err(e) => {
                tracing::warn!(%ticker, error = %e, "ratio failed");
                ScoreRow {
                    symbol: ticker.clone(),
                    value: None,
                    error: Some(e.to_string()),
                }
            }
        };
        rows.push(row);
    }

    if format == OutputFormat::Json {
        return print_json(&rows);
    }

    let info = kind.info();
    banner("Ratio Scores");
    println!("Ratio: {} ({})\n", info.name, info.formula);
    println!("{:<10} {:>16}", "Symbol", "Value");
    println!("{}", "─".repeat(28));
    for row in &rows {
        let cell = match (&row.value, &row.error) {
            (_, Some(e)) => format!("error: {e}"),
            (Some(v), None) if kind == RatioKind::AverageYearlyPrice => money(*v),
            (Some(v), None) => format!("{v:.2}%"),
            (None, None) => "undefined".to_string(),
        };
        println!("{:<10} {:>16}", row.symbol, cell);
    }
    println!();
    Ok(())
}
