//! Output helpers shared by the subcommands.

use anyhow::Result;
use clap::ValueEnum;
use greenblatt::traits::reported::parse_amount;
use serde::Serialize;
use serde_json::Value;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable report
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Print a boxed section title.
pub(crate) fn banner(title: &str) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║{title:^62}║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
}

/// Print a horizontal rule under a heading.
pub(crate) fn heading(text: &str) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{text}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a monetary amount with thousands separators.
pub(crate) fn money(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = format!("{:.2}", value.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{grouped}.{fraction}", if negative { "-" } else { "" })
}

/// Format an optional amount, showing unreported values as such.
pub(crate) fn reported(value: Option<f64>) -> String {
    value.map_or_else(|| "not reported".to_string(), money)
}

/// Format a line item kept as reported: amounts get separators, anything
/// else is shown as text.
pub(crate) fn reported_value(value: &Value) -> String {
    match value {
        Value::Number(n) => n.as_f64().map_or_else(|| n.to_string(), money),
        Value::String(text) => match parse_amount(text) {
            Ok(amount) => reported(amount),
            Err(_) => text.clone(),
        },
        Value::Null => reported(None),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money() {
        assert_eq!(money(0.0), "0.00");
        assert_eq!(money(999.5), "999.50");
        assert_eq!(money(1_234_567.891), "1,234,567.89");
        assert_eq!(money(-6_426_000_000.0), "-6,426,000,000.00");
    }

    #[test]
    fn test_reported() {
        assert_eq!(reported(None), "not reported");
        assert_eq!(reported(Some(1000.0)), "1,000.00");
    }

    #[test]
    fn test_reported_value() {
        assert_eq!(reported_value(&Value::from("135241000000")), "135,241,000,000.00");
        assert_eq!(reported_value(&Value::from("None")), "not reported");
        assert_eq!(reported_value(&Value::from("USD")), "USD");
        assert_eq!(reported_value(&Value::from(12.5)), "12.50");
    }
}
