//! Decoding of provider-reported values.
//!
//! The provider encodes every line item as a JSON string. The literal
//! `"None"` marks a value the company did not report. Here `"None"`, JSON
//! `null`, an empty string and an absent key all become `None`; any other
//! text must be a number or decoding fails with a message naming the text.
//!
//! The `serde` helpers are meant for `#[serde(deserialize_with = "...")]`
//! together with `#[serde(default)]`.

use crate::{GreenblattError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de};

/// The provider's marker for a line item that was not reported.
pub const NOT_REPORTED: &str = "None";

fn is_absent(text: &str) -> bool {
    let text = text.trim();
    text.is_empty() || text == NOT_REPORTED
}

/// Parse a reported monetary amount.
///
/// # Errors
///
/// Returns [`GreenblattError::InvalidData`] if the text is neither the
/// sentinel nor a finite number.
pub fn parse_amount(text: &str) -> Result<Option<f64>> {
    if is_absent(text) {
        return Ok(None);
    }
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(GreenblattError::InvalidData(format!(
            "invalid reported amount {text:?}"
        ))),
    }
}

/// Parse a reported share count.
///
/// # Errors
///
/// Returns [`GreenblattError::InvalidData`] if the text is neither the
/// sentinel nor a non-negative integer.
pub fn parse_count(text: &str) -> Result<Option<u64>> {
    if is_absent(text) {
        return Ok(None);
    }
    text.trim()
        .parse::<u64>()
        .map(Some)
        .map_err(|_| GreenblattError::InvalidData(format!("invalid reported count {text:?}")))
}

/// Parse a reported `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`GreenblattError::InvalidData`] if the text is neither the
/// sentinel nor a valid date.
pub fn parse_date(text: &str) -> Result<Option<NaiveDate>> {
    if is_absent(text) {
        return Ok(None);
    }
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map(Some)
        .map_err(|_| GreenblattError::InvalidData(format!("invalid reported date {text:?}")))
}

/// Raw shape of a reported value. Some mirrors emit bare JSON numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Text(String),
    Number(f64),
}

/// `deserialize_with` helper for optional amounts.
///
/// # Errors
///
/// Fails on malformed text, see [`parse_amount`].
pub fn amount<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) => parse_amount(&text).map_err(de::Error::custom),
    }
}

/// `deserialize_with` helper for amounts that must be present.
///
/// # Errors
///
/// Fails on malformed text and on the `"None"` sentinel.
pub fn required_amount<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    amount(deserializer)?.ok_or_else(|| de::Error::custom("required amount was not reported"))
}

/// `deserialize_with` helper for optional share counts.
///
/// # Errors
///
/// Fails on malformed text, see [`parse_count`].
pub fn count<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(value)) if value >= 0.0 && value.fract() == 0.0 => Ok(Some(value as u64)),
        Some(Raw::Number(value)) => Err(de::Error::custom(format!(
            "invalid reported count {value}"
        ))),
        Some(Raw::Text(text)) => parse_count(&text).map_err(de::Error::custom),
    }
}

/// `deserialize_with` helper for optional free text such as a currency code.
///
/// # Errors
///
/// Fails if the value is not a string.
pub fn text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|text| !is_absent(text)))
}

/// `deserialize_with` helper for optional dates.
///
/// # Errors
///
/// Fails on malformed text, see [`parse_date`].
pub fn date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(text) => parse_date(&text).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "amount")]
        value: Option<f64>,
        #[serde(default, deserialize_with = "count")]
        shares: Option<u64>,
        #[serde(default, deserialize_with = "text")]
        label: Option<String>,
    }

    #[test]
    fn test_sentinel_is_absent() {
        assert_eq!(parse_amount("None").unwrap(), None);
        assert_eq!(parse_amount("").unwrap(), None);
        assert_eq!(parse_count("None").unwrap(), None);
        assert_eq!(parse_date("None").unwrap(), None);
    }

    #[test]
    fn test_numeric_text() {
        assert_eq!(parse_amount("123456789").unwrap(), Some(123_456_789.0));
        assert_eq!(parse_amount("-42.5").unwrap(), Some(-42.5));
        assert_eq!(parse_count("15550061000").unwrap(), Some(15_550_061_000));
        assert_eq!(
            parse_date("2023-09-30").unwrap(),
            NaiveDate::from_ymd_opt(2023, 9, 30)
        );
    }

    #[test]
    fn test_malformed_text_is_reported() {
        let err = parse_amount("n/a").unwrap_err();
        assert!(matches!(err, GreenblattError::InvalidData(_)));
        assert!(err.to_string().contains("n/a"));

        assert!(parse_amount("NaN").is_err());
        assert!(parse_count("12.5").is_err());
        assert!(parse_count("-3").is_err());
        assert!(parse_date("30/09/2023").is_err());
    }

    #[test]
    fn test_serde_helpers() {
        let sample: Sample = serde_json::from_str(r#"{"value": "None", "shares": "None"}"#).unwrap();
        assert_eq!(sample.value, None);
        assert_eq!(sample.shares, None);

        let sample: Sample = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(sample.value, None);
        assert_eq!(sample.shares, None);

        let sample: Sample = serde_json::from_str(r#"{"value": "10.5", "shares": 7}"#).unwrap();
        assert_eq!(sample.value, Some(10.5));
        assert_eq!(sample.shares, Some(7));
    }

    #[test]
    fn test_text_sentinel() {
        let sample: Sample = serde_json::from_str(r#"{"label": "None"}"#).unwrap();
        assert_eq!(sample.label, None);
        let sample: Sample = serde_json::from_str(r#"{"label": ""}"#).unwrap();
        assert_eq!(sample.label, None);
        let sample: Sample = serde_json::from_str(r#"{"label": "USD"}"#).unwrap();
        assert_eq!(sample.label.as_deref(), Some("USD"));
    }

    #[test]
    fn test_serde_helper_rejects_garbage() {
        let err = serde_json::from_str::<Sample>(r#"{"value": "twelve"}"#).unwrap_err();
        assert!(err.to_string().contains("twelve"));
    }
}
