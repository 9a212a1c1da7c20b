//! Average yearly price from monthly open/close bars.

use chrono::{Datelike, NaiveDate};
use greenblatt_traits::{GreenblattError, MonthlySeries, Result};

/// Number of months averaged.
pub const AVERAGING_WINDOW: usize = 12;

/// Average of the monthly open/close midpoints over twelve months.
///
/// The window is positional: it starts at the entry whose index equals
/// `month` (1 = January) in the provider's most-recent-first order and
/// covers the following twelve entries. With a series that begins at the
/// current month this skips the current and the partially elapsed months
/// of the year.
///
/// # Errors
///
/// Returns [`GreenblattError::InvalidData`] if `month` is not in `1..=12`,
/// and [`GreenblattError::InsufficientData`] if fewer than twelve entries
/// are available from the offset. A short window is never averaged.
pub fn average_yearly_price(series: &MonthlySeries, month: u32) -> Result<f64> {
    if !(1..=12).contains(&month) {
        return Err(GreenblattError::InvalidData(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }

    let offset = month as usize;
    let available = series.len().saturating_sub(offset);
    if available < AVERAGING_WINDOW {
        return Err(GreenblattError::InsufficientData(format!(
            "{available} of {AVERAGING_WINDOW} months available from offset {offset}"
        )));
    }

    let total: f64 = series
        .bars()
        .skip(offset)
        .take(AVERAGING_WINDOW)
        .map(|bar| bar.midpoint())
        .sum();

    Ok(total / AVERAGING_WINDOW as f64)
}

/// [`average_yearly_price`] with the offset taken from `date`'s month.
///
/// # Errors
///
/// See [`average_yearly_price`].
pub fn average_yearly_price_on(series: &MonthlySeries, date: NaiveDate) -> Result<f64> {
    average_yearly_price(series, date.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use greenblatt_traits::MonthlyBar;

    /// `n` months, entry `i` has open `i` and close `i + 1`.
    fn series(n: usize) -> MonthlySeries {
        MonthlySeries::new(
            (0..n)
                .map(|i| {
                    (
                        format!("month-{i}"),
                        MonthlyBar {
                            open: i as f64,
                            close: i as f64 + 1.0,
                        },
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_positional_window() {
        // month 3 averages entries 3..15, midpoints 3.5..14.5
        let avg = average_yearly_price(&series(20), 3).unwrap();
        assert_relative_eq!(avg, 9.0);
    }

    #[test]
    fn test_matches_double_average() {
        let s = series(13);
        let opens: f64 = (1..13).map(|i| i as f64).sum::<f64>() / 12.0;
        let closes: f64 = (1..13).map(|i| i as f64 + 1.0).sum::<f64>() / 12.0;
        let avg = average_yearly_price(&s, 1).unwrap();
        assert_relative_eq!(avg, (opens + closes) / 2.0);
    }

    #[test]
    fn test_short_window_is_an_error() {
        let err = average_yearly_price(&series(13), 2).unwrap_err();
        assert!(matches!(err, GreenblattError::InsufficientData(_)));
        assert!(err.to_string().contains("11 of 12"));

        let err = average_yearly_price(&MonthlySeries::default(), 12).unwrap_err();
        assert!(matches!(err, GreenblattError::InsufficientData(_)));
    }

    #[test]
    fn test_invalid_month() {
        assert!(matches!(
            average_yearly_price(&series(30), 0),
            Err(GreenblattError::InvalidData(_))
        ));
        assert!(average_yearly_price(&series(30), 13).is_err());
    }

    #[test]
    fn test_offset_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let avg = average_yearly_price_on(&series(20), date).unwrap();
        assert_relative_eq!(avg, 9.0);
    }
}
