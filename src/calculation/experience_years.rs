//! Years-of-experience calculation.
//!
//! Two shapes are needed by the presentation layer: whole completed years
//! ("7+") and years rounded to the nearest half ("7.5+").

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

/// Returns the average length of a year in days (365.25).
pub fn days_per_year() -> Decimal {
    Decimal::new(36525, 2)
}

/// Returns the number of whole years completed since `start`.
///
/// A year is only counted once its anniversary has been reached: the
/// result drops by one when `today` falls in an earlier month than `start`,
/// or in the same month on an earlier day. A `start` after `today` yields 0.
///
/// # Example
///
/// ```
/// use portfolio_stats::calculation::years_since;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2018, 5, 1).unwrap();
///
/// let before = NaiveDate::from_ymd_opt(2024, 4, 30).unwrap();
/// assert_eq!(years_since(start, before), 5);
///
/// let on = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// assert_eq!(years_since(start, on), 6);
/// ```
pub fn years_since(start: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - start.year();
    let months = today.month() as i32 - start.month() as i32;

    if months < 0 || (months == 0 && today.day() < start.day()) {
        years -= 1;
    }

    u32::try_from(years).unwrap_or(0)
}

/// Returns the years elapsed since `start`, rounded to the nearest half year.
///
/// The elapsed days are divided by 365.25 and rounded half away from zero
/// to a multiple of 0.5. The result is normalized, so whole values carry no
/// fractional digit ("7" rather than "7.0"). A `start` after `today` yields 0.
///
/// # Example
///
/// ```
/// use portfolio_stats::calculation::decimal_years_since;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2018, 5, 1).unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
///
/// assert_eq!(decimal_years_since(start, today).to_string(), "7.5");
/// ```
pub fn decimal_years_since(start: NaiveDate, today: NaiveDate) -> Decimal {
    let days = (today - start).num_days().max(0);
    let years = Decimal::from(days) / days_per_year();

    let halves = (years * Decimal::TWO)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    (halves / Decimal::TWO).normalize()
}
