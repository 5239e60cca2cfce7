//! Elapsed duration calculation.
//!
//! This module turns a start date and an end date (or `Present`) into whole
//! years and months, rendered either compactly ("2 yrs 3 mos") for job and
//! company spans or verbosely ("2 years 3 months") for prose.
//!
//! The two shapes use different month rules. The compact form counts the
//! month in progress as complete once the end day-of-month reaches the start
//! day-of-month; the verbose form counts calendar month boundaries only.

use chrono::{Datelike, NaiveDate};

use crate::models::{DurationResult, EndDate};

/// Returns the signed number of calendar month boundaries from `start` to `end`.
///
/// Day-of-month is ignored: 2024-01-31 to 2024-02-01 is one month.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    i64::from(end.year() - start.year()) * 12 + i64::from(end.month()) - i64::from(start.month())
}

/// Calculates a duration and renders it in the compact "X yrs Y mos" form.
///
/// The month count gains one when `end.day() >= start.day()`, so a role that
/// starts and ends on the same date is shown as "1 mo". A start after the end
/// clamps to zero.
///
/// # Arguments
///
/// * `start` - The first day of the span
/// * `end` - The last day of the span, or [`EndDate::Present`]
/// * `today` - The evaluation date substituted for `Present`
///
/// # Example
///
/// ```
/// use portfolio_stats::calculation::calculate_duration;
/// use portfolio_stats::models::EndDate;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2022, 4, 1).unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
///
/// let result = calculate_duration(start, EndDate::Present, today);
/// assert_eq!(result.label, "3 yrs 3 mos");
/// ```
pub fn calculate_duration(start: NaiveDate, end: EndDate, today: NaiveDate) -> DurationResult {
    let end = end.resolve(today);
    let mut total_months = months_between(start, end);

    if end.day() >= start.day() {
        total_months += 1;
    }

    let (years, months) = split_months(total_months);
    DurationResult {
        years,
        months,
        label: compact_label(years, months),
    }
}

/// Calculates a duration and renders it in the verbose "X years Y months" form.
///
/// Only calendar month boundaries count; day-of-month is ignored. A start
/// after the end clamps to zero.
///
/// # Example
///
/// ```
/// use portfolio_stats::calculation::calculate_duration_verbose;
/// use portfolio_stats::models::EndDate;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
/// let end = NaiveDate::from_ymd_opt(2022, 1, 20).unwrap();
///
/// let result = calculate_duration_verbose(start, EndDate::Date(end), end);
/// assert_eq!(result.label, "2 years");
/// ```
pub fn calculate_duration_verbose(
    start: NaiveDate,
    end: EndDate,
    today: NaiveDate,
) -> DurationResult {
    let end = end.resolve(today);
    let (years, months) = split_months(months_between(start, end));
    DurationResult {
        years,
        months,
        label: verbose_label(years, months),
    }
}

/// Renders the compact label.
///
/// The year part appears only when `years > 0`. The month part appears when
/// `months > 0` or when there is no year part, so the label is never empty.
pub fn compact_label(years: u32, months: u32) -> String {
    let mut parts = Vec::with_capacity(2);

    if years > 0 {
        parts.push(format!("{} yr{}", years, plural(years)));
    }

    if months > 0 || parts.is_empty() {
        parts.push(format!("{} mo{}", months, plural(months)));
    }

    parts.join(" ")
}

/// Renders the verbose label.
pub fn verbose_label(years: u32, months: u32) -> String {
    if years == 0 {
        format!("{} month{}", months, plural(months))
    } else if months == 0 {
        format!("{} year{}", years, plural(years))
    } else {
        format!(
            "{} year{} {} month{}",
            years,
            plural(years),
            months,
            plural(months)
        )
    }
}

fn split_months(total_months: i64) -> (u32, u32) {
    let total = u32::try_from(total_months.max(0)).unwrap_or(u32::MAX);
    (total / 12, total % 12)
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}
