//! Date range label formatting.
//!
//! Month names come from a fixed English table so output does not depend on
//! the host locale.

use chrono::{Datelike, NaiveDate};

use crate::models::PRESENT;

/// Three-letter month abbreviations, January first.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Formats a date as "Mon YYYY".
///
/// # Example
///
/// ```
/// use portfolio_stats::calculation::format_month_year;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2021, 10, 1).unwrap();
/// assert_eq!(format_month_year(date), "Oct 2021");
/// ```
pub fn format_month_year(date: NaiveDate) -> String {
    format!("{} {}", MONTH_ABBREVIATIONS[date.month0() as usize], date.year())
}

/// Formats a start/end pair as "Mon YYYY - Mon YYYY", or "Mon YYYY - Present"
/// when `end` is `None`.
///
/// # Example
///
/// ```
/// use portfolio_stats::calculation::format_date_range;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
/// let end = NaiveDate::from_ymd_opt(2022, 3, 20).unwrap();
///
/// assert_eq!(format_date_range(start, Some(end)), "Jan 2020 - Mar 2022");
/// assert_eq!(format_date_range(start, None), "Jan 2020 - Present");
/// ```
pub fn format_date_range(start: NaiveDate, end: Option<NaiveDate>) -> String {
    let start_label = format_month_year(start);
    match end {
        Some(end) => format!("{} - {}", start_label, format_month_year(end)),
        None => format!("{} - {}", start_label, PRESENT),
    }
}
