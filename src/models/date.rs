//! Calendar date helpers and the open-ended [`EndDate`] type.
//!
//! Content files carry dates as ISO `YYYY-MM-DD` strings. An end date may
//! also be `"Present"` (or absent/null), meaning the span is still running.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PortfolioError, PortfolioResult};

/// The ISO date format used by content files and API requests.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// The literal used for an open-ended end date.
pub const PRESENT: &str = "Present";

/// Parses an ISO `YYYY-MM-DD` date string.
///
/// Surrounding whitespace is ignored. Anything that is not a real calendar
/// date (e.g. `2023-02-30`) is rejected with [`PortfolioError::InvalidDate`].
///
/// # Example
///
/// ```
/// use portfolio_stats::models::parse_iso_date;
/// use chrono::NaiveDate;
///
/// let date = parse_iso_date("2021-10-01").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2021, 10, 1).unwrap());
/// assert!(parse_iso_date("2021-02-30").is_err());
/// ```
pub fn parse_iso_date(value: &str) -> PortfolioResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).map_err(|e| {
        PortfolioError::InvalidDate {
            value: value.to_string(),
            message: e.to_string(),
        }
    })
}

/// The end of a date span: either a concrete date or still ongoing.
///
/// # Example
///
/// ```
/// use portfolio_stats::models::EndDate;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// let end: EndDate = "Present".parse().unwrap();
/// assert_eq!(end.resolve(today), today);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EndDate {
    /// The span is still running; resolves to the evaluation date.
    #[default]
    Present,
    /// The span ended on this date.
    Date(NaiveDate),
}

impl EndDate {
    /// Returns the concrete end date, substituting `today` for [`EndDate::Present`].
    pub fn resolve(self, today: NaiveDate) -> NaiveDate {
        match self {
            EndDate::Present => today,
            EndDate::Date(date) => date,
        }
    }

    /// Returns the concrete date, or `None` if the span is ongoing.
    pub fn as_date(self) -> Option<NaiveDate> {
        match self {
            EndDate::Present => None,
            EndDate::Date(date) => Some(date),
        }
    }

    /// Returns true if the span is still running.
    pub fn is_present(self) -> bool {
        self == EndDate::Present
    }
}

impl From<NaiveDate> for EndDate {
    fn from(date: NaiveDate) -> Self {
        EndDate::Date(date)
    }
}

impl From<Option<NaiveDate>> for EndDate {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(EndDate::Present, EndDate::Date)
    }
}

impl FromStr for EndDate {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(PRESENT) {
            return Ok(EndDate::Present);
        }
        parse_iso_date(trimmed).map(EndDate::Date)
    }
}

impl fmt::Display for EndDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndDate::Present => write!(f, "{}", PRESENT),
            EndDate::Date(date) => write!(f, "{}", date.format(ISO_DATE_FORMAT)),
        }
    }
}

impl Serialize for EndDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EndDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(EndDate::Present),
            Some(value) => value.parse().map_err(serde::de::Error::custom),
        }
    }
}
