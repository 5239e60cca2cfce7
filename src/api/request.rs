//! Request types for the portfolio stats API.
//!
//! Dates arrive as strings and are parsed here, so an invalid date produces
//! an `INVALID_DATE` error rather than a generic JSON rejection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PortfolioResult;
use crate::models::{DurationStyle, EndDate, parse_iso_date};

/// Request body for the `/duration` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationRequest {
    /// Start date, `YYYY-MM-DD`.
    pub start_date: String,
    /// End date, `YYYY-MM-DD`, `"Present"`, or absent for present.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Label shape; compact by default.
    #[serde(default)]
    pub style: DurationStyle,
}

/// Request body for the `/date-range` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRangeRequest {
    /// Start date, `YYYY-MM-DD`.
    pub start_date: String,
    /// End date, `YYYY-MM-DD`, `"Present"`, or absent for present.
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Query string for the `/projects` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectsQuery {
    /// Category to filter on; all projects when absent.
    #[serde(default)]
    pub category: Option<String>,
}

/// Query string for the `/recognition` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognitionQuery {
    /// Selected carousel position; wraps past the end. Defaults to 0.
    #[serde(default)]
    pub index: Option<usize>,
}

/// Parses a start/end pair from request strings.
pub(crate) fn parse_span(
    start_date: &str,
    end_date: Option<&str>,
) -> PortfolioResult<(NaiveDate, EndDate)> {
    let start = parse_iso_date(start_date)?;
    let end = match end_date {
        Some(raw) => raw.parse::<EndDate>()?,
        None => EndDate::Present,
    };
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortfolioError;

    #[test]
    fn test_duration_request_defaults() {
        let request: DurationRequest =
            serde_json::from_str(r#"{"start_date": "2022-04-01"}"#).unwrap();
        assert!(request.end_date.is_none());
        assert_eq!(request.style, DurationStyle::Compact);
    }

    #[test]
    fn test_duration_request_with_style() {
        let request: DurationRequest = serde_json::from_str(
            r#"{"start_date": "2022-04-01", "end_date": "2023-01-01", "style": "verbose"}"#,
        )
        .unwrap();
        assert_eq!(request.end_date.as_deref(), Some("2023-01-01"));
        assert_eq!(request.style, DurationStyle::Verbose);
    }

    #[test]
    fn test_parse_span_present_and_dated() {
        let (start, end) = parse_span("2022-04-01", None).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2022, 4, 1).unwrap());
        assert!(end.is_present());

        let (_, end) = parse_span("2022-04-01", Some("Present")).unwrap();
        assert!(end.is_present());

        let (_, end) = parse_span("2022-04-01", Some("2023-01-31")).unwrap();
        assert_eq!(end.as_date(), NaiveDate::from_ymd_opt(2023, 1, 31));
    }

    #[test]
    fn test_parse_span_rejects_bad_start() {
        match parse_span("April 2022", None) {
            Err(PortfolioError::InvalidDate { value, .. }) => assert_eq!(value, "April 2022"),
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_span_rejects_bad_end() {
        assert!(parse_span("2022-04-01", Some("2023-02-30")).is_err());
    }
}
