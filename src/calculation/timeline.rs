//! Derived timeline entries for work history and education.
//!
//! Each dated position or institution gets a "Mon YYYY - Mon YYYY" range
//! label and a compact duration. Entries without a start date are skipped.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Company, EndDate, Institution, Position};

use super::{calculate_duration, format_date_range};

/// A rendered timeline row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// The position or institution id.
    pub id: String,
    /// Job title or degree.
    pub title: String,
    /// e.g. "Apr 2022 - Present".
    pub date_range: String,
    /// e.g. "3 yrs 3 mos".
    pub duration: String,
    /// True if the span is still running.
    pub current: bool,
}

/// A company with its overall span and per-position entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyTimeline {
    /// Company id.
    pub id: String,
    /// Company display name.
    pub company: String,
    /// Kind of engagement.
    #[serde(rename = "type")]
    pub company_type: String,
    /// Where the work was based.
    pub location: String,
    /// Range covering every dated position, if any.
    pub date_range: Option<String>,
    /// Compact duration of that range.
    pub total_duration: Option<String>,
    /// One entry per dated position, in content order.
    pub positions: Vec<TimelineEntry>,
}

fn span_entry(
    id: &str,
    title: &str,
    start: NaiveDate,
    end: EndDate,
    today: NaiveDate,
) -> TimelineEntry {
    TimelineEntry {
        id: id.to_string(),
        title: title.to_string(),
        date_range: format_date_range(start, end.as_date()),
        duration: calculate_duration(start, end, today).label,
        current: end.is_present(),
    }
}

/// Builds the timeline entry for a position, or `None` if it is undated.
pub fn position_entry(position: &Position, today: NaiveDate) -> Option<TimelineEntry> {
    let start = position.start_date?;
    Some(span_entry(
        &position.id,
        &position.title,
        start,
        position.end_date,
        today,
    ))
}

/// Builds the timeline entry for an institution, or `None` if it is undated.
pub fn education_entry(institution: &Institution, today: NaiveDate) -> Option<TimelineEntry> {
    let start = institution.start_date?;
    Some(span_entry(
        &institution.id,
        &institution.degree,
        start,
        institution.end_date,
        today,
    ))
}

/// Returns the span covering all dated positions at a company.
///
/// The start is the earliest position start. The end is `Present` if any
/// dated position is ongoing, otherwise the latest end date.
pub fn company_span(company: &Company) -> Option<(NaiveDate, EndDate)> {
    let dated: Vec<(NaiveDate, EndDate)> = company
        .positions
        .iter()
        .filter_map(|p| p.start_date.map(|start| (start, p.end_date)))
        .collect();

    let start = dated.iter().map(|(start, _)| *start).min()?;
    let end = if dated.iter().any(|(_, end)| end.is_present()) {
        EndDate::Present
    } else {
        dated
            .iter()
            .filter_map(|(_, end)| end.as_date())
            .max()
            .map_or(EndDate::Present, EndDate::Date)
    };

    Some((start, end))
}

/// Builds the full timeline for a company.
///
/// # Example
///
/// ```
/// use portfolio_stats::calculation::company_timeline;
/// use portfolio_stats::models::{Company, EndDate, Position};
/// use chrono::NaiveDate;
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let position = |id: &str, start, end| Position {
///     id: id.to_string(),
///     title: id.to_string(),
///     start_date: Some(start),
///     end_date: end,
///     description: String::new(),
///     responsibilities: vec![],
///     achievements: vec![],
///     technologies: vec![],
/// };
/// let company = Company {
///     id: "nimbus".to_string(),
///     company: "Nimbus Labs".to_string(),
///     company_type: "Full-time".to_string(),
///     location: "Remote".to_string(),
///     logo: None,
///     positions: vec![
///         position("senior", date(2022, 4, 1), EndDate::Present),
///         position("engineer", date(2020, 8, 1), EndDate::Date(date(2022, 3, 31))),
///     ],
/// };
///
/// let timeline = company_timeline(&company, date(2025, 6, 15));
/// assert_eq!(timeline.date_range.as_deref(), Some("Aug 2020 - Present"));
/// assert_eq!(timeline.total_duration.as_deref(), Some("4 yrs 11 mos"));
/// assert_eq!(timeline.positions[1].duration, "1 yr 8 mos");
/// ```
pub fn company_timeline(company: &Company, today: NaiveDate) -> CompanyTimeline {
    let span = company_span(company);

    CompanyTimeline {
        id: company.id.clone(),
        company: company.company.clone(),
        company_type: company.company_type.clone(),
        location: company.location.clone(),
        date_range: span.map(|(start, end)| format_date_range(start, end.as_date())),
        total_duration: span.map(|(start, end)| calculate_duration(start, end, today).label),
        positions: company
            .positions
            .iter()
            .filter_map(|p| position_entry(p, today))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_position(id: &str, start: Option<&str>, end: EndDate) -> Position {
        Position {
            id: id.to_string(),
            title: format!("{} title", id),
            start_date: start.map(make_date),
            end_date: end,
            description: String::new(),
            responsibilities: vec![],
            achievements: vec![],
            technologies: vec![],
        }
    }

    fn make_company(positions: Vec<Position>) -> Company {
        Company {
            id: "brightpath".to_string(),
            company: "Brightpath Digital".to_string(),
            company_type: "Full-time".to_string(),
            location: "Austin, TX".to_string(),
            logo: None,
            positions,
        }
    }

    fn today() -> NaiveDate {
        make_date("2025-06-15")
    }

    #[test]
    fn test_position_entry_closed() {
        let position = make_position(
            "associate",
            Some("2018-05-01"),
            EndDate::Date(make_date("2020-07-31")),
        );
        let entry = position_entry(&position, today()).unwrap();
        assert_eq!(entry.date_range, "May 2018 - Jul 2020");
        assert_eq!(entry.duration, "2 yrs 3 mos");
        assert!(!entry.current);
    }

    #[test]
    fn test_position_entry_current() {
        let position = make_position("senior", Some("2022-04-01"), EndDate::Present);
        let entry = position_entry(&position, today()).unwrap();
        assert_eq!(entry.date_range, "Apr 2022 - Present");
        assert_eq!(entry.duration, "3 yrs 3 mos");
        assert!(entry.current);
    }

    #[test]
    fn test_undated_position_has_no_entry() {
        let position = make_position("freelance", None, EndDate::Present);
        assert!(position_entry(&position, today()).is_none());
    }

    #[test]
    fn test_company_span_closed_uses_latest_end() {
        let company = make_company(vec![
            make_position("b", Some("2019-06-01"), EndDate::Date(make_date("2020-07-31"))),
            make_position("a", Some("2018-05-01"), EndDate::Date(make_date("2019-05-31"))),
        ]);
        assert_eq!(
            company_span(&company),
            Some((make_date("2018-05-01"), EndDate::Date(make_date("2020-07-31"))))
        );
    }

    #[test]
    fn test_company_span_ongoing_if_any_position_current() {
        let company = make_company(vec![
            make_position("b", Some("2022-04-01"), EndDate::Present),
            make_position("a", Some("2020-08-01"), EndDate::Date(make_date("2022-03-31"))),
        ]);
        assert_eq!(
            company_span(&company),
            Some((make_date("2020-08-01"), EndDate::Present))
        );
    }

    #[test]
    fn test_company_without_dated_positions_has_no_span() {
        let company = make_company(vec![make_position("x", None, EndDate::Present)]);
        assert!(company_span(&company).is_none());

        let timeline = company_timeline(&company, today());
        assert!(timeline.date_range.is_none());
        assert!(timeline.total_duration.is_none());
        assert!(timeline.positions.is_empty());
    }

    #[test]
    fn test_company_timeline_is_idempotent() {
        let company = make_company(vec![
            make_position("b", Some("2022-04-01"), EndDate::Present),
            make_position("a", Some("2020-08-01"), EndDate::Date(make_date("2022-03-31"))),
        ]);
        let first = company_timeline(&company, today());
        let second = company_timeline(&company, today());
        assert_eq!(first, second);
        assert_eq!(first.total_duration.as_deref(), Some("4 yrs 11 mos"));
    }

    #[test]
    fn test_education_entry_uses_degree_as_title() {
        let institution = Institution {
            id: "ut".to_string(),
            degree: "Bachelor of Science".to_string(),
            field: "Computer Science".to_string(),
            name: "University of Texas".to_string(),
            location: "Austin, TX".to_string(),
            start_date: Some(make_date("2014-08-01")),
            end_date: EndDate::Date(make_date("2018-04-30")),
            description: None,
            achievements: vec![],
            coursework: vec![],
        };
        let entry = education_entry(&institution, today()).unwrap();
        assert_eq!(entry.title, "Bachelor of Science");
        assert_eq!(entry.date_range, "Aug 2014 - Apr 2018");
        assert_eq!(entry.duration, "3 yrs 9 mos");
    }
}
