//! Calculation logic for the portfolio stats engine.
//!
//! This module contains the pure functions behind every displayed number:
//! elapsed durations in compact and verbose form, whole and half-year
//! experience, date range labels, keyword-based award classification,
//! headline statistics, project filtering, derived timelines and the
//! recognition carousel window.

mod award_classifier;
mod carousel;
mod date_range;
mod duration;
mod experience_years;
mod project_filter;
mod stats;
mod timeline;

pub use award_classifier::{AwardClassifier, DEFAULT_AWARD_KEYWORDS};
pub use carousel::{CarouselWindow, carousel_window};
pub use date_range::{MONTH_ABBREVIATIONS, format_date_range, format_month_year};
pub use duration::{
    calculate_duration, calculate_duration_verbose, compact_label, months_between, verbose_label,
};
pub use experience_years::{days_per_year, decimal_years_since, years_since};
pub use project_filter::{ALL_CATEGORIES, category_tabs, filter_projects, project_categories};
pub use stats::{compute_stats, count_projects, count_technologies};
pub use timeline::{
    CompanyTimeline, TimelineEntry, company_span, company_timeline, education_entry,
    position_entry,
};
