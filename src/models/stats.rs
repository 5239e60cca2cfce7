//! Headline statistics models.

use serde::{Deserialize, Serialize};

/// How achievements matching several award keywords are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardCounting {
    /// An achievement counts once if any keyword matches.
    #[default]
    PerAchievement,
    /// Every matching keyword in an achievement counts separately.
    PerKeyword,
}

/// A labelled statistic ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    /// Human-readable label, e.g. "Years of Experience".
    pub label: String,
    /// Display value, e.g. "7+".
    pub value: String,
}

/// The four headline numbers shown on the about section.
///
/// Recomputed from content and the current date on every call; never cached.
///
/// # Example
///
/// ```
/// use portfolio_stats::models::StatsSnapshot;
///
/// let snapshot = StatsSnapshot {
///     experience_years: 7,
///     project_count: 5,
///     technology_count: 22,
///     award_count: 5,
/// };
/// assert_eq!(snapshot.stats()[0].value, "7+");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Whole years since the career start date.
    pub experience_years: u32,
    /// Number of projects, after the configured multiplier.
    pub project_count: usize,
    /// Number of skills across all categories.
    pub technology_count: usize,
    /// Number of achievements classified as awards.
    pub award_count: usize,
}

impl StatsSnapshot {
    /// Returns the snapshot as labelled display values, in display order.
    pub fn stats(&self) -> Vec<Stat> {
        vec![
            stat("Years of Experience", self.experience_years as usize),
            stat("Projects Completed", self.project_count),
            stat("Technologies Mastered", self.technology_count),
            stat("Awards Received", self.award_count),
        ]
    }
}

/// Renders a count as a display value with a trailing `+`.
pub fn plus_label(count: impl std::fmt::Display) -> String {
    format!("{}+", count)
}

fn stat(label: &str, count: usize) -> Stat {
    Stat {
        label: label.to_string(),
        value: plus_label(count),
    }
}
