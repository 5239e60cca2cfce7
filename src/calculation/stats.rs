//! Headline statistics aggregation.
//!
//! Composes the experience-years calculation with counts over the loaded
//! content into a [`StatsSnapshot`]. Nothing is cached: every call
//! recomputes from its inputs and `today`.

use chrono::NaiveDate;

use crate::config::StatsConfig;
use crate::models::{Company, Project, SkillCategory, StatsSnapshot};

use super::{AwardClassifier, years_since};

/// Computes the headline statistics.
///
/// # Arguments
///
/// * `skill_categories` - Skill categories; every listed skill counts as a technology
/// * `companies` - Work history; achievements are scanned for award keywords
/// * `projects` - Featured projects
/// * `config` - Career start date, award keywords and policies
/// * `today` - The evaluation date
///
/// # Example
///
/// ```
/// use portfolio_stats::calculation::compute_stats;
/// use portfolio_stats::config::StatsConfig;
/// use portfolio_stats::models::{Skill, SkillCategory};
/// use chrono::NaiveDate;
///
/// let skill = |name: &str| Skill { name: name.to_string(), rating: Some(4), level: None, start_date: None };
/// let categories = vec![
///     SkillCategory { name: "Frontend".to_string(), skills: vec![skill("React"), skill("CSS")] },
///     SkillCategory { name: "Backend".to_string(), skills: vec![skill("Rust")] },
/// ];
/// let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
///
/// let snapshot = compute_stats(&categories, &[], &[], &StatsConfig::default(), today);
/// assert_eq!(snapshot.experience_years, 6);
/// assert_eq!(snapshot.technology_count, 3);
/// assert_eq!(snapshot.award_count, 0);
/// ```
pub fn compute_stats(
    skill_categories: &[SkillCategory],
    companies: &[Company],
    projects: &[Project],
    config: &StatsConfig,
    today: NaiveDate,
) -> StatsSnapshot {
    let classifier = AwardClassifier::new(&config.award_keywords, config.award_counting);

    StatsSnapshot {
        experience_years: years_since(config.career_start_date, today),
        project_count: count_projects(projects, config.project_multiplier),
        technology_count: count_technologies(skill_categories),
        award_count: classifier.count_awards(companies),
    }
}

/// Returns the total number of skills across all categories.
pub fn count_technologies(skill_categories: &[SkillCategory]) -> usize {
    skill_categories.iter().map(|c| c.skills.len()).sum()
}

/// Returns the project count scaled by `multiplier`.
///
/// A multiplier of 1 reports the featured projects as-is; larger values
/// estimate a total from the featured subset.
pub fn count_projects(projects: &[Project], multiplier: u32) -> usize {
    projects.len().saturating_mul(multiplier as usize)
}
