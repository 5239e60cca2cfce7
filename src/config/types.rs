//! Configuration and content aggregate types.
//!
//! This module contains the strongly-typed structures deserialized from the
//! content directory's YAML files.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::DEFAULT_AWARD_KEYWORDS;
use crate::models::{
    AwardCounting, Certification, Company, EducationContent, ExperienceContent, Institution,
    Project, ProjectsContent, Recognition, RecognitionContent, SkillCategory, SkillsContent,
};

fn default_career_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 5, 1).expect("Valid career start date")
}

fn default_award_keywords() -> Vec<String> {
    DEFAULT_AWARD_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

fn default_project_multiplier() -> u32 {
    1
}

/// Statistics settings from `stats.yaml`.
///
/// Every field has a default, so an empty file (or no file) is valid.
///
/// # Example
///
/// ```
/// use portfolio_stats::config::StatsConfig;
///
/// let config: StatsConfig = serde_yaml::from_str("project_multiplier: 8").unwrap();
/// assert_eq!(config.project_multiplier, 8);
/// assert_eq!(config.award_keywords.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// The date experience is counted from.
    #[serde(default = "default_career_start_date")]
    pub career_start_date: NaiveDate,
    /// Substrings that mark an achievement as an award.
    #[serde(default = "default_award_keywords")]
    pub award_keywords: Vec<String>,
    /// How achievements matching several keywords are counted.
    #[serde(default)]
    pub award_counting: AwardCounting,
    /// Factor applied to the featured project count.
    #[serde(default = "default_project_multiplier")]
    pub project_multiplier: u32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            career_start_date: default_career_start_date(),
            award_keywords: default_award_keywords(),
            award_counting: AwardCounting::default(),
            project_multiplier: default_project_multiplier(),
        }
    }
}

/// All content loaded from a content directory.
#[derive(Debug, Clone, Default)]
pub struct PortfolioContent {
    stats: StatsConfig,
    skills: SkillsContent,
    experience: ExperienceContent,
    education: EducationContent,
    projects: ProjectsContent,
    recognition: RecognitionContent,
}

impl PortfolioContent {
    /// Creates the aggregate from its component parts.
    pub fn new(
        stats: StatsConfig,
        skills: SkillsContent,
        experience: ExperienceContent,
        education: EducationContent,
        projects: ProjectsContent,
    ) -> Self {
        Self {
            stats,
            skills,
            experience,
            education,
            projects,
            recognition: RecognitionContent::default(),
        }
    }

    /// Attaches the recognition section.
    pub fn with_recognition(mut self, recognition: RecognitionContent) -> Self {
        self.recognition = recognition;
        self
    }

    /// Returns the statistics settings.
    pub fn stats(&self) -> &StatsConfig {
        &self.stats
    }

    /// Returns the skills section.
    pub fn skills(&self) -> &SkillsContent {
        &self.skills
    }

    /// Returns the skill categories.
    pub fn skill_categories(&self) -> &[SkillCategory] {
        &self.skills.categories
    }

    /// Returns the experience section.
    pub fn experience(&self) -> &ExperienceContent {
        &self.experience
    }

    /// Returns the companies in display order.
    pub fn companies(&self) -> &[Company] {
        &self.experience.companies
    }

    /// Returns the institutions in display order.
    pub fn institutions(&self) -> &[Institution] {
        &self.education.institutions
    }

    /// Returns the certifications in display order.
    pub fn certifications(&self) -> &[Certification] {
        &self.education.certifications
    }

    /// Returns the projects section.
    pub fn projects_section(&self) -> &ProjectsContent {
        &self.projects
    }

    /// Returns the featured projects.
    pub fn projects(&self) -> &[Project] {
        &self.projects.projects
    }

    /// Returns the recognition section.
    pub fn recognition_section(&self) -> &RecognitionContent {
        &self.recognition
    }

    /// Returns the recognition entries in display order.
    pub fn recognition(&self) -> &[Recognition] {
        &self.recognition.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_config_defaults() {
        let config = StatsConfig::default();
        assert_eq!(
            config.career_start_date,
            NaiveDate::from_ymd_opt(2018, 5, 1).unwrap()
        );
        assert_eq!(
            config.award_keywords,
            vec!["award", "recognized", "stars", "orienter"]
        );
        assert_eq!(config.award_counting, AwardCounting::PerAchievement);
        assert_eq!(config.project_multiplier, 1);
    }

    #[test]
    fn test_empty_yaml_yields_defaults() {
        let config: StatsConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, StatsConfig::default());
    }

    #[test]
    fn test_stats_config_overrides() {
        let yaml = r#"
career_start_date: 2016-09-01
award_keywords: [trophy, medal]
award_counting: per_keyword
project_multiplier: 8
"#;
        let config: StatsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.career_start_date,
            NaiveDate::from_ymd_opt(2016, 9, 1).unwrap()
        );
        assert_eq!(config.award_keywords, vec!["trophy", "medal"]);
        assert_eq!(config.award_counting, AwardCounting::PerKeyword);
        assert_eq!(config.project_multiplier, 8);
    }

    #[test]
    fn test_unknown_counting_policy_is_rejected() {
        let result: Result<StatsConfig, _> = serde_yaml::from_str("award_counting: sometimes");
        assert!(result.is_err());
    }
}
