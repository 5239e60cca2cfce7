//! Content loading functionality.
//!
//! This module provides the [`ContentLoader`] type for loading portfolio
//! content from YAML files.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::calculation::compute_stats;
use crate::error::{PortfolioError, PortfolioResult};
use crate::models::{
    Company, EducationContent, EndDate, ExperienceContent, Project, ProjectsContent,
    RecognitionContent, SkillsContent, StatsSnapshot,
};

use super::types::{PortfolioContent, StatsConfig};

/// Loads and provides access to portfolio content.
///
/// The `ContentLoader` reads YAML files from a directory, validates them,
/// and exposes the records the calculations run over.
///
/// # Directory Structure
///
/// ```text
/// content/
/// ├── stats.yaml       # Optional: career start, award keywords, policies
/// ├── skills.yaml      # Skill categories
/// ├── experience.yaml  # Companies and positions
/// ├── education.yaml   # Optional: institutions and certifications
/// ├── projects.yaml    # Featured projects
/// └── recognition.yaml # Optional: awards and recognition
/// ```
///
/// # Example
///
/// ```no_run
/// use portfolio_stats::config::ContentLoader;
/// use chrono::NaiveDate;
///
/// let loader = ContentLoader::load("./content").unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// println!("Years of experience: {}", loader.compute_stats(today).experience_years);
/// ```
#[derive(Debug, Clone)]
pub struct ContentLoader {
    content: PortfolioContent,
}

impl ContentLoader {
    /// Loads content from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ContentLoader` on success, or an error if:
    /// - `skills.yaml`, `experience.yaml` or `projects.yaml` is missing
    /// - Any present file contains invalid YAML
    /// - Any value fails validation (see [`ContentLoader::from_content`])
    pub fn load<P: AsRef<Path>>(path: P) -> PortfolioResult<Self> {
        let path = path.as_ref();

        let stats = Self::load_optional_yaml::<StatsConfig>(&path.join("stats.yaml"))?;
        let skills = Self::load_yaml::<SkillsContent>(&path.join("skills.yaml"))?;
        let experience = Self::load_yaml::<ExperienceContent>(&path.join("experience.yaml"))?;
        let education = Self::load_optional_yaml::<EducationContent>(&path.join("education.yaml"))?;
        let projects = Self::load_yaml::<ProjectsContent>(&path.join("projects.yaml"))?;
        let recognition =
            Self::load_optional_yaml::<RecognitionContent>(&path.join("recognition.yaml"))?;

        let loader = Self::from_content(
            PortfolioContent::new(stats, skills, experience, education, projects)
                .with_recognition(recognition),
        )?;

        debug!(
            path = %path.display(),
            categories = loader.content.skill_categories().len(),
            companies = loader.content.companies().len(),
            institutions = loader.content.institutions().len(),
            projects = loader.content.projects().len(),
            recognition = loader.content.recognition().len(),
            "Loaded portfolio content"
        );

        Ok(loader)
    }

    /// Wraps already-built content after validating it.
    ///
    /// Validation rejects:
    /// - a `project_multiplier` of 0
    /// - an award keyword list with no non-blank entries
    /// - a skill `rating` outside 1..=5 or `level` above 100
    /// - a position or institution that ends before it starts
    /// - a recognition entry with a blank title
    pub fn from_content(content: PortfolioContent) -> PortfolioResult<Self> {
        Self::validate(&content)?;
        Ok(Self { content })
    }

    /// Loads and parses a required YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PortfolioResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PortfolioError::ContentNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, path_str)
    }

    /// Loads an optional YAML file, falling back to the type's default when
    /// the file is absent or empty.
    fn load_optional_yaml<T>(path: &Path) -> PortfolioResult<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        if !path.exists() {
            debug!(path = %path.display(), "Optional content file absent, using defaults");
            return Ok(T::default());
        }

        let path_str = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|_| PortfolioError::ContentNotFound {
            path: path_str.clone(),
        })?;

        if content.trim().is_empty() {
            return Ok(T::default());
        }

        Self::parse_yaml(&content, path_str)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(
        content: &str,
        path_str: String,
    ) -> PortfolioResult<T> {
        serde_yaml::from_str(content).map_err(|e| PortfolioError::ContentParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(content: &PortfolioContent) -> PortfolioResult<()> {
        let stats = content.stats();

        if stats.project_multiplier == 0 {
            return Err(invalid("stats.project_multiplier", "must be at least 1"));
        }

        if stats.award_keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(invalid(
                "stats.award_keywords",
                "must contain at least one keyword",
            ));
        }

        for (ci, category) in content.skill_categories().iter().enumerate() {
            for (si, skill) in category.skills.iter().enumerate() {
                if skill.rating.is_some_and(|r| !(1..=5).contains(&r)) {
                    return Err(invalid(
                        &format!("skills.categories[{}].skills[{}].rating", ci, si),
                        "must be between 1 and 5",
                    ));
                }
                if skill.level.is_some_and(|l| l > 100) {
                    return Err(invalid(
                        &format!("skills.categories[{}].skills[{}].level", ci, si),
                        "must be between 0 and 100",
                    ));
                }
            }
        }

        for company in content.companies() {
            for position in &company.positions {
                if let Some((start, end)) = inverted_span(position.start_date, position.end_date) {
                    return Err(invalid(
                        &format!("experience.{}.{}.end_date", company.id, position.id),
                        &format!("{} is before start date {}", end, start),
                    ));
                }
            }
        }

        for institution in content.institutions() {
            if let Some((start, end)) = inverted_span(institution.start_date, institution.end_date)
            {
                return Err(invalid(
                    &format!("education.{}.end_date", institution.id),
                    &format!("{} is before start date {}", end, start),
                ));
            }
        }

        for (ri, entry) in content.recognition().iter().enumerate() {
            if entry.title.trim().is_empty() {
                return Err(invalid(
                    &format!("recognition.entries[{}].title", ri),
                    "must not be blank",
                ));
            }
        }

        Ok(())
    }

    /// Returns the underlying content.
    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    /// Returns the statistics settings.
    pub fn stats_config(&self) -> &StatsConfig {
        self.content.stats()
    }

    /// Gets a company by its id.
    pub fn get_company(&self, id: &str) -> PortfolioResult<&Company> {
        self.content
            .companies()
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found("company", id))
    }

    /// Gets a project by its id.
    pub fn get_project(&self, id: &str) -> PortfolioResult<&Project> {
        self.content
            .projects()
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("project", id))
    }

    /// Computes the headline statistics over the loaded content.
    pub fn compute_stats(&self, today: NaiveDate) -> StatsSnapshot {
        compute_stats(
            self.content.skill_categories(),
            self.content.companies(),
            self.content.projects(),
            self.content.stats(),
            today,
        )
    }
}

/// Returns the span if it ends before it starts.
fn inverted_span(start: Option<NaiveDate>, end: EndDate) -> Option<(NaiveDate, NaiveDate)> {
    let (start, end) = (start?, end.as_date()?);
    (end < start).then_some((start, end))
}

fn not_found(kind: &str, id: &str) -> PortfolioError {
    PortfolioError::ItemNotFound {
        kind: kind.to_string(),
        id: id.to_string(),
    }
}

fn invalid(field: &str, message: &str) -> PortfolioError {
    PortfolioError::InvalidContent {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Position, Recognition, Skill, SkillCategory};
    use std::path::PathBuf;
    use uuid::Uuid;

    fn content_path() -> &'static str {
        "./content"
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn skills_with(skill: Skill) -> SkillsContent {
        SkillsContent {
            categories: vec![SkillCategory {
                name: "Backend".to_string(),
                skills: vec![skill],
            }],
            ..SkillsContent::default()
        }
    }

    fn make_skill(rating: Option<u8>, level: Option<u8>) -> Skill {
        Skill {
            name: "Rust".to_string(),
            rating,
            level,
            start_date: None,
        }
    }

    fn content_with(stats: StatsConfig, skills: SkillsContent) -> PortfolioContent {
        PortfolioContent::new(
            stats,
            skills,
            ExperienceContent::default(),
            EducationContent::default(),
            ProjectsContent::default(),
        )
    }

    /// Writes `files` into a fresh directory under the system temp dir.
    fn write_content_dir(files: &[(&str, &str)]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("portfolio-stats-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        for (name, body) in files {
            fs::write(dir.join(name), body).unwrap();
        }
        dir
    }

    const MINIMAL_SKILLS: &str = "categories: []\n";
    const MINIMAL_PROJECTS: &str = "projects: []\n";

    #[test]
    fn test_load_valid_content() {
        let result = ContentLoader::load(content_path());
        assert!(result.is_ok(), "Failed to load content: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.content().skill_categories().len(), 4);
        assert_eq!(loader.content().companies().len(), 2);
        assert_eq!(loader.content().projects().len(), 5);
        assert_eq!(loader.content().institutions().len(), 1);
    }

    #[test]
    fn test_loaded_stats_config() {
        let loader = ContentLoader::load(content_path()).unwrap();
        let stats = loader.stats_config();
        assert_eq!(stats.career_start_date, make_date("2018-05-01"));
        assert_eq!(stats.project_multiplier, 1);
    }

    #[test]
    fn test_get_company_and_project() {
        let loader = ContentLoader::load(content_path()).unwrap();
        assert_eq!(loader.get_company("nimbus").unwrap().company, "Nimbus Labs");
        assert_eq!(loader.get_project("taskboard").unwrap().category, "Full Stack");
    }

    #[test]
    fn test_get_unknown_project_returns_error() {
        let loader = ContentLoader::load(content_path()).unwrap();
        match loader.get_project("unknown") {
            Err(PortfolioError::ItemNotFound { kind, id }) => {
                assert_eq!(kind, "project");
                assert_eq!(id, "unknown");
            }
            other => panic!("Expected ItemNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_compute_stats_over_loaded_content() {
        let loader = ContentLoader::load(content_path()).unwrap();
        let snapshot = loader.compute_stats(make_date("2025-06-15"));
        assert_eq!(snapshot.experience_years, 7);
        assert_eq!(snapshot.technology_count, 22);
        assert_eq!(snapshot.project_count, 5);
        assert_eq!(snapshot.award_count, 5);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ContentLoader::load("/nonexistent/path") {
            Err(PortfolioError::ContentNotFound { path }) => {
                assert!(path.contains("skills.yaml"));
            }
            other => panic!("Expected ContentNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_reports_path() {
        let result: PortfolioResult<SkillsContent> =
            ContentLoader::parse_yaml("categories: [unclosed", "skills.yaml".to_string());
        match result {
            Err(PortfolioError::ContentParseError { path, .. }) => assert_eq!(path, "skills.yaml"),
            other => panic!("Expected ContentParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_optional_file_absent_uses_default() {
        let stats: StatsConfig =
            ContentLoader::load_optional_yaml(Path::new("/nonexistent/stats.yaml")).unwrap();
        assert_eq!(stats, StatsConfig::default());
    }

    #[test]
    fn test_zero_multiplier_rejected() {
        let stats = StatsConfig {
            project_multiplier: 0,
            ..StatsConfig::default()
        };
        match ContentLoader::from_content(content_with(stats, SkillsContent::default())) {
            Err(PortfolioError::InvalidContent { field, .. }) => {
                assert_eq!(field, "stats.project_multiplier");
            }
            other => panic!("Expected InvalidContent error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_keywords_rejected() {
        let stats = StatsConfig {
            award_keywords: vec!["  ".to_string()],
            ..StatsConfig::default()
        };
        assert!(ContentLoader::from_content(content_with(stats, SkillsContent::default())).is_err());
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let content = content_with(StatsConfig::default(), skills_with(make_skill(Some(6), None)));
        match ContentLoader::from_content(content) {
            Err(PortfolioError::InvalidContent { field, .. }) => {
                assert_eq!(field, "skills.categories[0].skills[0].rating");
            }
            other => panic!("Expected InvalidContent error, got {:?}", other),
        }
    }

    #[test]
    fn test_level_out_of_range_rejected() {
        let content = content_with(StatsConfig::default(), skills_with(make_skill(None, Some(120))));
        assert!(ContentLoader::from_content(content).is_err());
    }

    #[test]
    fn test_valid_skill_shapes_accepted() {
        let content = content_with(StatsConfig::default(), skills_with(make_skill(Some(5), None)));
        assert!(ContentLoader::from_content(content).is_ok());

        let content = content_with(StatsConfig::default(), skills_with(make_skill(None, Some(100))));
        assert!(ContentLoader::from_content(content).is_ok());
    }

    #[test]
    fn test_position_ending_before_start_rejected() {
        let experience = ExperienceContent {
            companies: vec![Company {
                id: "acme".to_string(),
                company: "Acme".to_string(),
                company_type: String::new(),
                location: String::new(),
                logo: None,
                positions: vec![Position {
                    id: "eng".to_string(),
                    title: "Engineer".to_string(),
                    start_date: Some(make_date("2022-01-01")),
                    end_date: EndDate::Date(make_date("2021-01-01")),
                    description: String::new(),
                    responsibilities: vec![],
                    achievements: vec![],
                    technologies: vec![],
                }],
            }],
            ..ExperienceContent::default()
        };
        let content = PortfolioContent::new(
            StatsConfig::default(),
            SkillsContent::default(),
            experience,
            EducationContent::default(),
            ProjectsContent::default(),
        );
        match ContentLoader::from_content(content) {
            Err(PortfolioError::InvalidContent { field, .. }) => {
                assert_eq!(field, "experience.acme.eng.end_date");
            }
            other => panic!("Expected InvalidContent error, got {:?}", other),
        }
    }

    #[test]
    fn test_shipped_recognition_loaded() {
        let loader = ContentLoader::load(content_path()).unwrap();
        let recognition = loader.content().recognition();
        assert_eq!(recognition.len(), 3);
        assert_eq!(recognition[0].title, "Spot Award");
    }

    #[test]
    fn test_null_and_present_end_dates_load_as_ongoing() {
        let experience = r#"
companies:
  - id: acme
    company: Acme
    positions:
      - id: lead
        title: Lead
        start_date: 2022-01-01
        end_date: null
      - id: senior
        title: Senior
        start_date: 2021-01-01
        end_date: present
      - id: engineer
        title: Engineer
        start_date: 2020-01-01
        end_date: 2020-12-31
"#;
        let dir = write_content_dir(&[
            ("skills.yaml", MINIMAL_SKILLS),
            ("experience.yaml", experience),
            ("projects.yaml", MINIMAL_PROJECTS),
        ]);

        let loader = ContentLoader::load(&dir).unwrap();
        let positions = &loader.get_company("acme").unwrap().positions;
        assert_eq!(positions[0].end_date, EndDate::Present);
        assert_eq!(positions[1].end_date, EndDate::Present);
        assert!(positions[1].is_current());
        assert_eq!(positions[2].end_date, EndDate::Date(make_date("2020-12-31")));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_recognition_file_is_optional() {
        let dir = write_content_dir(&[
            ("skills.yaml", MINIMAL_SKILLS),
            ("experience.yaml", "companies: []\n"),
            ("projects.yaml", MINIMAL_PROJECTS),
        ]);

        let loader = ContentLoader::load(&dir).unwrap();
        assert!(loader.content().recognition().is_empty());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_blank_recognition_title_rejected() {
        let recognition = RecognitionContent {
            entries: vec![Recognition {
                title: "  ".to_string(),
                date: "2023".to_string(),
                organization: "Acme".to_string(),
                description: None,
                image: None,
            }],
            ..RecognitionContent::default()
        };
        let content =
            content_with(StatsConfig::default(), SkillsContent::default()).with_recognition(recognition);
        match ContentLoader::from_content(content) {
            Err(PortfolioError::InvalidContent { field, .. }) => {
                assert_eq!(field, "recognition.entries[0].title");
            }
            other => panic!("Expected InvalidContent error, got {:?}", other),
        }
    }
}
