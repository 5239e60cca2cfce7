//! Portfolio content models.
//!
//! These are the read-only records loaded from the content directory:
//! skills, work history, education, projects and recognition. They are
//! never mutated after loading.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EndDate;

/// A single skill within a category.
///
/// Content uses one of two shapes: a star `rating` (1 to 5), or a `level`
/// percentage with the date the skill was picked up. Only the count of
/// skills feeds into statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Display name of the skill.
    pub name: String,
    /// Star rating from 1 to 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    /// Proficiency percentage from 0 to 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    /// When the skill was first used professionally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

/// A named group of skills, e.g. "Frontend".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Display name of the category.
    pub name: String,
    /// Skills in display order.
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// Contents of `skills.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsContent {
    /// Section title.
    #[serde(default)]
    pub title: String,
    /// Section subtitle.
    #[serde(default)]
    pub subtitle: String,
    /// Skill categories in display order.
    #[serde(default)]
    pub categories: Vec<SkillCategory>,
    /// Additional skills listed without a rating; not counted as technologies.
    #[serde(default)]
    pub other_skills: Vec<String>,
}

/// A role held at a company. Consecutive positions model internal promotions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Unique identifier within the company.
    pub id: String,
    /// Job title.
    pub title: String,
    /// The first day in the role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// The last day in the role, or `Present`.
    #[serde(default)]
    pub end_date: EndDate,
    /// Short summary of the role.
    #[serde(default)]
    pub description: String,
    /// Key responsibilities.
    #[serde(default)]
    pub responsibilities: Vec<String>,
    /// Free-text achievements; scanned for award keywords.
    #[serde(default)]
    pub achievements: Vec<String>,
    /// Technologies used in the role.
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Position {
    /// Returns true if the position is dated and still running.
    pub fn is_current(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_present()
    }
}

/// An employer with one or more positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier.
    pub id: String,
    /// Company display name.
    pub company: String,
    /// Kind of engagement, e.g. "Full-time".
    #[serde(rename = "type", default)]
    pub company_type: String,
    /// Where the work was based.
    #[serde(default)]
    pub location: String,
    /// Optional path to a logo image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Positions in display order (most recent first).
    #[serde(default)]
    pub positions: Vec<Position>,
}

/// Contents of `experience.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceContent {
    /// Section title.
    #[serde(default)]
    pub title: String,
    /// Section subtitle.
    #[serde(default)]
    pub subtitle: String,
    /// Companies in display order.
    #[serde(default)]
    pub companies: Vec<Company>,
}

/// A school or university attended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Institution {
    /// Unique identifier.
    pub id: String,
    /// Degree earned, e.g. "Bachelor of Science".
    pub degree: String,
    /// Field of study.
    #[serde(default)]
    pub field: String,
    /// Institution name.
    pub name: String,
    /// Where the institution is.
    #[serde(default)]
    pub location: String,
    /// First day of study.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Last day of study, or `Present`.
    #[serde(default)]
    pub end_date: EndDate,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Honours and achievements.
    #[serde(default)]
    pub achievements: Vec<String>,
    /// Notable coursework.
    #[serde(default)]
    pub coursework: Vec<String>,
}

/// A professional certification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    /// Certification name.
    pub name: String,
    /// Issuing body.
    pub issuer: String,
    /// When it was issued.
    pub date: NaiveDate,
}

/// Contents of `education.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationContent {
    /// Institutions in display order.
    #[serde(default)]
    pub institutions: Vec<Institution>,
    /// Certifications in display order.
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

/// External links for a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    /// Source repository URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Live deployment URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
}

/// A featured project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier.
    pub id: String,
    /// Project title.
    pub title: String,
    /// Category used by the filter, e.g. "Full Stack".
    pub category: String,
    /// One-line description.
    #[serde(default)]
    pub description: String,
    /// Longer description shown in the detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// Technologies used.
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Feature bullet points.
    #[serde(default)]
    pub features: Vec<String>,
    /// External links.
    #[serde(default)]
    pub links: ProjectLinks,
}

/// Contents of `projects.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsContent {
    /// Section title.
    #[serde(default)]
    pub title: String,
    /// Section subtitle.
    #[serde(default)]
    pub subtitle: String,
    /// Featured projects in display order.
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Placeholder text some content files leave in place of a description.
const PLACEHOLDER_DESCRIPTION: &str = "Description";

/// An award or other recognition received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recognition {
    /// Name of the award.
    pub title: String,
    /// When it was received, as display text (e.g. "March 2023").
    #[serde(default)]
    pub date: String,
    /// Awarding organization.
    #[serde(default)]
    pub organization: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional path to an image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Recognition {
    /// Returns the description to show, skipping blanks and the
    /// "Description" placeholder.
    pub fn display_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty() && *d != PLACEHOLDER_DESCRIPTION)
    }
}

/// Contents of `recognition.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionContent {
    /// Section title.
    #[serde(default)]
    pub title: String,
    /// Section subtitle.
    #[serde(default)]
    pub subtitle: String,
    /// Recognition entries in display order.
    #[serde(default, alias = "recognition")]
    pub entries: Vec<Recognition>,
}
