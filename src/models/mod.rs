//! Core data models for the portfolio stats engine.
//!
//! This module contains the content records, date helpers and result types
//! used throughout the engine.

mod content;
mod date;
mod duration;
mod stats;

pub use content::{
    Certification, Company, EducationContent, ExperienceContent, Institution, Position, Project,
    ProjectLinks, ProjectsContent, Recognition, RecognitionContent, Skill, SkillCategory,
    SkillsContent,
};
pub use date::{EndDate, ISO_DATE_FORMAT, PRESENT, parse_iso_date};
pub use duration::{DurationResult, DurationStyle};
pub use stats::{AwardCounting, Stat, StatsSnapshot, plus_label};
