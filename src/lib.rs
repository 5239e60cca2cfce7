//! Portfolio Stats Engine
//!
//! This crate provides the date arithmetic and headline statistics behind a
//! personal portfolio site: employment durations, years of experience, date
//! range labels, and counts of technologies, projects and awards.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod clock;
pub mod config;
pub mod error;
pub mod localization;
pub mod models;
