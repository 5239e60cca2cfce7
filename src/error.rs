//! Error types for the portfolio stats engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while loading content or parsing dates.

use thiserror::Error;

/// The main error type for the portfolio stats engine.
///
/// The calculation functions themselves are infallible; errors come from
/// loading content files, validating them, and parsing user-supplied dates.
///
/// # Example
///
/// ```
/// use portfolio_stats::error::PortfolioError;
///
/// let error = PortfolioError::ContentNotFound {
///     path: "/missing/skills.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Content file not found: /missing/skills.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// A content file was not found at the specified path.
    #[error("Content file not found: {path}")]
    ContentNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A content file could not be parsed.
    #[error("Failed to parse content file '{path}': {message}")]
    ContentParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A date string was not a valid ISO `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The rejected input.
        value: String,
        /// A description of why it was rejected.
        message: String,
    },

    /// Loaded content parsed but contained an out-of-range or inconsistent value.
    #[error("Invalid content field '{field}': {message}")]
    InvalidContent {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No content item with the requested id exists.
    #[error("No {kind} found with id '{id}'")]
    ItemNotFound {
        /// The kind of item, e.g. "project".
        kind: String,
        /// The id that was requested.
        id: String,
    },

    /// A server setting read from the environment was invalid.
    #[error("Invalid setting '{name}': {message}")]
    InvalidSetting {
        /// The environment variable name.
        name: String,
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return PortfolioError.
pub type PortfolioResult<T> = Result<T, PortfolioError>;
