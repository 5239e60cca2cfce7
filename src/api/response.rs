//! Response types for the portfolio stats API.
//!
//! This module defines the success payloads, the error response structures,
//! and the mapping from [`PortfolioError`] to HTTP errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{CarouselWindow, CompanyTimeline, TimelineEntry};
use crate::error::PortfolioError;
use crate::models::{Certification, Project, Recognition, Stat, StatsSnapshot};

/// Response body for `GET /stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    /// The raw counts.
    pub snapshot: StatsSnapshot,
    /// The counts as labelled display stats.
    pub stats: Vec<Stat>,
    /// Years since the career start, rounded to the nearest half year.
    pub decimal_years: Decimal,
}

/// Response body for `GET /experience`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceResponse {
    /// Section title.
    pub title: String,
    /// Section subtitle.
    pub subtitle: String,
    /// One timeline per company, in content order.
    pub companies: Vec<CompanyTimeline>,
}

/// Response body for `GET /education`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationResponse {
    /// Timeline entries for institutions with a start date.
    pub institutions: Vec<TimelineEntry>,
    /// Certifications, in content order.
    pub certifications: Vec<Certification>,
}

/// Response body for `GET /projects`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsResponse {
    /// The category that was applied.
    pub category: String,
    /// Every distinct category, prefixed with "All".
    pub categories: Vec<String>,
    /// Projects in the selected category.
    pub projects: Vec<Project>,
}

/// Response body for `GET /recognition`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionResponse {
    /// Section title.
    pub title: String,
    /// Section subtitle.
    pub subtitle: String,
    /// Entries in display order, with placeholder descriptions removed.
    pub entries: Vec<Recognition>,
    /// Carousel positions around the selected entry; absent when empty.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub window: Option<CarouselWindow>,
}

/// Response body for `POST /date-range`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRangeResponse {
    /// The formatted range, e.g. "Oct 2021 - Present".
    pub label: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid date error response.
    pub fn invalid_date(value: &str, message: impl Into<String>) -> Self {
        Self::with_details(
            "INVALID_DATE",
            format!("Invalid date '{}'", value),
            message,
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PortfolioError> for ApiErrorResponse {
    fn from(error: PortfolioError) -> Self {
        match error {
            PortfolioError::InvalidDate { value, message } => {
                ApiErrorResponse::bad_request(ApiError::invalid_date(&value, message))
            }
            PortfolioError::ItemNotFound { kind, id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "NOT_FOUND",
                    format!("No {} found with id '{}'", kind, id),
                ),
            },
            PortfolioError::ContentNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONTENT_ERROR",
                    "Content error",
                    format!("Content file not found: {}", path),
                ),
            },
            PortfolioError::ContentParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONTENT_ERROR",
                    "Content parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            PortfolioError::InvalidContent { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONTENT_ERROR",
                    format!("Invalid content field '{}'", field),
                    message,
                ),
            },
            PortfolioError::InvalidSetting { name, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid setting '{}'", name),
                    message,
                ),
            },
        }
    }
}
