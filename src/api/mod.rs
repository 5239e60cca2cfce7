//! HTTP API module for the portfolio stats engine.
//!
//! This module exposes the headline statistics, timelines, project filter,
//! recognition carousel and date helpers as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DateRangeRequest, DurationRequest, ProjectsQuery, RecognitionQuery};
pub use response::{
    ApiError, ApiErrorResponse, DateRangeResponse, EducationResponse, ExperienceResponse,
    ProjectsResponse, RecognitionResponse, StatsResponse,
};
pub use state::AppState;
