//! HTTP request handlers for the portfolio stats API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    ALL_CATEGORIES, calculate_duration, calculate_duration_verbose, carousel_window,
    category_tabs, company_timeline, decimal_years_since, education_entry, filter_projects,
    format_date_range,
};
use crate::models::{DurationStyle, Recognition};

use super::request::{
    DateRangeRequest, DurationRequest, ProjectsQuery, RecognitionQuery, parse_span,
};
use super::response::{
    ApiError, ApiErrorResponse, DateRangeResponse, EducationResponse, ExperienceResponse,
    ProjectsResponse, RecognitionResponse, StatsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/stats", get(stats_handler))
        .route("/experience", get(experience_handler))
        .route("/experience/:id", get(company_handler))
        .route("/education", get(education_handler))
        .route("/projects", get(projects_handler))
        .route("/projects/:id", get(project_handler))
        .route("/recognition", get(recognition_handler))
        .route("/duration", post(duration_handler))
        .route("/date-range", post(date_range_handler))
        .with_state(state)
}

/// Serializes `body` as a JSON response with the given status.
fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON body rejection to a `400` response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    error_response(ApiErrorResponse::bad_request(error))
}

/// Handler for GET /stats.
///
/// Returns the headline counts, their display labels, and the half-year
/// rounded experience figure.
async fn stats_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let start_time = Instant::now();
    let today = state.today();

    let content = state.content();
    let snapshot = content.compute_stats(today);
    let decimal_years = decimal_years_since(content.stats_config().career_start_date, today);

    info!(
        correlation_id = %correlation_id,
        today = %today,
        experience_years = snapshot.experience_years,
        award_count = snapshot.award_count,
        duration_us = start_time.elapsed().as_micros(),
        "Stats computed"
    );

    json_response(
        StatusCode::OK,
        StatsResponse {
            snapshot,
            stats: snapshot.stats(),
            decimal_years,
        },
    )
}

/// Handler for GET /experience.
async fn experience_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let today = state.today();
    let experience = state.content().content().experience();

    let companies: Vec<_> = experience
        .companies
        .iter()
        .map(|company| company_timeline(company, today))
        .collect();

    info!(
        correlation_id = %correlation_id,
        companies = companies.len(),
        "Experience timeline built"
    );

    json_response(
        StatusCode::OK,
        ExperienceResponse {
            title: experience.title.clone(),
            subtitle: experience.subtitle.clone(),
            companies,
        },
    )
}

/// Handler for GET /experience/:id.
async fn company_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.content().get_company(&id) {
        Ok(company) => {
            info!(correlation_id = %correlation_id, company_id = %id, "Company timeline built");
            json_response(StatusCode::OK, company_timeline(company, state.today()))
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Company lookup failed");
            error_response(err.into())
        }
    }
}

/// Handler for GET /education.
async fn education_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let today = state.today();
    let content = state.content().content();

    let institutions: Vec<_> = content
        .institutions()
        .iter()
        .filter_map(|institution| education_entry(institution, today))
        .collect();

    info!(
        correlation_id = %correlation_id,
        institutions = institutions.len(),
        "Education timeline built"
    );

    json_response(
        StatusCode::OK,
        EducationResponse {
            institutions,
            certifications: content.certifications().to_vec(),
        },
    )
}

/// Handler for GET /projects.
///
/// An absent or blank `category`, or "All", returns every project.
async fn projects_handler(
    State(state): State<AppState>,
    Query(query): Query<ProjectsQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let projects = state.content().content().projects();

    let category = query
        .category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| ALL_CATEGORIES.to_string());

    let selected: Vec<_> = filter_projects(projects, &category)
        .into_iter()
        .cloned()
        .collect();

    let categories: Vec<String> = category_tabs(projects)
        .into_iter()
        .map(str::to_string)
        .collect();

    info!(
        correlation_id = %correlation_id,
        category = %category,
        matched = selected.len(),
        "Projects filtered"
    );

    json_response(
        StatusCode::OK,
        ProjectsResponse {
            category,
            categories,
            projects: selected,
        },
    )
}

/// Handler for GET /projects/:id.
async fn project_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.content().get_project(&id) {
        Ok(project) => {
            info!(correlation_id = %correlation_id, project_id = %id, "Project found");
            json_response(StatusCode::OK, project.clone())
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Project lookup failed");
            error_response(err.into())
        }
    }
}

/// Handler for GET /recognition.
///
/// `index` selects the carousel entry and wraps around the ends.
async fn recognition_handler(
    State(state): State<AppState>,
    Query(query): Query<RecognitionQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let section = state.content().content().recognition_section();

    let entries: Vec<Recognition> = section
        .entries
        .iter()
        .map(|entry| Recognition {
            description: entry.display_description().map(str::to_string),
            ..entry.clone()
        })
        .collect();
    let window = carousel_window(entries.len(), query.index.unwrap_or(0));

    info!(
        correlation_id = %correlation_id,
        entries = entries.len(),
        current = ?window.map(|w| w.current),
        "Recognition listed"
    );

    json_response(
        StatusCode::OK,
        RecognitionResponse {
            title: section.title.clone(),
            subtitle: section.subtitle.clone(),
            entries,
            window,
        },
    )
}

/// Handler for POST /duration.
///
/// Accepts a start date and optional end date and returns the duration in
/// the requested label style.
async fn duration_handler(
    State(state): State<AppState>,
    payload: Result<Json<DurationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing duration request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let (start, end) = match parse_span(&request.start_date, request.end_date.as_deref()) {
        Ok(span) => span,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected duration dates");
            return error_response(err.into());
        }
    };

    let today = state.today();
    let result = match request.style {
        DurationStyle::Compact => calculate_duration(start, end, today),
        DurationStyle::Verbose => calculate_duration_verbose(start, end, today),
    };

    info!(
        correlation_id = %correlation_id,
        start = %start,
        end = %end,
        label = %result.label,
        "Duration calculated"
    );

    json_response(StatusCode::OK, result)
}

/// Handler for POST /date-range.
async fn date_range_handler(
    payload: Result<Json<DateRangeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing date range request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match parse_span(&request.start_date, request.end_date.as_deref()) {
        Ok((start, end)) => {
            let label = format_date_range(start, end.as_date());
            info!(correlation_id = %correlation_id, label = %label, "Date range formatted");
            json_response(StatusCode::OK, DateRangeResponse { label })
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected date range dates");
            error_response(err.into())
        }
    }
}
