//! HTTP request handlers for the Vacation Ledger API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::accounting::{ProposedChange, events_in_year, summarize_year, validate_proposed_event};
use crate::error::EngineResult;
use crate::models::{Event, validate_allowance};

use super::request::{SummaryRequest, ValidationRequest};
use super::response::{
    ApiError, ApiErrorResponse, HolidayEntry, HolidaysResponse, SummaryResponse,
    ValidationResponse,
};
use super::state::AppState;

/// Id given to a candidate event that is not an edit of an existing one.
const CANDIDATE_EVENT_ID: &str = "candidate";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/vacation/summary", post(summary_handler))
        .route("/vacation/validate", post(validate_handler))
        .route("/holidays/:year", get(holidays_handler))
        .with_state(state)
}

/// Handler for POST /vacation/summary.
///
/// Summarizes the submitted events for one year against the allowance.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let allowance = match resolve_allowance(&state, request.year, request.allowance) {
        Ok(allowance) => allowance,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected allowance");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let events: Vec<Event> = request.events.into_iter().map(Into::into).collect();
    if let Err(response) = check_event_spans(correlation_id, &events) {
        return response;
    }

    let start_time = Instant::now();
    let summary = summarize_year(&events, request.year, allowance, state.config().calendar());
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        year = summary.year,
        events_count = events.len(),
        used_days = %summary.used_days,
        remaining_days = %summary.remaining_days,
        duration_us = duration.as_micros(),
        "Summary completed successfully"
    );

    json_response(
        StatusCode::OK,
        SummaryResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            summary,
        },
    )
}

/// Handler for POST /vacation/validate.
///
/// Predicts the effect of adding or editing an event. Existing events are
/// narrowed to the requested year before the comparison.
async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let allowance = match resolve_allowance(&state, request.year, request.allowance) {
        Ok(allowance) => allowance,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected allowance");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    if request.candidate.to < request.candidate.from {
        warn!(
            correlation_id = %correlation_id,
            from = %request.candidate.from,
            to = %request.candidate.to,
            "Candidate ends before it starts"
        );
        return ApiErrorResponse::bad_request(ApiError::validation_error(
            "candidate.to must not be before candidate.from",
        ))
        .into_response();
    }

    let (candidate_id, change) = match request.editing_event_id.as_deref() {
        Some(id) => (id, ProposedChange::Edit { original_id: id }),
        None => (CANDIDATE_EVENT_ID, ProposedChange::Add),
    };
    let candidate = Event::from_new(candidate_id, request.candidate);

    let events: Vec<Event> = request.events.into_iter().map(Into::into).collect();
    if let Err(response) =
        check_event_spans(correlation_id, events.iter().chain(std::iter::once(&candidate)))
    {
        return response;
    }
    let existing: Vec<Event> = events_in_year(&events, request.year)
        .into_iter()
        .cloned()
        .collect();

    let start_time = Instant::now();
    let outcome = validate_proposed_event(
        &existing,
        allowance,
        &candidate,
        change,
        state.config().calendar(),
    );
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        year = request.year,
        existing_count = existing.len(),
        incremental_days = %outcome.incremental_days,
        total_after = %outcome.total_after,
        will_exceed_limit = outcome.will_exceed_limit(),
        duration_us = duration.as_micros(),
        "Validation completed successfully"
    );

    json_response(
        StatusCode::OK,
        ValidationResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            year: request.year,
            allowance,
            will_exceed_limit: outcome.will_exceed_limit(),
            outcome,
        },
    )
}

/// Handler for GET /holidays/:year.
///
/// Lists the public holidays of the configured calendar for one year.
async fn holidays_handler(
    State(state): State<AppState>,
    year: Result<Path<i32>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let year = match year {
        Ok(Path(year)) => year,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid year in path"
            );
            return ApiErrorResponse::bad_request(ApiError::with_details(
                "INVALID_YEAR",
                "Year must be an integer",
                rejection.body_text(),
            ))
            .into_response();
        }
    };
    info!(correlation_id = %correlation_id, year, "Processing holidays request");

    let calendar = state.config().calendar();
    match calendar.checked_holidays_in_year(year) {
        Ok(holidays) => {
            let holidays: Vec<HolidayEntry> = holidays
                .into_iter()
                .map(|h| {
                    let weekday = !calendar.weekend().is_weekend(h.date);
                    HolidayEntry::new(h, weekday)
                })
                .collect();
            info!(
                correlation_id = %correlation_id,
                year,
                holidays_count = holidays.len(),
                "Holidays listed successfully"
            );
            json_response(
                StatusCode::OK,
                HolidaysResponse {
                    year,
                    calendar: calendar.name().to_string(),
                    holidays,
                },
            )
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Holiday lookup failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Uses the requested allowance if present, else the configured one for `year`.
fn resolve_allowance(
    state: &AppState,
    year: i32,
    requested: Option<Decimal>,
) -> EngineResult<Decimal> {
    match requested {
        Some(days) => {
            validate_allowance(days)?;
            Ok(days)
        }
        None => Ok(state.config().allowance_for_year(year)),
    }
}

/// Maps a JSON body rejection to a `400` error body.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed serde error
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
    ApiErrorResponse::bad_request(error).into_response()
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

/// Rejects the request if any event spans unsupported years or too many days.
fn check_event_spans<'a>(
    correlation_id: Uuid,
    events: impl IntoIterator<Item = &'a Event>,
) -> Result<(), Response> {
    events
        .into_iter()
        .try_for_each(Event::validate_span)
        .map_err(|err| {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected event span");
            ApiErrorResponse::from(err).into_response()
        })
}
