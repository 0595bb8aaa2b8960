//! Response types for the Vacation Ledger API.
//!
//! This module defines the success payloads, the error response structures
//! and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::PublicHoliday;
use crate::error::EngineError;
use crate::models::{ValidationOutcome, VacationSummary};

/// Response body for `/vacation/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The yearly summary.
    #[serde(flatten)]
    pub summary: VacationSummary,
}

/// Response body for `/vacation/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The year the existing events were filtered to.
    pub year: i32,
    /// The allowance the candidate was checked against.
    pub allowance: Decimal,
    /// Whether saving the candidate would exceed the allowance.
    pub will_exceed_limit: bool,
    /// The what-if figures.
    #[serde(flatten)]
    pub outcome: ValidationOutcome,
}

/// Response body for `/holidays/{year}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidaysResponse {
    /// The requested year.
    pub year: i32,
    /// Name of the calendar the holidays come from.
    pub calendar: String,
    /// Public holidays in date order.
    pub holidays: Vec<HolidayEntry>,
}

/// A single public holiday in a [`HolidaysResponse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
    /// Whether the holiday falls on a weekday and therefore saves a vacation day.
    pub on_working_weekday: bool,
}

impl HolidayEntry {
    /// Builds an entry from a holiday occurrence.
    pub fn new(holiday: PublicHoliday, on_working_weekday: bool) -> Self {
        Self {
            date: holiday.date,
            name: holiday.name,
            on_working_weekday,
        }
    }
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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
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
    /// A `400 Bad Request` with the given body.
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

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidHolidayRule { name, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid holiday rule '{}'", name),
                    message,
                ),
            },
            EngineError::InvalidAllowance { days, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_ALLOWANCE",
                    format!("Invalid vacation allowance: {}", days),
                    message,
                ),
            },
            EngineError::InvalidYear { year } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_YEAR",
                    format!("Unsupported calendar year: {}", year),
                    "Years from 1583 to 9999 are supported",
                ),
            },
            EngineError::InvalidEvent { id, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid event '{}'", id),
                    message,
                ),
            },
            // Ledger errors only arise for library callers holding an EventLedger
            EngineError::EventNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("EVENT_NOT_FOUND", format!("Event not found: {}", id)),
            },
            EngineError::DuplicateEvent { id } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("DUPLICATE_EVENT", format!("Duplicate event id: {}", id)),
            },
        }
    }
}
