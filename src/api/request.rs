//! Request types for the Vacation Ledger API.
//!
//! This module defines the JSON request structures for the `/vacation/summary`
//! and `/vacation/validate` endpoints. Both are stateless: the caller sends
//! the full event snapshot with every request.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DayFraction, Event, NewEvent};

/// Request body for the `/vacation/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The calendar year to summarize.
    pub year: i32,
    /// Allowance override; the configured allowance for the year is used when absent.
    #[serde(default)]
    pub allowance: Option<Decimal>,
    /// The full set of recorded events.
    #[serde(default)]
    pub events: Vec<EventRequest>,
}

/// Request body for the `/vacation/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRequest {
    /// The calendar year the existing events are filtered to.
    pub year: i32,
    /// Allowance override; the configured allowance for the year is used when absent.
    #[serde(default)]
    pub allowance: Option<Decimal>,
    /// The currently recorded events.
    #[serde(default)]
    pub events: Vec<EventRequest>,
    /// The proposed event.
    pub candidate: NewEvent,
    /// Id of the event being edited, if this is an edit rather than an add.
    #[serde(default)]
    pub editing_event_id: Option<String>,
}

/// A recorded vacation event in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRequest {
    /// Unique identifier for the event.
    pub id: String,
    /// Short title.
    #[serde(default)]
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// First day of the event (inclusive).
    pub from: NaiveDate,
    /// Last day of the event (inclusive).
    pub to: NaiveDate,
    /// Portion of the first day taken.
    #[serde(default)]
    pub from_type: DayFraction,
    /// Portion of the last day taken.
    #[serde(default)]
    pub to_type: DayFraction,
}

impl From<EventRequest> for Event {
    fn from(req: EventRequest) -> Self {
        Event {
            id: req.id,
            title: req.title,
            description: req.description,
            from: req.from,
            to: req.to,
            from_type: req.from_type,
            to_type: req.to_type,
        }
    }
}
