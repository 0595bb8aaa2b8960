//! Event and day fraction models.
//!
//! This module contains the [`Event`] type describing a date-ranged absence
//! and the [`DayFraction`] qualifier attached to each of its boundaries.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::{FIRST_GREGORIAN_YEAR, LAST_SUPPORTED_YEAR};
use crate::error::{EngineError, EngineResult};

/// Half a working day of vacation.
pub const HALF_DAY: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// A full working day of vacation.
pub const FULL_DAY: Decimal = Decimal::ONE;

/// Longest range, in calendar days, a single event may cover.
pub const MAX_EVENT_SPAN_DAYS: i64 = 366;

/// Checks that `from..=to` lies in `1583..=9999` and covers at most
/// [`MAX_EVENT_SPAN_DAYS`] days.
///
/// An inverted range covers no days and passes the span check.
///
/// # Example
///
/// ```
/// use vacation_ledger::models::validate_event_span;
/// use chrono::NaiveDate;
///
/// let from = NaiveDate::from_ymd_opt(2025, 12, 22).unwrap();
/// let to = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
/// assert!(validate_event_span("evt_001", from, to).is_ok());
///
/// let far = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
/// assert!(validate_event_span("evt_002", from, far).is_err());
/// ```
pub fn validate_event_span(id: &str, from: NaiveDate, to: NaiveDate) -> EngineResult<()> {
    let supported = FIRST_GREGORIAN_YEAR..=LAST_SUPPORTED_YEAR;
    if !supported.contains(&from.year()) || !supported.contains(&to.year()) {
        return Err(EngineError::InvalidEvent {
            id: id.to_string(),
            message: format!(
                "dates must fall in years {} to {}",
                FIRST_GREGORIAN_YEAR, LAST_SUPPORTED_YEAR
            ),
        });
    }

    let span_days = (to - from).num_days() + 1;
    if span_days > MAX_EVENT_SPAN_DAYS {
        return Err(EngineError::InvalidEvent {
            id: id.to_string(),
            message: format!(
                "covers {} days, at most {} allowed",
                span_days, MAX_EVENT_SPAN_DAYS
            ),
        });
    }
    Ok(())
}

/// How much of a boundary day an event occupies.
///
/// Serialized with the labels used by stored calendar data (`"Full day"`,
/// `"1st Half"`, `"2nd Half"`). The snake_case variant names are accepted
/// when deserializing.
///
/// # Example
///
/// ```
/// use vacation_ledger::models::DayFraction;
///
/// let fraction: DayFraction = serde_json::from_str("\"1st Half\"").unwrap();
/// assert_eq!(fraction, DayFraction::FirstHalf);
/// assert!(fraction.is_partial());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayFraction {
    /// The whole day is taken.
    #[default]
    #[serde(rename = "Full day", alias = "full_day")]
    FullDay,
    /// Only the morning is taken.
    #[serde(rename = "1st Half", alias = "first_half")]
    FirstHalf,
    /// Only the afternoon is taken.
    #[serde(rename = "2nd Half", alias = "second_half")]
    SecondHalf,
}

impl DayFraction {
    /// Returns true for either half-day variant.
    pub fn is_partial(self) -> bool {
        !matches!(self, DayFraction::FullDay)
    }

    /// Vacation units this fraction represents on its own day.
    pub fn units(self) -> Decimal {
        if self.is_partial() { HALF_DAY } else { FULL_DAY }
    }
}

impl std::fmt::Display for DayFraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayFraction::FullDay => write!(f, "Full day"),
            DayFraction::FirstHalf => write!(f, "1st Half"),
            DayFraction::SecondHalf => write!(f, "2nd Half"),
        }
    }
}

/// A vacation or absence event spanning one or more calendar days.
///
/// `from <= to` is expected but not enforced; an inverted range simply
/// covers no days.
///
/// # Example
///
/// ```
/// use vacation_ledger::models::{DayFraction, Event};
/// use chrono::NaiveDate;
///
/// let event = Event {
///     id: "evt_001".to_string(),
///     title: "Summer trip".to_string(),
///     description: String::new(),
///     from: NaiveDate::from_ymd_opt(2025, 6, 9).unwrap(),
///     to: NaiveDate::from_ymd_opt(2025, 6, 13).unwrap(),
///     from_type: DayFraction::FullDay,
///     to_type: DayFraction::FullDay,
/// };
/// assert!(!event.is_single_day());
/// assert!(event.touches_year(2025));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique, immutable identifier.
    pub id: String,
    /// Short title shown on the calendar.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// First day of the event (inclusive).
    pub from: NaiveDate,
    /// Last day of the event (inclusive).
    pub to: NaiveDate,
    /// Portion of the first day taken.
    pub from_type: DayFraction,
    /// Portion of the last day taken. Ignored for single-day events.
    pub to_type: DayFraction,
}

impl Event {
    /// Builds an event from its id and the id-less payload.
    pub fn from_new(id: impl Into<String>, new_event: NewEvent) -> Self {
        Self {
            id: id.into(),
            title: new_event.title,
            description: new_event.description,
            from: new_event.from,
            to: new_event.to,
            from_type: new_event.from_type,
            to_type: new_event.to_type,
        }
    }

    /// Returns true when the event starts and ends on the same date.
    pub fn is_single_day(&self) -> bool {
        self.from == self.to
    }

    /// Returns true when either boundary falls in `year`.
    pub fn touches_year(&self, year: i32) -> bool {
        self.from.year() == year || self.to.year() == year
    }

    /// Checks the event's range with [`validate_event_span`].
    pub fn validate_span(&self) -> EngineResult<()> {
        validate_event_span(&self.id, self.from, self.to)
    }
}

/// An event payload without an id, used when adding or editing events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    /// Short title shown on the calendar.
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
