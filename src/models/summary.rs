//! Accounting result models.
//!
//! This module contains the values produced by the accounting engine: the
//! per-day breakdown, per-event consumption, the yearly [`VacationSummary`]
//! and the [`ValidationOutcome`] of a proposed change.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Remaining allowance at or below which a year is reported as near the limit.
pub const NEAR_LIMIT_THRESHOLD: Decimal = Decimal::TWO;

/// Vacation units consumed on a single working date.
///
/// When several events cover the date, `units` is the largest claim among
/// them, never their sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAggregate {
    /// The calendar date.
    pub date: NaiveDate,
    /// Units consumed on this date (0.5 or 1).
    pub units: Decimal,
}

/// Standalone consumption of one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConsumption {
    /// The id of the event.
    pub event_id: String,
    /// The title of the event.
    pub title: String,
    /// First day of the event.
    pub from: NaiveDate,
    /// Last day of the event.
    pub to: NaiveDate,
    /// Units the event consumes when considered on its own.
    pub days: Decimal,
}

/// How the used days of a year compare to its allowance.
///
/// # Example
///
/// ```
/// use vacation_ledger::models::AllowanceStatus;
/// use rust_decimal::Decimal;
///
/// assert_eq!(AllowanceStatus::from_remaining(Decimal::new(-1, 0)), AllowanceStatus::OverLimit);
/// assert_eq!(AllowanceStatus::from_remaining(Decimal::new(15, 1)), AllowanceStatus::NearLimit);
/// assert_eq!(AllowanceStatus::from_remaining(Decimal::ZERO), AllowanceStatus::WithinLimit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowanceStatus {
    /// More than the near-limit threshold remains, or exactly nothing.
    WithinLimit,
    /// Between zero (exclusive) and two days (inclusive) remain.
    NearLimit,
    /// More days were used than allowed.
    OverLimit,
}

impl AllowanceStatus {
    /// Classifies a remaining balance.
    pub fn from_remaining(remaining: Decimal) -> Self {
        if remaining < Decimal::ZERO {
            AllowanceStatus::OverLimit
        } else if remaining > Decimal::ZERO && remaining <= NEAR_LIMIT_THRESHOLD {
            AllowanceStatus::NearLimit
        } else {
            AllowanceStatus::WithinLimit
        }
    }
}

/// Vacation usage for one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationSummary {
    /// The calendar year summarized.
    pub year: i32,
    /// The allowance for the year.
    pub allowance: Decimal,
    /// Units consumed by the year's events.
    pub used_days: Decimal,
    /// `allowance - used_days`; negative when over the limit.
    pub remaining_days: Decimal,
    /// Classification of `remaining_days`.
    pub status: AllowanceStatus,
    /// Per-date breakdown in chronological order.
    pub days: Vec<DayAggregate>,
    /// Standalone consumption of each event.
    pub events: Vec<EventConsumption>,
}

/// Predicted effect of adding or editing an event.
///
/// # Example
///
/// ```
/// use vacation_ledger::models::ValidationOutcome;
/// use rust_decimal::Decimal;
///
/// let outcome = ValidationOutcome {
///     incremental_days: Decimal::new(5, 0),
///     total_before: Decimal::new(24, 0),
///     total_after: Decimal::new(29, 0),
///     remaining_after: Decimal::new(-2, 0),
///     exceeds_by: Decimal::new(2, 0),
///     original_days: None,
/// };
/// assert!(outcome.will_exceed_limit());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Units the change adds on top of the baseline (may be negative for edits).
    pub incremental_days: Decimal,
    /// Baseline total without the candidate (and without the edited event).
    pub total_before: Decimal,
    /// Total once the candidate is included.
    pub total_after: Decimal,
    /// `allowance - total_after`.
    pub remaining_after: Decimal,
    /// `max(0, total_after - allowance)`.
    pub exceeds_by: Decimal,
    /// Units the edited event consumed before the change. `None` for additions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_days: Option<Decimal>,
}

impl ValidationOutcome {
    /// Returns true when the change would push usage past the allowance.
    pub fn will_exceed_limit(&self) -> bool {
        self.exceeds_by > Decimal::ZERO
    }
}
