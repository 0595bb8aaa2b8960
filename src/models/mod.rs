//! Core data models for the Vacation Ledger.
//!
//! This module contains all the domain models used throughout the engine.

mod allowance;
mod event;
mod ledger;
mod summary;

pub use allowance::{
    DEFAULT_ANNUAL_ALLOWANCE, MAX_ANNUAL_ALLOWANCE, VacationAllowance, validate_allowance,
};
pub use event::{
    DayFraction, Event, FULL_DAY, HALF_DAY, MAX_EVENT_SPAN_DAYS, NewEvent, validate_event_span,
};
pub use ledger::EventLedger;
pub use summary::{
    AllowanceStatus, DayAggregate, EventConsumption, NEAR_LIMIT_THRESHOLD, ValidationOutcome,
    VacationSummary,
};
