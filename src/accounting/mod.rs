//! Vacation accounting engine.
//!
//! This module contains the pure functions that turn a snapshot of events and
//! a [`WorkingDayOracle`](crate::calendar::WorkingDayOracle) into consumed
//! vacation units:
//!
//! - [`expand_event_to_working_days`] lists the working days of one event
//! - [`calculate_vacation_days`] aggregates overlapping events per day
//! - [`validate_proposed_event`] predicts the effect of adding or editing
//! - [`summarize_year`] reports a year's usage against its allowance

mod aggregation;
mod expansion;
mod summary;
mod validation;

pub use aggregation::{aggregate_days, calculate_vacation_days, day_breakdown, event_consumption};
pub use expansion::{day_units, expand_event_to_working_days};
pub use summary::{events_in_year, summarize_year};
pub use validation::{ProposedChange, validate_proposed_event};
