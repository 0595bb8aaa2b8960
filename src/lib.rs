//! Vacation Ledger
//!
//! This crate provides the vacation day accounting engine behind a personal
//! yearly calendar: it expands date-ranged absence events into working-day
//! vacation units, resolves overlapping events, and predicts the effect of
//! adding or editing an event against a yearly allowance.

#![warn(missing_docs)]

pub mod accounting;
pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
