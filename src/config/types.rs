//! Configuration types for vacation accounting.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::Weekday;
use serde::Deserialize;

use crate::calendar::{EasterHoliday, FixedHoliday, HolidayCalendar};
use crate::models::VacationAllowance;

/// Metadata about the locale calendar (`calendar.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarMetadata {
    /// Short locale code (e.g., "CZ").
    pub code: String,
    /// Human-readable calendar name.
    pub name: String,
    /// Non-working days of the week.
    pub weekend: Vec<Weekday>,
}

/// Public holiday rules (`holidays.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// Holidays on a fixed month and day.
    #[serde(default)]
    pub fixed: Vec<FixedHoliday>,
    /// Holidays relative to Easter Sunday.
    #[serde(default)]
    pub easter: Vec<EasterHoliday>,
}

/// The complete configuration loaded from a locale directory.
#[derive(Debug, Clone)]
pub struct VacationConfig {
    metadata: CalendarMetadata,
    calendar: HolidayCalendar,
    allowance: VacationAllowance,
}

impl VacationConfig {
    /// Creates a VacationConfig from its component parts.
    pub fn new(
        metadata: CalendarMetadata,
        calendar: HolidayCalendar,
        allowance: VacationAllowance,
    ) -> Self {
        Self {
            metadata,
            calendar,
            allowance,
        }
    }

    /// Returns the calendar metadata.
    pub fn metadata(&self) -> &CalendarMetadata {
        &self.metadata
    }

    /// Returns the holiday calendar built from the holiday rules.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Returns the configured allowances.
    pub fn allowance(&self) -> &VacationAllowance {
        &self.allowance
    }
}
