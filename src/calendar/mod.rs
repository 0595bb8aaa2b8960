//! Working-day calendars.
//!
//! This module provides the [`WorkingDayOracle`] abstraction consumed by the
//! accounting engine together with weekend-only, closure-backed and
//! public-holiday implementations.

mod holidays;
mod oracle;

pub use holidays::{
    EasterHoliday, FIRST_GREGORIAN_YEAR, FixedHoliday, HolidayCalendar, LAST_SUPPORTED_YEAR,
    MAX_EASTER_OFFSET_DAYS, PublicHoliday, easter_sunday,
};
pub use oracle::{OracleFn, WeekendCalendar, WorkingDayOracle};
