//! Working-day oracle.
//!
//! The accounting engine asks a [`WorkingDayOracle`] whether each date of an
//! event counts as a working day. Implementations must be pure: the same date
//! always yields the same answer.

use chrono::{Datelike, NaiveDate, Weekday};

/// Answers whether a calendar date is a working day.
///
/// # Example
///
/// ```
/// use vacation_ledger::calendar::{WeekendCalendar, WorkingDayOracle};
/// use chrono::NaiveDate;
///
/// let calendar = WeekendCalendar::default();
/// // 2025-06-07 is a Saturday, 2025-06-09 a Monday
/// assert!(!calendar.is_working_day(NaiveDate::from_ymd_opt(2025, 6, 7).unwrap()));
/// assert!(calendar.is_working_day(NaiveDate::from_ymd_opt(2025, 6, 9).unwrap()));
/// ```
pub trait WorkingDayOracle {
    /// Returns false for weekends and public holidays.
    fn is_working_day(&self, date: NaiveDate) -> bool;
}

impl<T: WorkingDayOracle + ?Sized> WorkingDayOracle for &T {
    fn is_working_day(&self, date: NaiveDate) -> bool {
        (**self).is_working_day(date)
    }
}

impl<T: WorkingDayOracle + ?Sized> WorkingDayOracle for Box<T> {
    fn is_working_day(&self, date: NaiveDate) -> bool {
        (**self).is_working_day(date)
    }
}

/// Calendar where only the weekend days are non-working.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekendCalendar {
    weekend: Vec<Weekday>,
}

impl Default for WeekendCalendar {
    fn default() -> Self {
        Self {
            weekend: vec![Weekday::Sat, Weekday::Sun],
        }
    }
}

impl WeekendCalendar {
    /// Creates a calendar with custom weekend days.
    pub fn new(weekend: Vec<Weekday>) -> Self {
        Self { weekend }
    }

    /// Returns true when `date` falls on a weekend day.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend.contains(&date.weekday())
    }

    /// The configured weekend days.
    pub fn weekend(&self) -> &[Weekday] {
        &self.weekend
    }
}

impl WorkingDayOracle for WeekendCalendar {
    fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date)
    }
}

/// Adapts a plain predicate into a [`WorkingDayOracle`].
///
/// # Example
///
/// ```
/// use vacation_ledger::calendar::{OracleFn, WorkingDayOracle};
/// use chrono::NaiveDate;
///
/// let every_day = OracleFn(|_date: NaiveDate| true);
/// assert!(every_day.is_working_day(NaiveDate::from_ymd_opt(2025, 6, 7).unwrap()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OracleFn<F>(pub F);

impl<F> WorkingDayOracle for OracleFn<F>
where
    F: Fn(NaiveDate) -> bool,
{
    fn is_working_day(&self, date: NaiveDate) -> bool {
        (self.0)(date)
    }
}
