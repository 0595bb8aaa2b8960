//! Event expansion into working days.
//!
//! This module turns a single [`Event`] into the sequence of working dates it
//! covers, each paired with the vacation units the event claims on that date.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calendar::WorkingDayOracle;
use crate::models::{Event, FULL_DAY, HALF_DAY};

/// Vacation units `event` claims on `date`.
///
/// The date is assumed to lie within the event; working-day filtering is the
/// caller's concern.
///
/// # Behavior
///
/// - Single-day events count 1 for a full day and 0.5 otherwise. Only
///   `from_type` is consulted; `to_type` is ignored.
/// - Multi-day events count 0.5 on the first day when `from_type` is a half,
///   0.5 on the last day when `to_type` is a half, and 1 everywhere else.
///
/// # Example
///
/// ```
/// use vacation_ledger::accounting::day_units;
/// use vacation_ledger::models::{DayFraction, Event};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let event = Event {
///     id: "evt_001".to_string(),
///     title: String::new(),
///     description: String::new(),
///     from: NaiveDate::from_ymd_opt(2025, 6, 9).unwrap(),
///     to: NaiveDate::from_ymd_opt(2025, 6, 11).unwrap(),
///     from_type: DayFraction::SecondHalf,
///     to_type: DayFraction::FullDay,
/// };
///
/// assert_eq!(day_units(&event, event.from), Decimal::new(5, 1));
/// assert_eq!(day_units(&event, event.to), Decimal::ONE);
/// ```
pub fn day_units(event: &Event, date: NaiveDate) -> Decimal {
    if event.is_single_day() {
        return event.from_type.units();
    }

    if date == event.from && event.from_type.is_partial() {
        HALF_DAY
    } else if date == event.to && event.to_type.is_partial() {
        HALF_DAY
    } else {
        FULL_DAY
    }
}

/// Expands an event into `(date, units)` pairs for every working day it spans.
///
/// Dates run from `event.from` to `event.to` inclusive, in order. Dates the
/// oracle reports as non-working are skipped. An event with `from > to`
/// yields nothing. The iterator is lazy and borrows the event, so calling
/// this again restarts the sequence.
///
/// # Example
///
/// ```
/// use vacation_ledger::accounting::expand_event_to_working_days;
/// use vacation_ledger::calendar::WeekendCalendar;
/// use vacation_ledger::models::{DayFraction, Event};
/// use chrono::NaiveDate;
///
/// // Friday to Monday
/// let event = Event {
///     id: "evt_001".to_string(),
///     title: String::new(),
///     description: String::new(),
///     from: NaiveDate::from_ymd_opt(2025, 6, 13).unwrap(),
///     to: NaiveDate::from_ymd_opt(2025, 6, 16).unwrap(),
///     from_type: DayFraction::FullDay,
///     to_type: DayFraction::FullDay,
/// };
///
/// let calendar = WeekendCalendar::default();
/// let days: Vec<_> = expand_event_to_working_days(&event, &calendar).collect();
/// assert_eq!(days.len(), 2);
/// ```
pub fn expand_event_to_working_days<'a, O>(
    event: &'a Event,
    oracle: &'a O,
) -> impl Iterator<Item = (NaiveDate, Decimal)> + 'a
where
    O: WorkingDayOracle + ?Sized,
{
    event
        .from
        .iter_days()
        .take_while(move |date| *date <= event.to)
        .filter(move |date| oracle.is_working_day(*date))
        .map(move |date| (date, day_units(event, date)))
}
