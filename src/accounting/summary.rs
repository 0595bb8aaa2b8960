//! Yearly vacation summaries.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calendar::WorkingDayOracle;
use crate::models::{AllowanceStatus, DayAggregate, Event, VacationSummary};

use super::aggregation::{aggregate_days, event_consumption};

/// Events whose first or last day falls in `year`.
///
/// An event crossing the year boundary is returned whole; its days in the
/// neighbouring year are still counted by the accounting functions.
pub fn events_in_year(events: &[Event], year: i32) -> Vec<&Event> {
    events.iter().filter(|e| e.touches_year(year)).collect()
}

/// Summarizes vacation usage for `year` against `allowance`.
///
/// # Example
///
/// ```
/// use vacation_ledger::accounting::summarize_year;
/// use vacation_ledger::calendar::HolidayCalendar;
/// use vacation_ledger::models::{AllowanceStatus, DayFraction, Event};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let events = vec![Event {
///     id: "evt_001".to_string(),
///     title: "Summer".to_string(),
///     description: String::new(),
///     from: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
///     to: NaiveDate::from_ymd_opt(2025, 7, 31).unwrap(),
///     from_type: DayFraction::FullDay,
///     to_type: DayFraction::FullDay,
/// }];
///
/// let summary = summarize_year(&events, 2025, Decimal::new(25, 0), &HolidayCalendar::czech());
/// assert_eq!(summary.used_days, Decimal::new(23, 0));
/// assert_eq!(summary.remaining_days, Decimal::new(2, 0));
/// assert_eq!(summary.status, AllowanceStatus::NearLimit);
/// ```
pub fn summarize_year<O>(
    events: &[Event],
    year: i32,
    allowance: Decimal,
    oracle: &O,
) -> VacationSummary
where
    O: WorkingDayOracle + ?Sized,
{
    let year_events = events_in_year(events, year);
    let days = aggregate_days(year_events.iter().copied(), oracle);
    let used_days: Decimal = days.values().copied().sum::<Decimal>().normalize();
    let remaining_days = (allowance - used_days).normalize();
    let status = AllowanceStatus::from_remaining(remaining_days);

    debug!(
        year,
        events = year_events.len(),
        used_days = %used_days,
        remaining_days = %remaining_days,
        "Summarized vacation year"
    );

    VacationSummary {
        year,
        allowance,
        used_days,
        remaining_days,
        status,
        days: days
            .into_iter()
            .map(|(date, units)| DayAggregate { date, units })
            .collect(),
        events: event_consumption(year_events.iter().copied(), oracle),
    }
}
