//! Per-day aggregation and vacation totals.
//!
//! Every event is expanded into working days, the claims are grouped by
//! calendar date, and each date contributes the largest single claim made on
//! it. Overlapping events therefore never double-count a day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::calendar::WorkingDayOracle;
use crate::models::{DayAggregate, Event, EventConsumption};

use super::expansion::expand_event_to_working_days;

/// Groups the working-day claims of `events` by date.
///
/// Each entry holds the maximum units any event claims on that date. Dates
/// are keyed by [`NaiveDate`], so no time-of-day or timezone component takes
/// part in the grouping.
pub fn aggregate_days<'a, I, O>(events: I, oracle: &O) -> BTreeMap<NaiveDate, Decimal>
where
    I: IntoIterator<Item = &'a Event>,
    O: WorkingDayOracle + ?Sized,
{
    let mut days: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

    for event in events {
        for (date, units) in expand_event_to_working_days(event, oracle) {
            days.entry(date)
                .and_modify(|current| *current = (*current).max(units))
                .or_insert(units);
        }
    }

    days
}

/// Same as [`aggregate_days`], as a chronologically ordered list.
pub fn day_breakdown<'a, I, O>(events: I, oracle: &O) -> Vec<DayAggregate>
where
    I: IntoIterator<Item = &'a Event>,
    O: WorkingDayOracle + ?Sized,
{
    aggregate_days(events, oracle)
        .into_iter()
        .map(|(date, units)| DayAggregate { date, units })
        .collect()
}

/// Total vacation units consumed by `events`.
///
/// The result does not depend on input order, is always a non-negative
/// multiple of 0.5, and is zero for an empty collection or for events that
/// cover only non-working days.
///
/// # Example
///
/// ```
/// use vacation_ledger::accounting::calculate_vacation_days;
/// use vacation_ledger::calendar::HolidayCalendar;
/// use vacation_ledger::models::{DayFraction, Event};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let event = Event {
///     id: "evt_001".to_string(),
///     title: "July".to_string(),
///     description: String::new(),
///     from: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
///     to: NaiveDate::from_ymd_opt(2025, 7, 31).unwrap(),
///     from_type: DayFraction::FullDay,
///     to_type: DayFraction::FullDay,
/// };
///
/// let calendar = HolidayCalendar::czech();
/// assert_eq!(calculate_vacation_days(&[event], &calendar), Decimal::new(23, 0));
/// ```
pub fn calculate_vacation_days<'a, I, O>(events: I, oracle: &O) -> Decimal
where
    I: IntoIterator<Item = &'a Event>,
    O: WorkingDayOracle + ?Sized,
{
    let days = aggregate_days(events, oracle);
    let total: Decimal = days.values().copied().sum();

    debug!(days = days.len(), total = %total, "Calculated vacation days");

    total.normalize()
}

/// Standalone consumption of each event, in input order.
///
/// Each event is evaluated on its own, so overlapping events each report
/// their full claim here even though the aggregate counts shared days once.
pub fn event_consumption<'a, I, O>(events: I, oracle: &O) -> Vec<EventConsumption>
where
    I: IntoIterator<Item = &'a Event>,
    O: WorkingDayOracle + ?Sized,
{
    events
        .into_iter()
        .map(|event| EventConsumption {
            event_id: event.id.clone(),
            title: event.title.clone(),
            from: event.from,
            to: event.to,
            days: calculate_vacation_days(std::iter::once(event), oracle),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{HolidayCalendar, OracleFn, WeekendCalendar};
    use crate::models::DayFraction;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_event(
        id: &str,
        from: &str,
        to: &str,
        from_type: DayFraction,
        to_type: DayFraction,
    ) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {}", id),
            description: String::new(),
            from: make_date(from),
            to: make_date(to),
            from_type,
            to_type,
        }
    }

    fn full(id: &str, from: &str, to: &str) -> Event {
        create_event(id, from, to, DayFraction::FullDay, DayFraction::FullDay)
    }

    fn czech_total(events: &[Event]) -> Decimal {
        calculate_vacation_days(events, &HolidayCalendar::czech())
    }

    #[test]
    fn test_empty_collection_is_zero() {
        assert_eq!(czech_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_basic_single_day() {
        assert_eq!(czech_total(&[full("a", "2025-06-09", "2025-06-09")]), dec("1"));
    }

    #[test]
    fn test_full_day_on_public_holiday_is_zero() {
        assert_eq!(czech_total(&[full("a", "2025-12-24", "2025-12-24")]), dec("0"));
    }

    #[test]
    fn test_half_day_on_working_day() {
        let event = create_event(
            "a",
            "2025-06-09",
            "2025-06-09",
            DayFraction::FirstHalf,
            DayFraction::FirstHalf,
        );
        assert_eq!(czech_total(&[event]), dec("0.5"));
    }

    #[test]
    fn test_weekend_only_event_is_zero() {
        assert_eq!(czech_total(&[full("a", "2025-06-07", "2025-06-08")]), dec("0"));
    }

    #[test]
    fn test_working_week_is_five() {
        assert_eq!(czech_total(&[full("a", "2025-06-09", "2025-06-13")]), dec("5"));
    }

    #[test]
    fn test_week_including_weekend_is_five() {
        assert_eq!(czech_total(&[full("a", "2025-06-09", "2025-06-15")]), dec("5"));
    }

    #[test]
    fn test_overlapping_same_day_takes_maximum() {
        let events = vec![
            full("a", "2025-06-09", "2025-06-09"),
            create_event(
                "b",
                "2025-06-09",
                "2025-06-09",
                DayFraction::FirstHalf,
                DayFraction::FirstHalf,
            ),
        ];
        assert_eq!(czech_total(&events), dec("1"));
    }

    #[test]
    fn test_overlapping_multi_day_events_count_union() {
        let events = vec![
            full("a", "2025-06-09", "2025-06-11"),
            full("b", "2025-06-10", "2025-06-12"),
        ];
        assert_eq!(czech_total(&events), dec("4"));
    }

    #[test]
    fn test_two_half_days_on_same_date_do_not_add_up() {
        let events = vec![
            create_event(
                "a",
                "2025-06-09",
                "2025-06-09",
                DayFraction::FirstHalf,
                DayFraction::FirstHalf,
            ),
            create_event(
                "b",
                "2025-06-09",
                "2025-06-09",
                DayFraction::SecondHalf,
                DayFraction::SecondHalf,
            ),
        ];
        assert_eq!(czech_total(&events), dec("0.5"));
    }

    #[test]
    fn test_half_boundaries_of_multi_day_event() {
        let event = create_event(
            "a",
            "2025-06-09",
            "2025-06-11",
            DayFraction::FirstHalf,
            DayFraction::SecondHalf,
        );
        assert_eq!(czech_total(&[event]), dec("2"));
    }

    #[test]
    fn test_full_month_of_july_2025() {
        assert_eq!(czech_total(&[full("a", "2025-07-01", "2025-07-31")]), dec("23"));
    }

    #[test]
    fn test_christmas_to_new_year_span() {
        assert_eq!(czech_total(&[full("a", "2025-12-22", "2026-01-03")]), dec("6"));
    }

    #[test]
    fn test_inverted_event_contributes_nothing() {
        assert_eq!(czech_total(&[full("a", "2025-06-13", "2025-06-09")]), dec("0"));
    }

    #[test]
    fn test_aggregate_days_keeps_maximum_per_date() {
        let events = vec![
            create_event(
                "a",
                "2025-06-09",
                "2025-06-10",
                DayFraction::FirstHalf,
                DayFraction::FullDay,
            ),
            full("b", "2025-06-09", "2025-06-09"),
        ];
        let days = aggregate_days(&events, &WeekendCalendar::default());

        assert_eq!(days.len(), 2);
        assert_eq!(days[&make_date("2025-06-09")], dec("1"));
        assert_eq!(days[&make_date("2025-06-10")], dec("1"));
    }

    #[test]
    fn test_day_breakdown_is_chronological() {
        let events = vec![
            full("late", "2025-06-16", "2025-06-16"),
            full("early", "2025-06-09", "2025-06-10"),
        ];
        let breakdown = day_breakdown(&events, &WeekendCalendar::default());

        let dates: Vec<NaiveDate> = breakdown.iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![
                make_date("2025-06-09"),
                make_date("2025-06-10"),
                make_date("2025-06-16"),
            ]
        );
    }

    #[test]
    fn test_event_consumption_reports_standalone_days() {
        let events = vec![
            full("a", "2025-06-09", "2025-06-11"),
            full("b", "2025-06-10", "2025-06-12"),
        ];
        let consumption = event_consumption(&events, &HolidayCalendar::czech());

        assert_eq!(consumption.len(), 2);
        assert_eq!(consumption[0].event_id, "a");
        assert_eq!(consumption[0].days, dec("3"));
        assert_eq!(consumption[1].days, dec("3"));
        assert_eq!(czech_total(&events), dec("4"));
    }

    #[test]
    fn test_total_is_normalized() {
        let total = czech_total(&[full("a", "2025-06-09", "2025-06-13")]);
        assert_eq!(total.to_string(), "5");
    }

    #[test]
    #[should_panic(expected = "calendar unavailable")]
    fn test_panicking_oracle_propagates() {
        let oracle = OracleFn(|_date: NaiveDate| -> bool { panic!("calendar unavailable") });
        calculate_vacation_days(&[full("a", "2025-06-09", "2025-06-13")], &oracle);
    }

    fn fraction_strategy() -> impl Strategy<Value = DayFraction> {
        prop_oneof![
            Just(DayFraction::FullDay),
            Just(DayFraction::FirstHalf),
            Just(DayFraction::SecondHalf),
        ]
    }

    fn event_strategy() -> impl Strategy<Value = Event> {
        (0i64..120, 0i64..15, fraction_strategy(), fraction_strategy()).prop_map(
            |(start, length, from_type, to_type)| {
                let base = make_date("2025-03-01");
                let from = base + chrono::Duration::days(start);
                Event {
                    id: format!("evt_{}_{}", start, length),
                    title: String::new(),
                    description: String::new(),
                    from,
                    to: from + chrono::Duration::days(length),
                    from_type,
                    to_type,
                }
            },
        )
    }

    proptest! {
        #[test]
        fn prop_total_is_order_invariant(events in prop::collection::vec(event_strategy(), 0..8)) {
            let calendar = HolidayCalendar::czech();
            let forward = calculate_vacation_days(&events, &calendar);
            let reversed: Vec<Event> = events.iter().rev().cloned().collect();
            prop_assert_eq!(forward, calculate_vacation_days(&reversed, &calendar));
        }

        #[test]
        fn prop_total_is_idempotent(events in prop::collection::vec(event_strategy(), 0..8)) {
            let calendar = HolidayCalendar::czech();
            prop_assert_eq!(
                calculate_vacation_days(&events, &calendar),
                calculate_vacation_days(&events, &calendar)
            );
        }

        #[test]
        fn prop_total_is_non_negative_multiple_of_half(events in prop::collection::vec(event_strategy(), 0..8)) {
            let total = calculate_vacation_days(&events, &HolidayCalendar::czech());
            prop_assert!(total >= Decimal::ZERO);
            prop_assert_eq!((total * Decimal::TWO).fract(), Decimal::ZERO);
        }

        #[test]
        fn prop_overlap_never_exceeds_sum_or_drops_below_max(a in event_strategy(), b in event_strategy()) {
            let calendar = HolidayCalendar::czech();
            let alone_a = calculate_vacation_days(std::iter::once(&a), &calendar);
            let alone_b = calculate_vacation_days(std::iter::once(&b), &calendar);
            let together = calculate_vacation_days([&a, &b], &calendar);
            prop_assert!(together <= alone_a + alone_b);
            prop_assert!(together >= alone_a.max(alone_b));
        }

        #[test]
        fn prop_duplicated_event_counts_once(event in event_strategy()) {
            let calendar = HolidayCalendar::czech();
            let once = calculate_vacation_days(std::iter::once(&event), &calendar);
            let twice = calculate_vacation_days([&event, &event], &calendar);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_full_day_events_count_working_days(event in event_strategy()) {
            let calendar = HolidayCalendar::czech();
            let mut full_event = event.clone();
            full_event.from_type = DayFraction::FullDay;
            full_event.to_type = DayFraction::FullDay;

            let working = full_event
                .from
                .iter_days()
                .take_while(|d| *d <= full_event.to)
                .filter(|d| calendar.is_working_day(*d))
                .count();
            prop_assert_eq!(
                calculate_vacation_days(std::iter::once(&full_event), &calendar),
                Decimal::from(working)
            );
        }
    }
}
