//! What-if validation of proposed events.
//!
//! Predicts how adding a new event, or editing an existing one, changes the
//! consumed vacation units and the remaining allowance. Every figure is a full
//! recomputation over the given snapshot.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calendar::WorkingDayOracle;
use crate::models::{Event, ValidationOutcome};

use super::aggregation::calculate_vacation_days;

/// The kind of change being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposedChange<'a> {
    /// The candidate is a new event.
    Add,
    /// The candidate replaces the existing event with this id.
    Edit {
        /// Id of the event being edited.
        original_id: &'a str,
    },
}

/// Validates a candidate event against the existing events and an allowance.
///
/// For [`ProposedChange::Add`] the baseline is the total of `existing`. For
/// [`ProposedChange::Edit`] the event with `original_id` is removed from
/// `existing` first, so both the baseline and the candidate-inclusive total
/// exclude its original consumption; `original_days` then reports what that
/// event used to consume. Overlaps between the candidate and other events are
/// resolved the same way as in [`calculate_vacation_days`].
///
/// # Example
///
/// ```
/// use vacation_ledger::accounting::{validate_proposed_event, ProposedChange};
/// use vacation_ledger::calendar::HolidayCalendar;
/// use vacation_ledger::models::{DayFraction, Event};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let candidate = Event {
///     id: "new".to_string(),
///     title: "Week off".to_string(),
///     description: String::new(),
///     from: NaiveDate::from_ymd_opt(2025, 6, 9).unwrap(),
///     to: NaiveDate::from_ymd_opt(2025, 6, 13).unwrap(),
///     from_type: DayFraction::FullDay,
///     to_type: DayFraction::FullDay,
/// };
///
/// let outcome = validate_proposed_event(
///     &[],
///     Decimal::new(3, 0),
///     &candidate,
///     ProposedChange::Add,
///     &HolidayCalendar::czech(),
/// );
/// assert_eq!(outcome.total_after, Decimal::new(5, 0));
/// assert_eq!(outcome.exceeds_by, Decimal::new(2, 0));
/// assert!(outcome.will_exceed_limit());
/// ```
pub fn validate_proposed_event<O>(
    existing: &[Event],
    allowance: Decimal,
    candidate: &Event,
    change: ProposedChange<'_>,
    oracle: &O,
) -> ValidationOutcome
where
    O: WorkingDayOracle + ?Sized,
{
    let (baseline, original_days) = match change {
        ProposedChange::Add => {
            let baseline: Vec<&Event> = existing.iter().collect();
            (baseline, None)
        }
        ProposedChange::Edit { original_id } => {
            let baseline: Vec<&Event> = existing.iter().filter(|e| e.id != original_id).collect();
            let current_total = calculate_vacation_days(existing, oracle);
            let without_original = calculate_vacation_days(baseline.iter().copied(), oracle);
            (baseline, Some((current_total - without_original).normalize()))
        }
    };

    let total_before = calculate_vacation_days(baseline.iter().copied(), oracle);
    let total_after = calculate_vacation_days(
        baseline.iter().copied().chain(std::iter::once(candidate)),
        oracle,
    );

    let incremental_days = (total_after - total_before).normalize();
    let remaining_after = (allowance - total_after).normalize();
    let exceeds_by = (total_after - allowance).max(Decimal::ZERO).normalize();

    debug!(
        change = ?change,
        existing = existing.len(),
        total_before = %total_before,
        total_after = %total_after,
        exceeds_by = %exceeds_by,
        "Validated proposed event"
    );

    ValidationOutcome {
        incremental_days,
        total_before,
        total_after,
        remaining_after,
        exceeds_by,
        original_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayCalendar;
    use crate::models::DayFraction;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn full(id: &str, from: &str, to: &str) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {}", id),
            description: String::new(),
            from: make_date(from),
            to: make_date(to),
            from_type: DayFraction::FullDay,
            to_type: DayFraction::FullDay,
        }
    }

    fn validate(
        existing: &[Event],
        allowance: &str,
        candidate: &Event,
        change: ProposedChange<'_>,
    ) -> ValidationOutcome {
        validate_proposed_event(
            existing,
            dec(allowance),
            candidate,
            change,
            &HolidayCalendar::czech(),
        )
    }

    #[test]
    fn test_add_to_empty_calendar() {
        let candidate = full("new", "2025-06-09", "2025-06-13");
        let outcome = validate(&[], "27", &candidate, ProposedChange::Add);

        assert_eq!(outcome.total_before, dec("0"));
        assert_eq!(outcome.total_after, dec("5"));
        assert_eq!(outcome.incremental_days, dec("5"));
        assert_eq!(outcome.remaining_after, dec("22"));
        assert_eq!(outcome.exceeds_by, dec("0"));
        assert_eq!(outcome.original_days, None);
        assert!(!outcome.will_exceed_limit());
    }

    #[test]
    fn test_add_overlapping_event_counts_only_new_days() {
        let existing = vec![full("a", "2025-06-09", "2025-06-11")];
        let candidate = full("new", "2025-06-11", "2025-06-13");
        let outcome = validate(&existing, "27", &candidate, ProposedChange::Add);

        assert_eq!(outcome.total_before, dec("3"));
        assert_eq!(outcome.total_after, dec("5"));
        assert_eq!(outcome.incremental_days, dec("2"));
    }

    #[test]
    fn test_add_fully_covered_event_is_free() {
        let existing = vec![full("a", "2025-06-09", "2025-06-13")];
        let mut candidate = full("new", "2025-06-10", "2025-06-10");
        candidate.from_type = DayFraction::FirstHalf;
        let outcome = validate(&existing, "27", &candidate, ProposedChange::Add);

        assert_eq!(outcome.incremental_days, dec("0"));
    }

    #[test]
    fn test_add_exceeding_allowance() {
        let existing = vec![full("a", "2025-06-09", "2025-06-13")];
        let candidate = full("new", "2025-06-16", "2025-06-20");
        let outcome = validate(&existing, "8", &candidate, ProposedChange::Add);

        assert_eq!(outcome.total_after, dec("10"));
        assert_eq!(outcome.remaining_after, dec("-2"));
        assert_eq!(outcome.exceeds_by, dec("2"));
        assert!(outcome.will_exceed_limit());
    }

    #[test]
    fn test_add_exactly_reaching_allowance_does_not_exceed() {
        let candidate = full("new", "2025-06-09", "2025-06-13");
        let outcome = validate(&[], "5", &candidate, ProposedChange::Add);

        assert_eq!(outcome.remaining_after, dec("0"));
        assert!(!outcome.will_exceed_limit());
    }

    #[test]
    fn test_edit_excludes_original_consumption() {
        let existing = vec![
            full("a", "2025-06-09", "2025-06-11"),
            full("b", "2025-06-16", "2025-06-17"),
        ];
        let candidate = full("a", "2025-06-09", "2025-06-10");
        let outcome = validate(
            &existing,
            "27",
            &candidate,
            ProposedChange::Edit { original_id: "a" },
        );

        assert_eq!(outcome.total_before, dec("2"));
        assert_eq!(outcome.total_after, dec("4"));
        assert_eq!(outcome.incremental_days, dec("2"));
        assert_eq!(outcome.original_days, Some(dec("3")));
        assert_eq!(outcome.remaining_after, dec("23"));
    }

    #[test]
    fn test_edit_onto_other_event_resolves_overlap() {
        let existing = vec![
            full("a", "2025-06-09", "2025-06-09"),
            full("b", "2025-06-16", "2025-06-17"),
        ];
        // Move "a" onto the days already covered by "b"
        let candidate = full("a", "2025-06-16", "2025-06-17");
        let outcome = validate(
            &existing,
            "27",
            &candidate,
            ProposedChange::Edit { original_id: "a" },
        );

        assert_eq!(outcome.total_after, dec("2"));
        assert_eq!(outcome.incremental_days, dec("0"));
        assert_eq!(outcome.original_days, Some(dec("1")));
    }

    #[test]
    fn test_edit_original_days_excludes_shared_days() {
        let existing = vec![
            full("a", "2025-06-09", "2025-06-11"),
            full("b", "2025-06-11", "2025-06-12"),
        ];
        let candidate = full("a", "2025-06-09", "2025-06-09");
        let outcome = validate(
            &existing,
            "27",
            &candidate,
            ProposedChange::Edit { original_id: "a" },
        );

        // 2025-06-11 is still covered by "b", so only two days belonged to "a" alone
        assert_eq!(outcome.original_days, Some(dec("2")));
        assert_eq!(outcome.total_after, dec("3"));
    }

    #[test]
    fn test_edit_unknown_id_behaves_like_add() {
        let existing = vec![full("a", "2025-06-09", "2025-06-09")];
        let candidate = full("zzz", "2025-06-10", "2025-06-10");
        let outcome = validate(
            &existing,
            "27",
            &candidate,
            ProposedChange::Edit {
                original_id: "zzz",
            },
        );

        assert_eq!(outcome.total_before, dec("1"));
        assert_eq!(outcome.total_after, dec("2"));
        assert_eq!(outcome.original_days, Some(dec("0")));
    }

    #[test]
    fn test_candidate_on_holidays_adds_nothing() {
        let candidate = full("new", "2025-12-24", "2025-12-26");
        let outcome = validate(&[], "27", &candidate, ProposedChange::Add);

        assert_eq!(outcome.incremental_days, dec("0"));
        assert_eq!(outcome.remaining_after, dec("27"));
    }
}
