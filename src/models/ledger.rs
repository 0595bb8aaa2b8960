//! In-memory event collection.
//!
//! [`EventLedger`] is the create/edit/delete plumbing around a list of
//! events. The accounting engine only ever reads snapshots of it.

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::{Event, NewEvent};

/// Ordered collection of events with unique ids.
///
/// # Example
///
/// ```
/// use vacation_ledger::models::{DayFraction, EventLedger, NewEvent};
/// use chrono::NaiveDate;
///
/// let mut ledger = EventLedger::new();
/// let id = ledger
///     .add(NewEvent {
///         title: "Holiday".to_string(),
///         description: String::new(),
///         from: NaiveDate::from_ymd_opt(2025, 6, 9).unwrap(),
///         to: NaiveDate::from_ymd_opt(2025, 6, 13).unwrap(),
///         from_type: DayFraction::FullDay,
///         to_type: DayFraction::FullDay,
///     })
///     .id
///     .clone();
///
/// assert_eq!(ledger.len(), 1);
/// assert!(ledger.get(&id).is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventLedger {
    events: Vec<Event>,
}

impl EventLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from existing events, rejecting duplicate ids.
    pub fn from_events(events: impl IntoIterator<Item = Event>) -> EngineResult<Self> {
        let mut ledger = Self::new();
        for event in events {
            ledger.insert(event)?;
        }
        Ok(ledger)
    }

    /// Adds a new event under a freshly generated id.
    pub fn add(&mut self, new_event: NewEvent) -> &Event {
        let id = Uuid::new_v4().to_string();
        self.events.push(Event::from_new(id, new_event));
        &self.events[self.events.len() - 1]
    }

    /// Inserts an event that already carries an id.
    pub fn insert(&mut self, event: Event) -> EngineResult<()> {
        if self.get(&event.id).is_some() {
            return Err(EngineError::DuplicateEvent { id: event.id });
        }
        self.events.push(event);
        Ok(())
    }

    /// Replaces the payload of the event `id`, keeping its id and position.
    pub fn update(&mut self, id: &str, new_event: NewEvent) -> EngineResult<&Event> {
        let index = self.position(id)?;
        self.events[index] = Event::from_new(id, new_event);
        Ok(&self.events[index])
    }

    /// Removes and returns the event `id`.
    pub fn remove(&mut self, id: &str) -> EngineResult<Event> {
        let index = self.position(id)?;
        Ok(self.events.remove(index))
    }

    /// Looks up an event by id.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// All events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events whose first or last day falls in `year`.
    pub fn events_in_year(&self, year: i32) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| e.touches_year(year))
            .cloned()
            .collect()
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true when the ledger holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn position(&self, id: &str) -> EngineResult<usize> {
        self.events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| EngineError::EventNotFound { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayFraction;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn new_event(title: &str, from: &str, to: &str) -> NewEvent {
        NewEvent {
            title: title.to_string(),
            description: String::new(),
            from: make_date(from),
            to: make_date(to),
            from_type: DayFraction::FullDay,
            to_type: DayFraction::FullDay,
        }
    }

    #[test]
    fn test_add_generates_unique_ids() {
        let mut ledger = EventLedger::new();
        let first = ledger.add(new_event("A", "2025-06-09", "2025-06-09")).id.clone();
        let second = ledger.add(new_event("B", "2025-06-10", "2025-06-10")).id.clone();

        assert_ne!(first, second);
        assert!(Uuid::parse_str(&first).is_ok());
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_update_keeps_id_and_position() {
        let mut ledger = EventLedger::new();
        let id = ledger.add(new_event("A", "2025-06-09", "2025-06-09")).id.clone();
        ledger.add(new_event("B", "2025-06-16", "2025-06-16"));

        let updated = ledger
            .update(&id, new_event("A2", "2025-06-09", "2025-06-11"))
            .unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.title, "A2");
        assert_eq!(ledger.events()[0].to, make_date("2025-06-11"));
    }

    #[test]
    fn test_update_unknown_id_returns_error() {
        let mut ledger = EventLedger::new();
        let result = ledger.update("missing", new_event("A", "2025-06-09", "2025-06-09"));

        match result {
            Err(EngineError::EventNotFound { id }) => assert_eq!(id, "missing"),
            _ => panic!("Expected EventNotFound error"),
        }
    }

    #[test]
    fn test_remove_returns_event() {
        let mut ledger = EventLedger::new();
        let id = ledger.add(new_event("A", "2025-06-09", "2025-06-09")).id.clone();

        let removed = ledger.remove(&id).unwrap();
        assert_eq!(removed.title, "A");
        assert!(ledger.is_empty());
        assert!(ledger.remove(&id).is_err());
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let event = Event::from_new("evt_001", new_event("A", "2025-06-09", "2025-06-09"));
        let result = EventLedger::from_events(vec![event.clone(), event]);

        match result {
            Err(EngineError::DuplicateEvent { id }) => assert_eq!(id, "evt_001"),
            _ => panic!("Expected DuplicateEvent error"),
        }
    }

    #[test]
    fn test_events_in_year_includes_boundary_crossing_events() {
        let mut ledger = EventLedger::new();
        ledger.add(new_event("Winter", "2025-12-22", "2026-01-03"));
        ledger.add(new_event("Spring", "2026-04-01", "2026-04-02"));
        ledger.add(new_event("Old", "2024-07-01", "2024-07-02"));

        let in_2026: Vec<String> = ledger
            .events_in_year(2026)
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(in_2026, vec!["Winter".to_string(), "Spring".to_string()]);
        assert_eq!(ledger.events_in_year(2025).len(), 1);
    }
}
