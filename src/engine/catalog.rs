// Event catalog - authoritative in-memory registry of events and registrations

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use tracing::{debug, info};

use crate::core::errors::CatalogError;
use crate::core::models::{
    DashboardStats, Event, EventDraft, EventId, NewEvent, NewRegistration, Registration,
    RegistrationDraft, RegistrationId, RegistrationStatus, RegistrationView,
};
use crate::engine::filter::EventFilter;
use crate::engine::stats;

/// In-memory event catalog
///
/// Events are kept in insertion order and are never removed. Each event owns
/// its registrations; registrations are append-only. Both id counters only
/// ever grow.
///
/// Writers take `&mut self`, so a check-then-append-then-increment sequence
/// is a single borrow. Callers sharing a catalog across tasks wrap it in
/// [`crate::state::SharedCatalog`].
#[derive(Debug, Clone)]
pub struct Catalog {
    events: Vec<Event>,
    next_id: EventId,
    next_registration_id: RegistrationId,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
            next_registration_id: 1,
        }
    }

    /// Create a catalog from pre-built events
    ///
    /// The event counter starts one past the highest supplied id, and the
    /// registration counter one past the highest registration id found.
    pub fn with_events(events: Vec<Event>) -> Self {
        let next_id = events.iter().map(|e| e.id).max().map_or(1, |max| max + 1);
        let next_registration_id = events
            .iter()
            .flat_map(|e| e.registrations.iter().map(|r| r.id))
            .max()
            .map_or(1, |max| max + 1);

        Self {
            events,
            next_id,
            next_registration_id,
        }
    }

    /// Create a catalog holding the built-in campus events
    pub fn seeded() -> Result<Self, CatalogError> {
        crate::loader::seed_loader::default_events().map(Self::with_events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Id the next created event will receive
    pub fn next_event_id(&self) -> EventId {
        self.next_id
    }

    /// Id the next registration will receive
    pub fn next_registration_id(&self) -> RegistrationId {
        self.next_registration_id
    }

    /// All events in storage order
    pub fn all_events(&self) -> &[Event] {
        &self.events
    }

    /// First `limit` events in storage order
    pub fn recent_events(&self, limit: usize) -> &[Event] {
        &self.events[..limit.min(self.events.len())]
    }

    /// Validate `draft` and append it as a new event
    pub fn create_event(&mut self, draft: EventDraft) -> Result<&Event, CatalogError> {
        let data = NewEvent::try_from(draft)?;
        Ok(self.insert_event(data))
    }

    /// Append an already validated event
    pub fn insert_event(&mut self, data: NewEvent) -> &Event {
        let id = self.next_id;
        self.next_id += 1;

        let idx = self.events.len();
        self.events.push(Event::new(id, data));
        let event = &self.events[idx];

        info!(
            event_id = event.id,
            title = %event.title,
            capacity = event.capacity,
            "Event created"
        );
        event
    }

    pub fn get_event_by_id(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Register a student for an event, timestamped with the local clock
    pub fn register_for_event(
        &mut self,
        event_id: EventId,
        draft: RegistrationDraft,
    ) -> Result<&Registration, CatalogError> {
        let data = NewRegistration::try_from(draft)?;
        self.register_at(event_id, data, Local::now().naive_local())
    }

    /// Register a student for an event with an explicit timestamp
    ///
    /// Checks run in a fixed order: unknown event, then capacity, then
    /// duplicate student id. A student retrying against a full event is
    /// therefore told it is full even if already registered.
    pub fn register_at(
        &mut self,
        event_id: EventId,
        data: NewRegistration,
        at: NaiveDateTime,
    ) -> Result<&Registration, CatalogError> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or(CatalogError::NotFound(event_id))?;

        if event.is_full() {
            debug!(event_id, capacity = event.capacity, "Registration rejected: event full");
            return Err(CatalogError::CapacityExceeded);
        }

        if event.has_student(&data.student_id) {
            debug!(event_id, student_id = %data.student_id, "Registration rejected: duplicate");
            return Err(CatalogError::DuplicateRegistration);
        }

        let id = self.next_registration_id;
        self.next_registration_id += 1;

        event.registrations.push(Registration {
            id,
            event_id,
            student_name: data.student_name,
            student_id: data.student_id,
            student_email: data.student_email,
            student_phone: data.student_phone,
            registration_date: at,
            status: RegistrationStatus::Confirmed,
        });

        let registration = &event.registrations[event.registrations.len() - 1];
        info!(
            event_id,
            registration_id = registration.id,
            student_id = %registration.student_id,
            seats_left = event.seats_left(),
            "Registration confirmed"
        );
        Ok(registration)
    }

    pub fn dashboard_stats(&self, today: NaiveDate) -> DashboardStats {
        stats::dashboard_stats(&self.events, today)
    }

    /// Events on `date`, in storage order
    pub fn events_by_date(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    /// Events in the given year and month, in storage order
    pub fn events_by_month(&self, year: i32, month: u32) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.date.year() == year && e.date.month() == month)
            .collect()
    }

    /// Events matching an optional category and search term, in storage order
    pub fn filter_events(&self, category: Option<&str>, search: Option<&str>) -> Vec<&Event> {
        self.matching(&EventFilter::new(category, search))
    }

    pub fn matching(&self, filter: &EventFilter) -> Vec<&Event> {
        if filter.is_empty() {
            return self.events.iter().collect();
        }
        self.events.iter().filter(|e| filter.matches(e)).collect()
    }

    /// Every registration with its event's title and date copied alongside
    pub fn all_registrations(&self) -> Vec<RegistrationView> {
        self.events
            .iter()
            .flat_map(|event| {
                event.registrations.iter().map(move |registration| RegistrationView {
                    registration: registration.clone(),
                    event_title: event.title.clone(),
                    event_date: event.date,
                })
            })
            .collect()
    }

    pub fn total_registrations(&self) -> usize {
        self.events.iter().map(|e| e.registrations.len()).sum()
    }
}
