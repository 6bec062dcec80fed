//! Session-scoped store of countdown events and the active selection.
//!
//! Intentionally volatile: the registry never touches disk. Its state lives
//! exactly as long as the process, which keeps the core self-contained.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use super::super::countdown::Clock;
use crate::models::event::{Event, EventId};
use crate::models::style::DEFAULT_GRADIENT;

const PLACEHOLDER_TITLE: &str = "New Event";
const PLACEHOLDER_DESCRIPTION: &str = "Add your description";

/// Ordered collection of events plus the active selection.
pub struct EventRegistry {
    events: Vec<Event>,
    active: Option<EventId>,
    next_id: u64,
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EventRegistry {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            active: None,
            next_id: 1,
        }
    }

    /// Seed a registry with the given events. Ids continue above the highest
    /// seeded id; the first event becomes the active selection.
    pub fn with_events(events: Vec<Event>) -> Self {
        let next_id = events.iter().map(|e| e.id.0).max().unwrap_or(0) + 1;
        let active = events.first().map(|e| e.id);
        Self {
            events,
            active,
            next_id,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn active_event(&self) -> Option<&Event> {
        let id = self.active?;
        self.events.iter().find(|e| e.id == id)
    }

    /// Create an event with placeholder content targeting `now`, append it,
    /// and make it the active selection. Returns its id.
    ///
    /// Ids come from a counter that only moves forward, so a deleted event's
    /// id is never handed out again within the session.
    pub fn add_event(&mut self, now: DateTime<Utc>) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;

        self.events.push(Event {
            id,
            title: PLACEHOLDER_TITLE.to_string(),
            date: now,
            description: Some(PLACEHOLDER_DESCRIPTION.to_string()),
            color: Some(DEFAULT_GRADIENT.to_string()),
            timezone: None,
        });
        self.active = Some(id);

        log::info!("Added event {:?}", id);
        id
    }

    /// Convenience wrapper that stamps the event from the given clock.
    pub fn add_event_now(&mut self, clock: &dyn Clock) -> EventId {
        self.add_event(clock.now())
    }

    /// Replace the event with the same id in place, preserving order. If the
    /// edited event is the active selection, the selection follows the new
    /// value automatically (it is resolved by id). Returns whether a match
    /// was found.
    pub fn edit_event(&mut self, updated: Event) -> bool {
        match self.events.iter_mut().find(|e| e.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Remove the event with the given id. If it was active, the selection
    /// falls back to the first remaining event, or to none.
    pub fn delete_event(&mut self, id: EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        if self.events.len() == before {
            return false;
        }

        if self.active == Some(id) {
            self.active = self.events.first().map(|e| e.id);
        }
        log::info!("Deleted event {:?}", id);
        true
    }

    /// Set the active selection. Unknown ids are ignored.
    pub fn select_event(&mut self, id: EventId) -> bool {
        if self.events.iter().any(|e| e.id == id) {
            self.active = Some(id);
            true
        } else {
            false
        }
    }
}

/// The three starter events shipped with the app, for front ends that want a
/// populated first run.
pub fn sample_events() -> Vec<Event> {
    fn at(tz: Tz, y: i32, m: u32, d: u32) -> DateTime<Utc> {
        use chrono::TimeZone;
        // Midnight local in the event's zone; these dates always exist.
        tz.with_ymd_and_hms(y, m, d, 0, 0, 0)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_default()
    }

    let singapore = chrono_tz::Asia::Singapore;
    vec![
        Event {
            id: EventId(1),
            title: "New Year 2026".to_string(),
            date: at(singapore, 2026, 1, 1),
            description: Some("Countdown to 2026!".to_string()),
            color: Some("from-blue-500 to-purple-600".to_string()),
            timezone: Some(singapore),
        },
        Event {
            id: EventId(2),
            title: "Summer Break".to_string(),
            date: at(singapore, 2025, 6, 1),
            description: Some("Time for summer vacation!".to_string()),
            color: Some("from-orange-400 to-pink-500".to_string()),
            timezone: Some(singapore),
        },
        Event {
            id: EventId(3),
            title: "Christmas 2025".to_string(),
            date: at(singapore, 2025, 12, 25),
            description: Some("Ho ho ho!".to_string()),
            color: Some("from-red-500 to-green-500".to_string()),
            timezone: Some(singapore),
        },
    ]
}
