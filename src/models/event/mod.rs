// Event module
// Countdown event model: a titled target instant with display hints

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use super::style::DEFAULT_GRADIENT;

/// Identifier for an event within a session. Ids are handed out by the
/// registry from a monotonic counter and never reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub u64);

/// A countdown target the user is watching.
///
/// `date` is the authoritative absolute instant the countdown runs against.
/// `timezone` only affects how the date is displayed and edited, never the
/// countdown arithmetic itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: DateTime<Utc>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub timezone: Option<Tz>,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `id` - Registry-assigned identifier
    /// * `title` - Event title (required, non-empty)
    /// * `date` - Target instant
    pub fn new(id: EventId, title: impl Into<String>, date: DateTime<Utc>) -> Result<Self, String> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        Ok(Self {
            id,
            title,
            date,
            description: None,
            color: None,
            timezone: None,
        })
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder(id: EventId) -> EventBuilder {
        EventBuilder::new(id)
    }

    /// Gradient token to render this event with.
    pub fn gradient(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_GRADIENT)
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: EventId,
    title: Option<String>,
    date: Option<DateTime<Utc>>,
    description: Option<String>,
    color: Option<String>,
    timezone: Option<Tz>,
}

impl EventBuilder {
    pub fn new(id: EventId) -> Self {
        Self {
            id,
            title: None,
            date: None,
            description: None,
            color: None,
            timezone: None,
        }
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the target instant
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the event description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the gradient color token
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the display timezone
    pub fn timezone(mut self, timezone: Tz) -> Self {
        self.timezone = Some(timezone);
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let title = self.title.ok_or("Event title is required")?;
        let date = self.date.ok_or("Event date is required")?;

        let event = Event {
            id: self.id,
            title,
            date,
            description: self.description,
            color: self.color,
            timezone: self.timezone,
        };

        event.validate()?;
        Ok(event)
    }
}
