// Event domain types
//
// These types represent the Event entity, its lifecycle status, and the
// inputs the service accepts. Used by both the service layer and the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Event lifecycle status
///
/// `Draft` is the only initial state. There is no enforced transition graph:
/// any status may be set via update. Registration is only open while
/// `Published`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Draft,
    Published,
    Cancelled,
    Completed,
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventStatus::Draft => write!(f, "draft"),
            EventStatus::Published => write!(f, "published"),
            EventStatus::Cancelled => write!(f, "cancelled"),
            EventStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(EventStatus::Draft),
            "published" => Ok(EventStatus::Published),
            "cancelled" => Ok(EventStatus::Cancelled),
            "completed" => Ok(EventStatus::Completed),
            _ => Err(format!("Unknown event status: {}", s)),
        }
    }
}

/// A schedulable activity with bounded attendee capacity, owned by one
/// organizer.
///
/// Invariants maintained by the service layer:
/// - `attendees.len() <= capacity as usize`
/// - `capacity >= 1`
/// - `organizer_id` never changes after creation
/// - `updated_at >= created_at`, refreshed on every mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub capacity: u32,
    /// Attendee ids, unique within one event
    pub attendees: Vec<String>,
    pub organizer_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an event. Shape/length validation happens at the
/// transport boundary; the service re-checks `capacity >= 1`.
#[derive(Debug, Clone)]
pub struct CreateEventInput {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub capacity: u32,
    pub tags: Option<Vec<String>>,
}

/// Partial update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub capacity: Option<u32>,
    pub tags: Option<Vec<String>>,
    pub status: Option<EventStatus>,
}

/// Conjunctive list filter: every present predicate must hold.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub status: Option<EventStatus>,
    pub organizer_id: Option<String>,
    pub tag: Option<String>,
    pub from_date: Option<DateTime<Utc>>,
    pub to_date: Option<DateTime<Utc>>,
}

impl EventFilter {
    /// True if `event` satisfies every present predicate.
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(status) = self.status {
            if event.status != status {
                return false;
            }
        }
        if let Some(organizer_id) = &self.organizer_id {
            if &event.organizer_id != organizer_id {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !event.tags.iter().any(|t| t == tag) {
                return false;
            }
        }
        if let Some(from_date) = self.from_date {
            if event.date < from_date {
                return false;
            }
        }
        if let Some(to_date) = self.to_date {
            if event.date > to_date {
                return false;
            }
        }
        true
    }
}

/// 1-indexed page window applied after filtering.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
        }
    }
}
