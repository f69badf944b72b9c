// Event lifecycle service - business rules layer
//
// CONVENTION: all business rules live here. No HTTP concepts (status codes,
// headers) anywhere in this module; failures are typed EventError values and
// the transport layer is the single point that converts them to responses.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::{EventError, Result};
use crate::event::{CreateEventInput, Event, EventFilter, EventStatus, Pagination, UpdateEventInput};
use crate::store::EventStore;

/// Enforces all invariants around event records: ownership, status gating,
/// capacity constraints, and duplicate-free registration. Sole reader and
/// writer of the store.
pub struct EventService {
    store: Arc<dyn EventStore>,
    // Serializes read-modify-write operations (update/delete/register) so
    // two concurrent registrations cannot both observe the last free slot.
    // A global lock is sufficient at this scale.
    write_lock: Mutex<()>,
}

impl EventService {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Create a new event owned by `organizer_id`, starting in `Draft` with
    /// an empty roster.
    pub async fn create(&self, input: CreateEventInput, organizer_id: &str) -> Result<Event> {
        tracing::info!(title = %input.title, organizer_id = %organizer_id, "Creating event");

        if input.capacity < 1 {
            return Err(EventError::InvalidCapacity);
        }

        let now = Utc::now();
        let event = Event {
            id: Uuid::now_v7(),
            title: input.title,
            description: input.description,
            date: input.date,
            location: input.location,
            capacity: input.capacity,
            attendees: vec![],
            organizer_id: organizer_id.to_string(),
            tags: input.tags.unwrap_or_default(),
            status: EventStatus::Draft,
            created_at: now,
            updated_at: now,
        };

        self.store.put(event.clone()).await?;
        tracing::info!(event_id = %event.id, "Event created");
        Ok(event)
    }

    /// Fetch one event. Pure read.
    pub async fn get(&self, id: Uuid) -> Result<Event> {
        self.store
            .get(id)
            .await?
            .ok_or(EventError::NotFound(id))
    }

    /// Apply a partial patch on behalf of `requester_id`. Only the organizer
    /// may update, and capacity may never shrink below the current roster.
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateEventInput,
        requester_id: &str,
    ) -> Result<Event> {
        let _guard = self.write_lock.lock().await;
        let mut event = self.get(id).await?;

        if event.organizer_id != requester_id {
            return Err(EventError::Unauthorized);
        }

        if let Some(capacity) = input.capacity {
            if (capacity as usize) < event.attendees.len() {
                return Err(EventError::CapacityBelowAttendees {
                    attendees: event.attendees.len(),
                });
            }
        }

        if let Some(title) = input.title {
            event.title = title;
        }
        if let Some(description) = input.description {
            event.description = description;
        }
        if let Some(date) = input.date {
            event.date = date;
        }
        if let Some(location) = input.location {
            event.location = location;
        }
        if let Some(capacity) = input.capacity {
            event.capacity = capacity;
        }
        if let Some(tags) = input.tags {
            event.tags = tags;
        }
        if let Some(status) = input.status {
            // No transition graph: any status is reachable from any other.
            event.status = status;
        }
        event.updated_at = Utc::now();

        self.store.put(event.clone()).await?;
        tracing::info!(event_id = %id, "Event updated");
        Ok(event)
    }

    /// Remove an event permanently. Organizer only.
    pub async fn delete(&self, id: Uuid, requester_id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let event = self.get(id).await?;

        if event.organizer_id != requester_id {
            return Err(EventError::Unauthorized);
        }

        self.store.remove(id).await?;
        tracing::info!(event_id = %id, "Event deleted");
        Ok(())
    }

    /// List events matching `filter`, windowed by `pagination`.
    ///
    /// Results are ordered by creation time ascending (id as tiebreaker) so
    /// paging is deterministic. The returned total counts the whole filtered
    /// set, not the page. A page past the end yields an empty vec.
    pub async fn list(
        &self,
        filter: EventFilter,
        pagination: Pagination,
    ) -> Result<(Vec<Event>, usize)> {
        let mut results: Vec<Event> = self
            .store
            .all()
            .await?
            .into_iter()
            .filter(|e| filter.matches(e))
            .collect();
        results.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));

        let total = results.len();
        let start = pagination
            .page
            .saturating_sub(1)
            .saturating_mul(pagination.page_size) as usize;
        let page: Vec<Event> = results
            .into_iter()
            .skip(start)
            .take(pagination.page_size as usize)
            .collect();

        Ok((page, total))
    }

    /// Register `attendee_id` into the event's roster.
    ///
    /// Check order is fixed: published gate, then capacity, then duplicate.
    pub async fn register_attendee(&self, event_id: Uuid, attendee_id: &str) -> Result<Event> {
        let _guard = self.write_lock.lock().await;
        let mut event = self.get(event_id).await?;

        if event.status != EventStatus::Published {
            return Err(EventError::NotPublished);
        }

        if event.attendees.len() >= event.capacity as usize {
            return Err(EventError::Full);
        }

        if event.attendees.iter().any(|a| a == attendee_id) {
            return Err(EventError::AlreadyRegistered);
        }

        event.attendees.push(attendee_id.to_string());
        event.updated_at = Utc::now();
        self.store.put(event.clone()).await?;

        tracing::info!(event_id = %event_id, attendee_id = %attendee_id, "Attendee registered");
        Ok(event)
    }
}
