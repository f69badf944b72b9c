// Store trait for pluggable event persistence
//
// The service depends on this trait, never on a concrete container.
// Implementations can:
// - Keep events in memory (the default for this single-process service)
// - Back onto a database for durable deployments

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::event::Event;

/// Trait for storing and retrieving event records by id
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Fetch one event, `None` if absent
    async fn get(&self, id: Uuid) -> Result<Option<Event>>;

    /// Insert or replace an event under its id
    async fn put(&self, event: Event) -> Result<()>;

    /// Remove an event; returns whether it existed
    async fn remove(&self, id: Uuid) -> Result<bool>;

    /// All stored events, in no contractual order
    async fn all(&self) -> Result<Vec<Event>>;
}
