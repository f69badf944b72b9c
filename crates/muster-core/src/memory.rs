// In-memory event store
//
// Keeps all events in a map guarded by an async RwLock. This is the
// production store for this single-process service and also the backend
// used by tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::Result;
use crate::event::Event;
use crate::store::EventStore;

/// In-memory event store keyed by event id
#[derive(Debug, Default, Clone)]
pub struct InMemoryEventStore {
    events: Arc<RwLock<HashMap<Uuid, Event>>>,
}

impl InMemoryEventStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored events
    pub async fn count(&self) -> usize {
        self.events.read().await.len()
    }

    /// Clear all events (for testing)
    pub async fn clear(&self) {
        self.events.write().await.clear();
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn get(&self, id: Uuid) -> Result<Option<Event>> {
        Ok(self.events.read().await.get(&id).cloned())
    }

    async fn put(&self, event: Event) -> Result<()> {
        self.events.write().await.insert(event.id, event);
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<bool> {
        Ok(self.events.write().await.remove(&id).is_some())
    }

    async fn all(&self) -> Result<Vec<Event>> {
        Ok(self.events.read().await.values().cloned().collect())
    }
}
