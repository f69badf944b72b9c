// Event Lifecycle Core
//
// This crate implements the business-rules engine for the event service:
// ownership checks, status gating, capacity constraints, and
// idempotent-rejecting attendee registration.
//
// Key design decisions:
// - Business rules are store-agnostic: EventService talks to the EventStore
//   trait, never to a concrete container
// - The in-memory store is the production store for this single-process
//   service and doubles as the test backend
// - Errors are a typed enum with stable machine codes; HTTP mapping happens
//   only in the transport crate
// - Read-modify-write operations are serialized through one service-level
//   lock so concurrent registrations cannot oversell the last slot

pub mod error;
pub mod event;
pub mod memory;
pub mod service;
pub mod store;

// Re-exports for convenience
pub use error::{EventError, Result};
pub use event::{CreateEventInput, Event, EventFilter, EventStatus, Pagination, UpdateEventInput};
pub use memory::InMemoryEventStore;
pub use service::EventService;
pub use store::EventStore;
