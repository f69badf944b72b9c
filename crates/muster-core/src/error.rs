// Error types for the event lifecycle service

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for event service operations
pub type Result<T> = std::result::Result<T, EventError>;

/// Errors raised by the event lifecycle service
///
/// Every variant except `Internal` is operational: an expected outcome of a
/// valid business rule, carrying a stable machine code via [`EventError::code`].
/// The transport layer is the only place these are turned into HTTP responses.
#[derive(Debug, Error)]
pub enum EventError {
    /// Capacity below the minimum of 1
    #[error("Capacity must be at least 1")]
    InvalidCapacity,

    /// Request shape/length validation failed at the boundary
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Registration attempted on an event that is not published
    #[error("Can only register for published events")]
    NotPublished,

    /// Mutation attempted by someone other than the organizer
    #[error("Only the organizer can modify this event")]
    Unauthorized,

    /// No event with the given id
    #[error("Event not found: {0}")]
    NotFound(Uuid),

    /// Capacity patch would drop below the current roster size
    #[error("Cannot reduce capacity below current attendee count ({attendees})")]
    CapacityBelowAttendees { attendees: usize },

    /// Roster already at capacity
    #[error("Event is at full capacity")]
    Full,

    /// Attendee already on the roster
    #[error("Already registered for this event")]
    AlreadyRegistered,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl EventError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            EventError::InvalidCapacity => "INVALID_CAPACITY",
            EventError::Validation(_) => "VALIDATION_ERROR",
            EventError::NotPublished => "EVENT_NOT_PUBLISHED",
            EventError::Unauthorized => "UNAUTHORIZED",
            EventError::NotFound(_) => "EVENT_NOT_FOUND",
            EventError::CapacityBelowAttendees { .. } => "CAPACITY_BELOW_ATTENDEES",
            EventError::Full => "EVENT_FULL",
            EventError::AlreadyRegistered => "ALREADY_REGISTERED",
            EventError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// False only for unexpected internal failures
    pub fn is_operational(&self) -> bool {
        !matches!(self, EventError::Internal(_))
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        EventError::Validation(msg.into())
    }
}
