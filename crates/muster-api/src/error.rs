// EventError -> HTTP response conversion
//
// CONVENTION: this is the ONLY place where domain errors become HTTP
// responses. Handlers propagate ApiError with `?`; nothing below this layer
// knows about status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use muster_core::EventError;

use crate::response::ApiResponse;

/// Wrapper giving EventError an IntoResponse impl
#[derive(Debug)]
pub struct ApiError(pub EventError);

impl From<EventError> for ApiError {
    fn from(err: EventError) -> Self {
        ApiError(err)
    }
}

fn status_for(err: &EventError) -> StatusCode {
    match err {
        EventError::InvalidCapacity | EventError::Validation(_) | EventError::NotPublished => {
            StatusCode::BAD_REQUEST
        }
        EventError::Unauthorized => StatusCode::UNAUTHORIZED,
        EventError::NotFound(_) => StatusCode::NOT_FOUND,
        EventError::CapacityBelowAttendees { .. }
        | EventError::Full
        | EventError::AlreadyRegistered => StatusCode::CONFLICT,
        EventError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(&err);
        let code = err.code();

        let message = if err.is_operational() {
            tracing::warn!(code = code, status = %status, "Operational error: {}", err);
            err.to_string()
        } else {
            // Log full detail, surface a generic message without internals.
            tracing::error!("Unhandled error: {:?}", err);
            "An unexpected error occurred".to_string()
        };

        (status, Json(ApiResponse::error(code, message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn operational_errors_map_to_their_status() {
        assert_eq!(
            status_for(&EventError::InvalidCapacity),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&EventError::NotPublished),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&EventError::Unauthorized),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(&EventError::NotFound(Uuid::now_v7())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&EventError::CapacityBelowAttendees { attendees: 3 }),
            StatusCode::CONFLICT
        );
        assert_eq!(status_for(&EventError::Full), StatusCode::CONFLICT);
        assert_eq!(
            status_for(&EventError::AlreadyRegistered),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn internal_errors_hide_detail() {
        let response =
            ApiError(EventError::Internal(anyhow::anyhow!("pool exhausted"))).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
