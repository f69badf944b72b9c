// Muster API transport layer
//
// Router construction lives here so integration tests can drive the full
// HTTP surface with tower::ServiceExt::oneshot without binding a socket.

pub mod error;
pub mod events;
pub mod response;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use muster_core::{Event, EventStatus};

use crate::response::{ApiResponse, ErrorBody, ResponseMeta};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        events::create_event,
        events::get_event,
        events::update_event,
        events::delete_event,
        events::list_events,
        events::register_attendee,
    ),
    components(
        schemas(
            Event, EventStatus,
            events::CreateEventRequest,
            events::UpdateEventRequest,
            ApiResponse<Event>,
            ApiResponse<Vec<Event>>,
            ErrorBody,
            ResponseMeta,
        )
    ),
    tags(
        (name = "events", description = "Event lifecycle and registration endpoints")
    ),
    info(
        title = "Muster API",
        version = "0.1.0",
        description = "API for managing events, attendee registration, filtering, and pagination",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
struct ApiDoc;

/// Build the full application router
pub fn app(state: events::AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(events::routes(state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
}
