// Event CRUD and registration HTTP routes
//
// CONVENTION: routes translate HTTP -> service calls -> envelope. No
// business logic here; the service owns every invariant.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use muster_core::{
    CreateEventInput, Event, EventError, EventFilter, EventService, EventStatus, Pagination,
    UpdateEventInput,
};

use crate::error::ApiError;
use crate::response::ApiResponse;

const MAX_PAGE_SIZE: u32 = 100;

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

impl AppState {
    pub fn new(service: Arc<EventService>) -> Self {
        Self { service }
    }
}

/// Create event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/events", post(create_event).get(list_events))
        .route(
            "/api/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/api/events/{id}/register", post(register_attendee))
        .with_state(state)
}

/// Caller identity from the x-user-id header. The value is opaque and
/// pre-authenticated upstream; absence falls back to "anonymous".
fn identity(headers: &HeaderMap) -> String {
    headers
        .get("x-user-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("anonymous")
        .to_string()
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub capacity: u32,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub capacity: Option<u32>,
    pub tags: Option<Vec<String>>,
    pub status: Option<EventStatus>,
}

/// Query parameters for listing events
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsQuery {
    /// Exact status match
    pub status: Option<EventStatus>,
    /// Exact organizer match
    pub organizer_id: Option<String>,
    /// Tag membership
    pub tag: Option<String>,
    /// Inclusive lower bound on the event date (RFC 3339)
    pub from_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the event date (RFC 3339)
    pub to_date: Option<DateTime<Utc>>,
    /// 1-indexed page (default 1)
    pub page: Option<u32>,
    /// Page size (default 20, max 100)
    pub page_size: Option<u32>,
}

fn check_title(title: &str, problems: &mut Vec<String>) {
    if title.is_empty() || title.chars().count() > 200 {
        problems.push("title: must be 1-200 characters".to_string());
    }
}

fn check_description(description: &str, problems: &mut Vec<String>) {
    if description.chars().count() > 5000 {
        problems.push("description: must be at most 5000 characters".to_string());
    }
}

fn check_location(location: &str, problems: &mut Vec<String>) {
    if location.is_empty() || location.chars().count() > 500 {
        problems.push("location: must be 1-500 characters".to_string());
    }
}

fn check_tags(tags: &[String], problems: &mut Vec<String>) {
    if tags.len() > 10 {
        problems.push("tags: at most 10 tags".to_string());
    }
    if tags
        .iter()
        .any(|t| t.is_empty() || t.chars().count() > 50)
    {
        problems.push("tags: each tag must be 1-50 characters".to_string());
    }
}

fn fail_validation(problems: Vec<String>) -> Result<(), EventError> {
    if problems.is_empty() {
        Ok(())
    } else {
        Err(EventError::validation(problems.join("; ")))
    }
}

impl CreateEventRequest {
    fn validate(&self) -> Result<(), EventError> {
        let mut problems = Vec::new();
        check_title(&self.title, &mut problems);
        check_description(&self.description, &mut problems);
        check_location(&self.location, &mut problems);
        if let Some(tags) = &self.tags {
            check_tags(tags, &mut problems);
        }
        fail_validation(problems)
    }
}

impl UpdateEventRequest {
    fn validate(&self) -> Result<(), EventError> {
        let mut problems = Vec::new();
        if let Some(title) = &self.title {
            check_title(title, &mut problems);
        }
        if let Some(description) = &self.description {
            check_description(description, &mut problems);
        }
        if let Some(location) = &self.location {
            check_location(location, &mut problems);
        }
        if let Some(tags) = &self.tags {
            check_tags(tags, &mut problems);
        }
        fail_validation(problems)
    }
}

impl ListEventsQuery {
    fn pagination(&self) -> Result<Pagination, EventError> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(20);
        let mut problems = Vec::new();
        if page < 1 {
            problems.push("page: must be at least 1".to_string());
        }
        if page_size < 1 || page_size > MAX_PAGE_SIZE {
            problems.push(format!("pageSize: must be 1-{}", MAX_PAGE_SIZE));
        }
        fail_validation(problems)?;
        Ok(Pagination { page, page_size })
    }

    fn filter(&self) -> EventFilter {
        EventFilter {
            status: self.status,
            organizer_id: self.organizer_id.clone(),
            tag: self.tag.clone(),
            from_date: self.from_date,
            to_date: self.to_date,
        }
    }
}

/// POST /api/events - Create a new event
#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = ApiResponse<Event>),
        (status = 400, description = "Invalid capacity or validation failure")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Event>>), ApiError> {
    req.validate()?;
    let organizer_id = identity(&headers);

    let input = CreateEventInput {
        title: req.title,
        description: req.description,
        date: req.date,
        location: req.location,
        capacity: req.capacity,
        tags: req.tags,
    };

    let event = state.service.create(input, &organizer_id).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(event))))
}

/// GET /api/events/{id} - Get event by ID
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = ApiResponse<Event>),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    let event = state.service.get(id).await?;
    Ok(Json(ApiResponse::success(event)))
}

/// PUT /api/events/{id} - Partially update an event (organizer only)
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Event updated", body = ApiResponse<Event>),
        (status = 401, description = "Requester is not the organizer"),
        (status = 404, description = "Event not found"),
        (status = 409, description = "Capacity below current attendee count")
    ),
    tag = "events"
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    req.validate()?;
    let requester_id = identity(&headers);

    let input = UpdateEventInput {
        title: req.title,
        description: req.description,
        date: req.date,
        location: req.location,
        capacity: req.capacity,
        tags: req.tags,
        status: req.status,
    };

    let event = state.service.update(id, input, &requester_id).await?;
    Ok(Json(ApiResponse::success(event)))
}

/// DELETE /api/events/{id} - Delete an event (organizer only)
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Requester is not the organizer"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let requester_id = identity(&headers);
    state.service.delete(id, &requester_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/events - List events with filtering and pagination
#[utoipa::path(
    get,
    path = "/api/events",
    params(ListEventsQuery),
    responses(
        (status = 200, description = "Filtered page of events", body = ApiResponse<Vec<Event>>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<ApiResponse<Vec<Event>>>, ApiError> {
    let pagination = query.pagination()?;
    let (events, total) = state.service.list(query.filter(), pagination).await?;
    Ok(Json(ApiResponse::paginated(
        events,
        pagination.page,
        pagination.page_size,
        total,
    )))
}

/// POST /api/events/{id}/register - Register the caller as an attendee
#[utoipa::path(
    post,
    path = "/api/events/{id}/register",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Attendee registered", body = ApiResponse<Event>),
        (status = 400, description = "Event is not published"),
        (status = 404, description = "Event not found"),
        (status = 409, description = "Event full or attendee already registered")
    ),
    tag = "events"
)]
pub async fn register_attendee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    let attendee_id = identity(&headers);
    let event = state.service.register_attendee(id, &attendee_id).await?;
    Ok(Json(ApiResponse::success(event)))
}
