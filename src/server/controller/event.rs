use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        event::{CreateEventForm, EventDetailDto, EventDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::event::{CreateEventParams, EventSummary},
        service::event::EventService,
        state::AppState,
        util::{
            extract::{Json, Multipart, Path, Query},
            multipart::FormData,
        },
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "events";

#[derive(Deserialize)]
pub struct LimitParams {
    pub limit: Option<u64>,
}

#[derive(Deserialize)]
pub struct EventSearchParams {
    pub search: Option<String>,
    pub categories: Option<String>,
}

fn into_dtos(events: Vec<EventSummary>) -> Vec<EventDto> {
    events.into_iter().map(EventSummary::into_dto).collect()
}

/// Get popular upcoming events.
///
/// Events are ranked by participants plus likes, ties broken by the earliest date.
///
/// # Returns
/// - `200 OK` - Up to `limit` events (default 10, max 100)
#[utoipa::path(
    get,
    path = "/api/events/popular",
    tag = EVENT_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Maximum number of events (default: 10)")
    ),
    responses(
        (status = 200, description = "Popular events", body = ApiResponse<Vec<EventDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_popular_events(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).get_popular(params.limit).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(into_dtos(events)))))
}

/// Get the most recently created events.
///
/// # Returns
/// - `200 OK` - Up to `limit` events (default 20, max 100)
#[utoipa::path(
    get,
    path = "/api/events/recent",
    tag = EVENT_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Maximum number of events (default: 20)")
    ),
    responses(
        (status = 200, description = "Recent events", body = ApiResponse<Vec<EventDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recent_events(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).get_recent(params.limit).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(into_dtos(events)))))
}

/// Search upcoming events.
///
/// Both filters are optional; without any filter every upcoming event is returned.
///
/// # Returns
/// - `200 OK` - Matching events ordered by date
#[utoipa::path(
    get,
    path = "/api/events/search",
    tag = EVENT_TAG,
    params(
        ("search" = Option<String>, Query, description = "Text matched against title, description and location"),
        ("categories" = Option<String>, Query, description = "Comma separated category IDs")
    ),
    responses(
        (status = 200, description = "Matching events", body = ApiResponse<Vec<EventDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_events(
    State(state): State<AppState>,
    Query(params): Query<EventSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db)
        .search(params.search.as_deref(), params.categories.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(into_dtos(events)))))
}

/// Get an event with its participants.
///
/// # Access Control
/// - Public; a valid bearer token adds `is_participant` and `liked_by_user`
///
/// # Returns
/// - `200 OK` - Event detail
/// - `404 Not Found` - Unknown event
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event detail", body = ApiResponse<EventDetailDto>),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.tokens, &headers).viewer_id();

    let detail = EventService::new(&state.db).get_detail(id, viewer).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(detail.into_dto()))))
}

/// Create an event.
///
/// Accepts `multipart/form-data` so an image can be uploaded with the event. The caller
/// becomes the organizer.
///
/// # Access Control
/// - Requires a valid bearer token
///
/// # Returns
/// - `201 Created` - The created event
/// - `400 Bad Request` - Invalid field, unknown category or rejected image
/// - `401 Unauthorized` - Missing or invalid token
/// - `413 Payload Too Large` - Body over the request limit
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    security(("bearer_auth" = [])),
    request_body(content = CreateEventForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Event created", body = ApiResponse<EventDto>),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Multipart(multipart): Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let mut form = FormData::from_multipart(multipart).await?;
    let params = CreateEventParams::from_form(user.id, &form)?;
    let image = form.take_file("image");

    let event = EventService::new(&state.db)
        .create(params, image, &state.uploads)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            event.into_dto(),
            "Event created successfully",
        )),
    ))
}

/// Join an event.
///
/// Joining an event twice is accepted and keeps a single participation.
///
/// # Access Control
/// - Requires a valid bearer token
///
/// # Returns
/// - `200 OK` - Caller is a participant
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Unknown event
/// - `409 Conflict` - Event is full
#[utoipa::path(
    post,
    path = "/api/events/{id}/join",
    tag = EVENT_TAG,
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Joined event", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Event is full", body = ErrorDto)
    ),
)]
pub async fn join_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    EventService::new(&state.db).join(id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Joined event successfully")),
    ))
}

/// Leave an event. Leaving an event the caller never joined is a no-op.
///
/// # Access Control
/// - Requires a valid bearer token
#[utoipa::path(
    delete,
    path = "/api/events/{id}/leave",
    tag = EVENT_TAG,
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Left event", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn leave_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    EventService::new(&state.db).leave(id, user.id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Left event successfully"))))
}

/// Like an event. Liking twice keeps one like.
///
/// # Access Control
/// - Requires a valid bearer token
///
/// # Returns
/// - `200 OK` - Event liked
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Unknown event
#[utoipa::path(
    post,
    path = "/api/events/{id}/like",
    tag = EVENT_TAG,
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event liked", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn like_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    EventService::new(&state.db).like(id, user.id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Event liked"))))
}

/// Remove a like. A no-op when the event wasn't liked.
///
/// # Access Control
/// - Requires a valid bearer token
#[utoipa::path(
    delete,
    path = "/api/events/{id}/unlike",
    tag = EVENT_TAG,
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Like removed", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn unlike_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    EventService::new(&state.db).unlike(id, user.id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Event unliked"))))
}
