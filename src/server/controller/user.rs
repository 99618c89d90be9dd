use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        event::EventDto,
        user::{UpdateUserForm, UserDto, UserEventsDto, UserProfileDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            event::EventSummary,
            user::{UpdateUserParams, User},
        },
        service::user::UserService,
        state::AppState,
        util::{
            extract::{Json, Multipart, Path, Query},
            multipart::FormData,
        },
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

#[derive(Deserialize)]
pub struct UserSearchParams {
    pub search: Option<String>,
}

fn into_dtos(events: Vec<EventSummary>) -> Vec<EventDto> {
    events.into_iter().map(EventSummary::into_dto).collect()
}

/// Search users by username or name.
///
/// A blank or missing term returns an empty list; at most 20 users are returned.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("search" = Option<String>, Query, description = "Username or name fragment")
    ),
    responses(
        (status = 200, description = "Matching users", body = ApiResponse<Vec<UserDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<UserSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let users: Vec<UserDto> = UserService::new(&state.db)
        .search(params.search.as_deref())
        .await?
        .into_iter()
        .map(User::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(users))))
}

/// Get a user's public profile.
///
/// # Returns
/// - `200 OK` - Profile with hobbies and counters
/// - `404 Not Found` - Unknown user
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = ApiResponse<UserProfileDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let profile = UserService::new(&state.db).get_profile(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(profile.into_dto()))))
}

/// Update the caller's own profile.
///
/// Only fields present in the form change. A `hobbies` field replaces the whole hobby
/// set; a `profile_image` file replaces the profile picture.
///
/// # Access Control
/// - `ProfileOwner` - The caller must be the user being edited
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Invalid field, unknown hobby or rejected image
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Editing another user's profile
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body(content = UpdateUserForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Updated profile", body = ApiResponse<UserProfileDto>),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the profile owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Multipart(multipart): Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ProfileOwner(id)])
        .await?;

    let mut form = FormData::from_multipart(multipart).await?;
    let params = UpdateUserParams::from_form(&form)?;
    let image = form.take_file("profile_image");

    let profile = UserService::new(&state.db)
        .update(id, params, image, &state.uploads)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(
            profile.into_dto(),
            "Profile updated successfully",
        )),
    ))
}

/// Get events organized by a user, latest date first.
#[utoipa::path(
    get,
    path = "/api/users/{id}/events/organized",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Organized events", body = ApiResponse<Vec<EventDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_organized_events(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = UserService::new(&state.db).organized(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(into_dtos(events)))))
}

/// Get events a user joined, latest date first.
#[utoipa::path(
    get,
    path = "/api/users/{id}/events/participating",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Joined events", body = ApiResponse<Vec<EventDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_participating_events(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = UserService::new(&state.db).participating(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(into_dtos(events)))))
}

/// Get events a user liked, most recently liked first.
#[utoipa::path(
    get,
    path = "/api/users/{id}/events/liked",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Liked events", body = ApiResponse<Vec<EventDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_liked_events(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = UserService::new(&state.db).liked(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(into_dtos(events)))))
}

/// Get both the organized and participating lists of a user.
#[utoipa::path(
    get,
    path = "/api/users/{id}/events",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Organized and joined events", body = ApiResponse<UserEventsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_events(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = UserService::new(&state.db).events(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(events.into_dto()))))
}
