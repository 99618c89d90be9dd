use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        category::CategoryDto,
        event::EventDto,
    },
    server::{
        error::AppError,
        model::{category::Category, event::EventSummary},
        service::category::CategoryService,
        state::AppState,
        util::extract::{Json, Path},
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "categories";

/// Get all categories ordered by name.
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "All categories", body = ApiResponse<Vec<CategoryDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories: Vec<CategoryDto> = CategoryService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(Category::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(categories))))
}

/// Get a category by ID.
///
/// # Returns
/// - `200 OK` - Category found
/// - `404 Not Found` - Unknown category
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category", body = ApiResponse<CategoryDto>),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(category.into_dto()))))
}

/// Get upcoming events of a category, soonest first.
///
/// # Returns
/// - `200 OK` - Possibly empty list of events
/// - `404 Not Found` - Unknown category
#[utoipa::path(
    get,
    path = "/api/categories/{id}/events",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Upcoming events", body = ApiResponse<Vec<EventDto>>),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category_events(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events: Vec<EventDto> = CategoryService::new(&state.db)
        .get_upcoming_events(id)
        .await?
        .into_iter()
        .map(EventSummary::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(events))))
}
