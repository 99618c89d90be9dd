use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        search::SearchResultsDto,
    },
    server::{
        error::AppError,
        model::search::SearchType,
        service::search::SearchService,
        state::AppState,
        util::extract::{Json, Query},
    },
};

/// Tag for grouping search endpoints in OpenAPI documentation
pub static SEARCH_TAG: &str = "search";

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Search users and upcoming events at once.
///
/// A blank query returns empty lists. `type` picks which lists are filled.
///
/// # Returns
/// - `200 OK` - Matching users and events
/// - `400 Bad Request` - Unknown search type
#[utoipa::path(
    get,
    path = "/api/search",
    tag = SEARCH_TAG,
    params(
        ("q" = Option<String>, Query, description = "Search term"),
        ("type" = Option<String>, Query, description = "all (default), users or events")
    ),
    responses(
        (status = 200, description = "Search results", body = ApiResponse<SearchResultsDto>),
        (status = 400, description = "Unknown search type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let kind: SearchType = params.kind.parse()?;

    let results = SearchService::new(&state.db)
        .search(&params.q, kind)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(results.into_dto()))))
}
