use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        auth::{AuthDto, LoginDto, RegisterDto},
        user::UserProfileDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::auth::RegisterParams,
        service::auth::AuthService,
        state::AppState,
        util::extract::Json,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the user, stores their hobbies and returns a session token so the client is
/// signed in right away.
///
/// # Returns
/// - `201 Created` - User created, token issued
/// - `400 Bad Request` - Blank required field or unknown hobby category
/// - `409 Conflict` - Username already taken
/// - `429 Too Many Requests` - Rate limit exceeded
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<AuthDto>),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Username already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterParams::from_dto(payload)?;

    let session = AuthService::new(&state.db, &state.tokens)
        .register(params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            session.into_dto(),
            "User registered successfully",
        )),
    ))
}

/// Log in with username and password.
///
/// # Returns
/// - `200 OK` - Credentials valid, token issued
/// - `400 Bad Request` - Blank username or password
/// - `401 Unauthorized` - Unknown user or wrong password
/// - `429 Too Many Requests` - Rate limit exceeded
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<AuthDto>),
        (status = 400, description = "Missing credentials", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthService::new(&state.db, &state.tokens)
        .login(&payload.username, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(
            session.into_dto(),
            "Login successful",
        )),
    ))
}

/// Get the authenticated user's profile.
///
/// # Access Control
/// - Requires a valid bearer token
///
/// # Returns
/// - `200 OK` - Profile with hobbies and counters
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - User deleted since the token was issued
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserProfileDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&state.db, &state.tokens, &headers).token_user_id()?;

    let profile = AuthService::new(&state.db, &state.tokens).me(user_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(profile.into_dto()))))
}

/// Log out.
///
/// Tokens are stateless, so this only confirms the token was valid; the client
/// discards it.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    tracing::debug!("User {} logged out", user.id);

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Logged out successfully")),
    ))
}
