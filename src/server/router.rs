//! HTTP routing, OpenAPI documentation and cross-cutting layers.

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method, StatusCode, Uri,
    },
    response::Response,
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorError, GovernorLayer};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::{
    openapi::{
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
        ComponentsBuilder,
    },
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        auth::{self, AUTH_TAG},
        category::{self, CATEGORY_TAG},
        event::{self, EVENT_TAG},
        health::{self, HEALTH_TAG},
        search::{self, SEARCH_TAG},
        user::{self, USER_TAG},
    },
    error::{config::ConfigError, error_response, AppError},
    service::upload::PUBLIC_PREFIX,
    state::AppState,
};

/// Extra room above the upload limit for the other multipart fields.
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Seconds between replenished login/register attempts per peer IP.
const AUTH_RATE_LIMIT_PERIOD_SECS: u64 = 6;
/// Attempts a peer IP may burst before being limited.
const AUTH_RATE_LIMIT_BURST: u32 = 10;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MyEventz API",
        description = "Social event discovery: users, events, categories and search"
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = AUTH_TAG, description = "Registration, login and session endpoints"),
        (name = EVENT_TAG, description = "Event listings, creation and participation"),
        (name = CATEGORY_TAG, description = "Event categories and hobbies"),
        (name = USER_TAG, description = "User profiles and per-user event lists"),
        (name = SEARCH_TAG, description = "Combined user and event search"),
        (name = HEALTH_TAG, description = "Service health"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(|| ComponentsBuilder::new().build());

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the complete application router.
///
/// Registers every API route with its OpenAPI metadata, then adds Swagger UI, the
/// health check, static upload files, the JSON 404 fallback and the CORS, tracing and
/// body size layers. Login and register get a per-IP rate limit when
/// `config.auth_rate_limit` is set; that limit keys on the peer address, so the router
/// must be served with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Returns
/// - `Ok(Router)` - Router with state applied
/// - `Err(AppError::ConfigErr)` - `CORS_ORIGIN` is not a valid header value or the
///   rate limiter could not be configured
pub fn router(state: AppState, config: &Config) -> Result<Router, AppError> {
    let (credential_routes, credential_api) = OpenApiRouter::<AppState>::new()
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .split_for_parts();

    let credential_routes = if config.auth_rate_limit {
        with_auth_rate_limit(credential_routes)?
    } else {
        credential_routes
    };

    let (api_routes, mut api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::me))
        .routes(routes!(auth::logout))
        .routes(routes!(event::get_popular_events))
        .routes(routes!(event::get_recent_events))
        .routes(routes!(event::search_events))
        .routes(routes!(event::create_event))
        .routes(routes!(event::get_event))
        .routes(routes!(event::join_event))
        .routes(routes!(event::leave_event))
        .routes(routes!(event::like_event))
        .routes(routes!(event::unlike_event))
        .routes(routes!(category::get_categories))
        .routes(routes!(category::get_category))
        .routes(routes!(category::get_category_events))
        .routes(routes!(user::search_users))
        .routes(routes!(user::get_user, user::update_user))
        .routes(routes!(user::get_organized_events))
        .routes(routes!(user::get_participating_events))
        .routes(routes!(user::get_liked_events))
        .routes(routes!(user::get_user_events))
        .routes(routes!(search::search))
        .routes(routes!(health::health))
        .split_for_parts();

    api.merge(credential_api);

    let router = Router::new()
        .merge(api_routes)
        .merge(credential_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .nest_service(PUBLIC_PREFIX, ServeDir::new(&config.upload_dir))
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(
            config.upload_max_size + FORM_OVERHEAD_BYTES,
        ))
        .layer(cors(config)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

fn cors(config: &Config) -> Result<CorsLayer, ConfigError> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "CORS_ORIGIN".to_string(),
            value: config.cors_origin.clone(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true))
}

/// Limits login and register attempts per peer IP.
fn with_auth_rate_limit(routes: Router<AppState>) -> Result<Router<AppState>, ConfigError> {
    let governor = GovernorConfigBuilder::default()
        .per_second(AUTH_RATE_LIMIT_PERIOD_SECS)
        .burst_size(AUTH_RATE_LIMIT_BURST)
        .finish()
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: "AUTH_RATE_LIMIT".to_string(),
            value: "true".to_string(),
            reason: "rate limiter quota must be non-zero".to_string(),
        })?;

    Ok(routes.layer(GovernorLayer::new(governor).error_handler(rate_limit_response)))
}

fn rate_limit_response(err: GovernorError) -> Response {
    match err {
        GovernorError::TooManyRequests { wait_time, headers } => {
            let mut response = error_response(
                StatusCode::TOO_MANY_REQUESTS,
                format!("Too many requests, retry in {}s", wait_time),
            );
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
        GovernorError::UnableToExtractKey => {
            tracing::error!("Rate limiter could not read the peer address");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
        GovernorError::Other { code, msg, .. } => {
            error_response(code, msg.unwrap_or_else(|| "Request rejected".to_string()))
        }
    }
}

async fn route_not_found(method: Method, uri: Uri) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        format!("Route not found: {} {}", method, uri.path()),
    )
}
