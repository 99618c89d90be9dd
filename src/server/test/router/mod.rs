use std::collections::HashMap;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{
    config::Config,
    model::user::User,
    router::router,
    service::{token::TokenService, upload::UploadService},
    state::AppState,
};

mod auth;
mod event;
mod user;

const SECRET: &str = "router-test-secret";
const BOUNDARY: &str = "myeventz-test-boundary";

struct TestApp {
    router: Router,
    db: DatabaseConnection,
    tokens: TokenService,
}

impl TestApp {
    async fn new() -> Self {
        Self::build(false).await
    }

    /// App with the login/register rate limit switched on.
    async fn with_rate_limit() -> Self {
        Self::build(true).await
    }

    async fn build(rate_limit: bool) -> Self {
        let test = TestBuilder::new().with_event_tables().build().await.unwrap();
        let db = test.into_database().await.unwrap();

        let upload_dir = std::env::temp_dir().join(format!(
            "myeventz-router-{}",
            rand::random::<u32>()
        ));
        let vars: HashMap<&str, String> = HashMap::from([
            ("DATABASE_URL", "sqlite::memory:".to_string()),
            ("JWT_SECRET", SECRET.to_string()),
            ("AUTH_RATE_LIMIT", rate_limit.to_string()),
            ("APP_ENV", "test".to_string()),
            ("UPLOAD_DIR", upload_dir.display().to_string()),
        ]);
        let config = Config::from_lookup(|name| vars.get(name).cloned()).unwrap();

        let tokens = TokenService::new(SECRET, config.jwt_expires_in_days);
        let uploads = UploadService::new(&config.upload_dir, config.upload_max_size);
        let state = AppState::new(db.clone(), tokens.clone(), uploads, config.app_env.clone());

        Self {
            router: router(state, &config).unwrap(),
            db,
            tokens,
        }
    }

    fn token_for(&self, user: &entity::user::Model) -> String {
        self.tokens
            .issue(&User::from_entity(user.clone()))
            .unwrap()
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, body)
    }
}

fn request(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {}", token)),
        None => builder,
    }
}

fn empty(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    request(method, uri, token).body(Body::empty()).unwrap()
}

fn json(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    request(method, uri, token)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Encodes text fields as a `multipart/form-data` request.
fn multipart(method: Method, uri: &str, token: Option<&str>, fields: &[(&str, &str)]) -> Request<Body> {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
            BOUNDARY, name, value
        ));
    }
    body.push_str(&format!("--{}--\r\n", BOUNDARY));

    request(method, uri, token)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}
