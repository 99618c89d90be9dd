use super::*;
use axum::extract::ConnectInfo;
use serde_json::json;
use std::net::SocketAddr;
use test_utils::fixture;

fn registration(username: &str) -> Value {
    json!({
        "username": username,
        "password": "correct horse",
        "first_name": "Ana",
        "last_name": "Lopez",
        "birth_date": "1992-03-14",
        "hobbies": []
    })
}

/// Tests registering and then logging in.
///
/// Verifies that registration returns 201 with a token and no password hash, and that
/// the same credentials log in.
///
/// Expected: 201 then 200, both with a token
#[tokio::test]
async fn register_then_login() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(json(Method::POST, "/api/auth/register", None, registration("ana")))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["data"]["token"].as_str().is_some());
    assert_eq!(body["data"]["user"]["username"], "ana");
    assert!(body["data"]["user"].get("password_hash").is_none());

    let (status, body) = app
        .send(json(
            Method::POST,
            "/api/auth/login",
            None,
            json!({"username": "ana", "password": "correct horse"}),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["token"].as_str().is_some());
}

/// Tests registering a taken username.
///
/// Expected: 409 "Username already exists"
#[tokio::test]
async fn register_duplicate_username_conflicts() {
    let app = TestApp::new().await;
    factory::user::create_user_with_username(&app.db, "ana")
        .await
        .unwrap();

    let (status, body) = app
        .send(json(Method::POST, "/api/auth/register", None, registration("ana")))
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Username already exists");
}

/// Tests logging in with a wrong password.
///
/// Expected: 401 "Invalid credentials"
#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = TestApp::new().await;
    app.send(json(Method::POST, "/api/auth/register", None, registration("ana")))
        .await;

    let (status, body) = app
        .send(json(
            Method::POST,
            "/api/auth/login",
            None,
            json!({"username": "ana", "password": "wrong"}),
        ))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

/// Tests the current user endpoint.
///
/// Expected: 200 with the profile for a valid token, 401 with a garbage token
#[tokio::test]
async fn me_requires_valid_token() {
    let app = TestApp::new().await;
    let user = factory::create_user(&app.db).await.unwrap();
    let token = app.token_for(&user);

    let (status, body) = app
        .send(empty(Method::GET, "/api/auth/me", Some(&token)))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], user.id);
    assert_eq!(body["data"]["hobbies"], json!([]));

    let (status, body) = app
        .send(empty(Method::GET, "/api/auth/me", Some("garbage")))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");
}

/// Tests logging out.
///
/// Expected: 200 with a success message
#[tokio::test]
async fn logout_confirms() {
    let app = TestApp::new().await;
    let user = factory::create_user(&app.db).await.unwrap();
    let token = app.token_for(&user);

    let (status, body) = app
        .send(empty(Method::POST, "/api/auth/logout", Some(&token)))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

/// Tests registering with a body missing required fields.
///
/// Expected: 400 with the JSON error envelope
#[tokio::test]
async fn register_with_incomplete_body_is_bad_request() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(json(
            Method::POST,
            "/api/auth/register",
            None,
            json!({"username": "ana"}),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().is_some());
}

/// Tests logging in with a body that isn't JSON.
///
/// Expected: 400 with the JSON error envelope
#[tokio::test]
async fn login_with_non_json_body_is_bad_request() {
    let app = TestApp::new().await;

    let request = request(Method::POST, "/api/auth/login", None)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("username=ana"))
        .unwrap();
    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

/// Tests the login rate limit once the burst is used up.
///
/// Verifies that attempts past the burst from one peer address are refused with 429
/// and the JSON error envelope.
///
/// Expected: 401 for the first ten attempts, then 429
#[tokio::test]
async fn login_rate_limit_uses_error_envelope() {
    let app = TestApp::with_rate_limit().await;
    let peer = SocketAddr::from(([10, 0, 0, 7], 40000));

    let attempt = || {
        let mut request = json(
            Method::POST,
            "/api/auth/login",
            None,
            json!({"username": "nobody", "password": "wrong"}),
        );
        request.extensions_mut().insert(ConnectInfo(peer));
        request
    };

    for _ in 0..10 {
        let (status, _) = app.send(attempt()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    let (status, body) = app.send(attempt()).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("Too many requests"));
}

/// Tests a valid token whose user has been deleted.
///
/// Verifies that protected endpoints treat the token as unusable while the caller's own
/// profile reports the account as gone.
///
/// Expected: 401 on POST /api/auth/logout, 404 on GET /api/auth/me
#[tokio::test]
async fn token_for_deleted_user() {
    let app = TestApp::new().await;
    let ghost = fixture::user::entity_builder().id(4242).build();
    let token = app.token_for(&ghost);

    let (status, body) = app
        .send(empty(Method::POST, "/api/auth/logout", Some(&token)))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");

    let (status, body) = app
        .send(empty(Method::GET, "/api/auth/me", Some(&token)))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}
