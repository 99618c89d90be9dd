use super::*;
use serde_json::json;

/// Tests the user search with an empty query.
///
/// Expected: 200 with an empty data array even though users exist
#[tokio::test]
async fn empty_search_returns_empty_list() {
    let app = TestApp::new().await;
    factory::create_user(&app.db).await.unwrap();

    let (status, body) = app.send(empty(Method::GET, "/api/users?search=", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));

    let (status, body) = app.send(empty(Method::GET, "/api/users", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

/// Tests fetching an unknown profile.
///
/// Expected: 404 "User not found"
#[tokio::test]
async fn unknown_profile_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app.send(empty(Method::GET, "/api/users/4242", None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

/// Tests updating the caller's own profile.
///
/// Expected: 200 with the new bio and hobby set
#[tokio::test]
async fn update_own_profile() {
    let app = TestApp::new().await;
    let user = factory::create_user(&app.db).await.unwrap();
    let category = factory::create_category(&app.db).await.unwrap();
    let token = app.token_for(&user);
    let hobbies = format!("[{}]", category.id);

    let (status, body) = app
        .send(multipart(
            Method::PUT,
            &format!("/api/users/{}", user.id),
            Some(&token),
            &[("bio", "Climber"), ("hobbies", hobbies.as_str())],
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["bio"], "Climber");
    assert_eq!(body["data"]["hobbies"][0]["id"], category.id);
}

/// Tests updating someone else's profile.
///
/// Expected: 403
#[tokio::test]
async fn update_other_profile_is_forbidden() {
    let app = TestApp::new().await;
    let user = factory::create_user(&app.db).await.unwrap();
    let other = factory::create_user(&app.db).await.unwrap();
    let token = app.token_for(&user);

    let (status, body) = app
        .send(multipart(
            Method::PUT,
            &format!("/api/users/{}", other.id),
            Some(&token),
            &[("bio", "Hijacked")],
        ))
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["success"], false);
}

/// Tests the combined per-user event lists.
///
/// Expected: 200 with one organized event and an empty participating list
#[tokio::test]
async fn user_events_lists_both() {
    let app = TestApp::new().await;
    let (organizer, _category, event) =
        factory::helpers::create_event_with_dependencies(&app.db)
            .await
            .unwrap();

    let (status, body) = app
        .send(empty(
            Method::GET,
            &format!("/api/users/{}/events", organizer.id),
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["organized"][0]["id"], event.id);
    assert_eq!(body["data"]["participating"], json!([]));
}
