use super::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

fn event_fields(category_id: &str) -> Vec<(&'static str, String)> {
    vec![
        ("title", "Sunday football".to_string()),
        ("description", "Five a side".to_string()),
        ("date", "2030-05-20".to_string()),
        ("time", "10:00".to_string()),
        ("min_age", "16".to_string()),
        ("max_age", "40".to_string()),
        ("location", "Riverside pitch".to_string()),
        ("max_participants", "10".to_string()),
        ("category_id", category_id.to_string()),
    ]
}

fn as_refs<'a>(fields: &'a [(&'static str, String)]) -> Vec<(&'static str, &'a str)> {
    fields.iter().map(|(k, v)| (*k, v.as_str())).collect()
}

/// Tests creating an event through the API.
///
/// Verifies that a valid multipart body yields 201 Created with the new event's ID,
/// and the event can be fetched afterwards.
///
/// Expected: 201 with `data.id`, then 200 on GET
#[tokio::test]
async fn create_event_returns_created_with_id() {
    let app = TestApp::new().await;
    let user = factory::create_user(&app.db).await.unwrap();
    let category = factory::create_category(&app.db).await.unwrap();
    let token = app.token_for(&user);

    let fields = event_fields(&category.id.to_string());
    let (status, body) = app
        .send(multipart(Method::POST, "/api/events", Some(&token), &as_refs(&fields)))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    let id = body["data"]["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(body["data"]["organizer_id"], user.id);
    assert_eq!(body["data"]["category_id"], category.id);

    let (status, detail) = app
        .send(empty(Method::GET, &format!("/api/events/{}", id), None))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["data"]["title"], "Sunday football");
    assert_eq!(detail["data"]["participants"], serde_json::json!([]));
}

/// Tests creating an event without a token.
///
/// Expected: 401 with the missing token message
#[tokio::test]
async fn create_event_requires_token() {
    let app = TestApp::new().await;
    let category = factory::create_category(&app.db).await.unwrap();

    let fields = event_fields(&category.id.to_string());
    let (status, body) = app
        .send(multipart(Method::POST, "/api/events", None, &as_refs(&fields)))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "No authentication token provided");
}

/// Tests creating an event with an inverted age range.
///
/// Expected: 400
#[tokio::test]
async fn create_event_validates_fields() {
    let app = TestApp::new().await;
    let user = factory::create_user(&app.db).await.unwrap();
    let category = factory::create_category(&app.db).await.unwrap();
    let token = app.token_for(&user);

    let mut fields = event_fields(&category.id.to_string());
    fields.push(("min_age", "60".to_string()));
    let (status, _) = app
        .send(multipart(Method::POST, "/api/events", Some(&token), &as_refs(&fields)))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests joining an event twice through the API.
///
/// Expected: 200 both times and exactly one participation row
#[tokio::test]
async fn joining_twice_keeps_one_row() {
    let app = TestApp::new().await;
    let (_organizer, _category, event) =
        factory::helpers::create_event_with_dependencies(&app.db)
            .await
            .unwrap();
    let user = factory::create_user(&app.db).await.unwrap();
    let token = app.token_for(&user);
    let uri = format!("/api/events/{}/join", event.id);

    let (first, _) = app.send(empty(Method::POST, &uri, Some(&token))).await;
    let (second, _) = app.send(empty(Method::POST, &uri, Some(&token))).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);

    let rows = entity::prelude::EventParticipant::find()
        .filter(entity::event_participant::Column::EventId.eq(event.id))
        .filter(entity::event_participant::Column::UserId.eq(user.id))
        .count(&app.db)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

/// Tests joining an event that doesn't exist.
///
/// Expected: 404 "Event not found"
#[tokio::test]
async fn join_unknown_event_is_not_found() {
    let app = TestApp::new().await;
    let user = factory::create_user(&app.db).await.unwrap();
    let token = app.token_for(&user);

    let (status, body) = app
        .send(empty(Method::POST, "/api/events/9999/join", Some(&token)))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Event not found");
}

/// Tests the viewer flags on event detail.
///
/// Verifies that flags are absent anonymously and reflect the caller's like and
/// participation when a token is sent.
///
/// Expected: no flags without a token; `is_participant` true and `liked_by_user` true with one
#[tokio::test]
async fn event_detail_reports_viewer_flags() {
    let app = TestApp::new().await;
    let (_organizer, _category, event) =
        factory::helpers::create_event_with_dependencies(&app.db)
            .await
            .unwrap();
    let user = factory::create_user(&app.db).await.unwrap();
    factory::create_participant(&app.db, event.id, user.id)
        .await
        .unwrap();
    factory::create_like(&app.db, event.id, user.id).await.unwrap();
    let token = app.token_for(&user);
    let uri = format!("/api/events/{}", event.id);

    let (_, anonymous) = app.send(empty(Method::GET, &uri, None)).await;
    assert!(anonymous["data"].get("is_participant").is_none());
    assert!(anonymous["data"].get("liked_by_user").is_none());

    let (_, viewer) = app.send(empty(Method::GET, &uri, Some(&token))).await;
    assert_eq!(viewer["data"]["is_participant"], true);
    assert_eq!(viewer["data"]["liked_by_user"], true);
    assert_eq!(viewer["data"]["participant_count"], 1);
    assert_eq!(viewer["data"]["like_count"], 1);
}

/// Tests liking and unliking through the API.
///
/// Expected: 200 for like, unlike and a repeated unlike
#[tokio::test]
async fn like_and_unlike() {
    let app = TestApp::new().await;
    let (_organizer, _category, event) =
        factory::helpers::create_event_with_dependencies(&app.db)
            .await
            .unwrap();
    let user = factory::create_user(&app.db).await.unwrap();
    let token = app.token_for(&user);

    let like = format!("/api/events/{}/like", event.id);
    let unlike = format!("/api/events/{}/unlike", event.id);

    assert_eq!(
        app.send(empty(Method::POST, &like, Some(&token))).await.0,
        StatusCode::OK
    );
    assert_eq!(
        app.send(empty(Method::DELETE, &unlike, Some(&token))).await.0,
        StatusCode::OK
    );
    assert_eq!(
        app.send(empty(Method::DELETE, &unlike, Some(&token))).await.0,
        StatusCode::OK
    );
}

/// Tests the popular listing envelope.
///
/// Expected: 200 with a data array
#[tokio::test]
async fn popular_events_are_listed() {
    let app = TestApp::new().await;
    factory::helpers::create_event_with_dependencies(&app.db)
        .await
        .unwrap();

    let (status, body) = app
        .send(empty(Method::GET, "/api/events/popular?limit=5", None))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

/// Tests fetching an event with a non-numeric ID.
///
/// Expected: 400 with the JSON error envelope
#[tokio::test]
async fn non_numeric_event_id_is_bad_request() {
    let app = TestApp::new().await;

    let (status, body) = app.send(empty(Method::GET, "/api/events/abc", None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().is_some());
}

/// Tests a popular listing with a limit that isn't a number.
///
/// Expected: 400 with the JSON error envelope
#[tokio::test]
async fn invalid_limit_is_bad_request() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(empty(Method::GET, "/api/events/popular?limit=many", None))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

/// Tests creating an event with a JSON body instead of a multipart form.
///
/// Expected: 400 with the JSON error envelope
#[tokio::test]
async fn create_event_requires_multipart_body() {
    let app = TestApp::new().await;
    let user = factory::create_user(&app.db).await.unwrap();
    let token = app.token_for(&user);

    let (status, body) = app
        .send(json(
            Method::POST,
            "/api/events",
            Some(&token),
            serde_json::json!({"title": "Sunday football"}),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}
