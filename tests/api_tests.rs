use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use rand::{rngs::StdRng, SeedableRng};
use serde_json::{json, Value};
use tower::ServiceExt;

use wellnest_api::{build_router, config::Config, AppState};

fn test_app() -> Router {
    let config = Config {
        host: "127.0.0.1".into(),
        port: 0,
        frontend_url: "http://localhost:3000".into(),
    };
    build_router(AppState::with_rng(config, StdRng::seed_from_u64(42)))
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();
    let (status, body) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "wellnest-api");
}

#[tokio::test]
async fn journal_entry_roundtrip_and_same_day_overwrite() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/api/journal/entry",
        json!({
            "userId": "user_abc",
            "content": "First draft of today",
            "mood": 4,
            "gratitude": "coffee"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Journal entry saved successfully");
    assert_eq!(body["entry"]["content"], "First draft of today");
    assert_eq!(body["entry"]["mood"], 4);

    // A second write on the same day replaces the first.
    let (status, _) = post_json(
        &app,
        "/api/journal/entry",
        json!({
            "userId": "user_abc",
            "content": "Rewrote it tonight",
            "mood": 5
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get_json(&app, "/api/journal/user_abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let entries = body["entries"].as_object().unwrap();
    assert_eq!(entries.len(), 1);
    let entry = entries.values().next().unwrap();
    assert_eq!(entry["content"], "Rewrote it tonight");
    assert_eq!(entry["gratitude"], "");
}

#[tokio::test]
async fn journal_entry_without_content_returns_json_error() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/api/journal/entry",
        json!({ "userId": "user_abc", "mood": 3 }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("content"));
}

#[tokio::test]
async fn journal_entry_rejects_out_of_range_mood() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/api/journal/entry",
        json!({ "userId": "user_abc", "content": "hi", "mood": 9 }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn journal_list_for_unknown_user_is_empty_not_an_error() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/journal/nobody").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["entries"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn schedule_create_assembles_requested_blocks() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/api/schedule/create",
        json!({
            "userId": "user_abc",
            "preferences": ["evening", "morning"],
            "goals": "sleep earlier"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Schedule created successfully");

    let plan = &body["schedule"];
    assert_eq!(plan["goals"], "sleep earlier");
    assert_eq!(plan["preferences"], json!(["evening", "morning"]));

    let items = plan["schedule"].as_array().unwrap();
    assert_eq!(items.len(), 7);
    // Morning block always comes first regardless of preference order.
    assert_eq!(items[0]["activity"], "Morning meditation");
    assert_eq!(items[3]["activity"], "Relaxation time");
}

#[tokio::test]
async fn schedule_lookup_is_null_until_created() {
    let app = test_app();

    let (status, body) = get_json(&app, "/api/schedule/user_abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["schedule"].is_null());

    post_json(
        &app,
        "/api/schedule/create",
        json!({ "userId": "user_abc", "preferences": ["work"], "goals": "" }),
    )
    .await;

    let (_, body) = get_json(&app, "/api/schedule/user_abc").await;
    let items = body["schedule"]["schedule"].as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["activity"], "Priority task #1");
}

#[tokio::test]
async fn check_in_returns_bucketed_message_and_support_list() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/api/support/check-in",
        json!({
            "userId": "user_abc",
            "mood": 9,
            "stressLevel": "high",
            "needsSupport": true
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let response = &body["response"];
    let message = response["message"].as_str().unwrap();
    let positive = [
        "It's wonderful that you're feeling good! Keep nurturing those positive feelings.",
        "Great to hear you're in a good space. Remember to celebrate these moments!",
        "Your positive energy is beautiful. Consider sharing it with others around you.",
    ];
    assert!(positive.contains(&message));
    assert!(response["stressAdvice"]
        .as_str()
        .unwrap()
        .starts_with("High stress"));
    assert_eq!(response["recommendations"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn check_in_defaults_unknown_stress_to_medium() {
    let app = test_app();

    let (_, body) = post_json(
        &app,
        "/api/support/check-in",
        json!({ "userId": "user_abc", "mood": 5, "stressLevel": "astronomical" }),
    )
    .await;

    assert!(body["response"]["stressAdvice"]
        .as_str()
        .unwrap()
        .starts_with("Moderate stress"));
    // needsSupport omitted → steady list.
    assert_eq!(
        body["response"]["recommendations"].as_array().unwrap().len(),
        3
    );
}

#[tokio::test]
async fn check_in_requires_mood_in_range() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/api/support/check-in",
        json!({ "userId": "user_abc", "mood": 11 }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn check_in_history_keeps_insertion_order() {
    let app = test_app();

    for mood in [2, 6, 9] {
        let (status, _) = post_json(
            &app,
            "/api/support/check-in",
            json!({ "userId": "user_abc", "mood": mood }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = get_json(&app, "/api/support/check-ins/user_abc").await;
    assert_eq!(status, StatusCode::OK);

    let moods: Vec<i64> = body["checkIns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["mood"].as_i64().unwrap())
        .collect();
    assert_eq!(moods, [2, 6, 9]);
}

#[tokio::test]
async fn breathing_exercise_comes_from_the_fixed_set() {
    let app = test_app();

    let (status, body) = get_json(&app, "/api/support/breathing-exercise").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let name = body["exercise"]["name"].as_str().unwrap();
    assert!(["4-7-8 Breathing", "Box Breathing", "Belly Breathing"].contains(&name));
    assert!(!body["exercise"]["steps"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn daily_quote_is_stable_within_a_day() {
    let app = test_app();

    let (status, first) = get_json(&app, "/api/quote/daily").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["success"], true);

    let (_, second) = get_json(&app, "/api/quote/daily").await;
    assert_eq!(first["quote"], second["quote"]);
    assert!(!first["quote"].as_str().unwrap().is_empty());
}
