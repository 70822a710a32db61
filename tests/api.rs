//! HTTP API integration tests

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use study_cat::{create_router, AppState};

fn app() -> Router {
    let state = Arc::new(AppState::new(20874, "127.0.0.1".to_string(), 1500, 300));
    create_router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    // Rejections from axum's extractors carry plain-text bodies.
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn status_reflects_the_fresh_focus_timer() {
    let app = app();
    let (status, body) = send(&app, "GET", "/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "focus");
    assert_eq!(body["is_running"], false);
    assert_eq!(body["seconds_left"], 1500);
    assert_eq!(body["clock"], "25:00");
    assert_eq!(body["progress"], 0.0);
    assert_eq!(body["mood"], "fresh");
    assert_eq!(body["mood_image"], "/images/nerd-cat.png");
    assert_eq!(body["chime_audio"], "meow.mp3");
    assert_eq!(body["celebrations"]["milestone"], false);
    assert_eq!(body["celebrations"]["session_complete"], false);
}

#[tokio::test]
async fn start_pause_toggles_the_running_flag() {
    let app = app();

    let (status, body) = send(&app, "POST", "/start-pause", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["timer"]["is_running"], true);

    let (status, body) = send(&app, "POST", "/start-pause", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "paused");
    assert_eq!(body["timer"]["is_running"], false);
}

#[tokio::test]
async fn switching_modes_always_pauses() {
    let app = app();
    send(&app, "POST", "/start-pause", None).await;

    let (status, body) = send(&app, "POST", "/mode/break", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["mode"], "break");
    assert_eq!(body["timer"]["is_running"], false);
    assert_eq!(body["timer"]["seconds_left"], 300);

    let (_, body) = send(&app, "GET", "/status", None).await;
    assert_eq!(body["mood"], "sleeping");
    assert_eq!(body["mood_image"], "/images/sleep.png");
}

#[tokio::test]
async fn reset_rewinds_the_current_mode() {
    let app = app();
    send(&app, "POST", "/mode/break", None).await;
    send(&app, "POST", "/start-pause", None).await;

    let (status, body) = send(&app, "POST", "/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["mode"], "break");
    assert_eq!(body["timer"]["seconds_left"], 300);
    assert_eq!(body["timer"]["is_running"], false);
}

#[tokio::test]
async fn settings_replace_durations_in_whole_minutes() {
    let app = app();
    send(&app, "POST", "/start-pause", None).await;

    let request = json!({ "focus_minutes": 10, "break_minutes": 2 });
    let (status, body) = send(&app, "POST", "/settings", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["focus_duration"], 600);
    assert_eq!(body["timer"]["break_duration"], 120);
    assert_eq!(body["timer"]["seconds_left"], 600);
    assert_eq!(body["timer"]["is_running"], false);
}

#[tokio::test]
async fn zero_minute_settings_are_rejected() {
    let app = app();

    let request = json!({ "focus_minutes": 0, "break_minutes": 5 });
    let (status, body) = send(&app, "POST", "/settings", Some(request)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], "error");

    // The timer must be untouched by the rejected request.
    let (_, body) = send(&app, "GET", "/status", None).await;
    assert_eq!(body["focus_duration"], 1500);
    assert_eq!(body["break_duration"], 300);
}

#[tokio::test]
async fn non_numeric_settings_are_rejected_by_deserialization() {
    let app = app();

    let request = json!({ "focus_minutes": "lots", "break_minutes": 5 });
    let (status, _) = send(&app, "POST", "/settings", Some(request)).await;
    assert!(status.is_client_error());

    let request = json!({ "focus_minutes": -10, "break_minutes": 5 });
    let (status, _) = send(&app, "POST", "/settings", Some(request)).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn last_action_shows_up_in_status() {
    let app = app();
    send(&app, "POST", "/mode/break", None).await;

    let (_, body) = send(&app, "GET", "/status", None).await;
    assert_eq!(body["last_action"], "break");
    assert!(body["last_action_time"].is_string());
}
