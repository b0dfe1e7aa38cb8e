use std::sync::Arc;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use crate::api::openrouter::ChatRelay;
use crate::config::app_config::AdminCredentials;
use crate::repositories::message_store::{JsonFileStore, MessageStore, MockMessageStore, StoreError};
use crate::utils::persona_prompt::OFFLINE_REPLY;
use crate::{api_router, AppState};

const TOKEN: &str = "test-session-token";

fn state_with(store: Arc<dyn MessageStore>) -> Arc<AppState> {
    Arc::new(AppState {
        admin: AdminCredentials {
            username: "admin".to_string(),
            password: "s3cret".to_string(),
            token: TOKEN.to_string(),
        },
        message_store: store,
        chat_relay: Arc::new(ChatRelay::new(None, "m", "http://127.0.0.1:1")),
    })
}

fn file_backed_app() -> (Router, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(dir.path().join("messages.json")).unwrap();
    (api_router(state_with(Arc::new(store))), dir)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn messages_request(token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/api/messages");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn contact(name: &str, email: &str, message: &str) -> Value {
    json!({"name": name, "email": email, "message": message})
}

#[tokio::test]
async fn health_check_answers_ok() {
    let (app, _dir) = file_backed_app();
    let response = app
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn contact_with_blank_name_is_rejected() {
    let (app, _dir) = file_backed_app();
    let (status, body) = send(&app, json_request("POST", "/api/contact", contact("", "a@b.com", "hi"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");

    let (status, _) = send(&app, json_request("POST", "/api/contact", json!({"name": "A", "email": "a@b.com"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, json_request("POST", "/api/contact", contact("A", "   ", "hi"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn contact_is_stored_and_listed_newest_first() {
    let (app, _dir) = file_backed_app();

    let (status, body) = send(&app, json_request("POST", "/api/contact", contact("A", "a@b.com", "hi"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = send(&app, json_request("POST", "/api/contact", contact("B", "b@b.com", "hello again"))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, login) = send(
        &app,
        json_request("POST", "/api/login", json!({"username": "admin", "password": "s3cret"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(login["success"], true);
    let token = login["token"].as_str().unwrap().to_string();

    let (status, listed) = send(&app, messages_request(Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["name"], "B");
    assert_eq!(listed[1]["name"], "A");
    assert_eq!(listed[1]["email"], "a@b.com");
    assert_eq!(listed[1]["message"], "hi");
    assert_ne!(listed[0]["id"], listed[1]["id"]);
    let stamp = listed[0]["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
}

#[tokio::test]
async fn wrong_credentials_get_the_same_answer() {
    let (app, _dir) = file_backed_app();

    let (wrong_user_status, wrong_user) = send(
        &app,
        json_request("POST", "/api/login", json!({"username": "nobody", "password": "s3cret"})),
    )
    .await;
    let (wrong_pass_status, wrong_pass) = send(
        &app,
        json_request("POST", "/api/login", json!({"username": "admin", "password": "guess"})),
    )
    .await;
    let (empty_status, _) = send(&app, json_request("POST", "/api/login", json!({}))).await;

    assert_eq!(wrong_user_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_pass_status, StatusCode::UNAUTHORIZED);
    assert_eq!(empty_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_user, wrong_pass);
    assert_eq!(wrong_user["error"], "Invalid credentials");
}

#[tokio::test]
async fn messages_need_the_session_token() {
    let (app, _dir) = file_backed_app();

    let (status, body) = send(&app, messages_request(Some("bad-token"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");

    let (status, _) = send(&app, messages_request(None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&app, messages_request(Some(TOKEN))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn store_write_failure_is_a_server_error() {
    let mut store = MockMessageStore::new();
    store.expect_append().times(1).returning(|_| {
        Err(StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only file system",
        )))
    });
    let app = api_router(state_with(Arc::new(store)));

    let (status, body) = send(&app, json_request("POST", "/api/contact", contact("A", "a@b.com", "hi"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to save message");
}

#[tokio::test]
async fn invalid_submission_never_reaches_the_store() {
    let mut store = MockMessageStore::new();
    store.expect_append().times(0);
    let app = api_router(state_with(Arc::new(store)));

    let (status, _) = send(&app, json_request("POST", "/api/contact", contact("A", "", "hi"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn store_read_failure_is_a_server_error() {
    let mut store = MockMessageStore::new();
    store.expect_list().returning(|| {
        Err(StoreError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk gone")))
    });
    let app = api_router(state_with(Arc::new(store)));

    let (status, body) = send(&app, messages_request(Some(TOKEN))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to read messages");
}

#[tokio::test]
async fn chat_without_key_answers_offline() {
    let (app, _dir) = file_backed_app();
    let (status, body) = send(
        &app,
        json_request("POST", "/api/chat", json!({"message": "hello", "history": []})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], OFFLINE_REPLY);
    assert!(body.get("reasoning_details").is_none());
}

#[tokio::test]
async fn blank_chat_message_is_rejected() {
    let (app, _dir) = file_backed_app();
    let (status, body) = send(&app, json_request("POST", "/api/chat", json!({"message": "   "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Message cannot be empty");
}

fn raw_request(uri: &str, content_type: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn contact_with_null_or_unreadable_body_is_a_bad_request() {
    let (app, _dir) = file_backed_app();

    let (status, body) = send(
        &app,
        json_request("POST", "/api/contact", json!({"name": null, "email": "a@b.com", "message": "hi"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");

    let (status, body) = send(&app, raw_request("/api/contact", Some("application/json"), "{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");

    let (status, body) = send(
        &app,
        raw_request("/api/contact", None, r#"{"name":"A","email":"a@b.com","message":"hi"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");

    let (_, listed) = send(&app, messages_request(Some(TOKEN))).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn login_with_null_or_unreadable_body_gets_the_uniform_answer() {
    let (app, _dir) = file_backed_app();

    let (status, body) = send(
        &app,
        json_request("POST", "/api/login", json!({"username": null, "password": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");

    let (status, body) = send(&app, raw_request("/api/login", Some("application/json"), "not json")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");

    let (status, body) = send(&app, raw_request("/api/login", Some("text/plain"), "admin:s3cret")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn chat_with_unreadable_body_is_a_bad_request() {
    let (app, _dir) = file_backed_app();

    let (status, body) = send(
        &app,
        json_request("POST", "/api/chat", json!({"message": null, "history": []})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid chat request");
}
