//! End-to-end integration tests for the roster HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! record store -> HTTP response.
//!
//! Each test creates a fresh AppState backed by the in-memory store. Tests
//! use `tower::ServiceExt::oneshot` to send requests directly to the router
//! without starting a network server.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use roster_server::router::build_router;
use roster_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Creates a fresh router backed by an in-memory store.
fn test_app() -> Router {
    build_router(AppState::in_memory())
}

/// Sends a request with an optional JSON body and returns (status, json).
async fn send(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            builder
                .body(Body::from(serde_json::to_vec(&value).unwrap()))
                .unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value =
        serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

fn ann() -> serde_json::Value {
    json!({
        "name": "Ann",
        "grade": "5",
        "class": "5A",
        "contact": "1234567890",
        "address": "1 Rd"
    })
}

/// Creates a student and returns its assigned id.
async fn create_student(app: &Router, body: serde_json::Value) -> String {
    let (status, created) = send(app, "POST", "/students", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {:?}", created);
    created["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// List / create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_starts_empty() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/students", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_returns_created_record_with_id() {
    let app = test_app();
    let (status, created) = send(&app, "POST", "/students", Some(ann())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Ann");
    assert_eq!(created["class"], "5A");
    let id = created["id"].as_str().unwrap();
    assert_eq!(id.len(), 24);
    assert!(id.bytes().all(|b| b.is_ascii_hexdigit()));
}

#[tokio::test]
async fn create_then_list_includes_record_with_fresh_id() {
    let app = test_app();
    let first = create_student(&app, ann()).await;
    let second = create_student(&app, ann()).await;
    assert_ne!(first, second);

    let (status, body) = send(&app, "GET", "/students", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![first.as_str(), second.as_str()]);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_merges_only_submitted_fields() {
    let app = test_app();
    let id = create_student(&app, ann()).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/students/{}", id),
        Some(json!({ "grade": "6" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "student updated");

    let (_, list) = send(&app, "GET", "/students", None).await;
    let record = &list.as_array().unwrap()[0];
    assert_eq!(record["grade"], "6");
    assert_eq!(record["name"], "Ann");
    assert_eq!(record["contact"], "1234567890");
    assert_eq!(record["address"], "1 Rd");
}

#[tokio::test]
async fn update_malformed_id_is_400() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "PUT",
        "/students/not-a-valid-id",
        Some(json!({ "grade": "6" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid student id");
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "PUT",
        "/students/65f1a2b3c4d5e6f708192a3b",
        Some(json!({ "grade": "6" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "student not found");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_then_list_excludes_record() {
    let app = test_app();
    let id = create_student(&app, ann()).await;

    let (status, body) = send(&app, "DELETE", &format!("/students/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "student deleted");

    let (_, list) = send(&app, "GET", "/students", None).await;
    assert_eq!(list, json!([]));

    // A second delete of the same id is not-found.
    let (status, body) = send(&app, "DELETE", &format!("/students/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "student not found");
}

#[tokio::test]
async fn delete_malformed_id_is_400() {
    let app = test_app();
    let (status, body) = send(&app, "DELETE", "/students/zzzz", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid student id");
}

// ---------------------------------------------------------------------------
// Full lifecycle scenario
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_update_delete_lifecycle() {
    let app = test_app();

    // Create Ann.
    let id = create_student(&app, ann()).await;

    // Update only her grade; every other field must survive.
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/students/{}", id),
        Some(json!({ "grade": "6" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = send(&app, "GET", "/students", None).await;
    let record = &list.as_array().unwrap()[0];
    assert_eq!(record["id"], id.as_str());
    assert_eq!(record["grade"], "6");
    assert_eq!(record["name"], "Ann");

    // Delete her; the list is empty afterwards.
    let (status, _) = send(&app, "DELETE", &format!("/students/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = send(&app, "GET", "/students", None).await;
    assert_eq!(list, json!([]));
}
