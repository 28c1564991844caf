use crate::api;
use crate::db::DbState;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use ticklist_todos::seed_demo_data;
use tower::ServiceExt;

async fn create_test_app() -> Router {
    let db = DbState::in_memory().await.unwrap();
    api::create_router(db)
}

async fn create_seeded_app() -> Router {
    let db = DbState::in_memory().await.unwrap();
    seed_demo_data(&db.todo_storage).await.unwrap();
    api::create_router(db)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, _, value) = send_with_headers(app, method, uri, body).await;
    (status, value)
}

async fn send_with_headers(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, axum::http::HeaderMap, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, headers, value)
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("healthy"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_invalid_endpoint() {
    let app = create_test_app().await;

    let (status, _) = send(&app, Method::GET, "/nonexistent", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_todo_scenario() {
    let app = create_test_app().await;

    let (status, headers, body) = send_with_headers(
        &app,
        Method::POST,
        "/todos",
        Some(json!({
            "title": "Test new todo",
            "priority": "High",
            "category": "Testing"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], json!("Test new todo"));
    assert_eq!(body["priority"], json!("High"));
    assert_eq!(body["category"], json!("Testing"));
    assert_eq!(body["isCompleted"], json!(false));
    assert_eq!(body["updatedAt"], Value::Null);

    let id = body["id"].as_i64().unwrap();
    assert_eq!(
        headers.get(header::LOCATION).unwrap().to_str().unwrap(),
        format!("/todos/{}", id)
    );
}

#[tokio::test]
async fn test_create_then_read_by_id() {
    let app = create_test_app().await;

    let (_, created) = send(
        &app,
        Method::POST,
        "/todos",
        Some(json!({ "title": "Read me back" })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/todos/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], json!("Read me back"));
    assert_eq!(body["isCompleted"], json!(false));
    assert_eq!(body["priority"], json!("Medium"));
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_create_accepts_lowercase_priority_and_due_date() {
    let app = create_test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/todos",
        Some(json!({
            "title": "Dated",
            "priority": "low",
            "dueDate": "2030-01-15T10:00:00Z"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["priority"], json!("Low"));
    assert!(body["dueDate"].as_str().unwrap().starts_with("2030-01-15T10:00:00"));
}

#[tokio::test]
async fn test_create_rejects_blank_title() {
    let app = create_test_app().await;

    let (status, body) = send(&app, Method::POST, "/todos", Some(json!({ "title": "  " }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Title is required" }));
}

#[tokio::test]
async fn test_create_rejects_overlong_title() {
    let app = create_test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/todos",
        Some(json!({ "title": "x".repeat(201) })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("200"));
}

#[tokio::test]
async fn test_create_without_title_is_rejected_by_extractor() {
    let app = create_test_app().await;

    let (status, body) = send(&app, Method::POST, "/todos", Some(json!({ "category": "x" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn test_create_with_unknown_priority_returns_json_error() {
    let app = create_test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/todos",
        Some(json!({ "title": "Pick one", "priority": "urgent" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_non_numeric_id_returns_json_error() {
    let app = create_test_app().await;

    let (status, body) = send(&app, Method::GET, "/todos/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_get_unknown_todo_returns_404() {
    let app = create_test_app().await;

    let (status, body) = send(&app, Method::GET, "/todos/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Todo with ID 999 not found" }));
}

#[tokio::test]
async fn test_update_title_only() {
    let app = create_test_app().await;
    let (_, created) = send(
        &app,
        Method::POST,
        "/todos",
        Some(json!({ "title": "Original", "category": "Work", "priority": "Low" })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/todos/{}", id),
        Some(json!({ "title": "Renamed" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], json!("Renamed"));
    assert_eq!(body["category"], json!("Work"));
    assert_eq!(body["priority"], json!("Low"));
    assert_eq!(body["createdAt"], created["createdAt"]);
    assert!(body["updatedAt"].is_string());
}

#[tokio::test]
async fn test_update_with_null_clears_category() {
    let app = create_test_app().await;
    let (_, created) = send(
        &app,
        Method::POST,
        "/todos",
        Some(json!({ "title": "Categorised", "category": "Work" })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/todos/{}", id),
        Some(json!({ "category": null })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], Value::Null);
    assert_eq!(body["title"], json!("Categorised"));
}

#[tokio::test]
async fn test_update_unknown_todo_returns_404() {
    let app = create_test_app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/todos/77",
        Some(json!({ "title": "Nope" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Todo with ID 77 not found"));
}

#[tokio::test]
async fn test_delete_then_read_returns_404() {
    let app = create_test_app().await;
    let (_, created) = send(
        &app,
        Method::POST,
        "/todos",
        Some(json!({ "title": "Short lived" })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::DELETE, &format!("/todos/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": format!("Todo with ID {} deleted successfully", id) })
    );

    let (status, _) = send(&app, Method::GET, &format!("/todos/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, &format!("/todos/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_complete_seeded_pending_todo() {
    let app = create_seeded_app().await;

    let (_, before) = send(&app, Method::GET, "/todos/2", None).await;
    assert_eq!(before["isCompleted"], json!(false));

    let (status, body) = send(&app, Method::PATCH, "/todos/2/complete", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(2));
    assert_eq!(body["isCompleted"], json!(true));
    assert!(body["updatedAt"].is_string());
}

#[tokio::test]
async fn test_complete_unknown_todo_returns_404() {
    let app = create_test_app().await;

    let (status, body) = send(&app, Method::PATCH, "/todos/5/complete", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Todo with ID 5 not found"));
}

#[tokio::test]
async fn test_list_filters() {
    let app = create_seeded_app().await;

    let (status, all) = send(&app, Method::GET, "/todos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 5);

    let (_, high) = send(&app, Method::GET, "/todos?priority=high", None).await;
    let high = high.as_array().unwrap();
    assert!(!high.is_empty());
    assert!(high.iter().all(|t| t["priority"] == json!("High")));

    let (_, pending) = send(&app, Method::GET, "/todos?isCompleted=false", None).await;
    let pending = pending.as_array().unwrap();
    assert_eq!(pending.len(), 4);
    assert!(pending.iter().all(|t| t["isCompleted"] == json!(false)));

    let (_, development) = send(&app, Method::GET, "/todos?category=Development", None).await;
    let development = development.as_array().unwrap();
    assert_eq!(development.len(), 2);
    assert!(development.iter().all(|t| t["category"] == json!("Development")));
}

#[tokio::test]
async fn test_list_ignores_unknown_priority() {
    let app = create_seeded_app().await;

    let (status, body) = send(&app, Method::GET, "/todos?priority=critical", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_list_completion_flag_edge_values() {
    let app = create_seeded_app().await;

    let (status, body) = send(&app, Method::GET, "/todos?isCompleted=", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);

    let (status, body) = send(&app, Method::GET, "/todos?isCompleted=True", None).await;
    assert_eq!(status, StatusCode::OK);
    let completed = body.as_array().unwrap();
    assert_eq!(completed.len(), 1);
    assert!(completed.iter().all(|t| t["isCompleted"] == json!(true)));

    let (status, body) = send(&app, Method::GET, "/todos?isCompleted=FALSE", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);

    let (status, body) = send(&app, Method::GET, "/todos?isCompleted=maybe", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);

    let (status, body) = send(&app, Method::GET, "/todos?priority=&isCompleted=false", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_list_search_and_order() {
    let app = create_test_app().await;
    for (title, priority) in [
        ("low chore", "Low"),
        ("high chore", "High"),
        ("medium chore", "Medium"),
        ("unrelated", "High"),
    ] {
        send(
            &app,
            Method::POST,
            "/todos",
            Some(json!({ "title": title, "priority": priority })),
        )
        .await;
    }

    let (status, body) = send(&app, Method::GET, "/todos?search=chore", None).await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["high chore", "medium chore", "low chore"]);

    let (_, body) = send(&app, Method::GET, "/todos?search=Chore", None).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_summary_endpoint() {
    let app = create_seeded_app().await;

    let (status, body) = send(&app, Method::GET, "/todos/summary", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalItems"], json!(5));
    assert_eq!(body["completedItems"], json!(1));
    assert_eq!(body["pendingItems"], json!(4));
    assert_eq!(body["overdueItems"], json!(1));
    assert_eq!(
        body["byPriority"],
        json!({ "High": 2, "Medium": 2, "Low": 1 })
    );
    assert_eq!(
        body["byCategory"],
        json!({ "Development": 2, "Documentation": 1, "Meetings": 1 })
    );
}

#[tokio::test]
async fn test_summary_of_empty_store() {
    let app = create_test_app().await;

    let (status, body) = send(&app, Method::GET, "/todos/summary", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "totalItems": 0,
            "completedItems": 0,
            "pendingItems": 0,
            "overdueItems": 0,
            "byPriority": {},
            "byCategory": {}
        })
    );
}
