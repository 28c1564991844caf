// ABOUTME: HTTP request handlers for todo operations
// ABOUTME: Handles listing, CRUD, completion, and summary endpoints

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::info;

use ticklist_todos::{
    TodoCreateInput, TodoFilter, TodoItem, TodoQueryParams, TodoSummary, TodoUpdateInput,
};

use super::extract::{AppJson, AppPath, AppQuery};
use super::validation::{validate_create, validate_update};
use crate::db::DbState;
use crate::error::{ApiResult, AppError};

/// List todos, optionally filtered
pub async fn list_todos(
    State(db): State<DbState>,
    AppQuery(params): AppQuery<TodoQueryParams>,
) -> ApiResult<Json<Vec<TodoItem>>> {
    let filter = TodoFilter::from_params(params);
    info!("Listing todos (filter: {:?})", filter);

    let todos = db.todo_storage.list_todos(&filter).await?;
    Ok(Json(todos))
}

/// Get a single todo by ID
pub async fn get_todo(
    State(db): State<DbState>,
    AppPath(id): AppPath<i64>,
) -> ApiResult<Json<TodoItem>> {
    info!("Getting todo: {}", id);

    let todo = db
        .todo_storage
        .get_todo(id)
        .await
        .map_err(AppError::for_todo(id))?;
    Ok(Json(todo))
}

/// Create a new todo
pub async fn create_todo(
    State(db): State<DbState>,
    AppJson(request): AppJson<TodoCreateInput>,
) -> ApiResult<impl IntoResponse> {
    info!("Creating todo: {}", request.title);
    validate_create(&request)?;

    let todo = db.todo_storage.create_todo(request).await?;
    let location = format!("/todos/{}", todo.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(todo)))
}

/// Update the supplied fields of a todo
pub async fn update_todo(
    State(db): State<DbState>,
    AppPath(id): AppPath<i64>,
    AppJson(request): AppJson<TodoUpdateInput>,
) -> ApiResult<Json<TodoItem>> {
    info!("Updating todo: {}", id);
    validate_update(&request)?;

    let todo = db
        .todo_storage
        .update_todo(id, request)
        .await
        .map_err(AppError::for_todo(id))?;
    Ok(Json(todo))
}

/// Delete a todo
pub async fn delete_todo(
    State(db): State<DbState>,
    AppPath(id): AppPath<i64>,
) -> ApiResult<Json<Value>> {
    info!("Deleting todo: {}", id);

    db.todo_storage
        .delete_todo(id)
        .await
        .map_err(AppError::for_todo(id))?;

    Ok(Json(json!({
        "message": format!("Todo with ID {} deleted successfully", id)
    })))
}

/// Mark a todo as completed
pub async fn complete_todo(
    State(db): State<DbState>,
    AppPath(id): AppPath<i64>,
) -> ApiResult<Json<TodoItem>> {
    info!("Completing todo: {}", id);

    let todo = db
        .todo_storage
        .complete_todo(id)
        .await
        .map_err(AppError::for_todo(id))?;
    Ok(Json(todo))
}

/// Aggregate statistics over all todos
pub async fn get_summary(State(db): State<DbState>) -> ApiResult<Json<TodoSummary>> {
    info!("Computing todo summary");

    let summary = db.todo_storage.summary(Utc::now()).await?;
    Ok(Json(summary))
}
