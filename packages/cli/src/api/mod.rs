use axum::{
    routing::{get, patch},
    Router,
};

use crate::db::DbState;

pub mod extract;
pub mod health;
pub mod todos_handlers;
pub mod validation;

/// Creates the full API router
pub fn create_router(db: DbState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(create_todos_router())
        .with_state(db)
}

/// Creates the todos API router
pub fn create_todos_router() -> Router<DbState> {
    Router::new()
        .route(
            "/todos",
            get(todos_handlers::list_todos).post(todos_handlers::create_todo),
        )
        .route("/todos/summary", get(todos_handlers::get_summary))
        .route(
            "/todos/{id}",
            get(todos_handlers::get_todo)
                .put(todos_handlers::update_todo)
                .delete(todos_handlers::delete_todo),
        )
        .route("/todos/{id}/complete", patch(todos_handlers::complete_todo))
}
