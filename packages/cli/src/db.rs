// ABOUTME: Database connection management and storage initialization
// ABOUTME: Provides shared access to todo storage for API handlers

use std::sync::Arc;

use ticklist_storage::StorageResult;
use ticklist_todos::{seed_demo_data, TodoStorage};
use tracing::info;

use crate::config::Config;

/// Shared database state for API handlers
#[derive(Clone)]
pub struct DbState {
    pub todo_storage: Arc<TodoStorage>,
}

impl DbState {
    pub fn new(todo_storage: TodoStorage) -> Self {
        Self {
            todo_storage: Arc::new(todo_storage),
        }
    }

    /// Open the configured database, then seed demo data if enabled and empty
    pub async fn init(config: &Config) -> StorageResult<Self> {
        let pool = ticklist_storage::connect(&config.database_path).await?;
        let state = Self::new(TodoStorage::new(pool));

        if config.seed_demo_data {
            let inserted = seed_demo_data(&state.todo_storage).await?;
            if inserted > 0 {
                info!("Database was empty, inserted {} demo todos", inserted);
            }
        }

        Ok(state)
    }

    /// Fresh in-memory database with the schema applied and no rows
    pub async fn in_memory() -> StorageResult<Self> {
        let pool = ticklist_storage::connect_in_memory().await?;
        Ok(Self::new(TodoStorage::new(pool)))
    }
}
