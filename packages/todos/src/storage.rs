// ABOUTME: Todo storage layer using SQLite
// ABOUTME: Handles CRUD, completion, filtered listing, and summaries for todo items

use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::debug;

use ticklist_storage::{StorageError, StorageResult};

use crate::filter::{FilterValue, TodoFilter, DEFAULT_ORDER_BY};
use crate::summary::TodoSummary;
use crate::types::{TodoCreateInput, TodoItem, TodoUpdateInput};

pub struct TodoStorage {
    pool: SqlitePool,
}

impl TodoStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List todos matching `filter` in default order
    pub async fn list_todos(&self, filter: &TodoFilter) -> StorageResult<Vec<TodoItem>> {
        if filter.is_empty() {
            debug!("Fetching all todos");
        } else {
            debug!("Fetching todos (filter: {:?})", filter);
        }

        let (where_clause, values) = filter.where_clause();
        let sql = format!("SELECT * FROM todos {} {}", where_clause, DEFAULT_ORDER_BY);

        let mut query = sqlx::query(&sql);
        for value in values {
            query = match value {
                FilterValue::Text(text) => query.bind(text),
                FilterValue::Integer(number) => query.bind(number),
                FilterValue::Bool(flag) => query.bind(flag),
            };
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.iter().map(row_to_todo).collect()
    }

    /// List every todo in default order
    pub async fn list_all(&self) -> StorageResult<Vec<TodoItem>> {
        self.list_todos(&TodoFilter::default()).await
    }

    pub async fn count(&self) -> StorageResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM todos")
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::Sqlx)
    }

    /// Get a single todo by ID
    pub async fn get_todo(&self, id: i64) -> StorageResult<TodoItem> {
        debug!("Fetching todo: {}", id);

        let row = sqlx::query("SELECT * FROM todos WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?
            .ok_or(StorageError::NotFound)?;

        row_to_todo(&row)
    }

    /// Create a new todo. New items always start pending.
    pub async fn create_todo(&self, input: TodoCreateInput) -> StorageResult<TodoItem> {
        self.create_todo_at(input, Utc::now()).await
    }

    pub(crate) async fn create_todo_at(
        &self,
        input: TodoCreateInput,
        created_at: DateTime<Utc>,
    ) -> StorageResult<TodoItem> {
        debug!("Creating todo: {}", input.title);

        let result = sqlx::query(
            r#"
            INSERT INTO todos (title, description, is_completed, priority, category, due_date, created_at)
            VALUES (?, ?, 0, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.priority.unwrap_or_default())
        .bind(&input.category)
        .bind(input.due_date)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        self.get_todo(result.last_insert_rowid()).await
    }

    /// Apply the supplied fields of `input` and stamp `updated_at`
    pub async fn update_todo(&self, id: i64, input: TodoUpdateInput) -> StorageResult<TodoItem> {
        if input.is_empty() {
            debug!("Updating todo {}: no fields supplied, touching updated_at only", id);
        } else {
            debug!("Updating todo: {}", id);
        }

        let existing = self.get_todo(id).await?;
        let updated_at = existing.next_modification_time(Utc::now());

        // Build update query dynamically based on provided fields
        let mut query_parts = Vec::new();

        if input.title.is_some() {
            query_parts.push("title = ?");
        }
        if input.description.is_some() {
            query_parts.push("description = ?");
        }
        if input.is_completed.is_some() {
            query_parts.push("is_completed = ?");
        }
        if input.priority.is_some() {
            query_parts.push("priority = ?");
        }
        if input.category.is_some() {
            query_parts.push("category = ?");
        }
        if input.due_date.is_some() {
            query_parts.push("due_date = ?");
        }
        query_parts.push("updated_at = ?");

        let query_str = format!("UPDATE todos SET {} WHERE id = ?", query_parts.join(", "));
        let mut query = sqlx::query(&query_str);

        // Bind parameters in the same order
        if let Some(title) = input.title {
            query = query.bind(title);
        }
        if let Some(description) = input.description {
            query = query.bind(description);
        }
        if let Some(is_completed) = input.is_completed {
            query = query.bind(is_completed);
        }
        if let Some(priority) = input.priority {
            query = query.bind(priority);
        }
        if let Some(category) = input.category {
            query = query.bind(category);
        }
        if let Some(due_date) = input.due_date {
            query = query.bind(due_date);
        }
        query = query.bind(updated_at).bind(id);

        let result = query
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        // Deleted between the read and the write
        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.get_todo(id).await
    }

    /// Mark a todo as completed
    pub async fn complete_todo(&self, id: i64) -> StorageResult<TodoItem> {
        debug!("Completing todo: {}", id);

        let existing = self.get_todo(id).await?;
        let updated_at = existing.next_modification_time(Utc::now());

        let result = sqlx::query("UPDATE todos SET is_completed = 1, updated_at = ? WHERE id = ?")
            .bind(updated_at)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.get_todo(id).await
    }

    /// Delete a todo
    pub async fn delete_todo(&self, id: i64) -> StorageResult<()> {
        debug!("Deleting todo: {}", id);

        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Summarize the whole collection as of `now`
    pub async fn summary(&self, now: DateTime<Utc>) -> StorageResult<TodoSummary> {
        let todos = self.list_all().await?;
        Ok(TodoSummary::from_items(&todos, now))
    }
}

fn row_to_todo(row: &SqliteRow) -> StorageResult<TodoItem> {
    Ok(TodoItem {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        is_completed: row.try_get("is_completed")?,
        priority: row.try_get("priority")?,
        category: row.try_get("category")?,
        due_date: row.try_get("due_date")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
