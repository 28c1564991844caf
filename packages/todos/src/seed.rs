// ABOUTME: Demonstration records for a fresh database
// ABOUTME: Inserts a fixed set of todos when the table is empty

use chrono::{Duration, Utc};
use tracing::info;

use ticklist_storage::StorageResult;

use crate::storage::TodoStorage;
use crate::types::{Priority, TodoCreateInput};

struct DemoTodo {
    title: &'static str,
    description: Option<&'static str>,
    priority: Priority,
    category: Option<&'static str>,
    due_in_days: Option<i64>,
    created_days_ago: i64,
    completed: bool,
}

const DEMO_TODOS: [DemoTodo; 5] = [
    DemoTodo {
        title: "Set up development environment",
        description: Some("Install the toolchain, editor plugins and database tooling"),
        priority: Priority::High,
        category: Some("Development"),
        due_in_days: None,
        created_days_ago: 10,
        completed: true,
    },
    DemoTodo {
        title: "Write API documentation",
        description: Some("Document every endpoint with request and response examples"),
        priority: Priority::Medium,
        category: Some("Documentation"),
        due_in_days: Some(7),
        created_days_ago: 5,
        completed: false,
    },
    DemoTodo {
        title: "Review pull requests",
        description: None,
        priority: Priority::High,
        category: Some("Development"),
        due_in_days: Some(1),
        created_days_ago: 2,
        completed: false,
    },
    DemoTodo {
        title: "Plan sprint retrospective",
        description: Some("Collect feedback and book a meeting room"),
        priority: Priority::Low,
        category: Some("Meetings"),
        due_in_days: Some(-2),
        created_days_ago: 6,
        completed: false,
    },
    DemoTodo {
        title: "Update dependencies",
        description: None,
        priority: Priority::Medium,
        category: None,
        due_in_days: None,
        created_days_ago: 1,
        completed: false,
    },
];

/// Insert the demonstration todos if the table is empty.
///
/// Returns the number of records inserted (zero when data already exists).
pub async fn seed_demo_data(storage: &TodoStorage) -> StorageResult<usize> {
    if storage.count().await? > 0 {
        return Ok(0);
    }

    let now = Utc::now();

    for demo in &DEMO_TODOS {
        let input = TodoCreateInput {
            title: demo.title.to_string(),
            description: demo.description.map(String::from),
            priority: Some(demo.priority),
            category: demo.category.map(String::from),
            due_date: demo.due_in_days.map(|days| now + Duration::days(days)),
        };

        let created = storage
            .create_todo_at(input, now - Duration::days(demo.created_days_ago))
            .await?;

        if demo.completed {
            storage.complete_todo(created.id).await?;
        }
    }

    info!("Seeded {} demonstration todos", DEMO_TODOS.len());
    Ok(DEMO_TODOS.len())
}
