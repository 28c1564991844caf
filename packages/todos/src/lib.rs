// ABOUTME: Todo item management for Ticklist
// ABOUTME: Provides types, filtering, summaries, and the storage layer for todo items

pub mod filter;
pub mod seed;
pub mod storage;
pub mod summary;
pub mod types;

// Re-export main types
pub use filter::{TodoFilter, TodoQueryParams};
pub use seed::seed_demo_data;
pub use storage::TodoStorage;
pub use summary::TodoSummary;
pub use types::{ParsePriorityError, Priority, TodoCreateInput, TodoItem, TodoUpdateInput};
