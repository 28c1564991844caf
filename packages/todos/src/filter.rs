// ABOUTME: Query construction for listing todo items
// ABOUTME: Turns optional search/category/priority/completion filters into a SQL predicate

use serde::Deserialize;
use tracing::debug;

use crate::types::Priority;

/// Default listing order: highest priority first, then earliest due date.
/// Items without a due date come after dated ones; id keeps ties stable.
pub const DEFAULT_ORDER_BY: &str = "ORDER BY priority DESC, due_date IS NULL, due_date ASC, id ASC";

/// Raw query-string parameters accepted by the list endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoQueryParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub is_completed: Option<String>,
}

/// Typed filter criteria. Every present criterion must match (AND).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoFilter {
    /// Case-sensitive substring of title or description
    pub search: Option<String>,
    /// Exact category match
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub is_completed: Option<bool>,
}

/// A value bound to a `?` placeholder of the generated clause
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Bool(bool),
}

impl TodoFilter {
    /// Build a filter from request parameters.
    ///
    /// Empty strings count as absent. An unrecognised priority name or
    /// completion flag drops that criterion instead of failing the request.
    pub fn from_params(params: TodoQueryParams) -> Self {
        let priority = params
            .priority
            .filter(|p| !p.is_empty())
            .and_then(|p| match p.parse::<Priority>() {
                Ok(priority) => Some(priority),
                Err(e) => {
                    debug!("Ignoring priority filter: {}", e);
                    None
                }
            });

        let is_completed = params
            .is_completed
            .filter(|c| !c.is_empty())
            .and_then(|c| {
                let flag = parse_completion_flag(&c);
                if flag.is_none() {
                    debug!("Ignoring isCompleted filter: {:?}", c);
                }
                flag
            });

        Self {
            search: params.search.filter(|s| !s.is_empty()),
            category: params.category.filter(|c| !c.is_empty()),
            priority,
            is_completed,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.category.is_none()
            && self.priority.is_none()
            && self.is_completed.is_none()
    }

    /// Render the `WHERE` clause and the values for its placeholders, in order.
    ///
    /// Returns an empty clause when no criteria are set.
    pub fn where_clause(&self) -> (String, Vec<FilterValue>) {
        let mut conditions: Vec<&str> = Vec::new();
        let mut values = Vec::new();

        if let Some(search) = &self.search {
            // instr() is case-sensitive, unlike LIKE
            conditions.push(
                "(instr(title, ?) > 0 OR (description IS NOT NULL AND instr(description, ?) > 0))",
            );
            values.push(FilterValue::Text(search.clone()));
            values.push(FilterValue::Text(search.clone()));
        }
        if let Some(category) = &self.category {
            conditions.push("category = ?");
            values.push(FilterValue::Text(category.clone()));
        }
        if let Some(priority) = self.priority {
            conditions.push("priority = ?");
            values.push(FilterValue::Integer(priority as i64));
        }
        if let Some(is_completed) = self.is_completed {
            conditions.push("is_completed = ?");
            values.push(FilterValue::Bool(is_completed));
        }

        if conditions.is_empty() {
            (String::new(), values)
        } else {
            (format!("WHERE {}", conditions.join(" AND ")), values)
        }
    }
}

/// `true`/`false` in any letter case
fn parse_completion_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
