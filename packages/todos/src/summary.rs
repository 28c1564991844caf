// ABOUTME: Aggregate statistics over the todo collection
// ABOUTME: Counts completed, pending, and overdue items and tallies by priority and category

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::TodoItem;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoSummary {
    pub total_items: usize,
    pub completed_items: usize,
    pub pending_items: usize,
    pub overdue_items: usize,
    pub by_priority: BTreeMap<String, usize>,
    pub by_category: BTreeMap<String, usize>,
}

impl TodoSummary {
    /// Summarize `items` as of `now`. Only priorities and categories that
    /// actually occur appear in the maps; uncategorized items are not tallied.
    pub fn from_items(items: &[TodoItem], now: DateTime<Utc>) -> Self {
        let mut summary = TodoSummary {
            total_items: items.len(),
            ..Default::default()
        };

        for item in items {
            if item.is_completed {
                summary.completed_items += 1;
            } else if item.is_overdue(now) {
                summary.overdue_items += 1;
            }

            *summary
                .by_priority
                .entry(item.priority.as_str().to_string())
                .or_insert(0) += 1;

            if let Some(category) = &item.category {
                *summary.by_category.entry(category.clone()).or_insert(0) += 1;
            }
        }

        summary.pending_items = summary.total_items - summary.completed_items;
        summary
    }
}
