// ABOUTME: Input validation for todo request bodies
// ABOUTME: Enforces required titles and field length limits before anything reaches storage

use ticklist_todos::types::{MAX_CATEGORY_LENGTH, MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};
use ticklist_todos::{TodoCreateInput, TodoUpdateInput};

use crate::error::AppError;

pub fn validate_create(input: &TodoCreateInput) -> Result<(), AppError> {
    validate_title(&input.title)?;
    validate_optional("Description", input.description.as_deref(), MAX_DESCRIPTION_LENGTH)?;
    validate_optional("Category", input.category.as_deref(), MAX_CATEGORY_LENGTH)?;
    Ok(())
}

/// Only supplied fields are checked
pub fn validate_update(input: &TodoUpdateInput) -> Result<(), AppError> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(description) = &input.description {
        validate_optional("Description", description.as_deref(), MAX_DESCRIPTION_LENGTH)?;
    }
    if let Some(category) = &input.category {
        validate_optional("Category", category.as_deref(), MAX_CATEGORY_LENGTH)?;
    }
    Ok(())
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::validation("Title is required"));
    }
    validate_length("Title", title, MAX_TITLE_LENGTH)
}

fn validate_optional(field: &str, value: Option<&str>, max: usize) -> Result<(), AppError> {
    match value {
        Some(v) => validate_length(field, v, max),
        None => Ok(()),
    }
}

fn validate_length(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}
