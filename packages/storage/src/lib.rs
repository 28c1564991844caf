// ABOUTME: Data layer and persistence for Ticklist
// ABOUTME: Shared storage error type and SQLite connection management

pub mod db;

use thiserror::Error;

pub use db::{connect, connect_in_memory, data_dir, default_database_path};

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Record not found")]
    NotFound,
}

pub type StorageResult<T> = Result<T, StorageError>;
