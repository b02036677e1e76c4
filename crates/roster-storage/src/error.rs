//! Storage error types for roster-storage.

use roster_core::RecordId;
use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying SQLite operation failed.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// No record exists with the given id.
    #[error("record not found: {0}")]
    RecordNotFound(RecordId),
}
