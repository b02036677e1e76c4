//! Application state with a shared [`RecordStore`] for concurrent access.
//!
//! [`AppState`] wraps the store in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. Uses `tokio::sync::Mutex` (async-aware) instead of
//! `std::sync::Mutex` (blocking) so handlers await the lock without blocking
//! the tokio runtime.
//!
//! Note: `tokio::sync::RwLock` would allow concurrent reads, but
//! `SqliteStore` contains `rusqlite::Connection` which is `!Sync`,
//! preventing it from being held behind an `RwLock`. The `Mutex` approach
//! is correct and non-blocking. Each request performs exactly one store
//! operation under the lock; concurrent edits to the same record race with
//! last-write-wins semantics by design of the API.

use std::sync::Arc;

use roster_storage::{MemoryStore, RecordStore, SqliteStore};

use crate::error::ApiError;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared record store (async Mutex -- non-blocking await).
    pub store: Arc<tokio::sync::Mutex<Box<dyn RecordStore + Send>>>,
}

impl AppState {
    /// Creates an `AppState` backed by a SQLite database at `db_path`.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let store = SqliteStore::new(db_path)?;
        Ok(AppState {
            store: Arc::new(tokio::sync::Mutex::new(Box::new(store))),
        })
    }

    /// Creates an `AppState` backed by the in-memory store (for testing).
    pub fn in_memory() -> Self {
        AppState {
            store: Arc::new(tokio::sync::Mutex::new(Box::new(MemoryStore::new()))),
        }
    }
}
