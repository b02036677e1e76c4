//! Storage abstraction for the student record collection.
//!
//! Provides the [`RecordStore`] trait defining the storage contract that all
//! backends implement, plus [`MemoryStore`] and [`SqliteStore`] as
//! first-class backends.
//!
//! The collection is flat: records keyed by an opaque [`roster_core::RecordId`]
//! assigned on insert. Updates are merge-style (only submitted fields
//! overwrite); there are no transactions spanning multiple operations and no
//! conflict detection -- concurrent writers race with last-write-wins.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`traits`]: RecordStore trait definition and id generation
//! - [`memory`]: MemoryStore implementation
//! - [`schema`]: SQL schema and migration setup
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::RecordStore;
