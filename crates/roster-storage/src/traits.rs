//! The [`RecordStore`] trait defining the storage contract for the record
//! collection.
//!
//! All backends (MemoryStore, SqliteStore, etc.) implement this trait,
//! ensuring they are fully swappable without changing API or client logic.
//! The trait is synchronous (not async) for simplicity: every API request
//! performs exactly one store call.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use roster_core::{RecordId, Student, StudentFields, StudentPatch};

use crate::error::StorageError;

/// The storage contract for the student record collection.
pub trait RecordStore {
    /// Inserts a new record, assigning it a fresh [`RecordId`].
    ///
    /// Field contents are stored as-is; the store performs no validation
    /// (the client is the sole validator).
    fn insert(&mut self, fields: &StudentFields) -> Result<Student, StorageError>;

    /// Retrieves a single record by id.
    fn get(&self, id: RecordId) -> Result<Student, StorageError>;

    /// Lists all records, oldest first.
    fn list(&self) -> Result<Vec<Student>, StorageError>;

    /// Merges a patch into an existing record.
    ///
    /// Only fields present in the patch overwrite stored values; omitted
    /// fields keep their prior value. Fails with
    /// [`StorageError::RecordNotFound`] if no record matches.
    fn update(&mut self, id: RecordId, patch: &StudentPatch) -> Result<(), StorageError>;

    /// Deletes a record by id.
    ///
    /// Fails with [`StorageError::RecordNotFound`] if no record matches.
    fn delete(&mut self, id: RecordId) -> Result<(), StorageError>;
}

/// Generates a fresh record id: 4 bytes of big-endian unix seconds followed
/// by 8 bytes of v4 UUID entropy.
///
/// The timestamp prefix makes ids sort roughly by creation time, which keeps
/// `ORDER BY id` equivalent to insertion order in the SQLite backend.
pub fn fresh_record_id() -> RecordId {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0) as u32;

    let entropy = Uuid::new_v4();
    let mut bytes = [0u8; 12];
    bytes[..4].copy_from_slice(&secs.to_be_bytes());
    bytes[4..].copy_from_slice(&entropy.as_bytes()[..8]);
    RecordId(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_distinct() {
        let a = fresh_record_id();
        let b = fresh_record_id();
        assert_ne!(a, b);
    }

    #[test]
    fn fresh_id_roundtrips_through_hex() {
        let id = fresh_record_id();
        let parsed = RecordId::parse(&id.to_hex()).unwrap();
        assert_eq!(parsed, id);
    }
}
