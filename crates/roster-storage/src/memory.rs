//! In-memory implementation of [`RecordStore`].
//!
//! [`MemoryStore`] is a first-class backend for tests and anywhere
//! persistence isn't needed. It stores records in an `IndexMap` (insertion
//! order preserved for `list`) with identical semantics to the SQLite
//! backend.

use indexmap::IndexMap;

use roster_core::{RecordId, Student, StudentFields, StudentPatch};

use crate::error::StorageError;
use crate::traits::{fresh_record_id, RecordStore};

/// In-memory backend over an ordered map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: IndexMap<RecordId, StudentFields>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl RecordStore for MemoryStore {
    fn insert(&mut self, fields: &StudentFields) -> Result<Student, StorageError> {
        let id = fresh_record_id();
        self.records.insert(id, fields.clone());
        Ok(Student {
            id,
            fields: fields.clone(),
        })
    }

    fn get(&self, id: RecordId) -> Result<Student, StorageError> {
        let fields = self
            .records
            .get(&id)
            .ok_or(StorageError::RecordNotFound(id))?;
        Ok(Student {
            id,
            fields: fields.clone(),
        })
    }

    fn list(&self) -> Result<Vec<Student>, StorageError> {
        Ok(self
            .records
            .iter()
            .map(|(id, fields)| Student {
                id: *id,
                fields: fields.clone(),
            })
            .collect())
    }

    fn update(&mut self, id: RecordId, patch: &StudentPatch) -> Result<(), StorageError> {
        let fields = self
            .records
            .get_mut(&id)
            .ok_or(StorageError::RecordNotFound(id))?;
        patch.apply_to(fields);
        Ok(())
    }

    fn delete(&mut self, id: RecordId) -> Result<(), StorageError> {
        // shift_remove keeps the remaining records in insertion order.
        self.records
            .shift_remove(&id)
            .ok_or(StorageError::RecordNotFound(id))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> StudentFields {
        StudentFields {
            name: "Ann".to_string(),
            grade: "5".to_string(),
            class: "5A".to_string(),
            contact: "1234567890".to_string(),
            address: "1 Rd".to_string(),
        }
    }

    #[test]
    fn insert_then_list_includes_record() {
        let mut store = MemoryStore::new();
        let created = store.insert(&ann()).unwrap();
        let all = store.list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], created);
    }

    #[test]
    fn insert_assigns_distinct_ids() {
        let mut store = MemoryStore::new();
        let a = store.insert(&ann()).unwrap();
        let b = store.insert(&ann()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn update_merges_only_submitted_fields() {
        let mut store = MemoryStore::new();
        let created = store.insert(&ann()).unwrap();

        let patch = StudentPatch {
            grade: Some("6".to_string()),
            ..StudentPatch::default()
        };
        store.update(created.id, &patch).unwrap();

        let after = store.get(created.id).unwrap();
        assert_eq!(after.fields.grade, "6");
        assert_eq!(after.fields.name, "Ann");
        assert_eq!(after.fields.address, "1 Rd");
    }

    #[test]
    fn update_missing_record_is_not_found() {
        let mut store = MemoryStore::new();
        let id = fresh_record_id();
        let err = store.update(id, &StudentPatch::default()).unwrap_err();
        assert!(matches!(err, StorageError::RecordNotFound(_)));
    }

    #[test]
    fn delete_then_list_excludes_record() {
        let mut store = MemoryStore::new();
        let created = store.insert(&ann()).unwrap();
        store.delete(created.id).unwrap();
        assert!(store.list().unwrap().is_empty());

        // A second delete of the same id is not-found.
        let err = store.delete(created.id).unwrap_err();
        assert!(matches!(err, StorageError::RecordNotFound(_)));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = MemoryStore::new();
        let mut fields = ann();
        let first = store.insert(&fields).unwrap();
        fields.name = "Ben".to_string();
        let second = store.insert(&fields).unwrap();

        let all = store.list().unwrap();
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[1].id, second.id);
    }
}
