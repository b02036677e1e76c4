//! SQLite implementation of [`RecordStore`].
//!
//! [`SqliteStore`] persists records in a single `students` table with WAL
//! mode and automatic schema migrations. Merge-style updates are expressed
//! with `COALESCE` so omitted patch fields keep their stored value in a
//! single statement.

use rusqlite::{params, Connection, OptionalExtension, Row};

use roster_core::{RecordId, Student, StudentFields, StudentPatch};

use crate::error::StorageError;
use crate::traits::{fresh_record_id, RecordStore};

/// SQLite-backed implementation of [`RecordStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    /// Maps a `students` row to a [`Student`].
    fn row_to_student(row: &Row<'_>) -> rusqlite::Result<Student> {
        let hex: String = row.get(0)?;
        let id = RecordId::parse(&hex).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })?;
        Ok(Student {
            id,
            fields: StudentFields {
                name: row.get(1)?,
                grade: row.get(2)?,
                class: row.get(3)?,
                contact: row.get(4)?,
                address: row.get(5)?,
            },
        })
    }
}

impl RecordStore for SqliteStore {
    fn insert(&mut self, fields: &StudentFields) -> Result<Student, StorageError> {
        let id = fresh_record_id();
        self.conn.execute(
            "INSERT INTO students (id, name, grade, class, contact, address)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                id.to_hex(),
                fields.name,
                fields.grade,
                fields.class,
                fields.contact,
                fields.address,
            ],
        )?;
        Ok(Student {
            id,
            fields: fields.clone(),
        })
    }

    fn get(&self, id: RecordId) -> Result<Student, StorageError> {
        self.conn
            .query_row(
                "SELECT id, name, grade, class, contact, address
                 FROM students WHERE id = ?1",
                params![id.to_hex()],
                Self::row_to_student,
            )
            .optional()?
            .ok_or(StorageError::RecordNotFound(id))
    }

    fn list(&self) -> Result<Vec<Student>, StorageError> {
        // Ids are timestamp-prefixed, so id order approximates insertion order.
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, name, grade, class, contact, address
             FROM students ORDER BY id",
        )?;
        let rows = stmt.query_map([], Self::row_to_student)?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    fn update(&mut self, id: RecordId, patch: &StudentPatch) -> Result<(), StorageError> {
        let changed = self.conn.execute(
            "UPDATE students SET
                 name    = COALESCE(?2, name),
                 grade   = COALESCE(?3, grade),
                 class   = COALESCE(?4, class),
                 contact = COALESCE(?5, contact),
                 address = COALESCE(?6, address)
             WHERE id = ?1",
            params![
                id.to_hex(),
                patch.name,
                patch.grade,
                patch.class,
                patch.contact,
                patch.address,
            ],
        )?;
        if changed == 0 {
            return Err(StorageError::RecordNotFound(id));
        }
        Ok(())
    }

    fn delete(&mut self, id: RecordId) -> Result<(), StorageError> {
        let changed = self
            .conn
            .execute("DELETE FROM students WHERE id = ?1", params![id.to_hex()])?;
        if changed == 0 {
            return Err(StorageError::RecordNotFound(id));
        }
        Ok(())
    }
}
