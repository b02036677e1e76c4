//! The `Student` record and its wire payloads.
//!
//! [`StudentFields`] is the create payload (all five fields, no id).
//! [`StudentPatch`] is the partial update payload: only `Some` fields
//! overwrite stored values (merge semantics). A [`Student`] is the stored
//! form, fields plus the store-assigned [`RecordId`].

use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::validation::Field;

/// A persisted student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Store-assigned identifier, immutable after insert.
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: StudentFields,
}

/// The five editable fields of a student record.
///
/// All fields are required non-empty strings; `contact` must be exactly
/// 10 decimal digits. The store does not enforce this -- validation happens
/// client-side only (see [`crate::validation`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFields {
    pub name: String,
    pub grade: String,
    pub class: String,
    pub contact: String,
    pub address: String,
}

impl StudentFields {
    /// Returns the current value of a named field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Grade => &self.grade,
            Field::Class => &self.class,
            Field::Contact => &self.contact,
            Field::Address => &self.address,
        }
    }

    /// Replaces the value of a named field.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Grade => self.grade = value,
            Field::Class => self.class = value,
            Field::Contact => self.contact = value,
            Field::Address => self.address = value,
        }
    }
}

/// Partial update for a student record.
///
/// Omitted (`None`) fields leave the stored value untouched. This is the
/// honest wire contract for merge-style updates; callers wanting
/// full-replace behavior send every field (see [`StudentPatch::from_fields`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl StudentPatch {
    /// Builds a full patch carrying every field (full-replace behavior).
    pub fn from_fields(fields: &StudentFields) -> StudentPatch {
        StudentPatch {
            name: Some(fields.name.clone()),
            grade: Some(fields.grade.clone()),
            class: Some(fields.class.clone()),
            contact: Some(fields.contact.clone()),
            address: Some(fields.address.clone()),
        }
    }

    /// True if the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.grade.is_none()
            && self.class.is_none()
            && self.contact.is_none()
            && self.address.is_none()
    }

    /// Merges the patch into existing fields, overwriting only `Some` values.
    pub fn apply_to(&self, fields: &mut StudentFields) {
        if let Some(name) = &self.name {
            fields.name = name.clone();
        }
        if let Some(grade) = &self.grade {
            fields.grade = grade.clone();
        }
        if let Some(class) = &self.class {
            fields.class = class.clone();
        }
        if let Some(contact) = &self.contact {
            fields.contact = contact.clone();
        }
        if let Some(address) = &self.address {
            fields.address = address.clone();
        }
    }
}
