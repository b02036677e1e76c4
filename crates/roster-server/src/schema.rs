//! API request/response types.
//!
//! The record payloads themselves are the roster-core types
//! ([`roster_core::StudentFields`] for create, [`roster_core::StudentPatch`]
//! for update, [`roster_core::Student`] in responses); this module only adds
//! the confirmation envelope used by update and delete.

use serde::Serialize;

/// Confirmation body for update and delete: `{"message": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}
