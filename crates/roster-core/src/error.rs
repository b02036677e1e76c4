//! Core error types for roster-core.

use thiserror::Error;

/// Core errors produced by the roster-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string could not be parsed as a [`crate::RecordId`].
    ///
    /// Valid ids are exactly 24 lowercase/uppercase hex characters.
    #[error("invalid record id: '{value}'")]
    InvalidId { value: String },
}
