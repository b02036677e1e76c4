//! HTTP/JSON API server for the student record collection.
//!
//! Exposes the four record operations (list, create, update, delete) over a
//! REST surface backed by a swappable [`roster_storage::RecordStore`]. This
//! crate contains the server framework, API schema types, error handling,
//! and route definitions.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
