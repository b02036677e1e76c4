//! Student record handlers (list, create, update, delete).
//!
//! Each handler performs exactly one store operation. Ids arrive as raw path
//! strings and are parsed with [`RecordId::parse`] before any store call, so
//! malformed ids fail fast with 400 instead of surfacing as a store error.
//! Field contents are not validated here -- the client is the sole validator.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use roster_core::{RecordId, Student, StudentFields, StudentPatch};

use crate::error::ApiError;
use crate::schema::MessageResponse;
use crate::state::AppState;

/// Parses a path segment into a [`RecordId`], mapping failure to 400.
fn parse_id(raw: &str) -> Result<RecordId, ApiError> {
    RecordId::parse(raw).map_err(|_| ApiError::BadRequest("invalid student id".to_string()))
}

/// Lists all student records.
///
/// `GET /students`
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let store = state.store.lock().await;
    let students = store.list()?;
    Ok(Json(students))
}

/// Creates a student record, returning it with its assigned id.
///
/// `POST /students`
pub async fn create_student(
    State(state): State<AppState>,
    Json(fields): Json<StudentFields>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let mut store = state.store.lock().await;
    let created = store.insert(&fields)?;
    tracing::info!(id = %created.id, "student created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Merges a patch into an existing student record.
///
/// `PUT /students/{id}` -- omitted fields keep their stored value.
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<StudentPatch>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    let mut store = state.store.lock().await;
    store.update(id, &patch)?;
    tracing::info!(%id, "student updated");
    Ok(Json(MessageResponse::new("student updated")))
}

/// Deletes a student record by id.
///
/// `DELETE /students/{id}`
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    let mut store = state.store.lock().await;
    store.delete(id)?;
    tracing::info!(%id, "student deleted");
    Ok(Json(MessageResponse::new("student deleted")))
}
