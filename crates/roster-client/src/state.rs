//! The form-and-list view as a pure reducer.
//!
//! [`FormState`] holds everything the view needs: the editable form fields,
//! the fetched record list, the id being edited (if any), per-field
//! validation errors, a loading flag, and a visible error banner. [`update`]
//! applies an [`Event`] and returns at most one [`Effect`] for the driver
//! (UI shell, CLI, test) to execute. No I/O happens here.
//!
//! Failures are never swallowed: load/save/delete failures set the banner,
//! and the next successful fetch clears it.

use roster_core::{validate, Field, FieldErrors, RecordId, Student, StudentFields};

/// Complete view state for the form and record list.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// Current form field values.
    pub fields: StudentFields,
    /// All fetched records.
    pub records: Vec<Student>,
    /// The record currently being edited, if any.
    pub editing: Option<RecordId>,
    /// Per-field validation messages.
    pub errors: FieldErrors,
    /// True while a request is in flight.
    pub loading: bool,
    /// Visible error banner; cleared on the next successful fetch.
    pub banner: Option<String>,
}

/// Everything that can happen to the view.
#[derive(Debug, Clone)]
pub enum Event {
    /// View mounted; triggers the initial fetch.
    Started,
    /// User edited a field.
    FieldChanged { field: Field, value: String },
    /// User submitted the form.
    SubmitRequested,
    /// Fetch finished.
    RecordsLoaded(Vec<Student>),
    /// Fetch failed.
    LoadFailed(String),
    /// Create or update finished.
    SaveCompleted,
    /// Create or update failed.
    SaveFailed(String),
    /// User picked a record to edit.
    EditRequested(Student),
    /// User asked to delete a record (confirmation still pending).
    DeleteRequested(RecordId),
    /// User confirmed the delete.
    DeleteConfirmed(RecordId),
    /// User declined the delete.
    DeleteDeclined,
    /// Delete finished.
    DeleteCompleted,
    /// Delete failed.
    DeleteFailed(String),
    /// User reset the form.
    ResetRequested,
}

/// Side effects the driver must execute in response to an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch the full record list.
    FetchRecords,
    /// POST the given fields as a new record.
    CreateRecord(StudentFields),
    /// PUT the given fields (as a full patch) to the record with this id.
    UpdateRecord(RecordId, StudentFields),
    /// Ask the user to confirm deleting this record.
    ConfirmDelete(RecordId),
    /// DELETE the record with this id.
    DeleteRecord(RecordId),
    /// Scroll the view back to the form.
    ScrollToTop,
}

/// Applies one event to the state, returning at most one effect.
pub fn update(state: &mut FormState, event: Event) -> Option<Effect> {
    match event {
        Event::Started => {
            state.loading = true;
            Some(Effect::FetchRecords)
        }

        Event::FieldChanged { field, value } => {
            state.fields.set(field, value);
            state.errors.remove(field);
            None
        }

        Event::SubmitRequested => {
            let errors = validate(&state.fields);
            if !errors.is_empty() {
                state.errors = errors;
                return None;
            }
            state.loading = true;
            match state.editing {
                Some(id) => Some(Effect::UpdateRecord(id, state.fields.clone())),
                None => Some(Effect::CreateRecord(state.fields.clone())),
            }
        }

        // Both save outcomes clear the form and re-fetch, so the list is
        // brought back in line with the store either way.
        Event::SaveCompleted => {
            clear_form(state);
            Some(Effect::FetchRecords)
        }
        Event::SaveFailed(message) => {
            state.banner = Some(message);
            clear_form(state);
            Some(Effect::FetchRecords)
        }

        Event::RecordsLoaded(records) => {
            state.records = records;
            state.loading = false;
            state.banner = None;
            None
        }
        Event::LoadFailed(message) => {
            state.loading = false;
            state.banner = Some(message);
            None
        }

        Event::EditRequested(student) => {
            state.fields = student.fields;
            state.editing = Some(student.id);
            state.errors.clear();
            Some(Effect::ScrollToTop)
        }

        Event::DeleteRequested(id) => Some(Effect::ConfirmDelete(id)),
        Event::DeleteConfirmed(id) => {
            state.loading = true;
            Some(Effect::DeleteRecord(id))
        }
        Event::DeleteDeclined => None,
        Event::DeleteCompleted => Some(Effect::FetchRecords),
        Event::DeleteFailed(message) => {
            state.banner = Some(message);
            Some(Effect::FetchRecords)
        }

        Event::ResetRequested => {
            state.fields = StudentFields::default();
            state.editing = None;
            state.errors.clear();
            None
        }
    }
}

fn clear_form(state: &mut FormState) {
    state.fields = StudentFields::default();
    state.editing = None;
}
