pub mod error;
pub mod id;
pub mod student;
pub mod validation;

// Re-export commonly used types
pub use error::CoreError;
pub use id::RecordId;
pub use student::{Student, StudentFields, StudentPatch};
pub use validation::{validate, Field, FieldErrors};
