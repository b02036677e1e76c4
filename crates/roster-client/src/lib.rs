//! Client-side logic for the roster record manager.
//!
//! Two halves, kept strictly apart so the view logic is testable without a
//! rendering environment or a network:
//!
//! - [`state`]: the form/list view as a pure reducer -- [`state::FormState`]
//!   plus [`state::update`] mapping [`state::Event`]s to state changes and
//!   [`state::Effect`]s for a driver to execute.
//! - [`api`]: an async [`api::ApiClient`] (reqwest) for the REST surface.

pub mod api;
pub mod error;
pub mod state;

pub use api::ApiClient;
pub use error::ClientError;
pub use state::{update, Effect, Event, FormState};
