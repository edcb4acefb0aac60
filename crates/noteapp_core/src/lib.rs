//! Core logic for NoteApp.
//!
//! Holds the note store, the application state controller that keeps the
//! editor draft in sync with it, and the headless views that render both.

pub mod app;
pub mod config;
pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod views;

pub use app::{Frame, NoteApp, UiEvent};
pub use config::{AppConfig, ConfigError};
pub use controller::{
    AppController, ControllerState, DeletePrompt, LogNotifier, UserNotifier, AUTOSAVE_DELAY,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{Note, NoteId, UNTITLED_LABEL};
pub use repo::note_repo::{NoteRepository, RepoError, RepoResult, SqliteNoteRepository};
pub use service::note_service::{NoteService, NoteServiceError};
pub use store::{NoteStore, SqliteNoteStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
