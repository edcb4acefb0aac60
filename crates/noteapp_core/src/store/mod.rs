//! Asynchronous note store boundary.
//!
//! # Responsibility
//! - Define the call/response contract the application controller consumes.
//! - Collapse lower-layer failures into the three user-relevant kinds.
//!
//! # Invariants
//! - `create` rejects blank titles with `Validation`.
//! - `get`, `update` and `delete` report unknown ids with `NotFound`.
//! - Implementations never panic across the boundary.

use crate::model::note::{Note, NoteId};
use crate::service::note_service::NoteServiceError;
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod sqlite;

pub use sqlite::SqliteNoteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure kinds surfaced by a note store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Store unreachable or failed internally. Safe to retry later.
    Unavailable(String),
    /// The id does not name a stored note (usually a stale selection).
    NotFound(NoteId),
    /// Input rejected by the store.
    Validation(String),
}

impl StoreError {
    /// Stable short code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "unavailable",
            Self::NotFound(_) => "not_found",
            Self::Validation(_) => "validation",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "note store unavailable: {message}"),
            Self::NotFound(id) => write!(f, "note with id {id} not found"),
            Self::Validation(message) => write!(f, "invalid note: {message}"),
        }
    }
}

impl Error for StoreError {}

impl From<NoteServiceError> for StoreError {
    fn from(value: NoteServiceError) -> Self {
        match value {
            NoteServiceError::Validation(err) => Self::Validation(err.to_string()),
            NoteServiceError::NoteNotFound(id) => Self::NotFound(id),
            other => Self::Unavailable(other.to_string()),
        }
    }
}

/// Persistence service for notes, reached through async calls.
///
/// The controller treats implementations as opaque remote collaborators.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Lists all notes in store order. May be empty.
    async fn list(&self) -> StoreResult<Vec<Note>>;
    /// Fetches one note with full content.
    async fn get(&self, id: &str) -> StoreResult<Note>;
    /// Creates a note; the store assigns its id.
    async fn create(&self, title: &str, content: &str) -> StoreResult<Note>;
    /// Replaces title and content; returns the stored note.
    async fn update(&self, id: &str, title: &str, content: &str) -> StoreResult<Note>;
    async fn delete(&self, id: &str) -> StoreResult<()>;
}
