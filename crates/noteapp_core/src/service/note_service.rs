//! Note use-case service.
//!
//! # Responsibility
//! - Provide create/update/get/list/delete over any `NoteRepository`.
//! - Assign note identity and timestamps on the write path.
//! - Enforce the non-blank title rule on creation.
//!
//! # Invariants
//! - New notes receive a UUID v4 id; callers never choose ids.
//! - `update_note` uses full replacement semantics for title and content.
//! - Writes are read back so callers always see persisted state.

use crate::model::note::{validate_title, Note, NoteId, NoteValidationError};
use crate::repo::note_repo::{NoteRepository, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Input rejected before touching storage.
    Validation(NoteValidationError),
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent note state: {details}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NoteNotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl From<NoteValidationError> for NoteServiceError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one note and returns it with its assigned id.
    ///
    /// # Errors
    /// - `Validation` when `title` is blank.
    pub fn create_note(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Note, NoteServiceError> {
        let title = title.into();
        validate_title(&title)?;

        let now = now_epoch_ms();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            title,
            content: content.into(),
            created_at: now,
            updated_at: now,
        };
        self.repo.insert_note(&note)?;

        self.repo
            .get_note(&note.id)?
            .ok_or(NoteServiceError::InconsistentState(
                "created note not found in read-back",
            ))
    }

    /// Replaces title and content of an existing note.
    pub fn update_note(
        &self,
        id: &str,
        title: &str,
        content: &str,
    ) -> Result<Note, NoteServiceError> {
        self.repo.update_note(id, title, content, now_epoch_ms())?;
        self.repo
            .get_note(id)?
            .ok_or(NoteServiceError::InconsistentState(
                "updated note not found in read-back",
            ))
    }

    /// Gets one note by id, failing with `NoteNotFound` when absent.
    pub fn get_note(&self, id: &str) -> Result<Note, NoteServiceError> {
        self.repo
            .get_note(id)?
            .ok_or_else(|| NoteServiceError::NoteNotFound(id.to_string()))
    }

    pub fn list_notes(&self) -> Result<Vec<Note>, NoteServiceError> {
        Ok(self.repo.list_notes()?)
    }

    pub fn delete_note(&self, id: &str) -> Result<(), NoteServiceError> {
        Ok(self.repo.delete_note(id)?)
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
