//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record returned by every store operation.
//! - Provide the blank-title rule shared by store validation and auto-save.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused for another note.
//! - `content` is rich-text markup and is stored verbatim.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque store-assigned note identifier.
///
/// Kept as a type alias; the controller never inspects its shape.
pub type NoteId = String;

/// Title literal shown for notes whose title is empty.
pub const UNTITLED_LABEL: &str = "Untitled";

/// A titled rich-text document persisted by the note store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Store-assigned identifier.
    pub id: NoteId,
    pub title: String,
    /// Rich-text markup produced by the body editor.
    pub content: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds. Bumped on every update.
    pub updated_at: i64,
}

impl Note {
    /// Label used by list-style views.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED_LABEL
        } else {
            self.title.as_str()
        }
    }
}

/// Validation failures for note input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    BlankTitle,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "note title cannot be blank"),
        }
    }
}

impl Error for NoteValidationError {}

/// Returns whether a draft field holds no visible characters.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates the title of a note about to be created.
pub fn validate_title(title: &str) -> Result<(), NoteValidationError> {
    if is_blank(title) {
        return Err(NoteValidationError::BlankTitle);
    }
    Ok(())
}
