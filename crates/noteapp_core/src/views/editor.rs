//! Title and body editor bound to the controller draft.
//!
//! Every keystroke goes straight to the controller; debouncing happens there.

use crate::controller::{AppController, ControllerState};
use crate::store::NoteStore;

/// Placeholder shown in an empty title field.
pub const TITLE_PLACEHOLDER: &str = "Note Title";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Title,
    Body,
}

/// Rendered editor contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorFrame {
    pub title: String,
    /// Rich-text markup, passed through untouched.
    pub content: String,
    pub placeholder: &'static str,
    /// `true` while composing a note that has never been saved.
    pub composing_new: bool,
}

pub fn render_editor(state: &ControllerState) -> EditorFrame {
    EditorFrame {
        title: state.title.clone(),
        content: state.content.clone(),
        placeholder: TITLE_PLACEHOLDER,
        composing_new: state.selected.is_none(),
    }
}

/// Replaces one field with the full new value, as an input widget reports it.
pub fn input<S: NoteStore + ?Sized + 'static>(
    controller: &AppController<S>,
    field: EditorField,
    value: &str,
) {
    match field {
        EditorField::Title => controller.set_title(value),
        EditorField::Body => controller.set_content(value),
    }
}

/// Types `text` one character at a time, one change notification per key.
pub fn type_text<S: NoteStore + ?Sized + 'static>(
    controller: &AppController<S>,
    field: EditorField,
    text: &str,
) {
    let snapshot = controller.snapshot();
    let mut value = match field {
        EditorField::Title => snapshot.title,
        EditorField::Body => snapshot.content,
    };
    for ch in text.chars() {
        value.push(ch);
        input(controller, field, &value);
    }
}
