//! Modal confirmation gate for destructive actions.
//!
//! Pure presentation: everything comes from `DialogProps`, and the dialog
//! only reports which action the user picked.

use crate::controller::ControllerState;

pub const DELETE_DIALOG_TITLE: &str = "Delete Note";
pub const CONFIRM_LABEL: &str = "Confirm";
pub const CANCEL_LABEL: &str = "Cancel";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogProps {
    pub open: bool,
    pub title: String,
    pub message: String,
}

impl DialogProps {
    /// Props for the delete confirmation of the controller's open prompt.
    pub fn for_delete(state: &ControllerState) -> Self {
        match &state.delete_prompt {
            Some(prompt) => Self {
                open: true,
                title: DELETE_DIALOG_TITLE.to_string(),
                message: format!(
                    "Are you sure you want to delete the note \"{}\"?",
                    prompt.note_title
                ),
            },
            None => Self {
                open: false,
                title: DELETE_DIALOG_TITLE.to_string(),
                message: String::new(),
            },
        }
    }
}

/// Pointer events the dialog can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    /// Click on the dimmed overlay around the dialog body.
    ClickOverlay,
    /// Click inside the body that hits no button.
    ClickBody,
    ClickCancel,
    ClickConfirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogFrame {
    pub title: String,
    pub message: String,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
}

/// Renders nothing while closed.
pub fn render_dialog(props: &DialogProps) -> Option<DialogFrame> {
    if !props.open {
        return None;
    }
    Some(DialogFrame {
        title: props.title.clone(),
        message: props.message.clone(),
        confirm_label: CONFIRM_LABEL,
        cancel_label: CANCEL_LABEL,
    })
}

/// Maps a pointer event to an action. A closed dialog yields nothing.
pub fn dispatch(props: &DialogProps, event: DialogEvent) -> Option<DialogAction> {
    if !props.open {
        return None;
    }
    match event {
        DialogEvent::ClickOverlay | DialogEvent::ClickCancel => Some(DialogAction::Cancel),
        DialogEvent::ClickConfirm => Some(DialogAction::Confirm),
        DialogEvent::ClickBody => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{dispatch, render_dialog, DialogAction, DialogEvent, DialogProps};
    use crate::controller::{ControllerState, DeletePrompt};

    fn open_props() -> DialogProps {
        let state = ControllerState {
            delete_prompt: Some(DeletePrompt {
                note_id: "1".to_string(),
                note_title: "Groceries".to_string(),
            }),
            ..ControllerState::default()
        };
        DialogProps::for_delete(&state)
    }

    #[test]
    fn closed_dialog_renders_nothing_and_ignores_events() {
        let props = DialogProps::for_delete(&ControllerState::default());
        assert!(render_dialog(&props).is_none());
        for event in [
            DialogEvent::ClickConfirm,
            DialogEvent::ClickCancel,
            DialogEvent::ClickOverlay,
            DialogEvent::ClickBody,
        ] {
            assert_eq!(dispatch(&props, event), None);
        }
    }

    #[test]
    fn open_dialog_names_the_note() {
        let frame = render_dialog(&open_props()).expect("open dialog should render");
        assert_eq!(frame.title, "Delete Note");
        assert!(frame.message.contains("\"Groceries\""));
    }

    #[test]
    fn overlay_click_cancels_and_body_click_does_nothing() {
        let props = open_props();
        assert_eq!(
            dispatch(&props, DialogEvent::ClickOverlay),
            Some(DialogAction::Cancel)
        );
        assert_eq!(dispatch(&props, DialogEvent::ClickBody), None);
        assert_eq!(
            dispatch(&props, DialogEvent::ClickConfirm),
            Some(DialogAction::Confirm)
        );
    }
}
