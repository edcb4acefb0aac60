//! Application shell wiring the controller to the views.
//!
//! # Responsibility
//! - Route UI events to the view or controller call they stand for.
//! - Compose one renderable frame from the controller snapshot.
//!
//! # Invariants
//! - Every left click is also delivered to the window bus, so an open
//!   context menu closes on any click outside it.

use crate::controller::AppController;
use crate::model::note::NoteId;
use crate::store::NoteStore;
use crate::views::confirm_dialog::{self, DialogAction, DialogEvent, DialogFrame, DialogProps};
use crate::views::editor::{self, EditorField, EditorFrame};
use crate::views::note_list::{ContextMenu, NoteListItem, NoteListView};
use crate::views::window::WindowEvents;
use log::debug;

/// Input delivered by the windowing layer.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// "+ New Note" button.
    NewNote,
    ClickNote(NoteId),
    RightClickNote { note_id: NoteId, x: f32, y: f32 },
    /// "Delete" entry of the context menu.
    ClickMenuDelete,
    /// Click on empty window space.
    ClickWindow,
    /// Editor field changed to `value`.
    Input { field: EditorField, value: String },
    Dialog(DialogEvent),
}

/// Everything on screen after one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub items: Vec<NoteListItem>,
    pub menu: ContextMenu,
    pub editor: EditorFrame,
    pub dialog: Option<DialogFrame>,
}

pub struct NoteApp<S: NoteStore + ?Sized + 'static> {
    controller: AppController<S>,
    window: WindowEvents,
    list: NoteListView,
}

impl<S: NoteStore + ?Sized + 'static> NoteApp<S> {
    pub fn new(controller: AppController<S>) -> Self {
        let window = WindowEvents::new();
        Self {
            controller,
            list: NoteListView::new(window.clone()),
            window,
        }
    }

    pub fn controller(&self) -> &AppController<S> {
        &self.controller
    }

    pub fn window(&self) -> &WindowEvents {
        &self.window
    }

    /// Mount: loads the initial note list.
    pub async fn start(&self) {
        self.controller.load_notes().await;
    }

    pub async fn handle(&self, event: UiEvent) {
        debug!("event=ui_event module=app kind={}", event_kind(&event));
        match event {
            UiEvent::NewNote => {
                self.window.dispatch_click();
                self.controller.select_new();
            }
            UiEvent::ClickNote(note_id) => {
                self.window.dispatch_click();
                self.controller.select_existing(&note_id).await;
            }
            UiEvent::RightClickNote { note_id, x, y } => {
                self.list.open_context_menu(&note_id, x, y);
            }
            UiEvent::ClickMenuDelete => {
                if let Some(note_id) = self.list.take_delete_target() {
                    self.controller.request_delete(&note_id);
                }
                self.window.dispatch_click();
            }
            UiEvent::ClickWindow => self.window.dispatch_click(),
            UiEvent::Input { field, value } => editor::input(&self.controller, field, &value),
            UiEvent::Dialog(dialog_event) => {
                let props = DialogProps::for_delete(&self.controller.snapshot());
                match confirm_dialog::dispatch(&props, dialog_event) {
                    Some(DialogAction::Confirm) => self.controller.confirm_pending_delete().await,
                    Some(DialogAction::Cancel) => self.controller.cancel_delete(),
                    None => {}
                }
            }
        }
    }

    pub fn render(&self) -> Frame {
        let state = self.controller.snapshot();
        Frame {
            items: self.list.render(&state),
            menu: self.list.context_menu(),
            editor: editor::render_editor(&state),
            dialog: confirm_dialog::render_dialog(&DialogProps::for_delete(&state)),
        }
    }
}

fn event_kind(event: &UiEvent) -> &'static str {
    match event {
        UiEvent::NewNote => "new_note",
        UiEvent::ClickNote(_) => "click_note",
        UiEvent::RightClickNote { .. } => "right_click_note",
        UiEvent::ClickMenuDelete => "click_menu_delete",
        UiEvent::ClickWindow => "click_window",
        UiEvent::Input { field, .. } => match field {
            EditorField::Title => "input_title",
            EditorField::Body => "input_body",
        },
        UiEvent::Dialog(_) => "dialog",
    }
}
