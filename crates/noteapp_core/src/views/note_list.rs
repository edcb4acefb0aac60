//! Sidebar note list and its context menu.
//!
//! # Invariants
//! - Items keep store order; no client-side sort.
//! - The outside-click listener is attached only while the menu is open.

use super::window::{Subscription, WindowEvents};
use crate::controller::ControllerState;
use crate::model::note::{Note, NoteId};
use log::debug;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Label of the only context menu entry.
pub const DELETE_MENU_LABEL: &str = "Delete";

/// One rendered sidebar row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListItem {
    pub id: NoteId,
    /// Title, or "Untitled" when the title is empty.
    pub label: String,
    pub selected: bool,
}

/// Renders one row per note, in the order given.
pub fn render_note_list(notes: &[Note], selected_id: Option<&str>) -> Vec<NoteListItem> {
    notes
        .iter()
        .map(|note| NoteListItem {
            id: note.id.clone(),
            label: note.display_title().to_string(),
            selected: selected_id == Some(note.id.as_str()),
        })
        .collect()
}

/// Right-click menu anchored at pointer coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextMenu {
    pub visible: bool,
    pub x: f32,
    pub y: f32,
    pub note_id: Option<NoteId>,
}

#[derive(Default)]
struct MenuSlot {
    menu: ContextMenu,
    outside_click: Option<Subscription>,
}

impl MenuSlot {
    fn close(&mut self) -> Option<Subscription> {
        self.menu = ContextMenu::default();
        self.outside_click.take()
    }
}

/// Note list view state: the context menu and its window listener.
pub struct NoteListView {
    window: WindowEvents,
    slot: Arc<Mutex<MenuSlot>>,
}

impl NoteListView {
    pub fn new(window: WindowEvents) -> Self {
        Self {
            window,
            slot: Arc::new(Mutex::new(MenuSlot::default())),
        }
    }

    pub fn render(&self, state: &ControllerState) -> Vec<NoteListItem> {
        render_note_list(&state.notes, state.selected_id())
    }

    pub fn context_menu(&self) -> ContextMenu {
        self.lock().menu.clone()
    }

    /// Opens the menu for `note_id` at `(x, y)`.
    pub fn open_context_menu(&self, note_id: &str, x: f32, y: f32) {
        let mut slot = self.lock();
        slot.menu = ContextMenu {
            visible: true,
            x,
            y,
            note_id: Some(note_id.to_string()),
        };
        if slot.outside_click.is_none() {
            let weak: Weak<Mutex<MenuSlot>> = Arc::downgrade(&self.slot);
            slot.outside_click = Some(self.window.on_click(move || {
                if let Some(slot) = weak.upgrade() {
                    let detached = slot.lock().unwrap_or_else(PoisonError::into_inner).close();
                    drop(detached);
                }
            }));
        }
        debug!("event=context_menu module=ui status=open note_id={note_id}");
    }

    pub fn close_context_menu(&self) {
        let detached = self.lock().close();
        drop(detached);
    }

    /// Takes the target note of the "Delete" entry and closes the menu.
    pub fn take_delete_target(&self) -> Option<NoteId> {
        let (target, detached) = {
            let mut slot = self.lock();
            let target = slot.menu.note_id.clone().filter(|_| slot.menu.visible);
            (target, slot.close())
        };
        drop(detached);
        target
    }

    fn lock(&self) -> MutexGuard<'_, MenuSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for NoteListView {
    fn drop(&mut self) {
        self.close_context_menu();
    }
}
