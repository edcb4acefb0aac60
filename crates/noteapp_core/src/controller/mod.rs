//! Application state controller.
//!
//! # Responsibility
//! - Hold the note list, the selection and the editor draft.
//! - Orchestrate note store calls for load, select, auto-save and delete.
//! - Own the auto-save debounce and the initial-load suppression flag.
//!
//! # Invariants
//! - Store failures never escape: they are logged, and only delete failures
//!   reach the user through `UserNotifier`.
//! - The state lock is never held across an `.await`.
//! - Every programmatic draft mutation sets `suppress_next_autosave` first
//!   and is followed by exactly one change notification.
//! - In-flight store calls are not cancelled; late responses still apply.

mod debounce;
mod notify;

pub use debounce::Debouncer;
pub use notify::{LogNotifier, UserNotifier};

use crate::model::note::{is_blank, Note, NoteId};
use crate::store::NoteStore;
use log::{debug, error, info, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Quiet period before a draft change is flushed to the store.
pub const AUTOSAVE_DELAY: Duration = Duration::from_millis(1000);

/// Alert text shown when a confirmed delete fails.
pub const DELETE_FAILED_ALERT: &str = "Failed to delete note.";

/// Note awaiting delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    pub note_id: NoteId,
    /// Title at the time the prompt opened.
    pub note_title: String,
}

/// Snapshot of everything the views render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerState {
    /// Notes in store order.
    pub notes: Vec<Note>,
    /// `None` while composing a new note.
    pub selected: Option<Note>,
    pub title: String,
    pub content: String,
    /// One-shot guard consumed by the next change notification.
    pub suppress_next_autosave: bool,
    /// Open confirmation, if any.
    pub delete_prompt: Option<DeletePrompt>,
}

impl ControllerState {
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|note| note.id.as_str())
    }
}

/// Draft values captured when an auto-save is scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DraftSnapshot {
    id: Option<NoteId>,
    title: String,
    content: String,
}

struct Shared<S: ?Sized> {
    notifier: Arc<dyn UserNotifier>,
    state: Mutex<ControllerState>,
    store: Arc<S>,
}

impl<S: NoteStore + ?Sized> Shared<S> {
    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn load_notes(&self) {
        let notes = match self.store.list().await {
            Ok(notes) => {
                debug!(
                    "event=notes_load module=controller status=ok count={}",
                    notes.len()
                );
                notes
            }
            Err(err) => {
                error!(
                    "event=notes_load module=controller status=error error_code={} error={err}",
                    err.code()
                );
                Vec::new()
            }
        };
        self.lock().notes = notes;
    }

    async fn save_draft(&self, draft: DraftSnapshot) {
        if is_blank(&draft.title) {
            warn!("event=autosave module=controller status=skipped reason=blank_title");
            return;
        }

        let saved = match draft.id.as_deref() {
            Some(id) => self
                .store
                .update(id, &draft.title, &draft.content)
                .await
                .map(|note| ("update", note.id)),
            None => match self.store.create(&draft.title, &draft.content).await {
                Ok(note) => {
                    let id = note.id.clone();
                    {
                        let mut state = self.lock();
                        state.selected = Some(note);
                    }
                    Ok(("create", id))
                }
                Err(err) => Err(err),
            },
        };

        match saved {
            Ok((op, id)) => {
                info!("event=autosave module=controller status=ok op={op} note_id={id}");
                self.load_notes().await;
            }
            Err(err) => error!(
                "event=autosave module=controller status=error error_code={} error={err}",
                err.code()
            ),
        }
    }
}

/// Reconciles editor input with a `NoteStore`.
///
/// Must be driven from inside a tokio runtime: draft changes spawn the
/// debounced auto-save task.
pub struct AppController<S: NoteStore + ?Sized + 'static> {
    shared: Arc<Shared<S>>,
    autosave: Debouncer,
}

impl<S: NoteStore + ?Sized + 'static> AppController<S> {
    /// Creates a controller in the "new note" state with the default delay.
    pub fn new(store: Arc<S>, notifier: Arc<dyn UserNotifier>) -> Self {
        Self {
            shared: Arc::new(Shared {
                notifier,
                state: Mutex::new(ControllerState::default()),
                store,
            }),
            autosave: Debouncer::new(AUTOSAVE_DELAY),
        }
    }

    /// Replaces the auto-save quiet period.
    pub fn with_autosave_delay(mut self, delay: Duration) -> Self {
        self.autosave = Debouncer::new(delay);
        self
    }

    pub fn autosave_delay(&self) -> Duration {
        self.autosave.delay()
    }

    /// Returns whether an auto-save is still waiting out its quiet period.
    pub fn autosave_pending(&self) -> bool {
        self.autosave.is_pending()
    }

    pub fn snapshot(&self) -> ControllerState {
        self.shared.lock().clone()
    }

    /// Reloads the note list. Failures leave an empty list.
    pub async fn load_notes(&self) {
        self.shared.load_notes().await;
    }

    /// Switches to composing a new, unsaved note.
    pub fn select_new(&self) {
        let (title, content) = {
            let mut state = self.shared.lock();
            state.suppress_next_autosave = true;
            state.selected = None;
            state.title.clear();
            state.content.clear();
            (state.title.clone(), state.content.clone())
        };
        self.on_draft_changed(&title, &content);
    }

    /// Loads the full note and makes it the selection and draft.
    ///
    /// On failure the previous selection and draft stay as they were.
    pub async fn select_existing(&self, id: &str) {
        let note = match self.shared.store.get(id).await {
            Ok(note) => note,
            Err(err) => {
                error!(
                    "event=note_select module=controller status=error note_id={id} error_code={} error={err}",
                    err.code()
                );
                return;
            }
        };

        let (title, content) = {
            let mut state = self.shared.lock();
            state.suppress_next_autosave = true;
            state.title = note.title.clone();
            state.content = note.content.clone();
            state.selected = Some(note);
            (state.title.clone(), state.content.clone())
        };
        debug!("event=note_select module=controller status=ok note_id={id}");
        self.on_draft_changed(&title, &content);
    }

    /// Title keystroke: replaces the draft title.
    pub fn set_title(&self, title: &str) {
        let content = {
            let mut state = self.shared.lock();
            state.title = title.to_string();
            state.content.clone()
        };
        self.on_draft_changed(title, &content);
    }

    /// Body keystroke: replaces the draft content.
    pub fn set_content(&self, content: &str) {
        let title = {
            let mut state = self.shared.lock();
            state.content = content.to_string();
            state.title.clone()
        };
        self.on_draft_changed(&title, content);
    }

    /// Change notification for the draft fields.
    ///
    /// Consumes the suppression flag when set. Otherwise schedules an
    /// auto-save when a note is selected or either field has text.
    pub fn on_draft_changed(&self, title: &str, content: &str) {
        let selected_id = {
            let mut state = self.shared.lock();
            if std::mem::take(&mut state.suppress_next_autosave) {
                debug!("event=autosave module=controller status=suppressed");
                return;
            }
            if state.selected.is_none() && is_blank(title) && is_blank(content) {
                return;
            }
            state.selected_id().map(str::to_string)
        };
        self.debounced_save(selected_id, title, content);
    }

    /// Schedules a trailing-edge save of the given snapshot.
    ///
    /// Each call replaces the pending one; only the last snapshot of a burst
    /// reaches the store.
    pub fn debounced_save(&self, id: Option<NoteId>, title: &str, content: &str) {
        let draft = DraftSnapshot {
            id,
            title: title.to_string(),
            content: content.to_string(),
        };
        let shared = Arc::clone(&self.shared);
        self.autosave.schedule(async move {
            shared.save_draft(draft).await;
        });
    }

    /// Opens the delete confirmation for a listed note.
    ///
    /// Returns `false` when `id` is not in the current list.
    pub fn request_delete(&self, id: &str) -> bool {
        let mut state = self.shared.lock();
        let prompt = state
            .notes
            .iter()
            .find(|note| note.id == id)
            .map(|note| DeletePrompt {
                note_id: note.id.clone(),
                note_title: note.title.clone(),
            });
        let opened = prompt.is_some();
        if opened {
            state.delete_prompt = prompt;
        }
        opened
    }

    /// Deletes `id`, then closes the confirmation whatever the outcome.
    pub async fn confirm_delete(&self, id: &str) {
        match self.shared.store.delete(id).await {
            Ok(()) => {
                info!("event=note_delete module=controller status=ok note_id={id}");
                let was_selected = self.shared.lock().selected_id() == Some(id);
                if was_selected {
                    self.select_new();
                }
                self.shared.load_notes().await;
            }
            Err(err) => {
                error!(
                    "event=note_delete module=controller status=error note_id={id} error_code={} error={err}",
                    err.code()
                );
                self.shared.notifier.alert(DELETE_FAILED_ALERT);
            }
        }
        self.shared.lock().delete_prompt = None;
    }

    /// Confirms the open prompt. No-op when nothing is pending.
    pub async fn confirm_pending_delete(&self) {
        let pending = self
            .shared
            .lock()
            .delete_prompt
            .as_ref()
            .map(|prompt| prompt.note_id.clone());
        if let Some(id) = pending {
            self.confirm_delete(&id).await;
        }
    }

    pub fn cancel_delete(&self) {
        self.shared.lock().delete_prompt = None;
    }
}
