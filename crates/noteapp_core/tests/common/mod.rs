#![allow(dead_code)]

use async_trait::async_trait;
use noteapp_core::{AppController, Note, NoteStore, StoreError, StoreResult, UserNotifier};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Store call as observed by the recording store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Get(String),
    Create(String, String),
    Update(String, String, String),
    Delete(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Get,
    Create,
    Update,
    Delete,
}

#[derive(Default)]
struct Inner {
    notes: Vec<Note>,
    calls: Vec<Call>,
    failing: HashSet<Op>,
    next_id: u64,
}

/// In-memory `NoteStore` that records every call in order.
#[derive(Default)]
pub struct RecordingStore {
    inner: Mutex<Inner>,
}

impl RecordingStore {
    pub fn with_notes(notes: &[(&str, &str)]) -> Arc<Self> {
        let store = Self::default();
        {
            let mut inner = store.inner.lock().unwrap();
            inner.notes = notes
                .iter()
                .map(|(id, title)| note(id, title, &format!("<p>{id}</p>")))
                .collect();
        }
        Arc::new(store)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().calls.clear();
    }

    pub fn fail(&self, op: Op) {
        self.inner.lock().unwrap().failing.insert(op);
    }

    pub fn recover(&self, op: Op) {
        self.inner.lock().unwrap().failing.remove(&op);
    }

    pub fn stored_ids(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .notes
            .iter()
            .map(|note| note.id.clone())
            .collect()
    }

    fn record(&self, call: Call, op: Op) -> Result<std::sync::MutexGuard<'_, Inner>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(call);
        if inner.failing.contains(&op) {
            return Err(StoreError::Unavailable("injected failure".to_string()));
        }
        Ok(inner)
    }
}

#[async_trait]
impl NoteStore for RecordingStore {
    async fn list(&self) -> StoreResult<Vec<Note>> {
        let inner = self.record(Call::List, Op::List)?;
        Ok(inner.notes.clone())
    }

    async fn get(&self, id: &str) -> StoreResult<Note> {
        let inner = self.record(Call::Get(id.to_string()), Op::Get)?;
        inner
            .notes
            .iter()
            .find(|note| note.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn create(&self, title: &str, content: &str) -> StoreResult<Note> {
        let mut inner = self.record(
            Call::Create(title.to_string(), content.to_string()),
            Op::Create,
        )?;
        if title.trim().is_empty() {
            return Err(StoreError::Validation("blank title".to_string()));
        }
        inner.next_id += 1;
        let created = note(&format!("n{}", inner.next_id), title, content);
        inner.notes.insert(0, created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, title: &str, content: &str) -> StoreResult<Note> {
        let mut inner = self.record(
            Call::Update(id.to_string(), title.to_string(), content.to_string()),
            Op::Update,
        )?;
        let stored = inner
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        stored.title = title.to_string();
        stored.content = content.to_string();
        Ok(stored.clone())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut inner = self.record(Call::Delete(id.to_string()), Op::Delete)?;
        let before = inner.notes.len();
        inner.notes.retain(|note| note.id != id);
        if inner.notes.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

/// Notifier collecting alert texts.
#[derive(Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl UserNotifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

pub fn note(id: &str, title: &str, content: &str) -> Note {
    Note {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        created_at: 0,
        updated_at: 0,
    }
}

pub fn controller(
    store: &Arc<RecordingStore>,
) -> (AppController<RecordingStore>, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let controller = AppController::new(Arc::clone(store), notifier.clone());
    (controller, notifier)
}

/// Sleeps just past one auto-save quiet period.
pub async fn wait_past_debounce() {
    tokio::time::sleep(noteapp_core::AUTOSAVE_DELAY + Duration::from_millis(1)).await;
}
