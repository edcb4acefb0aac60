//! SQLite-backed `NoteStore`.
//!
//! Each call runs on the blocking pool against one mutex-guarded connection,
//! so the async caller is never blocked by SQLite I/O.

use super::{NoteStore, StoreError, StoreResult};
use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::model::note::Note;
use crate::repo::note_repo::SqliteNoteRepository;
use crate::service::note_service::{NoteService, NoteServiceError};
use async_trait::async_trait;
use log::debug;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Note store over a single SQLite connection.
#[derive(Clone)]
pub struct SqliteNoteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteNoteStore {
    /// Wraps an already migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Opens (and migrates) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }

    async fn run<T, F>(&self, op: &'static str, call: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: for<'c> FnOnce(&NoteService<SqliteNoteRepository<'c>>) -> Result<T, NoteServiceError>
            + Send
            + 'static,
    {
        let conn = Arc::clone(&self.conn);
        let started_at = Instant::now();

        let joined = tokio::task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| StoreError::Unavailable("note database lock poisoned".to_string()))?;
            let service = NoteService::new(SqliteNoteRepository::new(&guard));
            call(&service).map_err(StoreError::from)
        })
        .await;

        let result = joined.unwrap_or_else(|err| {
            Err(StoreError::Unavailable(format!("store task failed: {err}")))
        });

        match &result {
            Ok(_) => debug!(
                "event=store_call module=store op={op} status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => debug!(
                "event=store_call module=store op={op} status=error error_code={} duration_ms={}",
                err.code(),
                started_at.elapsed().as_millis()
            ),
        }
        result
    }
}

#[async_trait]
impl NoteStore for SqliteNoteStore {
    async fn list(&self) -> StoreResult<Vec<Note>> {
        self.run("list", |service| service.list_notes()).await
    }

    async fn get(&self, id: &str) -> StoreResult<Note> {
        let id = id.to_string();
        self.run("get", move |service| service.get_note(&id)).await
    }

    async fn create(&self, title: &str, content: &str) -> StoreResult<Note> {
        let title = title.to_string();
        let content = content.to_string();
        self.run("create", move |service| service.create_note(title, content))
            .await
    }

    async fn update(&self, id: &str, title: &str, content: &str) -> StoreResult<Note> {
        let (id, title, content) = (id.to_string(), title.to_string(), content.to_string());
        self.run("update", move |service| {
            service.update_note(&id, &title, &content)
        })
        .await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let id = id.to_string();
        self.run("delete", move |service| service.delete_note(&id))
            .await
    }
}
