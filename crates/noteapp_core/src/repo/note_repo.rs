//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD persistence over the `notes` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Update and delete report `NotFound` when no row matched.
//! - List order is `updated_at DESC, id ASC`.
//! - Read paths reject rows with an empty id instead of masking them.

use crate::db::DbError;
use crate::model::note::{Note, NoteId};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    created_at,
    updated_at
FROM notes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(NoteId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for note CRUD operations.
pub trait NoteRepository {
    /// Inserts one fully-formed note row.
    fn insert_note(&self, note: &Note) -> RepoResult<()>;
    /// Replaces title and content, bumping `updated_at` to `updated_at`.
    fn update_note(
        &self,
        id: &str,
        title: &str,
        content: &str,
        updated_at: i64,
    ) -> RepoResult<()>;
    fn get_note(&self, id: &str) -> RepoResult<Option<Note>>;
    /// Lists every note, most recently updated first.
    fn list_notes(&self) -> RepoResult<Vec<Note>>;
    /// Hard-deletes one note.
    fn delete_note(&self, id: &str) -> RepoResult<()>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn insert_note(&self, note: &Note) -> RepoResult<()> {
        if note.id.is_empty() {
            return Err(RepoError::InvalidData(
                "refusing to insert note without id".to_string(),
            ));
        }

        self.conn.execute(
            "INSERT INTO notes (id, title, content, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                note.id.as_str(),
                note.title.as_str(),
                note.content.as_str(),
                note.created_at,
                note.updated_at,
            ],
        )?;
        Ok(())
    }

    fn update_note(
        &self,
        id: &str,
        title: &str,
        content: &str,
        updated_at: i64,
    ) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE notes
             SET title = ?2, content = ?3, updated_at = ?4
             WHERE id = ?1;",
            params![id, title, content, updated_at],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn get_note(&self, id: &str) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;
        let row = stmt.query_row([id], parse_note_row).optional()?;
        row.map(check_note).transpose()
    }

    fn list_notes(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(&format!(
            "{NOTE_SELECT_SQL} ORDER BY updated_at DESC, id ASC;"
        ))?;
        let rows = stmt.query_map([], parse_note_row)?;

        let mut notes = Vec::new();
        for row in rows {
            notes.push(check_note(row?)?);
        }
        Ok(notes)
    }

    fn delete_note(&self, id: &str) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

fn parse_note_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get::<_, Option<String>>("content")?.unwrap_or_default(),
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn check_note(note: Note) -> RepoResult<Note> {
    if note.id.is_empty() {
        return Err(RepoError::InvalidData(
            "empty id value in notes.id".to_string(),
        ));
    }
    Ok(note)
}
