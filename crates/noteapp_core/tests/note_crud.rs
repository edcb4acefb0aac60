use noteapp_core::db::open_db_in_memory;
use noteapp_core::model::note::NoteValidationError;
use noteapp_core::{NoteRepository, NoteService, NoteServiceError, SqliteNoteRepository};
use rusqlite::params;

#[test]
fn create_assigns_id_and_reads_back() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let created = service.create_note("Groceries", "<p>milk</p>").unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.created_at, created.updated_at);

    let loaded = service.get_note(&created.id).unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn create_rejects_blank_title() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let err = service.create_note("  ", "<p>body</p>").unwrap_err();
    assert!(matches!(
        err,
        NoteServiceError::Validation(NoteValidationError::BlankTitle)
    ));
    assert!(service.list_notes().unwrap().is_empty());
}

#[test]
fn update_replaces_title_and_content() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));
    let created = service.create_note("Draft", "").unwrap();

    let updated = service
        .update_note(&created.id, "Final", "<h1>Done</h1>")
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.content, "<h1>Done</h1>");
    assert!(updated.updated_at >= created.updated_at);
}

#[test]
fn unknown_ids_report_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    assert!(matches!(
        service.get_note("nope"),
        Err(NoteServiceError::NoteNotFound(id)) if id == "nope"
    ));
    assert!(matches!(
        service.update_note("nope", "t", "c"),
        Err(NoteServiceError::NoteNotFound(_))
    ));
    assert!(matches!(
        service.delete_note("nope"),
        Err(NoteServiceError::NoteNotFound(_))
    ));
}

#[test]
fn delete_removes_the_note() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));
    let kept = service.create_note("Kept", "").unwrap();
    let doomed = service.create_note("Doomed", "").unwrap();

    service.delete_note(&doomed.id).unwrap();

    let ids: Vec<String> = service
        .list_notes()
        .unwrap()
        .into_iter()
        .map(|note| note.id)
        .collect();
    assert_eq!(ids, vec![kept.id]);
}

#[test]
fn list_orders_by_most_recent_update() {
    let conn = open_db_in_memory().unwrap();
    let (first, second, third) = {
        let service = NoteService::new(SqliteNoteRepository::new(&conn));
        (
            service.create_note("first", "").unwrap().id,
            service.create_note("second", "").unwrap().id,
            service.create_note("third", "").unwrap().id,
        )
    };

    for (id, updated_at) in [(&first, 3000), (&second, 1000), (&third, 2000)] {
        conn.execute(
            "UPDATE notes SET updated_at = ?2 WHERE id = ?1;",
            params![id, updated_at],
        )
        .unwrap();
    }

    let repo = SqliteNoteRepository::new(&conn);
    let ids: Vec<String> = repo
        .list_notes()
        .unwrap()
        .into_iter()
        .map(|note| note.id)
        .collect();
    assert_eq!(ids, vec![first, third, second]);
}

#[test]
fn null_content_reads_as_empty_string() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "DROP TABLE notes;
         CREATE TABLE notes (
             id TEXT PRIMARY KEY,
             title TEXT NOT NULL,
             content TEXT,
             created_at INTEGER,
             updated_at INTEGER
         );
         INSERT INTO notes VALUES ('old', 'Imported', NULL, 1, 1);",
    )
    .unwrap();

    let repo = SqliteNoteRepository::new(&conn);
    let note = repo.get_note("old").unwrap().unwrap();
    assert_eq!(note.content, "");
}
