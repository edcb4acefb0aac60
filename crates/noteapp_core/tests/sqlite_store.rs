use noteapp_core::{AppController, LogNotifier, NoteStore, SqliteNoteStore, StoreError};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn store_round_trips_through_blocking_pool() {
    let store = SqliteNoteStore::open_in_memory().unwrap();

    let created = store.create("Groceries", "<p>milk</p>").await.unwrap();
    let fetched = store.get(&created.id).await.unwrap();
    assert_eq!(fetched, created);

    let updated = store
        .update(&created.id, "Groceries", "<p>milk, eggs</p>")
        .await
        .unwrap();
    assert_eq!(updated.content, "<p>milk, eggs</p>");
    assert_eq!(store.list().await.unwrap(), vec![updated]);

    store.delete(&created.id).await.unwrap();
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn store_errors_map_to_taxonomy() {
    let store = SqliteNoteStore::open_in_memory().unwrap();

    assert!(matches!(
        store.create(" ", "").await,
        Err(StoreError::Validation(_))
    ));
    assert_eq!(
        store.get("missing").await.unwrap_err(),
        StoreError::NotFound("missing".to_string())
    );
    assert_eq!(
        store.update("missing", "t", "").await.unwrap_err().code(),
        "not_found"
    );
    assert_eq!(
        store.delete("missing").await.unwrap_err().code(),
        "not_found"
    );
}

#[tokio::test]
async fn file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.db");

    let id = {
        let store = SqliteNoteStore::open(&path).unwrap();
        store.create("Persisted", "").await.unwrap().id
    };

    let reopened = SqliteNoteStore::open(&path).unwrap();
    assert_eq!(reopened.get(&id).await.unwrap().title, "Persisted");
}

#[tokio::test]
async fn controller_autosaves_into_sqlite() {
    let store = Arc::new(SqliteNoteStore::open_in_memory().unwrap());
    let controller = AppController::new(Arc::clone(&store), Arc::new(LogNotifier))
        .with_autosave_delay(Duration::from_millis(20));

    controller.set_title("Real");
    controller.set_content("<p>disk</p>");
    tokio::time::sleep(Duration::from_millis(500)).await;

    let notes = store.list().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Real");
    assert_eq!(notes[0].content, "<p>disk</p>");

    let state = controller.snapshot();
    assert_eq!(state.selected_id(), Some(notes[0].id.as_str()));
    assert_eq!(state.notes, notes);
}
