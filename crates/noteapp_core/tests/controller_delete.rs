mod common;

use common::{controller, wait_past_debounce, Call, Op, RecordingStore};
use noteapp_core::controller::DELETE_FAILED_ALERT;
use noteapp_core::DeletePrompt;

#[tokio::test]
async fn request_delete_opens_prompt_with_current_title() {
    let store = RecordingStore::with_notes(&[("1", "Groceries"), ("2", "")]);
    let (controller, _) = controller(&store);
    controller.load_notes().await;
    store.clear_calls();

    assert!(controller.request_delete("2"));
    assert_eq!(
        controller.snapshot().delete_prompt,
        Some(DeletePrompt {
            note_id: "2".to_string(),
            note_title: String::new(),
        })
    );
    assert!(store.calls().is_empty(), "request alone must not delete");
}

#[tokio::test]
async fn request_delete_for_unlisted_note_keeps_prompt_closed() {
    let store = RecordingStore::with_notes(&[("1", "Groceries")]);
    let (controller, _) = controller(&store);

    assert!(!controller.request_delete("1"), "list not loaded yet");
    assert!(controller.snapshot().delete_prompt.is_none());
}

#[tokio::test(start_paused = true)]
async fn deleting_selected_note_resets_to_new_note_state() {
    let store = RecordingStore::with_notes(&[("1", "Groceries"), ("2", "Work")]);
    let (controller, _) = controller(&store);
    controller.load_notes().await;
    controller.select_existing("1").await;
    store.clear_calls();

    controller.request_delete("1");
    controller.confirm_pending_delete().await;
    wait_past_debounce().await;

    let state = controller.snapshot();
    assert!(state.selected.is_none());
    assert!(state.title.is_empty());
    assert!(state.content.is_empty());
    assert!(state.delete_prompt.is_none());
    assert_eq!(state.notes.len(), 1);
    assert_eq!(
        store.calls(),
        vec![Call::Delete("1".to_string()), Call::List],
        "reset must not trigger an auto-save"
    );
}

#[tokio::test]
async fn deleting_other_note_leaves_draft_untouched() {
    let store = RecordingStore::with_notes(&[("1", "Groceries"), ("2", "Work")]);
    let (controller, _) = controller(&store);
    controller.load_notes().await;
    controller.select_existing("1").await;
    let before = controller.snapshot();

    controller.request_delete("2");
    controller.confirm_pending_delete().await;

    let after = controller.snapshot();
    assert_eq!(after.selected, before.selected);
    assert_eq!(after.title, before.title);
    assert_eq!(after.content, before.content);
    assert_eq!(store.stored_ids(), vec!["1".to_string()]);
}

#[tokio::test]
async fn failed_delete_alerts_and_still_closes_prompt() {
    let store = RecordingStore::with_notes(&[("1", "Groceries")]);
    let (controller, notifier) = controller(&store);
    controller.load_notes().await;
    controller.select_existing("1").await;
    store.fail(Op::Delete);

    controller.request_delete("1");
    controller.confirm_pending_delete().await;

    let state = controller.snapshot();
    assert!(state.delete_prompt.is_none());
    assert_eq!(state.selected_id(), Some("1"));
    assert_eq!(state.notes.len(), 1);
    assert_eq!(notifier.alerts(), vec![DELETE_FAILED_ALERT.to_string()]);
}

#[tokio::test]
async fn stale_id_delete_reports_not_found_to_user() {
    let store = RecordingStore::with_notes(&[]);
    let (controller, notifier) = controller(&store);

    controller.confirm_delete("gone").await;

    assert_eq!(notifier.alerts().len(), 1);
    assert!(controller.snapshot().delete_prompt.is_none());
}

#[tokio::test]
async fn confirm_without_prompt_does_nothing() {
    let store = RecordingStore::with_notes(&[("1", "Groceries")]);
    let (controller, _) = controller(&store);

    controller.confirm_pending_delete().await;
    assert!(store.calls().is_empty());

    controller.load_notes().await;
    controller.request_delete("1");
    controller.cancel_delete();
    controller.confirm_pending_delete().await;
    assert_eq!(store.calls(), vec![Call::List]);
}
