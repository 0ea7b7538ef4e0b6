//! CRUD behavior of `DocumentStore` against a real file-backed repository.

use mission_core::{NotePatch, Priority, SettingsPatch, TaskPatch};
use mission_store::{DocumentStore, JsonFileRepository, NewLink, NewNote, NewTask, StoreError};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> DocumentStore {
    DocumentStore::new(JsonFileRepository::new(dir.path().join("board.json")))
}

#[tokio::test]
async fn task_ids_are_sequential_and_unique() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let mut ids = Vec::new();
    for i in 0..5 {
        let task = store
            .create_task(NewTask {
                title: Some(format!("task {i}")),
                ..Default::default()
            })
            .await
            .unwrap();
        ids.push(task.id);
    }
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    // Counters survive a round-trip through the file
    let document = store.load().await.unwrap();
    assert_eq!(document.next_task_id, 6);
}

#[tokio::test]
async fn create_applies_documented_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let task = store.create_task(NewTask::default()).await.unwrap();
    assert_eq!(task.title, "Untitled");
    assert_eq!(task.column, "Backlog");
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.category, "Personal");
    assert_eq!(task.assignee, "Adam");
    assert!(task.due_date.is_none());

    let note = store.create_note(NewNote::default()).await.unwrap();
    assert_eq!(note.title, "Untitled Note");
    assert!(!note.pinned);

    let link = store
        .create_link(NewLink {
            url: "https://example.com".to_string(),
            title: None,
            description: None,
            tags: None,
        })
        .await
        .unwrap();
    assert_eq!(link.title, "https://example.com");
}

#[tokio::test]
async fn update_merges_shallowly_and_restamps() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let task = store
        .create_task(NewTask {
            title: Some("Write report".to_string()),
            description: Some("quarterly".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let updated = store
        .update_task(
            task.id,
            TaskPatch {
                column: Some("In Progress".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.column, "In Progress");
    assert_eq!(updated.description, "quarterly");
    assert!(updated.updated_at >= task.updated_at);
}

#[tokio::test]
async fn update_of_missing_id_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let err = store
        .update_task(42, TaskPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::NotFound {
            entity: "task",
            id: 42
        }
    ));

    let err = store
        .update_note(7, NotePatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "note", .. }));
}

#[tokio::test]
async fn delete_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let task = store.create_task(NewTask::default()).await.unwrap();
    store.delete_task(task.id).await.unwrap();
    // Second delete of the same id still succeeds
    store.delete_task(task.id).await.unwrap();
    // As does a delete of an id that never existed
    store.delete_task(999).await.unwrap();

    let document = store.load().await.unwrap();
    assert!(document.tasks.is_empty());
}

#[tokio::test]
async fn comments_append_and_missing_task_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let task = store.create_task(NewTask::default()).await.unwrap();
    let comment = store
        .add_comment(task.id, "looks good".to_string(), Some("Atticus".to_string()))
        .await
        .unwrap();
    assert_eq!(comment.author, "Atticus");

    let comment = store
        .add_comment(task.id, "second pass".to_string(), None)
        .await
        .unwrap();
    assert_eq!(comment.author, "Adam");

    let document = store.load().await.unwrap();
    assert_eq!(document.tasks[0].comments.len(), 2);
    assert!(document.tasks[0].updated_at >= task.updated_at);

    let err = store
        .add_comment(404, "ghost".to_string(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[tokio::test]
async fn settings_merge_and_tag_catalog_upserts() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let settings = store
        .update_settings(SettingsPatch {
            theme: Some("light".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(settings.theme, "light");
    // Untouched fields keep their defaults
    assert_eq!(settings.default_view, "dashboard");

    let tags = store
        .upsert_tag("urgent".to_string(), "#f00".to_string())
        .await
        .unwrap();
    assert_eq!(tags.len(), 1);
    let tags = store
        .upsert_tag("urgent".to_string(), "#a00".to_string())
        .await
        .unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].color, "#a00");
}

#[tokio::test]
async fn search_reads_the_live_document() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    store
        .create_task(NewTask {
            title: Some("Prune the garden".to_string()),
            tags: Some(vec!["urgent".to_string()]),
            ..Default::default()
        })
        .await
        .unwrap();

    let results = store.search("URGENT").await.unwrap();
    assert_eq!(results.tasks.len(), 1);
    let results = store.search("").await.unwrap();
    assert!(results.tasks.is_empty());
}
