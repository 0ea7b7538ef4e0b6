//! Audit-trail behavior: what gets recorded, in what order, and the bound.

use chrono::{Duration, Utc};
use mission_core::{ActivityKind, TaskPatch, MAX_ACTIVITY_ENTRIES};
use mission_store::{DocumentStore, JsonFileRepository, NewNote, NewTask, RECENT_ACTIVITY_LIMIT};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> DocumentStore {
    DocumentStore::new(JsonFileRepository::new(dir.path().join("board.json")))
}

#[tokio::test]
async fn column_toggle_records_two_moves_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let task = store
        .create_task(NewTask {
            title: Some("Ship release".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    for column in ["Done", "In Progress"] {
        store
            .update_task(
                task.id,
                TaskPatch {
                    column: Some(column.to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    let activity = store.activity().await.unwrap();
    let moves: Vec<_> = activity
        .iter()
        .filter(|e| e.kind == ActivityKind::TaskMoved)
        .collect();
    assert_eq!(moves.len(), 2);
    // Newest first: the move back to In Progress leads
    assert!(moves[0].description.contains("from Done to In Progress"));
    assert!(moves[1].description.contains("from Backlog to Done"));
    assert!(moves[0].id > moves[1].id);
}

#[tokio::test]
async fn description_only_patch_records_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let task = store.create_task(NewTask::default()).await.unwrap();
    let before = store.activity().await.unwrap().len();

    store
        .update_task(
            task.id,
            TaskPatch {
                description: Some("now with details".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let activity = store.activity().await.unwrap();
    assert_eq!(activity.len(), before);
}

#[tokio::test]
async fn priority_change_records_task_updated() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let task = store.create_task(NewTask::default()).await.unwrap();
    store
        .update_task(
            task.id,
            TaskPatch {
                priority: Some("high".parse().unwrap()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let activity = store.activity().await.unwrap();
    assert_eq!(activity[0].kind, ActivityKind::TaskUpdated);
    assert!(activity[0].description.contains("to high"));
}

#[tokio::test]
async fn delete_records_the_entry_with_the_old_title() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let note = store
        .create_note(NewNote {
            title: Some("Scratchpad".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    store.delete_note(note.id).await.unwrap();

    let activity = store.activity().await.unwrap();
    assert_eq!(activity[0].kind, ActivityKind::NoteDeleted);
    assert!(activity[0].description.contains("Scratchpad"));
}

#[tokio::test]
async fn log_is_bounded_to_the_hundred_most_recent() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    for i in 0..150 {
        store
            .create_note(NewNote {
                title: Some(format!("note {i}")),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let activity = store.activity().await.unwrap();
    assert_eq!(activity.len(), MAX_ACTIVITY_ENTRIES);
    assert!(activity[0].description.contains("note 149"));
    assert!(activity.last().unwrap().description.contains("note 50"));
}

#[tokio::test]
async fn today_view_buckets_tasks_and_caps_recent_activity() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let today = Utc::now().date_naive();

    store
        .create_task(NewTask {
            title: Some("due today".to_string()),
            due_date: Some(today),
            ..Default::default()
        })
        .await
        .unwrap();
    store
        .create_task(NewTask {
            title: Some("late".to_string()),
            column: Some("In Progress".to_string()),
            due_date: Some(today - Duration::days(1)),
            ..Default::default()
        })
        .await
        .unwrap();
    store
        .create_task(NewTask {
            title: Some("finished late one".to_string()),
            column: Some("Done".to_string()),
            due_date: Some(today - Duration::days(1)),
            ..Default::default()
        })
        .await
        .unwrap();
    for i in 0..12 {
        store
            .create_task(NewTask {
                title: Some(format!("upcoming {i}")),
                due_date: Some(today + Duration::days(3)),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let view = store.today_view(today).await.unwrap();
    assert_eq!(view.windows.today_tasks.len(), 1);
    assert_eq!(view.windows.overdue_tasks.len(), 1);
    assert_eq!(view.windows.upcoming_tasks.len(), 12);
    assert_eq!(view.recent_activity.len(), RECENT_ACTIVITY_LIMIT);

    // The wire shape keeps the original field names
    let json = serde_json::to_value(&view).unwrap();
    assert!(json.get("todayTasks").is_some());
    assert!(json.get("overdueTasks").is_some());
    assert!(json.get("recentActivity").is_some());
}
