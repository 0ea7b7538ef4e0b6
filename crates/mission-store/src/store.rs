use crate::error::{Result, StoreError};
use crate::repository::DocumentRepository;
use chrono::{NaiveDate, Utc};
use mission_core::{
    classify_tasks, search, ActivityEntry, ActivityKind, Comment, Document, Link, LinkPatch, Note,
    NoteDraft, NotePatch, Priority, SearchResults, Settings, SettingsPatch, TagColor, Task,
    TaskDraft, TaskPatch, TemporalWindows,
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

/// How many activity entries the today view carries
pub const RECENT_ACTIVITY_LIMIT: usize = 10;

/// Creation attributes for a task. Anything absent gets the store default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub column: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub tags: Option<Vec<String>>,
}

impl From<TaskDraft> for NewTask {
    fn from(draft: TaskDraft) -> Self {
        NewTask {
            title: Some(draft.title),
            priority: Some(draft.priority),
            category: Some(draft.category),
            assignee: Some(draft.assignee),
            due_date: draft.due_date,
            tags: Some(draft.tags),
            ..Default::default()
        }
    }
}

/// Creation attributes for a note
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub pinned: Option<bool>,
}

impl From<NoteDraft> for NewNote {
    fn from(draft: NoteDraft) -> Self {
        NewNote {
            title: Some(draft.title),
            content: Some(draft.content),
            ..Default::default()
        }
    }
}

/// Creation attributes for a link. The caller resolves the title (remote
/// fetch or user input) before this reaches the store; an absent title
/// falls back to the URL itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLink {
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// The dashboard payload: the three temporal windows plus the ten most
/// recent activity entries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayView {
    #[serde(flatten)]
    pub windows: TemporalWindows,
    pub recent_activity: Vec<ActivityEntry>,
}

/// Owns the document's read-modify-write cycle. Every operation loads the
/// document fresh from the repository, mutates, and commits it back in full;
/// the mutex serializes those cycles so overlapping requests cannot drop
/// each other's writes.
pub struct DocumentStore {
    repository: Mutex<Box<dyn DocumentRepository>>,
    default_user: String,
}

impl DocumentStore {
    pub fn new(repository: impl DocumentRepository + 'static) -> Self {
        Self {
            repository: Mutex::new(Box::new(repository)),
            default_user: "Adam".to_string(),
        }
    }

    /// The user recorded on activity entries that have no better actor
    /// (note and link mutations, comments without an author).
    pub fn with_default_user(mut self, user: impl Into<String>) -> Self {
        self.default_user = user.into();
        self
    }

    // ----- read paths -----

    pub async fn load(&self) -> Result<Document> {
        let repository = self.repository.lock().await;
        repository.load().await
    }

    pub async fn today_view(&self, today: NaiveDate) -> Result<TodayView> {
        let document = self.load().await?;
        Ok(TodayView {
            windows: classify_tasks(&document.tasks, today),
            recent_activity: document
                .activity
                .iter()
                .take(RECENT_ACTIVITY_LIMIT)
                .cloned()
                .collect(),
        })
    }

    pub async fn search(&self, query: &str) -> Result<SearchResults> {
        let document = self.load().await?;
        Ok(search(&document, query))
    }

    pub async fn activity(&self) -> Result<Vec<ActivityEntry>> {
        Ok(self.load().await?.activity)
    }

    pub async fn settings(&self) -> Result<Settings> {
        Ok(self.load().await?.settings)
    }

    // ----- tasks -----

    pub async fn create_task(&self, attrs: NewTask) -> Result<Task> {
        let repository = self.repository.lock().await;
        let mut document = repository.load().await?;
        let now = Utc::now();

        let mut task = Task::new(
            document.allocate_task_id(),
            title_or(attrs.title, "Untitled"),
            now,
        );
        if let Some(description) = attrs.description {
            task.description = description;
        }
        if let Some(column) = attrs.column {
            task.column = column;
        }
        if let Some(priority) = attrs.priority {
            task.priority = priority;
        }
        if let Some(category) = attrs.category {
            task.category = category;
        }
        if let Some(assignee) = attrs.assignee {
            task.assignee = assignee;
        }
        task.due_date = attrs.due_date;
        if let Some(tags) = attrs.tags {
            task.tags = tags;
        }

        document.record_activity(
            ActivityKind::TaskCreated,
            task.id,
            format!("Created task \"{}\"", task.title),
            task.assignee.clone(),
            now,
        );
        document.tasks.push(task.clone());
        repository.commit(&document).await?;

        tracing::debug!(id = task.id, title = %task.title, "task created");
        Ok(task)
    }

    pub async fn update_task(&self, id: u64, patch: TaskPatch) -> Result<Task> {
        let repository = self.repository.lock().await;
        let mut document = repository.load().await?;
        let now = Utc::now();

        let task = document
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found("task", id))?;

        let (old_column, old_priority) = patch.apply(task, now);
        let task = task.clone();

        if task.column != old_column {
            document.record_activity(
                ActivityKind::TaskMoved,
                id,
                format!(
                    "Moved \"{}\" from {} to {}",
                    task.title, old_column, task.column
                ),
                task.assignee.clone(),
                now,
            );
        }
        if task.priority != old_priority {
            document.record_activity(
                ActivityKind::TaskUpdated,
                id,
                format!("Changed priority of \"{}\" to {}", task.title, task.priority),
                task.assignee.clone(),
                now,
            );
        }

        repository.commit(&document).await?;
        Ok(task)
    }

    /// Deleting an id that is not present succeeds without touching the
    /// document, matching the behavior clients have always relied on.
    pub async fn delete_task(&self, id: u64) -> Result<()> {
        let repository = self.repository.lock().await;
        let mut document = repository.load().await?;
        let now = Utc::now();

        let Some(index) = document.tasks.iter().position(|t| t.id == id) else {
            tracing::debug!(id, "delete of absent task is a no-op");
            return Ok(());
        };

        // The removed record supplies the entry's title and actor
        let task = document.tasks.remove(index);
        document.record_activity(
            ActivityKind::TaskDeleted,
            id,
            format!("Deleted task \"{}\"", task.title),
            task.assignee.clone(),
            now,
        );
        repository.commit(&document).await?;
        Ok(())
    }

    pub async fn add_comment(
        &self,
        task_id: u64,
        text: String,
        author: Option<String>,
    ) -> Result<Comment> {
        let repository = self.repository.lock().await;
        let mut document = repository.load().await?;
        let now = Utc::now();

        let task = document
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| StoreError::not_found("task", task_id))?;

        let comment = Comment {
            text,
            author: author.unwrap_or_else(|| self.default_user.clone()),
            created_at: now,
        };
        task.comments.push(comment.clone());
        task.updated_at = now;
        let title = task.title.clone();

        document.record_activity(
            ActivityKind::CommentAdded,
            task_id,
            format!("Commented on \"{title}\""),
            comment.author.clone(),
            now,
        );
        repository.commit(&document).await?;
        Ok(comment)
    }

    // ----- notes -----

    pub async fn create_note(&self, attrs: NewNote) -> Result<Note> {
        let repository = self.repository.lock().await;
        let mut document = repository.load().await?;
        let now = Utc::now();

        let mut note = Note::new(
            document.allocate_note_id(),
            title_or(attrs.title, "Untitled Note"),
            now,
        );
        if let Some(content) = attrs.content {
            note.content = content;
        }
        if let Some(tags) = attrs.tags {
            note.tags = tags;
        }
        if let Some(pinned) = attrs.pinned {
            note.pinned = pinned;
        }

        document.record_activity(
            ActivityKind::NoteCreated,
            note.id,
            format!("Created note \"{}\"", note.title),
            self.default_user.clone(),
            now,
        );
        document.notes.push(note.clone());
        repository.commit(&document).await?;

        tracing::debug!(id = note.id, title = %note.title, "note created");
        Ok(note)
    }

    pub async fn update_note(&self, id: u64, patch: NotePatch) -> Result<Note> {
        let repository = self.repository.lock().await;
        let mut document = repository.load().await?;
        let now = Utc::now();

        let note = document
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| StoreError::not_found("note", id))?;

        patch.apply(note, now);
        let note = note.clone();

        document.record_activity(
            ActivityKind::NoteUpdated,
            id,
            format!("Updated note \"{}\"", note.title),
            self.default_user.clone(),
            now,
        );
        repository.commit(&document).await?;
        Ok(note)
    }

    pub async fn delete_note(&self, id: u64) -> Result<()> {
        let repository = self.repository.lock().await;
        let mut document = repository.load().await?;
        let now = Utc::now();

        let Some(index) = document.notes.iter().position(|n| n.id == id) else {
            tracing::debug!(id, "delete of absent note is a no-op");
            return Ok(());
        };

        let note = document.notes.remove(index);
        document.record_activity(
            ActivityKind::NoteDeleted,
            id,
            format!("Deleted note \"{}\"", note.title),
            self.default_user.clone(),
            now,
        );
        repository.commit(&document).await?;
        Ok(())
    }

    // ----- links -----

    pub async fn create_link(&self, attrs: NewLink) -> Result<Link> {
        let repository = self.repository.lock().await;
        let mut document = repository.load().await?;
        let now = Utc::now();

        let title = title_or(attrs.title, &attrs.url);
        let mut link = Link::new(document.allocate_link_id(), attrs.url, title, now);
        if let Some(description) = attrs.description {
            link.description = description;
        }
        if let Some(tags) = attrs.tags {
            link.tags = tags;
        }

        document.record_activity(
            ActivityKind::LinkCreated,
            link.id,
            format!("Created link \"{}\"", link.title),
            self.default_user.clone(),
            now,
        );
        document.links.push(link.clone());
        repository.commit(&document).await?;

        tracing::debug!(id = link.id, url = %link.url, "link created");
        Ok(link)
    }

    pub async fn update_link(&self, id: u64, patch: LinkPatch) -> Result<Link> {
        let repository = self.repository.lock().await;
        let mut document = repository.load().await?;
        let now = Utc::now();

        let link = document
            .links
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| StoreError::not_found("link", id))?;

        patch.apply(link, now);
        let link = link.clone();

        document.record_activity(
            ActivityKind::LinkUpdated,
            id,
            format!("Updated link \"{}\"", link.title),
            self.default_user.clone(),
            now,
        );
        repository.commit(&document).await?;
        Ok(link)
    }

    pub async fn delete_link(&self, id: u64) -> Result<()> {
        let repository = self.repository.lock().await;
        let mut document = repository.load().await?;
        let now = Utc::now();

        let Some(index) = document.links.iter().position(|l| l.id == id) else {
            tracing::debug!(id, "delete of absent link is a no-op");
            return Ok(());
        };

        let link = document.links.remove(index);
        document.record_activity(
            ActivityKind::LinkDeleted,
            id,
            format!("Deleted link \"{}\"", link.title),
            self.default_user.clone(),
            now,
        );
        repository.commit(&document).await?;
        Ok(())
    }

    // ----- catalog & settings -----

    pub async fn upsert_tag(&self, name: String, color: String) -> Result<Vec<TagColor>> {
        let repository = self.repository.lock().await;
        let mut document = repository.load().await?;
        document.upsert_tag(name, color);
        repository.commit(&document).await?;
        Ok(document.tags)
    }

    pub async fn update_settings(&self, patch: SettingsPatch) -> Result<Settings> {
        let repository = self.repository.lock().await;
        let mut document = repository.load().await?;
        patch.apply(&mut document.settings);
        repository.commit(&document).await?;
        Ok(document.settings)
    }
}

/// Empty and whitespace-only titles fall back to the per-entity default
fn title_or(title: Option<String>, fallback: &str) -> String {
    title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
