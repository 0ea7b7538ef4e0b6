use crate::CoreError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task priority. Serialized lowercase to match the persisted document
/// format ("low", "medium", "high").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(CoreError::InvalidPriority(other.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        write!(f, "{s}")
    }
}

/// A comment on a task. Comments are append-only: once added they are never
/// edited or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// A scheduled reminder attached to a task
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub remind_at: DateTime<Utc>,
    #[serde(default)]
    pub fired: bool,
}

/// A kanban task. `column` is expected to be one of the document's declared
/// column labels but is intentionally not validated against them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub column: String,
    #[serde(default)]
    pub priority: Priority,
    pub category: String,
    pub assignee: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub reminders: Vec<Reminder>,
    #[serde(default)]
    pub recurrence: Option<String>,
    #[serde(default)]
    pub attached_notes: Vec<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(id: u64, title: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            column: "Backlog".to_string(),
            priority: Priority::Medium,
            category: "Personal".to_string(),
            assignee: "Adam".to_string(),
            due_date: None,
            tags: Vec::new(),
            comments: Vec::new(),
            reminders: Vec::new(),
            recurrence: None,
            attached_notes: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Shallow-merge patch for a task: only present fields overwrite. The
/// `Option<Option<_>>` fields distinguish "leave alone" (outer None) from
/// "clear" (inner None).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub column: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub assignee: Option<String>,
    #[serde(default, with = "double_option")]
    pub due_date: Option<Option<NaiveDate>>,
    pub tags: Option<Vec<String>>,
    pub reminders: Option<Vec<Reminder>>,
    #[serde(default, with = "double_option")]
    pub recurrence: Option<Option<String>>,
    pub attached_notes: Option<Vec<u64>>,
}

impl TaskPatch {
    /// Apply the patch to a task, re-stamping `updated_at`. Returns the
    /// previous column and priority so the caller can decide which activity
    /// entries the change warrants.
    pub fn apply(self, task: &mut Task, now: DateTime<Utc>) -> (String, Priority) {
        let old_column = task.column.clone();
        let old_priority = task.priority;

        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(column) = self.column {
            task.column = column;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(category) = self.category {
            task.category = category;
        }
        if let Some(assignee) = self.assignee {
            task.assignee = assignee;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(tags) = self.tags {
            task.tags = tags;
        }
        if let Some(reminders) = self.reminders {
            task.reminders = reminders;
        }
        if let Some(recurrence) = self.recurrence {
            task.recurrence = recurrence;
        }
        if let Some(attached_notes) = self.attached_notes {
            task.attached_notes = attached_notes;
        }
        task.updated_at = now;

        (old_column, old_priority)
    }
}

/// Deserializes a JSON field so that an explicit `null` becomes
/// `Some(None)` while an absent field stays `None`.
mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
