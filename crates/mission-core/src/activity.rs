use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The closed set of auditable mutations. Serialized as the original
/// snake_case strings so existing documents and consumers keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    TaskCreated,
    TaskUpdated,
    TaskMoved,
    TaskDeleted,
    NoteCreated,
    NoteUpdated,
    NoteDeleted,
    LinkCreated,
    LinkUpdated,
    LinkDeleted,
    CommentAdded,
}

/// One entry in the audit trail. Entries are immutable once recorded; the
/// list they live in is newest-first and bounded (see `Document`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub entity_id: u64,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub user: String,
}
