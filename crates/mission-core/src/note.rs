use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A freeform note. Content is markdown-flavored free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(id: u64, title: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            content: String::new(),
            tags: Vec::new(),
            pinned: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Shallow-merge patch for a note
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub pinned: Option<bool>,
}

impl NotePatch {
    pub fn apply(self, note: &mut Note, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
        if let Some(tags) = self.tags {
            note.tags = tags;
        }
        if let Some(pinned) = self.pinned {
            note.pinned = pinned;
        }
        note.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_note_is_unpinned_and_empty() {
        let note = Note::new(1, "Untitled Note".to_string(), Utc::now());
        assert!(!note.pinned);
        assert!(note.content.is_empty());
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn patch_toggles_pinned_without_touching_content() {
        let now = Utc::now();
        let mut note = Note::new(1, "Groceries".to_string(), now);
        note.content = "milk, eggs".to_string();

        let patch: NotePatch = serde_json::from_str(r#"{"pinned": true}"#).unwrap();
        patch.apply(&mut note, now);

        assert!(note.pinned);
        assert_eq!(note.content, "milk, eggs");
    }
}
