use crate::activity::{ActivityEntry, ActivityKind};
use crate::link::Link;
use crate::note::Note;
use crate::task::Task;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The activity list never grows past this many entries; older entries fall
/// off the tail.
pub const MAX_ACTIVITY_ENTRIES: usize = 100;

/// A tag catalog entry: a known tag name and its display color, independent
/// of which entities currently use the tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagColor {
    pub name: String,
    pub color: String,
}

/// User-facing preferences, shallow-merged on update
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: String,
    pub focus_mode: bool,
    pub default_view: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            focus_mode: false,
            default_view: "dashboard".to_string(),
        }
    }
}

/// Shallow-merge patch for settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub theme: Option<String>,
    pub focus_mode: Option<bool>,
    pub default_view: Option<String>,
}

impl SettingsPatch {
    pub fn apply(self, settings: &mut Settings) {
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(focus_mode) = self.focus_mode {
            settings.focus_mode = focus_mode;
        }
        if let Some(default_view) = self.default_view {
            settings.default_view = default_view;
        }
    }
}

/// The whole persisted state: one JSON document holding every entity, the
/// board/category/tag configuration, settings, the audit trail, and one
/// monotonic id counter per entity type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub columns: Vec<String>,
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<TagColor>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub activity: Vec<ActivityEntry>,
    #[serde(default = "initial_id")]
    pub next_task_id: u64,
    #[serde(default = "initial_id")]
    pub next_note_id: u64,
    #[serde(default = "initial_id")]
    pub next_link_id: u64,
    #[serde(default = "initial_id")]
    pub next_activity_id: u64,
}

fn initial_id() -> u64 {
    1
}

impl Default for Document {
    fn default() -> Self {
        Self {
            columns: ["Backlog", "To Do", "In Progress", "Review", "Done"]
                .map(String::from)
                .to_vec(),
            categories: ["ICON", "Capstone", "Personal", "Atticus Setup"]
                .map(String::from)
                .to_vec(),
            tags: Vec::new(),
            settings: Settings::default(),
            tasks: Vec::new(),
            notes: Vec::new(),
            links: Vec::new(),
            activity: Vec::new(),
            next_task_id: 1,
            next_note_id: 1,
            next_link_id: 1,
            next_activity_id: 1,
        }
    }
}

impl Document {
    pub fn allocate_task_id(&mut self) -> u64 {
        let id = self.next_task_id;
        self.next_task_id += 1;
        id
    }

    pub fn allocate_note_id(&mut self) -> u64 {
        let id = self.next_note_id;
        self.next_note_id += 1;
        id
    }

    pub fn allocate_link_id(&mut self) -> u64 {
        let id = self.next_link_id;
        self.next_link_id += 1;
        id
    }

    /// Record one audit entry at the front of the activity list, then trim
    /// the list back to [`MAX_ACTIVITY_ENTRIES`]. Newest-first ordering is an
    /// external contract; consumers never re-sort.
    pub fn record_activity(
        &mut self,
        kind: ActivityKind,
        entity_id: u64,
        description: String,
        user: String,
        now: DateTime<Utc>,
    ) {
        let id = self.next_activity_id;
        self.next_activity_id += 1;

        self.activity.insert(
            0,
            ActivityEntry {
                id,
                kind,
                entity_id,
                description,
                timestamp: now,
                user,
            },
        );
        self.activity.truncate(MAX_ACTIVITY_ENTRIES);
    }

    /// Add a tag to the catalog, or recolor it if the name already exists
    pub fn upsert_tag(&mut self, name: String, color: String) {
        match self.tags.iter_mut().find(|t| t.name == name) {
            Some(existing) => existing.color = color,
            None => self.tags.push(TagColor { name, color }),
        }
    }
}
