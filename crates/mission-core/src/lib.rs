//! Core domain model for mission control: tasks, notes, links, the persisted
//! document they live in, and the pure logic derived from them (quick-capture
//! parsing, temporal windows, search).
//!
//! Nothing in this crate performs I/O. Persistence lives in `mission-store`,
//! the HTTP surface in `mission-web`.

pub mod activity;
pub mod capture;
pub mod document;
pub mod link;
pub mod note;
pub mod search;
pub mod task;
pub mod temporal;

mod error;

pub use activity::{ActivityEntry, ActivityKind};
pub use capture::{
    normalize_url, parse, CaptureDraft, CaptureOrigin, CaptureType, LinkDraft, NoteDraft,
    TaskDraft,
};
pub use document::{Document, Settings, SettingsPatch, TagColor, MAX_ACTIVITY_ENTRIES};
pub use error::CoreError;
pub use link::{Link, LinkPatch};
pub use note::{Note, NotePatch};
pub use search::{search, SearchResults};
pub use task::{Comment, Priority, Reminder, Task, TaskPatch};
pub use temporal::{classify_tasks, TemporalWindows, DONE_COLUMN};
