//! Persistence for the mission control document: a repository seam over one
//! JSON file plus the `DocumentStore` that owns every read-modify-write
//! cycle, allocates entity ids, and keeps the activity trail.

mod error;
mod repository;
mod store;

pub use error::{Result, StoreError};
pub use repository::{DocumentRepository, JsonFileRepository};
pub use store::{DocumentStore, NewLink, NewNote, NewTask, TodayView, RECENT_ACTIVITY_LIMIT};
