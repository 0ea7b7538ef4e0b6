use thiserror::Error;

/// Errors from document persistence and CRUD
#[derive(Debug, Error)]
pub enum StoreError {
    /// Update/comment against an id that is not in the document
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// Reading or writing the document file failed
    #[error("document IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document file holds JSON this version cannot read, or the
    /// document failed to serialize
    #[error("document serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: u64) -> Self {
        StoreError::NotFound { entity, id }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
