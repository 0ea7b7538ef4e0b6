use thiserror::Error;

/// Errors produced by the core domain model
#[derive(Debug, Error)]
pub enum CoreError {
    /// A priority string that is not one of low/medium/high
    #[error("unknown priority: {0}")]
    InvalidPriority(String),

    /// A capture type string that is not task/note/link
    #[error("unknown capture type: {0}")]
    InvalidCaptureType(String),
}
