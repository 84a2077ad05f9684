//! Error kinds surfaced by the task store.
//!
//! Every store operation returns `Result<_, TaskError>`. Nothing is retried or
//! swallowed; the command layer wraps these in `anyhow` for display.

use super::messages::Message;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// A required field is empty or a value is outside its allowed set.
    #[error("{0}")]
    Validation(Message),

    /// The referenced task id does not exist.
    #[error("Task with ID {0} not found")]
    NotFound(i64),

    /// The database is unavailable, corrupt, or rejected the statement.
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl TaskError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskError::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, TaskError::Validation(_))
    }
}
