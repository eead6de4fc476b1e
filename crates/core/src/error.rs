//! Error types for the corkboard-core crate.
//!
//! Drag events never produce errors: a stale or invalid reference degrades
//! to a no-op. The errors here cover the remaining surface, such as task
//! creation and board construction.

use thiserror::Error;

use crate::task::TaskId;

/// Errors that can occur during board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// A task title was empty or contained only whitespace.
    #[error("invalid task title: title cannot be empty")]
    EmptyTitle,

    /// Two tasks in the same list carried the same id.
    #[error("duplicate task id: {0}")]
    DuplicateTaskId(TaskId),
}

/// A specialized Result type for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;
