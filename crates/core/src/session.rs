//! Drag session tracking.
//!
//! This module defines the transient state machine for an in-progress drag.
//! A session exists only between a drag-start and a drag-end event and is
//! destroyed unconditionally on drag end, regardless of outcome.

use crate::task::{Task, TaskId};

/// The state of the drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DragState {
    /// No drag in progress. Initial and terminal state.
    #[default]
    Idle,
    /// A task is being dragged.
    Dragging(TaskId),
}

/// Tracks which task, if any, is currently being dragged.
///
/// The session is owned by the board controller and passed by reference,
/// never stored as ambient global state. Transitions are `Idle` →
/// `Dragging` on a validated start, and back to `Idle` unconditionally on
/// end.
///
/// # Examples
///
/// ```
/// use corkboard_core::{ColumnId, DragSession, Task};
///
/// let task = Task::new("Design mockups", ColumnId::Todo);
/// let tasks = vec![task.clone()];
///
/// let mut session = DragSession::new();
/// session.start(task.id, &tasks);
/// assert_eq!(session.active_task_id(), Some(task.id));
///
/// session.end();
/// assert!(session.active_task_id().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    /// Creates a new idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Begins dragging the task with the given id.
    ///
    /// The id must resolve in `tasks`; a start event naming an unknown task
    /// is ignored. The event comes from the presentation layer, which may
    /// race against a deletion, so the miss is a defensive no-op rather
    /// than an error.
    pub fn start(&mut self, task_id: TaskId, tasks: &[Task]) {
        if tasks.iter().any(|t| t.id == task_id) {
            self.state = DragState::Dragging(task_id);
        }
    }

    /// Ends the drag, returning to idle.
    ///
    /// Always safe to call, including when no drag is in progress. There is
    /// no separate cancel event; a drag released outside any drop target
    /// ends the same way.
    pub fn end(&mut self) {
        self.state = DragState::Idle;
    }

    /// Returns the id of the task being dragged, if any.
    #[must_use]
    pub const fn active_task_id(&self) -> Option<TaskId> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(id) => Some(id),
        }
    }

    /// Returns `true` if a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }
}
