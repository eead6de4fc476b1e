//! The board controller.
//!
//! This module wires drag lifecycle events to the reorder engine and the
//! task store, and exposes the column-filtered views the presentation
//! layer renders. The controller is the single place mutation is
//! triggered; it owns the store and the drag session exclusively.

use std::fmt;

use tracing::debug;

use crate::column::ColumnId;
use crate::error::Result;
use crate::notify::{Notice, Notifier, NullNotifier};
use crate::reorder::{DropTarget, move_across_columns, reorder_within_column};
use crate::session::DragSession;
use crate::store::TaskStore;
use crate::task::{NewTask, Task, TaskId};

/// Owns the task store and drag session, and routes events between them.
///
/// Inbound drag events come from the presentation layer's drag detection;
/// they are processed synchronously, one at a time, and every stale or
/// invalid event degrades to "no state change" rather than an error.
///
/// # Examples
///
/// ```
/// use corkboard_core::{BoardController, ColumnId, DropTarget, NewTask};
///
/// let mut board = BoardController::new();
/// let id = board.create_task(NewTask::new("Design mockups", ColumnId::Todo))?;
///
/// board.on_drag_start(id);
/// board.on_drag_over(id, Some(DropTarget::Column(ColumnId::Done)));
/// board.on_drag_end(id, None);
///
/// assert_eq!(board.view_for_column(ColumnId::Done).len(), 1);
/// assert!(board.active_task().is_none());
/// # Ok::<(), corkboard_core::BoardError>(())
/// ```
pub struct BoardController {
    store: TaskStore,
    session: DragSession,
    notifier: Box<dyn Notifier>,
}

impl Default for BoardController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BoardController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardController")
            .field("store", &self.store)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl BoardController {
    /// Creates a controller over an empty board, discarding notifications.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(TaskStore::new())
    }

    /// Creates a controller over an existing store.
    #[must_use]
    pub fn with_store(store: TaskStore) -> Self {
        Self {
            store,
            session: DragSession::new(),
            notifier: Box::new(NullNotifier),
        }
    }

    /// Installs the notification collaborator, builder-style.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Handles a drag-start event.
    ///
    /// Begins a drag session for the task if it exists; an unknown id
    /// leaves the session idle.
    pub fn on_drag_start(&mut self, task_id: TaskId) {
        self.session.start(task_id, self.store.tasks());
    }

    /// Handles a hover update while dragging.
    ///
    /// Reassigns the dragged task's column when it crosses into a different
    /// one, giving live feedback during the drag. A missing target, a stale
    /// id, or a same-column hover leaves the list untouched. Safe to call
    /// repeatedly with identical arguments.
    pub fn on_drag_over(&mut self, active_id: TaskId, target: Option<DropTarget>) {
        let Some(target) = target else {
            return;
        };

        if let Some(tasks) = move_across_columns(self.store.tasks(), active_id, target) {
            self.store.replace(tasks);
        }
    }

    /// Handles a drag-end event.
    ///
    /// If the drop target is a task in the same column, the dragged task is
    /// moved to its position. Any cross-column move already applied during
    /// hover stands. The drag session ends unconditionally, whatever the
    /// target was; dropping outside any target just snaps back.
    pub fn on_drag_end(&mut self, active_id: TaskId, target: Option<DropTarget>) {
        if let Some(DropTarget::Task(over_id)) = target
            && let Some(tasks) = reorder_within_column(self.store.tasks(), active_id, over_id)
        {
            self.store.replace(tasks);
        }

        self.session.end();
    }

    /// Creates a task from a draft and notifies the side-channel.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyTitle`](crate::BoardError::EmptyTitle) if
    /// the draft's title is blank.
    pub fn create_task(&mut self, draft: NewTask) -> Result<TaskId> {
        let column = draft.column;
        let id = self.store.create(draft)?;

        // The task was just created, so the lookup cannot miss.
        if let Some(task) = self.store.get(id) {
            debug!(task = %id, column = ?column, "task created");
            self.notifier.notify(Notice::new(
                "Task created",
                format!("\"{}\" added to {}", task.title, column.title()),
            ));
        }
        Ok(id)
    }

    /// Deletes the task with the given id, if present.
    ///
    /// Deleting an unknown id is a silent no-op and fires no notification.
    pub fn delete_task(&mut self, id: TaskId) {
        if let Some(task) = self.store.remove(id) {
            debug!(task = %id, "task deleted");
            self.notifier.notify(Notice::new(
                "Task deleted",
                format!("\"{}\" has been removed", task.title),
            ));
        }
    }

    /// Returns the tasks of one column, in visible order.
    #[must_use]
    pub fn view_for_column(&self, column: ColumnId) -> Vec<&Task> {
        self.store.by_column(column)
    }

    /// Returns the task currently being dragged, if any.
    ///
    /// Display-only: used for the drag overlay/preview, never to mutate
    /// state. `None` if the session is idle or the task has since been
    /// deleted.
    #[must_use]
    pub fn active_task(&self) -> Option<&Task> {
        let id = self.session.active_task_id()?;
        self.store.get(id)
    }

    /// Returns `true` if a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }
}
