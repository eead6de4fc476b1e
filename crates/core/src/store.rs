//! The authoritative task list.
//!
//! This module defines [`TaskStore`], which owns the single ordered task
//! list shared by all columns. The per-column view is a stable-order filter
//! over that list; there are no redundant per-column collections that could
//! drift out of sync.

use crate::column::ColumnId;
use crate::error::{BoardError, Result};
use crate::task::{NewTask, Task, TaskId};

/// Holds the authoritative ordered task list.
///
/// Order within the list is significant only insofar as it determines the
/// relative order of tasks within each column: [`TaskStore::by_column`]
/// preserves list order, and that filtered view is what gets rendered.
///
/// # Examples
///
/// ```
/// use corkboard_core::{ColumnId, NewTask, TaskStore};
///
/// let mut store = TaskStore::new();
/// store.create(NewTask::new("Design mockups", ColumnId::Todo))?;
/// store.create(NewTask::new("Ship it", ColumnId::Done))?;
///
/// assert_eq!(store.by_column(ColumnId::Todo).len(), 1);
/// assert_eq!(store.by_column(ColumnId::Done).len(), 1);
/// # Ok::<(), corkboard_core::BoardError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Creates a store from an existing task list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateTaskId`] if two tasks share an id.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_core::{ColumnId, Task, TaskStore};
    ///
    /// let tasks = vec![Task::new("One", ColumnId::Todo)];
    /// let store = TaskStore::from_tasks(tasks)?;
    /// assert_eq!(store.len(), 1);
    /// # Ok::<(), corkboard_core::BoardError>(())
    /// ```
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self> {
        for (i, task) in tasks.iter().enumerate() {
            if tasks[..i].iter().any(|t| t.id == task.id) {
                return Err(BoardError::DuplicateTaskId(task.id));
            }
        }
        Ok(Self { tasks })
    }

    /// Replaces the entire task list with a new snapshot.
    ///
    /// This is how reorder-engine output is committed. The engine only ever
    /// permutes or relabels the existing tasks, so uniqueness is preserved.
    pub fn replace(&mut self, tasks: Vec<Task>) {
        debug_assert!(
            tasks
                .iter()
                .enumerate()
                .all(|(i, task)| !tasks[..i].iter().any(|t| t.id == task.id)),
            "replacement list must not contain duplicate task ids"
        );
        self.tasks = tasks;
    }

    /// Creates a task from a draft, minting a fresh unique id.
    ///
    /// The task is appended to the end of the list, so it lands at the end
    /// of its column's visible order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyTitle`] if the title is empty or
    /// whitespace-only.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_core::{BoardError, ColumnId, NewTask, TaskStore};
    ///
    /// let mut store = TaskStore::new();
    /// let id = store.create(NewTask::new("Write docs", ColumnId::Todo))?;
    /// assert!(store.get(id).is_some());
    ///
    /// let err = store.create(NewTask::new("   ", ColumnId::Todo));
    /// assert!(matches!(err, Err(BoardError::EmptyTitle)));
    /// # Ok::<(), corkboard_core::BoardError>(())
    /// ```
    pub fn create(&mut self, draft: NewTask) -> Result<TaskId> {
        if draft.title.trim().is_empty() {
            return Err(BoardError::EmptyTitle);
        }

        let mut task = Task::new(draft.title, draft.column);
        task.description = draft.description;
        let id = task.id;
        self.tasks.push(task);
        Ok(id)
    }

    /// Appends a pre-built task to the end of the list.
    ///
    /// Used for seeding boards with known tasks. The caller is responsible
    /// for id uniqueness; prefer [`TaskStore::create`] for user input.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes the task with the given id, if present.
    ///
    /// Removing a non-existent id is a silent no-op returning `None`, since
    /// delete events can race against earlier deletions.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_core::{ColumnId, Task, TaskId, TaskStore};
    ///
    /// let task = Task::new("One", ColumnId::Todo);
    /// let id = task.id;
    /// let mut store = TaskStore::from_tasks(vec![task])?;
    ///
    /// assert!(store.remove(id).is_some());
    /// assert!(store.remove(id).is_none());
    /// # Ok::<(), corkboard_core::BoardError>(())
    /// ```
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(pos))
    }

    /// Returns the tasks of one column, in list order.
    ///
    /// This is the column-filtered view the presentation layer renders.
    #[must_use]
    pub fn by_column(&self, column: ColumnId) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.column == column).collect()
    }

    /// Returns a reference to the task with the given id, if present.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Returns the full ordered task list.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
