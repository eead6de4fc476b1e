//! Task types for the board.
//!
//! This module defines the task structure and its identifier. Tasks are
//! owned by the [`TaskStore`](crate::TaskStore); their identity never
//! changes, and their column changes only through the reorder engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::column::ColumnId;

/// Unique identifier for a task.
///
/// Uses UUID v4 for globally unique identification.
pub type TaskId = uuid::Uuid;

/// A task on the board.
///
/// Each task has a stable unique identifier, a title, an optional
/// description, and the column it currently resides in.
///
/// # Examples
///
/// ```
/// use corkboard_core::{ColumnId, Task};
///
/// let task = Task::new("Design mockups", ColumnId::Todo);
/// assert_eq!(task.column, ColumnId::Todo);
/// assert!(task.description.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Short summary of the task.
    pub title: String,
    /// Optional detailed description of what needs to be done.
    pub description: Option<String>,
    /// Which column this task currently resides in.
    pub column: ColumnId,
    /// When this task was created.
    pub created_at: DateTime<Utc>,
    /// When this task was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with the given title in the given column.
    ///
    /// A fresh id is generated and timestamps are set to the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_core::{ColumnId, Task};
    ///
    /// let task = Task::new("Fix login bug", ColumnId::InProgress);
    /// assert_eq!(task.title, "Fix login bug");
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>, column: ColumnId) -> Self {
        Self::with_id(TaskId::new_v4(), title, column)
    }

    /// Creates a new task with a specific ID.
    ///
    /// Useful for tests and for seeding a board with known data.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_core::{ColumnId, Task, TaskId};
    ///
    /// let id = TaskId::new_v4();
    /// let task = Task::with_id(id, "Test task", ColumnId::Done);
    /// assert_eq!(task.id, id);
    /// ```
    #[must_use]
    pub fn with_id(id: TaskId, title: impl Into<String>, column: ColumnId) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            description: None,
            column,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the task description, builder-style.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_core::{ColumnId, Task};
    ///
    /// let task = Task::new("Design mockups", ColumnId::Todo)
    ///     .with_description("Create wireframes for the new dashboard");
    /// assert!(task.description.is_some());
    /// ```
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Moves the task to a different column and refreshes `updated_at`.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_core::{ColumnId, Task};
    ///
    /// let mut task = Task::new("Work item", ColumnId::Todo);
    /// task.move_to_column(ColumnId::Done);
    /// assert_eq!(task.column, ColumnId::Done);
    /// ```
    pub fn move_to_column(&mut self, column: ColumnId) {
        self.column = column;
        self.updated_at = Utc::now();
    }
}

/// Input for creating a task, as supplied by the creation dialog.
///
/// The id is minted by the store, not by the caller.
///
/// # Examples
///
/// ```
/// use corkboard_core::{ColumnId, NewTask};
///
/// let draft = NewTask::new("Write release notes", ColumnId::Todo);
/// assert!(draft.description.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Short summary of the task.
    pub title: String,
    /// Optional detailed description.
    pub description: Option<String>,
    /// Destination column for the new task.
    pub column: ColumnId,
}

impl NewTask {
    /// Creates a draft with the given title and destination column.
    #[must_use]
    pub fn new(title: impl Into<String>, column: ColumnId) -> Self {
        Self {
            title: title.into(),
            description: None,
            column,
        }
    }

    /// Sets the draft description, builder-style.
    ///
    /// An empty description is treated as absent, mirroring the creation
    /// dialog's optional field.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    impl Arbitrary for ColumnId {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                Just(ColumnId::Todo),
                Just(ColumnId::InProgress),
                Just(ColumnId::Done),
            ]
            .boxed()
        }
    }

    prop_compose! {
        pub(crate) fn arb_task()(
            title in "[a-zA-Z][a-zA-Z0-9 ]{0,50}",
            description in proptest::option::of("[a-zA-Z0-9 .,!?]{1,80}"),
            column in any::<ColumnId>(),
        ) -> Task {
            let mut task = Task::new(title, column);
            task.description = description;
            task
        }
    }

    proptest! {
        /// Task serialization roundtrips, preserving all fields.
        #[test]
        fn task_roundtrip(task in arb_task()) {
            let json = serde_json::to_string(&task).expect("serialize");
            let parsed: Task = serde_json::from_str(&json).expect("deserialize");

            prop_assert_eq!(task.id, parsed.id);
            prop_assert_eq!(task.title, parsed.title);
            prop_assert_eq!(task.description, parsed.description);
            prop_assert_eq!(task.column, parsed.column);
        }

        /// ColumnId serialization is deterministic and roundtrips.
        #[test]
        fn column_roundtrip(column in any::<ColumnId>()) {
            let json = serde_json::to_string(&column).expect("serialize");
            let parsed: ColumnId = serde_json::from_str(&json).expect("deserialize");
            prop_assert_eq!(column, parsed);
        }
    }
}
