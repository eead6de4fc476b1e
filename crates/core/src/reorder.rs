//! The reorder engine.
//!
//! Pure functions that compute a new task list from a drag event. Both
//! functions take the current list as a slice and return `Some(list)` with
//! a fresh snapshot when a change is needed, or `None` to keep the current
//! list. They never mutate their input and never fail: a stale id or an
//! invalid target simply yields `None`.

use tracing::debug;

use crate::column::ColumnId;
use crate::task::{Task, TaskId};

/// What the dragged task is currently over.
///
/// Produced by the presentation layer's hit-testing: either a column
/// surface (including the empty space below its cards) or another task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Hovering over a column itself.
    Column(ColumnId),
    /// Hovering over another task.
    Task(TaskId),
}

/// Computes the list after a hover update, reassigning the dragged task's
/// column when it crosses into a different one.
///
/// Called on every hover update while dragging, so it must be cheap and
/// idempotent: once the task's column matches the target, further calls
/// with the same arguments return `None`.
///
/// Returns `None` when no change is needed:
///
/// - `active_id` does not resolve in `tasks`;
/// - the target is a task id that does not resolve;
/// - the target column equals the dragged task's current column
///   (within-column ordering is settled at drag end, not during hover).
///
/// Otherwise returns a snapshot identical to `tasks` except the dragged
/// task's column is reassigned. The task keeps its position in the
/// underlying list, so its visible position in the target column is
/// wherever that position interleaves with the column's existing members;
/// drag end may refine the ordering further.
///
/// # Examples
///
/// ```
/// use corkboard_core::{ColumnId, DropTarget, Task, move_across_columns};
///
/// let task = Task::new("Design mockups", ColumnId::Todo);
/// let id = task.id;
/// let tasks = vec![task];
///
/// let moved = move_across_columns(&tasks, id, DropTarget::Column(ColumnId::Done))
///     .expect("column changed");
/// assert_eq!(moved[0].column, ColumnId::Done);
///
/// // Hovering the same target again is a no-op.
/// assert!(move_across_columns(&moved, id, DropTarget::Column(ColumnId::Done)).is_none());
/// ```
#[must_use]
pub fn move_across_columns(
    tasks: &[Task],
    active_id: TaskId,
    target: DropTarget,
) -> Option<Vec<Task>> {
    let active_task = tasks.iter().find(|t| t.id == active_id)?;

    let target_column = match target {
        DropTarget::Column(column) => column,
        DropTarget::Task(over_id) => tasks.iter().find(|t| t.id == over_id)?.column,
    };

    if active_task.column == target_column {
        return None;
    }

    debug!(task = %active_id, from = ?active_task.column, to = ?target_column, "moving task across columns");

    Some(
        tasks
            .iter()
            .cloned()
            .map(|mut t| {
                if t.id == active_id {
                    t.move_to_column(target_column);
                }
                t
            })
            .collect(),
    )
}

/// Computes the list after a drop, moving the dragged task to the dropped-on
/// task's position within their shared column.
///
/// Called once, at drag end. Returns `None` when no change is needed:
///
/// - the task was dropped on itself;
/// - either id does not resolve in `tasks`;
/// - the two tasks sit in different columns (the cross-column placement was
///   already finalized by [`move_across_columns`] during hover).
///
/// Otherwise the column's tasks are extracted in their existing relative
/// order, the dragged task is removed from its old index and reinserted at
/// the dropped-on task's index (shifting the tasks in between, not
/// swapping), and the result is the untouched remainder concatenated with
/// the reordered column. Only the per-column filtered views are observed,
/// but the concatenation keeps the full list deterministic.
///
/// # Examples
///
/// ```
/// use corkboard_core::{ColumnId, Task, reorder_within_column};
///
/// let a = Task::new("A", ColumnId::Todo);
/// let b = Task::new("B", ColumnId::Todo);
/// let (a_id, b_id) = (a.id, b.id);
/// let tasks = vec![a, b];
///
/// let reordered = reorder_within_column(&tasks, a_id, b_id).expect("order changed");
/// let titles: Vec<_> = reordered.iter().map(|t| t.title.as_str()).collect();
/// assert_eq!(titles, ["B", "A"]);
/// ```
#[must_use]
pub fn reorder_within_column(
    tasks: &[Task],
    active_id: TaskId,
    over_id: TaskId,
) -> Option<Vec<Task>> {
    if active_id == over_id {
        return None;
    }

    let active_task = tasks.iter().find(|t| t.id == active_id)?;
    let over_task = tasks.iter().find(|t| t.id == over_id)?;

    if active_task.column != over_task.column {
        return None;
    }

    let column = active_task.column;
    let (mut column_tasks, other_tasks): (Vec<Task>, Vec<Task>) =
        tasks.iter().cloned().partition(|t| t.column == column);

    let old_index = column_tasks.iter().position(|t| t.id == active_id)?;
    let new_index = column_tasks.iter().position(|t| t.id == over_id)?;

    debug!(task = %active_id, column = ?column, from = old_index, to = new_index, "reordering task within column");

    let moved = column_tasks.remove(old_index);
    column_tasks.insert(new_index, moved);

    let mut result = other_tasks;
    result.extend(column_tasks);
    Some(result)
}
