//! Board column types.
//!
//! This module defines the fixed set of columns tasks are grouped into.
//! The set is closed and ordered; it does not change at runtime.

use serde::{Deserialize, Serialize};

/// Identifier for a board column.
///
/// The columns form a fixed workflow: To Do, In Progress, Done. Serialized
/// values use the camelCase ids (`"todo"`, `"inProgress"`, `"done"`).
///
/// # Examples
///
/// ```
/// use corkboard_core::ColumnId;
///
/// let column = ColumnId::InProgress;
/// assert_eq!(column.title(), "In Progress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ColumnId {
    /// Tasks waiting to be started.
    #[default]
    Todo,
    /// Tasks currently being worked on.
    InProgress,
    /// Completed tasks.
    Done,
}

impl ColumnId {
    /// Returns all columns in board order.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_core::ColumnId;
    ///
    /// let columns = ColumnId::all();
    /// assert_eq!(columns.len(), 3);
    /// assert_eq!(columns[0], ColumnId::Todo);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Todo, Self::InProgress, Self::Done]
    }

    /// Returns the human-readable title of the column.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_core::ColumnId;
    ///
    /// assert_eq!(ColumnId::Todo.title(), "To Do");
    /// assert_eq!(ColumnId::Done.title(), "Done");
    /// ```
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns the index of this column in board order (0-2).
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_core::ColumnId;
    ///
    /// assert_eq!(ColumnId::Todo.index(), 0);
    /// assert_eq!(ColumnId::Done.index(), 2);
    /// ```
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Creates a `ColumnId` from its index.
    ///
    /// Returns `None` if the index is out of range (>= 3).
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_core::ColumnId;
    ///
    /// assert_eq!(ColumnId::from_index(1), Some(ColumnId::InProgress));
    /// assert_eq!(ColumnId::from_index(3), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Todo),
            1 => Some(Self::InProgress),
            2 => Some(Self::Done),
            _ => None,
        }
    }

    /// Returns the next column in board order, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_core::ColumnId;
    ///
    /// assert_eq!(ColumnId::Todo.next(), Some(ColumnId::InProgress));
    /// assert_eq!(ColumnId::Done.next(), None);
    /// ```
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Returns the previous column in board order, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_core::ColumnId;
    ///
    /// assert_eq!(ColumnId::Done.previous(), Some(ColumnId::InProgress));
    /// assert_eq!(ColumnId::Todo.previous(), None);
    /// ```
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self.index().checked_sub(1) {
            Some(idx) => Self::from_index(idx),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_default_is_todo() {
        assert_eq!(ColumnId::default(), ColumnId::Todo);
    }

    #[test]
    fn column_all_returns_board_order() {
        let all = ColumnId::all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0], ColumnId::Todo);
        assert_eq!(all[1], ColumnId::InProgress);
        assert_eq!(all[2], ColumnId::Done);
    }

    #[test]
    fn column_index_roundtrip() {
        for column in ColumnId::all() {
            let idx = column.index();
            assert_eq!(ColumnId::from_index(idx), Some(column));
        }
    }

    #[test]
    fn column_navigation() {
        assert_eq!(ColumnId::Todo.next(), Some(ColumnId::InProgress));
        assert_eq!(ColumnId::InProgress.next(), Some(ColumnId::Done));
        assert_eq!(ColumnId::Done.next(), None);

        assert_eq!(ColumnId::Done.previous(), Some(ColumnId::InProgress));
        assert_eq!(ColumnId::InProgress.previous(), Some(ColumnId::Todo));
        assert_eq!(ColumnId::Todo.previous(), None);
    }

    #[test]
    fn column_serialization_roundtrip() {
        for column in ColumnId::all() {
            let json = serde_json::to_string(&column).expect("serialize");
            let parsed: ColumnId = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(column, parsed);
        }
    }

    #[test]
    fn column_json_format() {
        // camelCase ids match the original board data
        let json = serde_json::to_string(&ColumnId::InProgress).expect("serialize");
        assert_eq!(json, r#""inProgress""#);

        let json = serde_json::to_string(&ColumnId::Todo).expect("serialize");
        assert_eq!(json, r#""todo""#);
    }
}
