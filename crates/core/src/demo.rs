//! Demo data generation.
//!
//! This module provides the seeded board shown on first launch, useful for
//! demonstrating the drag interaction and for tests that want a realistic
//! board.

use crate::column::ColumnId;
use crate::store::TaskStore;
use crate::task::Task;

/// Generates the seeded demo board.
///
/// Creates five tasks spread across the three columns:
///
/// - **To Do**: Design mockups, Set up project
/// - **In Progress**: API integration, Write documentation
/// - **Done**: Research competitors
///
/// # Examples
///
/// ```
/// use corkboard_core::{ColumnId, demo_board};
///
/// let store = demo_board();
/// assert_eq!(store.len(), 5);
/// assert_eq!(store.by_column(ColumnId::Todo).len(), 2);
/// ```
#[must_use]
pub fn demo_board() -> TaskStore {
    let mut store = TaskStore::new();

    store.add(
        Task::new("Design mockups", ColumnId::Todo)
            .with_description("Create wireframes for the new dashboard"),
    );
    store.add(
        Task::new("Set up project", ColumnId::Todo)
            .with_description("Initialize repository and configure CI/CD"),
    );
    store.add(
        Task::new("API integration", ColumnId::InProgress)
            .with_description("Connect to backend services"),
    );
    store.add(Task::new("Write documentation", ColumnId::InProgress));
    store.add(
        Task::new("Research competitors", ColumnId::Done)
            .with_description("Analyze market trends"),
    );

    store
}
