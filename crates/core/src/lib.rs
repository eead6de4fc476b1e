//! Core types and drag-reorder logic for the corkboard application.
//!
//! This crate defines the task board's data model and the state machine
//! that turns drag lifecycle events into deterministic list mutations.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`column`]: The fixed, ordered set of board columns
//! - [`task`]: Task identifiers, the `Task` struct, and creation drafts
//! - [`store`]: The authoritative ordered task list
//! - [`session`]: The transient drag-session state machine
//! - [`reorder`]: Pure functions computing new task lists from drag events
//! - [`controller`]: Wiring between events, engine, and store
//! - [`message`]: TUI event messages
//! - [`notify`]: The toast/notification side-channel
//! - [`demo`]: Seeded demo board
//! - [`error`]: Error types for board operations
//!
//! # Examples
//!
//! Driving a drag interaction end to end:
//!
//! ```
//! use corkboard_core::{BoardController, ColumnId, DropTarget, NewTask};
//!
//! let mut board = BoardController::new();
//! let todo = board.create_task(NewTask::new("Design mockups", ColumnId::Todo))?;
//! board.create_task(NewTask::new("API integration", ColumnId::InProgress))?;
//!
//! // Pick the task up, hover it over another column, and release.
//! board.on_drag_start(todo);
//! board.on_drag_over(todo, Some(DropTarget::Column(ColumnId::InProgress)));
//! board.on_drag_end(todo, None);
//!
//! assert_eq!(board.view_for_column(ColumnId::InProgress).len(), 2);
//! # Ok::<(), corkboard_core::BoardError>(())
//! ```

pub mod column;
pub mod controller;
pub mod demo;
pub mod error;
pub mod message;
pub mod notify;
pub mod reorder;
pub mod session;
pub mod store;
pub mod task;

// Re-export primary types at crate root for convenience
pub use column::ColumnId;
pub use controller::BoardController;
pub use demo::demo_board;
pub use error::{BoardError, Result};
pub use message::Message;
pub use notify::{Notice, NoticeLog, Notifier, NullNotifier};
pub use reorder::{DropTarget, move_across_columns, reorder_within_column};
pub use session::DragSession;
pub use store::TaskStore;
pub use task::{NewTask, Task, TaskId};
