//! Terminal UI for the corkboard application.
//!
//! This crate provides a Ratatui-based terminal interface for the task
//! board, including keyboard-driven drag and drop.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Application state management
//! - [`dialog_state`]: New-task dialog state management
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Rendering functions for the board, overlays, and footer
//!
//! # Example
//!
//! ```no_run
//! use corkboard_core::demo_board;
//! use corkboard_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(demo_board());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod dialog_state;
pub mod event;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use dialog_state::{DialogField, NewTaskDialog};
pub use state::AppState;
