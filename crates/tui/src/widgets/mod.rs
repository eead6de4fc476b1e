//! Widget components for the board UI.
//!
//! Each widget is a pure function rendering state into a buffer, which
//! keeps the visual layer testable without a real terminal.
//!
//! # Modules
//!
//! - [`board`]: The full three-column board
//! - [`column`]: A single column with its task cards
//! - [`task_card`]: One task card
//! - [`dialog`]: The new-task dialog overlay
//! - [`status_bar`]: Footer with keybinding hints and toasts
//! - [`help`]: The help overlay

pub mod board;
pub mod column;
pub mod dialog;
pub mod help;
pub mod status_bar;
pub mod task_card;

pub use board::render_board;
pub use column::render_column;
pub use dialog::render_dialog;
pub use help::render_help_overlay;
pub use status_bar::render_status_bar;
pub use task_card::render_task_card;

use ratatui::layout::Rect;

/// Returns a `width`×`height` rect centered within `area`, clamped to it.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
