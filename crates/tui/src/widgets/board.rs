//! Full board widget.

use corkboard_core::{BoardController, ColumnId, TaskId};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::widgets::column::render_column;

/// Renders the three board columns side by side.
///
/// `selected_column` and `selected_task` describe the cursor;
/// `dragging` is the id of the task in flight, if any.
pub fn render_board(
    board: &BoardController,
    selected_column: ColumnId,
    selected_task: Option<usize>,
    dragging: Option<TaskId>,
    area: Rect,
    buf: &mut Buffer,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (column, chunk) in ColumnId::all().iter().zip(chunks.iter()) {
        let tasks = board.view_for_column(*column);
        let focused = *column == selected_column;
        render_column(
            column.title(),
            &tasks,
            if focused { selected_task } else { None },
            dragging,
            focused,
            *chunk,
            buf,
        );
    }
}
