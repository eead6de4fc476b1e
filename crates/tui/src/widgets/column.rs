//! Column widget.
//!
//! Renders one board column: a bordered frame titled with the column name
//! and task count, containing the column's task cards in order.

use corkboard_core::{Task, TaskId};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::layout::TASK_CARD_HEIGHT;
use crate::widgets::task_card::{CardEmphasis, render_task_card};

/// Renders a single column and its visible task cards.
///
/// `selected` is the cursor position within the column, used only when
/// the cursor is in this column. `dragging` is the id of the task in
/// flight, highlighted wherever it currently lives. Cards that do not
/// fit the height are clipped; the count in the title still reflects
/// them all.
pub fn render_column(
    title: &str,
    tasks: &[&Task],
    selected: Option<usize>,
    dragging: Option<TaskId>,
    focused: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ({}) ", title, tasks.len()),
            Style::default()
                .fg(if focused { Color::Cyan } else { Color::White })
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let inner = block.inner(area);
    block.render(area, buf);

    for (index, task) in tasks.iter().enumerate() {
        let y = inner.y + (index as u16) * TASK_CARD_HEIGHT;
        if y + TASK_CARD_HEIGHT > inner.y + inner.height {
            break;
        }

        let card_area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: TASK_CARD_HEIGHT,
        };

        let emphasis = if dragging == Some(task.id) {
            CardEmphasis::Dragging
        } else if focused && selected == Some(index) {
            CardEmphasis::Selected
        } else {
            CardEmphasis::Normal
        };
        render_task_card(task, emphasis, card_area, buf);
    }
}
