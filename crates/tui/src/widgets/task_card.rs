//! Task card widget.

use corkboard_core::Task;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Visual emphasis applied to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardEmphasis {
    /// A card the cursor is not on.
    #[default]
    Normal,
    /// The card under the cursor.
    Selected,
    /// The card currently being dragged.
    Dragging,
}

/// Renders a single task card into the buffer.
///
/// The card shows the title on the first content row and the description,
/// if any, dimmed on the second. Long text is truncated by the card
/// border, not wrapped.
pub fn render_task_card(task: &Task, emphasis: CardEmphasis, area: Rect, buf: &mut Buffer) {
    let border_style = match emphasis {
        CardEmphasis::Normal => Style::default().fg(Color::DarkGray),
        CardEmphasis::Selected => Style::default().fg(Color::Cyan),
        CardEmphasis::Dragging => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let title_style = match emphasis {
        CardEmphasis::Dragging => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::White),
    };

    let mut lines = vec![Line::from(Span::styled(task.title.clone(), title_style))];
    if let Some(description) = &task.description {
        lines.push(Line::from(Span::styled(
            description.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    Paragraph::new(lines).block(block).render(area, buf);
}
