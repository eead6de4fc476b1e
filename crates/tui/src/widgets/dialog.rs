//! New-task dialog widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::dialog_state::{DialogField, NewTaskDialog};
use crate::widgets::centered_rect;

/// Width of the dialog panel.
const DIALOG_WIDTH: u16 = 44;

/// Height of the dialog panel.
const DIALOG_HEIGHT: u16 = 10;

/// Renders the new-task dialog as a centered overlay.
///
/// The focused field gets a cursor marker; the destination column is
/// shown with cycle arrows.
pub fn render_dialog(dialog: &NewTaskDialog, area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);

    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(Span::styled(
            " New Task ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(""),
        field_line("Title", &dialog.title, dialog.focus == DialogField::Title),
        Line::from(""),
        field_line(
            "Description",
            &dialog.description,
            dialog.focus == DialogField::Description,
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Column       ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("◂ {} ▸", dialog.column.title()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Enter create · Tab field · ↑↓ column · Esc cancel",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    Paragraph::new(lines).block(block).render(popup_area, buf);
}

fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![
        Span::styled(format!("  {label:<12} "), label_style),
        Span::styled(value, Style::default().fg(Color::White)),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}
