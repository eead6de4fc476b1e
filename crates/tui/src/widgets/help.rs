//! Help overlay widget.
//!
//! Centered panel listing all keybindings, shown when the user presses
//! `?` and dismissed by almost any key.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::widgets::centered_rect;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 38;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 18;

/// Renders a centered help overlay displaying all keybindings.
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(help_lines())
        .block(block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

fn help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let entry = move |key: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<11}"), key_style),
            Span::styled(action, text_style),
        ])
    };

    vec![
        Line::from(""),
        Line::from(Span::styled("  Navigation", header_style)),
        entry("← →", "Move between columns"),
        entry("↑ ↓", "Move within a column"),
        Line::from(""),
        Line::from(Span::styled("  Dragging", header_style)),
        entry("Enter/Space", "Grab or drop a task"),
        entry("Esc", "Release without dropping"),
        Line::from(""),
        Line::from(Span::styled("  Tasks", header_style)),
        entry("n", "New task"),
        entry("d", "Delete selected task"),
        Line::from(""),
        entry("?", "Toggle help"),
        entry("Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", hint_style)),
    ]
}
