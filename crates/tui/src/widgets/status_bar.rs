//! Status bar widget.
//!
//! The footer line shows keybinding hints for the current mode, or the
//! most recent toast when one is pending.

use corkboard_core::Notice;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Renders the footer line.
///
/// A pending toast takes precedence over the hints. The hints change
/// while a drag is in flight, since the same keys mean different things.
pub fn render_status_bar(toast: Option<&Notice>, dragging: bool, area: Rect, buf: &mut Buffer) {
    let line = match toast {
        Some(notice) => Line::from(vec![
            Span::styled(
                format!(" {} ", notice.title),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(notice.body.clone(), Style::default().fg(Color::White)),
        ]),
        None if dragging => hints(&[
            ("↑↓←→", "move card"),
            ("Enter", "drop"),
            ("Esc", "release"),
        ]),
        None => hints(&[
            ("↑↓←→", "navigate"),
            ("Enter", "grab"),
            ("n", "new"),
            ("d", "delete"),
            ("?", "help"),
            ("Ctrl+C", "quit"),
        ]),
    };

    Paragraph::new(line).render(area, buf);
}

fn hints(pairs: &[(&str, &str)]) -> Line<'static> {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, action) in pairs {
        spans.push(Span::styled(format!(" {key} "), key_style));
        spans.push(Span::styled(format!("{action} "), text_style));
    }
    Line::from(spans)
}
