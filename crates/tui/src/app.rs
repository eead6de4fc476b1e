//! Main application struct and run loop.
//!
//! [`App`] routes messages to the state, renders each frame, and drives
//! the poll/update/draw loop until the user quits.

use corkboard_core::{Message, TaskStore};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    event::{key_to_dialog_message, key_to_message, poll_event},
    layout::{HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, STATUS_HEIGHT},
    state::AppState,
    terminal::AppTerminal,
    widgets::{render_board, render_dialog, render_help_overlay, render_status_bar},
};

/// The main application.
///
/// Owns the state and provides the event loop.
pub struct App {
    state: AppState,
    /// Whether the header was drawn in the last frame.
    header_visible: bool,
}

impl App {
    /// Creates the application over an initial task store.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_core::demo_board;
    /// use corkboard_tui::App;
    ///
    /// let app = App::new(demo_board());
    /// ```
    #[must_use]
    pub fn new(store: TaskStore) -> Self {
        Self {
            state: AppState::new(store),
            header_visible: true,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Updates the application state based on a message.
    ///
    /// While the help overlay is visible, most messages dismiss it instead
    /// of performing their normal action; only `Quit` and `ToggleHelp`
    /// keep their meaning. Dialog messages only apply while the dialog is
    /// open.
    pub fn update(&mut self, msg: Message) {
        if self.state.help_visible {
            match msg {
                Message::Quit => self.state.quit(),
                _ => self.state.toggle_help(),
            }
            return;
        }

        match msg {
            Message::Quit => self.state.quit(),
            Message::Escape => self.state.escape(),
            Message::NavigateLeft => self.state.navigate_left(),
            Message::NavigateRight => self.state.navigate_right(),
            Message::NavigateUp => self.state.navigate_up(),
            Message::NavigateDown => self.state.navigate_down(),
            Message::Grab => self.state.grab(),
            Message::OpenNewTask => self.state.open_dialog(),
            Message::DeleteTask => self.state.delete_selected(),
            Message::ToggleHelp => self.state.toggle_help(),
            Message::DialogConfirm => self.state.confirm_dialog(),
            Message::DialogCancel => self.state.cancel_dialog(),
            Message::DialogInput { ch } => {
                if let Some(dialog) = self.state.dialog.as_mut() {
                    dialog.input(ch);
                }
            }
            Message::DialogBackspace => {
                if let Some(dialog) = self.state.dialog.as_mut() {
                    dialog.backspace();
                }
            }
            Message::DialogNextField => {
                if let Some(dialog) = self.state.dialog.as_mut() {
                    dialog.next_field();
                }
            }
            Message::DialogCycleColumn => {
                if let Some(dialog) = self.state.dialog.as_mut() {
                    dialog.cycle_column();
                }
            }
        }
    }

    /// Renders the UI to the given frame.
    ///
    /// Degrades gracefully on small terminals: below the minimum size a
    /// "terminal too small" message replaces the board, and on tight
    /// heights the header is dropped to reclaim rows.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            self.render_terminal_too_small(frame, area);
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;

        let constraints = if show_header {
            vec![
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_HEIGHT),
            ]
        } else {
            vec![Constraint::Min(0), Constraint::Length(STATUS_HEIGHT)]
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let (board_area, status_area) = if show_header {
            self.render_header(frame, chunks[0]);
            (chunks[1], chunks[2])
        } else {
            (chunks[0], chunks[1])
        };

        let dragging = self.state.active_task_id();
        let buf = frame.buffer_mut();
        render_board(
            &self.state.board,
            self.state.selected_column,
            self.state.selected_task,
            dragging,
            board_area,
            buf,
        );
        render_status_bar(
            self.state.toast.as_ref(),
            self.state.board.is_dragging(),
            status_area,
            buf,
        );

        if let Some(dialog) = &self.state.dialog {
            render_dialog(dialog, area, buf);
        }

        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Runs the main application loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use corkboard_core::demo_board;
    /// use corkboard_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(demo_board());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        use crossterm::event::Event;

        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(Event::Key(key)) = poll_event()? {
                let msg = if self.state.dialog.is_some() {
                    key_to_dialog_message(key)
                } else {
                    key_to_message(key)
                };
                if let Some(msg) = msg {
                    self.update(msg);
                }
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Renders the header bar with title and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, help_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(17)]).areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "corkboard",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("Kanban Board", Style::default().fg(Color::White)),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corkboard_core::{ColumnId, Task, demo_board};

    fn buffer_content(terminal: &ratatui::Terminal<ratatui::backend::TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    fn seeded_app() -> App {
        let mut store = TaskStore::new();
        store.add(Task::new("One", ColumnId::Todo));
        store.add(Task::new("Two", ColumnId::Todo));
        App::new(store)
    }

    #[test]
    fn quit_message_flags_exit() {
        let mut app = seeded_app();
        assert!(!app.state.should_quit);
        app.update(Message::Quit);
        assert!(app.state.should_quit);
    }

    #[test]
    fn navigation_updates_state() {
        let mut app = seeded_app();

        app.update(Message::NavigateRight);
        assert_eq!(app.state.selected_column, ColumnId::InProgress);
        app.update(Message::NavigateLeft);
        assert_eq!(app.state.selected_column, ColumnId::Todo);
    }

    #[test]
    fn grab_and_drop_round_trip() {
        let mut app = seeded_app();

        app.update(Message::NavigateDown);
        app.update(Message::Grab);
        assert!(app.state.board.is_dragging());

        app.update(Message::NavigateDown);
        app.update(Message::Grab);
        assert!(!app.state.board.is_dragging());

        let titles: Vec<_> = app
            .state
            .board
            .view_for_column(ColumnId::Todo)
            .iter()
            .map(|t| t.title.clone())
            .collect();
        assert_eq!(titles, ["Two", "One"]);
    }

    #[test]
    fn help_intercepts_navigation() {
        let mut app = seeded_app();

        app.update(Message::ToggleHelp);
        assert!(app.state.help_visible);

        app.update(Message::NavigateRight);
        assert!(!app.state.help_visible);
        assert_eq!(app.state.selected_column, ColumnId::Todo);
    }

    #[test]
    fn quit_works_with_help_visible() {
        let mut app = seeded_app();

        app.update(Message::ToggleHelp);
        app.update(Message::Quit);
        assert!(app.state.should_quit);
    }

    #[test]
    fn dialog_messages_are_ignored_without_dialog() {
        let mut app = seeded_app();

        app.update(Message::DialogInput { ch: 'x' });
        app.update(Message::DialogConfirm);

        assert!(app.state.dialog.is_none());
        assert_eq!(app.state.board.store().len(), 2);
    }

    #[test]
    fn new_task_flow_creates_task() {
        let mut app = seeded_app();

        app.update(Message::OpenNewTask);
        assert!(app.state.dialog.is_some());

        for ch in "Three".chars() {
            app.update(Message::DialogInput { ch });
        }
        app.update(Message::DialogConfirm);

        assert!(app.state.dialog.is_none());
        assert_eq!(app.state.board.store().len(), 3);
    }

    #[test]
    fn view_renders_board_and_header() {
        use ratatui::{Terminal, backend::TestBackend};

        let mut app = App::new(demo_board());
        let backend = TestBackend::new(90, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|frame| app.view(frame)).unwrap();
        assert!(app.header_visible);

        let content = buffer_content(&terminal);
        assert!(content.contains("corkboard"));
        assert!(content.contains("To Do"));
        assert!(content.contains("Design mockups"));
    }

    #[test]
    fn view_hides_header_on_tight_height() {
        use ratatui::{Terminal, backend::TestBackend};

        let mut app = App::new(demo_board());
        let backend = TestBackend::new(90, 11);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|frame| app.view(frame)).unwrap();
        assert!(!app.header_visible);

        let content = buffer_content(&terminal);
        assert!(content.contains("To Do"));
    }

    #[test]
    fn view_shows_too_small_message() {
        use ratatui::{Terminal, backend::TestBackend};

        let mut app = App::new(demo_board());
        let backend = TestBackend::new(30, 8);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|frame| app.view(frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("Terminal too small"));
    }

    #[test]
    fn view_renders_dialog_overlay() {
        use ratatui::{Terminal, backend::TestBackend};

        let mut app = App::new(demo_board());
        app.update(Message::OpenNewTask);

        let backend = TestBackend::new(90, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("New Task"));
    }
}
