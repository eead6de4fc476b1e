//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Key mapping is context-sensitive: the new-task
//! dialog captures text input, everything else is board navigation.

use std::time::Duration;

use corkboard_core::Message;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal key event to a board-mode message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (cancel drag or clear selection) |
/// | `←` `→` `↑` `↓` | Move the cursor |
/// | `Enter` or `Space` | Pick up / drop the selected task |
/// | `n` | New task in the current column |
/// | `d` | Delete the selected task |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    // Check for Ctrl+C first
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        // Escape (contextual: cancel drag or clear selection)
        KeyCode::Esc => Some(Message::Escape),

        // Navigation (arrow keys only)
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        // Drag interaction
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Grab),

        // Task management
        KeyCode::Char('n') => Some(Message::OpenNewTask),
        KeyCode::Char('d') => Some(Message::DeleteTask),

        // Other actions
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event to a dialog message while the new-task dialog is
/// open.
///
/// # Key Bindings (Dialog Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Enter` | Confirm and create the task |
/// | `Esc` | Cancel and close |
/// | `Tab` | Next field |
/// | `↑` / `↓` | Cycle the destination column |
/// | `Backspace` | Delete the last character |
/// | Any char | Input into the focused field |
#[must_use]
pub fn key_to_dialog_message(key: KeyEvent) -> Option<Message> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Message::DialogConfirm),
        KeyCode::Esc => Some(Message::DialogCancel),
        KeyCode::Tab => Some(Message::DialogNextField),
        KeyCode::Up | KeyCode::Down => Some(Message::DialogCycleColumn),
        KeyCode::Backspace => Some(Message::DialogBackspace),
        KeyCode::Char(ch) => Some(Message::DialogInput { ch }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: event::KeyEventState::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        // Only Ctrl+C quits
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn escape_key() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Esc)),
            Some(Message::Escape)
        );
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Left)),
            Some(Message::NavigateLeft)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Right)),
            Some(Message::NavigateRight)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Up)),
            Some(Message::NavigateUp)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Down)),
            Some(Message::NavigateDown)
        );
    }

    #[test]
    fn grab_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Enter)), Some(Message::Grab));
        assert_eq!(
            key_to_message(make_key(KeyCode::Char(' '))),
            Some(Message::Grab)
        );
    }

    #[test]
    fn task_management_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('n'))),
            Some(Message::OpenNewTask)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('d'))),
            Some(Message::DeleteTask)
        );
    }

    #[test]
    fn unmapped_keys_return_none() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('x'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::F(1))), None);
        assert_eq!(key_to_message(make_key(KeyCode::Tab)), None);
    }

    #[test]
    fn dialog_text_input() {
        assert_eq!(
            key_to_dialog_message(make_key(KeyCode::Char('a'))),
            Some(Message::DialogInput { ch: 'a' })
        );
        assert_eq!(
            key_to_dialog_message(make_key(KeyCode::Backspace)),
            Some(Message::DialogBackspace)
        );
    }

    #[test]
    fn dialog_structure_keys() {
        assert_eq!(
            key_to_dialog_message(make_key(KeyCode::Enter)),
            Some(Message::DialogConfirm)
        );
        assert_eq!(
            key_to_dialog_message(make_key(KeyCode::Esc)),
            Some(Message::DialogCancel)
        );
        assert_eq!(
            key_to_dialog_message(make_key(KeyCode::Tab)),
            Some(Message::DialogNextField)
        );
        assert_eq!(
            key_to_dialog_message(make_key(KeyCode::Up)),
            Some(Message::DialogCycleColumn)
        );
        assert_eq!(
            key_to_dialog_message(make_key(KeyCode::Down)),
            Some(Message::DialogCycleColumn)
        );
    }

    #[test]
    fn dialog_ctrl_c_still_quits() {
        assert_eq!(
            key_to_dialog_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
    }

    #[test]
    fn board_keys_become_input_in_dialog() {
        // 'n' and 'd' must type into the dialog, not trigger board actions.
        assert_eq!(
            key_to_dialog_message(make_key(KeyCode::Char('n'))),
            Some(Message::DialogInput { ch: 'n' })
        );
        assert_eq!(
            key_to_dialog_message(make_key(KeyCode::Char('d'))),
            Some(Message::DialogInput { ch: 'd' })
        );
    }
}
