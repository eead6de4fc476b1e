//! New-task dialog state management.
//!
//! This module holds the transient state of the task-creation dialog: the
//! text fields being edited, which field has focus, and the destination
//! column.

use corkboard_core::{ColumnId, NewTask};

/// The dialog field currently receiving text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogField {
    /// The task title (required).
    #[default]
    Title,
    /// The task description (optional).
    Description,
}

/// State of the task-creation dialog.
///
/// # Examples
///
/// ```
/// use corkboard_core::ColumnId;
/// use corkboard_tui::NewTaskDialog;
///
/// let mut dialog = NewTaskDialog::new(ColumnId::Todo);
/// dialog.input('H');
/// dialog.input('i');
/// assert_eq!(dialog.title, "Hi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskDialog {
    /// The title field contents.
    pub title: String,
    /// The description field contents.
    pub description: String,
    /// Which field has input focus.
    pub focus: DialogField,
    /// Destination column for the new task.
    pub column: ColumnId,
}

impl NewTaskDialog {
    /// Creates an empty dialog targeting the given column.
    #[must_use]
    pub fn new(column: ColumnId) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            focus: DialogField::Title,
            column,
        }
    }

    /// Appends a character to the focused field.
    pub fn input(&mut self, ch: char) {
        match self.focus {
            DialogField::Title => self.title.push(ch),
            DialogField::Description => self.description.push(ch),
        }
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) {
        match self.focus {
            DialogField::Title => {
                self.title.pop();
            }
            DialogField::Description => {
                self.description.pop();
            }
        }
    }

    /// Moves focus to the next field, cycling.
    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            DialogField::Title => DialogField::Description,
            DialogField::Description => DialogField::Title,
        };
    }

    /// Cycles the destination column in board order, wrapping.
    pub fn cycle_column(&mut self) {
        self.column = self.column.next().unwrap_or(ColumnId::Todo);
    }

    /// Builds the creation draft from the current field contents.
    ///
    /// An empty description becomes an absent one.
    #[must_use]
    pub fn draft(&self) -> NewTask {
        NewTask::new(self.title.clone(), self.column).with_description(self.description.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_dialog_focuses_title() {
        let dialog = NewTaskDialog::new(ColumnId::Done);
        assert_eq!(dialog.focus, DialogField::Title);
        assert_eq!(dialog.column, ColumnId::Done);
        assert!(dialog.title.is_empty());
    }

    #[test]
    fn input_goes_to_focused_field() {
        let mut dialog = NewTaskDialog::new(ColumnId::Todo);
        dialog.input('a');
        dialog.next_field();
        dialog.input('b');

        assert_eq!(dialog.title, "a");
        assert_eq!(dialog.description, "b");
    }

    #[test]
    fn backspace_edits_focused_field() {
        let mut dialog = NewTaskDialog::new(ColumnId::Todo);
        dialog.input('a');
        dialog.input('b');
        dialog.backspace();
        assert_eq!(dialog.title, "a");

        // Backspace on an empty field is harmless.
        dialog.backspace();
        dialog.backspace();
        assert!(dialog.title.is_empty());
    }

    #[test]
    fn next_field_cycles() {
        let mut dialog = NewTaskDialog::new(ColumnId::Todo);
        dialog.next_field();
        assert_eq!(dialog.focus, DialogField::Description);
        dialog.next_field();
        assert_eq!(dialog.focus, DialogField::Title);
    }

    #[test]
    fn cycle_column_wraps() {
        let mut dialog = NewTaskDialog::new(ColumnId::Todo);
        dialog.cycle_column();
        assert_eq!(dialog.column, ColumnId::InProgress);
        dialog.cycle_column();
        assert_eq!(dialog.column, ColumnId::Done);
        dialog.cycle_column();
        assert_eq!(dialog.column, ColumnId::Todo);
    }

    #[test]
    fn draft_treats_empty_description_as_absent() {
        let mut dialog = NewTaskDialog::new(ColumnId::Todo);
        dialog.input('X');

        let draft = dialog.draft();
        assert_eq!(draft.title, "X");
        assert_eq!(draft.description, None);

        dialog.next_field();
        dialog.input('y');
        assert_eq!(dialog.draft().description.as_deref(), Some("y"));
    }
}
