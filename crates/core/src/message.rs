//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use corkboard_core::Message;
///
/// let msg = Message::Grab;
/// assert!(matches!(msg, Message::Grab));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move the cursor to the column on the left.
    NavigateLeft,
    /// Move the cursor to the column on the right.
    NavigateRight,
    /// Move the cursor up within the current column.
    NavigateUp,
    /// Move the cursor down within the current column.
    NavigateDown,
    /// Pick up the selected task, or drop the one being dragged.
    Grab,
    /// Escape: cancel the drag, close the dialog, or clear the selection
    /// (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Open the new-task dialog targeting the current column.
    OpenNewTask,
    /// Delete the selected task.
    DeleteTask,

    // --- New-task dialog messages ---
    /// Input a character into the focused dialog field.
    DialogInput {
        /// The character that was input.
        ch: char,
    },
    /// Delete the last character of the focused dialog field.
    DialogBackspace,
    /// Move focus to the next dialog field.
    DialogNextField,
    /// Cycle the dialog's destination column.
    DialogCycleColumn,
    /// Confirm the dialog and create the task.
    DialogConfirm,
    /// Cancel and close the dialog.
    DialogCancel,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_core::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(!Message::Grab.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_core::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message is a dialog-editing action.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_core::Message;
    ///
    /// assert!(Message::DialogConfirm.is_dialog());
    /// assert!(!Message::Grab.is_dialog());
    /// ```
    #[must_use]
    pub fn is_dialog(&self) -> bool {
        matches!(
            self,
            Self::DialogInput { .. }
                | Self::DialogBackspace
                | Self::DialogNextField
                | Self::DialogCycleColumn
                | Self::DialogConfirm
                | Self::DialogCancel
        )
    }
}
