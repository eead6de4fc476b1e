//! Notification side-channel.
//!
//! Task creation and deletion inform an observer, typically rendered as a
//! toast in the status bar. The channel is purely observational: no board
//! logic depends on whether or how a notice is displayed.

/// A user-facing notification.
///
/// # Examples
///
/// ```
/// use corkboard_core::Notice;
///
/// let notice = Notice::new("Task created", "\"Design mockups\" added to To Do");
/// assert_eq!(notice.title, "Task created");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Short headline, e.g. "Task created".
    pub title: String,
    /// Detail line, e.g. the affected task and column.
    pub body: String,
}

impl Notice {
    /// Creates a notice with the given title and body.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Receives notices emitted by the board controller.
pub trait Notifier {
    /// Delivers a notice to the observer.
    fn notify(&mut self, notice: Notice);
}

/// A notifier that discards every notice.
///
/// The default collaborator when no presentation layer is attached, e.g.
/// in tests that only exercise board logic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _notice: Notice) {}
}

/// A notifier that retains every notice in order of arrival.
///
/// Used by the TUI to queue toasts for the status bar, and by tests to
/// observe what was emitted.
#[derive(Debug, Clone, Default)]
pub struct NoticeLog {
    notices: Vec<Notice>,
}

impl NoticeLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            notices: Vec::new(),
        }
    }

    /// Returns the recorded notices, oldest first.
    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Removes and returns the oldest notice, if any.
    pub fn pop(&mut self) -> Option<Notice> {
        if self.notices.is_empty() {
            None
        } else {
            Some(self.notices.remove(0))
        }
    }
}

impl Notifier for NoticeLog {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
