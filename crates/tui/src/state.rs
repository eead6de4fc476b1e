//! Application state management.
//!
//! [`AppState`] wraps the board controller with everything the terminal
//! front-end adds on top: a cursor over columns and tasks, the keyboard
//! drag interaction (grab, hover, drop), the new-task dialog, help
//! visibility, and the toast surfaced in the status bar.
//!
//! The keyboard drag maps onto the pointer lifecycle: grabbing a task
//! starts a drag, every cursor move while dragging is a hover over the
//! cursor's target, and grabbing again (or pressing escape) ends it.

use std::cell::RefCell;
use std::rc::Rc;

use corkboard_core::{
    BoardController, ColumnId, DropTarget, Notice, NoticeLog, Notifier, TaskId, TaskStore,
};

use crate::dialog_state::NewTaskDialog;

/// Forwards controller notices into a log shared with the state.
///
/// The controller owns its notifier, but the state needs to read what was
/// emitted after the fact, hence the shared interior.
#[derive(Clone, Default)]
struct SharedNotices(Rc<RefCell<NoticeLog>>);

impl Notifier for SharedNotices {
    fn notify(&mut self, notice: Notice) {
        self.0.borrow_mut().notify(notice);
    }
}

/// The complete state of the application.
pub struct AppState {
    /// The board controller owning tasks and the drag session.
    pub board: BoardController,
    /// Notices emitted by the controller, drained into [`Self::toast`].
    notices: Rc<RefCell<NoticeLog>>,
    /// The column the cursor is in.
    pub selected_column: ColumnId,
    /// Cursor position within the selected column, if any task is selected.
    pub selected_task: Option<usize>,
    /// The new-task dialog, when open.
    pub dialog: Option<NewTaskDialog>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// The most recent notice, shown in the status bar.
    pub toast: Option<Notice>,
    /// Whether the application should exit.
    pub should_quit: bool,
}

impl AppState {
    /// Creates the application state over an existing task store.
    #[must_use]
    pub fn new(store: TaskStore) -> Self {
        let notices = Rc::new(RefCell::new(NoticeLog::new()));
        let board = BoardController::with_store(store)
            .with_notifier(Box::new(SharedNotices(notices.clone())));

        Self {
            board,
            notices,
            selected_column: ColumnId::Todo,
            selected_task: None,
            dialog: None,
            help_visible: false,
            toast: None,
            should_quit: false,
        }
    }

    /// Returns the id of the task under the cursor, if any.
    #[must_use]
    pub fn selected_task_id(&self) -> Option<TaskId> {
        let view = self.board.view_for_column(self.selected_column);
        self.selected_task.and_then(|i| view.get(i)).map(|t| t.id)
    }

    /// Returns the id of the task being dragged, if any.
    #[must_use]
    pub fn active_task_id(&self) -> Option<TaskId> {
        self.board.active_task().map(|t| t.id)
    }

    /// Moves the cursor one column to the left, wrapping.
    pub fn navigate_left(&mut self) {
        self.selected_column = self.selected_column.previous().unwrap_or(ColumnId::Done);
        self.after_column_change();
    }

    /// Moves the cursor one column to the right, wrapping.
    pub fn navigate_right(&mut self) {
        self.selected_column = self.selected_column.next().unwrap_or(ColumnId::Todo);
        self.after_column_change();
    }

    /// Moves the cursor up within the column, wrapping to the bottom.
    pub fn navigate_up(&mut self) {
        let len = self.column_len(self.selected_column);
        if len == 0 {
            self.selected_task = None;
            return;
        }

        self.selected_task = Some(match self.selected_task {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        });
        self.hover_at_cursor();
    }

    /// Moves the cursor down within the column, wrapping to the top.
    pub fn navigate_down(&mut self) {
        let len = self.column_len(self.selected_column);
        if len == 0 {
            self.selected_task = None;
            return;
        }

        self.selected_task = Some(match self.selected_task {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        });
        self.hover_at_cursor();
    }

    /// Picks up the task under the cursor, or drops the one in flight.
    ///
    /// While idle, starts a drag on the selected task. While dragging,
    /// ends the drag with the cursor's target: a task position to reorder
    /// onto, or the bare column.
    pub fn grab(&mut self) {
        if let Some(active) = self.active_task_id() {
            let target = self.drop_target();
            self.board.on_drag_end(active, target);
            self.follow_card(active);
        } else if let Some(id) = self.selected_task_id() {
            self.board.on_drag_start(id);
        }
    }

    /// Handles escape: abandons the drag in flight, else clears selection.
    ///
    /// Abandoning a drag releases the task with no target. Column
    /// reassignments already applied while hovering are kept.
    pub fn escape(&mut self) {
        if let Some(active) = self.active_task_id() {
            self.board.on_drag_end(active, None);
            self.follow_card(active);
        } else {
            self.selected_task = None;
        }
    }

    /// Deletes the task under the cursor.
    ///
    /// Ignored while a drag is in progress.
    pub fn delete_selected(&mut self) {
        if self.board.is_dragging() {
            return;
        }
        if let Some(id) = self.selected_task_id() {
            self.board.delete_task(id);
            self.clamp_task_selection();
            self.refresh_toast();
        }
    }

    /// Opens the new-task dialog targeting the selected column.
    ///
    /// Ignored while a drag is in progress.
    pub fn open_dialog(&mut self) {
        if !self.board.is_dragging() {
            self.dialog = Some(NewTaskDialog::new(self.selected_column));
        }
    }

    /// Closes the new-task dialog without creating anything.
    pub fn cancel_dialog(&mut self) {
        self.dialog = None;
    }

    /// Confirms the dialog, creating the task.
    ///
    /// On success the dialog closes and the cursor moves to the new task.
    /// A blank title keeps the dialog open and reports the problem as a
    /// toast instead.
    pub fn confirm_dialog(&mut self) {
        let Some(dialog) = self.dialog.as_ref() else {
            return;
        };
        let draft = dialog.draft();
        let column = draft.column;

        match self.board.create_task(draft) {
            Ok(id) => {
                self.dialog = None;
                self.selected_column = column;
                self.follow_card(id);
                self.refresh_toast();
            }
            Err(err) => {
                self.toast = Some(Notice::new("Task not created", err.to_string()));
            }
        }
    }

    /// Toggles the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Flags the application for exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Number of tasks visible in the given column.
    #[must_use]
    pub fn column_len(&self, column: ColumnId) -> usize {
        self.board.view_for_column(column).len()
    }

    /// The drop target under the cursor: a task position, or the column.
    fn drop_target(&self) -> Option<DropTarget> {
        match self.selected_task_id() {
            Some(id) => Some(DropTarget::Task(id)),
            None => Some(DropTarget::Column(self.selected_column)),
        }
    }

    /// Applies the side effects of a horizontal cursor move.
    fn after_column_change(&mut self) {
        if let Some(active) = self.active_task_id() {
            // Hovering the dragged task over the new column reassigns it.
            self.board
                .on_drag_over(active, Some(DropTarget::Column(self.selected_column)));
            self.follow_card(active);
        } else {
            self.clamp_task_selection();
        }
    }

    /// Emits a hover over the task now under the cursor while dragging.
    fn hover_at_cursor(&mut self) {
        if let Some(active) = self.active_task_id() {
            let target = self.drop_target();
            self.board.on_drag_over(active, target);
        }
    }

    /// Points the cursor at the given task in the selected column.
    fn follow_card(&mut self, id: TaskId) {
        self.selected_task = self
            .board
            .view_for_column(self.selected_column)
            .iter()
            .position(|t| t.id == id);
    }

    /// Keeps the cursor inside the selected column's bounds.
    fn clamp_task_selection(&mut self) {
        let len = self.column_len(self.selected_column);
        self.selected_task = match self.selected_task {
            Some(i) if len > 0 => Some(i.min(len - 1)),
            _ => None,
        };
    }

    /// Drains queued notices into the status-bar toast, newest wins.
    fn refresh_toast(&mut self) {
        let mut log = self.notices.borrow_mut();
        while let Some(notice) = log.pop() {
            self.toast = Some(notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corkboard_core::Task;

    fn seeded_state() -> AppState {
        let mut store = TaskStore::new();
        store.add(Task::new("One", ColumnId::Todo));
        store.add(Task::new("Two", ColumnId::Todo));
        store.add(Task::new("Three", ColumnId::InProgress));
        AppState::new(store)
    }

    fn titles(state: &AppState, column: ColumnId) -> Vec<String> {
        state
            .board
            .view_for_column(column)
            .iter()
            .map(|t| t.title.clone())
            .collect()
    }

    #[test]
    fn starts_on_todo_with_no_selection() {
        let state = seeded_state();
        assert_eq!(state.selected_column, ColumnId::Todo);
        assert_eq!(state.selected_task, None);
        assert!(!state.should_quit);
    }

    #[test]
    fn column_navigation_wraps() {
        let mut state = seeded_state();

        state.navigate_left();
        assert_eq!(state.selected_column, ColumnId::Done);
        state.navigate_right();
        assert_eq!(state.selected_column, ColumnId::Todo);
        state.navigate_right();
        assert_eq!(state.selected_column, ColumnId::InProgress);
    }

    #[test]
    fn task_navigation_wraps_within_column() {
        let mut state = seeded_state();

        state.navigate_down();
        assert_eq!(state.selected_task, Some(0));
        state.navigate_down();
        assert_eq!(state.selected_task, Some(1));
        state.navigate_down();
        assert_eq!(state.selected_task, Some(0));
        state.navigate_up();
        assert_eq!(state.selected_task, Some(1));
    }

    #[test]
    fn navigation_in_empty_column_clears_selection() {
        let mut state = AppState::new(TaskStore::new());

        state.navigate_down();
        assert_eq!(state.selected_task, None);
        state.navigate_up();
        assert_eq!(state.selected_task, None);
    }

    #[test]
    fn selection_clamps_when_switching_to_shorter_column() {
        let mut state = seeded_state();

        state.navigate_down();
        state.navigate_down();
        assert_eq!(state.selected_task, Some(1));

        // In Progress holds one task, the cursor clamps to it.
        state.navigate_right();
        assert_eq!(state.selected_task, Some(0));

        // Done is empty, the cursor clears.
        state.navigate_right();
        assert_eq!(state.selected_task, None);
    }

    #[test]
    fn grab_starts_and_drop_ends_a_drag() {
        let mut state = seeded_state();

        state.navigate_down();
        state.grab();
        assert!(state.board.is_dragging());

        state.grab();
        assert!(!state.board.is_dragging());
        assert_eq!(titles(&state, ColumnId::Todo), ["One", "Two"]);
    }

    #[test]
    fn grab_without_selection_does_nothing() {
        let mut state = seeded_state();
        state.grab();
        assert!(!state.board.is_dragging());
    }

    #[test]
    fn dragging_across_columns_moves_the_card() {
        let mut state = seeded_state();

        state.navigate_down();
        state.grab();
        state.navigate_right();

        // The card crossed during hover and the cursor follows it.
        assert_eq!(titles(&state, ColumnId::InProgress), ["One", "Three"]);
        assert!(state.board.is_dragging());
        assert_eq!(
            state.selected_task_id(),
            state.active_task_id(),
            "cursor follows the dragged card",
        );

        state.grab();
        assert!(!state.board.is_dragging());
        assert_eq!(titles(&state, ColumnId::Todo), ["Two"]);
    }

    #[test]
    fn dragging_within_column_reorders_on_drop() {
        let mut state = seeded_state();

        state.navigate_down();
        state.grab();
        state.navigate_down();
        state.grab();

        assert_eq!(titles(&state, ColumnId::Todo), ["Two", "One"]);
    }

    #[test]
    fn escape_abandons_drag_but_keeps_column_move() {
        let mut state = seeded_state();

        state.navigate_down();
        state.grab();
        state.navigate_right();
        state.escape();

        assert!(!state.board.is_dragging());
        // The reassignment happened during hover and stands.
        assert_eq!(titles(&state, ColumnId::InProgress), ["One", "Three"]);
    }

    #[test]
    fn escape_without_drag_clears_selection() {
        let mut state = seeded_state();

        state.navigate_down();
        assert!(state.selected_task.is_some());
        state.escape();
        assert_eq!(state.selected_task, None);
    }

    #[test]
    fn dropping_into_empty_column_targets_the_column() {
        let mut state = seeded_state();

        state.navigate_down();
        state.grab();
        state.navigate_left();

        assert_eq!(state.selected_column, ColumnId::Done);
        assert_eq!(titles(&state, ColumnId::Done), ["One"]);

        state.grab();
        assert!(!state.board.is_dragging());
        assert_eq!(titles(&state, ColumnId::Done), ["One"]);
    }

    #[test]
    fn delete_removes_selected_and_sets_toast() {
        let mut state = seeded_state();

        state.navigate_down();
        state.delete_selected();

        assert_eq!(titles(&state, ColumnId::Todo), ["Two"]);
        let toast = state.toast.as_ref().expect("toast set");
        assert_eq!(toast.title, "Task deleted");
        assert_eq!(toast.body, "\"One\" has been removed");
    }

    #[test]
    fn delete_is_ignored_while_dragging() {
        let mut state = seeded_state();

        state.navigate_down();
        state.grab();
        state.delete_selected();

        assert_eq!(titles(&state, ColumnId::Todo), ["One", "Two"]);
        assert!(state.board.is_dragging());
    }

    #[test]
    fn delete_without_selection_is_a_noop() {
        let mut state = seeded_state();
        state.delete_selected();
        assert_eq!(state.board.store().len(), 3);
        assert!(state.toast.is_none());
    }

    #[test]
    fn dialog_opens_on_selected_column() {
        let mut state = seeded_state();

        state.navigate_right();
        state.open_dialog();

        let dialog = state.dialog.as_ref().expect("dialog open");
        assert_eq!(dialog.column, ColumnId::InProgress);
    }

    #[test]
    fn dialog_does_not_open_while_dragging() {
        let mut state = seeded_state();

        state.navigate_down();
        state.grab();
        state.open_dialog();

        assert!(state.dialog.is_none());
    }

    #[test]
    fn confirm_creates_task_and_selects_it() {
        let mut state = seeded_state();

        state.open_dialog();
        let dialog = state.dialog.as_mut().expect("dialog open");
        for ch in "New".chars() {
            dialog.input(ch);
        }
        state.confirm_dialog();

        assert!(state.dialog.is_none());
        assert_eq!(titles(&state, ColumnId::Todo), ["One", "Two", "New"]);
        assert_eq!(state.selected_task, Some(2));

        let toast = state.toast.as_ref().expect("toast set");
        assert_eq!(toast.title, "Task created");
        assert_eq!(toast.body, "\"New\" added to To Do");
    }

    #[test]
    fn confirm_with_blank_title_keeps_dialog_open() {
        let mut state = seeded_state();

        state.open_dialog();
        state.confirm_dialog();

        assert!(state.dialog.is_some());
        assert_eq!(state.board.store().len(), 3);
        let toast = state.toast.as_ref().expect("toast set");
        assert_eq!(toast.title, "Task not created");
    }

    #[test]
    fn cancel_discards_the_dialog() {
        let mut state = seeded_state();

        state.open_dialog();
        state.dialog.as_mut().expect("dialog open").input('x');
        state.cancel_dialog();

        assert!(state.dialog.is_none());
        assert_eq!(state.board.store().len(), 3);
    }

    #[test]
    fn toggle_help_flips_visibility() {
        let mut state = seeded_state();
        state.toggle_help();
        assert!(state.help_visible);
        state.toggle_help();
        assert!(!state.help_visible);
    }
}
