use crate::clock::Now;
use crate::domain::{History, Severity, StorageLocation, Task, TaskId, UiMode};
use crate::input::LineEditor;
use std::time::{Duration, Instant};

/// How long a transient notice stays on screen
pub const NOTICE_TTL: Duration = Duration::from_millis(1200);

/// Window in which a second Ctrl+C exits
pub const EXIT_CONFIRM_WINDOW: Duration = Duration::from_millis(1500);

/// Side effects requested by a state transition, run by the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Write the current tasks to the active location (autosave)
    Persist,
    /// Explicit save; the result is reported as a notice
    Save,
    /// Replace the tasks with the contents of a location
    Reload(StorageLocation),
    /// Save, then leave the app
    Exit,
}

/// Short-lived status line message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub severity: Severity,
    pub expires_at: Instant,
}

/// Main application state
pub struct AppState {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    /// Index of the task being edited in `UiMode::Editing`
    pub editing_index: Option<usize>,
    pub editor: Option<LineEditor>,
    pub history: History,
    pub storage: StorageLocation,
    /// Highlighted option in the settings chooser
    pub settings_choice: StorageLocation,
    pub notice: Option<Notice>,
    pub exit_armed_until: Option<Instant>,
    /// First visible list row, maintained by the renderer
    pub list_offset: usize,
}

impl AppState {
    pub fn new(tasks: Vec<Task>, storage: StorageLocation) -> Self {
        Self {
            tasks,
            selected_index: 0,
            ui_mode: UiMode::List,
            editing_index: None,
            editor: None,
            history: History::new(),
            storage,
            settings_choice: storage,
            notice: None,
            exit_armed_until: None,
            list_offset: 0,
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self.selected_index.min(self.tasks.len().saturating_sub(1));
    }

    /// Apply an edit to the task list, recording the previous list for undo
    fn mutate<F: FnOnce(&mut Vec<Task>)>(&mut self, edit: F) -> Vec<Command> {
        let before = self.tasks.clone();
        edit(&mut self.tasks);
        self.history.record(before);
        self.clamp_selection();
        vec![Command::Persist]
    }

    /// Flip done on the selected task
    pub fn toggle_selected(&mut self, now: Now) -> Vec<Command> {
        if self.tasks.is_empty() {
            return Vec::new();
        }
        let index = self.selected_index;
        self.mutate(|tasks| tasks[index].toggle(now.millis))
    }

    /// Remove the selected task
    pub fn delete_selected(&mut self) -> Vec<Command> {
        if self.tasks.is_empty() {
            return Vec::new();
        }
        let index = self.selected_index;
        self.mutate(|tasks| {
            tasks.remove(index);
        })
    }

    /// Start adding a new task (opens the line editor)
    pub fn start_add_task(&mut self) {
        self.editor = Some(LineEditor::new());
        self.editing_index = None;
        self.ui_mode = UiMode::Adding;
    }

    /// Start editing the selected task's text
    pub fn start_edit_task(&mut self) {
        if let Some(task) = self.selected_task() {
            self.editor = Some(LineEditor::from_text(&task.text));
            self.editing_index = Some(self.selected_index);
            self.ui_mode = UiMode::Editing;
        }
    }

    /// Leave add/edit without changing anything
    pub fn close_editor(&mut self) {
        self.editor = None;
        self.editing_index = None;
        self.ui_mode = UiMode::List;
    }

    /// Finish add/edit with the submitted (already trimmed) text
    pub fn submit_editor(&mut self, text: String, now: Now) -> Vec<Command> {
        let mode = self.ui_mode;
        let editing_index = self.editing_index;
        self.close_editor();

        if text.is_empty() {
            return Vec::new();
        }

        match mode {
            UiMode::Adding => {
                let id = TaskId::next(now.millis, &self.tasks);
                let commands = self.mutate(|tasks| tasks.push(Task::new(id, text, now.millis)));
                self.selected_index = self.tasks.len() - 1;
                commands
            }
            UiMode::Editing => match editing_index {
                Some(index) if self.tasks.get(index).is_some_and(|t| t.text != text) => {
                    self.mutate(|tasks| tasks[index].text = text)
                }
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    pub fn undo(&mut self) -> Vec<Command> {
        match self.history.undo(self.tasks.clone()) {
            Some(previous) => {
                self.tasks = previous;
                self.clamp_selection();
                vec![Command::Persist]
            }
            None => Vec::new(),
        }
    }

    pub fn redo(&mut self) -> Vec<Command> {
        match self.history.redo(self.tasks.clone()) {
            Some(next) => {
                self.tasks = next;
                self.clamp_selection();
                vec![Command::Persist]
            }
            None => Vec::new(),
        }
    }

    pub fn toggle_help(&mut self) {
        self.ui_mode = match self.ui_mode {
            UiMode::Help => UiMode::List,
            _ => UiMode::Help,
        };
    }

    pub fn open_settings(&mut self) {
        self.settings_choice = self.storage;
        self.ui_mode = UiMode::Settings;
    }

    pub fn choose_storage(&mut self, location: StorageLocation) {
        self.settings_choice = location;
    }

    /// Switch to the highlighted storage location and reload from it.
    /// The visible list is kept on the undo stack; redo is left alone.
    pub fn commit_settings(&mut self) -> Vec<Command> {
        let location = self.settings_choice;
        self.history.record_keep_future(self.tasks.clone());
        self.storage = location;
        self.ui_mode = UiMode::List;
        vec![Command::Reload(location)]
    }

    pub fn close_overlay(&mut self) {
        self.ui_mode = UiMode::List;
    }

    /// Tasks read after a storage switch
    pub fn reload_finished(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.clamp_selection();
        self.list_offset = 0;
    }

    /// Ctrl+C: exit if armed, otherwise arm and warn
    pub fn interrupt(&mut self, now: Now) -> Vec<Command> {
        if self.exit_armed_until.is_some_and(|deadline| now.instant < deadline) {
            self.exit_armed_until = None;
            return vec![Command::Exit];
        }
        self.exit_armed_until = Some(now.instant + EXIT_CONFIRM_WINDOW);
        self.notice = Some(Notice {
            text: "Press Ctrl+C again to exit".to_string(),
            severity: Severity::Info,
            expires_at: now.instant + EXIT_CONFIRM_WINDOW,
        });
        Vec::new()
    }

    pub fn notify(&mut self, text: &str, severity: Severity, now: Now) {
        self.notice = Some(Notice {
            text: text.to_string(),
            severity,
            expires_at: now.instant + NOTICE_TTL,
        });
    }

    /// Outcome of a save run by the event loop
    pub fn save_finished(&mut self, ok: bool, manual: bool, now: Now) {
        if !ok {
            self.notify("Save failed", Severity::Error, now);
        } else if manual {
            self.notify("Saved", Severity::Success, now);
        }
    }

    /// A key press clears the notice, except the pending exit prompt
    pub fn dismiss_notice(&mut self) {
        if self.exit_armed_until.is_none() {
            self.notice = None;
        }
    }

    /// Drop the notice and exit arming once their deadlines pass
    pub fn expire(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| now >= n.expires_at) {
            self.notice = None;
        }
        if self.exit_armed_until.is_some_and(|deadline| now >= deadline) {
            self.exit_armed_until = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::HISTORY_LIMIT;
    use pretty_assertions::assert_eq;

    fn create_test_app() -> AppState {
        let task1 = Task::new(TaskId::Number(1), "Task A".to_string(), 10);
        let task2 = Task::new(TaskId::Number(2), "Task B".to_string(), 20);
        AppState::new(vec![task1, task2], StorageLocation::Project)
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert_eq!(app.tasks.len(), 2);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.ui_mode, UiMode::List);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_move_selection() {
        let mut app = create_test_app();

        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        // No wraparound
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        app.move_selection_up();
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_toggle_keeps_completed_at_in_step() {
        let mut app = create_test_app();
        let now = Now::current();

        assert_eq!(app.toggle_selected(now), vec![Command::Persist]);
        assert!(app.tasks[0].done);
        assert_eq!(app.tasks[0].completed_at, Some(now.millis));

        let later = now.later(Duration::from_secs(5));
        app.toggle_selected(later);
        assert_eq!(app.tasks[0].completed_at, None);

        app.toggle_selected(later.later(Duration::from_secs(5)));
        assert_eq!(app.tasks[0].completed_at, Some(later.millis + 5_000));
    }

    #[test]
    fn test_undo_redo_single_mutation() {
        let mut app = create_test_app();
        let original = app.tasks.clone();

        app.delete_selected();
        let mutated = app.tasks.clone();

        assert_eq!(app.undo(), vec![Command::Persist]);
        assert_eq!(app.tasks, original);

        assert_eq!(app.redo(), vec![Command::Persist]);
        assert_eq!(app.tasks, mutated);
    }

    #[test]
    fn test_undo_with_empty_history_is_ignored() {
        let mut app = create_test_app();
        assert!(app.undo().is_empty());
        assert!(app.redo().is_empty());
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut app = create_test_app();
        app.delete_selected();
        app.undo();
        app.toggle_selected(Now::current());
        assert!(app.redo().is_empty());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut app = create_test_app();
        let now = Now::current();
        for _ in 0..HISTORY_LIMIT + 20 {
            app.toggle_selected(now);
        }
        assert_eq!(app.history.undo_len(), HISTORY_LIMIT);
    }

    #[test]
    fn test_delete_last_reclamps_selection() {
        let mut app = create_test_app();
        app.selected_index = 1;

        app.delete_selected();
        assert_eq!(app.selected_index, 0);

        app.delete_selected();
        assert!(app.tasks.is_empty());
        assert_eq!(app.selected_index, 0);

        assert!(app.delete_selected().is_empty());
        assert!(app.toggle_selected(Now::current()).is_empty());
    }

    #[test]
    fn test_toggle_delete_undo_scenario() {
        let mut app = create_test_app();
        let initial = app.tasks.clone();
        let now = Now::current();

        app.toggle_selected(now);
        let toggled = app.tasks.clone();
        assert!(toggled[0].done);
        assert_eq!(toggled[0].completed_at, Some(now.millis));

        app.delete_selected();
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].text, "Task B");
        assert_eq!(app.selected_index, 0);

        app.undo();
        assert_eq!(app.tasks, toggled);
        assert_eq!(app.selected_index, 0);

        app.undo();
        assert_eq!(app.tasks, initial);
    }

    #[test]
    fn test_add_task() {
        let mut app = create_test_app();
        let now = Now::current();

        app.start_add_task();
        assert_eq!(app.ui_mode, UiMode::Adding);

        let commands = app.submit_editor("Task C".to_string(), now);
        assert_eq!(commands, vec![Command::Persist]);
        assert_eq!(app.ui_mode, UiMode::List);
        assert_eq!(app.tasks.len(), 3);
        assert_eq!(app.tasks[2].text, "Task C");
        assert_eq!(app.tasks[2].created_at, now.millis);
        assert_eq!(app.selected_index, 2);
        assert!(app.editor.is_none());
    }

    #[test]
    fn test_add_empty_is_rejected() {
        let mut app = create_test_app();
        app.start_add_task();
        assert!(app.submit_editor(String::new(), Now::current()).is_empty());
        assert_eq!(app.tasks.len(), 2);
        assert_eq!(app.ui_mode, UiMode::List);
        assert_eq!(app.history.undo_len(), 0);
    }

    #[test]
    fn test_edit_task() {
        let mut app = create_test_app();
        app.selected_index = 1;

        app.start_edit_task();
        assert_eq!(app.ui_mode, UiMode::Editing);
        assert_eq!(app.editing_index, Some(1));
        assert_eq!(app.editor.as_ref().unwrap().text(), "Task B");

        app.submit_editor("Task B2".to_string(), Now::current());
        assert_eq!(app.tasks[1].text, "Task B2");
        assert_eq!(app.tasks[1].id, TaskId::Number(2));
        assert_eq!(app.editing_index, None);

        app.undo();
        assert_eq!(app.tasks[1].text, "Task B");
    }

    #[test]
    fn test_edit_requires_a_task() {
        let mut app = AppState::new(Vec::new(), StorageLocation::Project);
        app.start_edit_task();
        assert_eq!(app.ui_mode, UiMode::List);
        assert!(app.editor.is_none());
    }

    #[test]
    fn test_settings_switch_keeps_redo() {
        let mut app = create_test_app();
        app.delete_selected();
        app.undo();
        assert_eq!(app.history.redo_len(), 1);

        app.open_settings();
        app.choose_storage(StorageLocation::Global);
        assert_eq!(app.commit_settings(), vec![Command::Reload(StorageLocation::Global)]);
        assert_eq!(app.storage, StorageLocation::Global);
        assert_eq!(app.history.redo_len(), 1);

        let before_switch = app.tasks.clone();
        app.reload_finished(Vec::new());
        assert!(app.tasks.is_empty());

        app.undo();
        assert_eq!(app.tasks, before_switch);
    }

    #[test]
    fn test_interrupt_twice_exits() {
        let mut app = create_test_app();
        let now = Now::current();

        assert!(app.interrupt(now).is_empty());
        assert!(app.exit_armed_until.is_some());
        assert!(app.notice.is_some());

        let soon = now.later(Duration::from_millis(500));
        assert_eq!(app.interrupt(soon), vec![Command::Exit]);
    }

    #[test]
    fn test_interrupt_window_expires() {
        let mut app = create_test_app();
        let now = Now::current();
        app.interrupt(now);

        let late = now.later(EXIT_CONFIRM_WINDOW);
        app.expire(late.instant);
        assert!(app.exit_armed_until.is_none());
        assert!(app.notice.is_none());
        assert!(app.interrupt(late).is_empty());
    }

    #[test]
    fn test_save_notices() {
        let mut app = create_test_app();
        let now = Now::current();

        app.save_finished(true, false, now);
        assert!(app.notice.is_none());

        app.save_finished(true, true, now);
        assert_eq!(app.notice.as_ref().unwrap().severity, Severity::Success);

        app.save_finished(false, false, now);
        let notice = app.notice.clone().unwrap();
        assert_eq!(notice.text, "Save failed");
        assert_eq!(notice.severity, Severity::Error);

        app.expire(now.instant + NOTICE_TTL - Duration::from_millis(1));
        assert!(app.notice.is_some());
        app.expire(now.instant + NOTICE_TTL);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_dismiss_notice_keeps_exit_prompt() {
        let mut app = create_test_app();
        let now = Now::current();

        app.notify("Saved", Severity::Success, now);
        app.dismiss_notice();
        assert!(app.notice.is_none());

        app.interrupt(now);
        app.dismiss_notice();
        assert!(app.notice.is_some());
    }
}
