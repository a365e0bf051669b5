use super::EditOutcome;
use crate::app::{AppState, Command};
use crate::clock::Now;
use crate::domain::{StorageLocation, UiMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle one key press and return the side effects it requests.
///
/// This is the whole transition function: it never touches the disk.
pub fn handle_key(app: &mut AppState, key: KeyEvent, now: Now) -> Vec<Command> {
    app.expire(now.instant);
    app.dismiss_notice();

    // Ctrl+C works in every mode, including while typing
    if is_interrupt(&key) {
        return app.interrupt(now);
    }

    if app.ui_mode.is_typing() {
        return handle_editor_mode(app, key, now);
    }

    if let Some(commands) = handle_global(app, &key) {
        return commands;
    }

    match app.ui_mode {
        UiMode::List => handle_list_mode(app, key, now),
        UiMode::Help => handle_help_mode(app, key),
        UiMode::Settings => handle_settings_mode(app, key),
        UiMode::Adding | UiMode::Editing => Vec::new(),
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

/// Undo/redo, available everywhere except the line editor
fn handle_global(app: &mut AppState, key: &KeyEvent) -> Option<Vec<Command>> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        KeyCode::Char('u') if !ctrl => Some(app.undo()),
        KeyCode::Char('r') if !ctrl => Some(app.redo()),
        KeyCode::Char('y') | KeyCode::Char('Y') if ctrl => Some(app.redo()),
        // Terminals report Ctrl+Shift+Z either as 'Z' or as 'z' + SHIFT
        KeyCode::Char('Z') if ctrl => Some(app.redo()),
        KeyCode::Char('z') if ctrl && shift => Some(app.redo()),
        KeyCode::Char('z') if ctrl => Some(app.undo()),
        _ => None,
    }
}

/// Handle keys in list mode
fn handle_list_mode(app: &mut AppState, key: KeyEvent, now: Now) -> Vec<Command> {
    match key.code {
        KeyCode::Up => {
            app.move_selection_up();
            Vec::new()
        }
        KeyCode::Down => {
            app.move_selection_down();
            Vec::new()
        }

        // Toggle done
        KeyCode::Char(' ') => app.toggle_selected(now),

        // Delete
        KeyCode::Char('d') => app.delete_selected(),

        // Add / edit
        KeyCode::Char('a') => {
            app.start_add_task();
            Vec::new()
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            app.start_edit_task();
            Vec::new()
        }

        // Overlays
        KeyCode::Char('h') | KeyCode::Char('?') => {
            app.toggle_help();
            Vec::new()
        }
        KeyCode::Char('o') => {
            app.open_settings();
            Vec::new()
        }

        // Save now / save and quit
        KeyCode::Char('s') => vec![Command::Save],
        KeyCode::Char('q') => vec![Command::Exit],

        _ => Vec::new(),
    }
}

/// Handle keys while the line editor is open (adding or editing)
fn handle_editor_mode(app: &mut AppState, key: KeyEvent, now: Now) -> Vec<Command> {
    let Some(editor) = app.editor.as_mut() else {
        app.close_editor();
        return Vec::new();
    };

    match editor.handle_key(key) {
        EditOutcome::Submit(text) => app.submit_editor(text, now),
        EditOutcome::Cancel => {
            app.close_editor();
            Vec::new()
        }
        EditOutcome::Editing | EditOutcome::Ignored => Vec::new(),
    }
}

/// Handle keys in help mode
fn handle_help_mode(app: &mut AppState, key: KeyEvent) -> Vec<Command> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('?') => app.close_overlay(),
        _ => {}
    }
    Vec::new()
}

/// Handle keys in the storage chooser
fn handle_settings_mode(app: &mut AppState, key: KeyEvent) -> Vec<Command> {
    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
            app.choose_storage(app.settings_choice.other());
            Vec::new()
        }
        KeyCode::Char('p') => {
            app.choose_storage(StorageLocation::Project);
            Vec::new()
        }
        KeyCode::Char('g') => {
            app.choose_storage(StorageLocation::Global);
            Vec::new()
        }
        KeyCode::Enter => app.commit_settings(),
        KeyCode::Esc => {
            app.close_overlay();
            Vec::new()
        }
        _ => Vec::new(),
    }
}
