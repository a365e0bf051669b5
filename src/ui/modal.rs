use crate::app::AppState;
use crate::domain::StorageLocation;
use crate::persistence::TASKS_FILE_NAME;
use crate::ui::{
    layout::create_modal_area,
    styles::{hint_style, modal_bg_style, modal_title_style, selected_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Key reference shown in help mode
const HELP_ROWS: &[(&str, &str)] = &[
    ("\u{2191}/\u{2193}", "Move selection"),
    ("Space", "Toggle done"),
    ("a", "Add task"),
    ("e / Enter", "Edit task"),
    ("d", "Delete task"),
    ("u / Ctrl+Z", "Undo"),
    ("r / Ctrl+Y", "Redo (also Ctrl+Shift+Z)"),
    ("s", "Save now"),
    ("o", "Storage settings"),
    ("h / ?", "Toggle this help"),
    ("q", "Save and quit"),
    ("Ctrl+C \u{d7}2", "Save and exit"),
    ("", ""),
    ("Ctrl+\u{2190}/\u{2192}", "Jump word (while typing)"),
    ("Ctrl+W", "Delete word (while typing)"),
    ("Esc", "Cancel / close"),
];

/// Render the help reference sheet
pub fn render_help(f: &mut Frame, area: Rect) {
    let modal_area = create_modal_area(area, HELP_ROWS.len() as u16 + 4);
    f.render_widget(Clear, modal_area);

    let mut lines = vec![Line::raw("")];
    for (keys, action) in HELP_ROWS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<14}", keys), modal_title_style()),
            Span::raw(*action),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Help ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

fn location_path(location: StorageLocation) -> String {
    match location {
        StorageLocation::Project => format!("./{}", TASKS_FILE_NAME),
        StorageLocation::Global => format!("~/{}", TASKS_FILE_NAME),
    }
}

/// Render the storage location chooser
pub fn render_settings(f: &mut Frame, app: &AppState, area: Rect) {
    let modal_area = create_modal_area(area, 9);
    f.render_widget(Clear, modal_area);

    let mut lines = vec![Line::raw(""), Line::raw("  Where should tasks be stored?"), Line::raw("")];

    for location in StorageLocation::all() {
        let marker = if *location == app.storage { "\u{25cf}" } else { "\u{25cb}" };
        let text = format!("  {} {:<8} {}", marker, location.name(), location_path(*location));
        if *location == app.settings_choice {
            lines.push(Line::styled(text, selected_style()));
        } else {
            lines.push(Line::raw(text));
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled("  \u{2191}/\u{2193} choose  \u{b7}  Enter switch  \u{b7}  Esc close", hint_style()));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Storage ", modal_title_style()))
            .style(modal_bg_style()),
    );

    f.render_widget(paragraph, modal_area);
}
