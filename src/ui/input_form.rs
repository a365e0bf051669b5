use crate::app::AppState;
use crate::domain::UiMode;
use crate::input::LineEditor;
use crate::ui::{
    layout::create_modal_area,
    styles::{cursor_style, hint_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the inline editor for adding or editing a task
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(editor) = &app.editor else {
        return;
    };

    let title_text = if app.ui_mode == UiMode::Editing {
        " Edit Task "
    } else {
        " Add Task "
    };

    let modal_area = create_modal_area(area, 7);
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        editor_line(editor),
        Line::raw(""),
        Line::styled(
            "Enter save  \u{b7}  Esc cancel  \u{b7}  Ctrl+\u{2190}/\u{2192} word  \u{b7}  Ctrl+W delete word",
            hint_style(),
        ),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title_text, modal_title_style()))
            .style(modal_bg_style()),
    );

    f.render_widget(paragraph, modal_area);
}

/// The buffer with the character under the cursor highlighted
fn editor_line(editor: &LineEditor) -> Line<'static> {
    let chars: Vec<char> = editor.text().chars().collect();
    let cursor = editor.cursor().min(chars.len());

    let before: String = chars[..cursor].iter().collect();
    let (at, after) = match chars.get(cursor) {
        Some(c) => (c.to_string(), chars[cursor + 1..].iter().collect()),
        None => (" ".to_string(), String::new()),
    };

    Line::from(vec![
        Span::raw("> "),
        Span::raw(before),
        Span::styled(at, cursor_style()),
        Span::raw(after),
    ])
}
