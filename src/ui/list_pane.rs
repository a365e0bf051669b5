use crate::app::AppState;
use crate::domain::Task;
use crate::ui::styles::{border_style, default_style, done_style, hint_style, selected_style, title_style};
use chrono::{Local, TimeZone};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// First visible row so that `selected` stays on screen.
///
/// Moves the window only when the selection would leave it, and pulls it
/// back when the list shrinks so no blank rows trail the last task.
pub fn scroll_offset(selected: usize, offset: usize, visible: usize, len: usize) -> usize {
    if visible == 0 || len == 0 {
        return 0;
    }
    let offset = if selected < offset {
        selected
    } else if selected >= offset + visible {
        selected + 1 - visible
    } else {
        offset
    };
    offset.min(len.saturating_sub(visible))
}

/// Format an epoch-millisecond timestamp as local HH:MM
fn format_time(millis: i64) -> Option<String> {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|t| t.format("%H:%M").to_string())
}

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &mut AppState, area: Rect) {
    let title = format!(
        " Ticklist \u{2014} {} of {} done ",
        app.done_count(),
        app.tasks.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if app.tasks.is_empty() {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::styled("  Nothing to do. Press 'a' to add a task.", hint_style()),
        ])
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let visible = area.height.saturating_sub(2) as usize;
    app.list_offset = scroll_offset(app.selected_index, app.list_offset, visible, app.tasks.len());

    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .enumerate()
        .skip(app.list_offset)
        .take(visible)
        .map(|(idx, task)| {
            let line = create_task_line(task);
            let style = if idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Create a single line for a task
/// Format: [x] Water the plants   done 14:05
fn create_task_line(task: &Task) -> Line<'static> {
    let mut spans = Vec::new();

    let check = if task.done { "[x] " } else { "[ ] " };
    spans.push(Span::raw(check.to_string()));

    if task.done {
        spans.push(Span::styled(task.text.clone(), done_style()));
    } else {
        spans.push(Span::raw(task.text.clone()));
    }

    if let Some(time) = task.completed_at.and_then(format_time) {
        spans.push(Span::styled(format!("   done {}", time), hint_style()));
    }

    Line::from(spans)
}
