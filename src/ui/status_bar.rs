use crate::app::AppState;
use crate::ui::styles::{hint_style, notice_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the bottom status line: storage location and any notice
pub fn render_status_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = vec![Span::styled(format!(" {} storage ", app.storage.name()), hint_style())];

    if let Some(notice) = &app.notice {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(notice.text.clone(), notice_style(notice.severity)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
