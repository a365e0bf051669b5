use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar for the current mode
pub fn render_keybindings(f: &mut Frame, mode: UiMode, area: Rect) {
    let hints: Vec<&str> = match mode {
        UiMode::List => vec![
            " \u{2191}/\u{2193} select   ",
            "Space done   ",
            "a add   ",
            "e edit   ",
            "d delete   ",
            "u undo   ",
            "r redo   ",
            "s save   ",
            "o storage   ",
            "? help   ",
            "q quit",
        ],
        UiMode::Adding | UiMode::Editing => vec![" Enter save   ", "Esc cancel"],
        UiMode::Help => vec![" Esc / ? close"],
        UiMode::Settings => vec![" \u{2191}/\u{2193} choose   ", "Enter switch   ", "Esc close"],
    };

    let line = Line::from(hints.into_iter().map(Span::raw).collect::<Vec<_>>());
    f.render_widget(Paragraph::new(line).style(hint_style()), area);
}
