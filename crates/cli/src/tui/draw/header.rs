use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::state::AppState;

use super::ThemeColors;

pub fn draw_header(f: &mut Frame<'_>, area: Rect, app: &AppState, theme: &ThemeColors) {
    let mode = if app.offline { "offline" } else { "remote" };
    let mut spans = vec![
        Span::styled(
            " gridwatch ",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("| {} ", app.controller.screen().title()),
            Style::default().fg(theme.text),
        ),
        Span::styled(
            format!("| assets:{} | {mode} ", app.repo.len()),
            Style::default().fg(theme.muted),
        ),
    ];
    if app.loading {
        spans.push(Span::styled(
            "| LOADING ",
            Style::default().fg(theme.warning).add_modifier(Modifier::BOLD),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
