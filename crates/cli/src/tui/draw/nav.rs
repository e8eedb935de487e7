use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::tui::controller::Screen;
use crate::tui::state::AppState;

use super::ThemeColors;

const NAV: [(&str, Screen); 4] = [
    ("1 Dashboard", Screen::Dashboard),
    ("2 Transformers", Screen::Transformers),
    ("3 Active Faults", Screen::ActiveFaults),
    ("4 Settings", Screen::Settings),
];

pub fn draw_nav(f: &mut Frame<'_>, area: Rect, app: &AppState, theme: &ThemeColors) {
    let current = app.controller.screen();
    let items: Vec<ListItem> = NAV
        .iter()
        .map(|(label, screen)| {
            let style = if *screen == current {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted)
            };
            ListItem::new(Span::styled(*label, style))
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::RIGHT));
    f.render_widget(list, area);
}
