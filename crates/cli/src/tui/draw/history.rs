use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::state::AppState;

use super::ThemeColors;

pub fn draw_history(f: &mut Frame<'_>, area: Rect, app: &AppState, theme: &ThemeColors) {
    let Some(asset) = app.focused_asset() else {
        let p = Paragraph::new("no asset selected")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(theme.muted));
        f.render_widget(p, area);
        return;
    };

    let title = format!("Maintenance History: {} ({})", asset.name, asset.id);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme.muted));

    if asset.history.is_empty() {
        let p = Paragraph::new("no maintenance records for this asset")
            .style(Style::default().fg(theme.muted))
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let items: Vec<ListItem> = asset
        .history
        .iter()
        .map(|r| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("{}  ", r.date),
                        Style::default().fg(theme.primary),
                    ),
                    Span::styled(
                        r.action.clone(),
                        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  ({})", r.technician),
                        Style::default().fg(theme.muted),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("    {}", r.notes),
                    Style::default().fg(theme.muted),
                )),
            ])
        })
        .collect();
    f.render_widget(List::new(items).block(block), area);
}
