use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::tui::state::AppState;

use super::{fit, risk_color, ThemeColors};

pub fn draw_faults(f: &mut Frame<'_>, area: Rect, app: &mut AppState, theme: &ThemeColors) {
    let faults = app.active_faults();
    let header = Row::new(["ID", "FAULT", "REGION", "RISK", "ASSESSMENT"]).style(
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = faults
        .iter()
        .map(|a| {
            Row::new(vec![
                Cell::from(Span::styled(
                    a.id.clone(),
                    Style::default().fg(theme.accent),
                )),
                Cell::from(fit(&a.name, 34)),
                Cell::from(a.region.label()),
                Cell::from(Span::styled(
                    a.risk.label(),
                    Style::default().fg(risk_color(theme, a.risk)),
                )),
                Cell::from(fit(&a.failure_probability, 26)),
            ])
        })
        .collect();

    let title = format!("Active Faults ({})", faults.len());
    let count = faults.len();
    drop(faults);

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(24),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(28),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(theme.muted)),
    )
    .highlight_style(
        Style::default()
            .bg(theme.accent)
            .fg(theme.background)
            .add_modifier(Modifier::BOLD),
    );

    if count == 0 {
        app.faults_table.select(None);
    } else if app.faults_table.selected().map_or(true, |s| s >= count) {
        app.faults_table.select(Some(0));
    }
    f.render_stateful_widget(table, area, &mut app.faults_table);
}
