use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::tui::filter;
use crate::tui::state::AppState;

use super::{fit, risk_color, status_color, ThemeColors};

pub fn draw_transformers(f: &mut Frame<'_>, area: Rect, app: &mut AppState, theme: &ThemeColors) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    draw_filter_bar(f, rows[0], app, theme);

    let visible = filter::apply(app.repo.all(), &app.criteria);
    // keep the selection inside the filtered view
    if visible.is_empty() {
        app.assets_table.select(None);
    } else if app.assets_table.selected().map_or(true, |s| s >= visible.len()) {
        app.assets_table.select(Some(0));
    }

    let header = Row::new(["ID", "NAME", "REGION", "STATUS", "RISK", "HEALTH", "PROBABILITY"])
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        );
    let table_rows: Vec<Row> = visible
        .iter()
        .map(|a| {
            Row::new(vec![
                Cell::from(a.id.clone()),
                Cell::from(fit(&a.name, 28)),
                Cell::from(a.region.label()),
                Cell::from(Span::styled(
                    a.status.label(),
                    Style::default().fg(status_color(theme, a.status)),
                )),
                Cell::from(Span::styled(
                    a.risk.label(),
                    Style::default().fg(risk_color(theme, a.risk)),
                )),
                Cell::from(a.health_label()),
                Cell::from(fit(&a.failure_probability, 22)),
            ])
        })
        .collect();

    let title = if app.criteria.is_empty() {
        format!("Assets ({})", app.repo.len())
    } else {
        format!("Assets ({}/{})", visible.len(), app.repo.len())
    };
    let table = Table::new(
        table_rows,
        [
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Length(24),
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
            .bg(theme.primary)
            .fg(theme.background)
            .add_modifier(Modifier::BOLD),
    );
    f.render_stateful_widget(table, rows[1], &mut app.assets_table);
}

fn draw_filter_bar(f: &mut Frame<'_>, area: Rect, app: &AppState, theme: &ThemeColors) {
    let set = Style::default().fg(theme.primary).add_modifier(Modifier::BOLD);
    let unset = Style::default().fg(theme.muted);

    let region = app
        .criteria
        .region
        .map(|r| r.label().to_string())
        .unwrap_or_else(|| "All".to_string());
    let status = app
        .criteria
        .status
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| "All".to_string());
    let search = if app.search_input {
        format!("{}_", app.criteria.search)
    } else if app.criteria.search.is_empty() {
        "-".to_string()
    } else {
        app.criteria.search.clone()
    };

    let spans = vec![
        Span::styled("region: ", unset),
        Span::styled(
            region,
            if app.criteria.region.is_some() { set } else { unset },
        ),
        Span::styled("   status: ", unset),
        Span::styled(
            status,
            if app.criteria.status.is_some() { set } else { unset },
        ),
        Span::styled("   search: ", unset),
        Span::styled(
            search,
            if app.search_input || !app.criteria.search.is_empty() {
                set
            } else {
                unset
            },
        ),
    ];
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
