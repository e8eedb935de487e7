use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Row, Table, Wrap},
    Frame,
};

use common::Asset;

use crate::tui::state::AppState;

use super::{risk_color, status_color, ThemeColors};

pub fn draw_detail(f: &mut Frame<'_>, area: Rect, app: &AppState, theme: &ThemeColors) {
    let Some(asset) = app.focused_asset() else {
        let p = Paragraph::new("no asset selected")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(theme.muted));
        f.render_widget(p, area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(7),
        ])
        .split(area);

    draw_title(f, rows[0], asset, theme);
    draw_health(f, rows[1], asset, theme);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[2]);
    draw_metrics(f, cols[0], asset, theme);
    draw_assessment(f, cols[1], asset, theme);

    draw_prediction(f, rows[3], app, theme);
}

fn draw_title(f: &mut Frame<'_>, area: Rect, asset: &Asset, theme: &ThemeColors) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                asset.name.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", asset.id), Style::default().fg(theme.muted)),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" {} ", asset.status.label()),
                Style::default()
                    .fg(theme.background)
                    .bg(status_color(theme, asset.status)),
            ),
            Span::raw(" "),
            Span::styled(
                format!(" {} risk ", asset.risk.label()),
                Style::default()
                    .fg(theme.background)
                    .bg(risk_color(theme, asset.risk)),
            ),
            Span::styled(
                format!("  {} | {}", asset.region.label(), asset.location),
                Style::default().fg(theme.muted),
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_health(f: &mut Frame<'_>, area: Rect, asset: &Asset, theme: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Health Score")
        .border_style(Style::default().fg(theme.muted));
    match asset.health {
        Some(h) => {
            let color = if h >= 70 {
                theme.success
            } else if h >= 45 {
                theme.warning
            } else {
                theme.error
            };
            let gauge = Gauge::default()
                .block(block)
                .gauge_style(Style::default().fg(color))
                .percent(u16::from(h))
                .label(format!("{h}/100"));
            f.render_widget(gauge, area);
        }
        None => {
            let p = Paragraph::new("N/A (active fault)")
                .style(Style::default().fg(theme.accent))
                .block(block);
            f.render_widget(p, area);
        }
    }
}

fn draw_metrics(f: &mut Frame<'_>, area: Rect, asset: &Asset, theme: &ThemeColors) {
    let rows: Vec<Row> = asset
        .metrics
        .iter()
        .map(|(name, value)| {
            let style = if value == "N/A" {
                Style::default().fg(theme.muted)
            } else {
                Style::default().fg(theme.text)
            };
            Row::new(vec![
                Span::styled(name.clone(), Style::default().fg(theme.muted)),
                Span::styled(value.clone(), style),
            ])
        })
        .collect();
    let table = Table::new(rows, [Constraint::Percentage(55), Constraint::Percentage(45)]).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Telemetry")
            .border_style(Style::default().fg(theme.muted)),
    );
    f.render_widget(table, area);
}

fn draw_assessment(f: &mut Frame<'_>, area: Rect, asset: &Asset, theme: &ThemeColors) {
    let mut lines = vec![Line::from(vec![
        Span::styled("failure probability: ", Style::default().fg(theme.muted)),
        Span::styled(
            asset.failure_probability.clone(),
            Style::default().fg(theme.warning),
        ),
    ])];
    match &asset.recommendation {
        Some(rec) => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                rec.action.clone(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                rec.reason.clone(),
                Style::default().fg(theme.text),
            )));
        }
        None => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "no action required",
                Style::default().fg(theme.success),
            )));
        }
    }
    let p = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Assessment")
            .border_style(Style::default().fg(theme.muted)),
    );
    f.render_widget(p, area);
}

fn draw_prediction(f: &mut Frame<'_>, area: Rect, app: &AppState, theme: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Fault Prediction")
        .border_style(Style::default().fg(theme.muted));

    let lines = if app.predict_pending {
        vec![Line::from(Span::styled(
            "predicting...",
            Style::default().fg(theme.warning),
        ))]
    } else if let Some(err) = &app.predict_error {
        vec![Line::from(Span::styled(
            err.clone(),
            Style::default().fg(theme.error),
        ))]
    } else if let Some(p) = &app.prediction {
        vec![
            Line::from(vec![
                Span::styled("predicted fault: ", Style::default().fg(theme.muted)),
                Span::styled(
                    p.predictions.fault_type.clone(),
                    Style::default()
                        .fg(theme.warning)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  (restoration {})", p.predictions.restoration_formatted),
                    Style::default().fg(theme.text),
                ),
            ]),
            Line::from(vec![
                Span::styled("conditions: ", Style::default().fg(theme.muted)),
                Span::styled(
                    format!(
                        "{:.1} \u{00b0}C, wind {:.1} km/h",
                        p.conditions.temperature, p.conditions.wind_speed
                    ),
                    Style::default().fg(theme.text),
                ),
            ]),
            Line::from(vec![
                Span::styled("response: ", Style::default().fg(theme.muted)),
                Span::styled(
                    format!(
                        "{} at {:.1} km, travel {:.0} min",
                        p.response.nearest_center,
                        p.response.distance_km,
                        p.response.travel_time_min
                    ),
                    Style::default().fg(theme.text),
                ),
            ]),
            Line::from(vec![
                Span::styled("total ETA: ", Style::default().fg(theme.muted)),
                Span::styled(
                    p.response.total_eta_formatted.clone(),
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ]
    } else {
        vec![Line::from(Span::styled(
            "press p to run a fault prediction for this asset",
            Style::default().fg(theme.muted),
        ))]
    };
    f.render_widget(Paragraph::new(lines).block(block), area);
}
