use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle},
        Bar, BarChart, BarGroup, Block, BorderType, Borders, Clear, List, ListItem, Paragraph,
    },
    Frame,
};

use common::AssetStatus;

use crate::tui::state::AppState;

use super::{fit, risk_color, status_color, ThemeColors};

// Karachi bounding box for the marker canvas.
const LNG_BOUNDS: [f64; 2] = [66.95, 67.25];
const LAT_BOUNDS: [f64; 2] = [24.72, 25.08];

pub fn draw_dashboard(f: &mut Frame<'_>, area: Rect, app: &AppState, theme: &ThemeColors) {
    if app.repo.is_empty() && !app.loading {
        let p = Paragraph::new("no assets loaded (press R to retry)")
            .style(Style::default().fg(theme.muted))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);

    draw_tiles(f, rows[0], app, theme);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(rows[1]);

    draw_map(f, cols[0], app, theme);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Min(1),
        ])
        .split(cols[1]);
    draw_status_breakdown(f, right[0], app, theme);
    draw_distribution(f, right[1], app, theme);
    draw_recent_faults(f, right[2], app, theme);
}

fn tile<'a>(title: String, color: ratatui::style::Color) -> Paragraph<'a> {
    Paragraph::new(Line::from(Span::styled(
        title,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL))
}

fn draw_tiles(f: &mut Frame<'_>, area: Rect, app: &AppState, theme: &ThemeColors) {
    let assets = app.repo.all();
    let total = assets.len();
    let active = assets
        .iter()
        .filter(|a| a.status == AssetStatus::ActiveFault)
        .count();
    let critical = assets
        .iter()
        .filter(|a| a.status == AssetStatus::Critical)
        .count();
    let scores: Vec<u64> = assets.iter().filter_map(|a| a.health.map(u64::from)).collect();
    let avg_health = if scores.is_empty() {
        "N/A".to_string()
    } else {
        format!("{}", scores.iter().sum::<u64>() / scores.len() as u64)
    };
    let on_record = app
        .summary
        .as_ref()
        .map(|s| s.total_faults.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ])
        .split(area);

    f.render_widget(tile(format!("Assets {total}"), theme.text), tiles[0]);
    f.render_widget(tile(format!("Active Faults {active}"), theme.accent), tiles[1]);
    f.render_widget(tile(format!("Critical {critical}"), theme.error), tiles[2]);
    f.render_widget(tile(format!("Avg Health {avg_health}"), theme.success), tiles[3]);
    f.render_widget(tile(format!("Faults on Record {on_record}"), theme.muted), tiles[4]);
}

fn draw_map(f: &mut Frame<'_>, area: Rect, app: &AppState, theme: &ThemeColors) {
    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Karachi Grid")
                .border_style(Style::default().fg(theme.muted)),
        )
        .x_bounds(LNG_BOUNDS)
        .y_bounds(LAT_BOUNDS)
        .paint(|ctx| {
            for m in app.map.markers() {
                ctx.draw(&Circle {
                    x: m.lng,
                    y: m.lat,
                    radius: 0.004,
                    color: status_color(theme, m.status),
                });
            }
            if let Some(sel) = app.map.selected() {
                ctx.draw(&Circle {
                    x: sel.lng,
                    y: sel.lat,
                    radius: 0.009,
                    color: theme.primary,
                });
                ctx.print(
                    sel.lng,
                    sel.lat,
                    Line::styled(
                        format!(" {}", sel.name),
                        Style::default()
                            .fg(theme.text)
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });
    f.render_widget(canvas, area);
}

fn draw_status_breakdown(f: &mut Frame<'_>, area: Rect, app: &AppState, theme: &ThemeColors) {
    let mut lines = Vec::new();
    if let Some(summary) = &app.summary {
        for s in &summary.statuses {
            let color = match s.color.as_str() {
                "success" => theme.success,
                "warning" => theme.warning,
                "info" => theme.primary,
                _ => theme.muted,
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{:<12}", s.label), Style::default().fg(color)),
                Span::styled(format!("{}", s.count), Style::default().fg(theme.text)),
            ]));
        }
    } else {
        for status in AssetStatus::ALL {
            let count = app
                .repo
                .all()
                .iter()
                .filter(|a| a.status == status)
                .count();
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<12}", status.label()),
                    Style::default().fg(status_color(theme, status)),
                ),
                Span::styled(format!("{count}"), Style::default().fg(theme.text)),
            ]));
        }
    }
    let p = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Status Breakdown")
            .border_style(Style::default().fg(theme.muted)),
    );
    f.render_widget(p, area);
}

// Bar series for the proportion chart: fault types from the remote summary,
// or assets per region when running offline.
fn draw_distribution(f: &mut Frame<'_>, area: Rect, app: &AppState, theme: &ThemeColors) {
    let (title, counts): (&str, Vec<(String, u64)>) = match &app.summary {
        Some(summary) => (
            "Fault Types",
            summary
                .by_fault_type
                .iter()
                .map(|(k, v)| (k.clone(), *v))
                .collect(),
        ),
        None => (
            "Assets by Region",
            common::Region::ALL
                .iter()
                .map(|r| {
                    let n = app.repo.all().iter().filter(|a| a.region == *r).count();
                    (r.label().to_string(), n as u64)
                })
                .filter(|(_, n)| *n > 0)
                .collect(),
        ),
    };

    let bars: Vec<Bar> = counts
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .label(Line::from(label.clone()))
                .value(*value)
                .style(Style::default().fg(theme.primary))
        })
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(theme.muted)),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

fn draw_recent_faults(f: &mut Frame<'_>, area: Rect, app: &AppState, theme: &ThemeColors) {
    let items: Vec<ListItem> = app
        .active_faults()
        .iter()
        .map(|a| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<9}", a.id), Style::default().fg(theme.accent)),
                Span::styled(fit(&a.name, 34), Style::default().fg(theme.text)),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Active Faults")
            .border_style(Style::default().fg(theme.muted)),
    );
    f.render_widget(list, area);
}

/// Info popup for the selected marker. Only the confirm key navigates.
pub fn draw_marker_popup(f: &mut Frame<'_>, area: Rect, app: &AppState, theme: &ThemeColors) {
    let Some(marker) = app.map.selected() else {
        return;
    };

    let width = 44.min(area.width);
    let height = 7.min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + area.height / 4,
        width,
        height,
    };
    f.render_widget(Clear, popup);

    let lines = vec![
        Line::from(Span::styled(
            fit(&marker.name, (width as usize).saturating_sub(4)),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("status: ", Style::default().fg(theme.muted)),
            Span::styled(
                marker.status.label(),
                Style::default().fg(status_color(theme, marker.status)),
            ),
            Span::styled("  risk: ", Style::default().fg(theme.muted)),
            Span::styled(
                marker.risk.label(),
                Style::default().fg(risk_color(theme, marker.risk)),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[v] view details   [esc] close",
            Style::default().fg(theme.primary),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.surface))
        .title(marker.id.clone());
    f.render_widget(Paragraph::new(lines).block(block), popup);
}
