use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config;
use crate::tui::state::AppState;

use super::{ThemeColors, ThemeKind};

pub fn draw_settings(f: &mut Frame<'_>, area: Rect, app: &AppState, theme: &ThemeColors) {
    let label = Style::default().fg(theme.muted);
    let value = Style::default().fg(theme.text);

    let mode = if app.offline {
        "offline (built-in dataset)".to_string()
    } else {
        match &app.api {
            Some(client) => format!("remote ({})", client.base()),
            None => "remote (unconfigured)".to_string(),
        }
    };
    let config_file = config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "unavailable".to_string());
    let theme_name = match app.theme {
        ThemeKind::Dark => "dark",
        ThemeKind::Light => "light",
    };
    let last_error = app.last_error.clone().unwrap_or_else(|| "none".to_string());

    let lines = vec![
        Line::from(vec![
            Span::styled("data source   ", label),
            Span::styled(mode, value),
        ]),
        Line::from(vec![
            Span::styled("config file   ", label),
            Span::styled(config_file, value),
        ]),
        Line::from(vec![
            Span::styled("theme         ", label),
            Span::styled(format!("{theme_name} (press t to toggle)"), value),
        ]),
        Line::from(vec![
            Span::styled("assets loaded ", label),
            Span::styled(app.repo.len().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("active faults ", label),
            Span::styled(app.active_faults().len().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("last error    ", label),
            Span::styled(last_error, Style::default().fg(theme.error)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "R reloads the dataset; a failed reload keeps the current data",
            label,
        )),
    ];
    let p = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Settings")
            .border_style(Style::default().fg(theme.muted)),
    );
    f.render_widget(p, area);
}
