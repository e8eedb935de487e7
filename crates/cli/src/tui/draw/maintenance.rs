use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::state::AppState;

use super::{fit, ThemeColors};

const LABELS: [&str; 4] = ["Technician", "Date", "Priority", "Notes"];

pub fn draw_form(f: &mut Frame<'_>, area: Rect, app: &AppState, theme: &ThemeColors) {
    let Some(form) = &app.form else {
        return;
    };
    let title = app
        .focused_asset()
        .map(|a| format!("Maintenance Order: {} ({})", a.name, a.id))
        .unwrap_or_else(|| "Maintenance Order".to_string());

    let width = 62.min(area.width);
    let height = 12.min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 3,
        width,
        height,
    };
    f.render_widget(Clear, popup);

    let values = [
        form.technician.clone(),
        form.date.clone(),
        format!("< {} >", form.priority.label()),
        form.notes.clone(),
    ];
    let mut lines = vec![Line::from("")];
    for (i, (label, val)) in LABELS.iter().zip(values.iter()).enumerate() {
        let focused = form.field == i;
        let cursor = if focused && i != 2 { "_" } else { "" };
        let value_style = if focused {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {label:<11}"), Style::default().fg(theme.muted)),
            Span::styled(
                format!("{}{cursor}", fit(val, (width as usize).saturating_sub(18))),
                value_style,
            ),
        ]));
    }
    lines.push(Line::from(""));
    match &app.form_error {
        Some(err) => lines.push(Line::from(Span::styled(
            format!("  {err}"),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        ))),
        None => lines.push(Line::from(Span::styled(
            "  submitting records a confirmation only; nothing is persisted",
            Style::default().fg(theme.muted),
        ))),
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.surface))
        .title(fit(&title, (width as usize).saturating_sub(4)));
    f.render_widget(Paragraph::new(lines).block(block), popup);
}
