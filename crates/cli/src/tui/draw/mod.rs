use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::controller::Screen;
use super::state::AppState;

mod dashboard;
mod detail;
mod faults;
mod footer;
mod header;
mod history;
mod maintenance;
mod nav;
mod overlay;
mod settings;
mod theme;
mod transformers;

pub use theme::{get_theme, risk_color, status_color, ThemeColors, ThemeKind};

use overlay::draw_overlay;

pub fn draw(f: &mut Frame<'_>, app: &mut AppState) {
    let theme = get_theme(app.theme);
    let area = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::draw_header(f, chunks[0], app, &theme);

    // a load failure gets its own strip so previously loaded data stays
    // visible underneath
    let body = if let Some(err) = app.last_error.clone() {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(chunks[1]);
        let banner = Paragraph::new(format!("! {err}")).style(Style::default().fg(theme.error));
        f.render_widget(banner, rows[0]);
        rows[1]
    } else {
        chunks[1]
    };

    let left_w = if body.width < 70 { 0 } else { 16 };
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(left_w), Constraint::Min(1)])
        .split(body);
    if left_w > 0 {
        nav::draw_nav(f, cols[0], app, &theme);
    }

    match app.controller.screen() {
        Screen::Dashboard => dashboard::draw_dashboard(f, cols[1], app, &theme),
        Screen::Detail => detail::draw_detail(f, cols[1], app, &theme),
        Screen::ActiveFaults => faults::draw_faults(f, cols[1], app, &theme),
        Screen::Transformers => transformers::draw_transformers(f, cols[1], app, &theme),
        Screen::Settings => settings::draw_settings(f, cols[1], app, &theme),
        Screen::MaintenanceForm => maintenance::draw_form(f, cols[1], app, &theme),
        Screen::MaintenanceHistory => history::draw_history(f, cols[1], app, &theme),
    }

    footer::draw_footer(f, chunks[2], app, &theme);

    if app.controller.screen() == Screen::Dashboard && app.map.popup_open() {
        dashboard::draw_marker_popup(f, area, app, &theme);
    }
    if app.loading {
        draw_overlay(f, area, "loading grid data...", &theme);
    } else if let Some((_, msg)) = app.overlay_msg.clone() {
        draw_overlay(f, area, &msg, &theme);
    }
}

/// Truncates to a display width, appending an ellipsis when text is cut.
pub(crate) fn fit(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    let mut out = String::new();
    for ch in s.chars() {
        if out.width() + 1 >= width {
            break;
        }
        out.push(ch);
    }
    out.push('\u{2026}');
    out
}
