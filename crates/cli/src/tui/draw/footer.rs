use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::tui::controller::Screen;
use crate::tui::state::AppState;

use super::ThemeColors;

pub fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &AppState, theme: &ThemeColors) {
    let help = match app.controller.screen() {
        Screen::Dashboard => {
            "q quit  1..4 screens  \u{2190}/\u{2192} marker  enter popup  v view details  R reload  t theme"
        }
        Screen::Transformers => {
            "q quit  \u{2191}/\u{2193} select  enter details  / search  r region  s status  c clear"
        }
        Screen::ActiveFaults => "q quit  \u{2191}/\u{2193} select  enter details  1..4 screens",
        Screen::Detail => "q quit  m maintenance  y history  p predict  esc back to list",
        Screen::Settings => "q quit  t theme  R reload  1..4 screens",
        Screen::MaintenanceForm => {
            "tab next field  \u{2190}/\u{2192} priority  enter submit  esc cancel"
        }
        Screen::MaintenanceHistory => "esc back to detail",
    };
    let p = Paragraph::new(Line::from(help))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.muted));
    f.render_widget(p, area);
}
