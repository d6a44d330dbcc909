//! Boot screen: logo and progress bar.

use handset_app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Gauge, Paragraph},
};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let center = super::centered(area, 40, 6);

    let logo_area = Rect::new(center.x, center.y, center.width, 2);
    frame.render_widget(
        Paragraph::new("⌾ Handset")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White)),
        logo_area,
    );

    let bar_area = Rect::new(center.x, center.y + 4, center.width, 1);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::White).bg(Color::DarkGray))
        .ratio(f64::from(app.boot_progress()) / 100.0)
        .label("");
    frame.render_widget(gauge, bar_area);
}
