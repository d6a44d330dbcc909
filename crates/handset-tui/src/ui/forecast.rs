//! Weather overlay: current conditions, hourly strip, 7-day outlook.

use handset_app::{App, WeatherState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::weather;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let WeatherState::Loaded(report) = app.weather() else {
        frame.render_widget(
            Paragraph::new("Fetching forecast…")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(3), Constraint::Min(1)])
        .split(area);
    let [current_area, hourly_area, daily_area] = chunks.as_ref() else {
        return;
    };

    let current = vec![
        Line::from(Span::styled(
            format!(
                "{} {:.0}°",
                weather::glyph(report.weather_code, report.is_day),
                report.temperature
            ),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            weather::describe(report.weather_code),
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(current).alignment(Alignment::Center),
        *current_area,
    );

    // Hourly strip, as many slots as fit at eight columns each.
    let slots = usize::from(hourly_area.width / 8).max(1);
    let mut hour_spans = Vec::new();
    for hour in report.hourly.iter().take(slots) {
        hour_spans.push(Span::styled(
            format!("{:>5} {:>2.0}° ", hour.time, hour.temperature),
            Style::default().fg(Color::Gray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(hour_spans)), *hourly_area);

    let daily: Vec<Line> = report
        .daily
        .iter()
        .map(|day| {
            Line::from(vec![
                Span::raw(format!("{}  ", day.date)),
                Span::raw(format!("{} ", weather::glyph(day.weather_code, true))),
                Span::styled(
                    format!("{:>3.0}° / {:>3.0}°", day.high, day.low),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(daily), *daily_area);
}
