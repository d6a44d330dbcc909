//! Static content overlays.
//!
//! Every app except Messages and Weather renders fixed portfolio data from
//! [`crate::content`].

use handset_core::AppId;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::content;

pub fn render(frame: &mut Frame, app_id: AppId, area: Rect) {
    let lines = match app_id {
        AppId::Calendar => experience_lines(),
        AppId::Settings => pair_lines(&content::ABOUT),
        AppId::Files => certificate_lines(),
        AppId::Music => skill_lines(),
        AppId::Safari => pair_lines(&content::BOOKMARKS),
        AppId::Notes => note_lines(),
        AppId::Contacts => pair_lines(&content::CONTACT),
        AppId::Messages | AppId::Weather => Vec::new(),
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)))
}

fn experience_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in content::EXPERIENCE {
        lines.push(heading(entry.role));
        lines.push(Line::from(Span::styled(
            format!("{} · {}", entry.company, entry.period),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(entry.summary));
        lines.push(Line::default());
    }
    lines
}

fn certificate_lines() -> Vec<Line<'static>> {
    content::CERTIFICATES
        .iter()
        .map(|(name, year)| {
            Line::from(vec![
                Span::raw("📄 "),
                Span::raw(*name),
                Span::styled(format!("  ({year})"), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect()
}

fn skill_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (group, skills) in content::SKILLS {
        lines.push(heading(group));
        for skill in skills {
            lines.push(Line::from(format!("  ♫ {skill}")));
        }
        lines.push(Line::default());
    }
    lines
}

fn note_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (title, body) in content::NOTES {
        lines.push(heading(title));
        lines.push(Line::from(body));
        lines.push(Line::default());
    }
    lines
}

fn pair_lines(pairs: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    pairs
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label:>10}  "), Style::default().fg(Color::DarkGray)),
                Span::raw(*value),
            ])
        })
        .collect()
}
