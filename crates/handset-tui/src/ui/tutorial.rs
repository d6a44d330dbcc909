//! Onboarding tutorial deck.

use handset_app::{App, TUTORIAL_STEPS};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::content::TUTORIAL;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let card = TUTORIAL[app.tutorial_step().min(TUTORIAL.len() - 1)];
    let center = super::centered(area, 52, 12);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", card.title))
        .title_alignment(Alignment::Center);
    let inner = block.inner(center);
    frame.render_widget(block, center);

    let body_area = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 6);
    frame.render_widget(Paragraph::new(card.body).wrap(Wrap { trim: true }), body_area);

    // Step dots plus key hints on the bottom border line of the card.
    let mut spans = Vec::new();
    for step in 0..TUTORIAL_STEPS {
        let style = if step == app.tutorial_step() {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled("•", style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("  Enter: next  Esc: skip", Style::default().fg(Color::DarkGray)));

    let footer = Rect::new(inner.x + 1, inner.y + inner.height.saturating_sub(1), inner.width.saturating_sub(2), 1);
    frame.render_widget(Paragraph::new(Line::from(spans)), footer);
}
