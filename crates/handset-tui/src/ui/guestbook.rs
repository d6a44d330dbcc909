//! Messages overlay: the realtime guestbook.
//!
//! Rows render as chat bubbles, right-aligned when authored on this device.
//! Below the history sit two input fields (name and message); Tab moves
//! between them, Enter sends.

use handset_app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3), Constraint::Length(3)])
        .split(area);
    let [history_area, name_area, input_area] = chunks.as_ref() else {
        return;
    };

    render_history(frame, app, *history_area);
    render_field(
        frame,
        "Name",
        &app.guestbook().name,
        app.guestbook().editing_name,
        *name_area,
    );
    render_field(
        frame,
        "Message (Enter sends)",
        &app.guestbook().input,
        !app.guestbook().editing_name,
        *input_area,
    );
}

fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let guestbook = app.guestbook();
    if guestbook.loading {
        frame.render_widget(
            Paragraph::new("Loading…")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }
    if guestbook.entries.is_empty() {
        frame.render_widget(
            Paragraph::new("No messages yet. Say hi!")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    // Newest rows win the available height.
    let visible = usize::from(area.height);
    let mut lines: Vec<Line> = Vec::new();
    for entry in guestbook.entries.iter().rev().take(visible).rev() {
        let mine = guestbook.is_mine(entry);
        let bubble = format!("{}: {}", entry.sender, entry.text);
        let style = if mine {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        let line = Line::from(Span::styled(bubble, style));
        lines.push(if mine { line.alignment(Alignment::Right) } else { line });
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_field(frame: &mut Frame, title: &str, value: &str, focused: bool, area: Rect) {
    let border_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(format!(" {title} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let shown = if focused { format!("{value}█") } else { value.to_owned() };
    frame.render_widget(Paragraph::new(shown), inner);
}
