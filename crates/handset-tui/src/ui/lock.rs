//! Lock screen: clock view and passcode keypad.
//!
//! The keypad grid geometry lives in [`key_slots`], shared between rendering
//! and hit-testing.

use handset_app::{App, Tap};
use handset_core::{PASSCODE_LEN, PasscodePhase};
use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const KEY_WIDTH: u16 = 7;
const KEY_HEIGHT: u16 = 3;
const STACK_WIDTH: u16 = 27;
const STACK_HEIGHT: u16 = 17;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.passcode().phase() == PasscodePhase::Hidden {
        render_clock(frame, area);
        return;
    }

    let stack = super::centered(area, STACK_WIDTH, STACK_HEIGHT);

    let (title, title_color) = match app.passcode().phase() {
        PasscodePhase::Error { .. } => ("Wrong Passcode", Color::Red),
        PasscodePhase::Success { .. } => ("Unlocking…", Color::Green),
        _ => ("Enter Passcode", Color::White),
    };
    frame.render_widget(
        Paragraph::new(title)
            .alignment(Alignment::Center)
            .style(Style::default().fg(title_color)),
        Rect::new(stack.x, stack.y, stack.width, 1),
    );

    render_dots(frame, app, Rect::new(stack.x, stack.y + 2, stack.width, 1));

    for (rect, tap) in key_slots(keypad_rect(stack)) {
        let label = match tap {
            Tap::Digit(d) => d.to_string(),
            Tap::PasscodeCancel => "✕".to_owned(),
            Tap::PasscodeDelete => "⌫".to_owned(),
            _ => String::new(),
        };
        let block =
            Block::default().borders(Borders::ALL).border_type(BorderType::Rounded);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        frame.render_widget(Paragraph::new(label).alignment(Alignment::Center), inner);
    }
}

fn render_clock(frame: &mut Frame, area: Rect) {
    let center = super::centered(area, 30, 5);
    let clock = chrono::Local::now().format("%-I:%M %p").to_string();
    let date = chrono::Local::now().format("%A, %-d %B").to_string();

    frame.render_widget(
        Paragraph::new(clock)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Rect::new(center.x, center.y, center.width, 1),
    );
    frame.render_widget(
        Paragraph::new(date).alignment(Alignment::Center),
        Rect::new(center.x, center.y + 1, center.width, 1),
    );
    frame.render_widget(
        Paragraph::new("swipe up or press Enter")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        Rect::new(center.x, center.y + 4, center.width, 1),
    );
}

/// Entry-progress dots; filled per entered digit.
fn render_dots(frame: &mut Frame, app: &App, area: Rect) {
    let color = match app.passcode().phase() {
        PasscodePhase::Error { .. } => Color::Red,
        PasscodePhase::Success { .. } => Color::Green,
        _ => Color::White,
    };
    let mut spans = Vec::new();
    for slot in 0..PASSCODE_LEN {
        let filled = slot < app.passcode().entered_len();
        spans.push(Span::styled(
            if filled { "●" } else { "○" },
            Style::default().fg(color),
        ));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn keypad_rect(stack: Rect) -> Rect {
    Rect::new(
        stack.x + (STACK_WIDTH - KEY_WIDTH * 3) / 2,
        stack.y + 4,
        KEY_WIDTH * 3,
        KEY_HEIGHT * 4,
    )
}

/// Keypad grid: digits 1-9, then cancel / 0 / delete.
fn key_slots(keypad: Rect) -> Vec<(Rect, Tap)> {
    let mut slots = Vec::with_capacity(12);
    for (row, digits) in [['1', '2', '3'], ['4', '5', '6'], ['7', '8', '9']].iter().enumerate() {
        for (col, &digit) in digits.iter().enumerate() {
            slots.push((key_rect(keypad, row, col), Tap::Digit(digit)));
        }
    }
    slots.push((key_rect(keypad, 3, 0), Tap::PasscodeCancel));
    slots.push((key_rect(keypad, 3, 1), Tap::Digit('0')));
    slots.push((key_rect(keypad, 3, 2), Tap::PasscodeDelete));
    slots
}

#[allow(clippy::cast_possible_truncation)]
fn key_rect(keypad: Rect, row: usize, col: usize) -> Rect {
    Rect::new(
        keypad.x + col as u16 * KEY_WIDTH,
        keypad.y + row as u16 * KEY_HEIGHT,
        KEY_WIDTH,
        KEY_HEIGHT,
    )
}

pub fn hit_test(app: &App, area: Rect, position: Position) -> Option<Tap> {
    if app.passcode().phase() == PasscodePhase::Hidden {
        return None;
    }
    let stack = super::centered(area, STACK_WIDTH, STACK_HEIGHT);
    key_slots(keypad_rect(stack))
        .into_iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, tap)| tap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keypad_slots_do_not_overlap() {
        let slots = key_slots(keypad_rect(Rect::new(0, 0, STACK_WIDTH, STACK_HEIGHT)));
        assert_eq!(slots.len(), 12);
        for (i, (a, _)) in slots.iter().enumerate() {
            for (b, _) in slots.iter().skip(i + 1) {
                assert!(a.intersection(*b).is_empty(), "{a:?} overlaps {b:?}");
            }
        }
    }
}
