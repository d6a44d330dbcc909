//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. The same layout math backs [`hit_test`], which maps a
//! pointer release back to the interactive region under it, so geometry is
//! computed in exactly one place per screen.

mod apps;
mod boot;
mod forecast;
mod guestbook;
mod home;
mod lock;
mod overlay;
mod tutorial;

use handset_app::{App, Tap};
use handset_core::DevicePhase;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match app.device_phase() {
        DevicePhase::Onboarding => tutorial::render(frame, app, area),
        DevicePhase::Booting => boot::render(frame, app, area),
        DevicePhase::Locked => lock::render(frame, app, area),
        DevicePhase::Unlocked => render_unlocked(frame, app, area),
    }
}

/// Map a pointer release to the interactive region under it.
pub fn hit_test(app: &App, x: u16, y: u16) -> Option<Tap> {
    let (cols, rows) = app.terminal_size();
    let area = Rect::new(0, 0, cols, rows);
    let position = Position::new(x, y);

    match app.device_phase() {
        DevicePhase::Locked => lock::hit_test(app, area, position),
        DevicePhase::Unlocked => {
            let (_, body, _) = chrome_split(area);
            if app.overlay().is_active() {
                // The floating lock button sits above the overlay.
                if home::lock_button(body).contains(position) {
                    Some(Tap::LockButton)
                } else {
                    overlay::hit_test(body, position)
                }
            } else {
                home::hit_test(app, body, position)
            }
        },
        _ => None,
    }
}

/// Status bar on top, hint line on the bottom, body between.
fn chrome_split(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

fn render_unlocked(frame: &mut Frame, app: &App, area: Rect) {
    let (status_area, body, hint_area) = chrome_split(area);

    render_status(frame, app, status_area);
    home::render(frame, app, body);
    if app.overlay().is_active() {
        overlay::render(frame, app, body);
        home::render_lock_button(frame, body);
    }
    render_hint(frame, app, hint_area);
}

/// Status bar: clock plus either home or overlay chrome. The overlay chrome
/// flips back to home styling the instant a close starts.
fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let clock = chrono::Local::now().format("%-I:%M").to_string();

    let (title, style) = if app.overlay().overlay_chrome() {
        let label = app.overlay().active().map_or("", |id| id.label());
        (label, Style::default().bg(Color::Black).fg(Color::White))
    } else {
        ("Handset", Style::default().bg(Color::DarkGray).fg(Color::White))
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::raw(clock),
        Span::raw("  "),
        Span::styled(title, Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(Paragraph::new(line).style(style), area);
}

/// Bottom hint line; a transient status message takes precedence.
fn render_hint(frame: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match app.status_message() {
        Some(message) => (message.to_owned(), Color::Red),
        None if app.overlay().is_active() => {
            ("Esc: back".to_owned(), Color::DarkGray)
        },
        None => ("←/→: page  Enter: open  ll: lock  q: quit".to_owned(), Color::DarkGray),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {text}"), Style::default().fg(color)))),
        area,
    );
}

/// A rect of `width` x `height` centered inside `area`, clamping when the
/// area is smaller than requested.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use handset_app::{AppEvent, KeyInput, StartupFlags};
    use handset_core::home_page;

    use super::*;

    fn unlocked_app() -> App {
        let mut app = App::new("1234", StartupFlags { onboarded: true, ..Default::default() });
        let now = Instant::now();
        for _ in 0..30 {
            let _ = app.handle(AppEvent::Tick, now);
        }
        let _ = app.handle(AppEvent::Tick, now + Duration::from_millis(500));
        let _ = app.handle(AppEvent::Key(KeyInput::Up), now);
        for d in ['1', '2', '3', '4'] {
            let _ = app.handle(AppEvent::Key(KeyInput::Char(d)), now);
        }
        let _ = app.handle(
            AppEvent::Tick,
            now + Duration::from_millis(500) + handset_core::SUCCESS_DELAY,
        );
        assert_eq!(app.device_phase(), DevicePhase::Unlocked);
        app
    }

    #[test]
    fn hit_testing_follows_the_delivered_terminal_size() {
        let mut app = unlocked_app();
        let first = home_page(0)[0];

        // At the 80-column default the 36-wide grid is centered at x = 22,
        // so the first icon's center is (28, 4).
        assert_eq!(hit_test(&app, 28, 4), Some(Tap::Icon(first)));

        // After the size event the grid re-centers at x = 42 and the tap
        // target moves with it.
        let _ = app.handle(AppEvent::Resize(120, 40), Instant::now());
        assert_eq!(hit_test(&app, 48, 4), Some(Tap::Icon(first)));
        assert_ne!(hit_test(&app, 28, 4), Some(Tap::Icon(first)));
    }

    #[test]
    fn lock_button_hit_tests_above_an_open_overlay() {
        let mut app = unlocked_app();
        let _ = app.handle(AppEvent::Tapped(Tap::Icon(home_page(0)[0])), Instant::now());
        assert!(app.overlay().is_active());

        let (_, body, _) = chrome_split(Rect::new(0, 0, 80, 24));
        let button = home::lock_button(body);
        assert_eq!(hit_test(&app, button.x, button.y), Some(Tap::LockButton));
        assert_eq!(hit_test(&app, 2, body.y + 1), Some(Tap::CloseOverlay));
    }
}
