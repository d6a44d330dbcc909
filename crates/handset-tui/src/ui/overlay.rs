//! App overlay chrome and content dispatch.
//!
//! The overlay covers the whole body area. A back button sits in the top
//! left; its rect is the single tappable region while an overlay is up.
//! During the exit transition the frame dims but the content stays mounted.

use handset_app::{App, Tap};
use handset_core::{AppId, OverlayState};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::{apps, forecast, guestbook};

const BACK_LABEL: &str = " ‹ Back ";

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(app_id) = app.overlay().active() else {
        return;
    };
    let closing = matches!(app.overlay().state(), OverlayState::Closing { .. });

    let border_style = if closing {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(format!(" {} {} ", app_id.glyph(), app_id.label()));
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(BACK_LABEL).style(Style::default().fg(Color::Cyan)),
        back_button(area),
    );

    let content = Rect::new(
        inner.x,
        inner.y + 1,
        inner.width,
        inner.height.saturating_sub(1),
    );
    match app_id {
        AppId::Messages => guestbook::render(frame, app, content),
        AppId::Weather => forecast::render(frame, app, content),
        _ => apps::render(frame, app_id, content),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn back_button(area: Rect) -> Rect {
    Rect::new(area.x + 1, area.y + 1, BACK_LABEL.chars().count() as u16, 1)
}

pub fn hit_test(area: Rect, position: Position) -> Option<Tap> {
    back_button(area).contains(position).then_some(Tap::CloseOverlay)
}
