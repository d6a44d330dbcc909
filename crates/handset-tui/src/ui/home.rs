//! Home screen: icon grid, page dots, dock, edge zones, lock button.
//!
//! All interactive geometry comes out of [`slots`], shared between
//! rendering and hit-testing.

use handset_app::{App, Tap};
use handset_core::{AppId, DOCK, home_page};
use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 4;
const COLUMNS: u16 = 3;
const EDGE_WIDTH: u16 = 2;

struct Slots {
    icons: Vec<(Rect, AppId)>,
    dock: Vec<(Rect, AppId)>,
    dots: Vec<(Rect, usize)>,
    left_edge: Rect,
    right_edge: Rect,
    lock_button: Rect,
}

#[allow(clippy::cast_possible_truncation)]
fn slots(app: &App, area: Rect) -> Slots {
    let dock_height = CELL_HEIGHT;
    let dots_height = 1;
    let grid = Rect::new(
        area.x,
        area.y,
        area.width,
        area.height.saturating_sub(dock_height + dots_height),
    );
    let dots_row = Rect::new(area.x, grid.y + grid.height, area.width, dots_height);
    let dock_row = Rect::new(area.x, dots_row.y + dots_height, area.width, dock_height);

    let icons_on_page = home_page(app.pager().page());
    let grid_width = CELL_WIDTH * COLUMNS;
    let grid_x = area.x + area.width.saturating_sub(grid_width) / 2;
    let icons = icons_on_page
        .iter()
        .enumerate()
        .map(|(index, &app_id)| {
            let row = index as u16 / COLUMNS;
            let col = index as u16 % COLUMNS;
            let rect = Rect::new(
                grid_x + col * CELL_WIDTH,
                grid.y + 1 + row * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            );
            (rect, app_id)
        })
        .collect();

    let dock_width = CELL_WIDTH * DOCK.len() as u16;
    let dock_x = area.x + area.width.saturating_sub(dock_width) / 2;
    let dock = DOCK
        .iter()
        .enumerate()
        .map(|(index, &app_id)| {
            let rect =
                Rect::new(dock_x + index as u16 * CELL_WIDTH, dock_row.y, CELL_WIDTH, CELL_HEIGHT);
            (rect, app_id)
        })
        .collect();

    let dot_count = app.pager().page_count() as u16;
    let dots_x = area.x + area.width.saturating_sub(dot_count * 3) / 2;
    let dots = (0..app.pager().page_count())
        .map(|page| (Rect::new(dots_x + page as u16 * 3, dots_row.y, 3, 1), page))
        .collect();

    Slots {
        icons,
        dock,
        dots,
        left_edge: Rect::new(area.x, grid.y, EDGE_WIDTH, grid.height),
        right_edge: Rect::new(
            area.x + area.width.saturating_sub(EDGE_WIDTH),
            grid.y,
            EDGE_WIDTH,
            grid.height,
        ),
        lock_button: lock_button(area),
    }
}

/// Floating lock button. Exposed separately from [`slots`] so the overlay
/// layer can draw and hit-test it above an open app.
pub(super) fn lock_button(area: Rect) -> Rect {
    let grid_height = area.height.saturating_sub(CELL_HEIGHT + 1);
    Rect::new(area.x + area.width.saturating_sub(EDGE_WIDTH + 3), area.y + grid_height / 2, 3, 1)
}

pub(super) fn render_lock_button(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new("◉").style(Style::default().fg(Color::DarkGray)),
        lock_button(area),
    );
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = slots(app, area);
    let focused = focused_rect(app, &layout);

    for (rect, app_id) in layout.icons.iter().chain(&layout.dock) {
        render_icon(frame, *rect, *app_id, Some(*rect) == focused);
    }

    let mut spans = Vec::new();
    for (_, page) in &layout.dots {
        let style = if *page == app.pager().page() {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(" ● ", style));
    }
    let dots_row = layout.dots.first().map_or(area, |(rect, _)| {
        Rect::new(area.x, rect.y, area.width, 1)
    });
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        dots_row,
    );

    render_lock_button(frame, area);

    // Swipe hint, first page only.
    if app.pager().page() == 0 {
        let hint_row = Rect::new(area.x, dots_row.y.saturating_sub(1), area.width, 1);
        frame.render_widget(
            Paragraph::new("swipe for more →")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            hint_row,
        );
    }
}

fn focused_rect(app: &App, layout: &Slots) -> Option<Rect> {
    let icon_count = layout.icons.len();
    if app.focus() < icon_count {
        layout.icons.get(app.focus()).map(|(rect, _)| *rect)
    } else {
        layout.dock.get(app.focus() - icon_count).map(|(rect, _)| *rect)
    }
}

fn render_icon(frame: &mut Frame, rect: Rect, app_id: AppId, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let lines = vec![
        Line::from(Span::raw(app_id.glyph())),
        Line::from(Span::styled(app_id.label(), Style::default().fg(Color::Gray))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

pub fn hit_test(app: &App, area: Rect, position: Position) -> Option<Tap> {
    let layout = slots(app, area);

    if layout.lock_button.contains(position) {
        return Some(Tap::LockButton);
    }
    for (rect, app_id) in &layout.icons {
        if rect.contains(position) {
            return Some(Tap::Icon(*app_id));
        }
    }
    for (rect, app_id) in &layout.dock {
        if rect.contains(position) {
            return Some(Tap::Dock(*app_id));
        }
    }
    for (rect, page) in &layout.dots {
        if rect.contains(position) {
            return Some(Tap::PageDot(*page));
        }
    }
    if layout.left_edge.contains(position) {
        return Some(Tap::PageLeft);
    }
    if layout.right_edge.contains(position) {
        return Some(Tap::PageRight);
    }
    None
}
