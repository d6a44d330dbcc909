//! Home-screen page navigation.
//!
//! The [`Pager`] converts drag gestures, dot taps, and edge buttons into a
//! clamped page index. A drag is tracked as one session from pointer-down to
//! pointer-up; for any session at most one page change is committed, and it
//! is ±1 relative to the index at session start. There is no wraparound and
//! no rubber-banding.

/// Minimum horizontal displacement, in cells, for a single-pointer swipe.
pub const SWIPE_THRESHOLD: i32 = 50;

/// How a drag session was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// One touch point or a mouse drag; commits on release past the
    /// [`SWIPE_THRESHOLD`].
    Single,
    /// Trackpad-style three-point gesture; commits on the first nonzero
    /// movement delta.
    ThreePoint,
}

/// Ephemeral per-interaction state.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    start_x: i32,
    kind: GestureKind,
    /// Set once a three-point session has committed; suppresses further
    /// transitions for the rest of the session.
    triggered: bool,
}

/// State machine for the home-screen page index.
#[derive(Debug, Clone)]
pub struct Pager {
    page: usize,
    page_count: usize,
    drag: Option<DragSession>,
}

impl Pager {
    /// Create a pager on page 0. A zero `page_count` is treated as one page.
    pub fn new(page_count: usize) -> Self {
        Self { page: 0, page_count: page_count.max(1), drag: None }
    }

    /// Currently visible page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Total number of pages.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Whether a drag session is in progress.
    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Dot-indicator tap: jump straight to `index`.
    pub fn set_page(&mut self, index: usize) -> bool {
        if index < self.page_count && index != self.page {
            self.page = index;
            true
        } else {
            false
        }
    }

    /// Edge button: one page right, inert at the last page.
    pub fn page_next(&mut self) -> bool {
        if self.page + 1 < self.page_count {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Edge button: one page left, inert at page 0.
    pub fn page_prev(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Begin a drag session. Exactly three touch points arm the low-threshold
    /// three-point variant; anything else is a single-pointer drag.
    pub fn pointer_down(&mut self, x: i32, touches: u8) {
        let kind = if touches == 3 { GestureKind::ThreePoint } else { GestureKind::Single };
        self.drag = Some(DragSession { start_x: x, kind, triggered: false });
    }

    /// Movement within a session.
    ///
    /// Only the three-point variant reacts here: the first nonzero horizontal
    /// delta commits one page change and arms the triggered flag for the rest
    /// of the session. Returns whether the page changed.
    pub fn pointer_move(&mut self, x: i32) -> bool {
        let Some(session) = self.drag.as_mut() else {
            return false;
        };
        if session.kind != GestureKind::ThreePoint || session.triggered || x == session.start_x {
            return false;
        }
        session.triggered = true;
        let forward = session.start_x - x > 0;
        if forward { self.page_next() } else { self.page_prev() }
    }

    /// End the session. A single-pointer drag commits here when the total
    /// displacement exceeds [`SWIPE_THRESHOLD`]; a three-point session has
    /// already committed (or not) during movement. Returns whether the page
    /// changed.
    pub fn pointer_up(&mut self, x: i32) -> bool {
        let Some(session) = self.drag.take() else {
            return false;
        };
        if session.kind != GestureKind::Single {
            return false;
        }
        let diff = session.start_x - x;
        if diff > SWIPE_THRESHOLD {
            self.page_next()
        } else if diff < -SWIPE_THRESHOLD {
            self.page_prev()
        } else {
            false
        }
    }

    /// Abandon any in-progress session without committing.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(pager: &mut Pager, start_x: i32, end_x: i32) -> bool {
        pager.pointer_down(start_x, 1);
        let _ = pager.pointer_move(end_x);
        pager.pointer_up(end_x)
    }

    #[test]
    fn short_drag_leaves_page_unchanged() {
        let mut pager = Pager::new(2);
        assert!(!drag(&mut pager, 100, 50), "50-cell drag is exactly at threshold");
        assert_eq!(pager.page(), 0);
    }

    #[test]
    fn long_drag_moves_one_page() {
        let mut pager = Pager::new(2);
        assert!(drag(&mut pager, 150, 70));
        assert_eq!(pager.page(), 1);
        assert!(drag(&mut pager, 70, 150));
        assert_eq!(pager.page(), 0);
    }

    #[test]
    fn drag_clamps_at_bounds() {
        let mut pager = Pager::new(2);
        // startX - endX = -80: previous page, already at 0.
        assert!(!drag(&mut pager, 70, 150));
        assert_eq!(pager.page(), 0);

        // +80: next page.
        assert!(drag(&mut pager, 150, 70));
        assert_eq!(pager.page(), 1);

        // +80 again: clamped at the last page.
        assert!(!drag(&mut pager, 150, 70));
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn three_point_commits_on_first_move() {
        let mut pager = Pager::new(3);
        pager.pointer_down(100, 3);
        assert!(pager.pointer_move(99), "first nonzero delta fires immediately");
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn three_point_commits_at_most_once() {
        let mut pager = Pager::new(3);
        pager.pointer_down(100, 3);
        let _ = pager.pointer_move(99);
        assert!(!pager.pointer_move(40));
        assert!(!pager.pointer_move(0));
        assert!(!pager.pointer_up(0), "no release-time fallback");
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn three_point_zero_delta_does_not_fire() {
        let mut pager = Pager::new(2);
        pager.pointer_down(100, 3);
        assert!(!pager.pointer_move(100));
        assert!(!pager.pointer_up(100));
        assert_eq!(pager.page(), 0);
    }

    #[test]
    fn dot_navigation_is_absolute() {
        let mut pager = Pager::new(3);
        assert!(pager.set_page(2));
        assert_eq!(pager.page(), 2);
        assert!(!pager.set_page(2), "same page is a no-op");
        assert!(!pager.set_page(3), "out of range is ignored");
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn edge_buttons_clamp() {
        let mut pager = Pager::new(2);
        assert!(!pager.page_prev());
        assert!(pager.page_next());
        assert!(!pager.page_next());
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn release_without_session_is_noop() {
        let mut pager = Pager::new(2);
        assert!(!pager.pointer_up(0));
        assert_eq!(pager.page(), 0);
    }
}
