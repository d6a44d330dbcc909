//! Full-screen app overlay sequencing.
//!
//! At most one overlay is presented above the home screen at a time. Opening
//! and closing are each two-phase so the renderer can play an entry or exit
//! transition: `Closed → Opening(id)` happens synchronously on an icon tap
//! and advances to `Open(id)` on the next tick (the entry frame);
//! `Open → Closing(id)` flips the status-bar chrome instantly while the
//! overlay itself unmounts only after [`CLOSE_DELAY`].
//!
//! Because the phase carries the overlay identity, the identity can never
//! disagree with the close animation.

use std::time::{Duration, Instant};

use crate::AppId;

/// Exit-transition length before the overlay unmounts.
pub const CLOSE_DELAY: Duration = Duration::from_millis(300);

/// Presentation state of the overlay layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    /// No overlay; home screen interactive.
    Closed,
    /// Overlay mounted this instant; entry transition plays next frame.
    Opening(AppId),
    /// Overlay fully presented.
    Open(AppId),
    /// Exit transition playing; unmounts at the deadline.
    Closing {
        /// The overlay being dismissed.
        app: AppId,
        /// When the overlay unmounts.
        until: Instant,
    },
}

/// State machine for the exclusive app overlay.
#[derive(Debug, Clone)]
pub struct OverlayRouter {
    state: OverlayState,
}

impl Default for OverlayRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayRouter {
    /// Create a router with no overlay presented.
    pub fn new() -> Self {
        Self { state: OverlayState::Closed }
    }

    /// Current state.
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// The presented overlay, if any phase of one is on screen.
    pub fn active(&self) -> Option<AppId> {
        match self.state {
            OverlayState::Closed => None,
            OverlayState::Opening(app) | OverlayState::Open(app) => Some(app),
            OverlayState::Closing { app, .. } => Some(app),
        }
    }

    /// Whether any overlay phase is on screen. Swipe handling is suppressed
    /// while this holds.
    pub fn is_active(&self) -> bool {
        self.state != OverlayState::Closed
    }

    /// Whether the status bar should use overlay chrome. Flips back to home
    /// chrome the instant closing starts, ahead of the unmount.
    pub fn overlay_chrome(&self) -> bool {
        matches!(self.state, OverlayState::Opening(_) | OverlayState::Open(_))
    }

    /// Icon tap: present `app`. Only honored from `Closed`; a second open
    /// while one overlay is up is ignored.
    pub fn open(&mut self, app: AppId) -> bool {
        if self.state == OverlayState::Closed {
            self.state = OverlayState::Opening(app);
            true
        } else {
            false
        }
    }

    /// Close action: start the exit transition. Only honored from `Open`.
    pub fn close(&mut self, now: Instant) -> bool {
        if let OverlayState::Open(app) = self.state {
            self.state = OverlayState::Closing { app, until: now + CLOSE_DELAY };
            true
        } else {
            false
        }
    }

    /// Drop the overlay immediately, skipping the exit transition. Used when
    /// the device re-locks underneath it.
    pub fn reset(&mut self) -> bool {
        if self.state == OverlayState::Closed {
            return false;
        }
        self.state = OverlayState::Closed;
        true
    }

    /// Advance animation phases: `Opening` becomes `Open` on the next frame,
    /// and an elapsed `Closing` deadline unmounts. Returns whether the state
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.state {
            OverlayState::Opening(app) => {
                self.state = OverlayState::Open(app);
                true
            },
            OverlayState::Closing { until, .. } if now >= until => {
                self.state = OverlayState::Closed;
                true
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_is_synchronous_then_presents_next_tick() {
        let mut router = OverlayRouter::new();
        assert!(router.open(AppId::Calendar));
        assert_eq!(router.state(), OverlayState::Opening(AppId::Calendar));
        assert!(router.is_active());

        assert!(router.tick(Instant::now()));
        assert_eq!(router.state(), OverlayState::Open(AppId::Calendar));
    }

    #[test]
    fn second_open_is_ignored_while_active() {
        let mut router = OverlayRouter::new();
        assert!(router.open(AppId::Notes));
        assert!(!router.open(AppId::Music));
        assert_eq!(router.active(), Some(AppId::Notes));
    }

    #[test]
    fn close_is_two_phase() {
        let mut router = OverlayRouter::new();
        let t0 = Instant::now();
        let _ = router.open(AppId::Safari);
        let _ = router.tick(t0);

        assert!(router.close(t0));
        // Status bar flips instantly; overlay still mounted.
        assert!(!router.overlay_chrome());
        assert!(router.is_active());

        assert!(!router.tick(t0), "deadline not yet reached");
        assert!(router.tick(t0 + CLOSE_DELAY));
        assert_eq!(router.state(), OverlayState::Closed);
    }

    #[test]
    fn close_requires_open() {
        let mut router = OverlayRouter::new();
        let t0 = Instant::now();
        assert!(!router.close(t0), "nothing to close");
        let _ = router.open(AppId::Files);
        assert!(!router.close(t0), "opening overlay is not yet closable");
    }

    #[test]
    fn reset_skips_exit_transition() {
        let mut router = OverlayRouter::new();
        let _ = router.open(AppId::Weather);
        assert!(router.reset());
        assert_eq!(router.state(), OverlayState::Closed);
        assert!(!router.reset());
    }
}
