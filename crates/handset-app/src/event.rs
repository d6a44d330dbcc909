//! Application input events.
//!
//! This module defines [`AppEvent`], the comprehensive set of inputs that
//! drive the [`crate::App`] state machine.
//!
//! Events originate from three sources:
//! - User interactions (keyboard, pointer, taps) and terminal resize.
//! - The periodic tick that fires machine deadlines.
//! - Collaborator notifications (guestbook store, weather fetch) translated
//!   by the driver.

use handset_core::AppId;

use crate::{GuestbookEntry, KeyInput, WeatherReport};

/// A resolved tap on an interactive region.
///
/// The frontend hit-tests pointer releases against its own layout and
/// reports what was hit; the state machine never sees screen geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tap {
    /// Keypad digit.
    Digit(char),
    /// Keypad cancel label.
    PasscodeCancel,
    /// Keypad delete label.
    PasscodeDelete,
    /// Home-grid icon.
    Icon(AppId),
    /// Dock icon.
    Dock(AppId),
    /// Pagination dot.
    PageDot(usize),
    /// Left edge navigation zone.
    PageLeft,
    /// Right edge navigation zone.
    PageRight,
    /// Overlay back button.
    CloseOverlay,
    /// Floating assistive button (double-tap re-locks).
    LockButton,
}

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Pointer pressed at (x, y) with the given simultaneous touch count.
    PointerDown {
        /// Column, cells.
        x: i32,
        /// Row, cells.
        y: i32,
        /// Simultaneous touch points (3 arms the trackpad gesture).
        touches: u8,
    },

    /// Pointer moved while pressed.
    PointerMove {
        /// Column, cells.
        x: i32,
        /// Row, cells.
        y: i32,
    },

    /// Pointer released.
    PointerUp {
        /// Column, cells.
        x: i32,
        /// Row, cells.
        y: i32,
    },

    /// A press-release resolved to a tap on an interactive region.
    Tapped(Tap),

    /// Periodic tick; fires machine deadlines and boot progress.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Initial guestbook fetch finished.
    GuestbookLoaded(Vec<GuestbookEntry>),

    /// Subscription delivered a new guestbook row.
    GuestbookMessage(GuestbookEntry),

    /// Own insert was accepted by the store.
    GuestbookSent(GuestbookEntry),

    /// A guestbook operation failed.
    GuestbookFailed(String),

    /// Weather fetch finished.
    WeatherLoaded(WeatherReport),

    /// Weather fetch failed; UI stays in the loading state.
    WeatherFailed(String),
}
