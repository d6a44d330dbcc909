//! Core state machines for Handset
//!
//! Pure decision logic for the simulated phone, completely decoupled from
//! rendering and I/O. Each machine consumes plain inputs (digits, pointer
//! coordinates, the current time) and reports what changed; nothing here
//! schedules timers, reads files, or touches a terminal.
//!
//! # Components
//!
//! - [`DeviceController`]: top-level phone lifecycle (onboarding, boot, lock)
//! - [`PasscodeMachine`]: lock-screen digit entry and validation
//! - [`Pager`]: home-screen page index and drag-gesture sessions
//! - [`OverlayRouter`]: exclusive full-screen app overlay with two-phase close

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod apps;
mod device;
mod overlay;
mod pager;
mod passcode;

pub use apps::{AppId, DOCK, HOME_PAGES, PAGE_COUNT, home_page};
pub use device::{DeviceController, DevicePhase};
pub use overlay::{CLOSE_DELAY, OverlayRouter, OverlayState};
pub use pager::{GestureKind, Pager, SWIPE_THRESHOLD};
pub use passcode::{
    ERROR_DELAY, PASSCODE_LEN, PasscodeMachine, PasscodeOutcome, PasscodePhase, REVEAL_THRESHOLD,
    SUCCESS_DELAY,
};
