//! Application layer for Handset
//!
//! Pure state machine and generic runtime for the simulated phone, enabling
//! deterministic testing with the same code that runs in the terminal
//! frontend.
//!
//! # Components
//!
//! - [`App`]: aggregate UI state machine (device lifecycle, passcode entry,
//!   page navigation, overlay routing, guestbook and weather view state)
//! - [`Driver`]: trait for platform-specific I/O (terminal, storage, network,
//!   speech)
//! - [`Runtime`]: generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod driver;
mod event;
mod flags;
mod input;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::{App, BOOT_HOLD, BOOT_STEP, LOCK_DOUBLE_PRESS, TUTORIAL_STEPS};
pub use driver::Driver;
pub use event::{AppEvent, Tap};
pub use flags::{FlagKey, StartupFlags};
pub use input::KeyInput;
pub use runtime::Runtime;
pub use state::{DayForecast, GuestbookEntry, GuestbookState, HourForecast, WeatherReport, WeatherState};
