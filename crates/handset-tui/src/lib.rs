//! Terminal UI for Handset
//!
//! A thin shell over [`handset_app::Driver`] that provides terminal-specific
//! I/O: crossterm input, ratatui rendering, file-backed persistence, the
//! Open-Meteo weather fetch, and speech announcements. All orchestration
//! logic lives in the generic [`handset_app::Runtime`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod content;
pub mod speech;
pub mod store;
pub mod terminal;
pub mod ui;
pub mod weather;

pub use handset_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime, StartupFlags};
pub use terminal::{TerminalDriver, TerminalError};
