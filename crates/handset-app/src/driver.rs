//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::{future::Future, time::Instant};

use crate::{App, AppEvent, FlagKey};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs in production TUI and simulation.
///
/// Collaborator calls (`fetch_weather`, `load_guestbook`, `send_guestbook`)
/// are fire-and-forget: implementations start the work and deliver the result
/// later as an [`AppEvent`] from [`poll_event`](Driver::poll_event). Failures
/// come back as failure events, never as driver errors.
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Poll for the next event: user input, the periodic tick, or a
    /// completed collaborator call.
    ///
    /// Returns the next event, or `None` if nothing is ready. Takes the
    /// current [`App`] so pointer coordinates can be hit-tested against the
    /// rendered layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the input source fails.
    fn poll_event(
        &mut self,
        app: &App,
    ) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Start a weather fetch. Completion arrives as
    /// [`AppEvent::WeatherLoaded`] or [`AppEvent::WeatherFailed`].
    fn fetch_weather(&mut self) -> impl Future<Output = ()> + Send;

    /// Load the guestbook and subscribe to new entries. Completion arrives
    /// as [`AppEvent::GuestbookLoaded`], then [`AppEvent::GuestbookMessage`]
    /// per subsequent entry.
    fn load_guestbook(&mut self) -> impl Future<Output = ()> + Send;

    /// Persist a guestbook entry. Completion arrives as
    /// [`AppEvent::GuestbookSent`] or [`AppEvent::GuestbookFailed`].
    fn send_guestbook(&mut self, text: String, sender: String) -> impl Future<Output = ()> + Send;

    /// Persist a startup flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag store cannot be written.
    fn set_flag(&mut self, key: FlagKey, value: &str) -> Result<(), Self::Error>;

    /// Speak a line of text. Best effort: failures are logged, not surfaced.
    fn announce(&mut self, line: &str);

    /// Current time instant.
    fn now(&self) -> Instant;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Stop background work and clean up resources.
    fn stop(&mut self);
}
