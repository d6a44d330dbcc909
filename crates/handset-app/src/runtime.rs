//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: UI state machine
//! - [`Driver`]: Platform-specific I/O

use crate::{App, AppAction, Driver};

/// Generic runtime that orchestrates App and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
pub struct Runtime<D>
where
    D: Driver,
{
    driver: D,
    app: App,
}

impl<D> Runtime<D>
where
    D: Driver,
{
    /// Create a new runtime with the given driver and application state.
    pub fn new(driver: D, app: App) -> Self {
        Self { driver, app }
    }

    /// Run the main event loop.
    ///
    /// This is the core orchestration loop that:
    /// 1. Polls for events from the driver (input, ticks, completed fetches)
    /// 2. Feeds them to the App with the driver's clock
    /// 3. Executes the resulting actions
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;

        loop {
            let should_quit = self.process_cycle().await?;
            if should_quit {
                break;
            }
        }

        self.driver.stop();
        Ok(())
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns `true` if the application should quit.
    async fn process_cycle(&mut self) -> Result<bool, D::Error> {
        let Some(event) = self.driver.poll_event(&self.app).await? else {
            return Ok(false);
        };
        let now = self.driver.now();
        let actions = self.app.handle(event, now);
        self.process_actions(actions).await
    }

    /// Process actions returned by the App.
    ///
    /// Returns `true` if should quit.
    async fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => return Ok(true),
                AppAction::Announce(line) => self.driver.announce(&line),
                AppAction::FetchWeather => self.driver.fetch_weather().await,
                AppAction::LoadGuestbook => self.driver.load_guestbook().await,
                AppAction::SendGuestbook { text, sender } => {
                    self.driver.send_guestbook(text, sender).await;
                },
                AppAction::SetFlag { key, value } => {
                    if let Err(e) = self.driver.set_flag(key, &value) {
                        tracing::warn!("failed to persist flag {key:?}: {e}");
                    }
                },
            }
        }
        Ok(false)
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the App
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}
