//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use crate::FlagKey;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Speak a state-change announcement (best-effort).
    Announce(String),

    /// Start the one-shot weather fetch.
    FetchWeather,

    /// Load all guestbook rows and start the insert subscription.
    LoadGuestbook,

    /// Insert a guestbook row.
    SendGuestbook {
        /// Message body.
        text: String,
        /// Display name of the author.
        sender: String,
    },

    /// Persist a device-local flag.
    SetFlag {
        /// Which flag.
        key: FlagKey,
        /// Stored string form.
        value: String,
    },
}
