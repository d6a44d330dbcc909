//! App identities and home-screen layout.
//!
//! The home screen is a fixed set of pages, each holding an ordered list of
//! icons, plus a dock that is visible on every page. Layout is data the
//! [`crate::Pager`] and the renderer both agree on; neither owns it.

/// Identifies one full-screen app overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppId {
    /// Work experience timeline.
    Calendar,
    /// Personal information and preferences.
    Settings,
    /// Certificates and achievements.
    Files,
    /// Tech stack and skills.
    Music,
    /// Realtime guestbook.
    Messages,
    /// Bookmarks and links.
    Safari,
    /// Current conditions and 7-day forecast.
    Weather,
    /// Short-form notes.
    Notes,
    /// Contact card.
    Contacts,
}

impl AppId {
    /// Display label under the icon.
    pub fn label(self) -> &'static str {
        match self {
            AppId::Calendar => "Calendar",
            AppId::Settings => "Settings",
            AppId::Files => "Files",
            AppId::Music => "Music",
            AppId::Messages => "Messages",
            AppId::Safari => "Safari",
            AppId::Weather => "Weather",
            AppId::Notes => "Notes",
            AppId::Contacts => "Contacts",
        }
    }

    /// Glyph drawn inside the icon tile.
    pub fn glyph(self) -> &'static str {
        match self {
            AppId::Calendar => "📅",
            AppId::Settings => "⚙",
            AppId::Files => "📁",
            AppId::Music => "♫",
            AppId::Messages => "💬",
            AppId::Safari => "🧭",
            AppId::Weather => "☀",
            AppId::Notes => "📝",
            AppId::Contacts => "☎",
        }
    }
}

/// Icon layout per home-screen page.
pub const HOME_PAGES: [&[AppId]; 2] = [
    &[AppId::Calendar, AppId::Settings, AppId::Files, AppId::Music, AppId::Safari, AppId::Messages],
    &[AppId::Weather, AppId::Notes, AppId::Contacts],
];

/// Number of home-screen pages.
pub const PAGE_COUNT: usize = HOME_PAGES.len();

/// Dock entries, visible on every page.
pub const DOCK: [AppId; 4] = [AppId::Contacts, AppId::Safari, AppId::Messages, AppId::Music];

/// Icons on the given page. Empty for out-of-range indices.
pub fn home_page(index: usize) -> &'static [AppId] {
    HOME_PAGES.get(index).copied().unwrap_or(&[])
}
