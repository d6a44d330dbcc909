//! Static portfolio content shown inside the app overlays.
//!
//! Everything here is plain data: the overlays render it, nothing mutates
//! it. The tutorial deck must stay in step with
//! [`handset_app::TUTORIAL_STEPS`]; a test below pins that.

/// One onboarding tutorial card.
#[derive(Debug, Clone, Copy)]
pub struct TutorialCard {
    /// Card heading.
    pub title: &'static str,
    /// Card body text.
    pub body: &'static str,
}

/// Onboarding deck, stepped through with Enter/arrow keys.
pub const TUTORIAL: [TutorialCard; 6] = [
    TutorialCard {
        title: "Welcome",
        body: "This is my portfolio, presented as a phone you can poke at. \
               Step through these cards with Enter, or press Esc to skip.",
    },
    TutorialCard {
        title: "Unlocking",
        body: "Swipe up on the lock screen (drag the mouse upwards) or press \
               Enter to reveal the keypad. The passcode is 1234.",
    },
    TutorialCard {
        title: "Moving around",
        body: "Swipe left or right to change home pages, or use the arrow \
               keys. Tap the dots to jump straight to a page.",
    },
    TutorialCard {
        title: "Apps",
        body: "Each icon opens a section of the portfolio: work history in \
               Calendar, skills in Music, a live guestbook in Messages.",
    },
    TutorialCard {
        title: "Trackpad gesture",
        body: "Hold Ctrl while dragging for the three-finger swipe: the page \
               turns the moment the pointer moves.",
    },
    TutorialCard {
        title: "Locking up",
        body: "Double-tap the floating button (or press l twice quickly) to \
               lock the phone again. That's everything, enjoy!",
    },
];

/// One entry in the work timeline (Calendar overlay).
#[derive(Debug, Clone, Copy)]
pub struct Experience {
    /// Job title.
    pub role: &'static str,
    /// Employer.
    pub company: &'static str,
    /// Employment period.
    pub period: &'static str,
    /// One-line summary.
    pub summary: &'static str,
}

/// Work history, newest first.
pub const EXPERIENCE: [Experience; 3] = [
    Experience {
        role: "Senior Software Engineer",
        company: "Northwind Labs",
        period: "2023 - present",
        summary: "Realtime collaboration backend and the tooling around it.",
    },
    Experience {
        role: "Software Engineer",
        company: "Quantic Systems",
        period: "2020 - 2023",
        summary: "Payments platform; owned the reconciliation pipeline.",
    },
    Experience {
        role: "Junior Developer",
        company: "Pixelforge Studio",
        period: "2018 - 2020",
        summary: "Client web apps, from landing pages to dashboards.",
    },
];

/// Skill groups (Music overlay), rendered as playlists.
pub const SKILLS: [(&str, &[&str]); 3] = [
    ("Languages", &["Rust", "TypeScript", "Go", "SQL"]),
    ("Backend", &["Tokio", "PostgreSQL", "Redis", "gRPC"]),
    ("Frontend", &["React", "Vite", "Tailwind"]),
];

/// Certificates and achievements (Files overlay).
pub const CERTIFICATES: [(&str, &str); 3] = [
    ("AWS Solutions Architect", "2024"),
    ("CKA: Certified Kubernetes Administrator", "2023"),
    ("Winner, Regional Hack Night", "2022"),
];

/// Bookmarks (Safari overlay): label and URL.
pub const BOOKMARKS: [(&str, &str); 4] = [
    ("GitHub", "https://github.com/alexsharma"),
    ("Blog", "https://alexsharma.dev/blog"),
    ("Resume (PDF)", "https://alexsharma.dev/resume.pdf"),
    ("LinkedIn", "https://linkedin.com/in/alexsharma"),
];

/// Short-form notes (Notes overlay): title and body.
pub const NOTES: [(&str, &str); 3] = [
    (
        "Now",
        "Building a terminal-first portfolio. Reading about CRDTs. \
         Training for a half marathon, slowly.",
    ),
    (
        "Talks I'd like to give",
        "State machines as UI architecture. Why my side projects all \
         become text editors.",
    ),
    ("Grocery list", "Eggs, coffee, more coffee."),
];

/// Contact card (Contacts overlay): label and value.
pub const CONTACT: [(&str, &str); 4] = [
    ("Name", "Alex Sharma"),
    ("Email", "hello@alexsharma.dev"),
    ("Location", "Chandigarh, India"),
    ("Timezone", "IST (UTC+5:30)"),
];

/// About rows (Settings overlay): label and value.
pub const ABOUT: [(&str, &str); 4] = [
    ("Device", "Handset, terminal edition"),
    ("Owner", "Alex Sharma"),
    ("Interests", "Distributed systems, type systems, running"),
    ("Looking for", "Backend and infrastructure roles"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tutorial_deck_matches_step_count() {
        assert_eq!(TUTORIAL.len(), handset_app::TUTORIAL_STEPS);
    }
}
