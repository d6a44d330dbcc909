//! Best-effort speech announcements.
//!
//! Lock and unlock transitions are announced through whichever system speech
//! engine is installed. Speech is a convenience layer: a missing engine or a
//! failed spawn is logged at debug level and otherwise ignored.

use std::process::Stdio;

/// Engines tried in order. `say` covers macOS, the others Linux.
const ENGINES: [&str; 3] = ["say", "espeak", "spd-say"];

/// Fire-and-forget speech announcer.
#[derive(Debug, Clone)]
pub struct Announcer {
    enabled: bool,
}

impl Announcer {
    /// Create an announcer. A disabled announcer swallows every line.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Speak a line with the first engine that spawns. The child runs
    /// unsupervised; its exit status is not collected.
    pub fn speak(&self, line: &str) {
        if !self.enabled {
            return;
        }
        for engine in ENGINES {
            let spawned = tokio::process::Command::new(engine)
                .arg(line)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
            match spawned {
                Ok(_child) => {
                    tracing::debug!("announced {line:?} via {engine}");
                    return;
                },
                Err(e) => tracing::trace!("speech engine {engine} unavailable: {e}"),
            }
        }
        tracing::debug!("no speech engine available; dropped announcement {line:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_announcer_is_silent() {
        let announcer = Announcer::new(false);
        // Must not panic or spawn anything without a runtime.
        announcer.speak("Unlocked");
    }
}
