//! Top-level phone lifecycle.
//!
//! The [`DeviceController`] is the single authority for which full-screen
//! mode (onboarding, boot, lock, home) is presented. All transitions are
//! total: a request that does not apply to the current phase is a silent
//! no-op, reported as `false` so callers can skip redundant work.

/// Full-screen mode of the simulated phone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevicePhase {
    /// First-run tutorial; shown only when no completion flag was persisted.
    Onboarding,
    /// Boot progress animation.
    Booting,
    /// Lock screen (clock or passcode keypad).
    Locked,
    /// Home screen with icon grid and dock.
    Unlocked,
}

/// State machine for the phone lifecycle.
///
/// `Onboarding → Booting` fires once per device; `Booting → Locked`,
/// `Locked → Unlocked`, and `Unlocked → Locked` cycle freely afterwards.
#[derive(Debug, Clone)]
pub struct DeviceController {
    phase: DevicePhase,
}

impl DeviceController {
    /// Create a controller. Starts in [`DevicePhase::Onboarding`] on a
    /// first-ever run, otherwise directly in [`DevicePhase::Booting`].
    pub fn new(onboarded: bool) -> Self {
        let phase = if onboarded { DevicePhase::Booting } else { DevicePhase::Onboarding };
        Self { phase }
    }

    /// Current phase.
    pub fn phase(&self) -> DevicePhase {
        self.phase
    }

    /// Onboarding acknowledged; enter the boot sequence.
    pub fn acknowledge_onboarding(&mut self) -> bool {
        self.transition(DevicePhase::Onboarding, DevicePhase::Booting)
    }

    /// Boot animation finished; present the lock screen.
    pub fn complete_boot(&mut self) -> bool {
        self.transition(DevicePhase::Booting, DevicePhase::Locked)
    }

    /// Passcode validated; present the home screen.
    pub fn unlock(&mut self) -> bool {
        self.transition(DevicePhase::Locked, DevicePhase::Unlocked)
    }

    /// Explicit re-lock gesture; return to the lock screen.
    pub fn lock(&mut self) -> bool {
        self.transition(DevicePhase::Unlocked, DevicePhase::Locked)
    }

    fn transition(&mut self, from: DevicePhase, to: DevicePhase) -> bool {
        if self.phase == from {
            self.phase = to;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_run_starts_in_onboarding() {
        let device = DeviceController::new(false);
        assert_eq!(device.phase(), DevicePhase::Onboarding);
    }

    #[test]
    fn returning_run_skips_onboarding() {
        let device = DeviceController::new(true);
        assert_eq!(device.phase(), DevicePhase::Booting);
    }

    #[test]
    fn full_lifecycle() {
        let mut device = DeviceController::new(false);
        assert!(device.acknowledge_onboarding());
        assert!(device.complete_boot());
        assert!(device.unlock());
        assert_eq!(device.phase(), DevicePhase::Unlocked);
        assert!(device.lock());
        assert_eq!(device.phase(), DevicePhase::Locked);
        assert!(device.unlock());
    }

    #[test]
    fn invalid_transitions_are_noops() {
        let mut device = DeviceController::new(true);
        assert!(!device.unlock(), "unlock while booting must be ignored");
        assert!(!device.lock(), "lock while booting must be ignored");
        assert_eq!(device.phase(), DevicePhase::Booting);

        assert!(device.complete_boot());
        assert!(!device.complete_boot(), "second boot completion must be ignored");
        assert!(!device.acknowledge_onboarding());
        assert_eq!(device.phase(), DevicePhase::Locked);
    }
}
