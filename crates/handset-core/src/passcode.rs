//! Lock-screen passcode entry.
//!
//! The [`PasscodeMachine`] accumulates a fixed-length digit buffer and
//! validates it against a stored secret. Validation has exactly one entry
//! point, [`PasscodeMachine::try_validate`], guarded by the current phase:
//! the automatic trigger on the fourth digit and the Enter key both funnel
//! through it, so a buffer-full cycle can never validate twice.
//!
//! The error and success displays are deadline-driven rather than fire-and-
//! forget timers: the deadline lives inside the machine and is fired by
//! [`PasscodeMachine::tick`], so dropping the machine cancels it, and digit
//! input while a deadline is pending is rejected instead of racing the reset.

use std::time::{Duration, Instant};

/// Digits required before validation fires.
pub const PASSCODE_LEN: usize = 4;

/// Minimum upward drag, in cells, that reveals the keypad.
pub const REVEAL_THRESHOLD: i32 = 50;

/// How long the error shake is displayed before the buffer clears.
pub const ERROR_DELAY: Duration = Duration::from_millis(500);

/// Pause between a correct entry and the unlock signal.
pub const SUCCESS_DELAY: Duration = Duration::from_millis(200);

/// Observable phase of the lock screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasscodePhase {
    /// Clock view; keypad not shown.
    Hidden,
    /// Keypad visible, accepting digits.
    Entry,
    /// Wrong code entered; shake until the deadline, then clear.
    Error {
        /// When the buffer and error flag reset.
        until: Instant,
    },
    /// Correct code entered; unlock fires at the deadline.
    Success {
        /// When the unlock signal is emitted.
        until: Instant,
    },
}

/// What a passcode input or tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasscodeOutcome {
    /// Input was rejected or nothing was due.
    None,
    /// Visible state changed; re-render.
    Changed,
    /// The success delay elapsed; the device should unlock now.
    Unlocked,
}

/// State machine for lock-screen passcode entry.
#[derive(Debug, Clone)]
pub struct PasscodeMachine {
    secret: String,
    buffer: String,
    phase: PasscodePhase,
}

impl PasscodeMachine {
    /// Create a machine with the keypad hidden and an empty buffer.
    pub fn new(secret: impl Into<String>) -> Self {
        Self { secret: secret.into(), buffer: String::new(), phase: PasscodePhase::Hidden }
    }

    /// Current phase.
    pub fn phase(&self) -> PasscodePhase {
        self.phase
    }

    /// Number of digits entered so far.
    pub fn entered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the error shake is being displayed.
    pub fn is_error(&self) -> bool {
        matches!(self.phase, PasscodePhase::Error { .. })
    }

    /// Reveal the keypad. No-op unless the clock view is showing.
    pub fn reveal(&mut self) -> bool {
        if self.phase == PasscodePhase::Hidden {
            self.phase = PasscodePhase::Entry;
            true
        } else {
            false
        }
    }

    /// Apply an upward drag of `distance` cells; reveals the keypad past the
    /// threshold.
    pub fn swipe_up(&mut self, distance: i32) -> bool {
        distance > REVEAL_THRESHOLD && self.reveal()
    }

    /// Hide the keypad and discard any entered digits.
    pub fn cancel(&mut self) -> bool {
        if self.phase == PasscodePhase::Hidden {
            return false;
        }
        self.buffer.clear();
        self.phase = PasscodePhase::Hidden;
        true
    }

    /// Append a digit. Rejected outside [`PasscodePhase::Entry`] and once the
    /// buffer is full; reaching the bound validates immediately.
    pub fn press_digit(&mut self, digit: char, now: Instant) -> PasscodeOutcome {
        if self.phase != PasscodePhase::Entry || !digit.is_ascii_digit() {
            return PasscodeOutcome::None;
        }
        if self.buffer.len() >= PASSCODE_LEN {
            return PasscodeOutcome::None;
        }
        self.buffer.push(digit);
        if self.buffer.len() == PASSCODE_LEN {
            self.try_validate(now);
        }
        PasscodeOutcome::Changed
    }

    /// Remove the last digit. No-op on an empty buffer; never validates.
    pub fn delete(&mut self) -> bool {
        if self.phase == PasscodePhase::Entry && self.buffer.pop().is_some() {
            return true;
        }
        false
    }

    /// Enter-key parity: force validation of a full buffer.
    ///
    /// Funnels into [`Self::try_validate`]; since the fourth digit already
    /// validated, this is a no-op unless the buffer somehow sits full and
    /// unvalidated.
    pub fn submit(&mut self, now: Instant) -> PasscodeOutcome {
        if self.try_validate(now) { PasscodeOutcome::Changed } else { PasscodeOutcome::None }
    }

    /// The single authoritative validation call.
    ///
    /// Guarded so at most one validation executes per buffer-full cycle:
    /// only a full buffer in [`PasscodePhase::Entry`] is compared.
    fn try_validate(&mut self, now: Instant) -> bool {
        if self.phase != PasscodePhase::Entry || self.buffer.len() != PASSCODE_LEN {
            return false;
        }
        if self.buffer == self.secret {
            self.phase = PasscodePhase::Success { until: now + SUCCESS_DELAY };
        } else {
            self.phase = PasscodePhase::Error { until: now + ERROR_DELAY };
        }
        true
    }

    /// Fire any due deadline.
    ///
    /// An elapsed error deadline clears the buffer and returns to entry; an
    /// elapsed success deadline consumes the buffer and reports
    /// [`PasscodeOutcome::Unlocked`] exactly once.
    pub fn tick(&mut self, now: Instant) -> PasscodeOutcome {
        match self.phase {
            PasscodePhase::Error { until } if now >= until => {
                self.buffer.clear();
                self.phase = PasscodePhase::Entry;
                PasscodeOutcome::Changed
            },
            PasscodePhase::Success { until } if now >= until => {
                self.buffer.clear();
                self.phase = PasscodePhase::Hidden;
                PasscodeOutcome::Unlocked
            },
            _ => PasscodeOutcome::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_machine() -> PasscodeMachine {
        let mut machine = PasscodeMachine::new("1234");
        assert!(machine.reveal());
        machine
    }

    fn enter(machine: &mut PasscodeMachine, digits: &str, now: Instant) {
        for d in digits.chars() {
            let _ = machine.press_digit(d, now);
        }
    }

    #[test]
    fn correct_code_unlocks_after_delay() {
        let mut machine = entry_machine();
        let t0 = Instant::now();
        enter(&mut machine, "1234", t0);

        assert!(matches!(machine.phase(), PasscodePhase::Success { .. }));
        assert_eq!(machine.tick(t0), PasscodeOutcome::None, "delay has not elapsed");
        assert_eq!(machine.tick(t0 + SUCCESS_DELAY), PasscodeOutcome::Unlocked);
        assert_eq!(machine.entered_len(), 0);
        assert_eq!(machine.phase(), PasscodePhase::Hidden);
    }

    #[test]
    fn wrong_code_shakes_then_clears() {
        let mut machine = entry_machine();
        let t0 = Instant::now();
        enter(&mut machine, "1235", t0);

        assert!(machine.is_error());
        assert_eq!(machine.tick(t0 + ERROR_DELAY), PasscodeOutcome::Changed);
        assert!(!machine.is_error());
        assert_eq!(machine.entered_len(), 0);
        assert_eq!(machine.phase(), PasscodePhase::Entry);
    }

    #[test]
    fn digits_rejected_during_delay_window() {
        let mut machine = entry_machine();
        let t0 = Instant::now();
        enter(&mut machine, "1235", t0);

        assert_eq!(machine.press_digit('9', t0), PasscodeOutcome::None);
        let _ = machine.tick(t0 + ERROR_DELAY);
        assert_eq!(machine.entered_len(), 0, "late digit must not survive the reset");
    }

    #[test]
    fn buffer_never_exceeds_bound() {
        let mut machine = PasscodeMachine::new("9999");
        let _ = machine.reveal();
        let t0 = Instant::now();
        enter(&mut machine, "123456789", t0);
        assert!(machine.entered_len() <= PASSCODE_LEN);
    }

    #[test]
    fn delete_on_empty_buffer_is_noop() {
        let mut machine = entry_machine();
        assert!(!machine.delete());
        assert_eq!(machine.entered_len(), 0);
        assert_eq!(machine.phase(), PasscodePhase::Entry);
    }

    #[test]
    fn delete_pops_one_digit() {
        let mut machine = entry_machine();
        let t0 = Instant::now();
        enter(&mut machine, "12", t0);
        assert!(machine.delete());
        assert_eq!(machine.entered_len(), 1);
    }

    #[test]
    fn submit_after_auto_validation_is_noop() {
        let mut machine = entry_machine();
        let t0 = Instant::now();
        enter(&mut machine, "1234", t0);

        // Auto-validation already moved out of Entry; Enter must not re-fire.
        assert_eq!(machine.submit(t0), PasscodeOutcome::None);
        assert_eq!(machine.tick(t0 + SUCCESS_DELAY), PasscodeOutcome::Unlocked);
        assert_eq!(machine.tick(t0 + SUCCESS_DELAY), PasscodeOutcome::None, "unlock fires once");
    }

    #[test]
    fn swipe_up_reveals_past_threshold() {
        let mut machine = PasscodeMachine::new("1234");
        assert!(!machine.swipe_up(REVEAL_THRESHOLD));
        assert_eq!(machine.phase(), PasscodePhase::Hidden);
        assert!(machine.swipe_up(REVEAL_THRESHOLD + 1));
        assert_eq!(machine.phase(), PasscodePhase::Entry);
    }

    #[test]
    fn cancel_hides_and_clears() {
        let mut machine = entry_machine();
        let t0 = Instant::now();
        enter(&mut machine, "12", t0);
        assert!(machine.cancel());
        assert_eq!(machine.phase(), PasscodePhase::Hidden);
        assert_eq!(machine.entered_len(), 0);
    }

    #[test]
    fn non_digit_input_rejected() {
        let mut machine = entry_machine();
        assert_eq!(machine.press_digit('a', Instant::now()), PasscodeOutcome::None);
        assert_eq!(machine.entered_len(), 0);
    }
}
