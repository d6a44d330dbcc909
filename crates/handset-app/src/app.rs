//! Aggregate application state machine.
//!
//! This module defines the [`App`] state machine, which composes the core
//! machines (device lifecycle, passcode entry, pager, overlay router) with
//! view state for the guestbook and weather surfaces, completely decoupled
//! from I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//! The caller supplies the clock, so every deadline (boot hold, passcode
//! delays, overlay close) is deterministic under test.

use std::time::{Duration, Instant};

use handset_core::{
    AppId, DOCK, DeviceController, DevicePhase, OverlayRouter, PAGE_COUNT, Pager, PasscodeMachine,
    PasscodeOutcome, PasscodePhase, home_page,
};

use crate::{
    AppAction, AppEvent, FlagKey, GuestbookState, KeyInput, StartupFlags, Tap, WeatherState,
};

/// Boot progress gained per tick (4 per 100 ms tick: 0→100 in ~2.5 s).
pub const BOOT_STEP: u8 = 4;

/// Hold at full boot progress before the lock screen appears.
pub const BOOT_HOLD: Duration = Duration::from_millis(500);

/// Window within which two lock presses count as a double press.
pub const LOCK_DOUBLE_PRESS: Duration = Duration::from_millis(300);

/// Number of onboarding tutorial steps.
pub const TUTORIAL_STEPS: usize = 6;

/// Aggregate UI state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Phone lifecycle.
    device: DeviceController,
    /// Lock-screen passcode entry.
    passcode: PasscodeMachine,
    /// Home-screen page navigation.
    pager: Pager,
    /// Exclusive app overlay.
    overlay: OverlayRouter,
    /// Current onboarding tutorial step.
    tutorial_step: usize,
    /// Boot progress, 0..=100.
    boot_progress: u8,
    /// Deadline for the hold after boot progress completes.
    boot_hold: Option<Instant>,
    /// Focused slot: grid icons of the current page, then the dock.
    focus: usize,
    /// Guestbook view state.
    guestbook: GuestbookState,
    /// Weather view state.
    weather: WeatherState,
    /// Last lock press, for double-press detection.
    last_lock_press: Option<Instant>,
    /// Lock-screen swipe session start row.
    pointer_start_y: Option<i32>,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Error banner, dismissed by the next key press.
    status_message: Option<String>,
}

impl App {
    /// Create a new App with the given passcode secret and startup flags.
    pub fn new(secret: impl Into<String>, flags: StartupFlags) -> Self {
        let guestbook = GuestbookState {
            name: flags.guest_name.unwrap_or_default(),
            my_ids: flags.authored_ids,
            ..GuestbookState::default()
        };
        Self {
            device: DeviceController::new(flags.onboarded),
            passcode: PasscodeMachine::new(secret),
            pager: Pager::new(PAGE_COUNT),
            overlay: OverlayRouter::new(),
            tutorial_step: 0,
            boot_progress: 0,
            boot_hold: None,
            focus: 0,
            guestbook,
            weather: WeatherState::Loading,
            last_lock_press: None,
            pointer_start_y: None,
            terminal_size: (80, 24),
            status_message: None,
        }
    }

    /// Process an event and return actions for the runtime.
    pub fn handle(&mut self, event: AppEvent, now: Instant) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key, now),
            AppEvent::PointerDown { x, y, touches } => self.handle_pointer_down(x, y, touches),
            AppEvent::PointerMove { x, .. } => self.handle_pointer_move(x),
            AppEvent::PointerUp { x, y } => self.handle_pointer_up(x, y),
            AppEvent::Tapped(tap) => self.handle_tap(tap, now),
            AppEvent::Tick => self.handle_tick(now),
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::GuestbookLoaded(entries) => {
                self.guestbook.loading = false;
                self.guestbook.entries = entries;
                vec![AppAction::Render]
            },
            AppEvent::GuestbookMessage(entry) => {
                if self.guestbook.push_deduped(entry) {
                    vec![AppAction::Render]
                } else {
                    vec![]
                }
            },
            AppEvent::GuestbookSent(entry) => {
                self.guestbook.my_ids.push(entry.id);
                let encoded = StartupFlags::encode_authored_ids(&self.guestbook.my_ids);
                let _ = self.guestbook.push_deduped(entry);
                vec![
                    AppAction::SetFlag { key: FlagKey::AuthoredIds, value: encoded },
                    AppAction::Render,
                ]
            },
            AppEvent::GuestbookFailed(message) => {
                self.status_message = Some(format!("Error: {message}"));
                vec![AppAction::Render]
            },
            AppEvent::WeatherLoaded(report) => {
                self.weather = WeatherState::Loaded(report);
                vec![AppAction::Render]
            },
            AppEvent::WeatherFailed(message) => {
                // Logged and degraded: the surface keeps its loading state.
                self.status_message = Some(format!("Error: {message}"));
                vec![AppAction::Render]
            },
        }
    }

    /// Advance deadline-driven state: boot progress, passcode delays, and
    /// overlay animation phases.
    fn handle_tick(&mut self, now: Instant) -> Vec<AppAction> {
        match self.device.phase() {
            DevicePhase::Onboarding => vec![],
            DevicePhase::Booting => self.tick_boot(now),
            DevicePhase::Locked => match self.passcode.tick(now) {
                PasscodeOutcome::Unlocked => self.finish_unlock(),
                PasscodeOutcome::Changed => vec![AppAction::Render],
                PasscodeOutcome::None => vec![],
            },
            DevicePhase::Unlocked => {
                if self.overlay.tick(now) {
                    vec![AppAction::Render]
                } else {
                    vec![]
                }
            },
        }
    }

    fn tick_boot(&mut self, now: Instant) -> Vec<AppAction> {
        if self.boot_progress < 100 {
            self.boot_progress = self.boot_progress.saturating_add(BOOT_STEP).min(100);
            if self.boot_progress == 100 {
                self.boot_hold = Some(now + BOOT_HOLD);
            }
            return vec![AppAction::Render];
        }
        match self.boot_hold {
            Some(until) if now >= until => {
                self.boot_hold = None;
                let _ = self.device.complete_boot();
                vec![AppAction::Render]
            },
            _ => vec![],
        }
    }

    /// Passcode success delay elapsed: unlock and announce exactly once.
    fn finish_unlock(&mut self) -> Vec<AppAction> {
        if self.device.unlock() {
            vec![AppAction::Announce("Unlocked".into()), AppAction::Render]
        } else {
            vec![]
        }
    }

    /// Re-lock: drop any overlay instantly, abandon gestures, lock.
    fn relock(&mut self) -> Vec<AppAction> {
        self.last_lock_press = None;
        if self.device.lock() {
            let _ = self.overlay.reset();
            self.pager.cancel_drag();
            vec![AppAction::Announce("Locked".into()), AppAction::Render]
        } else {
            vec![]
        }
    }

    /// Handle keyboard input. Any key press dismisses the error banner.
    fn handle_key(&mut self, key: KeyInput, now: Instant) -> Vec<AppAction> {
        let banner_dismissed = self.status_message.take().is_some();
        let mut actions = match self.device.phase() {
            DevicePhase::Onboarding => self.handle_tutorial_key(key),
            DevicePhase::Booting => vec![],
            DevicePhase::Locked => self.handle_lock_key(key, now),
            DevicePhase::Unlocked => {
                if self.overlay.is_active() {
                    self.handle_overlay_key(key, now)
                } else {
                    self.handle_home_key(key, now)
                }
            },
        };
        if banner_dismissed && !actions.contains(&AppAction::Render) {
            actions.push(AppAction::Render);
        }
        actions
    }

    fn handle_tutorial_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Enter | KeyInput::Right => {
                if self.tutorial_step + 1 < TUTORIAL_STEPS {
                    self.tutorial_step += 1;
                    vec![AppAction::Render]
                } else {
                    self.complete_onboarding()
                }
            },
            KeyInput::Left => {
                if self.tutorial_step > 0 {
                    self.tutorial_step -= 1;
                    vec![AppAction::Render]
                } else {
                    vec![]
                }
            },
            KeyInput::Esc => self.complete_onboarding(),
            _ => vec![],
        }
    }

    fn complete_onboarding(&mut self) -> Vec<AppAction> {
        if self.device.acknowledge_onboarding() {
            vec![
                AppAction::SetFlag { key: FlagKey::Onboarded, value: "true".into() },
                AppAction::Render,
            ]
        } else {
            vec![]
        }
    }

    fn handle_lock_key(&mut self, key: KeyInput, now: Instant) -> Vec<AppAction> {
        if self.passcode.phase() == PasscodePhase::Hidden {
            return match key {
                KeyInput::Up | KeyInput::Enter => {
                    if self.passcode.reveal() {
                        vec![AppAction::Render]
                    } else {
                        vec![]
                    }
                },
                KeyInput::Char('q') => vec![AppAction::Quit],
                _ => vec![],
            };
        }
        match key {
            KeyInput::Char(c) if c.is_ascii_digit() => {
                match self.passcode.press_digit(c, now) {
                    PasscodeOutcome::None => vec![],
                    _ => vec![AppAction::Render],
                }
            },
            KeyInput::Backspace | KeyInput::Delete => {
                if self.passcode.delete() {
                    vec![AppAction::Render]
                } else {
                    vec![]
                }
            },
            KeyInput::Enter => match self.passcode.submit(now) {
                PasscodeOutcome::None => vec![],
                _ => vec![AppAction::Render],
            },
            KeyInput::Esc => {
                if self.passcode.cancel() {
                    vec![AppAction::Render]
                } else {
                    vec![]
                }
            },
            _ => vec![],
        }
    }

    fn handle_home_key(&mut self, key: KeyInput, now: Instant) -> Vec<AppAction> {
        match key {
            KeyInput::Left => self.change_page(|pager| pager.page_prev()),
            KeyInput::Right => self.change_page(|pager| pager.page_next()),
            KeyInput::Tab | KeyInput::Down => {
                self.focus = (self.focus + 1) % self.focus_len();
                vec![AppAction::Render]
            },
            KeyInput::Up => {
                self.focus = self.focus.checked_sub(1).unwrap_or(self.focus_len() - 1);
                vec![AppAction::Render]
            },
            KeyInput::Enter => {
                let app = self.focused_app();
                self.open_app(app)
            },
            KeyInput::Char(c) if c.is_ascii_digit() && c != '0' => {
                let slot = (c as usize) - ('1' as usize);
                match home_page(self.pager.page()).get(slot) {
                    Some(&app) => self.open_app(app),
                    None => vec![],
                }
            },
            KeyInput::Char('l') => self.handle_lock_press(now),
            KeyInput::Char('q') => vec![AppAction::Quit],
            _ => vec![],
        }
    }

    /// Double press within the window re-locks; a single press arms it.
    fn handle_lock_press(&mut self, now: Instant) -> Vec<AppAction> {
        match self.last_lock_press {
            Some(prev) if now.duration_since(prev) <= LOCK_DOUBLE_PRESS => self.relock(),
            _ => {
                self.last_lock_press = Some(now);
                vec![]
            },
        }
    }

    fn handle_overlay_key(&mut self, key: KeyInput, now: Instant) -> Vec<AppAction> {
        let in_guestbook = self.overlay.active() == Some(AppId::Messages);
        match key {
            KeyInput::Esc => self.close_overlay(now),
            KeyInput::Backspace if !in_guestbook => self.close_overlay(now),
            // The lock gesture floats above any open overlay.
            KeyInput::Char('l') if !in_guestbook => self.handle_lock_press(now),
            KeyInput::Tab if in_guestbook => {
                self.guestbook.editing_name = !self.guestbook.editing_name;
                vec![AppAction::Render]
            },
            KeyInput::Char(c) if in_guestbook => {
                if self.guestbook.editing_name {
                    self.guestbook.name.push(c);
                } else {
                    self.guestbook.input.push(c);
                }
                vec![AppAction::Render]
            },
            KeyInput::Backspace if in_guestbook => {
                if self.guestbook.editing_name {
                    let _ = self.guestbook.name.pop();
                } else {
                    let _ = self.guestbook.input.pop();
                }
                vec![AppAction::Render]
            },
            KeyInput::Enter if in_guestbook => self.send_guestbook_draft(),
            _ => vec![],
        }
    }

    fn send_guestbook_draft(&mut self) -> Vec<AppAction> {
        if self.guestbook.input.trim().is_empty() {
            return vec![];
        }
        let text = std::mem::take(&mut self.guestbook.input);
        let name = self.guestbook.name.trim().to_owned();
        let sender = if name.is_empty() { "Guest".to_owned() } else { name.clone() };

        let mut actions = Vec::new();
        if !name.is_empty() {
            actions.push(AppAction::SetFlag { key: FlagKey::GuestName, value: name });
        }
        actions.push(AppAction::SendGuestbook { text, sender });
        actions.push(AppAction::Render);
        actions
    }

    fn handle_pointer_down(&mut self, x: i32, y: i32, touches: u8) -> Vec<AppAction> {
        match self.device.phase() {
            DevicePhase::Locked if self.passcode.phase() == PasscodePhase::Hidden => {
                self.pointer_start_y = Some(y);
            },
            DevicePhase::Unlocked if !self.overlay.is_active() => {
                self.pager.pointer_down(x, touches);
            },
            _ => {},
        }
        vec![]
    }

    fn handle_pointer_move(&mut self, x: i32) -> Vec<AppAction> {
        if self.device.phase() == DevicePhase::Unlocked
            && !self.overlay.is_active()
            && self.pager.pointer_move(x)
        {
            self.clamp_focus();
            return vec![AppAction::Render];
        }
        vec![]
    }

    fn handle_pointer_up(&mut self, x: i32, y: i32) -> Vec<AppAction> {
        match self.device.phase() {
            DevicePhase::Locked => {
                if let Some(start_y) = self.pointer_start_y.take()
                    && self.passcode.swipe_up(start_y - y)
                {
                    return vec![AppAction::Render];
                }
                vec![]
            },
            DevicePhase::Unlocked if !self.overlay.is_active() => {
                if self.pager.pointer_up(x) {
                    self.clamp_focus();
                    vec![AppAction::Render]
                } else {
                    vec![]
                }
            },
            _ => {
                self.pager.cancel_drag();
                vec![]
            },
        }
    }

    fn handle_tap(&mut self, tap: Tap, now: Instant) -> Vec<AppAction> {
        match self.device.phase() {
            DevicePhase::Locked => match tap {
                Tap::Digit(d) => match self.passcode.press_digit(d, now) {
                    PasscodeOutcome::None => vec![],
                    _ => vec![AppAction::Render],
                },
                Tap::PasscodeCancel => {
                    if self.passcode.cancel() {
                        vec![AppAction::Render]
                    } else {
                        vec![]
                    }
                },
                Tap::PasscodeDelete => {
                    if self.passcode.delete() {
                        vec![AppAction::Render]
                    } else {
                        vec![]
                    }
                },
                _ => vec![],
            },
            DevicePhase::Unlocked if self.overlay.is_active() => match tap {
                Tap::CloseOverlay => self.close_overlay(now),
                Tap::LockButton => self.handle_lock_press(now),
                _ => vec![],
            },
            DevicePhase::Unlocked => match tap {
                Tap::Icon(app) | Tap::Dock(app) => self.open_app(app),
                Tap::PageDot(index) => self.change_page(|pager| pager.set_page(index)),
                Tap::PageLeft => self.change_page(|pager| pager.page_prev()),
                Tap::PageRight => self.change_page(|pager| pager.page_next()),
                Tap::LockButton => self.handle_lock_press(now),
                _ => vec![],
            },
            _ => vec![],
        }
    }

    fn change_page(&mut self, op: impl FnOnce(&mut Pager) -> bool) -> Vec<AppAction> {
        if op(&mut self.pager) {
            self.clamp_focus();
            vec![AppAction::Render]
        } else {
            vec![]
        }
    }

    /// Present an app overlay and kick off its collaborator fetches.
    fn open_app(&mut self, app: AppId) -> Vec<AppAction> {
        if !self.overlay.open(app) {
            return vec![];
        }
        self.pager.cancel_drag();

        let mut actions = Vec::new();
        if app == AppId::Weather && self.weather == WeatherState::Loading {
            actions.push(AppAction::FetchWeather);
        }
        if app == AppId::Messages {
            self.guestbook.loading = self.guestbook.entries.is_empty();
            actions.push(AppAction::LoadGuestbook);
        }
        actions.push(AppAction::Render);
        actions
    }

    fn close_overlay(&mut self, now: Instant) -> Vec<AppAction> {
        if self.overlay.close(now) {
            vec![AppAction::Render]
        } else {
            vec![]
        }
    }

    fn focus_len(&self) -> usize {
        home_page(self.pager.page()).len() + DOCK.len()
    }

    fn clamp_focus(&mut self) {
        self.focus = self.focus.min(self.focus_len().saturating_sub(1));
    }

    /// App under the focus cursor: grid icons first, then the dock.
    pub fn focused_app(&self) -> AppId {
        let icons = home_page(self.pager.page());
        match icons.get(self.focus) {
            Some(&app) => app,
            None => DOCK[(self.focus - icons.len()).min(DOCK.len() - 1)],
        }
    }

    /// Current device phase.
    pub fn device_phase(&self) -> DevicePhase {
        self.device.phase()
    }

    /// Passcode machine (read-only view for rendering).
    pub fn passcode(&self) -> &PasscodeMachine {
        &self.passcode
    }

    /// Pager (read-only view for rendering).
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Overlay router (read-only view for rendering).
    pub fn overlay(&self) -> &OverlayRouter {
        &self.overlay
    }

    /// Current onboarding tutorial step.
    pub fn tutorial_step(&self) -> usize {
        self.tutorial_step
    }

    /// Boot progress, 0..=100.
    pub fn boot_progress(&self) -> u8 {
        self.boot_progress
    }

    /// Focused slot index.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Guestbook view state.
    pub fn guestbook(&self) -> &GuestbookState {
        &self.guestbook
    }

    /// Weather view state.
    pub fn weather(&self) -> &WeatherState {
        &self.weather
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use handset_core::OverlayState;

    use super::*;

    fn unlocked_app() -> (App, Instant) {
        let mut app = App::new("1234", StartupFlags { onboarded: true, ..Default::default() });
        let now = Instant::now();
        boot(&mut app, now);
        unlock(&mut app, now);
        (app, now)
    }

    fn boot(app: &mut App, now: Instant) {
        for _ in 0..30 {
            let _ = app.handle(AppEvent::Tick, now);
        }
        let _ = app.handle(AppEvent::Tick, now + BOOT_HOLD);
        assert_eq!(app.device_phase(), DevicePhase::Locked);
    }

    fn unlock(app: &mut App, now: Instant) {
        let _ = app.handle(AppEvent::Key(KeyInput::Up), now);
        for d in ['1', '2', '3', '4'] {
            let _ = app.handle(AppEvent::Key(KeyInput::Char(d)), now);
        }
        let _ = app.handle(AppEvent::Tick, now + handset_core::SUCCESS_DELAY);
        assert_eq!(app.device_phase(), DevicePhase::Unlocked);
    }

    #[test]
    fn unlock_announces_once() {
        let mut app = App::new("1234", StartupFlags { onboarded: true, ..Default::default() });
        let now = Instant::now();
        boot(&mut app, now);

        let _ = app.handle(AppEvent::Key(KeyInput::Up), now);
        for d in ['1', '2', '3', '4'] {
            let _ = app.handle(AppEvent::Key(KeyInput::Char(d)), now);
        }
        let actions = app.handle(AppEvent::Tick, now + handset_core::SUCCESS_DELAY);
        assert!(
            matches!(actions.as_slice(), [AppAction::Announce(_), AppAction::Render]),
            "unexpected actions: {actions:?}"
        );

        let actions = app.handle(AppEvent::Tick, now + handset_core::SUCCESS_DELAY * 2);
        assert!(actions.is_empty(), "unlock must not fire twice");
    }

    #[test]
    fn icon_tap_opens_overlay_and_suppresses_swipes() {
        let (mut app, now) = unlocked_app();

        let _ = app.handle(AppEvent::Tapped(Tap::Icon(AppId::Calendar)), now);
        assert_eq!(app.overlay().state(), OverlayState::Opening(AppId::Calendar));

        // Swipe of +80 while the overlay is up: page must not move.
        let _ = app.handle(AppEvent::PointerDown { x: 150, y: 10, touches: 1 }, now);
        let _ = app.handle(AppEvent::PointerUp { x: 70, y: 10 }, now);
        assert_eq!(app.pager().page(), 0);
    }

    #[test]
    fn overlay_closes_in_two_phases() {
        let (mut app, now) = unlocked_app();

        let _ = app.handle(AppEvent::Tapped(Tap::Icon(AppId::Notes)), now);
        let _ = app.handle(AppEvent::Tick, now);
        assert_eq!(app.overlay().state(), OverlayState::Open(AppId::Notes));

        let _ = app.handle(AppEvent::Key(KeyInput::Esc), now);
        assert!(app.overlay().is_active());
        assert!(!app.overlay().overlay_chrome());

        let _ = app.handle(AppEvent::Tick, now + handset_core::CLOSE_DELAY);
        assert_eq!(app.overlay().state(), OverlayState::Closed);
    }

    #[test]
    fn double_lock_press_relocks() {
        let (mut app, now) = unlocked_app();

        let _ = app.handle(AppEvent::Key(KeyInput::Char('l')), now);
        assert_eq!(app.device_phase(), DevicePhase::Unlocked);

        let actions =
            app.handle(AppEvent::Key(KeyInput::Char('l')), now + Duration::from_millis(100));
        assert_eq!(app.device_phase(), DevicePhase::Locked);
        assert!(matches!(actions.as_slice(), [AppAction::Announce(_), AppAction::Render]));
    }

    #[test]
    fn slow_lock_presses_do_not_relock() {
        let (mut app, now) = unlocked_app();
        let _ = app.handle(AppEvent::Key(KeyInput::Char('l')), now);
        let _ = app.handle(AppEvent::Key(KeyInput::Char('l')), now + Duration::from_millis(400));
        assert_eq!(app.device_phase(), DevicePhase::Unlocked);
    }

    #[test]
    fn lock_press_relocks_through_open_overlay() {
        let (mut app, now) = unlocked_app();
        let _ = app.handle(AppEvent::Tapped(Tap::Icon(AppId::Calendar)), now);
        assert!(app.overlay().is_active());

        let _ = app.handle(AppEvent::Key(KeyInput::Char('l')), now);
        let _ = app.handle(AppEvent::Key(KeyInput::Char('l')), now + Duration::from_millis(100));
        assert_eq!(app.device_phase(), DevicePhase::Locked);
        assert!(!app.overlay().is_active());
    }

    #[test]
    fn lock_button_tap_relocks_through_open_overlay() {
        let (mut app, now) = unlocked_app();
        let _ = app.handle(AppEvent::Tapped(Tap::Icon(AppId::Settings)), now);

        let _ = app.handle(AppEvent::Tapped(Tap::LockButton), now);
        let _ = app.handle(AppEvent::Tapped(Tap::LockButton), now + Duration::from_millis(100));
        assert_eq!(app.device_phase(), DevicePhase::Locked);
        assert!(!app.overlay().is_active());
    }

    #[test]
    fn lock_key_in_guestbook_types_instead_of_arming_relock() {
        let (mut app, now) = unlocked_app();
        let _ = app.handle(AppEvent::Tapped(Tap::Icon(AppId::Messages)), now);

        let _ = app.handle(AppEvent::Key(KeyInput::Char('l')), now);
        let _ = app.handle(AppEvent::Key(KeyInput::Char('l')), now + Duration::from_millis(100));
        assert_eq!(app.device_phase(), DevicePhase::Unlocked);
        assert_eq!(app.guestbook().input, "ll");
    }

    #[test]
    fn error_banner_clears_on_next_key_press() {
        let (mut app, now) = unlocked_app();
        let _ = app.handle(AppEvent::WeatherFailed("request timed out".into()), now);
        assert!(app.status_message().is_some());

        let actions = app.handle(AppEvent::Key(KeyInput::Tab), now);
        assert_eq!(app.status_message(), None);
        assert!(actions.contains(&AppAction::Render));
    }

    #[test]
    fn error_banner_rerenders_even_when_the_key_is_a_no_op() {
        let (mut app, now) = unlocked_app();
        let _ = app.handle(AppEvent::GuestbookFailed("disk full".into()), now);

        let actions = app.handle(AppEvent::Key(KeyInput::Char('x')), now);
        assert_eq!(app.status_message(), None);
        assert_eq!(actions, vec![AppAction::Render]);
    }

    #[test]
    fn weather_open_requests_fetch_once_loaded_is_cached() {
        let (mut app, now) = unlocked_app();

        let actions = app.handle(AppEvent::Tapped(Tap::Icon(AppId::Weather)), now);
        assert!(actions.contains(&AppAction::FetchWeather));

        let report = crate::WeatherReport {
            temperature: 21.0,
            weather_code: 0,
            is_day: true,
            hourly: vec![],
            daily: vec![],
        };
        let _ = app.handle(AppEvent::WeatherLoaded(report), now);

        // Close fully, reopen: no second fetch.
        let _ = app.handle(AppEvent::Tick, now);
        let _ = app.handle(AppEvent::Key(KeyInput::Esc), now);
        let _ = app.handle(AppEvent::Tick, now + handset_core::CLOSE_DELAY);
        let actions = app.handle(AppEvent::Tapped(Tap::Icon(AppId::Weather)), now);
        assert!(!actions.contains(&AppAction::FetchWeather));
    }

    #[test]
    fn guestbook_send_persists_name_and_authored_id() {
        let (mut app, now) = unlocked_app();
        let _ = app.handle(AppEvent::Tapped(Tap::Dock(AppId::Messages)), now);
        let _ = app.handle(AppEvent::Tick, now);

        let _ = app.handle(AppEvent::Key(KeyInput::Tab), now);
        for c in "Ada".chars() {
            let _ = app.handle(AppEvent::Key(KeyInput::Char(c)), now);
        }
        let _ = app.handle(AppEvent::Key(KeyInput::Tab), now);
        for c in "hi".chars() {
            let _ = app.handle(AppEvent::Key(KeyInput::Char(c)), now);
        }

        let actions = app.handle(AppEvent::Key(KeyInput::Enter), now);
        assert!(actions.iter().any(|a| matches!(
            a,
            AppAction::SetFlag { key: FlagKey::GuestName, .. }
        )));
        assert!(
            actions
                .iter()
                .any(|a| matches!(a, AppAction::SendGuestbook { text, sender }
                    if text == "hi" && sender == "Ada"))
        );

        let entry = crate::GuestbookEntry {
            id: 7,
            text: "hi".into(),
            sender: "Ada".into(),
            created_at: "2026-08-30T12:00:00Z".into(),
        };
        let actions = app.handle(AppEvent::GuestbookSent(entry), now);
        assert!(actions.iter().any(|a| matches!(
            a,
            AppAction::SetFlag { key: FlagKey::AuthoredIds, .. }
        )));
        assert_eq!(app.guestbook().entries.len(), 1);
    }

    #[test]
    fn onboarding_completion_persists_flag() {
        let mut app = App::new("1234", StartupFlags::default());
        let now = Instant::now();
        assert_eq!(app.device_phase(), DevicePhase::Onboarding);

        for _ in 0..TUTORIAL_STEPS - 1 {
            let _ = app.handle(AppEvent::Key(KeyInput::Enter), now);
        }
        let actions = app.handle(AppEvent::Key(KeyInput::Enter), now);
        assert!(actions.iter().any(|a| matches!(
            a,
            AppAction::SetFlag { key: FlagKey::Onboarded, .. }
        )));
        assert_eq!(app.device_phase(), DevicePhase::Booting);
    }

    #[test]
    fn lock_swipe_up_reveals_keypad() {
        let mut app = App::new("1234", StartupFlags { onboarded: true, ..Default::default() });
        let now = Instant::now();
        boot(&mut app, now);

        let _ = app.handle(AppEvent::PointerDown { x: 40, y: 100, touches: 1 }, now);
        let _ = app.handle(AppEvent::PointerUp { x: 40, y: 30 }, now);
        assert_eq!(app.passcode().phase(), PasscodePhase::Entry);
    }
}
