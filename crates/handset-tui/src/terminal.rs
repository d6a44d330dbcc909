//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard and mouse events and ratatui for rendering. Collaborator work
//! (weather fetch, guestbook I/O) runs on background tasks whose results
//! come back through a channel and surface as [`AppEvent`]s.
//!
//! Pointer handling: a left-button press/drag/release maps onto the app's
//! pointer session events. A release that barely moved is additionally
//! hit-tested against the rendered layout and queued as a tap. Holding Ctrl
//! while dragging reports three touch points, arming the trackpad-style
//! page gesture.

use std::{
    collections::VecDeque,
    io::{self, Stdout, stdout},
    time::Instant,
};

use crossterm::{
    ExecutableCommand,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, size},
};
use futures::StreamExt;
use handset_app::{App, AppEvent, Driver, FlagKey, KeyInput, Tap};
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tokio::{sync::mpsc, task::JoinSet, time::Duration};

use crate::{
    speech::Announcer,
    store::{FlagStore, Guestbook, StoreError},
    ui, weather,
};

/// Event-loop tick period; drives machine deadlines and boot progress.
const TICK: Duration = Duration::from_millis(100);

/// Poll period of the guestbook subscription.
const SUBSCRIBE_POLL: Duration = Duration::from_millis(500);

/// Releases within this displacement count as taps, not drags.
const TAP_SLOP: u16 = 1;

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Flag store write failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm), rendering (ratatui), persistence
/// (flag store and guestbook files), the weather fetch (reqwest), and
/// speech announcements.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    /// Events decoded but not yet delivered (a tap queued behind its
    /// pointer-up, completed background work).
    pending: VecDeque<AppEvent>,
    background_tx: mpsc::UnboundedSender<AppEvent>,
    background_rx: mpsc::UnboundedReceiver<AppEvent>,
    tasks: JoinSet<()>,
    flags: FlagStore,
    guestbook: Guestbook,
    subscribed: bool,
    http: reqwest::Client,
    /// Forecast endpoint; `None` in offline mode.
    weather_url: Option<String>,
    speech: Announcer,
    /// Position of the current left-button press, for tap detection.
    press: Option<(u16, u16)>,
}

impl TerminalDriver {
    /// Create a new terminal driver and enter the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or the alternate screen cannot be
    /// entered.
    pub fn new(
        flags: FlagStore,
        guestbook: Guestbook,
        weather_url: Option<String>,
        speech: Announcer,
    ) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        stdout().execute(EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let (background_tx, background_rx) = mpsc::unbounded_channel();

        // Crossterm only reports size changes, so deliver the starting size
        // ourselves or hit-testing runs against a guessed layout until the
        // first resize.
        let (cols, rows) = size()?;
        let mut pending = VecDeque::new();
        pending.push_back(AppEvent::Resize(cols, rows));

        Ok(Self {
            terminal,
            event_stream: EventStream::new(),
            pending,
            background_tx,
            background_rx,
            tasks: JoinSet::new(),
            flags,
            guestbook,
            subscribed: false,
            http: reqwest::Client::new(),
            weather_url,
            speech,
            press: None,
        })
    }

    /// Convert crossterm `KeyCode` to `KeyInput`.
    fn convert_key(code: KeyCode) -> Option<KeyInput> {
        match code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Delete => Some(KeyInput::Delete),
            KeyCode::Tab => Some(KeyInput::Tab),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Up => Some(KeyInput::Up),
            KeyCode::Down => Some(KeyInput::Down),
            _ => None,
        }
    }

    fn convert_mouse(&mut self, mouse: MouseEvent, app: &App) -> Option<AppEvent> {
        let (x, y) = (i32::from(mouse.column), i32::from(mouse.row));
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press = Some((mouse.column, mouse.row));
                let touches =
                    if mouse.modifiers.contains(KeyModifiers::CONTROL) { 3 } else { 1 };
                Some(AppEvent::PointerDown { x, y, touches })
            },
            MouseEventKind::Drag(MouseButton::Left) => Some(AppEvent::PointerMove { x, y }),
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(tap) = self.resolve_tap(mouse.column, mouse.row, app) {
                    self.pending.push_back(AppEvent::Tapped(tap));
                }
                self.press = None;
                Some(AppEvent::PointerUp { x, y })
            },
            _ => None,
        }
    }

    /// A release close to its press is a tap on whatever sits under it.
    fn resolve_tap(&self, x: u16, y: u16, app: &App) -> Option<Tap> {
        let (px, py) = self.press?;
        if px.abs_diff(x) > TAP_SLOP || py.abs_diff(y) > TAP_SLOP {
            return None;
        }
        ui::hit_test(app, x, y)
    }

    /// Start the poll-based guestbook subscription after the initial rows
    /// were read. Rows with ids beyond the last seen one are delivered as
    /// live messages.
    fn spawn_subscription(&mut self, mut last_id: u64) {
        if self.subscribed {
            return;
        }
        self.subscribed = true;

        let guestbook = self.guestbook.clone();
        let tx = self.background_tx.clone();
        self.tasks.spawn(async move {
            loop {
                tokio::time::sleep(SUBSCRIBE_POLL).await;
                match guestbook.fetch_after(last_id) {
                    Ok(rows) => {
                        for row in rows {
                            last_id = last_id.max(row.id);
                            if tx.send(AppEvent::GuestbookMessage(row)).is_err() {
                                return;
                            }
                        }
                    },
                    Err(e) => tracing::warn!("guestbook poll failed: {e}"),
                }
            }
        });
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self, app: &App) -> Result<Option<AppEvent>, Self::Error> {
        if let Some(event) = self.pending.pop_front() {
            return Ok(Some(event));
        }

        tokio::select! {
            biased;

            // Completed background work
            Some(event) = self.background_rx.recv() => Ok(Some(event)),

            // Terminal events
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                        Ok(Self::convert_key(key_event.code).map(AppEvent::Key))
                    },
                    Some(Ok(Event::Mouse(mouse_event))) => {
                        Ok(self.convert_mouse(mouse_event, app))
                    },
                    Some(Ok(Event::Resize(cols, rows))) => {
                        Ok(Some(AppEvent::Resize(cols, rows)))
                    },
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    _ => Ok(None),
                }
            }

            // Tick timeout
            () = tokio::time::sleep(TICK) => {
                Ok(Some(AppEvent::Tick))
            }
        }
    }

    async fn fetch_weather(&mut self) {
        let Some(url) = self.weather_url.clone() else {
            self.pending.push_back(AppEvent::WeatherFailed("offline mode".into()));
            return;
        };
        let client = self.http.clone();
        let tx = self.background_tx.clone();
        self.tasks.spawn(async move {
            let event = match weather::fetch(&client, &url).await {
                Ok(report) => AppEvent::WeatherLoaded(report),
                Err(e) => {
                    tracing::warn!("weather fetch failed: {e}");
                    AppEvent::WeatherFailed(e.to_string())
                },
            };
            let _ = tx.send(event);
        });
    }

    async fn load_guestbook(&mut self) {
        let rows = match self.guestbook.fetch_all() {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!("guestbook load failed: {e}");
                self.pending.push_back(AppEvent::GuestbookFailed(e.to_string()));
                return;
            },
        };
        let last_id = rows.last().map_or(0, |row| row.id);
        self.pending.push_back(AppEvent::GuestbookLoaded(rows));
        self.spawn_subscription(last_id);
    }

    async fn send_guestbook(&mut self, text: String, sender: String) {
        let guestbook = self.guestbook.clone();
        let tx = self.background_tx.clone();
        self.tasks.spawn(async move {
            let event = match guestbook.insert(&text, &sender) {
                Ok(entry) => AppEvent::GuestbookSent(entry),
                Err(e) => {
                    tracing::warn!("guestbook insert failed: {e}");
                    AppEvent::GuestbookFailed(e.to_string())
                },
            };
            let _ = tx.send(event);
        });
    }

    fn set_flag(&mut self, key: FlagKey, value: &str) -> Result<(), Self::Error> {
        self.flags.set(key.as_str(), value)?;
        Ok(())
    }

    fn announce(&mut self, line: &str) {
        self.speech.speak(line);
    }

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| {
            ui::render(frame, app);
        })?;
        Ok(())
    }

    fn stop(&mut self) {
        self.tasks.abort_all();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
        let _ = stdout().execute(DisableMouseCapture);
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
