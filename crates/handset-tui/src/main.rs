//! Handset TUI entry point.

use std::{fs, path::PathBuf};

use clap::Parser;
use handset_app::{App, FlagKey, Runtime, StartupFlags};
use handset_tui::{
    TerminalDriver,
    speech::Announcer,
    store::{FlagStore, Guestbook, StorePaths},
    weather,
};
use tracing_subscriber::EnvFilter;

/// A smartphone-shaped portfolio in your terminal
#[derive(Parser, Debug)]
#[command(name = "handset")]
#[command(about = "A smartphone-shaped portfolio, rendered in the terminal")]
#[command(version)]
struct Args {
    /// Lock-screen passcode
    #[arg(long, default_value = "1234")]
    passcode: String,

    /// Data directory for flags, the guestbook, and logs
    ///
    /// Defaults to the platform data directory.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Weather forecast endpoint
    #[arg(long, default_value = weather::DEFAULT_URL)]
    weather_url: String,

    /// Skip all network access; the weather surface stays in loading
    #[arg(long)]
    offline: bool,

    /// Show the onboarding tutorial again, ignoring the persisted flag
    #[arg(long)]
    reset_onboarding: bool,

    /// Disable speech announcements
    #[arg(long)]
    no_speech: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let paths = match args.data_dir {
        Some(dir) => StorePaths::with_root(dir),
        None => StorePaths::default(),
    };
    init_tracing(&paths)?;

    let flags = FlagStore::load(&paths);
    let mut startup = StartupFlags::decode(
        flags.get(FlagKey::Onboarded.as_str()),
        flags.get(FlagKey::GuestName.as_str()),
        flags.get(FlagKey::AuthoredIds.as_str()),
    );
    if args.reset_onboarding {
        startup.onboarded = false;
    }

    let app = App::new(args.passcode, startup);
    let driver = TerminalDriver::new(
        flags,
        Guestbook::open(&paths),
        (!args.offline).then_some(args.weather_url),
        Announcer::new(!args.no_speech),
    )?;

    Ok(Runtime::new(driver, app).run().await?)
}

/// Route tracing to a log file; the terminal itself belongs to the UI.
/// Level comes from `RUST_LOG`, defaulting to `info`.
fn init_tracing(paths: &StorePaths) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(paths.root())?;
    let file = fs::OpenOptions::new().create(true).append(true).open(paths.log_file())?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}
