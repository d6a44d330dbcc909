//! Device-local persistence.
//!
//! Two small file-backed stores live under one data directory:
//!
//! - [`FlagStore`]: a JSON map of string flags (`flags.json`), read once at
//!   startup and rewritten on every change.
//! - [`Guestbook`]: an append-only JSONL table of guestbook rows
//!   (`guestbook.jsonl`). Each line is one [`GuestbookEntry`]. A subscription
//!   polls the file and reports rows appended after the initial load, so a
//!   second running instance shows new messages live.
//!
//! Production code uses [`StorePaths::default`], which points to the
//! platform data directory; tests inject a temp directory with
//! [`StorePaths::with_root`].

use std::{
    collections::HashMap,
    fs,
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use handset_app::GuestbookEntry;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error reading or writing a store file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A store file holds malformed JSON.
    #[error("malformed store file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Central configuration for the data directory.
#[derive(Debug, Clone)]
pub struct StorePaths {
    root: PathBuf,
}

impl Default for StorePaths {
    fn default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self { root: base.join("handset") }
    }
}

impl StorePaths {
    /// Creates store paths rooted at a custom directory. Used for testing
    /// with temp directories.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to flags.json (persisted startup flags).
    pub fn flags_file(&self) -> PathBuf {
        self.root.join("flags.json")
    }

    /// Path to guestbook.jsonl (guestbook rows, one JSON object per line).
    pub fn guestbook_file(&self) -> PathBuf {
        self.root.join("guestbook.jsonl")
    }

    /// Path to handset.log (tracing output).
    pub fn log_file(&self) -> PathBuf {
        self.root.join("handset.log")
    }
}

/// JSON-map flag store.
#[derive(Debug, Clone)]
pub struct FlagStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FlagStore {
    /// Load the flag map. A missing file yields an empty store; a corrupt
    /// file is discarded with a warning rather than failing startup.
    pub fn load(paths: &StorePaths) -> Self {
        let path = paths.flags_file();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!("discarding corrupt flag store {}: {e}", path.display());
                    HashMap::new()
                },
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                tracing::warn!("failed to read flag store {}: {e}", path.display());
                HashMap::new()
            },
        };
        Self { path, values }
    }

    /// Current value of a flag.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a flag and rewrite the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// Append-only guestbook table.
#[derive(Debug, Clone)]
pub struct Guestbook {
    path: PathBuf,
}

impl Guestbook {
    /// Open the guestbook at the configured path. The file is created lazily
    /// on first insert.
    pub fn open(paths: &StorePaths) -> Self {
        Self { path: paths.guestbook_file() }
    }

    /// All rows in insertion order. Unparseable lines are skipped with a
    /// warning; a missing file is an empty table.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn fetch_all(&self) -> Result<Vec<GuestbookEntry>, StoreError> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut rows = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(row) => rows.push(row),
                Err(e) => tracing::warn!("skipping malformed guestbook row: {e}"),
            }
        }
        Ok(rows)
    }

    /// Rows with an id greater than `after_id`. Drives the poll-based
    /// subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn fetch_after(&self, after_id: u64) -> Result<Vec<GuestbookEntry>, StoreError> {
        let mut rows = self.fetch_all()?;
        rows.retain(|row| row.id > after_id);
        Ok(rows)
    }

    /// Append a row, assigning the next id, and return it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn insert(&self, text: &str, sender: &str) -> Result<GuestbookEntry, StoreError> {
        let next_id = self.fetch_all()?.last().map_or(1, |row| row.id + 1);
        let entry = GuestbookEntry {
            id: next_id,
            text: text.to_owned(),
            sender: sender.to_owned(),
            created_at: now_rfc3339(),
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::OpenOptions::new().create(true).append(true).open(&self.path)?;
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');
        file.write_all(line.as_bytes())?;
        Ok(entry)
    }
}

/// Wall-clock timestamp in RFC 3339 form, UTC, second precision.
fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_paths() -> (tempfile::TempDir, StorePaths) {
        let dir = tempfile::tempdir().unwrap();
        let paths = StorePaths::with_root(dir.path());
        (dir, paths)
    }

    #[test]
    fn flag_store_round_trip() {
        let (_dir, paths) = temp_paths();
        let mut store = FlagStore::load(&paths);
        assert!(store.get("onboarded").is_none());

        store.set("onboarded", "true").unwrap();
        store.set("guest_name", "Ada").unwrap();

        let reloaded = FlagStore::load(&paths);
        assert_eq!(reloaded.get("onboarded"), Some("true"));
        assert_eq!(reloaded.get("guest_name"), Some("Ada"));
    }

    #[test]
    fn corrupt_flag_file_yields_empty_store() {
        let (_dir, paths) = temp_paths();
        fs::create_dir_all(paths.root()).unwrap();
        fs::write(paths.flags_file(), "{ not json").unwrap();
        let store = FlagStore::load(&paths);
        assert!(store.get("onboarded").is_none());
    }

    #[test]
    fn guestbook_assigns_sequential_ids() {
        let (_dir, paths) = temp_paths();
        let book = Guestbook::open(&paths);
        let a = book.insert("first", "A").unwrap();
        let b = book.insert("second", "B").unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        let rows = book.fetch_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].text, "second");
    }

    #[test]
    fn fetch_after_returns_only_newer_rows() {
        let (_dir, paths) = temp_paths();
        let book = Guestbook::open(&paths);
        let _ = book.insert("first", "A").unwrap();
        let second = book.insert("second", "B").unwrap();

        let newer = book.fetch_after(1).unwrap();
        assert_eq!(newer, vec![second]);
        assert!(book.fetch_after(2).unwrap().is_empty());
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let (_dir, paths) = temp_paths();
        let book = Guestbook::open(&paths);
        let _ = book.insert("good", "A").unwrap();
        let mut file = fs::OpenOptions::new().append(true).open(paths.guestbook_file()).unwrap();
        file.write_all(b"not json\n").unwrap();

        let rows = book.fetch_all().unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn timestamp_is_rfc3339_shaped() {
        let stamp = now_rfc3339();
        assert!(stamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
    }
}
