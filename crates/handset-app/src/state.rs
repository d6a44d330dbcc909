//! Observable application state types.
//!
//! View-model structures for the guestbook and weather surfaces. They carry
//! the subset of collaborator state the renderer needs, without exposing the
//! storage or HTTP details behind it.

use serde::{Deserialize, Serialize};

/// One row of the guestbook message table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestbookEntry {
    /// Row id assigned by the store.
    pub id: u64,
    /// Message body.
    pub text: String,
    /// Display name of the author.
    pub sender: String,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
}

/// Guestbook view state for the Messages overlay.
#[derive(Debug, Clone, Default)]
pub struct GuestbookState {
    /// Rows in creation order.
    pub entries: Vec<GuestbookEntry>,
    /// Initial fetch still in flight.
    pub loading: bool,
    /// Message draft.
    pub input: String,
    /// Display name draft; defaults to "Guest" when left empty.
    pub name: String,
    /// Whether typing edits the name field instead of the message field.
    pub editing_name: bool,
    /// Row ids authored on this device (drives right-aligned bubbles).
    pub my_ids: Vec<u64>,
}

impl GuestbookState {
    /// Whether this row was authored on this device.
    pub fn is_mine(&self, entry: &GuestbookEntry) -> bool {
        self.my_ids.contains(&entry.id)
    }

    /// Append a row unless an equal id is already present.
    pub fn push_deduped(&mut self, entry: GuestbookEntry) -> bool {
        if self.entries.iter().any(|existing| existing.id == entry.id) {
            return false;
        }
        self.entries.push(entry);
        true
    }
}

/// Decoded weather data for the Weather overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// Current temperature, °C.
    pub temperature: f64,
    /// Current WMO weather code.
    pub weather_code: u8,
    /// Daylight at the observation time.
    pub is_day: bool,
    /// Upcoming hours, starting from now.
    pub hourly: Vec<HourForecast>,
    /// Seven-day outlook.
    pub daily: Vec<DayForecast>,
}

/// One hourly forecast slot.
#[derive(Debug, Clone, PartialEq)]
pub struct HourForecast {
    /// Slot time label (e.g. "14:00").
    pub time: String,
    /// WMO weather code.
    pub weather_code: u8,
    /// Temperature, °C.
    pub temperature: f64,
}

/// One daily forecast row.
#[derive(Debug, Clone, PartialEq)]
pub struct DayForecast {
    /// Date label (e.g. "2026-08-30").
    pub date: String,
    /// WMO weather code.
    pub weather_code: u8,
    /// Daily high, °C.
    pub high: f64,
    /// Daily low, °C.
    pub low: f64,
}

/// Weather surface state.
///
/// A failed fetch stays in `Loading` visually; the failure is logged and the
/// spinner keeps spinning. There is no retry.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WeatherState {
    /// No data yet (or the fetch failed).
    #[default]
    Loading,
    /// Forecast available.
    Loaded(WeatherReport),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64) -> GuestbookEntry {
        GuestbookEntry {
            id,
            text: format!("message {id}"),
            sender: "Guest".into(),
            created_at: "2026-08-30T12:00:00Z".into(),
        }
    }

    #[test]
    fn push_deduped_rejects_known_id() {
        let mut state = GuestbookState::default();
        assert!(state.push_deduped(entry(1)));
        assert!(!state.push_deduped(entry(1)));
        assert_eq!(state.entries.len(), 1);
    }

    #[test]
    fn is_mine_checks_authored_ids() {
        let state = GuestbookState { my_ids: vec![2], ..GuestbookState::default() };
        assert!(state.is_mine(&entry(2)));
        assert!(!state.is_mine(&entry(3)));
    }
}
