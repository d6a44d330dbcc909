//! Device-local persisted flags.
//!
//! A small set of string key/value flags survives restarts: whether
//! onboarding completed, the guestbook display name, and the ids of
//! guestbook rows authored on this device. The store itself is injected:
//! values are read once at startup into [`StartupFlags`] and written back
//! through [`crate::AppAction::SetFlag`], so the state machine never touches
//! storage directly.

/// Key of one persisted flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKey {
    /// Onboarding tutorial completed on this device.
    Onboarded,
    /// Display name used when signing the guestbook.
    GuestName,
    /// JSON array of guestbook row ids authored on this device.
    AuthoredIds,
}

impl FlagKey {
    /// Stable storage key.
    pub fn as_str(self) -> &'static str {
        match self {
            FlagKey::Onboarded => "onboarded",
            FlagKey::GuestName => "guest_name",
            FlagKey::AuthoredIds => "authored_ids",
        }
    }
}

/// Flag values read at startup.
#[derive(Debug, Clone, Default)]
pub struct StartupFlags {
    /// Onboarding already completed; skip the tutorial.
    pub onboarded: bool,
    /// Previously chosen guestbook display name, if any.
    pub guest_name: Option<String>,
    /// Guestbook row ids authored on this device.
    pub authored_ids: Vec<u64>,
}

impl StartupFlags {
    /// Decode flags from their stored string forms. Unreadable values fall
    /// back to defaults rather than failing startup.
    pub fn decode(
        onboarded: Option<&str>,
        guest_name: Option<&str>,
        authored_ids: Option<&str>,
    ) -> Self {
        let authored_ids = authored_ids
            .and_then(|raw| serde_json::from_str::<Vec<u64>>(raw).ok())
            .unwrap_or_default();
        Self {
            onboarded: onboarded == Some("true"),
            guest_name: guest_name.map(str::to_owned).filter(|name| !name.is_empty()),
            authored_ids,
        }
    }

    /// Encode the authored-id list for storage.
    pub fn encode_authored_ids(ids: &[u64]) -> String {
        serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_missing_flags_defaults() {
        let flags = StartupFlags::decode(None, None, None);
        assert!(!flags.onboarded);
        assert!(flags.guest_name.is_none());
        assert!(flags.authored_ids.is_empty());
    }

    #[test]
    fn decode_round_trip() {
        let encoded = StartupFlags::encode_authored_ids(&[3, 17]);
        let flags = StartupFlags::decode(Some("true"), Some("Ada"), Some(&encoded));
        assert!(flags.onboarded);
        assert_eq!(flags.guest_name.as_deref(), Some("Ada"));
        assert_eq!(flags.authored_ids, vec![3, 17]);
    }

    #[test]
    fn corrupt_id_list_is_ignored() {
        let flags = StartupFlags::decode(Some("true"), None, Some("not json"));
        assert!(flags.authored_ids.is_empty());
    }
}
