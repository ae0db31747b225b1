//! Player roster.
//!
//! An ordered list of unique display names. The roster outlives a single
//! game session: it is persisted as an opaque JSON blob between app
//! launches and only ever cleared by an explicit user action.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum players required to start a session.
pub const MIN_PLAYERS: usize = 3;

/// Fixed storage key for the persisted roster blob.
pub const ROSTER_STORAGE_KEY: &str = "@imposter_players_list";

/// Ordered sequence of unique player names.
///
/// Serializes transparently as a JSON array of strings, matching the blob
/// format older app versions wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from existing names, keeping the first occurrence of
    /// any duplicate and dropping blank entries.
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut roster = Self::new();
        for name in names {
            let _ = roster.add(&name);
        }
        roster
    }

    /// Add a player. The name is trimmed; empty and duplicate names are
    /// rejected and leave the roster unchanged.
    pub fn add(&mut self, name: &str) -> Result<(), RosterError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(RosterError::EmptyName);
        }

        // Case-sensitive exact match
        if self.names.iter().any(|n| n == trimmed) {
            return Err(RosterError::DuplicateName(trimmed.to_string()));
        }

        self.names.push(trimmed.to_string());
        Ok(())
    }

    /// Remove the player at `index`, preserving the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.names.len() {
            Some(self.names.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Check if the roster is large enough to start a session.
    pub fn can_start(&self) -> bool {
        self.names.len() >= MIN_PLAYERS
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Serialize to the persistence blob.
    pub fn to_blob(&self) -> String {
        serde_json::to_string(&self.names).unwrap_or_else(|_| "[]".to_string())
    }

    /// Parse a persistence blob, falling back to an empty roster if the
    /// blob is malformed. Persistence failures never block the game.
    pub fn from_blob(blob: &str) -> Self {
        match serde_json::from_str::<Vec<String>>(blob) {
            Ok(names) => Self::from_names(names),
            Err(_) => Self::new(),
        }
    }

    /// Load from a storage collaborator, empty if absent or unreadable.
    pub fn load_from(store: &impl RosterStore) -> Self {
        match store.load(ROSTER_STORAGE_KEY) {
            Some(blob) => Self::from_blob(&blob),
            None => Self::new(),
        }
    }

    /// Save to a storage collaborator. Fire-and-forget: the store absorbs
    /// failures, the session never sees them.
    pub fn save_to(&self, store: &mut impl RosterStore) {
        store.save(ROSTER_STORAGE_KEY, &self.to_blob());
    }
}

/// Roster errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    EmptyName,
    DuplicateName(String),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Player name cannot be empty"),
            Self::DuplicateName(name) => {
                write!(f, "Player name '{}' is already taken", name)
            }
        }
    }
}

impl std::error::Error for RosterError {}

/// Storage collaborator for the roster blob.
///
/// Implementations wrap whatever key-value storage the platform offers.
/// `load` returns `None` when the key is absent or the read failed;
/// `save` failures are the implementation's to log, not the caller's.
pub trait RosterStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, blob: &str);
}

/// In-memory store, for tests and embedders without platform storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RosterStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, blob: &str) {
        self.entries.insert(key.to_string(), blob.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_players() {
        let mut roster = Roster::new();

        roster.add("Alice").unwrap();
        roster.add("Bob").unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(0), Some("Alice"));
        assert_eq!(roster.get(1), Some("Bob"));
        assert!(!roster.can_start());

        roster.add("Cara").unwrap();
        assert!(roster.can_start());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut roster = Roster::new();
        roster.add("Sam").unwrap();

        let result = roster.add("Sam");
        assert_eq!(result, Err(RosterError::DuplicateName("Sam".to_string())));
        assert_eq!(roster.names(), &["Sam".to_string()]);

        // Case-sensitive: "sam" is a different player
        roster.add("sam").unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_names_trimmed() {
        let mut roster = Roster::new();

        roster.add("  Alice  ").unwrap();
        assert_eq!(roster.get(0), Some("Alice"));

        // Trimmed duplicate is still a duplicate
        assert!(roster.add("Alice ").is_err());

        assert_eq!(roster.add("   "), Err(RosterError::EmptyName));
    }

    #[test]
    fn test_remove() {
        let mut roster = Roster::new();
        roster.add("Alice").unwrap();
        roster.add("Bob").unwrap();
        roster.add("Cara").unwrap();

        assert_eq!(roster.remove(1), Some("Bob".to_string()));
        assert_eq!(roster.names(), &["Alice".to_string(), "Cara".to_string()]);
        assert_eq!(roster.remove(5), None);
    }

    #[test]
    fn test_blob_round_trip() {
        let mut roster = Roster::new();
        roster.add("Alice").unwrap();
        roster.add("Bob").unwrap();

        let blob = roster.to_blob();
        assert_eq!(blob, r#"["Alice","Bob"]"#);

        let restored = Roster::from_blob(&blob);
        assert_eq!(restored, roster);
    }

    #[test]
    fn test_malformed_blob_falls_back_to_empty() {
        assert!(Roster::from_blob("not json").is_empty());
        assert!(Roster::from_blob(r#"{"wrong": "shape"}"#).is_empty());
    }

    #[test]
    fn test_restore_dedups() {
        let roster = Roster::from_blob(r#"["Alice","Alice","","Bob"]"#);
        assert_eq!(roster.names(), &["Alice".to_string(), "Bob".to_string()]);
    }

    #[test]
    fn test_store_round_trip() {
        let mut store = MemoryStore::new();

        // Absent key loads as empty
        assert!(Roster::load_from(&store).is_empty());

        let mut roster = Roster::new();
        roster.add("Alice").unwrap();
        roster.save_to(&mut store);

        assert_eq!(Roster::load_from(&store), roster);
    }
}
