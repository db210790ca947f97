//! Best-score records
//!
//! One record per game mode, persisted through a key-value collaborator.
//! Records are a convenience rather than a correctness requirement: a
//! failing backend is logged and ignored, and the cached record keeps
//! serving the current session.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The five playable mini-game modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    Batting,
    Catching,
    Trivia,
    Bowling,
    Memory,
}

impl GameMode {
    pub const ALL: [GameMode; 5] = [
        GameMode::Batting,
        GameMode::Catching,
        GameMode::Trivia,
        GameMode::Bowling,
        GameMode::Memory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Batting => "batting",
            GameMode::Catching => "catching",
            GameMode::Trivia => "trivia",
            GameMode::Bowling => "bowling",
            GameMode::Memory => "memory",
        }
    }

    /// Mode-qualified key in the key-value backend
    pub fn storage_key(&self) -> &'static str {
        match self {
            GameMode::Batting => "batting-highscore",
            GameMode::Catching => "catching-highscore",
            GameMode::Trivia => "trivia-highscore",
            GameMode::Bowling => "bowling-highscore",
            GameMode::Memory => "memory-highscore",
        }
    }

    /// Memory records elapsed seconds; every other mode records points
    pub fn lower_is_better(&self) -> bool {
        matches!(self, GameMode::Memory)
    }
}

/// Key-value persistence failure. Swallowed by [`ScoreStore`]; callers
/// never see it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// External key-value persistence collaborator
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory backend for tests and hosts without durable storage
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    map: HashMap<String, String>,
}

impl KeyValueStore for InMemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Outcome of a score submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub is_record: bool,
    /// The record after this submission was applied
    pub best_after: u32,
}

/// Best-per-mode record cache over a key-value backend
#[derive(Debug)]
pub struct ScoreStore<S> {
    backend: S,
    best: HashMap<GameMode, u32>,
}

impl<S: KeyValueStore> ScoreStore<S> {
    /// Load existing records from the backend. Missing keys, the memory
    /// `"--"` sentinel, and unparseable values all count as "no record".
    pub fn new(backend: S) -> Self {
        let mut best = HashMap::new();
        for mode in GameMode::ALL {
            if let Some(raw) = backend.read(mode.storage_key()) {
                if let Ok(value) = raw.trim().parse::<u32>() {
                    best.insert(mode, value);
                }
            }
        }
        log::info!("loaded {} high score records", best.len());
        Self { backend, best }
    }

    /// Current record for a mode, if one exists
    pub fn get_best(&self, mode: GameMode) -> Option<u32> {
        self.best.get(&mode).copied()
    }

    /// Record slot rendered for display: point modes default to `0`, the
    /// time-based memory mode shows the `"--"` sentinel until a run
    /// completes.
    pub fn display_best(&self, mode: GameMode) -> String {
        match self.get_best(mode) {
            Some(value) => value.to_string(),
            None if mode.lower_is_better() => "--".to_owned(),
            None => "0".to_owned(),
        }
    }

    /// Submit a finished session's score. The record updates iff the value
    /// strictly beats the previous one (higher for point modes, lower for
    /// memory) or no previous record exists; a new record is written
    /// through to the backend.
    pub fn submit(&mut self, mode: GameMode, value: u32) -> Submission {
        let previous = self.get_best(mode);
        let beats = match previous {
            None => true,
            Some(prev) if mode.lower_is_better() => value < prev,
            Some(prev) => value > prev,
        };

        if !beats {
            return Submission {
                is_record: false,
                best_after: previous.unwrap_or(value),
            };
        }

        self.best.insert(mode, value);
        match self.backend.write(mode.storage_key(), &value.to_string()) {
            Ok(()) => log::info!("new {} record: {value}", mode.as_str()),
            // Degrade to a session-local record; nothing to surface
            Err(err) => log::warn!("{} record not persisted: {err}", mode.as_str()),
        }

        Submission {
            is_record: true,
            best_after: value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Backend that always refuses writes
    struct OfflineStore;

    impl KeyValueStore for OfflineStore {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    #[test]
    fn test_maximizing_mode_keeps_strict_max() {
        let mut store = ScoreStore::new(InMemoryStore::default());
        assert_eq!(store.get_best(GameMode::Batting), None);

        let first = store.submit(GameMode::Batting, 24);
        assert!(first.is_record);
        assert_eq!(first.best_after, 24);

        // Equal value is not a new record
        let tie = store.submit(GameMode::Batting, 24);
        assert!(!tie.is_record);
        assert_eq!(tie.best_after, 24);

        let worse = store.submit(GameMode::Batting, 10);
        assert!(!worse.is_record);

        let better = store.submit(GameMode::Batting, 36);
        assert!(better.is_record);
        assert_eq!(store.get_best(GameMode::Batting), Some(36));
    }

    #[test]
    fn test_memory_mode_keeps_strict_min() {
        let mut store = ScoreStore::new(InMemoryStore::default());

        assert!(store.submit(GameMode::Memory, 95).is_record);
        assert!(!store.submit(GameMode::Memory, 120).is_record);
        assert!(store.submit(GameMode::Memory, 58).is_record);
        assert_eq!(store.get_best(GameMode::Memory), Some(58));
    }

    #[test]
    fn test_records_survive_reload() {
        let mut backend = InMemoryStore::default();
        {
            let mut store = ScoreStore::new(backend.clone());
            store.submit(GameMode::Bowling, 70);
            backend = store.backend;
        }

        let reloaded = ScoreStore::new(backend);
        assert_eq!(reloaded.get_best(GameMode::Bowling), Some(70));
    }

    #[test]
    fn test_trivia_has_its_own_maximizing_slot() {
        let mut backend = InMemoryStore::default();
        backend.write("trivia-highscore", "60").unwrap();

        let mut store = ScoreStore::new(backend);
        assert_eq!(store.get_best(GameMode::Trivia), Some(60));
        assert_eq!(store.display_best(GameMode::Trivia), "60");

        assert!(!store.submit(GameMode::Trivia, 50).is_record);
        assert!(store.submit(GameMode::Trivia, 80).is_record);
        // The quiz-style modes never touch each other's keys
        assert_eq!(store.get_best(GameMode::Bowling), None);
    }

    #[test]
    fn test_sentinel_and_garbage_read_as_no_record() {
        let mut backend = InMemoryStore::default();
        backend.write("memory-highscore", "--").unwrap();
        backend.write("batting-highscore", "not a number").unwrap();

        let store = ScoreStore::new(backend);
        assert_eq!(store.get_best(GameMode::Memory), None);
        assert_eq!(store.get_best(GameMode::Batting), None);
        assert_eq!(store.display_best(GameMode::Memory), "--");
        assert_eq!(store.display_best(GameMode::Batting), "0");
    }

    #[test]
    fn test_offline_backend_degrades_silently() {
        let mut store = ScoreStore::new(OfflineStore);

        // Submission still succeeds and the cached record serves reads
        let sub = store.submit(GameMode::Catching, 19);
        assert!(sub.is_record);
        assert_eq!(store.get_best(GameMode::Catching), Some(19));
    }

    proptest! {
        /// After any submission sequence the record equals the fold of all
        /// submitted values: max for point modes, min for memory.
        #[test]
        fn prop_record_is_fold_of_submissions(values in prop::collection::vec(0u32..10_000, 1..40)) {
            let mut store = ScoreStore::new(InMemoryStore::default());
            for &v in &values {
                store.submit(GameMode::Bowling, v);
                store.submit(GameMode::Memory, v);
            }
            prop_assert_eq!(store.get_best(GameMode::Bowling), values.iter().copied().max());
            prop_assert_eq!(store.get_best(GameMode::Memory), values.iter().copied().min());
        }

        /// `best_after` always reports the post-submission record
        #[test]
        fn prop_best_after_matches_get_best(values in prop::collection::vec(0u32..1_000, 1..20)) {
            let mut store = ScoreStore::new(InMemoryStore::default());
            for &v in &values {
                let sub = store.submit(GameMode::Batting, v);
                prop_assert_eq!(Some(sub.best_after), store.get_best(GameMode::Batting));
            }
        }
    }
}
