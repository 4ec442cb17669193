//! Append-only result history with bounded retention.
//!
//! The log is the sole source of truth for past attempts: a single JSON
//! array under one key, chronological order, capped at
//! [`HISTORY_CAP`] entries with oldest-first eviction.

use mcqdrill_core::model::TestResult;

use crate::kv::{KeyValueStore, StorageError};

/// Storage key for the result history.
pub const HISTORY_KEY: &str = "test_history";

/// Maximum retained results; older entries are dropped first.
pub const HISTORY_CAP: usize = 50;

/// Bounded result history over a key-value store.
pub struct HistoryStore<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Load the chronological log, degrading to empty on any read problem.
    fn load(&self) -> Vec<TestResult> {
        let raw = match self.kv.get(HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("history read failed, treating as empty: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(log) => log,
            Err(e) => {
                tracing::warn!("stored history is unparsable, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    fn save(&self, log: &[TestResult]) -> Result<(), StorageError> {
        let json = serde_json::to_string(log).map_err(|e| StorageError::Encode {
            key: HISTORY_KEY.to_string(),
            source: e,
        })?;
        self.kv.set(HISTORY_KEY, &json).map_err(|e| {
            tracing::warn!("history write failed: {e}");
            e
        })
    }

    /// Append a result, evicting from the front once over the cap.
    pub fn append(&self, result: &TestResult) -> Result<(), StorageError> {
        let mut log = self.load();
        log.push(result.clone());
        if log.len() > HISTORY_CAP {
            let excess = log.len() - HISTORY_CAP;
            log.drain(..excess);
        }
        self.save(&log)
    }

    /// All results newest-first. A presentation-order view; the persisted
    /// order stays chronological.
    pub fn list_descending(&self) -> Vec<TestResult> {
        let mut log = self.load();
        log.reverse();
        log
    }

    /// Fetch one result by its newest-first display index.
    pub fn get_descending(&self, display_index: usize) -> Option<TestResult> {
        let log = self.load();
        let chronological = log.len().checked_sub(1 + display_index)?;
        log.into_iter().nth(chronological)
    }

    /// Delete the entry at a newest-first display index.
    ///
    /// Out-of-range indexes (including any index on an empty log) are a
    /// logged no-op returning `false`, never an error.
    pub fn delete_at(&self, display_index: usize) -> Result<bool, StorageError> {
        let mut log = self.load();
        let Some(chronological) = log.len().checked_sub(1 + display_index) else {
            tracing::warn!(
                display_index,
                len = log.len(),
                "ignoring out-of-range history delete"
            );
            return Ok(false);
        };
        log.remove(chronological);
        self.save(&log)?;
        Ok(true)
    }

    /// Replace the log with an empty sequence.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.save(&[])
    }
}
