//! Persisted question bank with upload metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mcqdrill_core::model::Question;

use crate::kv::{KeyValueStore, StorageError};

/// Storage key for the imported bank.
pub const BANK_KEY: &str = "mcq_questions";

/// Metadata recorded when a bank is imported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankMetadata {
    pub upload_date: DateTime<Utc>,
    pub subject: String,
    pub chapter: String,
}

/// The persisted bank blob: questions plus import metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredBank {
    pub questions: Vec<Question>,
    pub metadata: BankMetadata,
}

/// Bank persistence over a key-value store.
pub struct BankStore<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> BankStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Persist a bank, replacing any previous one.
    pub fn save(&self, bank: &StoredBank) -> Result<(), StorageError> {
        let json = serde_json::to_string(bank).map_err(|e| StorageError::Encode {
            key: BANK_KEY.to_string(),
            source: e,
        })?;
        self.kv.set(BANK_KEY, &json).map_err(|e| {
            tracing::warn!("bank write failed: {e}");
            e
        })
    }

    /// Load the stored bank.
    ///
    /// Read failures and unparsable blobs degrade to `None` ("no prior
    /// data") with a warning rather than failing the caller.
    pub fn load(&self) -> Option<StoredBank> {
        let raw = match self.kv.get(BANK_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("bank read failed, treating as absent: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(bank) => Some(bank),
            Err(e) => {
                tracing::warn!("stored bank is unparsable, treating as absent: {e}");
                None
            }
        }
    }
}
