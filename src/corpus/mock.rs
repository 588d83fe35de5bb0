use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDateTime;
use parking_lot::RwLock;

use super::error::{StoreError, StoreResult};
use super::store::{CorpusStore, timestamped_name, validate_entry_name};
use super::types::{IngestOutcome, StoredText};

/// In-memory [`CorpusStore`] with switchable write failures.
#[derive(Debug, Default)]
pub struct MemoryCorpusStore {
    entries: RwLock<BTreeMap<String, String>>,
    failing_names: RwLock<BTreeSet<String>>,
}

impl MemoryCorpusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `(name, text)` pairs.
    pub fn with_entries<I, N, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: Into<String>,
    {
        let store = Self::new();
        {
            let mut map = store.entries.write();
            for (name, text) in entries {
                map.insert(name.into(), text.into());
            }
        }
        store
    }

    /// Makes every write under `name` fail.
    pub fn fail_writes_for(&self, name: impl Into<String>) {
        self.failing_names.write().insert(name.into());
    }

    /// Returns the stored text for `name`.
    pub fn get(&self, name: &str) -> Option<String> {
        self.entries.read().get(name).cloned()
    }

    fn check_writable(&self, name: &str) -> StoreResult<()> {
        if self.failing_names.read().contains(name) {
            return Err(StoreError::WriteFailed {
                name: name.to_string(),
                reason: "permission denied".to_string(),
            });
        }
        Ok(())
    }
}

impl CorpusStore for MemoryCorpusStore {
    fn read_all(&self) -> StoreResult<Vec<StoredText>> {
        Ok(self
            .entries
            .read()
            .iter()
            .map(|(name, text)| StoredText::new(name.as_str(), text.as_str()))
            .collect())
    }

    fn names(&self) -> StoreResult<Vec<String>> {
        Ok(self.entries.read().keys().cloned().collect())
    }

    fn ingest(&self, name: &str, content: &str) -> StoreResult<IngestOutcome> {
        validate_entry_name(name)?;
        self.check_writable(name)?;

        let mut entries = self.entries.write();
        match entries.get_mut(name) {
            Some(existing) => {
                existing.push_str(content);
                Ok(IngestOutcome::Appended)
            }
            None => {
                entries.insert(name.to_string(), content.to_string());
                Ok(IngestOutcome::Created)
            }
        }
    }

    fn archive(&self, name: &str, content: &str, timestamp: NaiveDateTime) -> StoreResult<String> {
        validate_entry_name(name)?;
        self.check_writable(name)?;

        let mut entries = self.entries.write();
        let saved_name = if entries.contains_key(name) {
            timestamped_name(name, timestamp)
        } else {
            name.to_string()
        };

        if entries.contains_key(&saved_name) {
            return Err(StoreError::AlreadyExists { name: saved_name });
        }

        entries.insert(saved_name.clone(), content.to_string());
        Ok(saved_name)
    }

    fn is_available(&self) -> bool {
        true
    }
}
