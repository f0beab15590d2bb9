//! Ordered entry collection mirrored to a key-value store.
//!
//! The in-memory list is the source of truth; after every mutation the whole
//! list is written back as one JSON snapshot under a fixed key.

use crate::core::report::{self, ReportFilter};
use crate::errors::AppResult;
use crate::models::Entry;
use crate::storage::KeyValueStore;

/// Key used by the original form; kept so existing snapshots stay readable.
pub const DEFAULT_STORAGE_KEY: &str = "ponto_entries_v2";

pub struct EntryRepository<S: KeyValueStore> {
    store: S,
    key: String,
    entries: Vec<Entry>,
}

impl<S: KeyValueStore> EntryRepository<S> {
    /// Load the snapshot stored under `key`.
    ///
    /// A missing, unreadable or malformed snapshot yields an empty collection.
    pub fn load(store: S, key: &str) -> Self {
        let entries = load_snapshot(&store, key);
        tracing::debug!(key, count = entries.len(), "entries loaded");
        Self {
            store,
            key: key.to_string(),
            entries,
        }
    }

    /// Append an entry and persist the full snapshot.
    /// When persisting fails the collection is left untouched.
    pub fn add(&mut self, entry: Entry) -> AppResult<()> {
        self.add_all(vec![entry])
    }

    pub fn add_all(&mut self, new_entries: Vec<Entry>) -> AppResult<()> {
        let mut next = self.entries.clone();
        next.extend(new_entries);
        self.persist(&next)?;
        self.entries = next;
        Ok(())
    }

    /// Filtered view sorted by (date, employee).
    pub fn query(&self, filter: &ReportFilter) -> Vec<Entry> {
        report::query(&self.entries, filter)
    }

    /// Drop every entry and persist the empty snapshot.
    pub fn clear(&mut self) -> AppResult<usize> {
        let removed = self.entries.len();
        self.persist(&[])?;
        self.entries.clear();
        tracing::info!(removed, "entries cleared");
        Ok(removed)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self, entries: &[Entry]) -> AppResult<()> {
        let json = serde_json::to_string(entries)?;
        self.store.set(&self.key, &json)?;
        tracing::debug!(key = %self.key, count = entries.len(), "snapshot written");
        Ok(())
    }
}

fn load_snapshot<S: KeyValueStore>(store: &S, key: &str) -> Vec<Entry> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read stored entries, starting empty");
            return Vec::new();
        }
    };

    if raw.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Vec<Entry>>(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(key, error = %e, "stored entries are malformed, starting empty");
            Vec::new()
        }
    }
}
