use std::sync::Arc;

use lexa_core::HistoryRecord;

use crate::{Store, now_millis, read_collection, write_collection};

pub const HISTORY_KEY: &str = "history";

/// Upper bound on remembered searches.
pub const MAX_HISTORY: usize = 50;

/// Deduplicated, most-recent-first search history, written through to the
/// store on every mutation.
pub struct History {
    records: Vec<HistoryRecord>,
    store: Arc<dyn Store>,
}

impl History {
    pub fn load(store: Arc<dyn Store>) -> Self {
        let records = read_collection(store.as_ref(), HISTORY_KEY);
        Self { records, store }
    }

    /// Remembers a successful search. The word is lower-cased, any prior
    /// occurrence is dropped, the fresh record goes to the front, and the
    /// list is trimmed to `MAX_HISTORY`.
    pub fn record(&mut self, word: &str) {
        let word = word.to_lowercase();
        self.records.retain(|r| r.word != word);
        self.records.insert(
            0,
            HistoryRecord {
                word,
                timestamp: now_millis(),
            },
        );
        self.records.truncate(MAX_HISTORY);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.persist();
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    fn persist(&self) {
        write_collection(self.store.as_ref(), HISTORY_KEY, &self.records);
    }
}
