use std::sync::Arc;

use lexa_core::FavoriteRecord;

use crate::{Store, now_millis, read_collection, write_collection};

pub const FAVORITES_KEY: &str = "favorites";

/// Saved words with a definition snapshot, newest first. Identity is the
/// exact word string; "Rust" and "rust" are distinct favorites.
pub struct Favorites {
    records: Vec<FavoriteRecord>,
    store: Arc<dyn Store>,
}

impl Favorites {
    pub fn load(store: Arc<dyn Store>) -> Self {
        let records = read_collection(store.as_ref(), FAVORITES_KEY);
        Self { records, store }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.records.iter().any(|r| r.word == word)
    }

    /// Saves a snapshot of `word` with its current first definition. A
    /// same-word record is replaced rather than duplicated.
    pub fn add(&mut self, word: &str, definition: &str) {
        self.records.retain(|r| r.word != word);
        self.records.insert(
            0,
            FavoriteRecord {
                word: word.to_string(),
                definition: definition.to_string(),
                timestamp: now_millis(),
            },
        );
        self.persist();
    }

    /// Removes the record matching `word` exactly. Returns whether anything
    /// was removed; nothing is persisted on a miss.
    pub fn remove(&mut self, word: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.word != word);
        let removed = self.records.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    pub fn records(&self) -> &[FavoriteRecord] {
        &self.records
    }

    fn persist(&self) {
        write_collection(self.store.as_ref(), FAVORITES_KEY, &self.records);
    }
}
