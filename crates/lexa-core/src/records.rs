use serde::{Deserialize, Serialize};

/// One remembered search. The word is stored lower-cased and is the
/// record's identity; at most one record per word exists in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub word: String,
    /// Epoch milliseconds at recording time.
    pub timestamp: u64,
}

/// One saved word, keyed by the exact word string the service returned,
/// with the definition snapshotted at favoriting time. The snapshot is
/// never refreshed; un-saving and re-saving produces a fresh record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub word: String,
    pub definition: String,
    /// Epoch milliseconds at favoriting time.
    pub timestamp: u64,
}
