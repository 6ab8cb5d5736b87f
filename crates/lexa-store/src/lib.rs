use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod favorites;
pub mod file;
pub mod history;
pub mod memory;
pub mod prefs;

pub use favorites::{FAVORITES_KEY, Favorites};
pub use file::FileStore;
pub use history::{HISTORY_KEY, History, MAX_HISTORY};
pub use memory::MemoryStore;
pub use prefs::{AUTOPLAY_KEY, DARK_MODE_KEY, Preferences};

/// Durable key-value text storage. A `set` is visible to any later `get`
/// of the same key within this process.
pub trait Store: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),

    #[error("store lock poisoned")]
    Poisoned,
}

/// Epoch milliseconds. A clock before the epoch degrades to zero instead
/// of failing.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Reads a JSON array under `key`. Absent, unreadable, or malformed data
/// all yield an empty collection so startup never fails on stale state.
pub(crate) fn read_collection<T: DeserializeOwned>(store: &dyn Store, key: &str) -> Vec<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!("failed to read {key}: {e}");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("discarding malformed {key} data: {e}");
            Vec::new()
        }
    }
}

/// Writes a collection as a JSON array under `key`. Persistence failures
/// are logged and swallowed; the in-memory state stays authoritative.
pub(crate) fn write_collection<T: Serialize>(store: &dyn Store, key: &str, items: &[T]) {
    let raw = match serde_json::to_string(items) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!("failed to serialize {key}: {e}");
            return;
        }
    };

    if let Err(e) = store.set(key, &raw) {
        tracing::warn!("failed to persist {key}: {e}");
    }
}
