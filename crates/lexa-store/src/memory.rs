use std::collections::HashMap;
use std::sync::Mutex;

use crate::{Store, StoreError};

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let map = self.map.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.map.lock().map_err(|_| StoreError::Poisoned)?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
