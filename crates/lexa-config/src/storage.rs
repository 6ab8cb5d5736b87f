use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for the key-value store; `None` resolves to the platform
    /// data directory.
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn new() -> Self {
        let data_dir = env::var("LEXA_DATA_DIR").ok().map(PathBuf::from);

        Self { data_dir }
    }

    /// Effective store directory: explicit override, else the platform data
    /// dir, else a dot directory next to the working directory.
    pub fn resolve_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }

        dirs::data_dir()
            .map(|d| d.join("lexa"))
            .unwrap_or_else(|| PathBuf::from(".lexa"))
    }
}
