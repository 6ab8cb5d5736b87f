use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::audio::AudioConfig;
use self::storage::StorageConfig;

pub mod api;
pub mod audio;
pub mod storage;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub audio: AudioConfig,
    pub storage: StorageConfig,
}

impl Config {
    /// Defaults with environment overrides applied (LEXA_* variables).
    pub fn new() -> Self {
        Config {
            api: ApiConfig::new(),
            audio: AudioConfig::new(),
            storage: StorageConfig::new(),
        }
    }
}
