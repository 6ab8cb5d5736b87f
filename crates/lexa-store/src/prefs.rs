use std::sync::Arc;

use crate::Store;

pub const DARK_MODE_KEY: &str = "dark_mode";
pub const AUTOPLAY_KEY: &str = "autoplay";

/// The two persisted view preferences, stored as "true"/"false" text under
/// their own keys. Anything unreadable falls back to off.
pub struct Preferences {
    dark_mode: bool,
    autoplay: bool,
    store: Arc<dyn Store>,
}

impl Preferences {
    pub fn load(store: Arc<dyn Store>) -> Self {
        let dark_mode = read_flag(store.as_ref(), DARK_MODE_KEY);
        let autoplay = read_flag(store.as_ref(), AUTOPLAY_KEY);
        Self {
            dark_mode,
            autoplay,
            store,
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        write_flag(self.store.as_ref(), DARK_MODE_KEY, self.dark_mode);
        self.dark_mode
    }

    pub fn toggle_autoplay(&mut self) -> bool {
        self.autoplay = !self.autoplay;
        write_flag(self.store.as_ref(), AUTOPLAY_KEY, self.autoplay);
        self.autoplay
    }
}

fn read_flag(store: &dyn Store, key: &str) -> bool {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return false,
        Err(e) => {
            tracing::warn!("failed to read {key}: {e}");
            return false;
        }
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("discarding malformed {key} flag: {raw:?}");
            false
        }
    }
}

fn write_flag(store: &dyn Store, key: &str, value: bool) {
    let raw = if value { "true" } else { "false" };
    if let Err(e) = store.set(key, raw) {
        tracing::warn!("failed to persist {key}: {e}");
    }
}
