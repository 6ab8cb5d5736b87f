use std::env;

use serde::{Deserialize, Serialize};

fn default_player() -> String {
    "mpv".to_string()
}

fn default_player_args() -> Vec<String> {
    vec!["--no-video".to_string(), "--really-quiet".to_string()]
}

fn default_autoplay_delay_ms() -> u64 {
    500
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AudioConfig {
    /// External player launched with the pronunciation URL as its last
    /// argument. Playback is fire-and-forget.
    #[serde(default = "default_player")]
    pub player: String,
    #[serde(default = "default_player_args")]
    pub player_args: Vec<String>,
    /// Settle delay before autoplaying a fresh result. UX tuning knob, not
    /// a correctness constraint.
    #[serde(default = "default_autoplay_delay_ms")]
    pub autoplay_delay_ms: u64,
}

impl AudioConfig {
    pub fn new() -> Self {
        let player = env::var("LEXA_PLAYER").unwrap_or_else(|_| default_player());

        let autoplay_delay_ms = env::var("LEXA_AUTOPLAY_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_autoplay_delay_ms);

        Self {
            player,
            player_args: default_player_args(),
            autoplay_delay_ms,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            player: default_player(),
            player_args: default_player_args(),
            autoplay_delay_ms: default_autoplay_delay_ms(),
        }
    }
}
