use std::env;

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the dictionary service, without the language segment.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Language path segment for lookups, e.g. "en".
    #[serde(default = "default_language")]
    pub language: String,
}

impl ApiConfig {
    pub fn new() -> Self {
        let endpoint = env::var("LEXA_API_URL").unwrap_or_else(|_| default_endpoint());
        let language = env::var("LEXA_LANGUAGE").unwrap_or_else(|_| default_language());

        Self { endpoint, language }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            language: default_language(),
        }
    }
}
