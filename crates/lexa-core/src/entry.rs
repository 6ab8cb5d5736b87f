use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One dictionary-service record for a searched word.
///
/// Mirrors the wire shape of the free dictionary API. Unknown fields
/// (license blocks and the like) are ignored during decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    #[serde(default, rename = "sourceUrls")]
    pub source_urls: Vec<String>,
}

/// One phonetic variant; both fields are optional on the wire and the
/// audio URL is frequently an empty string rather than absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

/// A group of definitions under one part-of-speech tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

impl Entry {
    /// First definition of the first meaning — the text snapshotted into a
    /// favorite at save time.
    pub fn first_definition(&self) -> Option<&str> {
        self.meanings
            .first()?
            .definitions
            .first()
            .map(|d| d.definition.as_str())
    }

    /// Display transcription: the top-level field when present, otherwise
    /// the first phonetic variant that carries text.
    pub fn phonetic_text(&self) -> Option<&str> {
        self.phonetic
            .as_deref()
            .or_else(|| self.phonetics.iter().find_map(|p| p.text.as_deref()))
    }
}

/// First phonetic variant, in entry order, whose audio URL is a non-empty
/// string. Returns `None` when no entry carries playable audio.
pub fn first_audio_url(entries: &[Entry]) -> Option<&str> {
    entries
        .iter()
        .flat_map(|entry| entry.phonetics.iter())
        .find_map(|p| match p.audio.as_deref() {
            Some(url) if !url.is_empty() => Some(url),
            _ => None,
        })
}

/// Union of synonyms across each meaning's own list and then its
/// definitions' lists, first-seen order, case-sensitive identity.
pub fn all_synonyms(entry: &Entry) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for meaning in &entry.meanings {
        let definition_synonyms = meaning
            .definitions
            .iter()
            .flat_map(|d| d.synonyms.iter());
        for synonym in meaning.synonyms.iter().chain(definition_synonyms) {
            if seen.insert(synonym.as_str()) {
                out.push(synonym.clone());
            }
        }
    }
    out
}
