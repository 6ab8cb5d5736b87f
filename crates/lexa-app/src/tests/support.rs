use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lexa_core::{Definition, Entry, Lexicon, LookupError, Meaning, Phonetic};
use lexa_store::MemoryStore;

use crate::controller::SearchController;

pub fn fresh_controller() -> SearchController {
    SearchController::bootstrap(Arc::new(MemoryStore::new()))
}

/// Entry with a single noun meaning and one definition.
pub fn entry(word: &str, definition: &str) -> Entry {
    Entry {
        word: word.to_string(),
        phonetic: None,
        phonetics: vec![],
        meanings: vec![Meaning {
            part_of_speech: "noun".to_string(),
            definitions: vec![Definition {
                definition: definition.to_string(),
                example: None,
                synonyms: vec![],
                antonyms: vec![],
            }],
            synonyms: vec![],
            antonyms: vec![],
        }],
        source_urls: vec![],
    }
}

pub fn entry_with_audio(word: &str, definition: &str, audio: &str) -> Entry {
    let mut entry = entry(word, definition);
    entry.phonetics.push(Phonetic {
        text: None,
        audio: Some(audio.to_string()),
    });
    entry
}

pub fn entry_with_meanings(word: &str, parts: &[&str]) -> Entry {
    let meanings = parts
        .iter()
        .map(|part| Meaning {
            part_of_speech: part.to_string(),
            definitions: vec![Definition {
                definition: format!("{word} as {part}"),
                example: None,
                synonyms: vec![],
                antonyms: vec![],
            }],
            synonyms: vec![],
            antonyms: vec![],
        })
        .collect();

    Entry {
        word: word.to_string(),
        phonetic: None,
        phonetics: vec![],
        meanings,
        source_urls: vec![],
    }
}

pub fn entry_with_synonyms(word: &str, definition: &str, synonyms: &[&str]) -> Entry {
    let mut entry = entry(word, definition);
    entry.meanings[0].synonyms = synonyms.iter().map(|s| s.to_string()).collect();
    entry
}

/// Scripted stand-in for the HTTP client. Unscripted terms answer
/// not-found; a scripted delay simulates a slow remote.
pub struct FakeLexicon {
    scripted: HashMap<String, (Duration, Result<Vec<Entry>, LookupError>)>,
}

impl FakeLexicon {
    pub fn new() -> Self {
        Self {
            scripted: HashMap::new(),
        }
    }

    pub fn ok(self, term: &str, entries: Vec<Entry>) -> Self {
        self.script(term, Duration::ZERO, Ok(entries))
    }

    pub fn ok_after(self, term: &str, delay: Duration, entries: Vec<Entry>) -> Self {
        self.script(term, delay, Ok(entries))
    }

    pub fn err(self, term: &str, error: LookupError) -> Self {
        self.script(term, Duration::ZERO, Err(error))
    }

    fn script(
        mut self,
        term: &str,
        delay: Duration,
        outcome: Result<Vec<Entry>, LookupError>,
    ) -> Self {
        self.scripted.insert(term.to_string(), (delay, outcome));
        self
    }
}

#[async_trait]
impl Lexicon for FakeLexicon {
    async fn lookup(&self, term: &str) -> Result<Vec<Entry>, LookupError> {
        match self.scripted.get(term) {
            Some((delay, outcome)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(*delay).await;
                }
                outcome.clone()
            }
            None => Err(LookupError::NotFound {
                term: term.to_string(),
            }),
        }
    }
}
