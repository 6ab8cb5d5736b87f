use std::sync::Arc;
use std::time::Duration;

use lexa_core::{Entry, FavoriteRecord, HistoryRecord, LookupError, first_audio_url};
use lexa_store::{Favorites, History, Preferences, Store};

use crate::state::{Outcome, SearchState};

/// How long the "last copied" marker lives before clearing itself.
pub const COPY_MARKER_TTL: Duration = Duration::from_secs(2);

/// Issued by `begin_search`; a completion must present the sequence number
/// to be applied. `term` is the normalized form actually sent to the
/// dictionary service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub seq: u64,
    pub term: String,
}

/// What `apply_lookup` did with a completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// The completion belonged to a superseded search; nothing changed.
    Stale,
    Loaded { autoplay: Option<String> },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteChange {
    Added(String),
    Removed(String),
}

/// The search state machine. Owns the result panel state, the persisted
/// collections, and the sequence counters that fence off stale async
/// completions. All mutation happens on the event loop; suspension points
/// (lookups, timers) live outside and re-enter through `apply_lookup`,
/// `expire_copy_marker`, and friends.
pub struct SearchController {
    state: SearchState,
    history: History,
    favorites: Favorites,
    prefs: Preferences,
    lookup_seq: u64,
    copy_seq: u64,
    copy_marker: Option<String>,
}

impl SearchController {
    /// Loads the persisted collections. Corrupt or absent data degrades to
    /// empty defaults; bootstrap never fails.
    pub fn bootstrap(store: Arc<dyn Store>) -> Self {
        Self {
            state: SearchState::default(),
            history: History::load(store.clone()),
            favorites: Favorites::load(store.clone()),
            prefs: Preferences::load(store),
            lookup_seq: 0,
            copy_seq: 0,
            copy_marker: None,
        }
    }

    /// Starts a search. Blank input is a silent no-op. Otherwise the
    /// lookup sequence advances (implicitly staling any in-flight request),
    /// a previous failure message is dropped, and the loading flag goes up.
    /// Previous entries stay visible until the new result lands.
    pub fn begin_search(&mut self, raw: &str) -> Option<LookupTicket> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.lookup_seq += 1;
        self.state.query = trimmed.to_string();
        if matches!(self.state.outcome, Outcome::Failed(_)) {
            self.state.outcome = Outcome::Idle;
        }
        self.state.is_loading = true;

        Some(LookupTicket {
            seq: self.lookup_seq,
            term: trimmed.to_lowercase(),
        })
    }

    /// Lands a lookup completion. A sequence number older than the latest
    /// issued means a newer search superseded this one: the completion is
    /// dropped wholesale, including its loading-flag bookkeeping, which now
    /// belongs to the newer request.
    ///
    /// A success with zero entries counts as a failure; the service is not
    /// supposed to produce it, but an empty results panel must never be
    /// presented as a hit. Both outcome arms clear `is_loading` last.
    pub fn apply_lookup(
        &mut self,
        seq: u64,
        term: &str,
        outcome: Result<Vec<Entry>, LookupError>,
    ) -> Applied {
        if seq != self.lookup_seq {
            tracing::debug!("dropping stale lookup #{seq} for {term:?}");
            return Applied::Stale;
        }

        let applied = match outcome {
            Ok(entries) if !entries.is_empty() => {
                self.history.record(term);
                let autoplay = if self.prefs.autoplay() {
                    first_audio_url(&entries).map(str::to_string)
                } else {
                    None
                };
                self.state.outcome = Outcome::Loaded(entries);
                self.state.selected_meaning = 0;
                Applied::Loaded { autoplay }
            }
            Ok(_) => {
                tracing::warn!("lookup for {term:?} returned an empty entry list");
                self.fail_current()
            }
            Err(e) => {
                tracing::warn!("lookup for {term:?} failed: {e}");
                self.fail_current()
            }
        };

        self.state.is_loading = false;
        applied
    }

    fn fail_current(&mut self) -> Applied {
        let message = format!("no definitions found for \"{}\"", self.state.query);
        self.state.outcome = Outcome::Failed(message.clone());
        Applied::Failed { message }
    }

    /// Moves the meaning selection. Out of range against the primary
    /// entry's meanings is a logged no-op.
    pub fn select_meaning(&mut self, index: usize) -> bool {
        let meanings = self.state.primary().map_or(0, |e| e.meanings.len());
        if index >= meanings {
            tracing::debug!("meaning index {index} out of range ({meanings} available)");
            return false;
        }

        self.state.selected_meaning = index;
        true
    }

    /// Membership toggle keyed on the primary entry's word exactly as the
    /// service returned it. Saving snapshots the current first definition.
    /// No loaded entry, no toggle.
    pub fn toggle_favorite(&mut self) -> Option<FavoriteChange> {
        let primary = self.state.primary()?;
        let word = primary.word.clone();

        if self.favorites.contains(&word) {
            self.favorites.remove(&word);
            Some(FavoriteChange::Removed(word))
        } else {
            let definition = primary.first_definition().unwrap_or_default().to_string();
            self.favorites.add(&word, &definition);
            Some(FavoriteChange::Added(word))
        }
    }

    pub fn remove_favorite(&mut self, word: &str) -> bool {
        self.favorites.remove(word)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.prefs.toggle_dark_mode()
    }

    pub fn toggle_autoplay(&mut self) -> bool {
        self.prefs.toggle_autoplay()
    }

    /// Arms the copy marker with `text` and returns the sequence number the
    /// expiry timer must present. A newer copy bumps the sequence, so a
    /// superseded timer's expiry no longer matches.
    pub fn mark_copied(&mut self, text: &str) -> u64 {
        self.copy_seq += 1;
        self.copy_marker = Some(text.to_string());
        self.copy_seq
    }

    /// Clears the marker if `seq` is still current. Returns whether
    /// anything was cleared.
    pub fn expire_copy_marker(&mut self, seq: u64) -> bool {
        if seq != self.copy_seq || self.copy_marker.is_none() {
            return false;
        }

        self.copy_marker = None;
        true
    }

    /// Synonyms of the primary entry, first-seen order.
    pub fn all_synonyms(&self) -> Vec<String> {
        self.state
            .primary()
            .map(lexa_core::all_synonyms)
            .unwrap_or_default()
    }

    /// Pronunciation URL for the current results, if any entry carries one.
    pub fn audio_url(&self) -> Option<&str> {
        first_audio_url(self.state.entries()?)
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn history(&self) -> &[HistoryRecord] {
        self.history.records()
    }

    pub fn favorites(&self) -> &[FavoriteRecord] {
        self.favorites.records()
    }

    pub fn dark_mode(&self) -> bool {
        self.prefs.dark_mode()
    }

    pub fn autoplay(&self) -> bool {
        self.prefs.autoplay()
    }

    pub fn copy_marker(&self) -> Option<&str> {
        self.copy_marker.as_deref()
    }

    /// Latest issued lookup sequence; completions older than this are
    /// stale.
    pub fn lookup_seq(&self) -> u64 {
        self.lookup_seq
    }
}
