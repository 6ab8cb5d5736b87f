use crate::entry::Entry;
use crate::error::LookupError;
use crate::records::{FavoriteRecord, HistoryRecord};

/// Everything the app loop processes, in arrival order. The view sends
/// `Intent`s; background tasks (lookups, timers) post their completions
/// back into the same queue so all state mutation stays sequential.
#[derive(Debug, Clone)]
pub enum AppEvent {
    Intent(Intent),
    LookupDone {
        seq: u64,
        term: String,
        outcome: Result<Vec<Entry>, LookupError>,
    },
    AutoplayDue {
        seq: u64,
        url: String,
    },
    CopyExpired {
        seq: u64,
    },
}

/// User intents issued by the view layer.
#[derive(Debug, Clone)]
pub enum Intent {
    Search(String),
    /// Search the nth synonym of the current entry (first-seen order).
    SearchSynonym(usize),
    SelectMeaning(usize),
    ToggleFavorite,
    RemoveFavorite(String),
    ClearHistory,
    PlayAudio,
    /// Copy the current headword.
    CopyWord,
    CopyText(String),
    ToggleDarkMode,
    ToggleAutoplay,
    ShowSaved,
    Quit,
}

/// Change notifications to the view layer. The view renders from these;
/// it never reaches into controller state directly.
#[derive(Debug, Clone)]
pub enum Update {
    /// A lookup started; the view drops any secondary panel and returns
    /// focus to the results panel.
    SearchStarted { term: String },
    SearchSucceeded { entries: Vec<Entry> },
    SearchFailed { message: String },
    MeaningSelected { index: usize },
    HistoryChanged(Vec<HistoryRecord>),
    FavoritesChanged(Vec<FavoriteRecord>),
    PrefsChanged { dark_mode: bool, autoplay: bool },
    /// Transient copy confirmation; cleared by `CopyCleared` after a fixed
    /// window unless superseded by a newer copy first.
    CopyConfirmed { text: String },
    CopyCleared,
    /// Pronunciation playback was handed to the player.
    AudioStarted { url: String },
    SavedPanel {
        history: Vec<HistoryRecord>,
        favorites: Vec<FavoriteRecord>,
    },
}
