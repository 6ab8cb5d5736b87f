use lexa_core::Entry;

/// What the view binds to for the results panel.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Last submitted query, trimmed but otherwise as typed.
    pub query: String,
    pub outcome: Outcome,
    pub is_loading: bool,
    /// Index into the primary entry's meanings; reset on every new result.
    pub selected_meaning: usize,
}

/// Result panel content. Entries and an error can never coexist; a fresh
/// search keeps previous entries visible while loading but drops a
/// previous error.
#[derive(Debug, Clone, Default)]
pub enum Outcome {
    #[default]
    Idle,
    Loaded(Vec<Entry>),
    Failed(String),
}

impl SearchState {
    pub fn entries(&self) -> Option<&[Entry]> {
        match &self.outcome {
            Outcome::Loaded(entries) => Some(entries),
            _ => None,
        }
    }

    /// The first returned entry; the one meanings, favorites, and synonym
    /// derivations operate on.
    pub fn primary(&self) -> Option<&Entry> {
        self.entries().and_then(|entries| entries.first())
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Failed(message) => Some(message),
            _ => None,
        }
    }
}
