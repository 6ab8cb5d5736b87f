use kanal::AsyncReceiver;
use lexa_core::{Entry, FavoriteRecord, HistoryRecord, Update};
use tokio_util::sync::CancellationToken;

use crate::render::{self, Style};

/// What the view remembers between updates. Nothing here is
/// authoritative; it mirrors the last notifications received.
#[derive(Default)]
struct ViewState {
    entries: Vec<Entry>,
    selected: usize,
    history: Vec<HistoryRecord>,
    favorites: Vec<FavoriteRecord>,
}

impl ViewState {
    fn is_favorite(&self, word: &str) -> bool {
        self.favorites.iter().any(|r| r.word == word)
    }
}

/// Renders updates to stdout until cancelled or the channel closes.
pub async fn ui_loop(
    updates_rx: AsyncReceiver<Update>,
    mut style: Style,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut view = ViewState::default();

    loop {
        let update = tokio::select! {
            _ = cancel.cancelled() => break,
            update = updates_rx.recv() => update?,
        };

        render_update(&mut view, &mut style, update);
    }

    Ok(())
}

fn render_update(view: &mut ViewState, style: &mut Style, update: Update) {
    match update {
        Update::SearchStarted { term } => {
            println!("{}", render::searching(&term, style));
        }
        Update::SearchSucceeded { entries } => {
            view.entries = entries;
            view.selected = 0;
            print_current(view, style);
        }
        Update::SearchFailed { message } => {
            println!("{}", render::error(&message, style));
        }
        Update::MeaningSelected { index } => {
            view.selected = index;
            print_current(view, style);
        }
        Update::HistoryChanged(records) => {
            view.history = records;
        }
        Update::FavoritesChanged(records) => {
            view.favorites = records;
            println!(
                "{}",
                render::note(&format!("saved words: {}", view.favorites.len()), style)
            );
        }
        Update::PrefsChanged { dark_mode, autoplay } => {
            style.dark = dark_mode;
            println!("{}", render::prefs(dark_mode, autoplay, style));
        }
        Update::CopyConfirmed { text } => {
            println!("{}", render::copied(&text, style));
        }
        Update::CopyCleared => {
            tracing::debug!("copy marker expired");
        }
        Update::AudioStarted { url } => {
            println!("{}", render::playing(&url, style));
        }
        Update::SavedPanel { history, favorites } => {
            print!("{}", render::saved(&history, &favorites, style));
        }
    }
}

fn print_current(view: &ViewState, style: &Style) {
    if let Some(first) = view.entries.first() {
        let favorite = view.is_favorite(&first.word);
        print!("{}", render::entry(first, view.selected, favorite, style));
    }
}
