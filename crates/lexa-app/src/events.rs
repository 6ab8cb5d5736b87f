use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use lexa_core::{AppEvent, Intent, Lexicon, Update};
use lexa_io::AudioPlayer;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::controller::SearchController;

pub mod audio;
pub mod clipboard;
pub mod favorite;
pub mod search;

use audio::handle_play;
use clipboard::{handle_copy, handle_copy_expired};
use favorite::{handle_remove_favorite, handle_toggle_favorite};
use search::{handle_autoplay_due, handle_lookup_done, handle_search};

/// Centralized channel management
pub struct ChannelSet {
    pub events: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub updates: (AsyncSender<Update>, AsyncReceiver<Update>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            events: kanal::bounded_async(64),   // intents and task completions
            updates: kanal::bounded_async(256), // render burst capacity
        }
    }
}

/// Handler dependencies and the two live timers, bundled to keep handler
/// signatures short.
pub struct EventCtx {
    pub lexicon: Arc<dyn Lexicon>,
    pub player: Arc<AudioPlayer>,
    pub events_tx: AsyncSender<AppEvent>,
    pub updates_tx: AsyncSender<Update>,
    pub autoplay_delay: Duration,
    pub copy_ttl: Duration,
    /// Pending copy-marker expiry; superseded by a newer copy.
    pub copy_timer: Option<JoinHandle<()>>,
    /// Pending delayed autoplay; superseded by a newer search.
    pub autoplay_timer: Option<JoinHandle<()>>,
}

/// App's main loop. Every event funnels through here, so all controller
/// mutation is sequential; spawned work re-enters as `LookupDone`,
/// `AutoplayDue`, or `CopyExpired`.
pub async fn event_loop(
    mut ctl: SearchController,
    mut ctx: EventCtx,
    events_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    // Opening snapshot so the view starts from the persisted collections.
    let _ = ctx
        .updates_tx
        .send(Update::HistoryChanged(ctl.history().to_vec()))
        .await;
    let _ = ctx
        .updates_tx
        .send(Update::FavoritesChanged(ctl.favorites().to_vec()))
        .await;
    let _ = ctx
        .updates_tx
        .send(Update::PrefsChanged {
            dark_mode: ctl.dark_mode(),
            autoplay: ctl.autoplay(),
        })
        .await;

    tracing::debug!("event loop running");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = events_rx.recv() => event?,
        };

        if matches!(event, AppEvent::Intent(Intent::Quit)) {
            tracing::info!("quit requested");
            cancel.cancel();
            break;
        }

        handle_event(&mut ctl, &mut ctx, event).await;
    }

    tracing::debug!("event loop stopped");
    Ok(())
}

async fn handle_event(ctl: &mut SearchController, ctx: &mut EventCtx, event: AppEvent) {
    match event {
        AppEvent::Intent(intent) => handle_intent(ctl, ctx, intent).await,
        AppEvent::LookupDone { seq, term, outcome } => {
            handle_lookup_done(ctl, ctx, seq, &term, outcome).await;
        }
        AppEvent::AutoplayDue { seq, url } => handle_autoplay_due(ctl, ctx, seq, url).await,
        AppEvent::CopyExpired { seq } => handle_copy_expired(ctl, ctx, seq).await,
    }
}

async fn handle_intent(ctl: &mut SearchController, ctx: &mut EventCtx, intent: Intent) {
    match intent {
        Intent::Search(raw) => handle_search(ctl, ctx, &raw).await,
        Intent::SearchSynonym(index) => {
            match ctl.all_synonyms().get(index).cloned() {
                Some(word) => handle_search(ctl, ctx, &word).await,
                None => tracing::debug!("synonym index {index} out of range"),
            }
        }
        Intent::SelectMeaning(index) => {
            if ctl.select_meaning(index) {
                let _ = ctx.updates_tx.send(Update::MeaningSelected { index }).await;
            }
        }
        Intent::ToggleFavorite => handle_toggle_favorite(ctl, ctx).await,
        Intent::RemoveFavorite(word) => handle_remove_favorite(ctl, ctx, &word).await,
        Intent::ClearHistory => {
            ctl.clear_history();
            let _ = ctx
                .updates_tx
                .send(Update::HistoryChanged(ctl.history().to_vec()))
                .await;
        }
        Intent::PlayAudio => handle_play(ctl, ctx).await,
        Intent::CopyWord => {
            let word = ctl.state().primary().map(|entry| entry.word.clone());
            match word {
                Some(word) => handle_copy(ctl, ctx, word).await,
                None => tracing::debug!("no current entry to copy"),
            }
        }
        Intent::CopyText(text) => handle_copy(ctl, ctx, text).await,
        Intent::ToggleDarkMode => {
            let dark_mode = ctl.toggle_dark_mode();
            let _ = ctx
                .updates_tx
                .send(Update::PrefsChanged {
                    dark_mode,
                    autoplay: ctl.autoplay(),
                })
                .await;
        }
        Intent::ToggleAutoplay => {
            let autoplay = ctl.toggle_autoplay();
            let _ = ctx
                .updates_tx
                .send(Update::PrefsChanged {
                    dark_mode: ctl.dark_mode(),
                    autoplay,
                })
                .await;
        }
        Intent::ShowSaved => {
            let _ = ctx
                .updates_tx
                .send(Update::SavedPanel {
                    history: ctl.history().to_vec(),
                    favorites: ctl.favorites().to_vec(),
                })
                .await;
        }
        Intent::Quit => {
            // Intercepted by the loop before dispatch.
        }
    }
}
