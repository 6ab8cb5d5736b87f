use lexa_core::{AppEvent, Entry, LookupError, Update};

use crate::controller::{Applied, SearchController};
use crate::events::EventCtx;

/// Starts a lookup for `raw` input. The controller validates and sequences
/// it; the HTTP request runs as a spawned task that posts `LookupDone`
/// back into the loop.
pub async fn handle_search(ctl: &mut SearchController, ctx: &mut EventCtx, raw: &str) {
    let Some(ticket) = ctl.begin_search(raw) else {
        return;
    };

    // A new search obsoletes any pending autoplay.
    if let Some(timer) = ctx.autoplay_timer.take() {
        timer.abort();
    }

    let _ = ctx
        .updates_tx
        .send(Update::SearchStarted {
            term: ctl.state().query.clone(),
        })
        .await;

    let lexicon = ctx.lexicon.clone();
    let events_tx = ctx.events_tx.clone();
    tokio::spawn(async move {
        let outcome = lexicon.lookup(&ticket.term).await;
        let _ = events_tx
            .send(AppEvent::LookupDone {
                seq: ticket.seq,
                term: ticket.term,
                outcome,
            })
            .await;
    });
}

pub async fn handle_lookup_done(
    ctl: &mut SearchController,
    ctx: &mut EventCtx,
    seq: u64,
    term: &str,
    outcome: Result<Vec<Entry>, LookupError>,
) {
    match ctl.apply_lookup(seq, term, outcome) {
        Applied::Stale => {}
        Applied::Loaded { autoplay } => {
            let entries = ctl.state().entries().unwrap_or_default().to_vec();
            let _ = ctx.updates_tx.send(Update::SearchSucceeded { entries }).await;
            let _ = ctx
                .updates_tx
                .send(Update::HistoryChanged(ctl.history().to_vec()))
                .await;

            if let Some(url) = autoplay {
                schedule_autoplay(ctx, ctl.lookup_seq(), url);
            }
        }
        Applied::Failed { message } => {
            let _ = ctx.updates_tx.send(Update::SearchFailed { message }).await;
        }
    }
}

/// Arms the delayed autoplay for the result identified by `seq`. An
/// already-armed timer is superseded.
fn schedule_autoplay(ctx: &mut EventCtx, seq: u64, url: String) {
    if let Some(timer) = ctx.autoplay_timer.take() {
        timer.abort();
    }

    let events_tx = ctx.events_tx.clone();
    let delay = ctx.autoplay_delay;
    ctx.autoplay_timer = Some(tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = events_tx.send(AppEvent::AutoplayDue { seq, url }).await;
    }));
}

/// Fires the scheduled autoplay unless the results it belonged to have
/// been replaced in the meantime.
pub async fn handle_autoplay_due(
    ctl: &SearchController,
    ctx: &EventCtx,
    seq: u64,
    url: String,
) {
    if seq != ctl.lookup_seq() {
        tracing::debug!("dropping autoplay for superseded search #{seq}");
        return;
    }

    crate::events::audio::spawn_playback(ctx, url).await;
}
