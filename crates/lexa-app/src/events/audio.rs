use lexa_core::Update;

use crate::controller::SearchController;
use crate::events::EventCtx;

/// Plays the current results' pronunciation, if they have one.
pub async fn handle_play(ctl: &SearchController, ctx: &EventCtx) {
    match ctl.audio_url() {
        Some(url) => spawn_playback(ctx, url.to_string()).await,
        None => tracing::debug!("no pronunciation audio in current results"),
    }
}

/// Fire-and-forget playback: the player runs as its own task and failures
/// are logged, never surfaced.
pub async fn spawn_playback(ctx: &EventCtx, url: String) {
    let _ = ctx
        .updates_tx
        .send(Update::AudioStarted { url: url.clone() })
        .await;

    let player = ctx.player.clone();
    tokio::spawn(async move {
        if let Err(e) = player.play(&url).await {
            tracing::warn!("audio playback failed: {e}");
        }
    });
}
