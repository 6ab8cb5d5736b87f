use lexa_core::{AppEvent, Update};

use crate::controller::SearchController;
use crate::events::EventCtx;

/// Copies `text` and arms the self-clearing marker. The marker follows the
/// copy action even when the platform clipboard is unavailable; the write
/// failure is only logged. A pending expiry timer is superseded.
pub async fn handle_copy(ctl: &mut SearchController, ctx: &mut EventCtx, text: String) {
    if let Err(e) = lexa_io::copy_text(&text) {
        tracing::warn!("clipboard write failed: {e}");
    }

    let seq = ctl.mark_copied(&text);

    if let Some(timer) = ctx.copy_timer.take() {
        timer.abort();
    }

    let events_tx = ctx.events_tx.clone();
    let ttl = ctx.copy_ttl;
    ctx.copy_timer = Some(tokio::spawn(async move {
        tokio::time::sleep(ttl).await;
        let _ = events_tx.send(AppEvent::CopyExpired { seq }).await;
    }));

    let _ = ctx.updates_tx.send(Update::CopyConfirmed { text }).await;
}

/// Expiry re-entering the loop. The sequence check makes a raced stale
/// timer a no-op.
pub async fn handle_copy_expired(ctl: &mut SearchController, ctx: &EventCtx, seq: u64) {
    if ctl.expire_copy_marker(seq) {
        let _ = ctx.updates_tx.send(Update::CopyCleared).await;
    }
}
