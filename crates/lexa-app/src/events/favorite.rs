use lexa_core::Update;

use crate::controller::{FavoriteChange, SearchController};
use crate::events::EventCtx;

pub async fn handle_toggle_favorite(ctl: &mut SearchController, ctx: &EventCtx) {
    let Some(change) = ctl.toggle_favorite() else {
        tracing::debug!("no current entry to favorite");
        return;
    };

    match &change {
        FavoriteChange::Added(word) => tracing::info!("saved {word:?}"),
        FavoriteChange::Removed(word) => tracing::info!("unsaved {word:?}"),
    }

    let _ = ctx
        .updates_tx
        .send(Update::FavoritesChanged(ctl.favorites().to_vec()))
        .await;
}

pub async fn handle_remove_favorite(ctl: &mut SearchController, ctx: &EventCtx, word: &str) {
    if !ctl.remove_favorite(word) {
        tracing::debug!("{word:?} was not saved");
        return;
    }

    let _ = ctx
        .updates_tx
        .send(Update::FavoritesChanged(ctl.favorites().to_vec()))
        .await;
}
