use std::sync::Arc;

use lexa_core::LookupError;
use lexa_store::{AUTOPLAY_KEY, HISTORY_KEY, MemoryStore, Store};

use crate::controller::{Applied, FavoriteChange, SearchController};
use crate::state::Outcome;
use crate::tests::support::{
    entry, entry_with_audio, entry_with_meanings, entry_with_synonyms, fresh_controller,
};

#[test]
fn successful_search_loads_entries_and_records_history() {
    let mut ctl = fresh_controller();

    let ticket = ctl.begin_search("Hello").unwrap();
    assert_eq!(ticket.term, "hello");
    assert_eq!(ctl.state().query, "Hello");
    assert!(ctl.state().is_loading);

    let applied = ctl.apply_lookup(
        ticket.seq,
        &ticket.term,
        Ok(vec![entry("hello", "a greeting")]),
    );

    assert_eq!(applied, Applied::Loaded { autoplay: None });
    assert!(!ctl.state().is_loading);
    assert_eq!(ctl.state().primary().unwrap().word, "hello");
    assert_eq!(ctl.history().len(), 1);
    assert_eq!(ctl.history()[0].word, "hello");
}

#[test]
fn failed_search_surfaces_the_typed_term() {
    let mut ctl = fresh_controller();

    let ticket = ctl.begin_search("Xyzzy").unwrap();
    let applied = ctl.apply_lookup(
        ticket.seq,
        &ticket.term,
        Err(LookupError::NotFound {
            term: "xyzzy".to_string(),
        }),
    );

    assert_eq!(
        applied,
        Applied::Failed {
            message: "no definitions found for \"Xyzzy\"".to_string()
        }
    );
    assert!(!ctl.state().is_loading);
    assert_eq!(
        ctl.state().error(),
        Some("no definitions found for \"Xyzzy\"")
    );
    assert!(ctl.history().is_empty());
}

#[test]
fn transport_failure_reads_the_same_as_not_found() {
    let mut ctl = fresh_controller();

    let ticket = ctl.begin_search("ember").unwrap();
    let applied = ctl.apply_lookup(
        ticket.seq,
        &ticket.term,
        Err(LookupError::Transport("connection refused".to_string())),
    );

    assert_eq!(
        applied,
        Applied::Failed {
            message: "no definitions found for \"ember\"".to_string()
        }
    );
}

#[test]
fn empty_entry_list_counts_as_failure() {
    let mut ctl = fresh_controller();

    let ticket = ctl.begin_search("ember").unwrap();
    let applied = ctl.apply_lookup(ticket.seq, &ticket.term, Ok(vec![]));

    assert!(matches!(applied, Applied::Failed { .. }));
    assert!(ctl.state().entries().is_none());
    assert!(ctl.history().is_empty());
}

#[test]
fn blank_search_changes_nothing() {
    let mut ctl = fresh_controller();

    assert!(ctl.begin_search("   ").is_none());
    assert!(ctl.begin_search("").is_none());
    assert!(!ctl.state().is_loading);
    assert_eq!(ctl.lookup_seq(), 0);
}

#[test]
fn stale_completion_is_dropped_wholesale() {
    let mut ctl = fresh_controller();

    let first = ctl.begin_search("slow").unwrap();
    let second = ctl.begin_search("fast").unwrap();
    assert!(ctl.state().is_loading);

    let applied = ctl.apply_lookup(first.seq, &first.term, Ok(vec![entry("slow", "tardy")]));
    assert_eq!(applied, Applied::Stale);
    assert!(ctl.state().is_loading);
    assert!(ctl.state().entries().is_none());
    assert!(ctl.history().is_empty());

    let applied = ctl.apply_lookup(second.seq, &second.term, Ok(vec![entry("fast", "quick")]));
    assert!(matches!(applied, Applied::Loaded { .. }));
    assert!(!ctl.state().is_loading);
    assert_eq!(ctl.state().primary().unwrap().word, "fast");
    assert_eq!(ctl.history().len(), 1);
    assert_eq!(ctl.history()[0].word, "fast");
}

#[test]
fn previous_entries_stay_visible_while_loading() {
    let mut ctl = fresh_controller();

    let ticket = ctl.begin_search("ember").unwrap();
    ctl.apply_lookup(ticket.seq, &ticket.term, Ok(vec![entry("ember", "a coal")]));

    ctl.begin_search("lantern").unwrap();
    assert!(ctl.state().is_loading);
    assert_eq!(ctl.state().primary().unwrap().word, "ember");
}

#[test]
fn new_search_clears_a_previous_failure() {
    let mut ctl = fresh_controller();

    let ticket = ctl.begin_search("xyzzy").unwrap();
    ctl.apply_lookup(
        ticket.seq,
        &ticket.term,
        Err(LookupError::NotFound {
            term: "xyzzy".to_string(),
        }),
    );
    assert!(ctl.state().error().is_some());

    ctl.begin_search("ember").unwrap();
    assert!(matches!(ctl.state().outcome, Outcome::Idle));
    assert!(ctl.state().error().is_none());
}

#[test]
fn repeated_search_moves_the_word_to_the_front_once() {
    let mut ctl = fresh_controller();

    for word in ["ember", "lantern", "Ember"] {
        let ticket = ctl.begin_search(word).unwrap();
        ctl.apply_lookup(ticket.seq, &ticket.term, Ok(vec![entry(word, "x")]));
    }

    let words: Vec<&str> = ctl.history().iter().map(|r| r.word.as_str()).collect();
    assert_eq!(words, ["ember", "lantern"]);
}

#[test]
fn meaning_selection_is_bounds_checked() {
    let mut ctl = fresh_controller();

    let ticket = ctl.begin_search("run").unwrap();
    ctl.apply_lookup(
        ticket.seq,
        &ticket.term,
        Ok(vec![entry_with_meanings("run", &["noun", "verb"])]),
    );

    assert!(ctl.select_meaning(1));
    assert_eq!(ctl.state().selected_meaning, 1);

    assert!(!ctl.select_meaning(2));
    assert_eq!(ctl.state().selected_meaning, 1);

    let mut bare = fresh_controller();
    assert!(!bare.select_meaning(0));
}

#[test]
fn new_result_resets_the_selection() {
    let mut ctl = fresh_controller();

    let ticket = ctl.begin_search("run").unwrap();
    ctl.apply_lookup(
        ticket.seq,
        &ticket.term,
        Ok(vec![entry_with_meanings("run", &["noun", "verb"])]),
    );
    ctl.select_meaning(1);

    let ticket = ctl.begin_search("walk").unwrap();
    ctl.apply_lookup(
        ticket.seq,
        &ticket.term,
        Ok(vec![entry_with_meanings("walk", &["noun", "verb"])]),
    );

    assert_eq!(ctl.state().selected_meaning, 0);
}

#[test]
fn toggle_favorite_snapshots_the_definition() {
    let mut ctl = fresh_controller();

    let ticket = ctl.begin_search("rust").unwrap();
    ctl.apply_lookup(ticket.seq, &ticket.term, Ok(vec![entry("rust", "iron oxide")]));

    assert_eq!(
        ctl.toggle_favorite(),
        Some(FavoriteChange::Added("rust".to_string()))
    );
    assert_eq!(ctl.favorites()[0].word, "rust");
    assert_eq!(ctl.favorites()[0].definition, "iron oxide");

    // A later lookup with a different definition does not refresh the
    // snapshot.
    let ticket = ctl.begin_search("rust").unwrap();
    ctl.apply_lookup(
        ticket.seq,
        &ticket.term,
        Ok(vec![entry("rust", "a systems language")]),
    );
    assert_eq!(ctl.favorites()[0].definition, "iron oxide");

    assert_eq!(
        ctl.toggle_favorite(),
        Some(FavoriteChange::Removed("rust".to_string()))
    );
    assert!(ctl.favorites().is_empty());
}

#[test]
fn toggle_favorite_without_results_is_a_no_op() {
    let mut ctl = fresh_controller();
    assert_eq!(ctl.toggle_favorite(), None);

    let ticket = ctl.begin_search("xyzzy").unwrap();
    ctl.apply_lookup(
        ticket.seq,
        &ticket.term,
        Err(LookupError::NotFound {
            term: "xyzzy".to_string(),
        }),
    );
    assert_eq!(ctl.toggle_favorite(), None);
}

#[test]
fn favorite_identity_keeps_the_service_casing() {
    let mut ctl = fresh_controller();

    let ticket = ctl.begin_search("Rust").unwrap();
    ctl.apply_lookup(ticket.seq, &ticket.term, Ok(vec![entry("Rust", "a crab")]));
    ctl.toggle_favorite();

    let ticket = ctl.begin_search("rust").unwrap();
    ctl.apply_lookup(ticket.seq, &ticket.term, Ok(vec![entry("rust", "iron oxide")]));
    ctl.toggle_favorite();

    let words: Vec<&str> = ctl.favorites().iter().map(|r| r.word.as_str()).collect();
    assert_eq!(words, ["rust", "Rust"]);

    assert!(ctl.remove_favorite("Rust"));
    assert!(!ctl.remove_favorite("RUST"));
    assert_eq!(ctl.favorites().len(), 1);
}

#[test]
fn autoplay_decision_follows_the_preference() {
    let mut ctl = fresh_controller();
    let clip = "https://x/ember.mp3";

    let ticket = ctl.begin_search("ember").unwrap();
    let applied = ctl.apply_lookup(
        ticket.seq,
        &ticket.term,
        Ok(vec![entry_with_audio("ember", "a coal", clip)]),
    );
    assert_eq!(applied, Applied::Loaded { autoplay: None });

    ctl.toggle_autoplay();
    let ticket = ctl.begin_search("ember").unwrap();
    let applied = ctl.apply_lookup(
        ticket.seq,
        &ticket.term,
        Ok(vec![entry_with_audio("ember", "a coal", clip)]),
    );
    assert_eq!(
        applied,
        Applied::Loaded {
            autoplay: Some(clip.to_string())
        }
    );

    // Preference on but no audio in the result: nothing to play.
    let ticket = ctl.begin_search("mute").unwrap();
    let applied = ctl.apply_lookup(ticket.seq, &ticket.term, Ok(vec![entry("mute", "silent")]));
    assert_eq!(applied, Applied::Loaded { autoplay: None });
}

#[test]
fn copy_marker_supersede_and_expiry() {
    let mut ctl = fresh_controller();

    let first = ctl.mark_copied("alpha");
    let second = ctl.mark_copied("beta");
    assert_eq!(ctl.copy_marker(), Some("beta"));

    // The superseded timer's expiry must not clear the newer marker.
    assert!(!ctl.expire_copy_marker(first));
    assert_eq!(ctl.copy_marker(), Some("beta"));

    assert!(ctl.expire_copy_marker(second));
    assert_eq!(ctl.copy_marker(), None);
    assert!(!ctl.expire_copy_marker(second));
}

#[test]
fn synonyms_come_from_the_primary_entry() {
    let mut ctl = fresh_controller();
    assert!(ctl.all_synonyms().is_empty());

    let ticket = ctl.begin_search("happy").unwrap();
    ctl.apply_lookup(
        ticket.seq,
        &ticket.term,
        Ok(vec![
            entry_with_synonyms("happy", "feeling joy", &["glad", "content"]),
            entry_with_synonyms("happy", "lucky", &["fortunate"]),
        ]),
    );

    assert_eq!(ctl.all_synonyms(), ["glad", "content"]);
}

#[test]
fn state_persists_across_bootstrap() {
    let store = Arc::new(MemoryStore::new());

    {
        let mut ctl = SearchController::bootstrap(store.clone() as Arc<dyn Store>);
        let ticket = ctl.begin_search("ember").unwrap();
        ctl.apply_lookup(ticket.seq, &ticket.term, Ok(vec![entry("ember", "a coal")]));
        ctl.toggle_favorite();
        ctl.toggle_dark_mode();
    }

    let ctl = SearchController::bootstrap(store as Arc<dyn Store>);
    assert_eq!(ctl.history()[0].word, "ember");
    assert_eq!(ctl.favorites()[0].word, "ember");
    assert_eq!(ctl.favorites()[0].definition, "a coal");
    assert!(ctl.dark_mode());
    assert!(!ctl.autoplay());
}

#[test]
fn bootstrap_survives_corrupt_store_data() {
    let store = Arc::new(MemoryStore::new());
    store.set(HISTORY_KEY, "{definitely not json").unwrap();
    store.set(AUTOPLAY_KEY, "maybe").unwrap();

    let ctl = SearchController::bootstrap(store as Arc<dyn Store>);
    assert!(ctl.history().is_empty());
    assert!(!ctl.autoplay());
    assert!(!ctl.dark_mode());
}
