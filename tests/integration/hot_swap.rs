//! Swapping snapshots under live searches.

use std::sync::Arc;
use std::thread;

use super::common::{build_test_index, three_doc_index};
use loomsearch::{Bm25Params, EngineSlot, SearchEngine};

#[test]
fn test_in_flight_engine_survives_swap() {
    let slot = EngineSlot::new(SearchEngine::new(three_doc_index()));
    let in_flight = slot.current();

    slot.replace_index(build_test_index(&[("Kotlin", "kotlin coroutines")]));

    // The old handle still sees the old snapshot
    assert_eq!(in_flight.search("javascript").len(), 1);
    assert!(in_flight.search("kotlin").is_empty());

    // New lookups see the new one
    assert!(slot.current().search("javascript").is_empty());
    assert_eq!(slot.current().search("kotlin").len(), 1);
}

#[test]
fn test_replace_index_keeps_params() {
    let params = Bm25Params::new(0.9, 0.3);
    let slot = EngineSlot::new(SearchEngine::with_params(three_doc_index(), params));
    slot.replace_index(three_doc_index());
    assert_eq!(slot.current().params(), params);
}

#[test]
fn test_swap_returns_previous_engine() {
    let slot = EngineSlot::new(SearchEngine::new(three_doc_index()));
    let previous = slot.swap(SearchEngine::new(build_test_index(&[])));
    assert_eq!(previous.index().document_count(), 3);
    assert_eq!(slot.current().index().document_count(), 0);
}

#[test]
fn test_readers_never_see_a_partial_snapshot() {
    let small = Arc::new(three_doc_index());
    let large = Arc::new(build_test_index(&[
        ("JavaScript", "javascript"),
        ("More JavaScript", "javascript javascript"),
        ("Even more", "javascript"),
    ]));
    let slot = EngineSlot::new(SearchEngine::new(Arc::clone(&small)));

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..200 {
                    let engine = slot.current();
                    let count = engine.search("javascript").len();
                    // Either snapshot, never a mix
                    let expected = if Arc::ptr_eq(&engine.shared_index(), &small) { 1 } else { 3 };
                    assert_eq!(count, expected);
                }
            });
        }
        scope.spawn(|| {
            for i in 0..100 {
                let next = if i % 2 == 0 { &large } else { &small };
                slot.replace_index(Arc::clone(next));
            }
        });
    });
}
