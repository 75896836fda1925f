//! Ordering among equal scores: newer first, then id ascending.

use super::common::{make_item, worked_example};
use kinship::{compare_scored, rank, RankMode, ScoredItem};
use std::cmp::Ordering;

#[test]
fn test_worked_example_limit_two() {
    let (reference, pool) = worked_example();

    let result = rank(&reference, &pool, 2, RankMode::Mixed).unwrap();

    // c matches every tag; a and b tie on the category bonus and a is newer.
    assert_eq!(result.ids(), vec!["c", "a"]);
    assert_eq!(result.scores(), vec![1.0, 0.5]);
}

#[test]
fn test_worked_example_full_list() {
    let (reference, pool) = worked_example();

    let result = rank(&reference, &pool, 3, RankMode::Mixed).unwrap();

    assert_eq!(result.ids(), vec!["c", "a", "b"]);
}

#[test]
fn test_same_date_falls_back_to_id() {
    let reference = make_item("r", "web", &["rust"], 0);
    let pool = vec![
        make_item("zeta", "web", &["rust"], 100),
        make_item("alpha", "web", &["rust"], 100),
        make_item("mid", "web", &["rust"], 100),
    ];

    let result = rank(&reference, &pool, 3, RankMode::Mixed).unwrap();

    assert_eq!(result.ids(), vec!["alpha", "mid", "zeta"]);
}

#[test]
fn test_order_independent_of_input_order() {
    let reference = make_item("r", "web", &["rust", "wasm"], 0);
    let mut pool = vec![
        make_item("a", "web", &["rust"], 10),
        make_item("b", "web", &["css"], 20),
        make_item("c", "cli", &["rust", "wasm"], 5),
        make_item("d", "web", &["wasm"], 10),
        make_item("e", "web", &[], 30),
    ];

    let forward = rank(&reference, &pool, 5, RankMode::Mixed).unwrap();
    pool.reverse();
    let backward = rank(&reference, &pool, 5, RankMode::Mixed).unwrap();

    assert_eq!(forward, backward);
    assert_eq!(forward.ids(), vec!["c", "e", "b", "a", "d"]);
}

#[test]
fn test_truncation_keeps_best_after_tie_break() {
    let reference = make_item("r", "web", &[], 0);
    let pool: Vec<_> = (0..20)
        .map(|i| make_item(&format!("post-{:02}", i), "web", &[], i * 10))
        .collect();

    let result = rank(&reference, &pool, 3, RankMode::Category).unwrap();

    assert_eq!(result.ids(), vec!["post-19", "post-18", "post-17"]);
}

#[test]
fn test_comparator_is_total() {
    let newer = ScoredItem {
        item: make_item("b", "web", &[], 10),
        score: 0.5,
    };
    let older = ScoredItem {
        item: make_item("a", "web", &[], 5),
        score: 0.5,
    };
    let stronger = ScoredItem {
        item: make_item("z", "web", &[], 0),
        score: 0.9,
    };

    assert_eq!(compare_scored(&stronger, &newer), Ordering::Less);
    assert_eq!(compare_scored(&newer, &older), Ordering::Less);
    assert_eq!(compare_scored(&older, &newer), Ordering::Greater);
    assert_eq!(compare_scored(&older, &older), Ordering::Equal);
}
