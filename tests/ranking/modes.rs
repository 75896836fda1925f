//! Per-mode scoring and filtering.

use super::common::{assert_result_well_formed, find, make_item, sample_blog};
use kinship::{rank, score, RankMode, CATEGORY_BONUS};

#[test]
fn test_mixed_mode_blends_tag_and_category() {
    let blog = sample_blog();
    let reference = find(&blog, "react-hooks");

    let result = rank(reference, &blog, 3, RankMode::Mixed).unwrap();

    assert_result_well_formed(&result, reference, 3);
    assert_eq!(result.ids(), vec!["react-state", "css-grid", "wasm-react"]);
    assert!((result.items[0].score - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(result.items[1].score, CATEGORY_BONUS);
    assert_eq!(result.items[2].score, CATEGORY_BONUS);
}

#[test]
fn test_tag_mode_ignores_category() {
    let blog = sample_blog();
    let reference = find(&blog, "react-hooks");

    let result = rank(reference, &blog, 10, RankMode::Tag).unwrap();

    assert_result_well_formed(&result, reference, 10);
    // css-grid shares the category but no tags.
    assert_eq!(result.ids(), vec!["react-state", "wasm-react"]);
}

#[test]
fn test_tag_mode_crosses_categories() {
    let blog = sample_blog();
    let reference = find(&blog, "async-rust");

    let result = rank(reference, &blog, 10, RankMode::Tag).unwrap();

    assert_eq!(result.ids(), vec!["tokio-intro", "rust-errors", "wasm-react"]);
    assert_eq!(result.scores()[0], 1.0);
    assert_eq!(result.scores()[1], result.scores()[2]);
}

#[test]
fn test_category_mode_is_flat() {
    let blog = sample_blog();
    let reference = find(&blog, "react-hooks");

    let result = rank(reference, &blog, 10, RankMode::Category).unwrap();

    assert_result_well_formed(&result, reference, 10);
    assert_eq!(result.ids(), vec!["react-state", "css-grid", "wasm-react"]);
    assert!(result.scores().iter().all(|&s| s == CATEGORY_BONUS));
}

#[test]
fn test_mixed_mode_keeps_cross_category_tag_matches() {
    let blog = sample_blog();
    let reference = find(&blog, "async-rust");

    let result = rank(reference, &blog, 10, RankMode::Mixed).unwrap();

    assert_eq!(result.ids(), vec!["tokio-intro", "rust-errors", "wasm-react"]);
    assert!((result.items[2].score - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_mixed_score_is_max_of_signals() {
    let reference = make_item("r", "web", &["a", "b", "c", "d"], 0);
    let weak_tags_same_category = make_item("x", "web", &["a"], 0);
    let strong_tags_other_category = make_item("y", "mobile", &["a", "b", "c"], 0);

    assert_eq!(
        score(&reference, &weak_tags_same_category, RankMode::Mixed),
        Some(CATEGORY_BONUS)
    );
    assert_eq!(
        score(&reference, &strong_tags_other_category, RankMode::Mixed),
        Some(0.75)
    );
}

#[test]
fn test_every_mode_excludes_unrelated_items() {
    let blog = sample_blog();
    let reference = find(&blog, "alps-trip");

    for mode in RankMode::ALL {
        let result = rank(reference, &blog, 5, mode).unwrap();
        assert!(result.is_empty(), "{} mode returned {:?}", mode, result.ids());
    }
}
