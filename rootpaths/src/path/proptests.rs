//! Property-based tests for path handling.
//!
//! The normalize module already has light property tests. This module runs
//! heavier suites over normalization, joining and ordered merging.

use super::normalize::{join, normalize};
use super::types::ResolvedPaths;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_.-]{1,12}"
}

fn raw_path_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(segment_strategy(), 0..6),
        prop_oneof![Just("/"), Just("\\")],
        0..4usize,
    )
        .prop_map(|(parts, sep, trailing)| {
            let mut path = format!("{sep}{}", parts.join(sep));
            path.push_str(&sep.repeat(trailing));
            path
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 5000,
        .. ProptestConfig::default()
    })]

    // normalize(normalize(p)) == normalize(p)
    #[test]
    fn normalization_idempotent(path in raw_path_strategy()) {
        let once = normalize(&path);
        prop_assert_eq!(normalize(&once), once);
    }

    // Separator style does not change the normalized result
    #[test]
    fn normalization_separator_agnostic(parts in prop::collection::vec(segment_strategy(), 1..6)) {
        let unix = format!("/{}/", parts.join("/"));
        let windows = format!("\\{}\\", parts.join("\\"));
        prop_assert_eq!(normalize(&unix), normalize(&windows));
    }

    // A leading slash on the relative part never changes a join
    #[test]
    fn join_ignores_leading_slash(parts in prop::collection::vec(segment_strategy(), 1..6)) {
        let relative = parts.join("/");
        let rooted = format!("/{relative}");
        prop_assert_eq!(join("/base", &relative), join("/base", &rooted));
    }

    // Joined paths never contain a doubled separator at the seam
    #[test]
    fn join_no_double_separator(parts in prop::collection::vec(segment_strategy(), 1..6)) {
        let relative = format!("//{}", parts.join("/"));
        let joined = join("/base", &relative);
        prop_assert!(joined.starts_with("/base/"));
        prop_assert!(!joined.starts_with("/base//"));
    }

    // Merging keeps the first map's key order and the second map's values
    #[test]
    fn merge_later_wins(keys in prop::collection::btree_set("[a-z]{1,6}", 1..10)) {
        let keys: Vec<String> = keys.into_iter().collect();
        let base: ResolvedPaths = keys.iter().map(|k| (k.clone(), "base".to_string())).collect();
        let overlay: ResolvedPaths = keys.iter().rev().map(|k| (k.clone(), "overlay".to_string())).collect();

        let mut merged = base.clone();
        merged.merge(&overlay);

        prop_assert_eq!(merged.names().collect::<Vec<_>>(), base.names().collect::<Vec<_>>());
        prop_assert!(merged.iter().all(|(_, v)| v == "overlay"));
    }
}
