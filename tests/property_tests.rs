//! Property-based tests for path composition.
//!
//! These use proptest to verify the join invariants hold across randomly
//! generated segment sequences.

use std::path::PathBuf;

use proptest::prelude::*;

use gitling::core::paths::{path_join, push_segments};

/// Strategy for a single path segment: possibly empty, no separators.
fn segment() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::char::range('a', 'z'),
            prop::char::range('0', '9'),
            Just('-'),
            Just('_'),
            Just('.'),
        ],
        0..12,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    /// The join of any non-empty sequence is exactly the non-empty
    /// segments joined with single separators, in order.
    #[test]
    fn join_keeps_exactly_the_non_empty_segments(segments in prop::collection::vec(segment(), 1..8)) {
        let refs: Vec<&str> = segments.iter().map(String::as_str).collect();
        let expected: String = refs
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("/");

        prop_assert_eq!(path_join(refs.iter().copied()), Some(PathBuf::from(expected)));
    }

    /// Interleaving empty segments never changes the result.
    #[test]
    fn empty_segments_are_transparent(segments in prop::collection::vec(segment(), 1..6)) {
        let refs: Vec<&str> = segments.iter().map(String::as_str).collect();

        let mut padded: Vec<&str> = Vec::new();
        for segment in &refs {
            padded.push("");
            padded.push(segment);
        }
        padded.push("");

        prop_assert_eq!(
            path_join(padded.iter().copied()),
            path_join(refs.iter().copied())
        );
    }

    /// Appending segments to a base agrees with the pure join rooted at
    /// that base.
    #[test]
    fn push_segments_agrees_with_path_join(segments in prop::collection::vec(segment(), 0..6)) {
        let refs: Vec<&str> = segments.iter().map(String::as_str).collect();

        let mut rooted: Vec<&str> = vec!["base"];
        rooted.extend(refs.iter().copied());

        prop_assert_eq!(
            Some(push_segments(std::path::Path::new("base"), &refs)),
            path_join(rooted.iter().copied())
        );
    }
}

#[test]
fn join_of_an_empty_sequence_is_none() {
    let nothing: Vec<&str> = Vec::new();
    assert_eq!(path_join(nothing), None);
}
