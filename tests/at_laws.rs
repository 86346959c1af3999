//! Property-based tests for the `at` combinators.
//!
//! For an index that occurs at most once, the lenses returned by
//! `at_traversal` and `at_affine_traversal` satisfy the lens laws restricted
//! to present foci:
//!
//! - **GetPut Law**: `lens.set(source, lens.view(&source)) == source`
//! - **PutGet Law**: if the focus is present, `lens.view(&lens.set(source, Some(v))) == Some(v)`
//! - **PutPut Law**: `lens.set(lens.set(source, Some(v1)), Some(v2)) == lens.set(source, Some(v2))`
//!
//! Writing `None` is always the identity, and writing to an absent focus
//! never inserts. For duplicated indices, reads see the first focus and
//! writes reach every focus.

use std::collections::BTreeMap;

use outcome_optics::optics::{
    Getter, IndexedGetter, IndexedLens, Lens, at_affine_traversal, at_fold, at_traversal,
    association_list, btree_map_indexed, vec_head, vec_indexed,
};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn map_strategy() -> impl Strategy<Value = BTreeMap<u8, i32>> {
    prop::collection::btree_map(0u8..16, any::<i32>(), 0..8)
}

fn association_strategy() -> impl Strategy<Value = Vec<(u8, i32)>> {
    prop::collection::vec((0u8..4, any::<i32>()), 0..12)
}

// =============================================================================
// at_traversal on unique keys
// =============================================================================

proptest! {
    /// GetPut Law: writing back what was viewed changes nothing
    #[test]
    fn prop_at_traversal_get_put(map in map_strategy(), key in 0u8..16) {
        let lens = at_traversal(btree_map_indexed::<u8, i32>(), key);
        let (_, current) = lens.view_indexed(&map);
        prop_assert_eq!(lens.set(map.clone(), current), map);
    }

    /// PutGet Law: a write to a present key is what the next view sees
    #[test]
    fn prop_at_traversal_put_get(map in map_strategy(), key in 0u8..16, value in any::<i32>()) {
        let lens = at_traversal(btree_map_indexed::<u8, i32>(), key);
        let updated = lens.set(map.clone(), Some(value));
        let expected = map.contains_key(&key).then_some(value);
        prop_assert_eq!(lens.view_indexed(&updated), (key, expected));
    }

    /// PutPut Law: the second write wins
    #[test]
    fn prop_at_traversal_put_put(
        map in map_strategy(),
        key in 0u8..16,
        first in any::<i32>(),
        second in any::<i32>(),
    ) {
        let lens = at_traversal(btree_map_indexed::<u8, i32>(), key);
        prop_assert_eq!(
            lens.set(lens.set(map.clone(), Some(first)), Some(second)),
            lens.set(map, Some(second))
        );
    }

    /// Writing None is the identity
    #[test]
    fn prop_at_traversal_set_none_is_identity(map in map_strategy(), key in 0u8..16) {
        let lens = at_traversal(btree_map_indexed::<u8, i32>(), key);
        prop_assert_eq!(lens.set(map.clone(), None), map);
    }

    /// Writes never change the key set
    #[test]
    fn prop_at_traversal_preserves_keys(map in map_strategy(), key in 0u8..16, value in any::<i32>()) {
        let lens = at_traversal(btree_map_indexed::<u8, i32>(), key);
        let updated = lens.set(map.clone(), Some(value));
        prop_assert!(updated.keys().eq(map.keys()));
    }

    /// at_fold views agree with at_traversal views
    #[test]
    fn prop_at_fold_agrees_with_at_traversal(map in map_strategy(), key in 0u8..16) {
        let getter = at_fold(btree_map_indexed::<u8, i32>(), key);
        let lens = at_traversal(btree_map_indexed::<u8, i32>(), key);
        prop_assert_eq!(getter.view_indexed(&map), lens.view_indexed(&map));
        prop_assert_eq!(getter.view_indexed(&map).1, map.get(&key).copied());
    }
}

// =============================================================================
// at_traversal on duplicated keys
// =============================================================================

proptest! {
    /// Reads return the first entry carrying the key
    #[test]
    fn prop_duplicate_keys_read_first(entries in association_strategy(), key in 0u8..4) {
        let lens = at_traversal(association_list::<u8, i32>(), key);
        let first = entries.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);
        prop_assert_eq!(lens.view_indexed(&entries).1, first);
    }

    /// Writes replace every entry carrying the key and nothing else
    #[test]
    fn prop_duplicate_keys_write_all(
        entries in association_strategy(),
        key in 0u8..4,
        value in any::<i32>(),
    ) {
        let lens = at_traversal(association_list::<u8, i32>(), key);
        let updated = lens.set(entries.clone(), Some(value));

        prop_assert_eq!(updated.len(), entries.len());
        for ((old_key, old_value), (new_key, new_value)) in entries.iter().zip(updated.iter()) {
            prop_assert_eq!(old_key, new_key);
            if *old_key == key {
                prop_assert_eq!(*new_value, value);
            } else {
                prop_assert_eq!(new_value, old_value);
            }
        }
    }
}

// =============================================================================
// at_affine_traversal
// =============================================================================

proptest! {
    /// The view is the head exactly when the requested index is 0
    #[test]
    fn prop_at_affine_traversal_view(numbers in prop::collection::vec(any::<i32>(), 0..6), index in 0usize..3) {
        let lens = at_affine_traversal(vec_head::<i32>(), index);
        let expected = if index == 0 { numbers.first().copied() } else { None };
        prop_assert_eq!(lens.view(&numbers), expected);
    }

    /// GetPut and PutPut for the head lens
    #[test]
    fn prop_at_affine_traversal_laws(
        numbers in prop::collection::vec(any::<i32>(), 0..6),
        first in any::<i32>(),
        second in any::<i32>(),
    ) {
        let lens = at_affine_traversal(vec_head::<i32>(), 0);
        prop_assert_eq!(lens.set(numbers.clone(), lens.view(&numbers)), numbers.clone());
        prop_assert_eq!(
            lens.set(lens.set(numbers.clone(), Some(first)), Some(second)),
            lens.set(numbers, Some(second))
        );
    }

    /// Only the element at the index changes
    #[test]
    fn prop_at_traversal_on_vec_touches_one_position(
        numbers in prop::collection::vec(any::<i32>(), 1..8),
        value in any::<i32>(),
    ) {
        let index = numbers.len() / 2;
        let lens = at_traversal(vec_indexed::<i32>(), index);
        let updated = lens.set(numbers.clone(), Some(value));

        for (position, (old, new)) in numbers.iter().zip(updated.iter()).enumerate() {
            if position == index {
                prop_assert_eq!(*new, value);
            } else {
                prop_assert_eq!(new, old);
            }
        }
    }
}
