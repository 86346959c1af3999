//! Property-based tests for Outcome laws.
//!
//! - **Functor Laws** for `map_success` and `map_failure`
//! - **Monad Laws** for `then`
//! - **Bifunctor Laws** for `bimap`
//! - **Tap Transparency**: `tap_success` / `tap_failure` return the input
//!
//! The type class instances are checked against the inherent combinators
//! they are defined by.

use outcome_optics::control::{Outcome, failure, success};
use outcome_optics::typeclass::{Applicative, Bifunctor, Functor, Monad};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn outcome_strategy() -> impl Strategy<Value = Outcome<String, i32>> {
    prop_oneof![
        any::<i32>().prop_map(success::<String, i32>),
        "[a-z]{0,8}".prop_map(failure::<String, i32>),
    ]
}

fn half(value: i32) -> Outcome<String, i32> {
    if value % 2 == 0 {
        success(value / 2)
    } else {
        failure(format!("{value} is odd"))
    }
}

fn checked_increment(value: i32) -> Outcome<String, i32> {
    value
        .checked_add(1)
        .map_or_else(|| failure("overflow".to_string()), success)
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Identity Law: map_success(id) == id
    #[test]
    fn prop_map_success_identity(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().map_success(|x| x), outcome);
    }

    /// Identity Law: map_failure(id) == id
    #[test]
    fn prop_map_failure_identity(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().map_failure(|x| x), outcome);
    }

    /// Composition Law: map_success(f).map_success(g) == map_success(g . f)
    #[test]
    fn prop_map_success_composition(outcome in outcome_strategy()) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.wrapping_sub(7);
        prop_assert_eq!(
            outcome.clone().map_success(f).map_success(g),
            outcome.map_success(|x| g(f(x)))
        );
    }

    /// Composition Law: map_failure(f).map_failure(g) == map_failure(g . f)
    #[test]
    fn prop_map_failure_composition(outcome in outcome_strategy()) {
        let f = |text: String| text.len();
        let g = |length: usize| length * 2;
        prop_assert_eq!(
            outcome.clone().map_failure(f).map_failure(g),
            outcome.map_failure(|x| g(f(x)))
        );
    }

    /// Functor::fmap agrees with map_success
    #[test]
    fn prop_fmap_is_map_success(outcome in outcome_strategy()) {
        prop_assert_eq!(
            outcome.clone().fmap(|x| x.wrapping_add(1)),
            outcome.map_success(|x| x.wrapping_add(1))
        );
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity Law: success(a).then(f) == f(a)
    #[test]
    fn prop_then_left_identity(value in any::<i32>()) {
        prop_assert_eq!(success::<String, i32>(value).then(half), half(value));
    }

    /// Right Identity Law: m.then(success) == m
    #[test]
    fn prop_then_right_identity(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().then(success), outcome);
    }

    /// Associativity Law: m.then(f).then(g) == m.then(|x| f(x).then(g))
    #[test]
    fn prop_then_associativity(outcome in outcome_strategy()) {
        prop_assert_eq!(
            outcome.clone().then(half).then(checked_increment),
            outcome.then(|x| half(x).then(checked_increment))
        );
    }

    /// A failure passes through then untouched
    #[test]
    fn prop_then_preserves_failure(message in "[a-z]{1,8}") {
        let outcome: Outcome<String, i32> = failure(message.clone());
        prop_assert_eq!(outcome.then(half), Outcome::Failure(message));
    }

    /// Monad::flat_map agrees with then
    #[test]
    fn prop_flat_map_is_then(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().flat_map(half), outcome.then(half));
    }

    /// Applicative::pure is success
    #[test]
    fn prop_pure_is_success(value in any::<i32>()) {
        prop_assert_eq!(<Outcome<String, ()>>::pure(value), success::<String, i32>(value));
    }
}

// =============================================================================
// Bifunctor Laws
// =============================================================================

proptest! {
    /// Identity Law: bimap(id, id) == id
    #[test]
    fn prop_bimap_identity(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().bimap(|x| x, |y| y), outcome);
    }

    /// bimap(f, g) == map_failure(f).map_success(g)
    #[test]
    fn prop_bimap_is_both_maps(outcome in outcome_strategy()) {
        prop_assert_eq!(
            outcome.clone().bimap(|text| text.len(), |x| x.wrapping_neg()),
            outcome.map_failure(|text| text.len()).map_success(|x| x.wrapping_neg())
        );
    }

    /// Bifunctor::first and second agree with map_failure and map_success
    #[test]
    fn prop_first_second_consistency(outcome in outcome_strategy()) {
        prop_assert_eq!(
            Bifunctor::first(outcome.clone(), |text: String| text.len()),
            outcome.clone().map_failure(|text| text.len())
        );
        prop_assert_eq!(
            Bifunctor::second(outcome.clone(), |x: i32| x.wrapping_neg()),
            outcome.map_success(|x| x.wrapping_neg())
        );
    }
}

// =============================================================================
// Fold and Tap
// =============================================================================

proptest! {
    /// fold with the two constructors rebuilds the outcome
    #[test]
    fn prop_fold_with_constructors_is_identity(outcome in outcome_strategy()) {
        let rebuilt: Outcome<String, i32> = outcome.clone().fold(failure, success);
        prop_assert_eq!(rebuilt, outcome);
    }

    /// tap_success and tap_failure return their input unchanged
    #[test]
    fn prop_taps_are_transparent(outcome in outcome_strategy()) {
        let mut observed = 0;
        let tapped = outcome
            .clone()
            .tap_success(|_| observed += 1)
            .tap_failure(|_| observed += 1);
        prop_assert_eq!(tapped, outcome);
        prop_assert_eq!(observed, 1);
    }
}
