//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome_optics::control::{Outcome, failure, success};
//! use outcome_optics::typeclass::Monad;
//!
//! fn positive(n: i32) -> Outcome<String, i32> {
//!     if n > 0 { success(n) } else { failure(format!("{n} is not positive")) }
//! }
//!
//! assert_eq!(positive(2).flat_map(|n| positive(n - 5)), failure("-3 is not positive".to_string()));
//! ```

use super::applicative::Applicative;
use crate::control::Outcome;

/// A type class for sequencing computations where each step depends on the
/// previous one.
///
/// For `Outcome`, `flat_map` is [`Outcome::then`].
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    fn flat_map<B, Function>(self, function: Function) -> Self::WithType<B>
    where
        Function: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, Function>(self, function: Function) -> Self::WithType<B>
    where
        Self: Sized,
        Function: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }
}

impl<F: Clone, S> Monad for Outcome<F, S> {
    #[inline]
    fn flat_map<B, Function>(self, function: Function) -> Outcome<F, B>
    where
        Function: FnOnce(S) -> Outcome<F, B>,
    {
        self.then(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{failure, success};
    use rstest::rstest;

    fn increment(x: i32) -> Outcome<&'static str, i32> {
        success(x + 1)
    }

    fn double(x: i32) -> Outcome<&'static str, i32> {
        success(x * 2)
    }

    #[rstest]
    fn outcome_flat_map_success() {
        let value: Outcome<&str, i32> = success(3);
        assert_eq!(value.flat_map(increment), Outcome::Success(4));
    }

    #[rstest]
    fn outcome_flat_map_failure() {
        let value: Outcome<&str, i32> = failure("bad");
        assert_eq!(value.flat_map(increment), Outcome::Failure("bad"));
    }

    #[rstest]
    fn outcome_and_then_alias() {
        let value: Outcome<&str, i32> = success(3);
        assert_eq!(value.and_then(double), value.flat_map(double));
    }

    #[rstest]
    fn outcome_left_identity_law() {
        assert_eq!(<Outcome<&str, ()>>::pure(5).flat_map(increment), increment(5));
    }

    #[rstest]
    #[case(success(7))]
    #[case(failure("bad"))]
    fn outcome_right_identity_law(#[case] value: Outcome<&'static str, i32>) {
        assert_eq!(value.flat_map(<Outcome<&str, ()>>::pure), value);
    }

    #[rstest]
    #[case(success(7))]
    #[case(failure("bad"))]
    fn outcome_associativity_law(#[case] value: Outcome<&'static str, i32>) {
        let left = value.flat_map(increment).flat_map(double);
        let right = value.flat_map(|x| increment(x).flat_map(double));
        assert_eq!(left, right);
    }
}
