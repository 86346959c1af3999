//! Applicative type class - lifting values and combining independent outcomes.
//!
//! `Applicative` extends [`Functor`] with:
//!
//! - `pure`: lift a plain value into the context
//! - `map2`: combine two independent values in the context
//! - `product` / `apply`: derived from `map2`
//!
//! For `Outcome`, combining stops at the first `Failure`, reading left to
//! right.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome_optics::control::Outcome;
//! use outcome_optics::typeclass::Applicative;
//!
//! let width: Outcome<String, u32> = Outcome::Success(3);
//! let height: Outcome<String, u32> = Outcome::Success(4);
//! assert_eq!(width.map2(height, |w, h| w * h), Outcome::Success(12));
//! ```

use super::functor::Functor;
use crate::control::Outcome;

/// A type class for types that support lifting values and combining contexts.
///
/// See the module documentation for the laws.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::Outcome;
    /// use outcome_optics::typeclass::Applicative;
    ///
    /// let lifted = <Outcome<String, ()>>::pure(42);
    /// assert_eq!(lifted, Outcome::Success(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    fn map2<B, C, Function>(self, other: Self::WithType<B>, function: Function) -> Self::WithType<C>
    where
        Function: FnOnce(Self::Inner, B) -> C;

    /// Pairs two applicative values into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::Outcome;
    /// use outcome_optics::typeclass::Applicative;
    ///
    /// let left: Outcome<String, i32> = Outcome::Success(1);
    /// let right: Outcome<String, &str> = Outcome::Success("a");
    /// assert_eq!(left.product(right), Outcome::Success((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function inside the context to a value inside the context.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

impl<F: Clone, S> Applicative for Outcome<F, S> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<F, B> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, Function>(self, other: Outcome<F, B>, function: Function) -> Outcome<F, C>
    where
        Function: FnOnce(S, B) -> C,
    {
        match (self, other) {
            (Self::Success(first), Outcome::Success(second)) => {
                Outcome::Success(function(first, second))
            }
            (Self::Failure(error), _) | (_, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn outcome_pure_creates_success() {
        let value = <Outcome<String, ()>>::pure(1);
        assert_eq!(value, Outcome::Success(1));
    }

    #[rstest]
    fn outcome_map2_first_failure_wins() {
        let first: Outcome<&str, i32> = Outcome::Failure("first");
        let second: Outcome<&str, i32> = Outcome::Failure("second");
        assert_eq!(first.map2(second, |a, b| a + b), Outcome::Failure("first"));
    }

    #[rstest]
    fn outcome_map2_second_failure() {
        let first: Outcome<&str, i32> = Outcome::Success(1);
        let second: Outcome<&str, i32> = Outcome::Failure("second");
        assert_eq!(first.map2(second, |a, b| a + b), Outcome::Failure("second"));
    }

    #[rstest]
    fn outcome_apply() {
        let function: Outcome<&str, fn(i32) -> i32> = Outcome::Success(|x| x + 1);
        assert_eq!(function.apply(Outcome::Success(5)), Outcome::Success(6));
    }

    #[rstest]
    fn outcome_homomorphism_law() {
        let function = |x: i32| x * 3;
        let left = <Outcome<&str, ()>>::pure(function).apply(<Outcome<&str, ()>>::pure(4));
        let right = <Outcome<&str, ()>>::pure(function(4));
        assert_eq!(left, right);
    }
}
