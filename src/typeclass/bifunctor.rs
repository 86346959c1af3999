//! Bifunctor type class - mapping over both sides of an outcome.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Type Parameter Order
//!
//! `Outcome<F, S>` is `Bifunctor<F, S>`: `first` transforms the failure
//! (`map_failure`), `second` the success (`map_success`, and `Functor::fmap`).
//!
//! ```rust
//! use outcome_optics::control::Outcome;
//! use outcome_optics::typeclass::{Bifunctor, Functor};
//!
//! let value: Outcome<String, i32> = Outcome::Success(42);
//! assert_eq!(value.clone().fmap(|x| x * 2), value.second(|x| x * 2));
//! ```

use crate::control::Outcome;

/// A type class for types with two type parameters that can have functions
/// mapped over both.
///
/// See the module documentation for laws.
pub trait Bifunctor<A, B> {
    /// The resulting type constructor after applying the transformation.
    ///
    /// For `Outcome<F, S>`, `Target<C, D> = Outcome<C, D>`.
    type Target<C, D>;

    /// Applies two functions to both type parameters simultaneously.
    fn bimap<C, D, First, Second>(
        self,
        first_function: First,
        second_function: Second,
    ) -> Self::Target<C, D>
    where
        First: FnOnce(A) -> C,
        Second: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::Outcome;
    /// use outcome_optics::typeclass::Bifunctor;
    ///
    /// let value: Outcome<i32, String> = Outcome::Failure(42);
    /// assert_eq!(value.first(|x| x.to_string()), Outcome::Failure("42".to_string()));
    /// ```
    #[inline]
    fn first<C, First>(self, function: First) -> Self::Target<C, B>
    where
        First: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    #[inline]
    fn second<D, Second>(self, function: Second) -> Self::Target<A, D>
    where
        Second: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }
}

impl<F, S> Bifunctor<F, S> for Outcome<F, S> {
    type Target<C, D> = Outcome<C, D>;

    #[inline]
    fn bimap<C, D, First, Second>(
        self,
        first_function: First,
        second_function: Second,
    ) -> Outcome<C, D>
    where
        First: FnOnce(F) -> C,
        Second: FnOnce(S) -> D,
    {
        match self {
            Self::Failure(value) => Outcome::Failure(first_function(value)),
            Self::Success(value) => Outcome::Success(second_function(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn outcome_first_maps_failure() {
        let value: Outcome<&str, i32> = Outcome::Failure("abc");
        assert_eq!(Bifunctor::first(value, str::len), Outcome::Failure(3));
    }

    #[rstest]
    fn outcome_second_maps_success() {
        let value: Outcome<&str, i32> = Outcome::Success(2);
        assert_eq!(value.second(|x| x * 10), Outcome::Success(20));
    }

    #[rstest]
    fn outcome_second_ignores_failure() {
        let value: Outcome<&str, i32> = Outcome::Failure("abc");
        assert_eq!(value.second(|x| x * 10), Outcome::Failure("abc"));
    }
}
