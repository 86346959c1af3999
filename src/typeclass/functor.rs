//! Functor type class - mapping over the success value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome_optics::control::Outcome;
//! use outcome_optics::typeclass::Functor;
//!
//! let value: Outcome<String, i32> = Outcome::Success(5);
//! assert_eq!(value.fmap(|n| n.to_string()), Outcome::Success("5".to_string()));
//!
//! let failed: Outcome<String, i32> = Outcome::Failure("nope".to_string());
//! assert_eq!(failed.fmap(|n| n + 1), Outcome::Failure("nope".to_string()));
//! ```

use super::higher::TypeConstructor;
use crate::control::Outcome;

/// A type class for types that can have a function mapped over their contents.
///
/// See the module documentation for the laws.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::Outcome;
    /// use outcome_optics::typeclass::Functor;
    ///
    /// let value: Outcome<(), i32> = Outcome::Success(5);
    /// assert_eq!(value.fmap(|n| n * 2), Outcome::Success(10));
    /// ```
    fn fmap<B, Function>(self, function: Function) -> Self::WithType<B>
    where
        Function: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor,
    /// leaving `self` usable.
    fn fmap_ref<B, Function>(&self, function: Function) -> Self::WithType<B>
    where
        Function: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::Outcome;
    /// use outcome_optics::typeclass::Functor;
    ///
    /// let value: Outcome<(), i32> = Outcome::Success(5);
    /// assert_eq!(value.replace("replaced"), Outcome::Success("replaced"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<F: Clone, S> Functor for Outcome<F, S> {
    #[inline]
    fn fmap<B, Function>(self, function: Function) -> Outcome<F, B>
    where
        Function: FnOnce(S) -> B,
    {
        self.map_success(function)
    }

    #[inline]
    fn fmap_ref<B, Function>(&self, function: Function) -> Outcome<F, B>
    where
        Function: FnOnce(&S) -> B,
    {
        match self {
            Self::Failure(value) => Outcome::Failure(value.clone()),
            Self::Success(value) => Outcome::Success(function(value)),
        }
    }
}
