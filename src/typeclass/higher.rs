//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Outcome<F, _>`
//! directly. [`TypeConstructor`] names the "hole" with a GAT so that
//! [`Functor`](super::Functor) and friends can talk about `Outcome<F, B>`
//! given an `Outcome<F, A>`.
//!
//! # Example
//!
//! ```rust
//! use outcome_optics::control::Outcome;
//! use outcome_optics::typeclass::TypeConstructor;
//!
//! fn relabel<T: TypeConstructor>(_value: T) -> std::marker::PhantomData<T::WithType<String>> {
//!     std::marker::PhantomData
//! }
//!
//! let outcome: Outcome<(), i32> = Outcome::Success(1);
//! let _: std::marker::PhantomData<Outcome<(), String>> = relabel(outcome);
//! ```

use crate::control::Outcome;

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<T as TypeConstructor>::WithType<T::Inner>` is `T`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Outcome<F, S>` this is `S`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Outcome<F, S>` this is `Outcome<F, B>`: the failure type is fixed.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<F, S> TypeConstructor for Outcome<F, S> {
    type Inner = S;
    type WithType<B> = Outcome<F, B>;
}
