//! Type class instances for [`Outcome`](crate::control::Outcome).
//!
//! - [`TypeConstructor`]: GAT-based emulation of higher-kinded types
//! - [`Functor`]: Mapping over the success value
//! - [`Applicative`]: Lifting values and combining independent outcomes
//! - [`Monad`]: Sequencing dependent outcomes
//! - [`Bifunctor`]: Mapping over failure and success
//!
//! Every instance is success-biased, matching the inherent combinators:
//! `fmap` is `map_success`, `flat_map` is `then`, and `Bifunctor::first`
//! is `map_failure`.
//!
//! # Examples
//!
//! ```rust
//! use outcome_optics::control::Outcome;
//! use outcome_optics::typeclass::{Applicative, Functor, Monad};
//!
//! fn lift<T>(value: T) -> Outcome<String, T> {
//!     <Outcome<String, ()>>::pure(value)
//! }
//!
//! let sum = lift(1).map2(lift(2), |a, b| a + b).fmap(|n| n * 10);
//! assert_eq!(sum, Outcome::Success(30));
//! assert_eq!(sum.flat_map(|n| lift(n + 1)), Outcome::Success(31));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
