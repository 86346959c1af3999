//! # outcome-optics
//!
//! A success-or-failure outcome type and `at` combinators for indexed optics.
//!
//! ## Overview
//!
//! - **Control**: [`Outcome`](control::Outcome), a two-variant result with
//!   folding, mapping, tapping and chaining combinators
//! - **Type Classes**: Functor, Applicative, Monad and Bifunctor instances
//!   for `Outcome`
//! - **Optics**: indexed folds and traversals, and the `at` combinators that
//!   focus them on a single index as an optional value
//!
//! ## Feature Flags
//!
//! - `control`: The `Outcome` type
//! - `typeclass`: Type class instances for `Outcome` (implies `control`)
//! - `optics`: Indexed optics and the `at` combinators
//! - `serde`: `Serialize`/`Deserialize` for `Outcome`
//! - `tracing`: `trace_failure`/`trace_success` on `Outcome`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use outcome_optics::prelude::*;
//!
//! fn parse(text: &str) -> Outcome<String, i32> {
//!     text.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let scores = vec![("ada", 3), ("bob", 5)];
//! let bob = at_traversal(association_list::<&str, i32>(), "bob");
//!
//! let updated = parse("7").fold(
//!     |_| scores.clone(),
//!     |score| bob.set(scores.clone(), Some(score)),
//! );
//! assert_eq!(updated, vec![("ada", 3), ("bob", 7)]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use outcome_optics::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "optics")]
pub mod optics;
