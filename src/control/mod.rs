//! Control structures for outcome-oriented programming.
//!
//! This module provides:
//!
//! - [`Outcome`]: A value that is either a `Failure` or a `Success`
//! - [`success`] / [`failure`]: Constructors with the other side inferred
//! - [`IntoOutcome`]: `.success()` / `.failure()` on any value
//!
//! # Examples
//!
//! ```rust
//! use outcome_optics::control::{Outcome, failure, success};
//!
//! fn divide(dividend: i32, divisor: i32) -> Outcome<String, i32> {
//!     if divisor == 0 {
//!         failure("division by zero".to_string())
//!     } else {
//!         success(dividend / divisor)
//!     }
//! }
//!
//! let result = divide(84, 2).then(|half| divide(half, 0));
//! assert_eq!(result, Outcome::Failure("division by zero".to_string()));
//! ```

mod outcome;
#[cfg(feature = "tracing")]
mod trace;

pub use outcome::{IntoOutcome, Outcome, failure, success};
