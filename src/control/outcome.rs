//! Outcome type - either a failure or a success.
//!
//! This module provides the `Outcome<F, S>` type, which represents a
//! computation that ended either in a `Failure(F)` or in a `Success(S)`.
//! Failures are ordinary values: nothing here panics or unwinds except the
//! explicit `unwrap_*` methods.
//!
//! Once an `Outcome` is a `Failure`, every `then` and `map_success` down the
//! chain passes it through untouched. Only `map_failure`, `tap_failure`,
//! `or_else` and `fold` observe or transform it.
//!
//! # Examples
//!
//! ```rust
//! use outcome_optics::control::{Outcome, failure, success};
//!
//! fn parse(input: &str) -> Outcome<String, i32> {
//!     input
//!         .parse::<i32>()
//!         .map_err(|error| error.to_string())
//!         .into()
//! }
//!
//! let doubled = parse("21").then(|n| success(n * 2));
//! assert_eq!(doubled, Outcome::Success(42));
//!
//! let rejected: Outcome<String, i32> = failure("bad".to_string());
//! let message = rejected.fold(|error| format!("failed: {error}"), |n| n.to_string());
//! assert_eq!(message, "failed: bad");
//! ```

use std::fmt;

/// The result of a computation: a `Failure(F)` or a `Success(S)`.
///
/// The type parameter order follows the convention of failure first,
/// success second. `Outcome` is success-biased: `then` and the type class
/// instances operate on the `Success` side.
///
/// # Type Parameters
///
/// * `F` - The type of the failure value
/// * `S` - The type of the success value
///
/// # Examples
///
/// ```rust
/// use outcome_optics::control::Outcome;
///
/// let success: Outcome<String, i32> = Outcome::Success(12);
/// assert_eq!(success.map_success(|_| "flower"), Outcome::Success("flower"));
///
/// let failure: Outcome<i32, String> = Outcome::Failure(12);
/// assert_eq!(failure.map_success(|_| "flower"), Outcome::Failure(12));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<F, S> {
    /// The computation failed with the contained value.
    Failure(F),
    /// The computation succeeded with the contained value.
    Success(S),
}

/// Wraps a value as the success variant.
///
/// The failure type is left to inference.
///
/// # Examples
///
/// ```rust
/// use outcome_optics::control::{Outcome, success};
///
/// let outcome: Outcome<String, i32> = success(1);
/// assert!(outcome.is_success());
/// ```
#[inline]
pub const fn success<F, S>(value: S) -> Outcome<F, S> {
    Outcome::Success(value)
}

/// Wraps a value as the failure variant.
///
/// The success type is left to inference.
///
/// # Examples
///
/// ```rust
/// use outcome_optics::control::{Outcome, failure};
///
/// let outcome: Outcome<&str, i32> = failure("boom");
/// assert!(outcome.is_failure());
/// ```
#[inline]
pub const fn failure<F, S>(value: F) -> Outcome<F, S> {
    Outcome::Failure(value)
}

/// Extension methods for lifting any value into an [`Outcome`].
///
/// # Examples
///
/// ```rust
/// use outcome_optics::control::{IntoOutcome, Outcome};
///
/// let ok: Outcome<String, i32> = 42_i32.success();
/// assert_eq!(ok, Outcome::Success(42));
///
/// let failed: Outcome<&str, i32> = "not found".failure();
/// assert_eq!(failed, Outcome::Failure("not found"));
/// ```
pub trait IntoOutcome: Sized {
    /// Wraps `self` as the success variant.
    fn success<F>(self) -> Outcome<F, Self>;

    /// Wraps `self` as the failure variant.
    fn failure<S>(self) -> Outcome<Self, S>;
}

impl<T> IntoOutcome for T {
    #[inline]
    fn success<F>(self) -> Outcome<F, Self> {
        Outcome::Success(self)
    }

    #[inline]
    fn failure<S>(self) -> Outcome<Self, S> {
        Outcome::Failure(self)
    }
}

impl<F, S> Outcome<F, S> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::Outcome;
    ///
    /// let value: Outcome<String, i32> = Outcome::Success(1);
    /// assert!(value.is_success());
    /// assert!(!value.is_failure());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::Outcome;
    ///
    /// let value: Outcome<String, i32> = Outcome::Failure("boom".to_string());
    /// assert!(value.is_failure());
    /// assert!(!value.is_success());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the outcome by applying exactly one of two functions.
    ///
    /// `on_failure` runs for a `Failure`, `on_success` for a `Success`. The
    /// other function is dropped without being called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::Outcome;
    ///
    /// let value: Outcome<String, i32> = Outcome::Success(1);
    /// let message = value.fold(
    ///     |error| format!("operation failed with {error}"),
    ///     |n| format!("operation succeeded with {n}"),
    /// );
    /// assert_eq!(message, "operation succeeded with 1");
    /// ```
    #[inline]
    pub fn fold<C, OnFailure, OnSuccess>(self, on_failure: OnFailure, on_success: OnSuccess) -> C
    where
        OnFailure: FnOnce(F) -> C,
        OnSuccess: FnOnce(S) -> C,
    {
        match self {
            Self::Failure(value) => on_failure(value),
            Self::Success(value) => on_success(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value, leaving a failure untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::Outcome;
    ///
    /// let value: Outcome<String, &str> = Outcome::Success("hello");
    /// assert_eq!(value.map_success(str::len), Outcome::Success(5));
    /// ```
    #[inline]
    pub fn map_success<C, Function>(self, function: Function) -> Outcome<F, C>
    where
        Function: FnOnce(S) -> C,
    {
        match self {
            Self::Failure(value) => Outcome::Failure(value),
            Self::Success(value) => Outcome::Success(function(value)),
        }
    }

    /// Applies a function to the failure value, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::Outcome;
    ///
    /// let value: Outcome<i32, String> = Outcome::Failure(12);
    /// assert_eq!(value.map_failure(|_| "flower"), Outcome::Failure("flower"));
    ///
    /// let value: Outcome<i32, i32> = Outcome::Success(12);
    /// assert_eq!(value.map_failure(|_| "flower"), Outcome::Success(12));
    /// ```
    #[inline]
    pub fn map_failure<C, Function>(self, function: Function) -> Outcome<C, S>
    where
        Function: FnOnce(F) -> C,
    {
        match self {
            Self::Failure(value) => Outcome::Failure(function(value)),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    /// Applies `on_failure` or `on_success` depending on the variant,
    /// keeping the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::Outcome;
    ///
    /// let value: Outcome<i32, String> = Outcome::Success("abc".to_string());
    /// assert_eq!(value.bimap(|n| n * 2, |s| s.len()), Outcome::Success(3));
    /// ```
    #[inline]
    pub fn bimap<C, D, OnFailure, OnSuccess>(
        self,
        on_failure: OnFailure,
        on_success: OnSuccess,
    ) -> Outcome<C, D>
    where
        OnFailure: FnOnce(F) -> C,
        OnSuccess: FnOnce(S) -> D,
    {
        match self {
            Self::Failure(value) => Outcome::Failure(on_failure(value)),
            Self::Success(value) => Outcome::Success(on_success(value)),
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Chains a computation that may itself fail.
    ///
    /// A `Failure` is returned as is and `function` is never called. A
    /// `Success` is passed to `function`, whose outcome is returned without
    /// further wrapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::{Outcome, failure, success};
    ///
    /// let chained: Outcome<String, i32> = success(3)
    ///     .then(|x: i32| success(x + 1))
    ///     .then(|x: i32| success(x * 2));
    /// assert_eq!(chained, Outcome::Success(8));
    ///
    /// let short_circuited: Outcome<&str, i32> = failure("bad").then(|x: i32| success(x + 1));
    /// assert_eq!(short_circuited, Outcome::Failure("bad"));
    /// ```
    #[inline]
    pub fn then<C, Function>(self, function: Function) -> Outcome<F, C>
    where
        Function: FnOnce(S) -> Outcome<F, C>,
    {
        match self {
            Self::Failure(value) => Outcome::Failure(value),
            Self::Success(value) => function(value),
        }
    }

    /// Recovers from a failure with a computation that may itself fail.
    ///
    /// The dual of [`then`](Self::then): a `Success` is returned as is and
    /// `function` is only called on a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::{Outcome, failure, success};
    ///
    /// let recovered: Outcome<(), i32> = failure::<&str, i32>("missing").or_else(|_| success(0));
    /// assert_eq!(recovered, Outcome::Success(0));
    /// ```
    #[inline]
    pub fn or_else<C, Function>(self, function: Function) -> Outcome<C, S>
    where
        Function: FnOnce(F) -> Outcome<C, S>,
    {
        match self {
            Self::Failure(value) => function(value),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Runs a side effect on the failure value and returns `self` unchanged.
    ///
    /// On a `Success` the function is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let value: Outcome<i32, i32> = Outcome::Failure(12);
    /// let same = value.tap_failure(|error| seen.push(*error));
    ///
    /// assert_eq!(same, Outcome::Failure(12));
    /// assert_eq!(seen, vec![12]);
    /// ```
    #[inline]
    #[must_use]
    pub fn tap_failure<Function>(self, function: Function) -> Self
    where
        Function: FnOnce(&F),
    {
        if let Self::Failure(value) = &self {
            function(value);
        }
        self
    }

    /// Runs a side effect on the success value and returns `self` unchanged.
    ///
    /// On a `Failure` the function is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let value: Outcome<i32, i32> = Outcome::Success(12);
    /// let same = value.tap_success(|n| seen.push(*n));
    ///
    /// assert_eq!(same, Outcome::Success(12));
    /// assert_eq!(seen, vec![12]);
    /// ```
    #[inline]
    #[must_use]
    pub fn tap_success<Function>(self, function: Function) -> Self
    where
        Function: FnOnce(&S),
    {
        if let Self::Success(value) = &self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into `Some(success)`, discarding a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::Outcome;
    ///
    /// let value: Outcome<String, i32> = Outcome::Success(1);
    /// assert_eq!(value.into_success(), Some(1));
    /// ```
    #[inline]
    pub fn into_success(self) -> Option<S> {
        match self {
            Self::Failure(_) => None,
            Self::Success(value) => Some(value),
        }
    }

    /// Converts into `Some(failure)`, discarding a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::Outcome;
    ///
    /// let value: Outcome<String, i32> = Outcome::Success(1);
    /// assert_eq!(value.into_failure(), None);
    /// ```
    #[inline]
    pub fn into_failure(self) -> Option<F> {
        match self {
            Self::Failure(value) => Some(value),
            Self::Success(_) => None,
        }
    }

    /// Returns a reference to the success value if present.
    #[inline]
    pub const fn success_ref(&self) -> Option<&S> {
        match self {
            Self::Failure(_) => None,
            Self::Success(value) => Some(value),
        }
    }

    /// Returns a reference to the failure value if present.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&F> {
        match self {
            Self::Failure(value) => Some(value),
            Self::Success(_) => None,
        }
    }

    /// Turns a failure into a success and vice versa.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::Outcome;
    ///
    /// let value: Outcome<&str, i32> = Outcome::Failure("boom");
    /// assert_eq!(value.swap(), Outcome::Success("boom"));
    /// ```
    #[inline]
    pub fn swap(self) -> Outcome<S, F> {
        match self {
            Self::Failure(value) => Outcome::Success(value),
            Self::Success(value) => Outcome::Failure(value),
        }
    }

    /// Returns the success value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::Outcome;
    ///
    /// let value: Outcome<String, i32> = Outcome::Success(7);
    /// assert_eq!(value.unwrap_success(), 7);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_success(self) -> S {
        match self {
            Self::Failure(_) => panic!("called `Outcome::unwrap_success()` on a `Failure` value"),
            Self::Success(value) => value,
        }
    }

    /// Returns the failure value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::Outcome;
    ///
    /// let value: Outcome<&str, i32> = Outcome::Failure("boom");
    /// assert_eq!(value.unwrap_failure(), "boom");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> F {
        match self {
            Self::Failure(value) => value,
            Self::Success(_) => panic!("called `Outcome::unwrap_failure()` on a `Success` value"),
        }
    }

    /// Converts into a standard library `Result`, `Success` becoming `Ok`.
    ///
    /// # Errors
    ///
    /// Returns `Err` with the failure value if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::Outcome;
    ///
    /// fn checked(value: Outcome<String, i32>) -> Result<i32, String> {
    ///     let n = value.into_result()?;
    ///     Ok(n + 1)
    /// }
    ///
    /// assert_eq!(checked(Outcome::Success(1)), Ok(2));
    /// assert_eq!(checked(Outcome::Failure("no".to_string())), Err("no".to_string()));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        self.into()
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<F, S: Default> Outcome<F, S> {
    /// Returns the success value, or the default if this is a `Failure`.
    #[inline]
    pub fn success_or_default(self) -> S {
        match self {
            Self::Failure(_) => S::default(),
            Self::Success(value) => value,
        }
    }
}

impl<F: Default, S> Outcome<F, S> {
    /// Returns the failure value, or the default if this is a `Success`.
    #[inline]
    pub fn failure_or_default(self) -> F {
        match self {
            Self::Failure(value) => value,
            Self::Success(_) => F::default(),
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<F: fmt::Debug, S: fmt::Debug> fmt::Debug for Outcome<F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure(value) => formatter.debug_tuple("Failure").field(value).finish(),
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
        }
    }
}

impl<F: fmt::Display, S: fmt::Display> fmt::Display for Outcome<F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure(value) => write!(formatter, "Outcome.Failure({value})"),
            Self::Success(value) => write!(formatter, "Outcome.Success({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<F, S> From<Result<S, F>> for Outcome<F, S> {
    /// Converts a `Result` to an `Outcome`.
    ///
    /// `Ok(s)` becomes `Success(s)`, and `Err(f)` becomes `Failure(f)`.
    #[inline]
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<F, S> From<Outcome<F, S>> for Result<S, F> {
    /// Converts an `Outcome` to a `Result`.
    ///
    /// `Success(s)` becomes `Ok(s)`, and `Failure(f)` becomes `Err(f)`.
    #[inline]
    fn from(outcome: Outcome<F, S>) -> Self {
        match outcome {
            Outcome::Failure(value) => Err(value),
            Outcome::Success(value) => Ok(value),
        }
    }
}

static_assertions::assert_impl_all!(Outcome<String, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Outcome<i32, u64>: Copy);
static_assertions::assert_not_impl_any!(Outcome<std::rc::Rc<i32>, i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_success_construction() {
        let value: Outcome<String, i32> = success(42);
        assert!(value.is_success());
        assert!(!value.is_failure());
    }

    #[rstest]
    fn test_failure_construction() {
        let value: Outcome<String, i32> = failure("boom".to_string());
        assert!(value.is_failure());
        assert!(!value.is_success());
    }

    #[rstest]
    fn test_extension_constructors_match_free_functions() {
        let by_method: Outcome<(), i32> = 5_i32.success();
        let by_function: Outcome<(), i32> = success(5);
        assert_eq!(by_method, by_function);

        let by_method: Outcome<&str, ()> = "e".failure();
        assert_eq!(by_method, failure("e"));
    }

    #[rstest]
    #[case(Outcome::Failure(3), "f:3")]
    #[case(Outcome::Success(4), "s:4")]
    fn test_fold_picks_branch(#[case] value: Outcome<i32, i32>, #[case] expected: &str) {
        let rendered = value.fold(|f| format!("f:{f}"), |s| format!("s:{s}"));
        assert_eq!(rendered, expected);
    }

    #[rstest]
    fn test_fold_does_not_run_unchosen_branch() {
        let unchosen = Cell::new(0);
        let value: Outcome<i32, i32> = Outcome::Success(1);
        let _ = value.fold(
            |_| {
                unchosen.set(unchosen.get() + 1);
                0
            },
            |s| s,
        );
        assert_eq!(unchosen.get(), 0);
    }

    #[rstest]
    fn test_then_does_not_call_function_on_failure() {
        let calls = Cell::new(0);
        let value: Outcome<&str, i32> = Outcome::Failure("bad");
        let result = value.then(|x| {
            calls.set(calls.get() + 1);
            success(x + 1)
        });
        assert_eq!(result, Outcome::Failure("bad"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_or_else_recovers_failure_only() {
        let failed: Outcome<&str, i32> = Outcome::Failure("bad");
        assert_eq!(failed.or_else(|e| failure::<usize, i32>(e.len())), Outcome::Failure(3));

        let succeeded: Outcome<&str, i32> = Outcome::Success(1);
        assert_eq!(succeeded.or_else(|_| success::<(), i32>(0)), Outcome::Success(1));
    }

    #[rstest]
    fn test_swap_roundtrip() {
        let value: Outcome<&str, i32> = Outcome::Success(1);
        assert_eq!(value.swap().swap(), value);
    }

    #[rstest]
    #[should_panic(expected = "called `Outcome::unwrap_success()` on a `Failure` value")]
    fn test_unwrap_success_on_failure_panics() {
        let value: Outcome<&str, i32> = Outcome::Failure("bad");
        let _ = value.unwrap_success();
    }

    #[rstest]
    #[should_panic(expected = "called `Outcome::unwrap_failure()` on a `Success` value")]
    fn test_unwrap_failure_on_success_panics() {
        let value: Outcome<&str, i32> = Outcome::Success(1);
        let _ = value.unwrap_failure();
    }

    #[rstest]
    fn test_defaults() {
        let value: Outcome<String, i32> = Outcome::Failure("bad".to_string());
        assert_eq!(value.clone().success_or_default(), 0);
        assert_eq!(value.failure_or_default(), "bad");
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let outcome: Outcome<String, i32> = ok.into();
        assert_eq!(outcome, Outcome::Success(42));
        assert_eq!(outcome.into_result(), Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let outcome: Outcome<String, i32> = err.into();
        let result: Result<i32, String> = outcome.into();
        assert_eq!(result, Err("error".to_string()));
    }

    #[rstest]
    fn test_display() {
        let failed: Outcome<i32, i32> = Outcome::Failure(1);
        let succeeded: Outcome<i32, i32> = Outcome::Success(2);
        assert_eq!(failed.to_string(), "Outcome.Failure(1)");
        assert_eq!(succeeded.to_string(), "Outcome.Success(2)");
    }

    #[rstest]
    fn test_debug() {
        let value: Outcome<&str, i32> = Outcome::Failure("x");
        assert_eq!(format!("{value:?}"), "Failure(\"x\")");
    }
}
