//! Lenses: getters that can also write their focus back.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **`GetPut` Law**: Viewing and setting back yields the original.
//!    ```text
//!    lens.set(source.clone(), lens.view(&source)) == source
//!    ```
//!
//! 2. **`PutGet` Law**: Setting then viewing yields the set value.
//!    ```text
//!    lens.view(&lens.set(source, value.clone())) == value
//!    ```
//!
//! 3. **`PutPut` Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```
//!
//! The same laws hold for [`IndexedLens`] on the value half of
//! `view_indexed`.
//!
//! # Examples
//!
//! ```
//! use outcome_optics::optics::{FunctionLens, Getter, Lens};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = FunctionLens::new(
//!     |point: &Point| point.x,
//!     |point: Point, x: i32| Point { x, ..point },
//! );
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.view(&point), 10);
//! assert_eq!(x_lens.modify(point, |x| x + 1), Point { x: 11, y: 20 });
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::getter::{Getter, IndexedGetter, Unindexed};

/// A getter that can also replace its focus.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused value)
pub trait Lens<S, A>: Getter<S, A> {
    /// Replaces the focused value, returning the updated source.
    #[must_use]
    fn set(&self, source: S, value: A) -> S;

    /// Replaces the focused value with a function of its current value.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let current = self.view(&source);
        self.set(source, function(current))
    }

    /// Composes this lens with another lens focusing inside the target.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_optics::optics::{FunctionLens, Getter, Lens};
    ///
    /// let outer = FunctionLens::new(
    ///     |pair: &((i32, i32), i32)| pair.0,
    ///     |pair: ((i32, i32), i32), inner| (inner, pair.1),
    /// );
    /// let inner = FunctionLens::new(
    ///     |pair: &(i32, i32)| pair.1,
    ///     |pair: (i32, i32), value| (pair.0, value),
    /// );
    ///
    /// let composed = outer.compose(inner);
    /// assert_eq!(composed.view(&((1, 2), 3)), 2);
    /// assert_eq!(composed.set(((1, 2), 3), 9), ((1, 9), 3));
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }
}

/// An indexed getter that can also replace its focus.
pub trait IndexedLens<I, S, A>: IndexedGetter<I, S, A> {
    /// Replaces the focused value, returning the updated source.
    #[must_use]
    fn set(&self, source: S, value: A) -> S;

    /// Replaces the focused value with a function of its index and current
    /// value.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&I, A) -> A,
    {
        let (index, current) = self.view_indexed(&source);
        self.set(source, function(&index, current))
    }
}

impl<O, I, S, A> Lens<S, A> for Unindexed<O, I>
where
    O: IndexedLens<I, S, A>,
{
    #[inline]
    fn set(&self, source: S, value: A) -> S {
        IndexedLens::set(self.inner(), source, value)
    }
}

// =============================================================================
// FunctionLens
// =============================================================================

/// A [`Lens`] built from a view function and a setter function.
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    view_function: G,
    set_function: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens`.
    #[must_use]
    pub const fn new(view_function: G, set_function: St) -> Self {
        Self {
            view_function,
            set_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Getter<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    #[inline]
    fn view(&self, source: &S) -> A {
        (self.view_function)(source)
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    #[inline]
    fn set(&self, source: S, value: A) -> S {
        (self.set_function)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            view_function: self.view_function.clone(),
            set_function: self.set_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FunctionLens").finish_non_exhaustive()
    }
}

// =============================================================================
// ComposedLens
// =============================================================================

/// Two lenses composed end to end.
///
/// - `L1`: The outer lens, focusing `S` on `A`
/// - `L2`: The inner lens, focusing `A` on the final target
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new `ComposedLens`.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Getter<S, B> for ComposedLens<L1, L2, A>
where
    L1: Getter<S, A>,
    L2: Getter<A, B>,
{
    fn view(&self, source: &S) -> B {
        self.second.view(&self.first.view(source))
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn set(&self, source: S, value: B) -> S {
        let inner = self.first.view(&source);
        let updated = self.second.set(inner, value);
        self.first.set(source, updated)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<L1: fmt::Debug, L2: fmt::Debug, A> fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}
