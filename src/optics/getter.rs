//! Getters: read-only optics that always produce exactly one value.
//!
//! Unlike a fold, a getter cannot fail. The value it yields is owned, which
//! lets a getter present a derived view of the source, such as an
//! `Option<A>` describing whether some deeper focus exists.
//!
//! # Examples
//!
//! ```
//! use outcome_optics::optics::{FunctionGetter, Getter};
//!
//! let length = FunctionGetter::new(|text: &String| text.len());
//! assert_eq!(length.view(&"optics".to_string()), 6);
//! ```

use std::fmt;
use std::marker::PhantomData;

/// A read-only optic producing exactly one value from a source.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The viewed type
pub trait Getter<S, A> {
    /// Produces the focused value.
    fn view(&self, source: &S) -> A;
}

/// A read-only optic producing exactly one value together with its index.
pub trait IndexedGetter<I, S, A> {
    /// Produces the index and the focused value.
    fn view_indexed(&self, source: &S) -> (I, A);

    /// Drops the index, turning this optic into a plain [`Getter`].
    ///
    /// When `Self` is an [`IndexedLens`](super::IndexedLens) the result is a
    /// [`Lens`](super::Lens).
    fn unindexed(self) -> Unindexed<Self, I>
    where
        Self: Sized,
    {
        Unindexed::new(self)
    }
}

/// A [`Getter`] backed by a function.
pub struct FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A,
{
    view_function: G,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G> FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A,
{
    /// Creates a new `FunctionGetter`.
    #[must_use]
    pub const fn new(view_function: G) -> Self {
        Self {
            view_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G> Getter<S, A> for FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A,
{
    #[inline]
    fn view(&self, source: &S) -> A {
        (self.view_function)(source)
    }
}

impl<S, A, G> Clone for FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A + Clone,
{
    fn clone(&self) -> Self {
        Self {
            view_function: self.view_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G> fmt::Debug for FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionGetter")
            .finish_non_exhaustive()
    }
}

/// An indexed optic with its index discarded.
///
/// Created by [`IndexedGetter::unindexed`].
pub struct Unindexed<O, I> {
    inner: O,
    _index: PhantomData<I>,
}

impl<O, I> Unindexed<O, I> {
    /// Wraps an indexed optic.
    #[must_use]
    pub const fn new(inner: O) -> Self {
        Self {
            inner,
            _index: PhantomData,
        }
    }

    /// Returns the wrapped indexed optic.
    #[must_use]
    pub fn into_inner(self) -> O {
        self.inner
    }

    pub(crate) const fn inner(&self) -> &O {
        &self.inner
    }
}

impl<O, I, S, A> Getter<S, A> for Unindexed<O, I>
where
    O: IndexedGetter<I, S, A>,
{
    #[inline]
    fn view(&self, source: &S) -> A {
        self.inner.view_indexed(source).1
    }
}

impl<O: Clone, I> Clone for Unindexed<O, I> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<O: fmt::Debug, I> fmt::Debug for Unindexed<O, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Unindexed")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct FirstChar;

    impl IndexedGetter<usize, String, Option<char>> for FirstChar {
        fn view_indexed(&self, source: &String) -> (usize, Option<char>) {
            (0, source.chars().next())
        }
    }

    #[rstest]
    fn function_getter_views() {
        let getter = FunctionGetter::new(|pair: &(i32, i32)| pair.0 + pair.1);
        assert_eq!(getter.view(&(2, 3)), 5);
        assert_eq!(getter.clone().view(&(1, 1)), 2);
    }

    #[rstest]
    #[case("abc", Some('a'))]
    #[case("", None)]
    fn unindexed_discards_index(#[case] text: &str, #[case] expected: Option<char>) {
        let getter = FirstChar.unindexed();
        assert_eq!(getter.view(&text.to_string()), expected);
        assert_eq!(getter.inner().view_indexed(&text.to_string()).0, 0);
    }
}
