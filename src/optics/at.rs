//! `at` combinators: optional access to the focus carrying a given index.
//!
//! Each combinator takes an indexed optic and an index and returns an optic
//! whose single focus is an `Option<A>`: `Some(a)` when a focus carrying the
//! index exists, `None` otherwise. Which kind of optic comes back depends on
//! what the input can do:
//!
//! | Combinator              | Input                        | Result                                    |
//! |-------------------------|------------------------------|-------------------------------------------|
//! | [`at_affine_traversal`] | [`IndexedAffineTraversal`]   | [`Lens`]`<S, Option<A>>`                  |
//! | [`at_affine_fold`]      | [`IndexedAffineFold`]        | [`Getter`]`<S, Option<A>>`                |
//! | [`at_traversal`]        | [`IndexedTraversal`]         | [`IndexedLens`]`<I, S, Option<A>>`        |
//! | [`at_fold`]             | [`IndexedFold`]              | [`IndexedGetter`]`<I, S, Option<A>>`      |
//!
//! Writing `Some(v)` replaces the focus (when present), writing `None`
//! leaves the source unchanged. `None` never removes anything.
//!
//! # Duplicate indices
//!
//! [`at_traversal`] and [`at_fold`] accept optics that may yield the same
//! index more than once. They assume the index is unique without checking:
//! reading returns the *first* matching focus, and [`at_traversal`] writes
//! to *every* matching focus.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use outcome_optics::optics::{Getter, Lens, at_affine_traversal, vec_head};
//! use outcome_optics::optics::{IndexedGetter, IndexedLens, at_traversal, btree_map_indexed};
//!
//! let first = at_affine_traversal(vec_head::<i32>(), 0);
//! assert_eq!(first.view(&vec![3, 4]), Some(3));
//! assert_eq!(first.set(vec![3, 4], Some(30)), vec![30, 4]);
//!
//! let scores: BTreeMap<&str, u32> = [("ada", 3), ("bob", 5)].into();
//! let bob = at_traversal(btree_map_indexed::<&str, u32>(), "bob");
//! assert_eq!(bob.view_indexed(&scores), ("bob", Some(5)));
//!
//! let updated = bob.set(scores, Some(6));
//! assert_eq!(updated.get("bob"), Some(&6));
//! ```

use super::affine::{AffineFold, AffineTraversal, Indexed, UncheckedIndexed};
use super::getter::{Getter, IndexedGetter};
use super::indexed::{IndexedAffineFold, IndexedAffineTraversal, IndexedFold, IndexedTraversal};
use super::lens::{IndexedLens, Lens};

/// Writes an optional value through an affine traversal.
#[inline]
fn write_optional<T, S, A>(target: &T, source: S, value: Option<A>) -> S
where
    T: AffineTraversal<S, A>,
{
    match value {
        Some(value) => target.set(source, value),
        None => source,
    }
}

// =============================================================================
// Combinators
// =============================================================================

/// Focuses an indexed affine traversal on `index`, as a lens over
/// `Option<A>`.
///
/// The view is `Some` when the traversal's focus exists *and* carries
/// `index`. Setting `Some(v)` replaces such a focus; setting `None`, or
/// setting anything when no such focus exists, returns the source unchanged.
///
/// # Examples
///
/// ```
/// use outcome_optics::optics::{Getter, Lens, at_affine_traversal, option_indexed};
///
/// let inner = at_affine_traversal(option_indexed::<&str>(), ());
/// assert_eq!(inner.view(&Some("x")), Some("x"));
/// assert_eq!(inner.set(Some("x"), Some("y")), Some("y"));
/// assert_eq!(inner.set(Some("x"), None), Some("x"));
/// assert_eq!(inner.set(None, Some("y")), None);
/// ```
#[must_use]
pub fn at_affine_traversal<O, I, S, A>(optic: O, index: I) -> AtLens<Indexed<O, I>>
where
    O: IndexedAffineTraversal<I, S, A>,
    I: PartialEq,
    A: Clone,
{
    AtLens::new(optic.index(index))
}

/// Focuses an indexed affine fold on `index`, as a getter of `Option<A>`.
///
/// # Examples
///
/// ```
/// use outcome_optics::optics::{Getter, at_affine_fold, vec_head};
///
/// let head = at_affine_fold(vec_head::<char>(), 0);
/// assert_eq!(head.view(&vec!['q']), Some('q'));
/// assert_eq!(head.view(&vec![]), None);
///
/// let second = at_affine_fold(vec_head::<char>(), 1);
/// assert_eq!(second.view(&vec!['q', 'r']), None);
/// ```
#[must_use]
pub fn at_affine_fold<O, I, S, A>(optic: O, index: I) -> AtGetter<Indexed<O, I>>
where
    O: IndexedAffineFold<I, S, A>,
    I: PartialEq,
    A: Clone,
{
    AtGetter::new(optic.index(index))
}

/// Focuses an indexed traversal on `index`, as an indexed lens over
/// `Option<A>` whose index is `index` itself.
///
/// The index is assumed unique. Viewing returns the first focus carrying
/// `index`; setting `Some(v)` replaces every focus carrying `index`.
///
/// # Examples
///
/// ```
/// use outcome_optics::optics::{IndexedGetter, IndexedLens, at_traversal, association_list};
///
/// let entries = vec![("k", 1), ("k", 2)];
/// let key = at_traversal(association_list::<&str, i32>(), "k");
///
/// assert_eq!(key.view_indexed(&entries), ("k", Some(1)));
/// assert_eq!(key.set(entries, Some(9)), vec![("k", 9), ("k", 9)]);
/// ```
#[must_use]
pub fn at_traversal<O, I, S, A>(optic: O, index: I) -> AtIndexedLens<UncheckedIndexed<O, I>, I>
where
    O: IndexedTraversal<I, S, A>,
    I: PartialEq + Clone,
    A: Clone,
{
    AtIndexedLens::new(optic.unchecked_index(index.clone()), index)
}

/// Focuses an indexed fold on `index`, as an indexed getter of `Option<A>`
/// whose index is `index` itself.
///
/// The index is assumed unique. Viewing returns the first focus carrying
/// `index`.
///
/// # Examples
///
/// ```
/// use outcome_optics::optics::{IndexedGetter, at_fold, vec_indexed};
///
/// let third = at_fold(vec_indexed::<u8>(), 2);
/// assert_eq!(third.view_indexed(&vec![1, 2, 3]), (2, Some(3)));
/// assert_eq!(third.view_indexed(&vec![1]), (2, None));
/// ```
#[must_use]
pub fn at_fold<O, I, S, A>(optic: O, index: I) -> AtIndexedGetter<UncheckedIndexed<O, I>, I>
where
    O: IndexedFold<I, S, A>,
    I: PartialEq + Clone,
    A: Clone,
{
    AtIndexedGetter::new(optic.unchecked_index(index.clone()), index)
}

// =============================================================================
// Result optics
// =============================================================================

/// A [`Lens`] over `Option<A>` reading and writing an affine traversal.
///
/// Returned by [`at_affine_traversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtLens<T> {
    target: T,
}

impl<T> AtLens<T> {
    /// Wraps an affine traversal.
    #[must_use]
    pub const fn new(target: T) -> Self {
        Self { target }
    }

    /// Returns the wrapped affine traversal.
    #[must_use]
    pub const fn target(&self) -> &T {
        &self.target
    }
}

impl<T, S, A> Getter<S, Option<A>> for AtLens<T>
where
    T: AffineFold<S, A>,
    A: Clone,
{
    #[inline]
    fn view(&self, source: &S) -> Option<A> {
        self.target.get_option(source).cloned()
    }
}

impl<T, S, A> Lens<S, Option<A>> for AtLens<T>
where
    T: AffineTraversal<S, A>,
    A: Clone,
{
    #[inline]
    fn set(&self, source: S, value: Option<A>) -> S {
        write_optional(&self.target, source, value)
    }
}

/// A [`Getter`] of `Option<A>` reading an affine fold.
///
/// Returned by [`at_affine_fold`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtGetter<T> {
    target: T,
}

impl<T> AtGetter<T> {
    /// Wraps an affine fold.
    #[must_use]
    pub const fn new(target: T) -> Self {
        Self { target }
    }

    /// Returns the wrapped affine fold.
    #[must_use]
    pub const fn target(&self) -> &T {
        &self.target
    }
}

impl<T, S, A> Getter<S, Option<A>> for AtGetter<T>
where
    T: AffineFold<S, A>,
    A: Clone,
{
    #[inline]
    fn view(&self, source: &S) -> Option<A> {
        self.target.get_option(source).cloned()
    }
}

/// An [`IndexedLens`] over `Option<A>` reading and writing an affine
/// traversal, reporting a fixed index.
///
/// Returned by [`at_traversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtIndexedLens<T, I> {
    target: T,
    index: I,
}

impl<T, I> AtIndexedLens<T, I> {
    /// Wraps an affine traversal, reporting `index` alongside its focus.
    #[must_use]
    pub const fn new(target: T, index: I) -> Self {
        Self { target, index }
    }

    /// Returns the wrapped affine traversal.
    #[must_use]
    pub const fn target(&self) -> &T {
        &self.target
    }
}

impl<T, I, S, A> IndexedGetter<I, S, Option<A>> for AtIndexedLens<T, I>
where
    T: AffineFold<S, A>,
    I: Clone,
    A: Clone,
{
    #[inline]
    fn view_indexed(&self, source: &S) -> (I, Option<A>) {
        (self.index.clone(), self.target.get_option(source).cloned())
    }
}

impl<T, I, S, A> IndexedLens<I, S, Option<A>> for AtIndexedLens<T, I>
where
    T: AffineTraversal<S, A>,
    I: Clone,
    A: Clone,
{
    #[inline]
    fn set(&self, source: S, value: Option<A>) -> S {
        write_optional(&self.target, source, value)
    }
}

/// An [`IndexedGetter`] of `Option<A>` reading an affine fold, reporting a
/// fixed index.
///
/// Returned by [`at_fold`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtIndexedGetter<T, I> {
    target: T,
    index: I,
}

impl<T, I> AtIndexedGetter<T, I> {
    /// Wraps an affine fold, reporting `index` alongside its focus.
    #[must_use]
    pub const fn new(target: T, index: I) -> Self {
        Self { target, index }
    }

    /// Returns the wrapped affine fold.
    #[must_use]
    pub const fn target(&self) -> &T {
        &self.target
    }
}

impl<T, I, S, A> IndexedGetter<I, S, Option<A>> for AtIndexedGetter<T, I>
where
    T: AffineFold<S, A>,
    I: Clone,
    A: Clone,
{
    #[inline]
    fn view_indexed(&self, source: &S) -> (I, Option<A>) {
        (self.index.clone(), self.target.get_option(source).cloned())
    }
}
