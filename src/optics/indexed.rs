//! Indexed capability optics: folds and traversals whose foci carry an index.
//!
//! The four traits form a lattice through supertraits:
//!
//! ```text
//! IndexedFold                  read zero or more (index, focus) pairs
//! ├── IndexedAffineFold        read at most one
//! └── IndexedTraversal         read and rewrite zero or more
//!     IndexedAffineTraversal   read and rewrite at most one
//!                              (IndexedAffineFold + IndexedTraversal)
//! ```
//!
//! An `IndexedAffineFold` can be narrowed with [`index`](IndexedAffineFold::index)
//! to the focus carrying one particular index. Any `IndexedFold` can be
//! narrowed with [`unchecked_index`](IndexedFold::unchecked_index), which
//! assumes the index is unique within the fold.
//!
//! # Examples
//!
//! ```
//! use outcome_optics::optics::{IndexedFold, IndexedTraversal, vec_indexed};
//!
//! let traversal = vec_indexed::<i32>();
//! let numbers = vec![10, 20, 30];
//!
//! let pairs: Vec<(usize, &i32)> = traversal.get_all_indexed(&numbers).collect();
//! assert_eq!(pairs, vec![(0, &10), (1, &20), (2, &30)]);
//!
//! let shifted = traversal.modify_all_indexed(numbers, |index, value| value + *index as i32);
//! assert_eq!(shifted, vec![10, 21, 32]);
//! ```

use std::marker::PhantomData;

use super::affine::{Indexed, UncheckedIndexed};

/// A read-only optic over zero or more foci, each paired with an index.
///
/// # Type Parameters
///
/// - `I`: The index type
/// - `S`: The source type (the whole structure)
/// - `A`: The focus type
pub trait IndexedFold<I, S, A> {
    /// Returns an iterator over every focus together with its index.
    fn get_all_indexed<'a>(&self, source: &'a S) -> Box<dyn Iterator<Item = (I, &'a A)> + 'a>;

    /// Returns the number of foci.
    fn length(&self, source: &S) -> usize {
        self.get_all_indexed(source).count()
    }

    /// Returns the first focus and its index, if any.
    fn head_option_indexed<'a>(&self, source: &'a S) -> Option<(I, &'a A)> {
        self.get_all_indexed(source).next()
    }

    /// Narrows this fold to the foci carrying `index`.
    ///
    /// The narrowed optic is affine: reading yields the *first* matching
    /// focus in iteration order. When `Self` is also an
    /// [`IndexedTraversal`], writing through the narrowed optic rewrites
    /// *every* matching focus. Callers are responsible for `index` being
    /// unique; nothing checks it.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_optics::optics::{AffineFold, IndexedFold, association_list};
    ///
    /// let entries = vec![("a", 1), ("b", 2)];
    /// let narrowed = association_list::<&str, i32>().unchecked_index("b");
    /// assert_eq!(narrowed.get_option(&entries), Some(&2));
    /// ```
    fn unchecked_index(self, index: I) -> UncheckedIndexed<Self, I>
    where
        Self: Sized,
    {
        UncheckedIndexed::new(self, index)
    }
}

/// A read-only optic over at most one focus, paired with its index.
pub trait IndexedAffineFold<I, S, A>: IndexedFold<I, S, A> {
    /// Returns the focus and its index, if present.
    fn get_option_indexed<'a>(&self, source: &'a S) -> Option<(I, &'a A)> {
        self.get_all_indexed(source).next()
    }

    /// Narrows this fold to its focus, but only when that focus carries
    /// `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_optics::optics::{AffineFold, IndexedAffineFold, vec_head};
    ///
    /// let numbers = vec![7, 8, 9];
    /// assert_eq!(vec_head::<i32>().index(0).get_option(&numbers), Some(&7));
    /// assert_eq!(vec_head::<i32>().index(1).get_option(&numbers), None);
    /// ```
    fn index(self, index: I) -> Indexed<Self, I>
    where
        Self: Sized,
    {
        Indexed::new(self, index)
    }
}

/// An optic that can read and rewrite zero or more indexed foci.
///
/// # Laws
///
/// 1. **Modify Identity Law**: `t.modify_all_indexed(s, |_, x| x) == s`
/// 2. **Modify Composition Law**:
///    ```text
///    t.modify_all_indexed(t.modify_all_indexed(s, f), g)
///        == t.modify_all_indexed(s, |i, x| g(i, f(i, x)))
///    ```
pub trait IndexedTraversal<I, S, A>: IndexedFold<I, S, A> {
    /// Rewrites every focus with a function of its index and current value.
    fn modify_all_indexed<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(&I, A) -> A;

    /// Rewrites every focus, ignoring indices.
    fn modify_all<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.modify_all_indexed(source, |_, focus| function(focus))
    }

    /// Sets every focus to the same value.
    fn set_all(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.modify_all_indexed(source, |_, _| value.clone())
    }
}

/// An optic that can read and rewrite at most one indexed focus.
pub trait IndexedAffineTraversal<I, S, A>:
    IndexedAffineFold<I, S, A> + IndexedTraversal<I, S, A>
{
    /// Rewrites the focus, if present, with a function called at most once.
    fn modify_indexed<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&I, A) -> A,
    {
        let mut function = Some(function);
        self.modify_all_indexed(source, |index, focus| match function.take() {
            Some(function) => function(index, focus),
            None => focus,
        })
    }
}

// =============================================================================
// Function-backed implementations
// =============================================================================

/// An [`IndexedFold`] built from a function returning the indexed foci.
///
/// # Examples
///
/// ```
/// use outcome_optics::optics::{FunctionIndexedFold, IndexedFold};
///
/// let evens: FunctionIndexedFold<usize, Vec<i32>, i32, _> =
///     FunctionIndexedFold::new(|numbers: &Vec<i32>| {
///         Box::new(numbers.iter().enumerate().filter(|(_, n)| **n % 2 == 0))
///     });
/// assert_eq!(evens.length(&vec![1, 2, 3, 4]), 2);
/// ```
pub struct FunctionIndexedFold<I, S, A, G>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = (I, &'a A)> + 'a>,
{
    get_all_function: G,
    _marker: PhantomData<(I, S, A)>,
}

impl<I, S, A, G> FunctionIndexedFold<I, S, A, G>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = (I, &'a A)> + 'a>,
{
    /// Creates a new `FunctionIndexedFold`.
    #[must_use]
    pub const fn new(get_all_function: G) -> Self {
        Self {
            get_all_function,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A, G> IndexedFold<I, S, A> for FunctionIndexedFold<I, S, A, G>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = (I, &'a A)> + 'a>,
{
    fn get_all_indexed<'a>(&self, source: &'a S) -> Box<dyn Iterator<Item = (I, &'a A)> + 'a> {
        (self.get_all_function)(source)
    }
}

/// An [`IndexedTraversal`] built from a reader and a rewriter.
///
/// The rewriter receives the source and a callback to apply to every focus.
///
/// # Examples
///
/// ```
/// use outcome_optics::optics::{FunctionIndexedTraversal, IndexedTraversal};
///
/// // Every second element, indexed by position.
/// let odd_positions: FunctionIndexedTraversal<usize, Vec<i32>, i32, _, _> =
///     FunctionIndexedTraversal::new(
///         |numbers: &Vec<i32>| Box::new(numbers.iter().enumerate().skip(1).step_by(2)),
///         |numbers: Vec<i32>, function: &mut dyn FnMut(&usize, i32) -> i32| {
///             numbers
///                 .into_iter()
///                 .enumerate()
///                 .map(|(index, n)| if index % 2 == 1 { function(&index, n) } else { n })
///                 .collect()
///         },
///     );
///
/// assert_eq!(odd_positions.set_all(vec![1, 2, 3, 4], 0), vec![1, 0, 3, 0]);
/// ```
pub struct FunctionIndexedTraversal<I, S, A, G, M>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = (I, &'a A)> + 'a>,
    M: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
    get_all_function: G,
    modify_function: M,
    _marker: PhantomData<(I, S, A)>,
}

impl<I, S, A, G, M> FunctionIndexedTraversal<I, S, A, G, M>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = (I, &'a A)> + 'a>,
    M: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
    /// Creates a new `FunctionIndexedTraversal`.
    #[must_use]
    pub const fn new(get_all_function: G, modify_function: M) -> Self {
        Self {
            get_all_function,
            modify_function,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A, G, M> IndexedFold<I, S, A> for FunctionIndexedTraversal<I, S, A, G, M>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = (I, &'a A)> + 'a>,
    M: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
    fn get_all_indexed<'a>(&self, source: &'a S) -> Box<dyn Iterator<Item = (I, &'a A)> + 'a> {
        (self.get_all_function)(source)
    }
}

impl<I, S, A, G, M> IndexedTraversal<I, S, A> for FunctionIndexedTraversal<I, S, A, G, M>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = (I, &'a A)> + 'a>,
    M: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
    fn modify_all_indexed<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(&I, A) -> A,
    {
        (self.modify_function)(source, &mut function)
    }
}

/// An [`IndexedAffineFold`] built from a function returning the focus, if any.
///
/// # Examples
///
/// ```
/// use outcome_optics::optics::{FunctionIndexedAffineFold, IndexedAffineFold};
///
/// let last = FunctionIndexedAffineFold::new(|numbers: &Vec<i32>| {
///     numbers.last().map(|n| (numbers.len() - 1, n))
/// });
/// assert_eq!(last.get_option_indexed(&vec![4, 5]), Some((1, &5)));
/// ```
pub struct FunctionIndexedAffineFold<I, S, A, P>
where
    P: for<'a> Fn(&'a S) -> Option<(I, &'a A)>,
{
    preview_function: P,
    _marker: PhantomData<(I, S, A)>,
}

impl<I, S, A, P> FunctionIndexedAffineFold<I, S, A, P>
where
    P: for<'a> Fn(&'a S) -> Option<(I, &'a A)>,
{
    /// Creates a new `FunctionIndexedAffineFold`.
    #[must_use]
    pub const fn new(preview_function: P) -> Self {
        Self {
            preview_function,
            _marker: PhantomData,
        }
    }
}

impl<I: 'static, S, A: 'static, P> IndexedFold<I, S, A> for FunctionIndexedAffineFold<I, S, A, P>
where
    P: for<'a> Fn(&'a S) -> Option<(I, &'a A)>,
{
    fn get_all_indexed<'a>(&self, source: &'a S) -> Box<dyn Iterator<Item = (I, &'a A)> + 'a> {
        Box::new((self.preview_function)(source).into_iter())
    }
}

impl<I: 'static, S, A: 'static, P> IndexedAffineFold<I, S, A>
    for FunctionIndexedAffineFold<I, S, A, P>
where
    P: for<'a> Fn(&'a S) -> Option<(I, &'a A)>,
{
    fn get_option_indexed<'a>(&self, source: &'a S) -> Option<(I, &'a A)> {
        (self.preview_function)(source)
    }
}

/// An [`IndexedAffineTraversal`] built from a preview and a rewriter.
///
/// The rewriter must call the callback at most once.
///
/// # Examples
///
/// ```
/// use outcome_optics::optics::{
///     FunctionIndexedAffineTraversal, IndexedAffineFold, IndexedAffineTraversal,
/// };
///
/// let last = FunctionIndexedAffineTraversal::new(
///     |numbers: &Vec<i32>| numbers.last().map(|n| (numbers.len() - 1, n)),
///     |mut numbers: Vec<i32>, function: &mut dyn FnMut(&usize, i32) -> i32| {
///         if let Some(last) = numbers.pop() {
///             let index = numbers.len();
///             numbers.push(function(&index, last));
///         }
///         numbers
///     },
/// );
///
/// assert_eq!(last.modify_indexed(vec![1, 2], |_, n| n * 10), vec![1, 20]);
/// assert_eq!(last.get_option_indexed(&vec![3]), Some((0, &3)));
/// ```
pub struct FunctionIndexedAffineTraversal<I, S, A, P, M>
where
    P: for<'a> Fn(&'a S) -> Option<(I, &'a A)>,
    M: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
    preview_function: P,
    modify_function: M,
    _marker: PhantomData<(I, S, A)>,
}

impl<I, S, A, P, M> FunctionIndexedAffineTraversal<I, S, A, P, M>
where
    P: for<'a> Fn(&'a S) -> Option<(I, &'a A)>,
    M: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
    /// Creates a new `FunctionIndexedAffineTraversal`.
    #[must_use]
    pub const fn new(preview_function: P, modify_function: M) -> Self {
        Self {
            preview_function,
            modify_function,
            _marker: PhantomData,
        }
    }
}

impl<I: 'static, S, A: 'static, P, M> IndexedFold<I, S, A>
    for FunctionIndexedAffineTraversal<I, S, A, P, M>
where
    P: for<'a> Fn(&'a S) -> Option<(I, &'a A)>,
    M: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
    fn get_all_indexed<'a>(&self, source: &'a S) -> Box<dyn Iterator<Item = (I, &'a A)> + 'a> {
        Box::new((self.preview_function)(source).into_iter())
    }
}

impl<I: 'static, S, A: 'static, P, M> IndexedAffineFold<I, S, A>
    for FunctionIndexedAffineTraversal<I, S, A, P, M>
where
    P: for<'a> Fn(&'a S) -> Option<(I, &'a A)>,
    M: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
    fn get_option_indexed<'a>(&self, source: &'a S) -> Option<(I, &'a A)> {
        (self.preview_function)(source)
    }
}

impl<I: 'static, S, A: 'static, P, M> IndexedTraversal<I, S, A>
    for FunctionIndexedAffineTraversal<I, S, A, P, M>
where
    P: for<'a> Fn(&'a S) -> Option<(I, &'a A)>,
    M: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
    fn modify_all_indexed<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(&I, A) -> A,
    {
        (self.modify_function)(source, &mut function)
    }
}

impl<I: 'static, S, A: 'static, P, M> IndexedAffineTraversal<I, S, A>
    for FunctionIndexedAffineTraversal<I, S, A, P, M>
where
    P: for<'a> Fn(&'a S) -> Option<(I, &'a A)>,
    M: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
}

impl<I, S, A, G> Clone for FunctionIndexedFold<I, S, A, G>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = (I, &'a A)> + 'a> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            get_all_function: self.get_all_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<I, S, A, G> std::fmt::Debug for FunctionIndexedFold<I, S, A, G>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = (I, &'a A)> + 'a>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionIndexedFold").finish_non_exhaustive()
    }
}

impl<I, S, A, G, M> Clone for FunctionIndexedTraversal<I, S, A, G, M>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = (I, &'a A)> + 'a> + Clone,
    M: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            get_all_function: self.get_all_function.clone(),
            modify_function: self.modify_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<I, S, A, G, M> std::fmt::Debug for FunctionIndexedTraversal<I, S, A, G, M>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = (I, &'a A)> + 'a>,
    M: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionIndexedTraversal").finish_non_exhaustive()
    }
}

impl<I, S, A, P> Clone for FunctionIndexedAffineFold<I, S, A, P>
where
    P: for<'a> Fn(&'a S) -> Option<(I, &'a A)> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            preview_function: self.preview_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<I, S, A, P> std::fmt::Debug for FunctionIndexedAffineFold<I, S, A, P>
where
    P: for<'a> Fn(&'a S) -> Option<(I, &'a A)>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionIndexedAffineFold").finish_non_exhaustive()
    }
}

impl<I, S, A, P, M> Clone for FunctionIndexedAffineTraversal<I, S, A, P, M>
where
    P: for<'a> Fn(&'a S) -> Option<(I, &'a A)> + Clone,
    M: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            preview_function: self.preview_function.clone(),
            modify_function: self.modify_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<I, S, A, P, M> std::fmt::Debug for FunctionIndexedAffineTraversal<I, S, A, P, M>
where
    P: for<'a> Fn(&'a S) -> Option<(I, &'a A)>,
    M: Fn(S, &mut dyn FnMut(&I, A) -> A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionIndexedAffineTraversal").finish_non_exhaustive()
    }
}
