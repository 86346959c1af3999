//! Non-indexed affine optics and the index-narrowing wrappers.
//!
//! An affine optic focuses on zero or one value. [`Indexed`] and
//! [`UncheckedIndexed`] produce affine optics from indexed ones by keeping
//! only the foci whose index equals a chosen key.
//!
//! The two wrappers differ when a key occurs more than once:
//!
//! | Wrapper              | Built from              | Reads                | Writes                 |
//! |----------------------|-------------------------|----------------------|------------------------|
//! | [`Indexed`]          | affine fold / traversal | the single focus     | the single focus       |
//! | [`UncheckedIndexed`] | any fold / traversal    | first matching focus | *every* matching focus |

use std::fmt;

use super::indexed::{IndexedAffineFold, IndexedAffineTraversal, IndexedFold, IndexedTraversal};

/// A read-only optic focusing on at most one value.
pub trait AffineFold<S, A> {
    /// Returns a reference to the focus, if present.
    fn get_option<'a>(&self, source: &'a S) -> Option<&'a A>;

    /// Returns `true` if the focus is present.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }
}

/// An optic that can read and replace at most one value.
///
/// # Laws
///
/// 1. **`GetSet` Law**: if `get_option(s)` is `Some(a)`, then `set(s, a.clone()) == s`
/// 2. **`SetGet` Law**: if the focus is present, `get_option(&set(s, a)) == Some(&a)`
/// 3. **`SetSet` Law**: `set(set(s, a1), a2) == set(s, a2)`
pub trait AffineTraversal<S, A>: AffineFold<S, A> {
    /// Replaces the focus. The source is returned unchanged when the focus
    /// is absent.
    #[must_use]
    fn set(&self, source: S, value: A) -> S;

    /// Applies a function to the focus, returning `None` when it is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_optics::optics::{AffineTraversal, IndexedAffineFold, option_indexed};
    ///
    /// let optic = option_indexed::<i32>().index(());
    /// assert_eq!(optic.modify_option(Some(2), |x| x * 5), Some(Some(10)));
    /// assert_eq!(optic.modify_option(None, |x| x * 5), None);
    /// ```
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get_option(&source)?.clone();
        Some(self.set(source, function(current)))
    }

    /// Applies a function to the focus, returning the source unchanged when
    /// it is absent.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        match self.get_option(&source).cloned() {
            Some(current) => self.set(source, function(current)),
            None => source,
        }
    }
}

// =============================================================================
// Indexed
// =============================================================================

/// An affine optic focusing on the focus of an indexed affine optic, but only
/// when that focus carries the chosen index.
///
/// Created by [`IndexedAffineFold::index`].
///
/// # Examples
///
/// ```
/// use outcome_optics::optics::{AffineFold, AffineTraversal, IndexedAffineFold, vec_head};
///
/// let head = vec_head::<char>().index(0);
/// assert_eq!(head.get_option(&vec!['a', 'b']), Some(&'a'));
/// assert_eq!(head.set(vec!['a', 'b'], 'z'), vec!['z', 'b']);
/// assert_eq!(head.set(Vec::new(), 'z'), Vec::<char>::new());
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Indexed<O, I> {
    optic: O,
    index: I,
}

impl<O, I> Indexed<O, I> {
    /// Creates a new `Indexed` narrowing `optic` to `index`.
    #[must_use]
    pub const fn new(optic: O, index: I) -> Self {
        Self { optic, index }
    }

    /// Returns the wrapped optic.
    #[must_use]
    pub const fn optic(&self) -> &O {
        &self.optic
    }

    /// Returns the index this optic is narrowed to.
    #[must_use]
    pub const fn key(&self) -> &I {
        &self.index
    }
}

impl<O, I, S, A> AffineFold<S, A> for Indexed<O, I>
where
    O: IndexedAffineFold<I, S, A>,
    I: PartialEq,
{
    fn get_option<'a>(&self, source: &'a S) -> Option<&'a A> {
        self.optic
            .get_option_indexed(source)
            .and_then(|(index, focus)| (index == self.index).then_some(focus))
    }
}

impl<O, I, S, A> AffineTraversal<S, A> for Indexed<O, I>
where
    O: IndexedAffineTraversal<I, S, A>,
    I: PartialEq,
{
    fn set(&self, source: S, value: A) -> S {
        let mut value = Some(value);
        self.optic.modify_all_indexed(source, |index, focus| {
            if *index == self.index {
                value.take().unwrap_or(focus)
            } else {
                focus
            }
        })
    }
}

impl<O: fmt::Debug, I: fmt::Debug> fmt::Debug for Indexed<O, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Indexed")
            .field("optic", &self.optic)
            .field("index", &self.index)
            .finish()
    }
}

// =============================================================================
// UncheckedIndexed
// =============================================================================

/// An affine optic focusing on the foci of an indexed optic that carry the
/// chosen index, assuming there is at most one.
///
/// Created by [`IndexedFold::unchecked_index`].
///
/// # Duplicate indices
///
/// Nothing verifies that the index is unique. If it is not, reading returns
/// the first matching focus in iteration order while writing replaces every
/// matching focus, so a write followed by a read is still consistent but a
/// read does not describe everything a write will touch.
///
/// ```
/// use outcome_optics::optics::{AffineFold, AffineTraversal, IndexedFold, association_list};
///
/// let entries = vec![("k", 1), ("x", 0), ("k", 2)];
/// let optic = association_list::<&str, i32>().unchecked_index("k");
///
/// assert_eq!(optic.get_option(&entries), Some(&1));
/// assert_eq!(optic.set(entries, 9), vec![("k", 9), ("x", 0), ("k", 9)]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct UncheckedIndexed<O, I> {
    optic: O,
    index: I,
}

impl<O, I> UncheckedIndexed<O, I> {
    /// Creates a new `UncheckedIndexed` narrowing `optic` to `index`.
    #[must_use]
    pub const fn new(optic: O, index: I) -> Self {
        Self { optic, index }
    }

    /// Returns the wrapped optic.
    #[must_use]
    pub const fn optic(&self) -> &O {
        &self.optic
    }

    /// Returns the index this optic is narrowed to.
    #[must_use]
    pub const fn key(&self) -> &I {
        &self.index
    }
}

impl<O, I, S, A> AffineFold<S, A> for UncheckedIndexed<O, I>
where
    O: IndexedFold<I, S, A>,
    I: PartialEq,
{
    fn get_option<'a>(&self, source: &'a S) -> Option<&'a A> {
        self.optic
            .get_all_indexed(source)
            .find(|(index, _)| *index == self.index)
            .map(|(_, focus)| focus)
    }
}

impl<O, I, S, A> AffineTraversal<S, A> for UncheckedIndexed<O, I>
where
    O: IndexedTraversal<I, S, A>,
    I: PartialEq,
    A: Clone,
{
    fn set(&self, source: S, value: A) -> S {
        self.optic.modify_all_indexed(source, |index, focus| {
            if *index == self.index {
                value.clone()
            } else {
                focus
            }
        })
    }
}

impl<O: fmt::Debug, I: fmt::Debug> fmt::Debug for UncheckedIndexed<O, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("UncheckedIndexed")
            .field("optic", &self.optic)
            .field("index", &self.index)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{association_list, option_indexed, vec_head, vec_indexed};
    use rstest::rstest;

    #[rstest]
    #[case(vec![5, 6], 0, Some(5))]
    #[case(vec![5, 6], 1, None)]
    #[case(vec![], 0, None)]
    fn indexed_reads_only_matching_focus(
        #[case] source: Vec<i32>,
        #[case] key: usize,
        #[case] expected: Option<i32>,
    ) {
        let optic = Indexed::new(vec_head::<i32>(), key);
        assert_eq!(optic.get_option(&source).copied(), expected);
        assert_eq!(optic.is_present(&source), expected.is_some());
    }

    #[rstest]
    fn indexed_set_ignores_mismatched_index() {
        let optic = Indexed::new(vec_head::<i32>(), 1);
        assert_eq!(optic.set(vec![5, 6], 0), vec![5, 6]);
    }

    #[rstest]
    fn indexed_modify_on_absent_focus_returns_source() {
        let optic = Indexed::new(option_indexed::<String>(), ());
        assert_eq!(optic.modify(None, |text| text + "!"), None);
        assert_eq!(
            optic.modify(Some("hi".to_string()), |text| text + "!"),
            Some("hi!".to_string())
        );
    }

    #[rstest]
    fn unchecked_indexed_reads_by_position() {
        let optic = UncheckedIndexed::new(vec_indexed::<char>(), 2);
        assert_eq!(optic.get_option(&vec!['a', 'b', 'c']), Some(&'c'));
        assert_eq!(optic.get_option(&vec!['a']), None);
    }

    #[rstest]
    fn unchecked_indexed_first_read_all_write() {
        let optic = UncheckedIndexed::new(association_list::<u8, &str>(), 1);
        let entries = vec![(1, "first"), (2, "other"), (1, "second")];
        assert_eq!(optic.get_option(&entries), Some(&"first"));
        assert_eq!(
            optic.set(entries, "new"),
            vec![(1, "new"), (2, "other"), (1, "new")]
        );
    }

    #[rstest]
    fn unchecked_indexed_modify_option_absent() {
        let optic = UncheckedIndexed::new(association_list::<u8, i32>(), 3);
        assert_eq!(optic.modify_option(vec![(1, 1)], |x| x + 1), None);
    }

    #[rstest]
    fn accessors_expose_parts() {
        let optic = Indexed::new(vec_head::<i32>(), 0);
        assert_eq!(*optic.key(), 0);
        let _inner = optic.optic();
        assert!(format!("{optic:?}").starts_with("Indexed"));
    }
}
