//! Indexed optics for standard collections.
//!
//! | Constructor              | Source             | Index   | Capability               |
//! |--------------------------|--------------------|---------|--------------------------|
//! | [`vec_indexed`]          | `Vec<A>`           | `usize` | `IndexedTraversal`       |
//! | [`association_list`]     | `Vec<(K, V)>`      | `K`     | `IndexedTraversal`       |
//! | [`hash_map_indexed`]     | `HashMap<K, V>`    | `K`     | `IndexedTraversal`       |
//! | [`btree_map_indexed`]    | `BTreeMap<K, V>`   | `K`     | `IndexedTraversal`       |
//! | [`vec_head`]             | `Vec<A>`           | `usize` | `IndexedAffineTraversal` |
//! | [`option_indexed`]       | `Option<A>`        | `()`    | `IndexedAffineTraversal` |
//!
//! An association list may repeat keys, so narrowing it to a key with
//! [`unchecked_index`](super::IndexedFold::unchecked_index) is the one case
//! where the uniqueness assumption can actually be violated.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash, RandomState};
use std::marker::PhantomData;

use super::indexed::{IndexedAffineFold, IndexedAffineTraversal, IndexedFold, IndexedTraversal};

macro_rules! marker_optic {
    ($(#[$attribute:meta])* $name:ident<$($parameter:ident),+>) => {
        $(#[$attribute])*
        pub struct $name<$($parameter),+> {
            _marker: PhantomData<fn() -> ($($parameter,)+)>,
        }

        impl<$($parameter),+> $name<$($parameter),+> {
            /// Creates the optic.
            #[must_use]
            pub const fn new() -> Self {
                Self {
                    _marker: PhantomData,
                }
            }
        }

        impl<$($parameter),+> Clone for $name<$($parameter),+> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($parameter),+> Copy for $name<$($parameter),+> {}

        impl<$($parameter),+> Default for $name<$($parameter),+> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<$($parameter),+> fmt::Debug for $name<$($parameter),+> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(stringify!($name))
            }
        }
    };
}

marker_optic!(
    /// Every element of a `Vec`, indexed by position.
    VecIndexed<A>
);

marker_optic!(
    /// Every value of a `Vec<(K, V)>`, indexed by its key. Keys may repeat.
    AssociationList<K, V>
);

marker_optic!(
    /// Every value of a `HashMap`, indexed by its key. Iteration order is
    /// the map's.
    HashMapIndexed<K, V, H>
);

marker_optic!(
    /// Every value of a `BTreeMap`, indexed by its key in ascending order.
    BTreeMapIndexed<K, V>
);

marker_optic!(
    /// The first element of a `Vec`, at index `0`.
    VecHead<A>
);

marker_optic!(
    /// The value inside an `Option`, at index `()`.
    OptionIndexed<A>
);

/// Creates an [`IndexedTraversal`] over the elements of a `Vec`.
#[must_use]
pub const fn vec_indexed<A>() -> VecIndexed<A> {
    VecIndexed::new()
}

/// Creates an [`IndexedTraversal`] over the values of an association list.
///
/// # Examples
///
/// ```
/// use outcome_optics::optics::{IndexedFold, association_list};
///
/// let entries = vec![("a", 1), ("b", 2), ("a", 3)];
/// let keys: Vec<&str> = association_list::<&str, i32>()
///     .get_all_indexed(&entries)
///     .map(|(key, _)| key)
///     .collect();
/// assert_eq!(keys, vec!["a", "b", "a"]);
/// ```
#[must_use]
pub const fn association_list<K, V>() -> AssociationList<K, V> {
    AssociationList::new()
}

/// Creates an [`IndexedTraversal`] over the values of a `HashMap` using the
/// default hasher.
#[must_use]
pub const fn hash_map_indexed<K, V>() -> HashMapIndexed<K, V, RandomState> {
    HashMapIndexed::new()
}

/// Creates an [`IndexedTraversal`] over the values of a `BTreeMap`.
#[must_use]
pub const fn btree_map_indexed<K, V>() -> BTreeMapIndexed<K, V> {
    BTreeMapIndexed::new()
}

/// Creates an [`IndexedAffineTraversal`] over the first element of a `Vec`.
///
/// # Examples
///
/// ```
/// use outcome_optics::optics::{IndexedAffineFold, vec_head};
///
/// assert_eq!(vec_head::<i32>().get_option_indexed(&vec![4, 5]), Some((0, &4)));
/// assert_eq!(vec_head::<i32>().get_option_indexed(&Vec::new()), None);
/// ```
#[must_use]
pub const fn vec_head<A>() -> VecHead<A> {
    VecHead::new()
}

/// Creates an [`IndexedAffineTraversal`] over the value of an `Option`.
#[must_use]
pub const fn option_indexed<A>() -> OptionIndexed<A> {
    OptionIndexed::new()
}

// =============================================================================
// Traversals
// =============================================================================

impl<A: 'static> IndexedFold<usize, Vec<A>, A> for VecIndexed<A> {
    fn get_all_indexed<'a>(
        &self,
        source: &'a Vec<A>,
    ) -> Box<dyn Iterator<Item = (usize, &'a A)> + 'a> {
        Box::new(source.iter().enumerate())
    }

    fn length(&self, source: &Vec<A>) -> usize {
        source.len()
    }
}

impl<A: 'static> IndexedTraversal<usize, Vec<A>, A> for VecIndexed<A> {
    fn modify_all_indexed<F>(&self, source: Vec<A>, mut function: F) -> Vec<A>
    where
        F: FnMut(&usize, A) -> A,
    {
        source
            .into_iter()
            .enumerate()
            .map(|(index, element)| function(&index, element))
            .collect()
    }
}

impl<K: Clone + 'static, V: 'static> IndexedFold<K, Vec<(K, V)>, V> for AssociationList<K, V> {
    fn get_all_indexed<'a>(
        &self,
        source: &'a Vec<(K, V)>,
    ) -> Box<dyn Iterator<Item = (K, &'a V)> + 'a> {
        Box::new(source.iter().map(|(key, value)| (key.clone(), value)))
    }

    fn length(&self, source: &Vec<(K, V)>) -> usize {
        source.len()
    }
}

impl<K: Clone + 'static, V: 'static> IndexedTraversal<K, Vec<(K, V)>, V> for AssociationList<K, V> {
    fn modify_all_indexed<F>(&self, source: Vec<(K, V)>, mut function: F) -> Vec<(K, V)>
    where
        F: FnMut(&K, V) -> V,
    {
        source
            .into_iter()
            .map(|(key, value)| {
                let value = function(&key, value);
                (key, value)
            })
            .collect()
    }
}

impl<K, V, H> IndexedFold<K, HashMap<K, V, H>, V> for HashMapIndexed<K, V, H>
where
    K: Eq + Hash + Clone + 'static,
    V: 'static,
    H: BuildHasher + Default,
{
    fn get_all_indexed<'a>(
        &self,
        source: &'a HashMap<K, V, H>,
    ) -> Box<dyn Iterator<Item = (K, &'a V)> + 'a> {
        Box::new(source.iter().map(|(key, value)| (key.clone(), value)))
    }

    fn length(&self, source: &HashMap<K, V, H>) -> usize {
        source.len()
    }
}

impl<K, V, H> IndexedTraversal<K, HashMap<K, V, H>, V> for HashMapIndexed<K, V, H>
where
    K: Eq + Hash + Clone + 'static,
    V: 'static,
    H: BuildHasher + Default,
{
    fn modify_all_indexed<F>(&self, source: HashMap<K, V, H>, mut function: F) -> HashMap<K, V, H>
    where
        F: FnMut(&K, V) -> V,
    {
        source
            .into_iter()
            .map(|(key, value)| {
                let value = function(&key, value);
                (key, value)
            })
            .collect()
    }
}

impl<K, V> IndexedFold<K, BTreeMap<K, V>, V> for BTreeMapIndexed<K, V>
where
    K: Ord + Clone + 'static,
    V: 'static,
{
    fn get_all_indexed<'a>(
        &self,
        source: &'a BTreeMap<K, V>,
    ) -> Box<dyn Iterator<Item = (K, &'a V)> + 'a> {
        Box::new(source.iter().map(|(key, value)| (key.clone(), value)))
    }

    fn length(&self, source: &BTreeMap<K, V>) -> usize {
        source.len()
    }
}

impl<K, V> IndexedTraversal<K, BTreeMap<K, V>, V> for BTreeMapIndexed<K, V>
where
    K: Ord + Clone + 'static,
    V: 'static,
{
    fn modify_all_indexed<F>(&self, source: BTreeMap<K, V>, mut function: F) -> BTreeMap<K, V>
    where
        F: FnMut(&K, V) -> V,
    {
        source
            .into_iter()
            .map(|(key, value)| {
                let value = function(&key, value);
                (key, value)
            })
            .collect()
    }
}

// =============================================================================
// Affine traversals
// =============================================================================

impl<A: 'static> IndexedFold<usize, Vec<A>, A> for VecHead<A> {
    fn get_all_indexed<'a>(
        &self,
        source: &'a Vec<A>,
    ) -> Box<dyn Iterator<Item = (usize, &'a A)> + 'a> {
        Box::new(self.get_option_indexed(source).into_iter())
    }
}

impl<A: 'static> IndexedAffineFold<usize, Vec<A>, A> for VecHead<A> {
    fn get_option_indexed<'a>(&self, source: &'a Vec<A>) -> Option<(usize, &'a A)> {
        source.first().map(|head| (0, head))
    }
}

impl<A: 'static> IndexedTraversal<usize, Vec<A>, A> for VecHead<A> {
    fn modify_all_indexed<F>(&self, source: Vec<A>, mut function: F) -> Vec<A>
    where
        F: FnMut(&usize, A) -> A,
    {
        source
            .into_iter()
            .enumerate()
            .map(|(index, element)| if index == 0 { function(&index, element) } else { element })
            .collect()
    }
}

impl<A: 'static> IndexedAffineTraversal<usize, Vec<A>, A> for VecHead<A> {}

impl<A: 'static> IndexedFold<(), Option<A>, A> for OptionIndexed<A> {
    fn get_all_indexed<'a>(
        &self,
        source: &'a Option<A>,
    ) -> Box<dyn Iterator<Item = ((), &'a A)> + 'a> {
        Box::new(source.iter().map(|value| ((), value)))
    }
}

impl<A: 'static> IndexedAffineFold<(), Option<A>, A> for OptionIndexed<A> {
    fn get_option_indexed<'a>(&self, source: &'a Option<A>) -> Option<((), &'a A)> {
        source.as_ref().map(|value| ((), value))
    }
}

impl<A: 'static> IndexedTraversal<(), Option<A>, A> for OptionIndexed<A> {
    fn modify_all_indexed<F>(&self, source: Option<A>, mut function: F) -> Option<A>
    where
        F: FnMut(&(), A) -> A,
    {
        source.map(|value| function(&(), value))
    }
}

impl<A: 'static> IndexedAffineTraversal<(), Option<A>, A> for OptionIndexed<A> {}

static_assertions::assert_impl_all!(VecIndexed<String>: Send, Sync, Copy, Default);
static_assertions::assert_impl_all!(AssociationList<String, i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(HashMapIndexed<String, i32, RandomState>: Send, Sync);
static_assertions::assert_impl_all!(VecHead<std::rc::Rc<i32>>: Send, Sync);
