//! Indexed optics and the `at` combinators.
//!
//! This module provides optics whose foci carry an index, and four `at`
//! combinators that turn such an optic plus an index into an optic over
//! `Option<A>`: present when some focus carries the index, absent otherwise.
//!
//! # Optics Hierarchy
//!
//! ```text
//! IndexedFold
//! ├── IndexedAffineFold ─┐
//! └── IndexedTraversal ──┴── IndexedAffineTraversal
//!
//! AffineFold <: AffineTraversal          (non-indexed, zero or one focus)
//! Getter <: Lens                         (exactly one owned focus)
//! IndexedGetter <: IndexedLens           (exactly one owned focus + index)
//! ```
//!
//! # Available Optics
//!
//! - [`IndexedFold`], [`IndexedAffineFold`], [`IndexedTraversal`],
//!   [`IndexedAffineTraversal`]: capability traits for indexed optics
//! - [`AffineFold`], [`AffineTraversal`]: zero-or-one focus, no index
//! - [`Getter`], [`Lens`], [`IndexedGetter`], [`IndexedLens`]: exactly one
//!   focus, the results of the `at` combinators
//! - [`Indexed`], [`UncheckedIndexed`]: narrow an indexed optic to one index
//! - [`at_affine_traversal`], [`at_affine_fold`], [`at_traversal`],
//!   [`at_fold`]: the `at` combinators
//!
//! Ready-made indexed optics for standard collections are listed in
//! [`standard_optics`].
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use outcome_optics::optics::{
//!     FunctionLens, Getter, IndexedGetter, Lens, at_traversal, hash_map_indexed,
//! };
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Inventory {
//!     counts: HashMap<String, u32>,
//! }
//!
//! let counts = FunctionLens::new(
//!     |inventory: &Inventory| inventory.counts.clone(),
//!     |_: Inventory, counts: HashMap<String, u32>| Inventory { counts },
//! );
//! let apples = counts.compose(
//!     at_traversal(hash_map_indexed::<String, u32>(), "apple".to_string()).unindexed(),
//! );
//!
//! let inventory = Inventory { counts: HashMap::from([("apple".to_string(), 3)]) };
//! assert_eq!(apples.view(&inventory), Some(3));
//!
//! let restocked = apples.set(inventory, Some(10));
//! assert_eq!(restocked.counts["apple"], 10);
//!
//! // `None` never inserts or removes.
//! assert_eq!(apples.set(restocked.clone(), None), restocked);
//! ```

mod affine;
mod at;
mod getter;
mod indexed;
mod lens;
pub mod standard_optics;

// Re-export indexed capability traits and their function-backed optics
pub use indexed::FunctionIndexedAffineFold;
pub use indexed::FunctionIndexedAffineTraversal;
pub use indexed::FunctionIndexedFold;
pub use indexed::FunctionIndexedTraversal;
pub use indexed::IndexedAffineFold;
pub use indexed::IndexedAffineTraversal;
pub use indexed::IndexedFold;
pub use indexed::IndexedTraversal;

// Re-export affine optics and the narrowing wrappers
pub use affine::AffineFold;
pub use affine::AffineTraversal;
pub use affine::Indexed;
pub use affine::UncheckedIndexed;

// Re-export getters and lenses
pub use getter::FunctionGetter;
pub use getter::Getter;
pub use getter::IndexedGetter;
pub use getter::Unindexed;
pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::IndexedLens;
pub use lens::Lens;

// Re-export the at combinators
pub use at::AtGetter;
pub use at::AtIndexedGetter;
pub use at::AtIndexedLens;
pub use at::AtLens;
pub use at::at_affine_fold;
pub use at::at_affine_traversal;
pub use at::at_fold;
pub use at::at_traversal;

// Re-export standard optics
pub use standard_optics::association_list;
pub use standard_optics::btree_map_indexed;
pub use standard_optics::hash_map_indexed;
pub use standard_optics::option_indexed;
pub use standard_optics::vec_head;
pub use standard_optics::vec_indexed;
