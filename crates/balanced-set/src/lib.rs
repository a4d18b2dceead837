//! AVL-balanced ordered set of unique keys.
//!
//! Logarithmic insertion, deletion and lookup over any key type with a total
//! order, plus the instrumentation a caller needs to study the structure:
//! a lookup comparison counter, a rotation counter and cached subtree heights.
//!
//! Nodes are kept in a `Vec` arena and linked by `Option<u32>` indices; every
//! mutating walk is iterative, following parent links back to the root.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] / [`KeyNode`] link traits, [`Comparator`] |
//! | [`avl`] | [`AvlSet`], its node, config, snapshot and tree surgery |
//! | [`print`] | Box-drawing tree dumps |
//! | [`error`] | [`AvlError`] raised by validation |
//!
//! ```
//! use balanced_set::AvlSet;
//!
//! let mut set = AvlSet::new();
//! for key in [1, 2, 3] {
//!     set.insert(key);
//! }
//! assert_eq!(set.height(), 1);
//! assert_eq!(set.rotation_count(), 1);
//! assert_eq!(set.find(&2), Some(&2));
//! ```

pub mod avl;
pub mod error;
pub mod print;
pub mod types;

pub use avl::{AvlConfig, AvlSet, Snapshot, SnapshotEntry};
pub use error::AvlError;
pub use types::{Comparator, KeyNode, Node};
