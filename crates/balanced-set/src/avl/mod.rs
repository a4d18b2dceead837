//! AVL-balanced ordered set over an index arena.
//!
//! [`AvlSet`] owns the arena; [`util`] holds the free functions doing the
//! actual tree surgery (rotations, leaf insertion, splice-out deletion and
//! the two upward rebalancing walks) so they can be exercised on bare arenas.

pub mod avl_set;
pub mod snapshot;
pub mod types;
pub mod util;

pub use avl_set::AvlSet;
pub use snapshot::{Snapshot, SnapshotEntry};
pub use types::{AvlConfig, AvlNode, AvlNodeLike};
pub use util::{assert_avl_tree, balance_factor, height, print, rotate_left, rotate_right};
