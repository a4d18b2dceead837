//! Node trait definitions.
//!
//! Nodes live in a [`Vec`]-backed arena and refer to each other through
//! `Option<u32>` indices. Every tree routine takes the arena as a slice and
//! works with indices, so a node is owned by exactly one slot and the links
//! between slots never alias ownership.

use std::cmp::Ordering;

/// Parent / left / right links.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Total-order comparator used by the ordered structures.
pub type Comparator<K> = dyn Fn(&K, &K) -> Ordering;

/// Keyed node interface.
///
/// The key is reachable mutably so that a two-child deletion can move the
/// in-order successor's key into the node being removed.
pub trait KeyNode<K>: Node {
    fn key(&self) -> &K;
    fn key_mut(&mut self) -> &mut K;
}
