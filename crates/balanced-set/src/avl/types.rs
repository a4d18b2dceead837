use crate::types::{KeyNode, Node};

/// Arena node of an [`AvlSet`](super::AvlSet).
#[derive(Clone, Debug)]
pub struct AvlNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    /// Cached subtree height; a leaf is `0`, an absent child counts as `-1`.
    pub h: i32,
}

impl<K> AvlNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            h: 0,
        }
    }
}

impl<K> Node for AvlNode<K> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K> KeyNode<K> for AvlNode<K> {
    fn key(&self) -> &K {
        &self.k
    }

    fn key_mut(&mut self) -> &mut K {
        &mut self.k
    }
}

/// AVL-specific node behavior.
///
/// Independent of the key type so that the structural helpers (rotations,
/// height upkeep) only need the links and the cached height.
pub trait AvlNodeLike: Node {
    fn height(&self) -> i32;
    fn set_height(&mut self, h: i32);
}

impl<K> AvlNodeLike for AvlNode<K> {
    fn height(&self) -> i32 {
        self.h
    }

    fn set_height(&mut self, h: i32) {
        self.h = h;
    }
}

/// Construction-time options of an [`AvlSet`](super::AvlSet).
///
/// Options are fixed once the set is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AvlConfig {
    /// When `false` the set is a plain binary search tree: heights are still
    /// tracked but no rotation is ever performed.
    pub balance: bool,
}

impl Default for AvlConfig {
    fn default() -> Self {
        Self { balance: true }
    }
}
