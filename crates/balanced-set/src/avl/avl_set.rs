use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;

use log::debug;

use crate::error::AvlError;

use super::snapshot::{write_entry, Snapshot, SnapshotEntry};
use super::types::{AvlConfig, AvlNode};
use super::util::{self, InOrder};

fn default_comparator<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

/// Ordered set of unique keys kept AVL-balanced.
///
/// Nodes live in an index arena; a removed node's slot is reclaimed at once,
/// so the arena never holds more nodes than [`size`](Self::size).
///
/// Two counters are exposed for instrumentation and are never reset:
/// [`comparison_count`](Self::comparison_count) grows on every
/// [`find`](Self::find), [`rotation_count`](Self::rotation_count) on every
/// single rotation (a double rotation counts two).
///
/// Not synchronised: share it across threads behind one exclusive lock.
pub struct AvlSet<K, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    root: Option<u32>,
    size: usize,
    arena: Vec<AvlNode<K>>,
    config: AvlConfig,
    comparator: C,
    comparisons: Cell<u64>,
    rotations: u64,
}

impl<K> AvlSet<K, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self::with_config(AvlConfig::default())
    }

    /// A plain binary search tree: no rotations, heights still tracked.
    pub fn unbalanced() -> Self {
        Self::with_config(AvlConfig { balance: false })
    }

    pub fn with_config(config: AvlConfig) -> Self {
        Self::with_config_and_comparator(config, default_comparator::<K>)
    }
}

impl<K> Default for AvlSet<K, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> AvlSet<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// `comparator` must be a total order; a set built over an inconsistent
    /// one is left in an unspecified shape.
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_config_and_comparator(AvlConfig::default(), comparator)
    }

    pub fn with_config_and_comparator(config: AvlConfig, comparator: C) -> Self {
        Self {
            root: None,
            size: 0,
            arena: Vec::new(),
            config,
            comparator,
            comparisons: Cell::new(0),
            rotations: 0,
        }
    }

    /// Adds `key`; returns `false` and leaves the set untouched if it is
    /// already present.
    pub fn insert(&mut self, key: K) -> bool {
        match util::insert(
            &mut self.arena,
            self.root,
            AvlNode::new(key),
            self.config.balance,
            &self.comparator,
            &mut self.rotations,
        ) {
            Ok(root) => {
                self.root = Some(root);
                self.size += 1;
                true
            }
            Err(_) => false,
        }
    }

    /// Removes `key`; returns `false` if it was absent.
    pub fn remove(&mut self, key: &K) -> bool {
        match util::remove(
            &mut self.arena,
            self.root,
            key,
            self.config.balance,
            &self.comparator,
            &mut self.rotations,
        ) {
            Some((root, _node)) => {
                self.root = root;
                self.size -= 1;
                true
            }
            None => false,
        }
    }

    /// Looks `key` up.
    ///
    /// Adds one to the comparison counter per node visited, plus one for the
    /// empty position a miss ends on: an empty set counts `1`.
    pub fn find(&self, key: &K) -> Option<&K> {
        let (found, visited) = util::find(&self.arena, self.root, key, &self.comparator);
        self.comparisons.set(self.comparisons.get() + visited);
        found.map(|i| &self.arena[i as usize].k)
    }

    /// Same as `find(key).is_some()`, counting included.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Root height: `-1` when empty, `0` for a single node.
    pub fn height(&self) -> i32 {
        util::height(&self.arena, self.root)
    }

    pub fn comparison_count(&self) -> u64 {
        self.comparisons.get()
    }

    pub fn rotation_count(&self) -> u64 {
        self.rotations
    }

    pub fn config(&self) -> AvlConfig {
        self.config
    }

    pub fn balance_enabled(&self) -> bool {
        self.config.balance
    }

    /// Smallest key.
    pub fn first(&self) -> Option<&K> {
        util::first(&self.arena, self.root).map(|i| &self.arena[i as usize].k)
    }

    /// Drops every key. The counters keep their values.
    pub fn clear(&mut self) {
        debug!("clearing AVL set of {} keys", self.size);
        self.root = None;
        self.size = 0;
        self.arena.clear();
    }

    /// Copies the keys out in ascending order, each with its node's height
    /// and balance factor.
    pub fn snapshot(&self) -> Snapshot<K>
    where
        K: Clone,
    {
        InOrder::new(&self.arena, self.root)
            .map(|i| SnapshotEntry {
                key: self.arena[i as usize].k.clone(),
                height: self.arena[i as usize].h,
                balance: util::balance_factor(&self.arena, i),
            })
            .collect()
    }

    pub fn assert_valid(&self) -> Result<(), AvlError> {
        util::assert_avl_tree(
            &self.arena,
            self.root,
            self.size,
            self.config.balance,
            &self.comparator,
        )
    }

    /// Indented dump of the tree shape, for debugging.
    pub fn print(&self) -> String
    where
        K: fmt::Debug,
    {
        format!("AvlSet\n└─ {}", util::print::<K, _>(&self.arena, self.root, "   "))
    }
}

impl<K, C> Extend<K> for AvlSet<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

/// Same text as [`Snapshot`]'s `Display`, written without copying keys.
impl<K, C> fmt::Display for AvlSet<K, C>
where
    K: fmt::Display,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (n, i) in InOrder::new(&self.arena, self.root).enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            let node = &self.arena[i as usize];
            write_entry(f, &node.k, node.h, util::balance_factor(&self.arena, i))?;
        }
        f.write_str("]")
    }
}

impl<K, C> fmt::Debug for AvlSet<K, C>
where
    K: fmt::Debug,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(InOrder::new(&self.arena, self.root).map(|i| &self.arena[i as usize].k))
            .finish()
    }
}
