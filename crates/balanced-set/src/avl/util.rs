use std::cmp::Ordering;
use std::fmt::Debug;

use log::trace;

use crate::error::AvlError;
use crate::print::{print_tree, PrintChild};
use crate::types::{KeyNode, Node};

use super::types::AvlNodeLike;

#[inline]
fn get_p<N: Node>(arena: &[N], i: u32) -> Option<u32> {
    arena[i as usize].p()
}

#[inline]
fn get_l<N: Node>(arena: &[N], i: u32) -> Option<u32> {
    arena[i as usize].l()
}

#[inline]
fn get_r<N: Node>(arena: &[N], i: u32) -> Option<u32> {
    arena[i as usize].r()
}

#[inline]
fn set_p<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_p(v);
}

#[inline]
fn set_l<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_l(v);
}

#[inline]
fn set_r<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_r(v);
}

/// Cached height of an optional subtree, `-1` when absent.
#[inline]
pub fn height<N: AvlNodeLike>(arena: &[N], node: Option<u32>) -> i32 {
    node.map_or(-1, |i| arena[i as usize].height())
}

/// `height(left) - height(right)`.
#[inline]
pub fn balance_factor<N: AvlNodeLike>(arena: &[N], i: u32) -> i32 {
    height(arena, get_l(arena, i)) - height(arena, get_r(arena, i))
}

#[inline]
fn update_height<N: AvlNodeLike>(arena: &mut [N], i: u32) {
    let h = 1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i)));
    arena[i as usize].set_height(h);
}

/// Re-points whichever link of `p` referenced `old` at `new`.
#[inline]
fn replace_child<N: Node>(arena: &mut [N], p: Option<u32>, old: u32, new: Option<u32>) {
    if let Some(p) = p {
        if get_l(arena, p) == Some(old) {
            set_l(arena, p, new);
        } else {
            set_r(arena, p, new);
        }
    }
}

/// Promotes the right child of `n` into its place and returns it.
pub fn rotate_left<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    let nr = get_r(arena, n).expect("left rotation needs a right child");
    let p = get_p(arena, n);
    let nrl = get_l(arena, nr);

    set_r(arena, n, nrl);
    if let Some(nrl) = nrl {
        set_p(arena, nrl, Some(n));
    }
    set_l(arena, nr, Some(n));
    set_p(arena, n, Some(nr));
    set_p(arena, nr, p);
    replace_child(arena, p, n, Some(nr));

    update_height(arena, n);
    update_height(arena, nr);
    trace!("rotate left at node {n}, promoted {nr}");
    nr
}

/// Promotes the left child of `n` into its place and returns it.
pub fn rotate_right<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    let nl = get_l(arena, n).expect("right rotation needs a left child");
    let p = get_p(arena, n);
    let nlr = get_r(arena, nl);

    set_l(arena, n, nlr);
    if let Some(nlr) = nlr {
        set_p(arena, nlr, Some(n));
    }
    set_r(arena, nl, Some(n));
    set_p(arena, n, Some(nl));
    set_p(arena, nl, p);
    replace_child(arena, p, n, Some(nl));

    update_height(arena, n);
    update_height(arena, nl);
    trace!("rotate right at node {n}, promoted {nl}");
    nl
}

/// Leftmost node of the subtree rooted at `i`.
fn leftmost<N: Node>(arena: &[N], mut i: u32) -> u32 {
    while let Some(l) = get_l(arena, i) {
        i = l;
    }
    i
}

/// Smallest node of the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    root.map(|r| leftmost(arena, r))
}

/// Looks `key` up, returning the matching node and the number of positions
/// visited, the terminal absent position of a miss included.
pub fn find<K, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> (Option<u32>, u64)
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let mut visited = 0;
    let mut curr = root;
    loop {
        visited += 1;
        let Some(i) = curr else {
            return (None, visited);
        };
        curr = match comparator(key, arena[i as usize].key()) {
            Ordering::Equal => return (Some(i), visited),
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
        };
    }
}

/// Links `node` in as a new leaf unless its key is already present.
///
/// Returns the new root, or hands `node` back untouched on a duplicate key.
pub fn insert<K, N, C>(
    arena: &mut Vec<N>,
    root: Option<u32>,
    node: N,
    balance: bool,
    comparator: &C,
    rotations: &mut u64,
) -> Result<u32, N>
where
    N: AvlNodeLike + KeyNode<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let mut parent = None;
    let mut side = Ordering::Equal;
    let mut curr = root;
    while let Some(i) = curr {
        side = comparator(node.key(), arena[i as usize].key());
        curr = match side {
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
            Ordering::Equal => return Err(node),
        };
        parent = Some(i);
    }

    let n = arena.len() as u32;
    arena.push(node);
    let Some(p) = parent else {
        return Ok(n);
    };
    set_p(arena, n, Some(p));
    if side == Ordering::Less {
        set_l(arena, p, Some(n));
    } else {
        set_r(arena, p, Some(n));
    }
    Ok(rebalance_after_insert(arena, n, balance, comparator, rotations))
}

/// Walks from the new leaf `n` up to the root refreshing heights.
///
/// The double-rotation cases are told apart by where the new key lies
/// relative to the heavy child.
fn rebalance_after_insert<K, N, C>(
    arena: &mut [N],
    n: u32,
    balance: bool,
    comparator: &C,
    rotations: &mut u64,
) -> u32
where
    N: AvlNodeLike + KeyNode<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let mut top = n;
    let mut curr = get_p(arena, n);
    while let Some(i) = curr {
        update_height(arena, i);
        let mut sub = i;
        if balance {
            let bf = balance_factor(arena, i);
            if bf > 1 {
                let l = get_l(arena, i).expect("left-heavy node has a left child");
                if comparator(arena[n as usize].key(), arena[l as usize].key()) == Ordering::Greater {
                    rotate_left(arena, l);
                    *rotations += 1;
                }
                sub = rotate_right(arena, i);
                *rotations += 1;
            } else if bf < -1 {
                let r = get_r(arena, i).expect("right-heavy node has a right child");
                if comparator(arena[n as usize].key(), arena[r as usize].key()) == Ordering::Less {
                    rotate_right(arena, r);
                    *rotations += 1;
                }
                sub = rotate_left(arena, i);
                *rotations += 1;
            }
        }
        top = sub;
        curr = get_p(arena, sub);
    }
    top
}

/// Unlinks the node holding `key`, if any.
///
/// A node with two children takes over its in-order successor's key and the
/// successor's node, which has at most one child, is spliced out instead.
/// Returns the new root together with the node taken out of the arena.
pub fn remove<K, N, C>(
    arena: &mut Vec<N>,
    root: Option<u32>,
    key: &K,
    balance: bool,
    comparator: &C,
    rotations: &mut u64,
) -> Option<(Option<u32>, N)>
where
    N: AvlNodeLike + KeyNode<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let n = find(arena, root, key, comparator).0?;
    let target = match (get_l(arena, n), get_r(arena, n)) {
        (Some(_), Some(r)) => {
            let s = leftmost(arena, r);
            swap_keys::<K, N>(arena, n, s);
            s
        }
        _ => n,
    };

    let p = get_p(arena, target);
    let child = get_l(arena, target).or(get_r(arena, target));
    if let Some(c) = child {
        set_p(arena, c, p);
    }
    replace_child(arena, p, target, child);
    set_p(arena, target, None);
    set_l(arena, target, None);
    set_r(arena, target, None);

    let root = if p.is_none() { child } else { root };
    let mut root = rebalance_after_remove(arena, p, root, balance, rotations);
    let removed = release(arena, target, &mut root);
    Some((root, removed))
}

/// Walks from `start` up to the root refreshing heights.
///
/// Every ancestor is checked: one rotation may leave the subtree shorter than
/// before, unbalancing nodes further up. The double-rotation cases are told
/// apart by the heavy child's own balance factor.
fn rebalance_after_remove<N: AvlNodeLike>(
    arena: &mut [N],
    start: Option<u32>,
    mut root: Option<u32>,
    balance: bool,
    rotations: &mut u64,
) -> Option<u32> {
    let mut curr = start;
    while let Some(i) = curr {
        update_height(arena, i);
        let mut sub = i;
        if balance {
            let bf = balance_factor(arena, i);
            if bf > 1 {
                let l = get_l(arena, i).expect("left-heavy node has a left child");
                if balance_factor(arena, l) < 0 {
                    rotate_left(arena, l);
                    *rotations += 1;
                }
                sub = rotate_right(arena, i);
                *rotations += 1;
            } else if bf < -1 {
                let r = get_r(arena, i).expect("right-heavy node has a right child");
                if balance_factor(arena, r) > 0 {
                    rotate_right(arena, r);
                    *rotations += 1;
                }
                sub = rotate_left(arena, i);
                *rotations += 1;
            }
        }
        curr = get_p(arena, sub);
        if curr.is_none() {
            root = Some(sub);
        }
    }
    root
}

fn swap_keys<K, N: KeyNode<K>>(arena: &mut [N], a: u32, b: u32) {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = arena.split_at_mut(hi as usize);
    std::mem::swap(head[lo as usize].key_mut(), tail[0].key_mut());
}

/// Takes the unlinked node `idx` out of the arena.
///
/// The last slot is moved into the hole, so the links pointing at it (and
/// `root`) are re-pointed at `idx`.
fn release<N: Node>(arena: &mut Vec<N>, idx: u32, root: &mut Option<u32>) -> N {
    let last = (arena.len() - 1) as u32;
    let node = arena.swap_remove(idx as usize);
    if idx != last {
        let p = get_p(arena, idx);
        replace_child(arena, p, last, Some(idx));
        if let Some(l) = get_l(arena, idx) {
            set_p(arena, l, Some(idx));
        }
        if let Some(r) = get_r(arena, idx) {
            set_p(arena, r, Some(idx));
        }
        if *root == Some(last) {
            *root = Some(idx);
        }
    }
    node
}

/// In-order walk driven by an explicit stack, so skewed trees never deepen
/// the call stack.
pub(crate) struct InOrder<'a, N> {
    arena: &'a [N],
    stack: Vec<u32>,
    curr: Option<u32>,
}

impl<'a, N: Node> InOrder<'a, N> {
    pub(crate) fn new(arena: &'a [N], root: Option<u32>) -> Self {
        Self {
            arena,
            stack: Vec::new(),
            curr: root,
        }
    }
}

impl<N: Node> Iterator for InOrder<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        while let Some(i) = self.curr {
            self.stack.push(i);
            self.curr = get_l(self.arena, i);
        }
        let i = self.stack.pop()?;
        self.curr = get_r(self.arena, i);
        Some(i)
    }
}

/// Checks links, cached heights, balance (when `balance` is set), strict key
/// order and the recorded size. Heights are recomputed bottom-up without
/// recursion.
pub fn assert_avl_tree<K, N, C>(
    arena: &[N],
    root: Option<u32>,
    size: usize,
    balance: bool,
    comparator: &C,
) -> Result<(), AvlError>
where
    N: AvlNodeLike + KeyNode<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let Some(root) = root else {
        if size != 0 {
            return Err(AvlError::SizeMismatch {
                recorded: size,
                reachable: 0,
            });
        }
        return Ok(());
    };

    if get_p(arena, root).is_some() {
        return Err(AvlError::RootHasParent);
    }

    // Pre-order; reversed, every node comes after both of its children.
    let mut order = Vec::with_capacity(size);
    let mut stack = vec![root];
    while let Some(i) = stack.pop() {
        order.push(i);
        for c in [get_l(arena, i), get_r(arena, i)].into_iter().flatten() {
            if get_p(arena, c) != Some(i) {
                return Err(AvlError::BrokenParentLink { node: c });
            }
            stack.push(c);
        }
    }
    if order.len() != size || arena.len() != size {
        return Err(AvlError::SizeMismatch {
            recorded: size,
            reachable: order.len(),
        });
    }

    let mut actual = vec![-1; arena.len()];
    for &i in order.iter().rev() {
        let lh = get_l(arena, i).map_or(-1, |l| actual[l as usize]);
        let rh = get_r(arena, i).map_or(-1, |r| actual[r as usize]);
        let h = 1 + lh.max(rh);
        let cached = arena[i as usize].height();
        if cached != h {
            return Err(AvlError::HeightMismatch {
                node: i,
                cached,
                actual: h,
            });
        }
        if balance && !(-1..=1).contains(&(lh - rh)) {
            return Err(AvlError::BalanceViolated {
                node: i,
                balance: lh - rh,
            });
        }
        actual[i as usize] = h;
    }

    let mut prev: Option<u32> = None;
    for i in InOrder::new(arena, Some(root)) {
        if let Some(prev) = prev {
            if comparator(arena[prev as usize].key(), arena[i as usize].key()) != Ordering::Less {
                return Err(AvlError::OrderViolated { node: i });
            }
        }
        prev = Some(i);
    }

    Ok(())
}

/// Debug printer for AVL trees.
pub fn print<K, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    N: AvlNodeLike + KeyNode<K>,
{
    let Some(i) = node else {
        return "∅".to_string();
    };
    let n = &arena[i as usize];
    let label = format!(
        "{:?} [h={} bf={}]",
        n.key(),
        n.height(),
        balance_factor(arena, i)
    );
    let (l, r) = (n.l(), n.r());
    if l.is_none() && r.is_none() {
        return label;
    }
    let left: &PrintChild<'_> = &|tab: &str| print::<K, N>(arena, l, tab);
    let right: &PrintChild<'_> = &|tab: &str| print::<K, N>(arena, r, tab);
    label + &print_tree(tab, &[Some(left), Some(right)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avl::types::AvlNode;

    fn cmp(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    fn build(keys: &[i32], balance: bool) -> (Vec<AvlNode<i32>>, Option<u32>, u64) {
        let mut arena = Vec::new();
        let mut root = None;
        let mut rotations = 0;
        for &k in keys {
            if let Ok(r) = insert(&mut arena, root, AvlNode::new(k), balance, &cmp, &mut rotations) {
                root = Some(r);
            }
        }
        (arena, root, rotations)
    }

    fn keys_in_order(arena: &[AvlNode<i32>], root: Option<u32>) -> Vec<i32> {
        InOrder::new(arena, root).map(|i| arena[i as usize].k).collect()
    }

    #[test]
    fn rotate_left_promotes_right_child() {
        let (mut arena, root, _) = build(&[1, 2, 3], false);
        let root = root.unwrap();
        assert_eq!(height(&arena, Some(root)), 2);

        let promoted = rotate_left(&mut arena, root);
        assert_eq!(arena[promoted as usize].k, 2);
        assert_eq!(arena[promoted as usize].p, None);
        assert_eq!(arena[promoted as usize].h, 1);
        assert_eq!(arena[root as usize].h, 0);
        assert_eq!(arena[root as usize].p, Some(promoted));
        assert_eq!(keys_in_order(&arena, Some(promoted)), vec![1, 2, 3]);
    }

    #[test]
    fn rotate_right_moves_inner_subtree() {
        let (mut arena, root, _) = build(&[4, 2, 5, 1, 3], false);
        let root = root.unwrap();
        let promoted = rotate_right(&mut arena, root);
        assert_eq!(arena[promoted as usize].k, 2);
        let old_root = &arena[root as usize];
        assert_eq!(old_root.l.map(|i| arena[i as usize].k), Some(3));
        assert_eq!(old_root.r.map(|i| arena[i as usize].k), Some(5));
        assert_eq!(keys_in_order(&arena, Some(promoted)), vec![1, 2, 3, 4, 5]);
        assert_eq!(height(&arena, Some(promoted)), 2);
    }

    #[test]
    fn insert_hands_back_duplicate() {
        let mut arena = Vec::new();
        let mut rotations = 0;
        let root = insert(&mut arena, None, AvlNode::new(7), true, &cmp, &mut rotations).ok();
        let dup = insert(&mut arena, root, AvlNode::new(7), true, &cmp, &mut rotations);
        assert!(matches!(dup, Err(node) if node.k == 7));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn find_counts_terminal_miss() {
        let (arena, root, _) = build(&[2, 1, 3], true);
        assert_eq!(find(&arena, None, &1, &cmp), (None, 1));
        assert_eq!(find(&arena, root, &2, &cmp).1, 1);
        assert_eq!(find(&arena, root, &3, &cmp).1, 2);
        assert_eq!(find(&arena, root, &4, &cmp), (None, 3));
    }

    #[test]
    fn remove_reclaims_arena_slot() {
        let (mut arena, root, mut rotations) = build(&[1, 2, 3, 4, 5, 6, 7], true);
        let (root, removed) = remove(&mut arena, root, &4, true, &cmp, &mut rotations).unwrap();
        assert_eq!(removed.k, 4);
        assert_eq!(arena.len(), 6);
        assert_eq!(keys_in_order(&arena, root), vec![1, 2, 3, 5, 6, 7]);
        assert_avl_tree(&arena, root, 6, true, &cmp).unwrap();
        assert!(remove(&mut arena, root, &4, true, &cmp, &mut rotations).is_none());
    }

    #[test]
    fn assert_avl_tree_flags_stale_height() {
        let (mut arena, root, _) = build(&[2, 1, 3], true);
        arena[root.unwrap() as usize].h = 5;
        assert!(matches!(
            assert_avl_tree(&arena, root, 3, true, &cmp),
            Err(AvlError::HeightMismatch { cached: 5, actual: 1, .. })
        ));
    }

    #[test]
    fn assert_avl_tree_flags_order() {
        let (mut arena, root, _) = build(&[2, 1, 3], true);
        let l = arena[root.unwrap() as usize].l.unwrap();
        arena[l as usize].k = 9;
        assert!(matches!(
            assert_avl_tree(&arena, root, 3, true, &cmp),
            Err(AvlError::OrderViolated { .. })
        ));
    }

    #[test]
    fn assert_avl_tree_ignores_balance_when_disabled() {
        let (arena, root, rotations) = build(&[1, 2, 3], false);
        assert_eq!(rotations, 0);
        assert!(assert_avl_tree(&arena, root, 3, false, &cmp).is_ok());
        assert!(matches!(
            assert_avl_tree(&arena, root, 3, true, &cmp),
            Err(AvlError::BalanceViolated { balance: -2, .. })
        ));
    }
}
