use std::cmp::Ordering;

use balanced_set::{AvlConfig, AvlError, AvlSet};

fn build(keys: &[i32]) -> AvlSet<i32> {
    let mut set = AvlSet::new();
    set.extend(keys.iter().copied());
    set
}

fn keys(set: &AvlSet<i32>) -> Vec<i32> {
    set.snapshot().into_keys()
}

#[test]
fn ascending_three_rotates_left_once() {
    let set = build(&[1, 2, 3]);
    assert_eq!(set.rotation_count(), 1);
    assert_eq!(set.height(), 1);
    assert_eq!(
        set.print(),
        "AvlSet\n└─ 2 [h=1 bf=0]\n   ├─ 1 [h=0 bf=0]\n   └─ 3 [h=0 bf=0]"
    );
    set.assert_valid().unwrap();
}

#[test]
fn descending_three_rotates_right_once() {
    let set = build(&[3, 2, 1]);
    assert_eq!(set.rotation_count(), 1);
    assert_eq!(set.height(), 1);
    assert_eq!(
        set.print(),
        "AvlSet\n└─ 2 [h=1 bf=0]\n   ├─ 1 [h=0 bf=0]\n   └─ 3 [h=0 bf=0]"
    );
}

#[test]
fn zig_zag_inserts_rotate_twice() {
    let left_right = build(&[3, 1, 2]);
    assert_eq!(left_right.rotation_count(), 2);
    assert_eq!(left_right.to_string(), "[1:H0:B0, 2:H1:B0, 3:H0:B0]");

    let right_left = build(&[1, 3, 2]);
    assert_eq!(right_left.rotation_count(), 2);
    assert_eq!(right_left.to_string(), "[1:H0:B0, 2:H1:B0, 3:H0:B0]");
}

#[test]
fn sequential_seven_builds_perfect_tree() {
    let set = build(&[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(set.height(), 2);
    assert_eq!(set.rotation_count(), 4);
    assert_eq!(keys(&set), vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(set.snapshot().iter().all(|e| e.balance == 0));
    set.assert_valid().unwrap();
}

#[test]
fn remove_from_perfect_tree_stays_balanced() {
    let mut set = build(&[1, 2, 3, 4, 5, 6, 7]);
    assert!(set.remove(&1));
    assert_eq!(set.size(), 6);
    assert_eq!(set.height(), 2);
    assert_eq!(keys(&set), vec![2, 3, 4, 5, 6, 7]);
    set.assert_valid().unwrap();
}

#[test]
fn remove_root_with_two_children_promotes_successor() {
    let mut set = build(&[1, 2, 3, 4, 5, 6, 7]);
    assert!(set.remove(&4));
    assert_eq!(keys(&set), vec![1, 2, 3, 5, 6, 7]);
    assert!(set.print().starts_with("AvlSet\n└─ 5 [h=2"));
    assert_eq!(set.find(&4), None);
    set.assert_valid().unwrap();
}

#[test]
fn unbalanced_inserts_build_right_chain() {
    let mut set = AvlSet::unbalanced();
    set.extend([1, 2, 3, 4, 5]);
    assert!(!set.balance_enabled());
    assert_eq!(set.height(), 4);
    assert_eq!(set.rotation_count(), 0);
    assert_eq!(
        set.to_string(),
        "[1:H4:B-4, 2:H3:B-3, 3:H2:B-2, 4:H1:B-1, 5:H0:B0]"
    );
    set.assert_valid().unwrap();

    assert!(set.remove(&3));
    assert_eq!(set.height(), 3);
    assert_eq!(set.rotation_count(), 0);
    set.assert_valid().unwrap();
}

#[test]
fn unbalanced_config_matches_constructor() {
    let set = AvlSet::<i32>::with_config(AvlConfig { balance: false });
    assert_eq!(set.config(), AvlConfig { balance: false });
    assert_eq!(AvlSet::<i32>::new().config(), AvlConfig::default());
    assert!(AvlConfig::default().balance);
}

#[test]
fn delete_left_left_rotates_right() {
    let mut set = build(&[3, 2, 4, 1]);
    assert_eq!(set.rotation_count(), 0);
    assert!(set.remove(&4));
    assert_eq!(set.rotation_count(), 1);
    assert_eq!(set.to_string(), "[1:H0:B0, 2:H1:B0, 3:H0:B0]");
    set.assert_valid().unwrap();
}

#[test]
fn delete_with_even_left_child_rotates_once() {
    let mut set = build(&[5, 3, 6, 2, 4]);
    assert!(set.remove(&6));
    assert_eq!(set.rotation_count(), 1);
    assert_eq!(set.to_string(), "[2:H0:B0, 3:H2:B-1, 4:H0:B0, 5:H1:B1]");
    set.assert_valid().unwrap();
}

#[test]
fn delete_left_right_rotates_twice() {
    let mut set = build(&[3, 1, 4, 2]);
    assert!(set.remove(&4));
    assert_eq!(set.rotation_count(), 2);
    assert_eq!(set.to_string(), "[1:H0:B0, 2:H1:B0, 3:H0:B0]");
    set.assert_valid().unwrap();
}

#[test]
fn delete_right_left_rotates_twice() {
    let mut set = build(&[2, 1, 4, 3]);
    assert!(set.remove(&1));
    assert_eq!(set.rotation_count(), 2);
    assert_eq!(set.to_string(), "[2:H0:B0, 3:H1:B0, 4:H0:B0]");
    set.assert_valid().unwrap();
}

#[test]
fn duplicate_insert_and_absent_remove_change_nothing() {
    let mut set = build(&[4, 2, 6, 1, 3]);
    set.find(&3);
    let shape = set.print();
    let (size, comparisons, rotations) =
        (set.size(), set.comparison_count(), set.rotation_count());

    assert!(!set.insert(2));
    assert!(!set.remove(&5));
    assert_eq!(set.print(), shape);
    assert_eq!(set.size(), size);
    assert_eq!(set.comparison_count(), comparisons);
    assert_eq!(set.rotation_count(), rotations);
}

#[test]
fn find_counts_every_visited_position() {
    let mut set = AvlSet::new();
    assert_eq!(set.find(&1), None);
    assert_eq!(set.comparison_count(), 1);

    set.extend([1, 2, 3]);
    assert_eq!(set.find(&2), Some(&2));
    assert_eq!(set.comparison_count(), 2);
    assert_eq!(set.find(&1), Some(&1));
    assert_eq!(set.comparison_count(), 4);
    assert_eq!(set.find(&4), None);
    assert_eq!(set.comparison_count(), 7);
    assert!(set.contains(&3));
    assert_eq!(set.comparison_count(), 9);
}

#[test]
fn snapshot_is_restartable_and_detached() {
    let mut set = build(&[10, 5, 15]);
    let first = set.snapshot();
    assert_eq!(first, set.snapshot());
    set.insert(20);
    assert_eq!(first.len(), 3);
    assert_eq!(set.snapshot().len(), 4);
    assert_eq!(first.keys().copied().collect::<Vec<_>>(), vec![5, 10, 15]);
}

#[test]
fn ladder_insert_delete_matrix() {
    let mut set = AvlSet::new();
    for i in 0..300 {
        set.insert(i);
        set.assert_valid().unwrap();
    }
    assert_eq!(set.size(), 300);
    assert!(f64::from(set.height()) <= 1.45 * 302f64.log2());

    for i in (0..300).step_by(3) {
        assert!(set.remove(&i));
        set.assert_valid().unwrap();
    }
    assert_eq!(set.size(), 200);

    for i in 0..300 {
        assert_eq!(set.find(&i).is_some(), i % 3 != 0);
    }
}

#[test]
fn drain_to_empty() {
    let mut set = build(&[8, 4, 12, 2, 6, 10, 14, 1, 3, 5, 7]);
    for k in [8, 4, 12, 1, 14, 6, 2, 10, 3, 7, 5] {
        assert!(set.remove(&k));
        set.assert_valid().unwrap();
    }
    assert!(set.is_empty());
    assert_eq!(set.height(), -1);
    assert_eq!(set.to_string(), "[]");
}

#[test]
fn custom_comparator_orders_descending() {
    let mut set = AvlSet::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    set.extend([1, 5, 3, 4, 2]);
    assert_eq!(set.snapshot().into_keys(), vec![5, 4, 3, 2, 1]);
    assert_eq!(set.first(), Some(&5));
    set.assert_valid().unwrap();
}

#[test]
fn case_insensitive_comparator_treats_variants_as_duplicates() {
    let cmp = |a: &String, b: &String| -> Ordering { a.to_lowercase().cmp(&b.to_lowercase()) };
    let mut set = AvlSet::with_config_and_comparator(AvlConfig::default(), cmp);
    assert!(set.insert("War".to_string()));
    assert!(!set.insert("war".to_string()));
    assert!(set.insert("peace".to_string()));
    assert_eq!(set.size(), 2);
    assert_eq!(set.find(&"WAR".to_string()), Some(&"War".to_string()));
}

#[test]
fn validation_error_messages() {
    assert_eq!(AvlError::RootHasParent.to_string(), "Root has parent");
    assert_eq!(
        AvlError::BalanceViolated { node: 3, balance: 2 }.to_string(),
        "AVL balance violated at node 3: balance factor 2"
    );
}
