//! End-to-end scenarios exercising the tree the way a driving program would:
//! fixed insertion sequences with known shapes, a seeded pseudo-random build,
//! and the degenerate all-ascending chain.

use std::collections::BTreeSet;

use ordered_tree::OrderedTree;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn tree_of(values: &[i32]) -> OrderedTree<i32> {
    let mut tree = OrderedTree::new();
    for &v in values {
        tree.insert(v);
    }
    tree
}

#[test]
fn fixed_sequence_has_expected_shape() {
    let tree = tree_of(&[13, 7, 20, 1, 3, 15, 25, 22, 27]);

    assert_eq!(tree.len(), 9);
    assert!(tree.is_proper());
    assert_eq!(tree.to_string(), "[13 7 1 3 20 15 25 22 27 ]");
}

#[test]
fn reordered_sequence_is_still_proper() {
    // A different insertion order produces a different shape, but any tree
    // built purely through `insert` satisfies the ordering invariant; the
    // descent itself places each value on the correct side of every
    // ancestor.
    let tree = tree_of(&[13, 1, 20, 3, 15, 25, 7, 27]);

    assert_eq!(tree.len(), 8);
    assert!(tree.is_proper());
    assert_eq!(tree.to_string(), "[13 1 3 7 20 15 25 27 ]");
}

#[test]
fn seeded_random_build_and_removal() {
    let mut rng = ChaCha8Rng::seed_from_u64(68333);

    let mut tree = OrderedTree::new();
    let mut inserted = BTreeSet::new();

    tree.insert(45);
    inserted.insert(45);
    for _ in 0..10 {
        let v: i32 = rng.gen_range(0..200);
        tree.insert(v);
        inserted.insert(v);
    }

    // Duplicates in the random draw shrink both counts identically.
    assert_eq!(tree.len(), inserted.len());
    assert!(tree.len() <= 11);
    assert!(tree.is_proper());
    assert!(inserted.iter().all(|v| tree.contains(v)));

    // Remove two values known to be present.
    let mut present = inserted.iter().copied();
    let first = present.next().unwrap();
    let second = present.next().unwrap();

    let before = tree.len();
    tree.remove(&first);
    tree.remove(&second);

    assert_eq!(tree.len(), before - 2);
    assert!(!tree.contains(&first));
    assert!(!tree.contains(&second));
    assert!(tree.is_proper());
}

#[test]
fn ascending_chain_prints_sorted_preorder() {
    let tree = tree_of(&(0..20).collect::<Vec<_>>());

    assert_eq!(tree.len(), 20);
    assert!(tree.is_proper());

    // In a pre-order rendering each node precedes its whole left subtree, so
    // strictly increasing output is only possible when no node has a left
    // child: the tree is a pure right-leaning chain.
    let mut expected = String::from("[");
    for v in 0..20 {
        expected.push_str(&format!("{} ", v));
    }
    expected.push(']');
    assert_eq!(tree.to_string(), expected);
}

#[test]
fn clear_then_reuse() {
    let mut tree = tree_of(&[13, 7, 20, 1, 3]);

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.to_string(), "[]");
    assert!(!tree.contains(&13));

    // Clearing again is a safe no-op.
    tree.clear();
    assert!(tree.is_empty());

    tree.insert(99);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.to_string(), "[99 ]");
}

#[test]
fn copy_survives_clearing_the_source() {
    let mut tree = tree_of(&[13, 7, 20, 1, 3]);
    let copy = tree.clone();

    tree.clear();
    assert!(tree.is_empty());

    assert_eq!(copy.len(), 5);
    assert_eq!(copy.to_string(), "[13 7 1 3 20 ]");
    assert!(copy.is_proper());

    // Assigning the copy back restores the original.
    tree = copy.clone();
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.to_string(), "[13 7 1 3 20 ]");
}
