//! This crate provides [`OrderedTree`], an unbalanced Binary Search Tree
//! (BST) holding a set of distinct, totally-ordered values.
//!
//! ## Binary Search Tree
//!
//! A BST is defined recursively out of `Node`s. Each `Node` stores one value
//! and owns up to two child `Node`s, and the whole structure maintains two
//! invariants:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than its own value.
//!
//! Thanks to these invariants, looking a value up only ever descends one
//! path, taking `O(height)` comparisons (where `height` is the longest path
//! from the root `Node` to a childless one) instead of scanning every stored
//! value. That is the payoff over a flat list: membership tests over a large
//! dictionary need not touch most of it.
//!
//! This tree never rebalances itself, so `height` depends entirely on the
//! order values arrive in. Random-ish insertion orders tend to stay close to
//! `O(lg N)`; inserting already-sorted input degrades the tree into a chain
//! and lookups into a scan. Callers that need a guaranteed height bound want
//! a self-balancing variant, which is out of scope here.
//!
//! The tree is not thread-safe; wrap it in a lock for shared use.

#![deny(missing_docs)]

pub mod tree;

pub use tree::OrderedTree;
