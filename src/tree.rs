//! An unbalanced, key-ordered binary search tree storing a set of values.
//!
//! The tree is shaped purely by insertion order. Operations that modify the
//! tree take each subtree by value and return the (possibly new) root of that
//! subtree, which the caller links back into place. This is what lets
//! deletion work without parent pointers, including deletion of the tree's
//! own root.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! // Inserting the same value again is a no-op.
//! tree.insert(1);
//! assert_eq!(tree.len(), 1);
//!
//! // Removing an absent value is also a no-op.
//! tree.remove(&42);
//! assert_eq!(tree.len(), 1);
//!
//! tree.remove(&1);
//! assert!(!tree.contains(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp;
use std::fmt;

#[derive(Clone, Debug)]
enum Tree<T> {
    Leaf,
    Node(Node<T>),
}

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    left: Box<Tree<T>>,
    right: Box<Tree<T>>,
}

/// A Binary Search Tree containing a set of distinct values. The tree does no
/// balancing as its contents change, so its shape (and therefore the cost of
/// each operation) depends on the order in which values were inserted.
///
/// Most methods require the stored type to implement [`Ord`]; the tree relies
/// on that order being total and never checks it at runtime.
#[derive(Clone, Debug)]
pub struct OrderedTree<T> {
    root: Tree<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::Leaf
    }
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            root: Tree::Leaf,
            len: 0,
        }
    }

    /// Inserts a value into the tree. If the value is already present the
    /// tree is left unchanged - duplicates are silently ignored rather than
    /// stored or overwritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert!(tree.contains(&1));
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: cmp::Ord,
    {
        let (root, inserted) = std::mem::take(&mut self.root).insert(value);
        self.root = root;
        if inserted {
            self.len += 1;
        }
    }

    /// Returns true iff the tree contains the given value. Takes `O(height)`
    /// comparisons and never modifies the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: cmp::Ord,
    {
        self.root.contains(value)
    }

    /// Removes a value from the tree. If the value isn't in the tree, no
    /// action is taken.
    ///
    /// A node with at most one child is replaced by that child (or by
    /// nothing). A node with two children takes over the smallest value in
    /// its right subtree - its in-order successor - and that value's old node
    /// is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// tree.remove(&2);
    /// assert!(!tree.contains(&2));
    /// assert!(tree.contains(&1));
    /// assert!(tree.contains(&3));
    /// ```
    pub fn remove(&mut self, value: &T)
    where
        T: cmp::Ord,
    {
        let (root, removed) = std::mem::take(&mut self.root).remove(value);
        self.root = root;
        if removed {
            self.len -= 1;
        }
    }

    /// Removes every value from the tree, leaving it empty. Each node is
    /// released after its children. Clearing an empty tree is a no-op.
    pub fn clear(&mut self) {
        self.root = Tree::Leaf;
        self.len = 0;
    }

    /// Gets the number of values in the tree. This is a stored count, not a
    /// traversal.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true iff the tree contains no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Checks the search-tree ordering invariant over the whole tree: every
    /// value in a node's left subtree must be strictly less than the node's
    /// value and every value in its right subtree strictly greater, at every
    /// depth. A shape whose immediate children look sorted can still fail
    /// this when a deeper descendant escapes an ancestor's bound; those are
    /// caught too.
    ///
    /// Every tree built only through [`insert`][Self::insert] and
    /// [`remove`][Self::remove] satisfies the invariant, so this is a
    /// verification aid rather than something callers should need on a hot
    /// path.
    pub fn is_proper(&self) -> bool
    where
        T: cmp::Ord,
    {
        self.root.is_ordered(None, None)
    }
}

/// Prints the tree's values in pre-order (node, then left subtree, then right
/// subtree), each followed by a space, wrapped in square brackets. The output
/// depends on the tree's shape, not just its contents.
impl<T> fmt::Display for OrderedTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        self.root.preorder(f)?;
        write!(f, "]")
    }
}

impl<T> Tree<T> {
    /// Returns the subtree with `value` inserted and whether a node was
    /// actually created.
    fn insert(self, value: T) -> (Self, bool)
    where
        T: cmp::Ord,
    {
        match self {
            Tree::Leaf => (Tree::Node(Node::new(value)), true),
            Tree::Node(n) => match value.cmp(&n.value) {
                cmp::Ordering::Less => {
                    let (left, inserted) = n.left.insert(value);
                    (
                        Tree::Node(Node {
                            left: Box::new(left),
                            ..n
                        }),
                        inserted,
                    )
                }
                cmp::Ordering::Equal => (Tree::Node(n), false),
                cmp::Ordering::Greater => {
                    let (right, inserted) = n.right.insert(value);
                    (
                        Tree::Node(Node {
                            right: Box::new(right),
                            ..n
                        }),
                        inserted,
                    )
                }
            },
        }
    }

    fn contains(&self, value: &T) -> bool
    where
        T: cmp::Ord,
    {
        match self {
            Tree::Leaf => false,
            Tree::Node(n) => match value.cmp(&n.value) {
                cmp::Ordering::Less => n.left.contains(value),
                cmp::Ordering::Equal => true,
                cmp::Ordering::Greater => n.right.contains(value),
            },
        }
    }

    /// Returns the subtree with `value` removed and whether a node was
    /// actually deleted.
    fn remove(self, value: &T) -> (Self, bool)
    where
        T: cmp::Ord,
    {
        match self {
            Tree::Leaf => (Tree::Leaf, false),
            Tree::Node(n) => match value.cmp(&n.value) {
                cmp::Ordering::Less => {
                    let (left, removed) = n.left.remove(value);
                    (
                        Tree::Node(Node {
                            left: Box::new(left),
                            ..n
                        }),
                        removed,
                    )
                }
                cmp::Ordering::Equal => (n.remove_self(), true),
                cmp::Ordering::Greater => {
                    let (right, removed) = n.right.remove(value);
                    (
                        Tree::Node(Node {
                            right: Box::new(right),
                            ..n
                        }),
                        removed,
                    )
                }
            },
        }
    }

    /// Checks the ordering invariant with exclusive bounds inherited from all
    /// ancestors, so every descendant is validated against every bound it
    /// sits under.
    fn is_ordered(&self, lower: Option<&T>, upper: Option<&T>) -> bool
    where
        T: cmp::Ord,
    {
        match self {
            Tree::Leaf => true,
            Tree::Node(n) => {
                lower.map_or(true, |lo| *lo < n.value)
                    && upper.map_or(true, |hi| n.value < *hi)
                    && n.left.is_ordered(lower, Some(&n.value))
                    && n.right.is_ordered(Some(&n.value), upper)
            }
        }
    }

    fn preorder(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        T: fmt::Display,
    {
        if let Tree::Node(n) = self {
            write!(f, "{} ", n.value)?;
            n.left.preorder(f)?;
            n.right.preorder(f)?;
        }
        Ok(())
    }
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: Box::new(Tree::Leaf),
            right: Box::new(Tree::Leaf),
        }
    }

    /// Returns the subtree that replaces this node when it is deleted.
    fn remove_self(self) -> Tree<T>
    where
        T: cmp::Ord,
    {
        match (*self.left, *self.right) {
            (Tree::Leaf, right) => right,
            (left, Tree::Leaf) => left,

            // Two children: promote the in-order successor. That is, the
            // smallest value in this node's right subtree.
            (left, Tree::Node(right)) => {
                let (successor, right) = right.take_smallest();
                Tree::Node(Node {
                    value: successor,
                    left: Box::new(left),
                    right: Box::new(right),
                })
            }
        }
    }

    /// Returns the smallest value in this subtree and a new subtree without
    /// the node that held it.
    fn take_smallest(self) -> (T, Tree<T>) {
        let Node { value, left, right } = self;
        match *left {
            Tree::Leaf => (value, *right),
            Tree::Node(l) => {
                let (smallest, left) = l.take_smallest();
                (
                    smallest,
                    Tree::Node(Node {
                        value,
                        left: Box::new(left),
                        right,
                    }),
                )
            }
        }
    }
}
