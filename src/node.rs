use std::cmp::Ordering;

/// An owned, optional child subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    /// Child nodes pointers.
    left: Link<K>,
    right: Link<K>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, and an absent subtree a height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    key: K,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Insert `key` into the subtree rooted at `self`, returning true if it
    /// was not already present.
    ///
    /// A duplicate key is dropped and the subtree is left untouched.
    pub(crate) fn insert(self: &mut Box<Self>, key: K) -> bool
    where
        K: Ord,
    {
        let child = match key.cmp(&self.key) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return false,
            Ordering::Greater => &mut self.right,
        };

        let inserted = match child {
            Some(v) => v.insert(key),
            None => {
                *child = Some(Box::new(Self::new(key)));
                true
            }
        };

        if !inserted {
            // The tree structure has not been modified, so it does not require
            // rebalancing.
            return false;
        }

        rebalance(self);
        true
    }

    pub(crate) fn get(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        let node = match key.cmp(&self.key) {
            Ordering::Less => self.left(),
            Ordering::Equal => return Some(&self.key),
            Ordering::Greater => self.right(),
        }?;

        node.get(key)
    }

    /// Return the key of the left-most node in this subtree.
    pub(crate) fn min(&self) -> &K {
        let mut n = self;
        while let Some(v) = n.left() {
            n = v;
        }
        &n.key
    }

    /// Return the key of the right-most node in this subtree.
    pub(crate) fn max(&self) -> &K {
        let mut n = self;
        while let Some(v) = n.right() {
            n = v;
        }
        &n.key
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Link<K> {
        self.left.take()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Link<K> {
        self.right.take()
    }

    pub(crate) fn into_key(self) -> K {
        self.key
    }
}

pub(crate) fn height<K>(n: Option<&Node<K>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

fn update_height<K>(n: &mut Node<K>) {
    n.height = 1 + height(n.left()).max(height(n.right()));
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
fn balance<K>(n: &Node<K>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// The demoted `x` has its height recomputed first, followed by `P`.
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<K>(x: &mut Box<Node<K>>) {
    let mut p = x.right.take().expect("left rotation requires a right child");
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// The demoted `y` has its height recomputed first, followed by `P`.
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<K>(y: &mut Box<Node<K>>) {
    let mut p = y.left.take().expect("right rotation requires a left child");
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);
}

/// Restore the AVL invariant for the subtree rooted at `n`.
///
/// Both children of `n` must already be valid AVL subtrees with correct
/// heights, and may differ in height by at most 2. Recomputes the height of
/// `n` and applies zero, one or two rotations, leaving the (possibly
/// different) subtree root in `n`.
pub(crate) fn rebalance<K>(n: &mut Box<Node<K>>) {
    update_height(n);

    match balance(n) {
        // Left-left
        (2..) if n.left().map(balance).unwrap_or_default() >= 0 => {
            rotate_right(n);
        }
        // Left-right
        (2..) => {
            if let Some(l) = n.left.as_mut() {
                rotate_left(l);
            }
            rotate_right(n);
        }
        // Right-right
        (..=-2) if n.right().map(balance).unwrap_or_default() <= 0 => {
            rotate_left(n);
        }
        // Right-left
        (..=-2) => {
            if let Some(r) = n.right.as_mut() {
                rotate_right(r);
            }
            rotate_left(n);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(balance(n).abs() <= 1);
}

/// Remove `key` from the subtree held in `slot`, returning it if it was
/// present.
///
/// Reaching an empty slot means the key is not in the tree, and nothing is
/// modified.
///
/// When the matching node has children, it is not unlinked. Instead the key
/// of its in-order successor (or predecessor, when there is no right subtree)
/// is moved into it and that successor node is unlinked from deeper in the
/// tree. Every node on the path between the two is rebalanced on the way
/// back up, as is every ancestor of the matching node.
pub(crate) fn remove_recurse<K>(slot: &mut Link<K>, key: &K) -> Option<K>
where
    K: Ord,
{
    let node = slot.as_mut()?;

    let removed = match key.cmp(&node.key) {
        Ordering::Less => remove_recurse(&mut node.left, key)?,
        Ordering::Greater => remove_recurse(&mut node.right, key)?,
        Ordering::Equal => match take_replacement_key(node) {
            Some(replacement) => {
                // Invariant: the replacement preserves the ordering of the
                // node's position.
                debug_assert!(node.left().map(|v| *v.max() < replacement).unwrap_or(true));
                debug_assert!(node.right().map(|v| *v.min() > replacement).unwrap_or(true));

                std::mem::replace(&mut node.key, replacement)
            }
            None => {
                // The node is a leaf, and is unlinked from the parent slot.
                debug_assert_eq!(node.height, 1);
                return slot.take().map(|v| v.into_key());
            }
        },
    };

    rebalance(node);
    Some(removed)
}

/// Unlink the in-order successor of `n` from its right subtree, or failing
/// that the in-order predecessor from its left subtree, and return its key.
///
/// Returns [`None`] if `n` is a leaf.
fn take_replacement_key<K>(n: &mut Node<K>) -> Option<K> {
    extract_subtree_min(&mut n.right)
        .or_else(|| extract_subtree_max(&mut n.left))
        .map(|v| v.into_key())
}

/// Unlinks and returns the node holding the minimum key of the subtree in
/// `slot`, if any, linking the right subtree of the extracted node in its
/// place.
///
/// Each node on the left edge above the extracted node is rebalanced, deepest
/// first.
fn extract_subtree_min<K>(slot: &mut Link<K>) -> Link<K> {
    let node = slot.as_mut()?;

    if node.left.is_none() {
        // This is the end of the left edge.
        //
        // ```text
        //                 6
        //                / \
        //    here ->   <4>   7
        //                \
        //                 5
        // ```
        //
        // Its right child (if any) replaces it.
        let right = node.right.take();
        return std::mem::replace(slot, right);
    }

    let v = extract_subtree_min(&mut node.left);
    rebalance(node);
    v
}

/// Unlinks and returns the node holding the maximum key of the subtree in
/// `slot`, if any, linking the left subtree of the extracted node in its
/// place.
fn extract_subtree_max<K>(slot: &mut Link<K>) -> Link<K> {
    let node = slot.as_mut()?;

    if node.right.is_none() {
        let left = node.left.take();
        return std::mem::replace(slot, left);
    }

    let v = extract_subtree_max(&mut node.right);
    rebalance(node);
    v
}
