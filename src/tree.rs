use crate::{
    iter::{IntoIter, Iter},
    node::{height, remove_recurse, Node},
    show::Show,
};

/// An ordered set of keys, stored in a height-balanced (AVL) binary search
/// tree.
///
/// Insertion, removal and lookup are `O(log n)`: after every mutation, the
/// heights of the left and right subtrees of every node differ by at most 1.
///
/// The tree holds only its (optional) root node. There is no cached element
/// count; [`AvlTree::len()`] walks the tree.
///
/// # Examples
///
/// ```
/// use avltree::AvlTree;
///
/// let mut t = AvlTree::new();
///
/// assert!(t.insert(10));
/// assert!(t.insert(20));
/// assert!(t.insert(30));
///
/// // Duplicate keys are ignored.
/// assert!(!t.insert(20));
///
/// assert_eq!(t.traverse(), [&10, &20, &30]);
/// assert_eq!(t.min(), Some(&10));
/// assert_eq!(t.max(), Some(&30));
///
/// assert_eq!(t.remove(&20), Some(20));
/// assert!(!t.contains(&20));
/// ```
#[derive(Debug, Clone)]
pub struct AvlTree<K>(Option<Box<Node<K>>>);

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<K> AvlTree<K> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the tree contains no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Count the keys in the tree.
    ///
    /// This is an `O(n)` walk of the tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns the height of the tree, which is 0 when empty and 1 for a tree
    /// of a single key.
    pub fn height(&self) -> u8 {
        height(self.0.as_deref())
    }

    /// Remove all keys from the tree.
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Returns the smallest key in the tree, or [`None`] if empty.
    pub fn min(&self) -> Option<&K> {
        self.0.as_deref().map(Node::min)
    }

    /// Returns the largest key in the tree, or [`None`] if empty.
    pub fn max(&self) -> Option<&K> {
        self.0.as_deref().map(Node::max)
    }

    /// Return an in-order [`Iterator`] over the keys in the tree, in ascending
    /// order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.0.as_deref())
    }

    /// Collect the keys in the tree, in ascending order.
    pub fn traverse(&self) -> Vec<&K> {
        self.iter().collect()
    }

    /// Return a [`Display`](std::fmt::Display) adapter that renders each node
    /// and its children, one per line, in pre-order.
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let t = [10, 20, 30].into_iter().collect::<AvlTree<_>>();
    ///
    /// assert_eq!(
    ///     t.show().to_string(),
    ///     "20->10, 30\n10->None, None\n30->None, None\n",
    /// );
    /// ```
    pub fn show(&self) -> Show<'_, K> {
        Show::new(self.0.as_deref())
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> Option<&Node<K>> {
        self.0.as_deref()
    }
}

impl<K> AvlTree<K>
where
    K: Ord,
{
    /// Insert `key` into the tree.
    ///
    /// Returns true if the key was not already present. Inserting a key that
    /// is already in the tree is a no-op, and `key` is dropped.
    pub fn insert(&mut self, key: K) -> bool {
        match self.0 {
            Some(ref mut v) => v.insert(key),
            None => {
                self.0 = Some(Box::new(Node::new(key)));
                true
            }
        }
    }

    /// Remove `key` from the tree, returning the stored key if it was present.
    ///
    /// Removing a key that is not in the tree is a no-op.
    pub fn remove(&mut self, key: &K) -> Option<K> {
        remove_recurse(&mut self.0, key)
    }

    /// Returns a reference to the stored key equal to `key`, if any.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.0.as_ref().and_then(|v| v.get(key))
    }

    /// Returns true if `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<K> FromIterator<K> for AvlTree<K>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<K> Extend<K> for AvlTree<K>
where
    K: Ord,
{
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> IntoIterator for AvlTree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.0)
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
