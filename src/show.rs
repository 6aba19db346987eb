use std::fmt::{self, Display};

use crate::node::Node;

/// A [`Display`] adapter rendering the structure of an
/// [`AvlTree`](crate::AvlTree).
///
/// Each node is written on its own line, in pre-order, as its key followed by
/// the keys of its left and right children (or `None` when absent):
///
/// ```text
/// 20->10, 30
/// 10->None, None
/// 30->None, None
/// ```
///
/// An empty tree renders as an empty string.
///
/// This `struct` is created by [`AvlTree::show()`](crate::AvlTree::show).
#[derive(Debug, Clone, Copy)]
pub struct Show<'a, K> {
    root: Option<&'a Node<K>>,
}

impl<'a, K> Show<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self { root }
    }
}

impl<K> Display for Show<'_, K>
where
    K: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Perform a pre-order traversal of the tree, visiting the left child
        // before the right.
        let mut stack: Vec<&Node<K>> = self.root.into_iter().collect();
        while let Some(n) = stack.pop() {
            writeln!(
                f,
                "{}->{}, {}",
                n.key(),
                OrNone(n.left().map(Node::key)),
                OrNone(n.right().map(Node::key)),
            )?;

            stack.extend(n.right().into_iter().chain(n.left()));
        }

        Ok(())
    }
}

/// Renders the inner value, or `None` if absent.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OrNone<T>(pub(crate) Option<T>);

impl<T> Display for OrNone<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(v) => v.fmt(f),
            None => f.write_str("None"),
        }
    }
}
