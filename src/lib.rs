//! A height-balanced (AVL) binary search tree, storing an ordered set of
//! keys.
//!
//! After every insertion or removal, each node on the modified path is
//! rebalanced by at most two rotations, keeping the heights of any two sibling
//! subtrees within 1 of each other. This bounds the height of a tree of `n`
//! keys to `~1.44 log2(n)`, giving `O(log n)` [`insert`], [`remove`] and
//! [`get`].
//!
//! ```
//! use avltree::AvlTree;
//!
//! let mut t = [5, 3, 8, 1, 4, 7, 9].into_iter().collect::<AvlTree<_>>();
//!
//! // Removing a node with two children moves its in-order successor into
//! // its place.
//! assert_eq!(t.remove(&3), Some(3));
//! assert_eq!(t.traverse(), [&1, &4, &5, &7, &8, &9]);
//!
//! // Removing an absent key is a no-op.
//! assert_eq!(t.remove(&6), None);
//! ```
//!
//! [`insert`]: AvlTree::insert
//! [`remove`]: AvlTree::remove
//! [`get`]: AvlTree::get

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::explicit_iter_loop,
    clippy::todo,
    clippy::use_self,
    missing_debug_implementations,
    missing_docs,
    unused_crate_dependencies
)]

pub mod command;
mod iter;
mod node;
mod show;
mod tree;

pub use iter::*;
pub use show::Show;
pub use tree::*;


// Used by the benchmarks.
#[cfg(test)]
use criterion as _;
#[cfg(test)]
use paste as _;
