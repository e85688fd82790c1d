//! A plain, unbalanced Binary Search Tree (BST) whose ordering is supplied
//! by the caller.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, search, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element
//! and has up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree hold an
//!    element that precedes its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree hold an
//!    element that follows its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Elements that compare equal have to go _somewhere_. Which side they go to is
//! chosen by [`TieBreak`] when the tree is built.
//!
//! This tree never rebalances. Searching takes `O(height)` and inserting
//! elements in sorted order produces a tree whose height is its length. Every
//! operation walks the tree with a loop (or an explicit stack) rather than
//! recursion so even such degenerate trees can't overflow the call stack.
//!
//! ## Comparators
//!
//! The order is injected as a [`Comparator`]. [`NaturalOrder`] uses the
//! element's [`Ord`] implementation and any `Fn(&T, &T) -> Ordering` closure
//! works as well.
//!
//! # Examples
//!
//! ```
//! use plain_bst::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//! for x in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(x);
//! }
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
//!
//! // Deleting a node with two children promotes its in-order successor.
//! assert_eq!(tree.delete(&5), Ok(5));
//! assert_eq!(tree.root().map(|n| *n.element()), Some(7));
//!
//! // Deleting something that isn't there leaves the tree alone.
//! assert_eq!(tree.delete(&42), Err(TreeError::NotFound));
//! assert_eq!(tree.len(), 6);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod comparator;
pub mod error;
pub mod iter;
pub mod tree;
mod util;

pub use comparator::{Comparator, NaturalOrder};
pub use error::{Result, TreeError};
pub use iter::{InOrder, PreOrder};
pub use tree::{Node, TieBreak, Tree};
