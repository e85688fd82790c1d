//! A mutable, unbalanced BST. Every node is exclusively owned by its parent's child slot (or by
//! the tree, for the root) so no node is ever reachable from two places.
//!
//! # Examples
//!
//! ```
//! use plain_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(&1).is_none());
//!
//! // Inserting hands back the new node.
//! assert_eq!(tree.insert(1).element(), &1);
//! assert_eq!(tree.search(&1).map(|n| *n.element()), Some(1));
//!
//! // Equal elements are kept, not overwritten.
//! tree.insert(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Deleting removes exactly one of them and hands it back.
//! assert_eq!(tree.delete(&1), Ok(1));
//! assert_eq!(tree.in_order().collect::<Vec<_>>(), [&1]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::comparator::{Comparator, NaturalOrder};
use crate::error::{Result, TreeError};
use crate::iter::{InOrder, PreOrder};
use crate::util::Side;

/// An owned, possibly empty, child slot.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Where elements that compare [`Equal`][Ordering::Equal] to an existing element are placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TieBreak {
    /// Equal elements descend into the left subtree. Only `Greater` goes right.
    #[default]
    Left,
    /// Equal elements descend into the right subtree. Only `Less` goes left.
    Right,
}

/// A Binary Search Tree ordered by the comparator `C`. This can be used for inserting,
/// searching, and deleting elements. It never rebalances itself.
pub struct Tree<T, C = NaturalOrder> {
    root: Link<T>,
    comparator: C,
    tie_break: TieBreak,
    len: usize,
}

/// A `Node` holds one element and up to two children.
pub struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new(element: T) -> Self {
        Self {
            element,
            left: None,
            right: None,
        }
    }

    /// The element stored in this node.
    pub fn element(&self) -> &T {
        &self.element
    }

    /// The root of this node's left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("element", &self.element)
            .field("left", &self.left().map(Node::element))
            .field("right", &self.right().map(Node::element))
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` ordered by the elements' [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> Default for Tree<T, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> Drop for Tree<T, C> {
    fn drop(&mut self) {
        dismantle(self.root.take());
    }
}

impl<T, C> Clone for Tree<T, C>
where
    T: Clone,
    C: Clone,
{
    /// Copies the tree node for node so the clone has the same shape as the original.
    fn clone(&self) -> Self {
        let mut root = None;
        {
            let mut pending: Vec<(&Node<T>, &mut Link<T>)> = Vec::new();
            if let Some(node) = self.root() {
                pending.push((node, &mut root));
            }

            while let Some((source, slot)) = pending.pop() {
                let copy = slot.insert(Box::new(Node::new(source.element.clone())));
                let Node { left, right, .. } = &mut **copy;
                if let Some(source_left) = source.left() {
                    pending.push((source_left, left));
                }
                if let Some(source_right) = source.right() {
                    pending.push((source_right, right));
                }
            }
        }

        Self {
            root,
            comparator: self.comparator.clone(),
            tie_break: self.tie_break,
            len: self.len,
        }
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.in_order()).finish()
    }
}

impl<T, C> Tree<T, C> {
    /// Generates a new, empty `Tree` ordered by `comparator`. Equal elements go to the left.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// for x in [1, 3, 2] {
    ///     tree.insert(x);
    /// }
    ///
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_tie_break(comparator, TieBreak::default())
    }

    /// Generates a new, empty `Tree` ordered by `comparator` that places equal elements on the
    /// given side.
    pub fn with_tie_break(comparator: C, tie_break: TieBreak) -> Self {
        Self {
            root: None,
            comparator,
            tie_break,
            len: 0,
        }
    }

    /// The comparator this tree was built with.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// The side equal elements are placed on.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of levels in the tree. An empty tree has a height of 0 and a tree with a
    /// single node has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(&Node<T>, usize)> =
            self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left().map(|n| (n, depth + 1)));
            pending.extend(node.right().map(|n| (n, depth + 1)));
        }

        height
    }

    /// The first element in order, if any.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.element)
    }

    /// The last element in order, if any.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.element)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        dismantle(self.root.take());
        self.len = 0;
    }

    /// Visits the elements in ascending order (left subtree, node, right subtree). The
    /// iterator is lazy and uses a stack of at most `height` nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [5, 3, 8, 1, 4, 7, 9] {
    ///     tree.insert(x);
    /// }
    ///
    /// assert_eq!(
    ///     tree.in_order().copied().collect::<Vec<_>>(),
    ///     [1, 3, 4, 5, 7, 8, 9]
    /// );
    /// ```
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root(), self.len)
    }

    /// Visits every node once: a node, then its right subtree, then its left subtree.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root())
    }
}

impl<T, C> Tree<T, C>
where
    C: Comparator<T>,
{
    /// Inserts `element` and returns the node now holding it. Elements that compare greater
    /// than a node go to its right, elements that compare less go to its left and equal elements
    /// go wherever the [`TieBreak`] says. Inserting never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    ///
    /// let node = tree.insert(1);
    /// assert_eq!(node.element(), &1);
    /// assert!(node.is_leaf());
    /// ```
    pub fn insert(&mut self, element: T) -> &Node<T> {
        let Self {
            root,
            comparator,
            tie_break,
            len,
        } = self;

        let mut depth = 0;
        let mut slot = root;
        while let Some(node) = slot {
            let side = Side::of(comparator.compare(&element, &node.element), *tie_break);
            slot = node.child_mut(side);
            depth += 1;
        }

        *len += 1;
        trace!("linked new node at depth {}", depth);
        &**slot.insert(Box::new(Node::new(element)))
    }

    /// Finds the node holding an element equal to `element`. When several are equal, the one
    /// closest to the root is returned. Nothing is modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1).map(|n| *n.element()), Some(1));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, element: &T) -> Option<&Node<T>> {
        let mut current = self.root();
        while let Some(node) = current {
            match self.comparator.compare(element, &node.element) {
                Ordering::Equal => return Some(node),
                ordering => current = node.child(Side::of(ordering, self.tie_break)),
            }
        }

        None
    }

    /// Whether an element equal to `element` is in the tree.
    pub fn contains(&self, element: &T) -> bool {
        self.search(element).is_some()
    }

    /// Finds the parent of the node [`search`][Self::search] would return for `element`. The
    /// root has no parent so `None` is returned both for the root's element and for elements
    /// that aren't in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [5, 3, 8] {
    ///     tree.insert(x);
    /// }
    ///
    /// assert_eq!(tree.parent(&8).map(|n| *n.element()), Some(5));
    /// assert!(tree.parent(&5).is_none());
    /// assert!(tree.parent(&42).is_none());
    /// ```
    pub fn parent(&self, element: &T) -> Option<&Node<T>> {
        let mut parent = None;
        let mut current = self.root();
        while let Some(node) = current {
            match self.comparator.compare(element, &node.element) {
                Ordering::Equal => return parent,
                ordering => {
                    parent = Some(node);
                    current = node.child(Side::of(ordering, self.tie_break));
                }
            }
        }

        None
    }

    /// Deletes one element equal to `element` and returns it. If the tree has no such element,
    /// [`TreeError::NotFound`] is returned and the tree is left untouched.
    ///
    /// A node with no children is simply unlinked and a node with one child is replaced by that
    /// child. A node with two children takes the element of its in-order successor (the smallest
    /// element of its right subtree) and the successor's node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.delete(&1), Ok(1));
    /// assert_eq!(tree.delete(&1), Err(TreeError::NotFound));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, element: &T) -> Result<T> {
        let Self {
            root,
            comparator,
            tie_break,
            len,
        } = self;

        // The slot may be the tree's own root slot, in which case the root is replaced directly.
        let slot = slot_of(root, element, &*comparator, *tie_break);
        let mut node = match slot.take() {
            Some(node) => node,
            None => {
                debug!("nothing to delete, element not in tree");
                return Err(TreeError::NotFound);
            }
        };

        let removed = match (node.left.take(), node.right.take()) {
            (None, None) => {
                trace!("unlinked leaf node");
                node.element
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!("spliced out node with one child");
                *slot = Some(child);
                node.element
            }
            (Some(left), Some(right)) => {
                node.left = Some(left);
                node.right = Some(right);
                let successor = take_leftmost(&mut node.right)
                    .expect("a non-empty subtree has a leftmost node");
                trace!("promoted in-order successor into node with two children");
                let removed = mem::replace(&mut node.element, successor);
                *slot = Some(node);
                removed
            }
        };

        *len -= 1;
        Ok(removed)
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// Returns the slot holding the first node on the search path that compares equal to `element`,
/// or the empty slot the search fell off at.
fn slot_of<'a, T, C>(
    mut slot: &'a mut Link<T>,
    element: &T,
    comparator: &C,
    tie_break: TieBreak,
) -> &'a mut Link<T>
where
    C: Comparator<T>,
{
    loop {
        let ordering = match slot.as_deref() {
            Some(node) => comparator.compare(element, &node.element),
            None => return slot,
        };
        if ordering == Ordering::Equal {
            return slot;
        }

        slot = slot
            .as_deref_mut()
            .expect("slot was just seen occupied")
            .child_mut(Side::of(ordering, tie_break));
    }
}

/// Unlinks the leftmost node of the subtree in `slot`, moving its right child (if any) into its
/// place, and returns its element.
fn take_leftmost<T>(mut slot: &mut Link<T>) -> Option<T> {
    while slot.as_deref()?.left.is_some() {
        slot = &mut slot.as_deref_mut()?.left;
    }

    let mut node = slot.take()?;
    *slot = node.right.take();
    Some(node.element)
}

/// Drops a subtree one node at a time so that deep trees don't overflow the stack.
fn dismantle<T>(link: Link<T>) {
    let mut pending: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}
