//! Lazy traversals over a [`Tree`][crate::Tree]. Both keep an explicit stack instead of
//! recursing, so walking a degenerate (list shaped) tree can't overflow the call stack.

use std::iter::FusedIterator;

use crate::tree::Node;

/// Yields a tree's elements in ascending order: left subtree, node, right subtree.
///
/// Created by [`Tree::in_order`][crate::Tree::in_order].
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree has been visited but whose own element hasn't.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Clone for InOrder<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.element())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for InOrder<'a, T> {}

impl<'a, T> FusedIterator for InOrder<'a, T> {}

/// Yields every node of a tree exactly once: a node, then its right subtree, then its left
/// subtree.
///
/// Created by [`Tree::pre_order`][crate::Tree::pre_order].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Clone for PreOrder<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Pushed last so it's popped first.
        self.stack.extend(node.left());
        self.stack.extend(node.right());
        Some(node)
    }
}

impl<'a, T> FusedIterator for PreOrder<'a, T> {}
