//! Bounded in-order iteration
use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::node::{Node, NodeId};

/// An iterator over the values of a tree that lie in `[min, max]`, in
/// ascending order.
///
/// Created by `range` and `iter` on [`BinarySearchTree`] and
/// [`RedBlackTree`]. The iterator borrows the tree, so the tree can't be
/// mutated until the iterator is dropped.
///
/// [`BinarySearchTree`]: crate::BinarySearchTree
/// [`RedBlackTree`]: crate::RedBlackTree
pub struct RangeIter<'a, T> {
    nodes: &'a [Node<T>],
    /// Nodes yet to be visited. The top is the next candidate, and the
    /// values are non-increasing from the top to the bottom.
    stack: Vec<NodeId>,
    min: Option<&'a T>,
    max: Option<&'a T>,
}

/// Returned by [`RangeIter::try_next`] when there are no values left in the
/// range.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[cfg_attr(feature = "std", error("no more values to return"))]
pub struct Exhausted;

impl<'a, T: Ord> RangeIter<'a, T> {
    pub(crate) fn new(
        nodes: &'a [Node<T>],
        root: Option<NodeId>,
        min: Option<&'a T>,
        max: Option<&'a T>,
    ) -> Self {
        let mut this = Self {
            nodes,
            stack: Vec::new(),
            min,
            max,
        };
        this.push_subtree(root);
        this
    }

    /// Push the left spine of the subtree, skipping every node (and its left
    /// subtree) that falls below `min`.
    fn push_subtree(&mut self, mut cursor: Option<NodeId>) {
        let nodes = self.nodes;
        while let Some(id) = cursor {
            let node = &nodes[id.0];
            if self.min.map_or(false, |min| node.value < *min) {
                cursor = node.children[1];
            } else {
                self.stack.push(id);
                cursor = node.children[0];
            }
        }
    }

    /// Get the next value without advancing.
    pub fn peek(&mut self) -> Option<&'a T> {
        let nodes = self.nodes;
        while let Some(&top) = self.stack.last() {
            let value = &nodes[top.0].value;
            if self.max.map_or(true, |max| value <= max) {
                return Some(value);
            }
            // `top` and everything below it exceed `max`
            self.stack.pop();
        }
        None
    }

    #[inline]
    pub fn has_next(&mut self) -> bool {
        self.peek().is_some()
    }

    /// Like [`Iterator::next`], but reports the end of the range as an error.
    #[inline]
    pub fn try_next(&mut self) -> Result<&'a T, Exhausted> {
        self.next().ok_or(Exhausted)
    }
}

impl<'a, T: Ord> Iterator for RangeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.peek()?;
        let id = self.stack.pop()?;
        let nodes = self.nodes;
        let node = &nodes[id.0];
        self.push_subtree(node.children[1]);
        Some(&node.value)
    }
}

impl<T: Ord> FusedIterator for RangeIter<'_, T> {}
