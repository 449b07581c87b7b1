//! Read-only access to the tree structure
//!
//! This is what an external renderer walks to draw a tree: every node exposes
//! its value, its color, and its children.
use alloc::collections::VecDeque;
use core::fmt;

use crate::node::{Color, Node, NodeId};

/// A read-only view of a node.
pub struct NodeRef<'a, T> {
    nodes: &'a [Node<T>],
    id: NodeId,
}

impl<T> Clone for NodeRef<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    #[inline]
    pub(crate) fn new(nodes: &'a [Node<T>], id: NodeId) -> Self {
        Self { nodes, id }
    }

    #[inline]
    fn node(&self) -> &'a Node<T> {
        &self.nodes[self.id.0]
    }

    #[inline]
    fn link(&self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| Self::new(self.nodes, id))
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.node().color
    }

    #[inline]
    pub fn left(&self) -> Option<Self> {
        self.link(self.node().children[0])
    }

    #[inline]
    pub fn right(&self) -> Option<Self> {
        self.link(self.node().children[1])
    }

    #[inline]
    pub fn parent(&self) -> Option<Self> {
        self.link(self.node().parent)
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", self.value())
            .field("color", &self.color())
            .finish()
    }
}

/// Formats as `value(b)` or `value(r)`.
impl<T: fmt::Display> fmt::Display for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.value(), self.color().letter())
    }
}

/// Visits nodes breadth-first. Created by `level_order` on the trees.
pub struct LevelOrder<'a, T> {
    nodes: &'a [Node<T>],
    queue: VecDeque<NodeId>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(nodes: &'a [Node<T>], root: Option<NodeId>) -> Self {
        Self {
            nodes,
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        self.queue
            .extend(self.nodes[id.0].children.iter().flatten().copied());
        Some(NodeRef::new(self.nodes, id))
    }
}
