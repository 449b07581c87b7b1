//! Arena-allocated tree nodes
//!
//! A tree owns all of its nodes in a `Vec`. Links between nodes are
//! [`NodeId`]s, i.e., indices into that `Vec`, so the parent link is a plain
//! back-reference and never keeps anything alive.

/// A handle to a node of a [`BinarySearchTree`] or [`RedBlackTree`].
///
/// Handles are returned by `insert` and stay valid until the tree is cleared.
/// A handle that doesn't resolve to a node of the tree it's used with is
/// treated as an absent node.
///
/// [`BinarySearchTree`]: crate::BinarySearchTree
/// [`RedBlackTree`]: crate::RedBlackTree
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// The color of a node. Absent children count as [`Color::Black`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
}

impl Color {
    /// The letter used by the level-order notation (`18(b)`, `5(r)`).
    #[inline]
    pub(crate) fn letter(self) -> char {
        match self {
            Color::Black => 'b',
            Color::Red => 'r',
        }
    }
}

pub(crate) type IsRightChild = bool;

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) children: [Option<NodeId>; 2],
    pub(crate) parent: Option<NodeId>,
    pub(crate) color: Color,
    pub(crate) value: T,
}

impl<T> Node<T> {
    pub(crate) const fn new(value: T, color: Color) -> Self {
        Self {
            children: [None, None],
            parent: None,
            color,
            value,
        }
    }

    /// Which side of `self` holds `child`, if any.
    #[inline]
    pub(crate) fn side_of(&self, child: NodeId) -> Option<IsRightChild> {
        if self.children[0] == Some(child) {
            Some(false)
        } else if self.children[1] == Some(child) {
            Some(true)
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}
