//! Unbalanced binary search tree
use alloc::vec::Vec;
use core::{borrow::Borrow, cmp::Ordering, fmt};

use crate::{
    iter::RangeIter,
    node::{Color, IsRightChild, Node, NodeId},
    view::{LevelOrder, NodeRef},
};

/// A binary search tree without any balancing.
///
/// This is the engine [`RedBlackTree`] is built on. Used on its own, its
/// height is whatever the insertion order makes it, so a monotonic sequence of
/// `n` insertions produces a list of height `n`. All operations walk the tree
/// with loops, never recursion, so this doesn't exhaust the call stack.
///
/// Nodes of this tree are always [`Color::Black`].
///
/// [`RedBlackTree`]: crate::RedBlackTree
pub struct BinarySearchTree<T> {
    pub(crate) nodes: Vec<Node<T>>,
    pub(crate) root: Option<NodeId>,
}

/// Indicates a failure of an insertion.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum InsertError {
    /// No value was given.
    #[cfg_attr(feature = "std", error("cannot insert an absent value"))]
    NullValue,
}

impl<T> BinarySearchTree<T> {
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Get the number of stored values, counting duplicates separately.
    #[inline]
    pub fn len(&self) -> usize {
        // Nodes are only ever removed all at once, so every stored node is
        // reachable from `root`.
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all values. All previously returned [`NodeId`]s are
    /// invalidated.
    pub fn clear(&mut self) {
        log::debug!("clearing {} node(s)", self.nodes.len());
        self.nodes.clear();
        self.root = None;
    }

    /// Get a view of the root node.
    #[inline]
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|id| NodeRef::new(&self.nodes, id))
    }

    /// Get a view of the node identified by `id`.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        self.resolve(Some(id)).map(|id| NodeRef::new(&self.nodes, id))
    }

    /// Visit the nodes breadth-first, starting from the root.
    #[inline]
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(&self.nodes, self.root)
    }

    /// Get the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            for &child in self.get(id).children.iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    /// Discard `id` if it doesn't name a node of this tree.
    #[inline]
    pub(crate) fn resolve(&self, id: Option<NodeId>) -> Option<NodeId> {
        id.filter(|id| id.0 < self.nodes.len())
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.0]
    }

    /// Which side of `parent` holds `child`. `child` must be a child of
    /// `parent`.
    #[inline]
    pub(crate) fn side(&self, parent: NodeId, child: NodeId) -> IsRightChild {
        self.get(parent)
            .side_of(child)
            .expect("node is not a child of its parent")
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Insert a value. Fails with [`InsertError::NullValue`] if `value` is
    /// `None`, in which case the tree is left untouched.
    ///
    /// A value equal to an existing one is placed in the left subtree of the
    /// first equal node on the search path.
    pub fn insert(&mut self, value: impl Into<Option<T>>) -> Result<NodeId, InsertError> {
        let value = value.into().ok_or(InsertError::NullValue)?;
        Ok(self.place(value, Color::Black))
    }

    /// Attach a new leaf holding `value` at the first vacant slot on its
    /// search path.
    pub(crate) fn place(&mut self, value: T, color: Color) -> NodeId {
        let new_id = NodeId(self.nodes.len());
        let mut new_node = Node::new(value, color);

        let mut slot: Option<(NodeId, IsRightChild)> = None;
        let mut cursor = self.root;
        while let Some(current) = cursor {
            // Equal values go left
            let side = new_node.value > self.get(current).value;
            slot = Some((current, side));
            cursor = self.get(current).children[side as usize];
        }

        new_node.parent = slot.map(|(parent, _)| parent);
        self.nodes.push(new_node);

        if let Some((parent, side)) = slot {
            self.get_mut(parent).children[side as usize] = Some(new_id);
        } else {
            self.root = Some(new_id);
        }

        new_id
    }

    /// Check if the tree contains a value equal to `query`.
    #[inline]
    pub fn contains<Q>(&self, query: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(query).is_some()
    }

    /// Find the first node on the search path whose value is equal to
    /// `query`.
    pub fn find<Q>(&self, query: &Q) -> Option<NodeId>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = self.get(id);
            match query.cmp(node.value.borrow()) {
                Ordering::Equal => return Some(id),
                Ordering::Less => cursor = node.children[0],
                Ordering::Greater => cursor = node.children[1],
            }
        }
        None
    }

    /// Iterate over the values in `[min, max]` in ascending order. A `None`
    /// bound leaves that side open. If `min > max`, nothing is produced.
    #[inline]
    pub fn range<'a>(&'a self, min: Option<&'a T>, max: Option<&'a T>) -> RangeIter<'a, T> {
        RangeIter::new(&self.nodes, self.root, min, max)
    }

    /// Iterate over all values in ascending order.
    #[inline]
    pub fn iter(&self) -> RangeIter<'_, T> {
        self.range(None, None)
    }
}

impl<T> Default for BinarySearchTree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.place(value, Color::Black);
        }
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::{collections::HashSet, fmt::Write, format, prelude::v1::*};

    impl<T: fmt::Debug> BinarySearchTree<T> {
        pub(crate) fn dump(
            &self,
            id: Option<NodeId>,
            level: usize,
            out: &mut impl Write,
        ) -> fmt::Result {
            for _ in 0..level {
                write!(out, "  ")?;
            }
            if let Some(id) = id {
                let node = self.get(id);
                writeln!(out, "{:?} {:?} {:?}", id, node.value, node.color)?;
                for &child in node.children.iter() {
                    self.dump(child, level + 1, out)?;
                }
            } else {
                writeln!(out, "nil")?;
            }
            Ok(())
        }
    }

    impl<T: Ord + fmt::Debug> BinarySearchTree<T> {
        /// Check the structural invariants. Color rules are only checked if
        /// `check_colors` is set.
        pub(crate) fn validate(&self, check_colors: bool) {
            let mut visited = HashSet::new();
            let mut in_order = Vec::new();
            let mut black_height = None;

            if let Some(root) = self.root {
                assert_eq!(self.get(root).parent, None, "the root has a parent");
                if check_colors {
                    assert_eq!(self.get(root).color, Color::Black, "the root is red");
                }
                self.validate_node(
                    root,
                    0,
                    check_colors,
                    &mut visited,
                    &mut in_order,
                    &mut black_height,
                );
            }

            assert_eq!(
                visited.len(),
                self.len(),
                "some nodes are unreachable from the root"
            );

            for pair in in_order.windows(2) {
                assert!(
                    pair[0] <= pair[1],
                    "in-order sequence is not sorted: {:?} > {:?}",
                    pair[0],
                    pair[1]
                );
            }
        }

        fn validate_node<'a>(
            &'a self,
            id: NodeId,
            blacks_above: usize,
            check_colors: bool,
            visited: &mut HashSet<NodeId>,
            in_order: &mut Vec<&'a T>,
            black_height: &mut Option<usize>,
        ) {
            // The tree must not be circular
            assert!(visited.insert(id), "node {:?} is visited twice", id);

            let node = self.get(id);
            let blacks = blacks_above + (node.color == Color::Black) as usize;

            for (side, &child) in node.children.iter().enumerate() {
                if let Some(child) = child {
                    let child_node = self.get(child);
                    assert_eq!(
                        child_node.parent,
                        Some(id),
                        "{:?} is a child of {:?} but points elsewhere",
                        child,
                        id
                    );
                    if check_colors && node.is_red() {
                        assert!(!child_node.is_red(), "a red node must not have a red child");
                    }
                    self.validate_node(
                        child,
                        blacks,
                        check_colors,
                        visited,
                        in_order,
                        black_height,
                    );
                } else if check_colors {
                    if let Some(expected) = *black_height {
                        assert_eq!(blacks, expected, "black height mismatch at {:?}", id);
                    } else {
                        *black_height = Some(blacks);
                    }
                }

                if side == 0 {
                    in_order.push(&node.value);
                }
            }
        }

        pub(crate) fn level_order_values(&self) -> Vec<&T> {
            self.level_order().map(|node| node.value()).collect()
        }
    }

    #[test]
    fn integers() {
        let mut tree = BinarySearchTree::<i32>::new();
        for value in [21, 14, 28, 18, 11, 32, 25] {
            tree.insert(value).unwrap();
        }
        tree.validate(false);

        assert_eq!(tree.level_order_values(), [&21, &14, &28, &11, &18, &25, &32]);
        assert_eq!(
            tree.iter().copied().collect::<Vec<_>>(),
            [11, 14, 18, 21, 25, 28, 32]
        );
    }

    #[test]
    fn titles() {
        let mut tree = BinarySearchTree::<&str>::new();
        for title in [
            "A Thousand Splendid Suns",
            "Babel",
            "No Country for Old Men",
            "The Picture of Dorian Gray",
            "American Psycho",
            "Where the Wild Things Are",
            "Pride and Prejudice",
        ] {
            tree.insert(title).unwrap();
        }
        tree.validate(false);

        for title in [
            "A Thousand Splendid Suns",
            "Babel",
            "No Country for Old Men",
            "Pride and Prejudice",
            "The Picture of Dorian Gray",
        ] {
            assert!(tree.contains(title), "{:?} is missing", title);
        }
        assert!(!tree.contains("Dune"));
        assert_eq!(tree.len(), 7);

        assert_eq!(
            tree.level_order_values(),
            [
                &"A Thousand Splendid Suns",
                &"Babel",
                &"American Psycho",
                &"No Country for Old Men",
                &"The Picture of Dorian Gray",
                &"Pride and Prejudice",
                &"Where the Wild Things Are",
            ]
        );

        tree.clear();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert!(!tree.contains("Babel"));
    }

    #[test]
    fn len_and_clear() {
        let mut tree: BinarySearchTree<i32> = [6, 10, 49, 16, 18].into_iter().collect();
        assert_eq!(tree.len(), 5);
        assert!(!tree.is_empty());

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);

        // The tree is usable after clearing
        tree.insert(3).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.contains(&3));
        tree.validate(false);
    }

    #[test]
    fn null_value() {
        let mut tree: BinarySearchTree<i32> = [1, 2].into_iter().collect();
        assert_eq!(tree.insert(None), Err(InsertError::NullValue));
        assert_eq!(tree.len(), 2);
        tree.validate(false);
    }

    #[test]
    fn duplicates_go_left() {
        let mut tree = BinarySearchTree::<i32>::new();
        let first = tree.insert(5).unwrap();
        let second = tree.insert(5).unwrap();
        let third = tree.insert(5).unwrap();
        tree.validate(false);

        assert_eq!(tree.root().unwrap().id(), first);
        assert_eq!(tree.node(first).unwrap().left().unwrap().id(), second);
        assert_eq!(tree.node(second).unwrap().left().unwrap().id(), third);
        assert!(tree.node(first).unwrap().right().is_none());

        assert_eq!(tree.find(&5), Some(first));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.iter().count(), 3);
    }

    #[test]
    fn all_black() {
        let tree: BinarySearchTree<i32> = [3, 1, 2, 5, 4].into_iter().collect();
        assert!(tree.level_order().all(|node| node.color() == Color::Black));
    }

    #[test]
    fn monotonic_does_not_recurse() {
        const LEN: i32 = 10_000;
        let tree: BinarySearchTree<i32> = (0..LEN).collect();

        assert_eq!(tree.len(), LEN as usize);
        assert_eq!(tree.height(), LEN as usize);
        assert!(tree.contains(&(LEN - 1)));
        assert!(!tree.contains(&LEN));
        assert!(tree.iter().copied().eq(0..LEN));
        assert!(tree.range(Some(&(LEN - 3)), None).copied().eq(LEN - 3..LEN));
    }

    #[test]
    fn debug_format() {
        let tree: BinarySearchTree<i32> = [2, 3, 1].into_iter().collect();
        assert_eq!(format!("{:?}", tree), "{1, 2, 3}");

        let mut st = String::new();
        tree.dump(tree.root, 0, &mut st).unwrap();
        assert!(st.starts_with("NodeId(0) 2 Black\n"), "{}", st);
    }

    #[test]
    fn stale_handles() {
        let mut tree = BinarySearchTree::<i32>::new();
        let id = tree.insert(1).unwrap();
        assert!(tree.node(id).is_some());

        tree.clear();
        assert!(tree.node(id).is_none());
    }
}
