//! [Red-black][1] tree
//!
//! [1]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
use core::{borrow::Borrow, fmt};

use crate::{
    bst::{BinarySearchTree, InsertError},
    iter::RangeIter,
    node::{Color, NodeId},
    view::{LevelOrder, NodeRef},
};


/// A sorted collection backed by a red-black tree.
///
/// The height of a tree containing `n` values never exceeds
/// `2 * log2(n + 1)`, whatever the insertion order.
///
/// Besides [`range`](Self::range), the tree remembers a pair of iterator
/// bounds, set by [`set_iterator_min`](Self::set_iterator_min) and
/// [`set_iterator_max`](Self::set_iterator_max), that [`iter`](Self::iter)
/// applies to every iterator it creates.
pub struct RedBlackTree<T> {
    tree: BinarySearchTree<T>,
    iterator_min: Option<T>,
    iterator_max: Option<T>,
}

impl<T> RedBlackTree<T> {
    pub const fn new() -> Self {
        Self {
            tree: BinarySearchTree::new(),
            iterator_min: None,
            iterator_max: None,
        }
    }

    /// Get the number of stored values, counting duplicates separately.
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Remove all values. The iterator bounds are kept.
    #[inline]
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    #[inline]
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.tree.root()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        self.tree.node(id)
    }

    #[inline]
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        self.tree.level_order()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Set the lower bound (inclusive) for iterators created by
    /// [`iter`](Self::iter) from now on. `None` removes the bound.
    #[inline]
    pub fn set_iterator_min(&mut self, min: impl Into<Option<T>>) {
        self.iterator_min = min.into();
    }

    /// Set the upper bound (inclusive) for iterators created by
    /// [`iter`](Self::iter) from now on. `None` removes the bound.
    #[inline]
    pub fn set_iterator_max(&mut self, max: impl Into<Option<T>>) {
        self.iterator_max = max.into();
    }

    #[inline]
    pub fn iterator_min(&self) -> Option<&T> {
        self.iterator_min.as_ref()
    }

    #[inline]
    pub fn iterator_max(&self) -> Option<&T> {
        self.iterator_max.as_ref()
    }
}

impl<T: Ord> RedBlackTree<T> {
    /// Insert a value. Fails with [`InsertError::NullValue`] if `value` is
    /// `None`, in which case the tree is left untouched.
    ///
    /// A value equal to an existing one is placed in the left subtree of the
    /// first equal node on the search path.
    pub fn insert(&mut self, value: impl Into<Option<T>>) -> Result<NodeId, InsertError> {
        let value = value.into().ok_or(InsertError::NullValue)?;
        Ok(self.insert_value(value))
    }

    fn insert_value(&mut self, value: T) -> NodeId {
        let new_node = self.tree.place(value, Color::Red);
        self.restore_color_invariant(new_node);
        new_node
    }

    /// Repair the tree after `node` was colored red. This is the only place
    /// where a red node may have a red parent.
    fn restore_color_invariant(&mut self, mut node: NodeId) {
        let tree = &mut self.tree;

        while let Some(mut parent) = tree.get(node).parent {
            debug_assert!(tree.get(node).is_red());

            // Color invariant fulfilled?
            if !tree.get(parent).is_red() {
                break;
            }

            // `parent` is red, so it's not the root
            let grandparent = tree
                .get(parent)
                .parent
                .expect("red node has no parent");
            debug_assert!(!tree.get(grandparent).is_red());

            let parent_side = tree.side(grandparent, parent);
            let uncle = tree.get(grandparent).children[(!parent_side) as usize];

            if let Some(uncle) = uncle.filter(|&uncle| tree.get(uncle).is_red()) {
                // Both `parent` and `uncle` are red. Repaint them to black
                // and `grandparent` to red. The black height is unchanged.
                log::trace!("recoloring below {:?}", grandparent);
                tree.get_mut(parent).color = Color::Black;
                tree.get_mut(uncle).color = Color::Black;
                tree.get_mut(grandparent).color = Color::Red;

                // `grandparent` might now have a red parent
                node = grandparent;
                continue;
            }

            // `uncle` is black (nil counts as black). If `node` is an inner
            // grandchild, turn it into an outer one first.
            let node_side = tree.side(parent, node);
            if node_side != parent_side {
                log::trace!("straightening {:?} under {:?}", node, parent);
                tree.promote(node, node_side);
                core::mem::swap(&mut node, &mut parent);
            }

            // Push `grandparent` to `uncle`'s side, making `parent` the
            // parent of `node` and `grandparent`. Repaint so that the black
            // height through `parent` is what it was through `grandparent`.
            log::trace!("lifting {:?} above {:?}", parent, grandparent);
            tree.promote(parent, parent_side);
            tree.get_mut(parent).color = Color::Black;
            tree.get_mut(grandparent).color = Color::Red;
            break;
        }

        // The recoloring might have reached the root
        if let Some(root) = tree.root {
            tree.get_mut(root).color = Color::Black;
        }
    }

    #[inline]
    pub fn contains<Q>(&self, query: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains(query)
    }

    #[inline]
    pub fn find<Q>(&self, query: &Q) -> Option<NodeId>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.find(query)
    }

    /// Iterate over the values in `[min, max]` in ascending order, ignoring
    /// the configured iterator bounds.
    #[inline]
    pub fn range<'a>(&'a self, min: Option<&'a T>, max: Option<&'a T>) -> RangeIter<'a, T> {
        self.tree.range(min, max)
    }

    /// Iterate over the values within the configured iterator bounds in
    /// ascending order.
    #[inline]
    pub fn iter(&self) -> RangeIter<'_, T> {
        self.range(self.iterator_min.as_ref(), self.iterator_max.as_ref())
    }
}

impl<T> Default for RedBlackTree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for RedBlackTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for RedBlackTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_value(value);
        }
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for RedBlackTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.range(None, None)).finish()
    }
}
