//! Traits shared by the tree types
use crate::{BinarySearchTree, InsertError, NodeId, RangeIter, RedBlackTree};

/// A mutable collection that keeps its values sorted and allows duplicates.
pub trait SortedCollection<T: Ord> {
    /// Insert a value. Fails with [`InsertError::NullValue`] if `value` is
    /// `None`.
    fn insert<V: Into<Option<T>>>(&mut self, value: V) -> Result<NodeId, InsertError>;

    fn contains(&self, value: &T) -> bool;

    /// Get the number of stored values, counting duplicates separately.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}

/// A [`SortedCollection`] that can be iterated within configurable bounds.
pub trait IterableSortedCollection<T: Ord>: SortedCollection<T> {
    /// Set the lower bound for iterators created after this call. `None`
    /// removes the bound.
    fn set_iterator_min<B: Into<Option<T>>>(&mut self, min: B);

    /// Set the upper bound for iterators created after this call. `None`
    /// removes the bound.
    fn set_iterator_max<B: Into<Option<T>>>(&mut self, max: B);

    fn iter(&self) -> RangeIter<'_, T>;
}

macro_rules! impl_sorted_collection {
    ($ty:ident) => {
        impl<T: Ord> SortedCollection<T> for $ty<T> {
            #[inline]
            fn insert<V: Into<Option<T>>>(&mut self, value: V) -> Result<NodeId, InsertError> {
                $ty::insert(self, value)
            }

            #[inline]
            fn contains(&self, value: &T) -> bool {
                $ty::contains(self, value)
            }

            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }

            #[inline]
            fn is_empty(&self) -> bool {
                $ty::is_empty(self)
            }

            #[inline]
            fn clear(&mut self) {
                $ty::clear(self)
            }
        }
    };
}

impl_sorted_collection!(BinarySearchTree);
impl_sorted_collection!(RedBlackTree);

impl<T: Ord> IterableSortedCollection<T> for RedBlackTree<T> {
    #[inline]
    fn set_iterator_min<B: Into<Option<T>>>(&mut self, min: B) {
        RedBlackTree::set_iterator_min(self, min)
    }

    #[inline]
    fn set_iterator_max<B: Into<Option<T>>>(&mut self, max: B) {
        RedBlackTree::set_iterator_max(self, max)
    }

    #[inline]
    fn iter(&self) -> RangeIter<'_, T> {
        RedBlackTree::iter(self)
    }
}
