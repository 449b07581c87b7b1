//! Tree rotation
use crate::{
    bst::BinarySearchTree,
    node::{IsRightChild, NodeId},
};

/// Indicates a failure of [`BinarySearchTree::rotate`]. The tree is left
/// untouched when this is returned.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum RotateError {
    /// The child or the parent is absent (or doesn't belong to the tree).
    #[cfg_attr(feature = "std", error("both a child and a parent node are required"))]
    NullReference,
    /// The child isn't a direct child of the parent.
    #[cfg_attr(feature = "std", error("the nodes are unrelated"))]
    UnrelatedNodes,
}

impl<T> BinarySearchTree<T> {
    /// Promote `child` above `parent`, preserving the in-order sequence.
    ///
    /// This is a right rotation if `child` is `parent`'s left child and a
    /// left rotation if it's `parent`'s right child. Colors are not changed.
    pub fn rotate(
        &mut self,
        child: Option<NodeId>,
        parent: Option<NodeId>,
    ) -> Result<(), RotateError> {
        let (child, parent) = match (self.resolve(child), self.resolve(parent)) {
            (Some(child), Some(parent)) => (child, parent),
            _ => return Err(RotateError::NullReference),
        };
        let side = self
            .get(parent)
            .side_of(child)
            .ok_or(RotateError::UnrelatedNodes)?;
        self.promote(child, side);
        Ok(())
    }

    /// Rotate `child` above its parent. `side` is `child`'s position under
    /// the parent before the rotation.
    pub(crate) fn promote(&mut self, child: NodeId, side: IsRightChild) {
        let outer = side as usize;
        let inner = (!side) as usize;

        //            parent           child
        //            /  \             /  \
        //           /    \           /    \
        //        child    y   ==>   x    parent
        //        /  \                     /  \
        //       x   mid                 mid   y
        //
        // (`side == false`; the other case is the mirror image)

        let parent = self
            .get(child)
            .parent
            .expect("promoted node has no parent");
        debug_assert_eq!(self.get(parent).children[outer], Some(child));
        log::trace!("rotating {:?} above {:?}", child, parent);

        let mid = self.get(child).children[inner];
        let grandparent = self.get(parent).parent;

        self.get_mut(parent).children[outer] = mid;
        if let Some(mid) = mid {
            self.get_mut(mid).parent = Some(parent);
        }

        self.get_mut(child).children[inner] = Some(parent);
        self.get_mut(parent).parent = Some(child);
        self.get_mut(child).parent = grandparent;

        // Update the subtree's parent's child pointer.
        let child_cell = if let Some(grandparent) = grandparent {
            let children = &mut self.get_mut(grandparent).children;
            if children[0] == Some(parent) {
                &mut children[0]
            } else {
                &mut children[1]
            }
        } else {
            &mut self.root
        };
        debug_assert_eq!(*child_cell, Some(parent));
        *child_cell = Some(child);
    }
}
