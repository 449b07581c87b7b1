#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

mod bst;
mod collection;
mod iter;
mod node;
mod rbtree;
mod rotate;
mod view;

pub use self::{
    bst::{BinarySearchTree, InsertError},
    collection::{IterableSortedCollection, SortedCollection},
    iter::{Exhausted, RangeIter},
    node::{Color, NodeId},
    rbtree::RedBlackTree,
    rotate::RotateError,
    view::{LevelOrder, NodeRef},
};
