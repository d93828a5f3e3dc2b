//! This crate exposes a Binary Search Tree (BST) of unique elements that
//! rebalances on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)`, where `height` is the longest path
//! from the root `Node` to a leaf `Node`. The [`Tree`] here never rotates on
//! insert, so inserting values in sorted order degrades it into a chain.
//! Instead it can be rebalanced on request: its elements are moved out in
//! sorted order (visiting the left subtree, then the subtree root, then the
//! right subtree) and a tree of minimal height is built back by making the
//! middle element of every range the root of that range's subtree.
//!
//! # Examples
//!
//! ```
//! use bintree::Tree;
//!
//! let mut tree: Tree<_> = (1..=15).collect();
//! assert_eq!(tree.height(&15), 15);
//!
//! let sorted = tree.flatten_to_vec();
//! assert!(tree.is_empty());
//!
//! tree.rebuild_from_sorted(sorted).unwrap();
//! assert_eq!(tree.height(&8), 1);
//! assert_eq!(tree.height(&15), 4);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod display;
mod error;
mod rebuild;
mod traverse;
mod tree;

#[cfg(test)]
mod test;

pub use display::{DisplaySideways, SidewaysFormat};
pub use error::{DuplicateError, RebuildError};
pub use traverse::Sideways;
pub use tree::Tree;
