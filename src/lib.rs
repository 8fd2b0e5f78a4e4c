//! A Binary Search Tree that is built balanced and rebalanced only on request.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! may have up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. Building from sorted values by always picking the
//! middle value as the root gives the smallest possible height, `floor(lg N)`.
//!
//! ## Balance on request
//!
//! [`Tree`] does not rotate or otherwise restructure itself as values come and go.
//! It is balanced right after [`Tree::create`] and right after [`Tree::rebalance`],
//! and whatever `insert` and `delete` make of it in between. [`Tree::is_balanced`]
//! says whether every node's subtrees differ in height by at most one.
//!
//! The [`display`] and [`random`] modules hold helpers for looking at trees and
//! generating sample input.

#![deny(missing_docs)]

pub mod display;
mod error;
pub mod random;
mod traversal;
pub mod tree;

pub use error::Error;
pub use traversal::Traversal;
pub use tree::{Node, Tree};
