//! The orders in which a [`Tree`][crate::Tree] can be walked.

use std::fmt;

/// A traversal order. Every order visits each node exactly once and keeps no
/// state between walks, so a tree can be walked any number of times.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Breadth first, top level to bottom level, left to right within a level.
    LevelOrder,
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree. Yields values in ascending order.
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
}

impl Traversal {
    /// All four orders, handy for checking that they agree on the set of values visited.
    pub const ALL: [Traversal; 4] = [
        Traversal::LevelOrder,
        Traversal::PreOrder,
        Traversal::InOrder,
        Traversal::PostOrder,
    ];
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LevelOrder => "level-order",
            Self::PreOrder => "pre-order",
            Self::InOrder => "in-order",
            Self::PostOrder => "post-order",
        };
        f.write_str(name)
    }
}
