//! Sideways drawings of trees. The right subtree is drawn above its parent and the left
//! subtree below, so reading the output top to bottom gives values in descending order.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let tree = Tree::create([1, 2, 3]);
//!
//! assert_eq!(
//!     tree.to_string(),
//!     "\
//! │   ┌── 3
//! └── 2
//!     └── 1
//! "
//! );
//! ```

use std::fmt;
use std::io;

use crate::{Node, Tree};

/// Writes the subtree rooted at `node` to `out`, one value per line. Nothing is written for
/// an absent subtree.
pub fn render<T, W>(node: Option<&Node<T>>, out: &mut W) -> fmt::Result
where
    T: fmt::Display,
    W: fmt::Write,
{
    match node {
        Some(node) => render_node(node, "", true, out),
        None => Ok(()),
    }
}

/// Writes `tree` to `out`, for instance standard output.
pub fn print<T, W>(tree: &Tree<T>, mut out: W) -> io::Result<()>
where
    T: fmt::Display,
    W: io::Write,
{
    write!(out, "{}", tree)
}

/// `is_left` is whether `node` hangs off its parent's left side. The root counts as a left
/// child.
fn render_node<T, W>(node: &Node<T>, prefix: &str, is_left: bool, out: &mut W) -> fmt::Result
where
    T: fmt::Display,
    W: fmt::Write,
{
    if let Some(right) = node.right() {
        let extension = if is_left { "│   " } else { "    " };
        render_node(right, &format!("{}{}", prefix, extension), false, out)?;
    }
    let connector = if is_left { "└── " } else { "┌── " };
    writeln!(out, "{}{}{}", prefix, connector, node.data())?;
    if let Some(left) = node.left() {
        let extension = if is_left { "    " } else { "│   " };
        render_node(left, &format!("{}{}", prefix, extension), true, out)?;
    }
    Ok(())
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self.root(), f)
    }
}
