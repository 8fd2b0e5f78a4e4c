//! A BST that is balanced when it is built and only ever rebalanced on request.
//! `insert` and `delete` never restructure the tree, so a run of skewed inserts can
//! degrade it towards a linked list. [`Tree::is_balanced`] reports when that has
//! happened and [`Tree::rebalance`] builds a fresh, minimal height tree from the
//! same values.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! // Input may be unsorted and contain duplicates.
//! let mut tree = Tree::create([3, 6, 8, 23, 48, 76, 89, 13, 66, 56, 3]);
//! assert_eq!(tree.len(), 10);
//! assert_eq!(tree.height(), 3);
//! assert!(tree.is_balanced());
//!
//! // Everything past 89 ends up hanging off the right edge.
//! for value in [159, 533, 654, 101] {
//!     tree.insert(value);
//! }
//! assert!(!tree.is_balanced());
//!
//! // Rebalancing consumes the old tree and returns a new one.
//! let tree = tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(
//!     tree.in_order(),
//!     [&3, &6, &8, &13, &23, &48, &56, &66, &76, &89, &101, &159, &533, &654]
//! );
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::mem;
use std::ptr;

use crate::{Error, Traversal};

/// A child slot. `None` means there's no subtree here, which is a different thing from a
/// lookup not finding anything.
type Subtree<T> = Option<Box<Node<T>>>;

/// An ordered, duplicate free binary search tree. For every node, everything in its left
/// subtree is smaller and everything in its right subtree is larger.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Subtree<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // The default drop recurses once per level. Children are detached onto a stack
    // before each node drops so a long chain can't overflow.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a minimal height tree from values that are already strictly ascending.
    ///
    /// The callers of this are responsible for the ordering, see [`Tree::from_sorted`]
    /// for the checked version.
    fn build(sorted: Vec<T>) -> Self {
        let len = sorted.len();
        let root = Node::build(&mut sorted.into_iter(), len);
        Self { root, len }
    }

    /// How many values are in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of edges on the longest path from the root down to a leaf. An empty tree
    /// has a height of `-1` and a tree with a single node has a height of `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// assert_eq!(Tree::<i32>::new().height(), -1);
    /// assert_eq!(Tree::create([1]).height(), 0);
    /// assert_eq!(Tree::create(1..=7).height(), 2);
    /// ```
    pub fn height(&self) -> isize {
        height(self.root())
    }

    /// Whether, at every node, the heights of the left and right subtrees differ by at
    /// most one. An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        balanced_height(self.root()).is_some()
    }

    /// Walks the tree in the given order, handing each node to `visit`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Traversal, Tree};
    ///
    /// let tree = Tree::create([1, 2, 3]);
    /// let mut doubled = Vec::new();
    /// tree.visit(Traversal::PreOrder, |node| doubled.push(node.data() * 2));
    ///
    /// assert_eq!(doubled, [4, 2, 6]);
    /// ```
    pub fn visit<'a, F>(&'a self, order: Traversal, mut visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        let Some(root) = self.root() else {
            return;
        };
        match order {
            Traversal::LevelOrder => {
                let mut queue = VecDeque::from([root]);
                while let Some(node) = queue.pop_front() {
                    visit(node);
                    queue.extend(node.left());
                    queue.extend(node.right());
                }
            }
            Traversal::PreOrder => root.walk_pre_order(&mut visit),
            Traversal::InOrder => root.walk_in_order(&mut visit),
            Traversal::PostOrder => root.walk_post_order(&mut visit),
        }
    }

    /// Collects the values of the tree in the given order.
    pub fn traverse(&self, order: Traversal) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        self.visit(order, |node| values.push(&node.data));
        values
    }

    /// Values breadth first, level by level.
    pub fn level_order(&self) -> Vec<&T> {
        self.traverse(Traversal::LevelOrder)
    }

    /// Calls `visit` on each node breadth first.
    pub fn level_order_with<'a>(&'a self, visit: impl FnMut(&'a Node<T>)) {
        self.visit(Traversal::LevelOrder, visit)
    }

    /// Values with each node before its subtrees.
    pub fn pre_order(&self) -> Vec<&T> {
        self.traverse(Traversal::PreOrder)
    }

    /// Calls `visit` on each node before its subtrees.
    pub fn pre_order_with<'a>(&'a self, visit: impl FnMut(&'a Node<T>)) {
        self.visit(Traversal::PreOrder, visit)
    }

    /// Values in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        self.traverse(Traversal::InOrder)
    }

    /// Calls `visit` on each node in ascending order.
    pub fn in_order_with<'a>(&'a self, visit: impl FnMut(&'a Node<T>)) {
        self.visit(Traversal::InOrder, visit)
    }

    /// Values with each node after its subtrees.
    pub fn post_order(&self) -> Vec<&T> {
        self.traverse(Traversal::PostOrder)
    }

    /// Calls `visit` on each node after its subtrees.
    pub fn post_order_with<'a>(&'a self, visit: impl FnMut(&'a Node<T>)) {
        self.visit(Traversal::PostOrder, visit)
    }

    /// Consumes the tree, returning its values in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);
        Node::drain_in_order(self.root.take(), &mut values);
        values
    }

    /// Consumes the tree and returns a new, minimal height tree holding the same values.
    /// The values are moved, not cloned. The result is always balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 0..15 {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.height(), 14);
    ///
    /// let tree = tree.rebalance();
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn rebalance(self) -> Self {
        let tree = Self::build(self.into_sorted_vec());
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("rebalanced {} values to height {}", tree.len, tree.height());
        }
        tree
    }

    /// Like [`Tree::rebalance`] but leaves this tree alone and clones the values into the
    /// new one.
    pub fn rebalanced(&self) -> Self
    where
        T: Clone,
    {
        Self::build(self.in_order().into_iter().cloned().collect())
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Creates a balanced tree from any collection of values. The values are sorted and
    /// duplicates are dropped before building.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::create([5, 1, 4, 1, 3, 2, 5]);
    ///
    /// assert_eq!(tree.in_order(), [&1, &2, &3, &4, &5]);
    /// assert_eq!(tree.root().map(|root| *root.data()), Some(3));
    /// ```
    pub fn create<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort();
        values.dedup();
        Self::build(values)
    }

    /// Builds a minimal height tree from values that must already be strictly ascending.
    /// The subtree root at each level is the lower midpoint of the remaining range, so
    /// `n` values give a height of `floor(log2(n))`.
    ///
    /// # Errors
    ///
    /// [`Error::NotSortedUnique`] if any value isn't strictly less than the one after it.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Error, Tree};
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3, 4, 5, 6, 7]).unwrap();
    /// assert_eq!(tree.level_order(), [&4, &2, &6, &1, &3, &5, &7]);
    ///
    /// assert_eq!(
    ///     Tree::from_sorted(vec![1, 3, 3]).unwrap_err(),
    ///     Error::NotSortedUnique { index: 1 }
    /// );
    /// ```
    pub fn from_sorted(sorted: Vec<T>) -> Result<Self, Error> {
        if let Some(index) = sorted.windows(2).position(|pair| pair[0] >= pair[1]) {
            log::debug!("refusing to build from unsorted input (index {})", index);
            return Err(Error::NotSortedUnique { index });
        }
        Ok(Self::build(sorted))
    }

    /// Inserts `value` as a new leaf and returns its node. If the value is already in the
    /// tree, nothing changes and the existing node is returned. The tree is not rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::create([2, 4]);
    /// assert_eq!(tree.insert(3).data(), &3);
    /// assert_eq!(tree.len(), 3);
    ///
    /// // Inserting it again is a no-op.
    /// tree.insert(3);
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn insert(&mut self, value: T) -> &Node<T> {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match value.cmp(&node.data) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => {
                    log::trace!("insert of a value already in the tree");
                    return node;
                }
            }
        }
        self.len += 1;
        slot.insert(Box::new(Node::leaf(value)))
    }

    /// Removes `value` from the tree, returning it. Returns `None` and leaves the tree
    /// untouched if the value isn't present.
    ///
    /// A node with two children takes on the value of its in-order successor (the
    /// smallest value of its right subtree), which is then removed from that subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::create([1, 2, 3]);
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.root().map(|root| *root.data()), Some(3));
    /// assert_eq!(tree.in_order(), [&1, &3]);
    ///
    /// assert_eq!(tree.delete(&42), None);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T> {
        let (root, removed) = Node::delete(self.root.take(), value);
        self.root = root;
        match removed {
            Some(_) => self.len -= 1,
            None => {
                log::trace!("delete of a value not in the tree");
            }
        }
        removed
    }

    /// Finds the node holding `value`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::create([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|node| node.is_leaf()), Some(true));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root();
        while let Some(node) = current {
            match value.cmp(&node.data) {
                Ordering::Less => current = node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => current = node.right(),
            }
        }
        None
    }

    /// Whether `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// The smallest value in the tree.
    pub fn min_value(&self) -> Option<&T> {
        self.root().map(Node::min_value)
    }

    /// The largest value in the tree.
    pub fn max_value(&self) -> Option<&T> {
        self.root().map(Node::max_value)
    }

    /// The number of edges from the root to `target`, or `None` if `target` is not a node of
    /// this tree. See [`Node::depth_of`].
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::create(1..=7);
    /// let five = tree.find(&5).unwrap();
    ///
    /// assert_eq!(tree.depth(five), Some(2));
    ///
    /// // A node with the same value in another tree isn't part of this one.
    /// let other = Tree::create([5]);
    /// assert_eq!(tree.depth(other.root().unwrap()), None);
    /// ```
    pub fn depth(&self, target: &Node<T>) -> Option<usize> {
        self.root().and_then(|root| root.depth_of(target))
    }

    /// The number of edges from the root to the node holding `value`, if there is one.
    pub fn depth_of_value(&self, value: &T) -> Option<usize> {
        self.find(value).and_then(|node| self.depth(node))
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::create(iter)
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    /// Inserts each value one at a time. Like [`Tree::insert`], this doesn't rebalance.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// A single node of a [`Tree`]. Each node owns its children outright.
#[derive(Clone, Debug)]
pub struct Node<T> {
    data: T,
    left: Subtree<T>,
    right: Subtree<T>,
}

impl<T> Node<T> {
    fn leaf(data: T) -> Self {
        Self {
            data,
            left: None,
            right: None,
        }
    }

    /// Builds a subtree from the next `count` values of an ascending iterator. The root
    /// is the lower midpoint, `(count - 1) / 2` values in, which is what picking
    /// `floor((start + end) / 2)` over the inclusive range `[0, count - 1]` gives.
    fn build<I>(values: &mut I, count: usize) -> Subtree<T>
    where
        I: Iterator<Item = T>,
    {
        if count == 0 {
            return None;
        }
        let mid = (count - 1) / 2;
        let left = Self::build(values, mid);
        let data = values.next()?;
        let right = Self::build(values, count - mid - 1);
        Some(Box::new(Self { data, left, right }))
    }

    /// The value stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Height of the subtree rooted here. A leaf has a height of `0`.
    pub fn height(&self) -> usize {
        height(Some(self)).unsigned_abs()
    }

    /// Whether the subtree rooted here is balanced, see [`Tree::is_balanced`].
    pub fn is_balanced(&self) -> bool {
        balanced_height(Some(self)).is_some()
    }

    /// The smallest value in the subtree rooted here, found by following left children.
    pub fn min_value(&self) -> &T {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        &node.data
    }

    /// The largest value in the subtree rooted here.
    pub fn max_value(&self) -> &T {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        &node.data
    }

    /// The number of edges from this node down to `target`, or `None` if `target` isn't in
    /// the subtree rooted here.
    ///
    /// The descent is steered by comparing `target`'s value against each node on the way,
    /// and a node only counts as found when it *is* `target`, not just equal to it. This
    /// relies on values being unique within a tree: two nodes holding equal values would
    /// send the search down whichever side the comparison picks.
    pub fn depth_of(&self, target: &Node<T>) -> Option<usize>
    where
        T: Ord,
    {
        let mut current = Some(self);
        let mut edges = 0;
        while let Some(node) = current {
            if ptr::eq(node, target) {
                return Some(edges);
            }
            current = if target.data < node.data {
                node.left()
            } else {
                node.right()
            };
            edges += 1;
        }
        None
    }

    fn walk_pre_order<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a Node<T>),
    {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            visit(node);
            stack.extend(node.right());
            stack.extend(node.left());
        }
    }

    fn walk_in_order<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a Node<T>),
    {
        let mut stack = Vec::new();
        let mut current = Some(self);
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            visit(node);
            current = node.right();
        }
    }

    fn walk_post_order<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a Node<T>),
    {
        // Node, right, left is exactly post-order backwards.
        let mut stack = vec![self];
        let mut reversed = Vec::new();
        while let Some(node) = stack.pop() {
            reversed.push(node);
            stack.extend(node.left());
            stack.extend(node.right());
        }
        for node in reversed.into_iter().rev() {
            visit(node);
        }
    }

    /// Moves every value of `subtree` into `out`, smallest first.
    fn drain_in_order(subtree: Subtree<T>, out: &mut Vec<T>) {
        let mut stack = Vec::new();
        let mut current = subtree;
        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            let Some(node) = stack.pop() else {
                break;
            };
            let Node { data, right, .. } = *node;
            out.push(data);
            current = right;
        }
    }

    /// Deletes `value` from `subtree`. Returns the subtree that should take its place in
    /// the parent along with the deleted value, if it was found.
    fn delete(subtree: Subtree<T>, value: &T) -> (Subtree<T>, Option<T>)
    where
        T: Ord,
    {
        let Some(mut node) = subtree else {
            return (None, None);
        };
        match value.cmp(&node.data) {
            Ordering::Less => {
                let (left, removed) = Self::delete(node.left.take(), value);
                node.left = left;
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (right, removed) = Self::delete(node.right.take(), value);
                node.right = right;
                (Some(node), removed)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, child) | (child, None) => (child, Some(node.data)),
                (Some(left), Some(right)) => {
                    let (right, successor) = right.remove_min();
                    let removed = mem::replace(&mut node.data, successor);
                    node.left = Some(left);
                    node.right = right;
                    (Some(node), Some(removed))
                }
            },
        }
    }

    /// Removes the leftmost node of this subtree, returning what's left of the subtree and
    /// the removed (smallest) value.
    fn remove_min(mut self: Box<Self>) -> (Subtree<T>, T) {
        match self.left.take() {
            None => {
                let Node { data, right, .. } = *self;
                (right, data)
            }
            Some(left) => {
                let (left, min) = left.remove_min();
                self.left = left;
                (Some(self), min)
            }
        }
    }
}

/// Height of a possibly absent subtree: `-1` when there's no subtree, otherwise one more
/// than the taller of its children. Counted level by level.
pub fn height<T>(node: Option<&Node<T>>) -> isize {
    let mut level: Vec<&Node<T>> = node.into_iter().collect();
    let mut height = -1;
    while !level.is_empty() {
        height += 1;
        level = level
            .iter()
            .flat_map(|node| node.left().into_iter().chain(node.right()))
            .collect();
    }
    height
}

/// Computes the height of `node` bottom up in one post-order pass, bailing out with `None`
/// as soon as any subtree is found to be unbalanced.
fn balanced_height<T>(node: Option<&Node<T>>) -> Option<isize> {
    let Some(root) = node else {
        return Some(-1);
    };
    // `true` marks a node whose children have already been measured. Finished subtree
    // heights wait on `heights` until their parent comes back off the stack.
    let mut stack = vec![(root, false)];
    let mut heights: Vec<isize> = Vec::new();
    while let Some((node, children_done)) = stack.pop() {
        if children_done {
            let right = if node.right.is_some() { heights.pop()? } else { -1 };
            let left = if node.left.is_some() { heights.pop()? } else { -1 };
            if left.abs_diff(right) > 1 {
                return None;
            }
            heights.push(1 + left.max(right));
        } else {
            stack.push((node, true));
            stack.extend(node.right().map(|right| (right, false)));
            stack.extend(node.left().map(|left| (left, false)));
        }
    }
    heights.pop()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Asserts the exact shape of a tree by its pre-order and in-order sequences, which
    /// together pin down a binary tree of unique values.
    macro_rules! assert_shape {
        ($tree:expr, pre: $pre:expr, sorted: $sorted:expr) => {{
            let pre: Vec<i32> = $tree.pre_order().into_iter().copied().collect();
            let ino: Vec<i32> = $tree.in_order().into_iter().copied().collect();
            assert_eq!(pre, $pre);
            assert_eq!(ino, $sorted);
        }};
    }

    fn insert_all(values: &[i32]) -> Tree<i32> {
        let mut tree = Tree::new();
        tree.extend(values.iter().copied());
        tree
    }

    #[test]
    fn build_picks_lower_midpoint() {
        let tree = Tree::create([1, 2]);
        assert_shape!(tree, pre: [1, 2], sorted: [1, 2]);

        let tree = Tree::create(1..=4);
        assert_shape!(tree, pre: [2, 1, 3, 4], sorted: [1, 2, 3, 4]);
    }

    #[test]
    fn create_sorts_and_dedups() {
        let tree = Tree::create([3, 6, 8, 23, 48, 76, 89, 13, 66, 56]);

        assert_eq!(tree.len(), 10);
        assert_eq!(
            tree.in_order(),
            [&3, &6, &8, &13, &23, &48, &56, &66, &76, &89]
        );
        assert_eq!(tree.root().map(Node::data), Some(&23));
    }

    #[test]
    fn create_from_empty() {
        let tree = Tree::<i32>::create([]);

        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.height(), -1);
        assert!(tree.is_balanced());
        for order in Traversal::ALL {
            assert!(tree.traverse(order).is_empty(), "{}", order);
        }
    }

    #[test]
    fn from_sorted_rejects_duplicates_and_disorder() {
        assert_eq!(
            Tree::from_sorted(vec![1, 2, 2]).unwrap_err(),
            Error::NotSortedUnique { index: 1 }
        );
        assert_eq!(
            Tree::from_sorted(vec![2, 1]).unwrap_err(),
            Error::NotSortedUnique { index: 0 }
        );
        assert!(Tree::<i32>::from_sorted(vec![]).unwrap().is_empty());
    }

    #[test]
    fn build_heights() {
        for (n, expected) in [(0, -1), (1, 0), (2, 1), (3, 1), (7, 2), (8, 3), (10, 3)] {
            assert_eq!(Tree::create(0..n).height(), expected, "n = {}", n);
        }
    }

    #[test]
    fn insert_adds_leaf() {
        let mut tree = Tree::create([2, 4, 6]);

        let node = tree.insert(5);
        assert_eq!(node.data(), &5);
        assert!(node.is_leaf());

        assert_shape!(tree, pre: [4, 2, 6, 5], sorted: [2, 4, 5, 6]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn insert_existing_is_noop() {
        let mut tree = Tree::create([2, 4, 6]);

        let node = tree.insert(4);
        assert_eq!(node.data(), &4);
        assert!(!node.is_leaf());

        assert_shape!(tree, pre: [4, 2, 6], sorted: [2, 4, 6]);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn insert_into_empty() {
        let mut tree = Tree::new();
        tree.insert(1);

        assert_eq!(tree.root().map(Node::data), Some(&1));
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn insert_does_not_rebalance() {
        let tree = insert_all(&[1, 2, 3, 4, 5]);

        assert_eq!(tree.height(), 4);
        assert!(!tree.is_balanced());
    }

    #[test]
    fn delete_no_children() {
        let mut tree = insert_all(&[1, 2]);

        assert_eq!(tree.delete(&2), Some(2));
        assert_eq!(tree.find(&2).map(Node::data), None);
        assert_shape!(tree, pre: [1], sorted: [1]);
    }

    #[test]
    fn delete_no_left_child() {
        let mut tree = insert_all(&[1, 2]);

        assert_eq!(tree.delete(&1), Some(1));
        assert_shape!(tree, pre: [2], sorted: [2]);
    }

    #[test]
    fn delete_no_right_child() {
        let mut tree = insert_all(&[2, 1]);

        assert_eq!(tree.delete(&2), Some(2));
        assert_shape!(tree, pre: [1], sorted: [1]);
    }

    #[test]
    fn delete_two_children_with_no_grandchildren() {
        let mut tree = insert_all(&[2, 1, 3]);

        assert_eq!(tree.delete(&2), Some(2));
        assert_shape!(tree, pre: [3, 1], sorted: [1, 3]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn delete_two_children_with_deeper_successor() {
        let mut tree = insert_all(&[5, 3, 8, 2, 6, 9, 7]);

        // 8's successor is 9, a leaf.
        assert_eq!(tree.delete(&8), Some(8));
        assert_shape!(tree, pre: [5, 3, 2, 9, 6, 7], sorted: [2, 3, 5, 6, 7, 9]);

        // 5's successor is 6, which has a right child to splice up.
        assert_eq!(tree.delete(&5), Some(5));
        assert_shape!(tree, pre: [6, 3, 2, 9, 7], sorted: [2, 3, 6, 7, 9]);
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut tree = Tree::create(1..=7);

        assert_eq!(tree.delete(&42), None);
        assert_shape!(tree, pre: [4, 2, 1, 3, 6, 5, 7], sorted: [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(tree.len(), 7);

        let mut empty = Tree::new();
        assert_eq!(empty.delete(&1), None);
    }

    #[test]
    fn delete_everything() {
        let mut tree = Tree::create(0..20);
        for x in (0..20).rev() {
            assert_eq!(tree.delete(&x), Some(x));
        }

        assert!(tree.is_empty());
        assert!(tree.root().is_none());
    }

    #[test]
    fn find_hits_and_misses() {
        let tree = Tree::create([10, 20, 30, 40]);

        assert_eq!(tree.find(&30).map(Node::data), Some(&30));
        assert!(tree.find(&25).is_none());
        assert!(Tree::<i32>::new().find(&1).is_none());
        assert!(tree.contains(&10));
        assert!(!tree.contains(&0));
    }

    #[test]
    fn traversal_orders() {
        let tree = Tree::create(1..=7);

        assert_eq!(tree.level_order(), [&4, &2, &6, &1, &3, &5, &7]);
        assert_eq!(tree.pre_order(), [&4, &2, &1, &3, &6, &5, &7]);
        assert_eq!(tree.in_order(), [&1, &2, &3, &4, &5, &6, &7]);
        assert_eq!(tree.post_order(), [&1, &3, &2, &5, &7, &6, &4]);
    }

    #[test]
    fn visitors_see_every_node_once() {
        let tree = Tree::create(1..=7);

        let mut seen = Vec::new();
        tree.level_order_with(|node| seen.push(*node.data()));
        assert_eq!(seen, [4, 2, 6, 1, 3, 5, 7]);

        let mut seen = Vec::new();
        tree.pre_order_with(|node| seen.push(*node.data()));
        assert_eq!(seen, [4, 2, 1, 3, 6, 5, 7]);

        let mut seen = Vec::new();
        tree.in_order_with(|node| seen.push(*node.data()));
        assert_eq!(seen, [1, 2, 3, 4, 5, 6, 7]);

        let mut leaves = 0;
        tree.post_order_with(|node| leaves += node.is_leaf() as usize);
        assert_eq!(leaves, 4);
    }

    #[test]
    fn heights() {
        assert_eq!(height::<i32>(None), -1);

        let tree = insert_all(&[2, 1, 3, 4]);
        let root = tree.root().unwrap();
        assert_eq!(root.height(), 2);
        assert_eq!(height(root.left()), 0);
        assert_eq!(height(root.right()), 1);
        assert_eq!(tree.find(&4).unwrap().height(), 0);
    }

    #[test]
    fn depths() {
        let tree = Tree::create(1..=7);
        let root = tree.root().unwrap();

        assert_eq!(tree.depth(root), Some(0));
        assert_eq!(tree.depth_of_value(&6), Some(1));
        assert_eq!(tree.depth_of_value(&7), Some(2));
        assert_eq!(tree.depth_of_value(&8), None);

        // Depth is relative to whichever node is treated as the root.
        let six = tree.find(&6).unwrap();
        let seven = tree.find(&7).unwrap();
        assert_eq!(six.depth_of(seven), Some(1));
        assert_eq!(six.depth_of(tree.find(&1).unwrap()), None);
    }

    #[test]
    fn depth_of_foreign_node_with_equal_value() {
        let tree = Tree::create(1..=7);
        let other = Tree::create([4]);

        assert_eq!(tree.depth(other.root().unwrap()), None);
        assert_eq!(Tree::new().depth(other.root().unwrap()), None);
    }

    #[test]
    fn min_and_max() {
        let tree = Tree::create([8, 3, 10, 1, 6, 14, 4, 7, 13]);

        assert_eq!(tree.min_value(), Some(&1));
        assert_eq!(tree.max_value(), Some(&14));
        assert_eq!(tree.find(&10).unwrap().min_value(), &8);
        assert_eq!(Tree::<i32>::new().min_value(), None);
    }

    #[test]
    fn balance_checks_every_node() {
        // The root is within one (2 against 1) but node 1 has a right chain of two.
        let tree = insert_all(&[4, 1, 5, 2, 3, 6]);
        assert_eq!(tree.height(), 3);
        assert!(!tree.is_balanced());
        assert!(tree.find(&5).unwrap().is_balanced());

        assert!(insert_all(&[2, 1, 3, 4]).is_balanced());
        assert!(!insert_all(&[1, 2, 3]).is_balanced());
    }

    #[test]
    fn rebalance_restores_balance() {
        let tree = insert_all(&(0..100).collect::<Vec<_>>());
        assert_eq!(tree.height(), 99);

        let tree = tree.rebalance();
        assert!(tree.is_balanced());
        assert_eq!(tree.height(), 6);
        assert_eq!(tree.len(), 100);
        assert_eq!(tree.into_sorted_vec(), (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn rebalanced_keeps_original() {
        let tree = insert_all(&[1, 2, 3]);
        let balanced = tree.rebalanced();

        assert!(!tree.is_balanced());
        assert!(balanced.is_balanced());
        assert_eq!(tree.in_order(), balanced.in_order());
        assert_shape!(balanced, pre: [2, 1, 3], sorted: [1, 2, 3]);
    }

    #[test]
    fn works_with_owned_values() {
        let mut tree = Tree::create(["pear", "apple", "fig"].map(String::from));
        tree.insert("kiwi".to_string());

        assert_eq!(tree.delete(&"fig".to_string()), Some("fig".to_string()));
        let tree = tree.rebalance();
        assert_eq!(tree.in_order(), [&"apple", &"kiwi", &"pear"]);
    }
}
