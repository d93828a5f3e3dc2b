//! An owned, unbalanced BST of unique elements. Insertion never rotates, so the tree keeps
//! whatever shape the insertion order gives it. Rebalancing is a separate, explicit step that
//! moves every element out into a sorted `Vec` and builds a balanced tree back from it (see
//! [`Tree::flatten_to_vec`], [`Tree::rebuild_from_sorted`] and [`Tree::rebalance`]).
//!
//! Every walk over the tree (insert, lookup, clone, comparison, drop) runs in a loop with an
//! explicit stack so a fully skewed tree of any size can be used and dropped safely.

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::DuplicateError;
use crate::traverse::Walk;

/// An owning pointer to a subtree. `None` is the empty subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(element: T) -> Box<Self> {
        Box::new(Self {
            element,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    // Recurses once per level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("element", &self.element)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

/// A Binary Search Tree holding unique elements. This can be used for inserting and retrieving
/// elements, asking how deep an element sits, and rebalancing through a sorted `Vec`.
///
/// Two trees compare equal only when they have the same shape *and* equal elements at every
/// position. Trees holding the same elements in different shapes are not equal.
///
/// # Examples
///
/// ```
/// use bintree::Tree;
///
/// let mut tree = Tree::new();
/// for element in ["m", "d", "t", "b", "f"] {
///     tree.insert(element).unwrap();
/// }
///
/// assert!(tree.insert("d").is_err());
/// assert_eq!(tree.retrieve(&"f"), Some(&"f"));
/// assert_eq!(tree.height(&"f"), 3);
/// assert_eq!(tree.height(&"z"), 0);
/// ```
pub struct Tree<T> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    /// Builds a disjoint tree of the same shape holding clones of every element.
    fn clone(&self) -> Self {
        Self {
            root: deep_copy(self.root.as_deref()),
            len: self.len,
        }
    }

    /// Releases every node of `self` before copying `source` into it.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.root = deep_copy(source.root.as_deref());
        self.len = source.len;
    }
}

impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self.root.as_deref(), other.root.as_deref())];
        while let Some(pair) = pending.pop() {
            match pair {
                (None, None) => {}
                (Some(ours), Some(theirs)) => {
                    if ours.element != theirs.element {
                        return false;
                    }
                    pending.push((ours.right(), theirs.right()));
                    pending.push((ours.left(), theirs.left()));
                }
                // One side has a child the other lacks.
                _ => return false,
            }
        }
        true
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root.as_deref())
            .finish()
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    /// Inserts every element, skipping the ones already present.
    fn extend<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        for element in elements {
            let _ = self.insert(element);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let mut tree = Self::new();
        tree.extend(elements);
        tree
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many elements the tree holds.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Drops every node and element, leaving the tree empty.
    pub fn clear(&mut self) {
        if self.root.is_none() {
            return;
        }
        debug!(len = self.len, "clearing tree");
        release(self.root.take());
        self.len = 0;
    }

    /// Inserts `element` as a new leaf. If an equal element is already stored the tree is left
    /// as is and `element` is handed back inside the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1).is_ok());
    /// let duplicate = tree.insert(1).unwrap_err();
    /// assert_eq!(duplicate.into_element(), 1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> Result<(), DuplicateError<T>>
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        let mut depth = 1;
        while let Some(node) = link {
            link = match element.cmp(&node.element) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!(depth, "rejecting duplicate element");
                    return Err(DuplicateError(element));
                }
            };
            depth += 1;
        }
        *link = Some(Node::new_boxed(element));
        self.len += 1;
        Ok(())
    }

    /// Finds the stored element equal to `target`. The returned reference points into the tree
    /// and lives no longer than the borrow of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<_> = [String::from("b"), String::from("a")].into_iter().collect();
    ///
    /// assert_eq!(tree.retrieve(&String::from("a")).map(String::as_str), Some("a"));
    /// assert_eq!(tree.retrieve(&String::from("z")), None);
    /// ```
    pub fn retrieve(&self, target: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.find(target).map(|(node, _)| &node.element)
    }

    /// The 1-based depth of the node holding `target` (the root has a height of 1), or 0 when
    /// `target` is not in the tree.
    pub fn height(&self, target: &T) -> usize
    where
        T: Ord,
    {
        self.find(target).map_or(0, |(_, depth)| depth)
    }

    /// The number of levels in the tree: 0 for an empty tree, 1 for a lone root, and so on.
    pub fn max_depth(&self) -> usize {
        Walk::reverse_in_order(self)
            .map(|(depth, _)| depth + 1)
            .max()
            .unwrap_or(0)
    }

    fn find(&self, target: &T) -> Option<(&Node<T>, usize)>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        let mut depth = 1;
        while let Some(node) = current {
            current = match target.cmp(&node.element) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some((node, depth)),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }
        None
    }
}

/// Drops a subtree one node at a time. Every node is detached from its children before it is
/// dropped so nothing recurses.
pub(crate) fn release<T>(root: Link<T>) {
    let mut pending: Vec<Box<Node<T>>> = root.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}

/// Copies a subtree into freshly allocated nodes.
fn deep_copy<T>(source: Option<&Node<T>>) -> Link<T>
where
    T: Clone,
{
    let mut root = None;
    {
        let mut pending = Vec::new();
        if let Some(node) = source {
            pending.push((node, &mut root));
        }
        while let Some((from, slot)) = pending.pop() {
            let Node { left, right, .. } =
                &mut **slot.insert(Node::new_boxed(from.element.clone()));
            if let Some(from_left) = from.left() {
                pending.push((from_left, left));
            }
            if let Some(from_right) = from.right() {
                pending.push((from_right, right));
            }
        }
    }
    root
}
