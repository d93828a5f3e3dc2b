use crate::tree::{Node, Tree};

type Child<T> = for<'a> fn(&'a Node<T>) -> Option<&'a Node<T>>;

/// A depth-tracking walk that visits a node's `first` subtree, then the node, then its `last`
/// subtree. Depths start at 0 for the root.
pub(crate) struct Walk<'a, T> {
    pending: Vec<(&'a Node<T>, usize)>,
    descend: Option<(&'a Node<T>, usize)>,
    first: Child<T>,
    last: Child<T>,
}

impl<'a, T> Walk<'a, T> {
    fn new(tree: &'a Tree<T>, first: Child<T>, last: Child<T>) -> Self {
        Self {
            pending: Vec::new(),
            descend: tree.root.as_deref().map(|root| (root, 0)),
            first,
            last,
        }
    }

    /// Left subtree, node, right subtree: ascending order.
    pub(crate) fn in_order(tree: &'a Tree<T>) -> Self {
        Self::new(tree, Node::left, Node::right)
    }

    /// Right subtree, node, left subtree: descending order.
    pub(crate) fn reverse_in_order(tree: &'a Tree<T>) -> Self {
        Self::new(tree, Node::right, Node::left)
    }
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, depth)) = self.descend.take() {
            self.descend = (self.first)(node).map(|child| (child, depth + 1));
            self.pending.push((node, depth));
        }
        let (node, depth) = self.pending.pop()?;
        self.descend = (self.last)(node).map(|child| (child, depth + 1));
        Some((depth, &node.element))
    }
}

/// Iterator over a tree "from the side": right subtree, then node, then left subtree, each
/// element paired with its depth (0 for the root). Created by [`Tree::sideways`].
///
/// Printing each element on its own line indented by its depth draws the tree rotated a quarter
/// turn counter-clockwise, with the root at the left margin.
pub struct Sideways<'a, T>(Walk<'a, T>);

impl<'a, T> Iterator for Sideways<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl<T> Tree<T> {
    /// Walks the tree right-node-left, yielding each element with its depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let side: Vec<_> = tree.sideways().collect();
    ///
    /// assert_eq!(side, [(1, &3), (0, &2), (1, &1)]);
    /// ```
    pub fn sideways(&self) -> Sideways<'_, T> {
        Sideways(Walk::reverse_in_order(self))
    }

    /// Ascending elements, without depths.
    pub(crate) fn in_order(&self) -> impl Iterator<Item = &T> {
        Walk::in_order(self).map(|(_, element)| element)
    }
}
