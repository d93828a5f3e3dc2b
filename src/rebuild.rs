//! Moving a tree's elements out into a sorted `Vec` and building a balanced tree back from one.
//! Together these are the only way to rebalance a [`Tree`].

use tracing::{debug, warn};

use crate::error::RebuildError;
use crate::tree::{Link, Node, Tree};

impl<T> Tree<T> {
    /// Moves every element out of the tree in ascending order. The tree is empty afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree: Tree<_> = ["m", "d", "t", "b", "f"].into_iter().collect();
    ///
    /// assert_eq!(tree.flatten_to_vec(), ["b", "d", "f", "m", "t"]);
    /// assert!(tree.is_empty());
    /// ```
    pub fn flatten_to_vec(&mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len);
        let mut pending: Vec<Box<Node<T>>> = Vec::new();
        let mut current = self.root.take();
        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                pending.push(node);
            }
            let Some(node) = pending.pop() else {
                break;
            };
            let Node { element, right, .. } = *node;
            sorted.push(element);
            current = right;
        }
        debug!(len = sorted.len(), "flattened tree");
        self.len = 0;
        sorted
    }

    /// Builds a height-balanced tree out of `sorted`, which must be strictly ascending, into
    /// this tree, which must be empty. The middle element of every range becomes the root of
    /// that range's subtree, so `n` elements end up in `⌈log2(n + 1)⌉` levels.
    ///
    /// Both requirements are checked before anything is built. On error the tree is unchanged
    /// and the elements are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{RebuildError, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.rebuild_from_sorted(vec![1, 2, 3, 4, 5, 6, 7]).unwrap();
    /// assert_eq!(tree.height(&4), 1);
    /// assert_eq!(tree.max_depth(), 3);
    ///
    /// assert_eq!(tree.rebuild_from_sorted(vec![8]), Err(RebuildError::NotEmpty { len: 7 }));
    /// assert_eq!(
    ///     Tree::new().rebuild_from_sorted(vec![2, 1]),
    ///     Err(RebuildError::Unsorted { index: 0 })
    /// );
    /// ```
    pub fn rebuild_from_sorted(&mut self, sorted: Vec<T>) -> Result<(), RebuildError>
    where
        T: Ord,
    {
        if !self.is_empty() {
            warn!(len = self.len, "refusing to rebuild into a non-empty tree");
            return Err(RebuildError::NotEmpty { len: self.len });
        }
        if let Some(index) = sorted.windows(2).position(|pair| pair[0] >= pair[1]) {
            warn!(index, "refusing to rebuild from unsorted elements");
            return Err(RebuildError::Unsorted { index });
        }
        self.plant_balanced(sorted);
        Ok(())
    }

    /// Flattens the tree and rebuilds it balanced. The elements are unchanged, only the shape
    /// is.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=7).collect();
    /// assert_eq!(tree.max_depth(), 7);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.max_depth(), 3);
    /// assert_eq!(tree.len(), 7);
    /// ```
    pub fn rebalance(&mut self) {
        let sorted = self.flatten_to_vec();
        self.plant_balanced(sorted);
    }

    /// Unchecked half of [`Tree::rebuild_from_sorted`]: `self` is empty and `sorted` is strictly
    /// ascending.
    fn plant_balanced(&mut self, sorted: Vec<T>) {
        let len = sorted.len();
        let mut slots: Vec<Option<T>> = sorted.into_iter().map(Some).collect();
        self.root = build_balanced(&mut slots, 0, len);
        self.len = len;

        let height = balanced_height(len);
        if cfg!(debug_assertions) {
            assert_eq!(self.max_depth(), height);
        }
        debug!(len, height, "rebuilt balanced tree");
    }
}

/// Builds the subtree for the half-open range `low..high` of `slots`, taking each element out
/// of its slot as it is placed.
fn build_balanced<T>(slots: &mut [Option<T>], low: usize, high: usize) -> Link<T> {
    if low >= high {
        return None;
    }
    let mid = (low + high) / 2;
    let element = slots[mid].take()?;
    let left = build_balanced(slots, low, mid);
    let right = build_balanced(slots, mid + 1, high);
    Some(Box::new(Node {
        element,
        left,
        right,
    }))
}

/// Levels in a balanced tree of `len` nodes: `⌈log2(len + 1)⌉`, i.e. the bit length of `len`.
pub(crate) fn balanced_height(len: usize) -> usize {
    (usize::BITS - len.leading_zeros()) as usize
}
