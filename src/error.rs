use thiserror::Error;

/// Returned by [`Tree::insert`][crate::Tree::insert] when the tree already holds an element equal
/// to the one being inserted. The tree is left untouched and the rejected element is handed back.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("element is already present in the tree")]
pub struct DuplicateError<T>(pub(crate) T);

impl<T> DuplicateError<T> {
    /// Gives back the element that was rejected.
    pub fn into_element(self) -> T {
        self.0
    }
}

/// A violated precondition of [`Tree::rebuild_from_sorted`][crate::Tree::rebuild_from_sorted].
/// Detected before any node is built.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RebuildError {
    /// The receiving tree still holds elements.
    #[error("cannot rebuild into a tree holding {len} elements")]
    NotEmpty {
        /// How many elements the receiving tree holds.
        len: usize,
    },
    /// The sequence is not strictly ascending: the element at `index` is not less than the one
    /// after it.
    #[error("elements are not strictly ascending at index {index}")]
    Unsorted {
        /// Position of the first out-of-order element.
        index: usize,
    },
}
