#[macro_use]
extern crate quickcheck_macros;

mod tree;

/// `⌈log2(len + 1)⌉`: levels in a tree of `len` nodes that is as balanced as it can be.
pub(crate) fn balanced_height(len: usize) -> usize {
    (usize::BITS - len.leading_zeros()) as usize
}
