use bintree::{RebuildError, Tree};

use std::collections::BTreeSet;

use crate::balanced_height;

/// The distinct elements of `xs`, ascending.
fn sorted_unique(xs: &[i16]) -> Vec<i16> {
    xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

#[quickcheck]
fn flatten_is_sorted_and_unique(xs: Vec<i16>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let expected = sorted_unique(&xs);

    tree.len() == expected.len() && tree.flatten_to_vec() == expected && tree.is_empty()
}

#[quickcheck]
fn duplicate_insert_fails(xs: Vec<i16>, x: i16) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    let _ = tree.insert(x);
    let len = tree.len();
    let before = tree.clone();

    let rejected = tree.insert(x).map_err(|e| e.into_element());
    rejected == Err(x) && tree.len() == len && tree == before
}

#[quickcheck]
fn contains_not(xs: Vec<i16>, nots: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(x))
        .all(|x| tree.retrieve(x).is_none() && tree.height(x) == 0)
}

#[quickcheck]
fn copy_is_equal_and_disjoint(xs: Vec<i16>, extra: i16) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let mut copy = tree.clone();
    let equal = copy == tree && tree == copy;

    let had_extra = tree.retrieve(&extra).is_some();
    let _ = copy.insert(extra);
    let untouched_by_insert = tree.retrieve(&extra).is_some() == had_extra;

    let len = tree.len();
    copy.clear();
    equal && untouched_by_insert && tree.len() == len
}

#[quickcheck]
fn round_trip_keeps_content(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut copy = tree.clone();

    let mut rebuilt = Tree::new();
    rebuilt.rebuild_from_sorted(copy.flatten_to_vec()).unwrap();

    let bound = balanced_height(tree.len());
    rebuilt.to_string() == tree.to_string()
        && rebuilt.len() == tree.len()
        && xs.iter().all(|x| (1..=bound).contains(&rebuilt.height(x)))
        && rebuilt.max_depth() == bound
}

#[quickcheck]
fn rebuild_rejects_unsorted(xs: Vec<i16>) -> bool {
    let sorted = sorted_unique(&xs);
    let mut reversed = sorted.clone();
    reversed.reverse();

    let mut tree = Tree::new();
    match tree.rebuild_from_sorted(reversed) {
        Ok(()) => sorted.len() <= 1,
        Err(RebuildError::Unsorted { index }) => index == 0 && tree.is_empty(),
        Err(RebuildError::NotEmpty { .. }) => false,
    }
}

#[quickcheck]
fn ascending_chain_height(xs: Vec<i16>) -> bool {
    let sorted = sorted_unique(&xs);
    let tree: Tree<_> = sorted.iter().copied().collect();

    sorted
        .iter()
        .enumerate()
        .all(|(i, x)| tree.height(x) == i + 1)
}

#[quickcheck]
fn descending_chain_height(xs: Vec<i16>) -> bool {
    let sorted = sorted_unique(&xs);
    let tree: Tree<_> = sorted.iter().rev().copied().collect();

    sorted.first().map_or(true, |x| tree.height(x) == sorted.len())
}

#[quickcheck]
fn equality_is_symmetric(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let ours: Tree<_> = xs.into_iter().collect();
    let theirs: Tree<_> = ys.into_iter().collect();

    (ours == theirs) == (theirs == ours) && ours == ours.clone()
}

#[quickcheck]
fn sideways_is_descending(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut expected = sorted_unique(&xs);
    expected.reverse();

    let side: Vec<_> = tree.sideways().map(|(_, x)| *x).collect();
    side == expected
        && tree
            .sideways()
            .all(|(depth, x)| tree.height(x) == depth + 1)
}
