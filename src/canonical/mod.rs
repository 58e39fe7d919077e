//! Canonicalization: keep only one level sequence per isomorphism class
//!
//! A candidate is accepted when the root's first subtree does not outrank
//! the rest of the tree. Rejected candidates are not stepped past one at a
//! time; the whole block sharing the offending left subtree is skipped.

use crate::sequence::{height, next_rooted_tree, split_tree};
use std::cmp::Ordering;
use tracing::trace;

/// Decide whether a split leads to a non-isomorphic tree
///
/// Compares height, then order, then the sequences themselves. Returns the
/// validity flag together with the order of the left subtree, which the
/// caller needs to know how far to jump when the split is invalid.
pub fn candidate_valid(l_tree: &[usize], r_tree: &[usize]) -> (bool, usize) {
    let l_order = l_tree.len();

    let ordering = height(l_tree)
        .cmp(&height(r_tree))
        .then(l_order.cmp(&r_tree.len()))
        .then_with(|| l_tree.cmp(r_tree));

    (ordering != Ordering::Greater, l_order)
}

/// Jump past an invalid candidate
///
/// Uses the left subtree order as the pivot. When the pivot vertex was
/// deeper than 2 the tail is reset to `1, 2, ..., h + 1` where `h` is the
/// height of the new left subtree.
pub fn generate_new_candidate(candidate: &[usize], left_subtree_order: usize) -> Option<Vec<usize>> {
    let mut new_candidate = next_rooted_tree(candidate, Some(left_subtree_order))?;

    if candidate[left_subtree_order] > 2 {
        let (new_left_subtree, _) = split_tree(&new_candidate);
        let new_left_height = height(&new_left_subtree);
        let start = new_candidate.len() - (new_left_height + 1);
        for (offset, slot) in new_candidate[start..].iter_mut().enumerate() {
            *slot = offset + 1;
        }
    }

    trace!(?candidate, ?new_candidate, left_subtree_order, "skipped invalid candidate");
    Some(new_candidate)
}

/// One refinement pass towards the next valid layout
///
/// Returns the candidate unchanged if it is already valid. The generator
/// repeats this until it reaches a fixed point.
pub fn next_tree(candidate: &[usize]) -> Option<Vec<usize>> {
    let (left_subtree, remaining_subtree) = split_tree(candidate);
    let (valid, l_order) = candidate_valid(&left_subtree, &remaining_subtree);

    if valid {
        Some(candidate.to_vec())
    } else {
        generate_new_candidate(candidate, l_order)
    }
}
