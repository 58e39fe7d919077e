//! Structural successor steps on raw level sequences
//!
//! Both functions take borrowed depths and return freshly allocated vectors,
//! so a sequence handed out by the generator is never touched again.

/// Separate the root's first child subtree from the rest of the tree
///
/// The split point is the second vertex at depth 1 (or the end of the
/// sequence). Returns `(left, remaining)` where `left` holds the first
/// child's subtree re-based to depth 0 and `remaining` is the root with
/// every later subtree still attached.
pub fn split_tree(layout: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let split_index = layout
        .iter()
        .enumerate()
        .filter(|&(_, &depth)| depth == 1)
        .nth(1)
        .map(|(index, _)| index)
        .unwrap_or(layout.len());

    let left: Vec<usize> = layout
        .get(1..split_index)
        .unwrap_or(&[])
        .iter()
        .map(|&depth| depth - 1)
        .collect();

    let mut remaining = Vec::with_capacity(layout.len() - split_index + 1);
    remaining.push(0);
    remaining.extend_from_slice(&layout[split_index..]);

    (left, remaining)
}

/// Find the next rooted tree in reverse lexicographic order
///
/// With `left_order` unset the pivot is the last vertex not at depth 1;
/// otherwise the pivot is `left_order` itself. Returns `None` once the
/// pivot reaches the root.
///
/// # Panics
///
/// Panics if no earlier vertex sits one level above the pivot, which can
/// only happen for a sequence that breaks the preorder depth invariants.
pub fn next_rooted_tree(predecessor: &[usize], left_order: Option<usize>) -> Option<Vec<usize>> {
    let p = match left_order {
        Some(p) => p,
        None => predecessor.iter().rposition(|&depth| depth != 1)?,
    };

    if p == 0 {
        return None;
    }

    let target = predecessor[p] - 1;
    let q = predecessor[..p]
        .iter()
        .rposition(|&depth| depth == target)
        .unwrap_or_else(|| {
            panic!("malformed level sequence {:?}: no vertex at depth {} before index {}",
                predecessor, target, p)
        });

    let mut result = predecessor.to_vec();
    for i in p..result.len() {
        result[i] = result[i - p + q];
    }

    Some(result)
}
