//! Lazy enumeration of canonical level sequences

use crate::canonical::next_tree;
use crate::graph::{level_order_to_adjacency_matrix, AdjacencyMatrix};
use crate::sequence::{generate_centered_tree_layout, next_rooted_tree, LevelSequence};
use crate::{Result, TreeGenError};
use tracing::debug;

/// Iterator over every non-isomorphic tree on a fixed number of vertices
///
/// Starts from the centered layout and walks downwards until the successor
/// step runs out. Each yielded sequence is an owned copy.
#[derive(Clone, Debug)]
pub struct TreeGenerator {
    n_vertices: usize,
    layout: Option<Vec<usize>>,
    emitted: usize,
}

impl TreeGenerator {
    /// Create a generator for `n_vertices` vertices
    pub fn new(n_vertices: usize) -> Result<Self> {
        if n_vertices == 0 {
            return Err(TreeGenError::InvalidArgument(
                "Number of vertices provided was less than one".to_string()
            ));
        }

        // A single vertex has no transitions to walk
        let layout = if n_vertices == 1 {
            None
        } else {
            Some(generate_centered_tree_layout(n_vertices))
        };

        debug!(n_vertices, seed = ?layout, "starting tree enumeration");
        Ok(TreeGenerator { n_vertices, layout, emitted: 0 })
    }

    /// Number of vertices in every generated tree
    pub fn order(&self) -> usize {
        self.n_vertices
    }

    /// Number of trees yielded so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Whether the enumeration has finished
    pub fn is_exhausted(&self) -> bool {
        self.layout.is_none()
    }

    /// Refine a candidate until `next_tree` leaves it unchanged
    fn canonicalize(mut candidate: Vec<usize>) -> Option<Vec<usize>> {
        loop {
            let refined = next_tree(&candidate)?;
            if refined == candidate {
                return Some(candidate);
            }
            candidate = refined;
        }
    }
}

impl Iterator for TreeGenerator {
    type Item = LevelSequence;

    fn next(&mut self) -> Option<LevelSequence> {
        let candidate = self.layout.take()?;

        match Self::canonicalize(candidate) {
            Some(tree) => {
                self.layout = next_rooted_tree(&tree, None);
                self.emitted += 1;
                if self.layout.is_none() {
                    debug!(n_vertices = self.n_vertices, emitted = self.emitted, "tree enumeration exhausted");
                }
                Some(LevelSequence::from_trusted(tree))
            }
            None => {
                debug!(n_vertices = self.n_vertices, emitted = self.emitted, "tree enumeration exhausted");
                None
            }
        }
    }
}

impl std::iter::FusedIterator for TreeGenerator {}

/// Generate all non-isomorphic trees as level sequences
///
/// Fails immediately for `n_vertices == 0`; a single vertex yields nothing.
pub fn generate_trees_level_order(n_vertices: usize) -> Result<TreeGenerator> {
    TreeGenerator::new(n_vertices)
}

/// Generate all non-isomorphic trees as adjacency matrices
pub fn generate_trees_adjacency_matrix(
    n_vertices: usize,
) -> Result<impl Iterator<Item = AdjacencyMatrix>> {
    Ok(generate_trees_level_order(n_vertices)?
        .map(|tree| level_order_to_adjacency_matrix(tree.as_slice())))
}

/// Count the trees the generator produces, without keeping them
pub fn count_trees(n_vertices: usize) -> Result<usize> {
    Ok(generate_trees_level_order(n_vertices)?.count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::non_isomorphic_rooted_tree_count;

    fn trees(n: usize) -> Vec<Vec<usize>> {
        generate_trees_level_order(n)
            .unwrap()
            .map(LevelSequence::into_inner)
            .collect()
    }

    #[test]
    fn test_zero_vertices_rejected() {
        assert!(matches!(
            generate_trees_level_order(0),
            Err(TreeGenError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_single_vertex_yields_nothing() {
        let mut generator = generate_trees_level_order(1).unwrap();
        assert!(generator.is_exhausted());
        assert_eq!(generator.next(), None);
        // the count table reports the single-vertex tree, the walk does not
        assert_eq!(non_isomorphic_rooted_tree_count(1).unwrap(), 1);
    }

    #[test]
    fn test_small_orders() {
        assert_eq!(trees(2), vec![vec![0, 1]]);
        assert_eq!(trees(3), vec![vec![0, 1, 1]]);
        assert_eq!(trees(4), vec![vec![0, 1, 2, 1], vec![0, 1, 1, 1]]);
        assert_eq!(
            trees(5),
            vec![vec![0, 1, 2, 1, 2], vec![0, 1, 2, 1, 1], vec![0, 1, 1, 1, 1]]
        );
    }

    #[test]
    fn test_six_vertices() {
        assert_eq!(
            trees(6),
            vec![
                vec![0, 1, 2, 3, 1, 2],
                vec![0, 1, 2, 2, 1, 2],
                vec![0, 1, 2, 2, 1, 1],
                vec![0, 1, 2, 1, 2, 1],
                vec![0, 1, 2, 1, 1, 1],
                vec![0, 1, 1, 1, 1, 1],
            ]
        );
    }

    #[test]
    fn test_counts_match_table() {
        for n in 2..=16 {
            assert_eq!(
                count_trees(n).unwrap() as u64,
                non_isomorphic_rooted_tree_count(n).unwrap(),
                "count mismatch for {} vertices", n
            );
        }
    }

    #[test]
    fn test_emitted_trees_are_fixed_points() {
        for n in 2..=9 {
            for tree in generate_trees_level_order(n).unwrap() {
                assert_eq!(next_tree(tree.as_slice()).as_deref(), Some(tree.as_slice()));
            }
        }
    }

    #[test]
    fn test_generator_bookkeeping() {
        let mut generator = generate_trees_level_order(7).unwrap();
        assert_eq!(generator.order(), 7);
        assert_eq!(generator.emitted(), 0);
        generator.by_ref().take(4).for_each(drop);
        assert_eq!(generator.emitted(), 4);
        assert_eq!(generator.by_ref().count(), 7);
        assert!(generator.is_exhausted());
        assert_eq!(generator.next(), None);
    }

    #[test]
    fn test_adjacency_stream() {
        let matrices: Vec<_> = generate_trees_adjacency_matrix(4).unwrap().collect();
        assert_eq!(matrices.len(), 2);
        assert_eq!(matrices[1].row(0).sum(), 3);
    }
}
