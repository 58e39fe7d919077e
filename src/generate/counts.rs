//! Known tree counts (OEIS A000055)

use crate::{Result, TreeGenError};

/// Number of non-isomorphic trees, indexed by vertex count
static OEIS_COUNTS: [u64; 37] = [
    1, 1, 1, 1, 2, 3, 6, 11, 23, 47, 106, 235, 551, 1301, 3159, 7741, 19320, 48629, 123867,
    317955, 823065, 2144505, 5623756, 14828074, 39299897, 104636890, 279793450, 751065460,
    2023443032, 5469566585, 14830871802, 40330829030, 109972410221, 300628862480,
    823779631721, 2262366343746, 6226306037178,
];

/// Look up how many trees exist on `n_vertices` vertices
pub fn non_isomorphic_rooted_tree_count(n_vertices: usize) -> Result<u64> {
    OEIS_COUNTS
        .get(n_vertices)
        .copied()
        .ok_or(TreeGenError::OutOfRange {
            n: n_vertices,
            max: OEIS_COUNTS.len() - 1,
        })
}
