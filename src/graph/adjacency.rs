//! Adjacency matrix output for level sequences

use ndarray::Array2;

/// Symmetric 0/1 adjacency matrix with a zero diagonal
pub type AdjacencyMatrix = Array2<u8>;

/// Convert a level order traversal to its adjacency matrix
///
/// Walks the sequence once with a stack of open ancestors: pop until the
/// top is shallower than the current vertex, then link the two.
pub fn level_order_to_adjacency_matrix(tree: &[usize]) -> AdjacencyMatrix {
    let n = tree.len();
    let mut matrix = Array2::zeros((n, n));

    for (index, parent) in parent_links(tree) {
        matrix[[index, parent]] = 1;
        matrix[[parent, index]] = 1;
    }

    matrix
}

/// Children of every vertex in traversal order
pub fn level_order_to_adjacency_list(tree: &[usize]) -> Vec<Vec<usize>> {
    let mut children = vec![Vec::new(); tree.len()];
    for (index, parent) in parent_links(tree) {
        children[parent].push(index);
    }
    children
}

/// Re-encode a matrix as a level sequence by depth-first search from vertex 0
///
/// Neighbours are visited in index order, so a matrix produced by
/// [`level_order_to_adjacency_matrix`] maps back to the sequence it came from.
pub fn adjacency_matrix_to_level_order(matrix: &AdjacencyMatrix) -> Vec<usize> {
    let n = matrix.nrows();
    if n == 0 {
        return Vec::new();
    }

    let mut depths = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    let mut stack = vec![(0usize, 0usize)];

    while let Some((vertex, depth)) = stack.pop() {
        if visited[vertex] {
            continue;
        }
        visited[vertex] = true;
        depths.push(depth);

        for neighbour in (0..n).rev() {
            if matrix[[vertex, neighbour]] != 0 && !visited[neighbour] {
                stack.push((neighbour, depth + 1));
            }
        }
    }

    depths
}

/// `(vertex, parent)` for every non-root vertex
fn parent_links(tree: &[usize]) -> Vec<(usize, usize)> {
    let mut links = Vec::with_capacity(tree.len().saturating_sub(1));
    let mut stack: Vec<usize> = Vec::new();

    for (index, &level) in tree.iter().enumerate() {
        while let Some(&top) = stack.last() {
            if tree[top] < level {
                links.push((index, top));
                break;
            }
            stack.pop();
        }
        stack.push(index);
    }

    links
}
