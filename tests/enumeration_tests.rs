use std::collections::HashSet;
use treegen::graph::{adjacency_matrix_to_level_order, TreeGraph};
use treegen::prelude::*;

fn all_trees(n: usize) -> Vec<LevelSequence> {
    generate_trees_level_order(n).unwrap().collect()
}

fn is_connected(matrix: &AdjacencyMatrix) -> bool {
    adjacency_matrix_to_level_order(matrix).len() == matrix.nrows()
}

fn sorted_degrees(matrix: &AdjacencyMatrix) -> Vec<u32> {
    let mut degrees: Vec<u32> = matrix
        .rows()
        .into_iter()
        .map(|row| row.iter().map(|&x| x as u32).sum())
        .collect();
    degrees.sort_unstable();
    degrees
}

#[test]
fn counts_match_table_up_to_twelve() {
    for n in 2..=12 {
        assert_eq!(
            count_trees(n).unwrap() as u64,
            non_isomorphic_rooted_tree_count(n).unwrap(),
            "wrong number of trees for n = {}", n
        );
    }
}

#[test]
#[ignore = "slow: walks roughly 1.4 million trees"]
fn counts_match_table_up_to_twenty() {
    for n in 13..=20 {
        assert_eq!(
            count_trees(n).unwrap() as u64,
            non_isomorphic_rooted_tree_count(n).unwrap(),
            "wrong number of trees for n = {}", n
        );
    }
}

#[test]
fn single_vertex_disagrees_with_table() {
    // the walk has no transitions for one vertex, while the table counts it
    assert_eq!(count_trees(1).unwrap(), 0);
    assert_eq!(non_isomorphic_rooted_tree_count(1).unwrap(), 1);
}

#[test]
fn invalid_inputs_fail_immediately() {
    assert!(matches!(generate_trees_level_order(0), Err(TreeGenError::InvalidArgument(_))));
    assert!(generate_trees_adjacency_matrix(0).is_err());
    assert!(matches!(
        non_isomorphic_rooted_tree_count(40),
        Err(TreeGenError::OutOfRange { n: 40, .. })
    ));
}

#[test]
fn emitted_sequences_are_distinct_and_well_formed() {
    for n in 2..=11 {
        let trees = all_trees(n);
        let unique: HashSet<&LevelSequence> = trees.iter().collect();
        assert_eq!(unique.len(), trees.len());

        for tree in &trees {
            let depths = tree.as_slice();
            assert_eq!(depths.len(), n);
            assert_eq!(depths[0], 0);
            for pair in depths.windows(2) {
                assert!(pair[1] >= 1 && pair[1] <= pair[0] + 1, "bad step in {:?}", tree);
            }
            assert!(LevelSequence::new(depths.to_vec()).is_ok());
        }
    }
}

#[test]
fn emitted_sequences_descend_strictly() {
    for n in 2..=10 {
        let trees = all_trees(n);
        for pair in trees.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }
}

#[test]
fn emitted_trees_are_pairwise_non_isomorphic() {
    for n in 2..=9 {
        let graphs: Vec<TreeGraph> = all_trees(n).into_iter().map(TreeGraph::new).collect();
        for (i, a) in graphs.iter().enumerate() {
            for b in &graphs[i + 1..] {
                assert!(
                    !a.is_isomorphic(b),
                    "{:?} and {:?} are the same tree", a.tree(), b.tree()
                );
            }
        }
    }
}

#[test]
fn adjacency_matrices_describe_trees() {
    for n in 2..=9 {
        for matrix in generate_trees_adjacency_matrix(n).unwrap() {
            assert_eq!(matrix.shape(), &[n, n]);
            assert_eq!(matrix, matrix.t());
            assert!(matrix.diag().iter().all(|&x| x == 0));
            assert_eq!(matrix.iter().map(|&x| x as usize).sum::<usize>(), 2 * (n - 1));
            assert!(is_connected(&matrix));
        }
    }
}

#[test]
fn matrix_round_trip_keeps_degrees() {
    for tree in all_trees(8) {
        let matrix = level_order_to_adjacency_matrix(tree.as_slice());
        let reencoded = adjacency_matrix_to_level_order(&matrix);
        let again = level_order_to_adjacency_matrix(&reencoded);

        assert_eq!(sorted_degrees(&matrix), sorted_degrees(&again));
        let mut expected: Vec<u32> = tree.degrees().into_iter().map(|d| d as u32).collect();
        expected.sort_unstable();
        assert_eq!(sorted_degrees(&matrix), expected);
    }
}

#[test]
fn stopping_early_leaves_yielded_trees_intact() {
    let mut generator = generate_trees_level_order(8).unwrap();
    let first = generator.next().unwrap();
    let snapshot = first.clone();
    let rest: Vec<_> = generator.take(5).collect();

    assert_eq!(first, snapshot);
    assert_eq!(rest.len(), 5);
    assert!(rest.iter().all(|tree| *tree != first));
}

#[test]
fn graphs_match_sequences() {
    for tree in all_trees(7) {
        let graph = to_graph(tree.as_slice());
        assert_eq!(graph.node_count(), 7);
        assert_eq!(graph.edge_count(), 6);
        assert!(petgraph::algo::connected_components(&graph) == 1);
    }
}
