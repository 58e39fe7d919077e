//! Convert level sequences to petgraph graphs

use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use petgraph::{EdgeType, Graph};
use crate::sequence::LevelSequence;
use super::level_order_to_adjacency_list;

/// Convert a level sequence to an undirected graph
///
/// Node `i` carries the depth of vertex `i`; there is one edge per
/// parent/child pair.
pub fn to_graph(tree: &[usize]) -> UnGraph<usize, ()> {
    build_graph(tree)
}

/// Convert a level sequence to a graph with edges pointing parent to child
pub fn to_directed_graph(tree: &[usize]) -> DiGraph<usize, ()> {
    build_graph(tree)
}

fn build_graph<Ty: EdgeType>(tree: &[usize]) -> Graph<usize, (), Ty> {
    let n = tree.len();
    let mut graph = Graph::with_capacity(n, n.saturating_sub(1));

    let nodes: Vec<NodeIndex> = tree.iter().map(|&depth| graph.add_node(depth)).collect();

    for (parent, children) in level_order_to_adjacency_list(tree).into_iter().enumerate() {
        for child in children {
            graph.add_edge(nodes[parent], nodes[child], ());
        }
    }

    graph
}

/// High-level wrapper pairing a level sequence with its graph form
pub struct TreeGraph {
    tree: LevelSequence,
}

impl TreeGraph {
    /// Create new tree graph
    pub fn new(tree: LevelSequence) -> Self {
        TreeGraph { tree }
    }

    /// Build the undirected graph
    pub fn to_graph(&self) -> UnGraph<usize, ()> {
        to_graph(self.tree.as_slice())
    }

    /// Get the underlying level sequence
    pub fn tree(&self) -> &LevelSequence {
        &self.tree
    }

    /// Check whether two trees have the same unrooted shape
    pub fn is_isomorphic(&self, other: &TreeGraph) -> bool {
        self.tree.len() == other.tree.len()
            && petgraph::algo::is_isomorphic(&self.to_graph(), &other.to_graph())
    }
}
