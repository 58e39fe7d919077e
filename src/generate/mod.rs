//! Enumeration driver and tree count lookup

mod generator;
mod counts;

pub use generator::{
    TreeGenerator, generate_trees_level_order, generate_trees_adjacency_matrix, count_trees,
};
pub use counts::non_isomorphic_rooted_tree_count;
