//! Matrix and graph representations of generated trees

mod adjacency;
mod conversion;

pub use adjacency::{
    AdjacencyMatrix, level_order_to_adjacency_matrix, level_order_to_adjacency_list,
    adjacency_matrix_to_level_order,
};
pub use conversion::{TreeGraph, to_graph, to_directed_graph};
