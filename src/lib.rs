//! # treegen: enumerate non-isomorphic trees
//!
//! Implements the Wright, Richmond, Odlyzko and McKay (WROM) successor
//! algorithm. Every tree on `n` vertices is produced exactly once, encoded
//! as the level sequence of the tree rooted at its centre.
//!
//! ## Features
//!
//! - **Level sequences**: validated preorder depth encoding
//! - **Successor primitives**: subtree split and next rooted tree
//! - **Canonicalization**: skip whole blocks of isomorphic duplicates
//! - **Enumeration**: lazy iterator over canonical trees, with known counts
//! - **Output**: adjacency matrices (ndarray) and graphs (petgraph)
//!
//! ```
//! use treegen::generate_trees_level_order;
//!
//! let trees: Vec<_> = generate_trees_level_order(4)?.collect();
//! assert_eq!(trees[0].as_slice(), &[0, 1, 2, 1]);
//! assert_eq!(trees[1].as_slice(), &[0, 1, 1, 1]);
//! # Ok::<(), treegen::TreeGenError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Level sequence representation and successor primitives
pub mod sequence;

/// Canonical form checks and candidate skipping
pub mod canonical;

/// Enumeration driver and count lookup
pub mod generate;

/// Adjacency matrix and graph output
pub mod graph;

/// Utility functions and helpers
pub mod utils;

// Re-export commonly used types
pub use sequence::{LevelSequence, generate_centered_tree_layout, split_tree, next_rooted_tree};
pub use canonical::{candidate_valid, generate_new_candidate, next_tree};
pub use generate::{
    TreeGenerator, generate_trees_level_order, generate_trees_adjacency_matrix,
    non_isomorphic_rooted_tree_count, count_trees,
};
pub use graph::{AdjacencyMatrix, level_order_to_adjacency_matrix, to_graph};

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum TreeGenError {
    /// Bad input to an entry point (e.g. zero vertices)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Count lookup past the end of the known table
    #[error("Number of vertices must be at most {max}, got {n}")]
    OutOfRange {
        /// Requested vertex count
        n: usize,
        /// Largest vertex count in the table
        max: usize,
    },

    /// Depths that do not describe a preorder traversal
    #[error("Invalid level sequence: {0}")]
    InvalidSequence(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, TreeGenError>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        sequence::{LevelSequence, split_tree, next_rooted_tree},
        canonical::{candidate_valid, next_tree},
        generate::{TreeGenerator, generate_trees_level_order, generate_trees_adjacency_matrix,
            non_isomorphic_rooted_tree_count, count_trees},
        graph::{AdjacencyMatrix, TreeGraph, level_order_to_adjacency_matrix, to_graph},
        Result, TreeGenError,
    };
}
