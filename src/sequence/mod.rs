//! Level sequence representation and successor primitives

mod level_sequence;
mod successor;

pub use level_sequence::{LevelSequence, generate_centered_tree_layout};
pub use successor::{split_tree, next_rooted_tree};

pub(crate) use level_sequence::height;
