//! Level sequence data structure and the centered seed layout

use std::fmt;
use serde::{Serialize, Deserialize};

/// A tree encoded as the depth of each vertex in preorder
///
/// - Index 0 is always the root (depth 0)
/// - Every later depth is at least 1 and at most one more than its predecessor
/// - Sequences compare lexicographically, which is the order the generator walks
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct LevelSequence {
    depths: Vec<usize>,
}

impl LevelSequence {
    /// Create a level sequence, validating the preorder depth invariants
    pub fn new(depths: Vec<usize>) -> crate::Result<Self> {
        match depths.first() {
            None => {
                return Err(crate::TreeGenError::InvalidSequence(
                    "Level sequence must contain at least the root".to_string()
                ));
            }
            Some(&root) if root != 0 => {
                return Err(crate::TreeGenError::InvalidSequence(
                    format!("Root must have depth 0, found {}", root)
                ));
            }
            Some(_) => {}
        }

        for (index, pair) in depths.windows(2).enumerate() {
            let (prev, depth) = (pair[0], pair[1]);
            if depth == 0 {
                return Err(crate::TreeGenError::InvalidSequence(
                    format!("Vertex {} has depth 0 but only the root may", index + 1)
                ));
            }
            if depth > prev + 1 {
                return Err(crate::TreeGenError::InvalidSequence(
                    format!("Vertex {} jumps from depth {} to {}", index + 1, prev, depth)
                ));
            }
        }

        Ok(LevelSequence { depths })
    }

    /// Wrap depths produced by the generator, which are valid by construction
    pub(crate) fn from_trusted(depths: Vec<usize>) -> Self {
        debug_assert!(Self::new(depths.clone()).is_ok());
        LevelSequence { depths }
    }

    /// The centered seed layout for `n` vertices
    pub fn centered(n: usize) -> crate::Result<Self> {
        if n == 0 {
            return Err(crate::TreeGenError::InvalidArgument(
                "Number of vertices provided was less than one".to_string()
            ));
        }
        Ok(LevelSequence::from_trusted(generate_centered_tree_layout(n)))
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.depths.len()
    }

    /// Always false for a validated sequence
    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// Maximum depth of any vertex
    pub fn height(&self) -> usize {
        height(&self.depths)
    }

    /// Depths as a slice
    pub fn as_slice(&self) -> &[usize] {
        &self.depths
    }

    /// Consume into the underlying depths
    pub fn into_inner(self) -> Vec<usize> {
        self.depths
    }

    /// Parent of every vertex (None for the root)
    pub fn parents(&self) -> Vec<Option<usize>> {
        let mut parents = vec![None; self.depths.len()];
        let mut stack: Vec<usize> = Vec::with_capacity(self.height() + 1);

        for (vertex, &depth) in self.depths.iter().enumerate() {
            while let Some(&top) = stack.last() {
                if self.depths[top] < depth {
                    break;
                }
                stack.pop();
            }
            parents[vertex] = stack.last().copied();
            stack.push(vertex);
        }

        parents
    }

    /// Children of every vertex, in preorder
    pub fn children(&self) -> Vec<Vec<usize>> {
        let mut children = vec![Vec::new(); self.depths.len()];
        for (vertex, parent) in self.parents().into_iter().enumerate() {
            if let Some(parent) = parent {
                children[parent].push(vertex);
            }
        }
        children
    }

    /// Number of neighbours of every vertex, treating the tree as undirected
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.depths.len()];
        for (vertex, parent) in self.parents().into_iter().enumerate() {
            if let Some(parent) = parent {
                degrees[vertex] += 1;
                degrees[parent] += 1;
            }
        }
        degrees
    }
}

/// Lay out the centered tree for `n` vertices
///
/// Two ascending runs: `0..=n/2` followed by `1..(n+1)/2`. This is the
/// largest sequence the generator will visit, so enumeration starts here.
pub fn generate_centered_tree_layout(n: usize) -> Vec<usize> {
    (0..=n / 2).chain(1..n.div_ceil(2)).collect()
}

/// Maximum entry of a depth slice (0 when empty)
pub(crate) fn height(depths: &[usize]) -> usize {
    depths.iter().copied().max().unwrap_or(0)
}

impl TryFrom<Vec<usize>> for LevelSequence {
    type Error = crate::TreeGenError;

    fn try_from(depths: Vec<usize>) -> crate::Result<Self> {
        LevelSequence::new(depths)
    }
}

impl From<LevelSequence> for Vec<usize> {
    fn from(seq: LevelSequence) -> Self {
        seq.depths
    }
}

impl AsRef<[usize]> for LevelSequence {
    fn as_ref(&self) -> &[usize] {
        &self.depths
    }
}

impl fmt::Display for LevelSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, depth) in self.depths.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", depth)?;
        }
        Ok(())
    }
}

impl fmt::Debug for LevelSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LevelSequence{:?}", self.depths)
    }
}
