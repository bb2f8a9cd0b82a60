// src/core/indexing/vector/kdtree/mod.rs

//! KD-Tree implementation for k-nearest-neighbor search.
//!
//! The tree is bulk-built from labeled samples. Each branch splits on the
//! dimension with the widest range at the median value, which keeps the
//! tree balanced. Queries descend to the nearest leaf first and only visit
//! the far side of a split when the splitting plane lies within the current
//! k-th best distance.

pub use self::error::KdTreeError;
pub use self::search::{find_knn_linear, Neighbor};
pub use self::tree::{KdNode, KdTree, DEFAULT_MAX_LEAF_SIZE};

mod builder;
mod error;
mod search;
mod tree;

#[cfg(test)]
mod tests {
    mod test_builder;
    mod test_search;
}
