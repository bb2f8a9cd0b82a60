// src/core/indexing/vector/kdtree/tree.rs

//! Defines the core KD-Tree structures: `KdNode` and `KdTree`.

use log::debug;

use super::builder::build_kdtree;
use super::error::KdTreeError;
use super::search::{find_knn, Neighbor};
use crate::core::types::Label;
use crate::core::vector::distance::DistanceKernel;

/// Leaf capacity used when none is configured.
pub const DEFAULT_MAX_LEAF_SIZE: usize = 20;

/// Represents a node in the KD-Tree.
///
/// A branch splits its samples along one dimension: everything under `left`
/// has `feature[split_dim] <= threshold`, everything under `right` has
/// `feature[split_dim] > threshold`. A leaf holds indices into the sample
/// store owned by the `KdTree`.
#[derive(Debug, Clone, PartialEq)]
pub enum KdNode {
    Branch {
        split_dim: usize,
        threshold: f64,
        left: Box<KdNode>,
        right: Box<KdNode>,
    },
    Leaf {
        point_indices: Vec<usize>,
    },
}

impl KdNode {
    /// Number of nodes on the longest path from this node to a leaf.
    pub fn height(&self) -> usize {
        match self {
            KdNode::Leaf { .. } => 1,
            KdNode::Branch { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }

    pub fn num_leaves(&self) -> usize {
        match self {
            KdNode::Leaf { .. } => 1,
            KdNode::Branch { left, right, .. } => left.num_leaves() + right.num_leaves(),
        }
    }
}

/// A KD-Tree over labeled samples.
///
/// The tree owns its samples and labels; leaves refer to them by position,
/// which is also the insertion order used to break distance ties. Once built
/// the tree is only read, so queries may run concurrently from several
/// threads. Rebuilding needs `&mut self` and replaces the whole structure.
#[derive(Debug, Clone)]
pub struct KdTree {
    root: Option<KdNode>,
    max_leaf_size: usize,
    dimension: usize,
    samples: Vec<Vec<f64>>,
    labels: Vec<Label>,
}

impl KdTree {
    /// Creates a new, untrained tree with the given leaf capacity.
    pub fn new(max_leaf_size: usize) -> Result<Self, KdTreeError> {
        if max_leaf_size == 0 {
            return Err(KdTreeError::InvalidParameter(
                "Max leaf size must be greater than 0.".to_string(),
            ));
        }
        Ok(Self::empty(max_leaf_size))
    }

    const fn empty(max_leaf_size: usize) -> Self {
        Self {
            root: None,
            max_leaf_size,
            dimension: 0,
            samples: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Builds the tree, replacing any previous contents.
    ///
    /// On error the previous tree is left untouched.
    pub fn build(&mut self, samples: Vec<Vec<f64>>, labels: Vec<Label>) -> Result<(), KdTreeError> {
        if samples.len() != labels.len() {
            return Err(KdTreeError::DimensionMismatch(format!(
                "Got {} labels for {} samples.",
                labels.len(),
                samples.len()
            )));
        }

        let (root, dimension) = build_kdtree(&samples, self.max_leaf_size)?;

        debug!(
            "Built KD-tree over {} samples ({} dimensions, height {}, {} leaves)",
            samples.len(),
            dimension,
            root.height(),
            root.num_leaves()
        );

        self.root = Some(root);
        self.dimension = dimension;
        self.samples = samples;
        self.labels = labels;
        Ok(())
    }

    /// Exact k-nearest-neighbor query, sorted by ascending distance.
    pub fn query<'a>(
        &'a self,
        sample: &[f64],
        k: usize,
        kernel: &dyn DistanceKernel,
    ) -> Result<Vec<Neighbor<'a>>, KdTreeError> {
        self.query_approximate(sample, k, 0.0, kernel)
    }

    /// k-nearest-neighbor query with a relaxed pruning bound.
    ///
    /// A far subtree is only visited when the distance to its splitting
    /// plane, inflated by `1 + buffer`, is within the current k-th best
    /// distance. `buffer == 0` is exact; larger values skip more of the tree
    /// on a best-effort basis with no recall guarantee.
    pub fn query_approximate<'a>(
        &'a self,
        sample: &[f64],
        k: usize,
        buffer: f64,
        kernel: &dyn DistanceKernel,
    ) -> Result<Vec<Neighbor<'a>>, KdTreeError> {
        let root = self.root.as_ref().ok_or_else(|| {
            KdTreeError::Untrained("Search called on an unbuilt KD-tree. Call build() first.".to_string())
        })?;
        if k == 0 {
            return Err(KdTreeError::InvalidParameter("k must be greater than 0.".to_string()));
        }
        if !(buffer.is_finite() && buffer >= 0.0) {
            return Err(KdTreeError::InvalidParameter(format!(
                "Neighborhood buffer must be a non-negative number, {} given.",
                buffer
            )));
        }
        if sample.len() != self.dimension {
            return Err(KdTreeError::DimensionMismatch(format!(
                "Query vector dimension {} does not match tree dimension {}.",
                sample.len(),
                self.dimension
            )));
        }
        if sample.iter().any(|v| !v.is_finite()) {
            return Err(KdTreeError::InvalidParameter(
                "Query vector contains a non-finite value.".to_string(),
            ));
        }

        let found = find_knn(root, &self.samples, sample, k, buffer, kernel)?;
        Ok(found
            .into_iter()
            .map(|(index, distance)| Neighbor {
                index,
                sample: &self.samples[index],
                label: &self.labels[index],
                distance,
            })
            .collect())
    }

    /// Height of the tree: 0 when untrained, 1 for a single leaf.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, KdNode::height)
    }

    pub const fn is_trained(&self) -> bool {
        self.root.is_some()
    }

    /// Dimensionality the tree was built for (0 when untrained).
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    pub const fn max_leaf_size(&self) -> usize {
        self.max_leaf_size
    }

    /// Number of indexed samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub const fn root(&self) -> Option<&KdNode> {
        self.root.as_ref()
    }

    pub fn samples(&self) -> &[Vec<f64>] {
        &self.samples
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
}

impl Default for KdTree {
    fn default() -> Self {
        Self::empty(DEFAULT_MAX_LEAF_SIZE)
    }
}
