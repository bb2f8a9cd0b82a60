// src/core/indexing/vector/kdtree/builder.rs

//! Logic for building a KD-Tree from a set of points.

use log::trace;

use super::error::KdTreeError;
use super::tree::KdNode;

/// Builds the node structure for `samples`.
///
/// Leaves store indices into `samples`. Returns the root together with the
/// dimensionality shared by all samples.
///
/// # Errors
/// * `EmptyInput` if there are no samples.
/// * `DimensionMismatch` if samples have zero or differing dimensionality.
/// * `InvalidParameter` if `max_leaf_size` is 0 or a value is not finite.
pub fn build_kdtree(
    samples: &[Vec<f64>],
    max_leaf_size: usize,
) -> Result<(KdNode, usize), KdTreeError> {
    if max_leaf_size == 0 {
        return Err(KdTreeError::InvalidParameter(
            "Max leaf size must be greater than 0.".to_string(),
        ));
    }
    let Some(first) = samples.first() else {
        return Err(KdTreeError::EmptyInput("Cannot build a KD-tree from no samples.".to_string()));
    };
    let dimension = first.len();
    if dimension == 0 {
        return Err(KdTreeError::DimensionMismatch("Dimension cannot be 0.".to_string()));
    }

    for (idx, sample) in samples.iter().enumerate() {
        if sample.len() != dimension {
            return Err(KdTreeError::DimensionMismatch(format!(
                "Expected dimension {}, but sample {} has dimension {}.",
                dimension,
                idx,
                sample.len()
            )));
        }
        if sample.iter().any(|v| !v.is_finite()) {
            return Err(KdTreeError::InvalidParameter(format!(
                "Sample {} contains a non-finite value.",
                idx
            )));
        }
    }

    let mut indices: Vec<usize> = (0..samples.len()).collect();
    let root = build_recursive(samples, &mut indices, dimension, max_leaf_size);
    Ok((root, dimension))
}

/// Recursively partitions `indices` into a subtree.
fn build_recursive(
    samples: &[Vec<f64>],
    indices: &mut [usize],
    dimension: usize,
    max_leaf_size: usize,
) -> KdNode {
    if indices.len() <= max_leaf_size {
        return make_leaf(indices);
    }

    let (split_dim, spread) = widest_dimension(samples, indices, dimension);
    if spread <= 0.0 {
        // Every sample in the group is the same point; no threshold separates them.
        trace!("Keeping {} identical samples in one leaf", indices.len());
        return make_leaf(indices);
    }

    // Stable order by value, then by insertion order.
    indices.sort_unstable_by(|&a, &b| {
        samples[a][split_dim]
            .total_cmp(&samples[b][split_dim])
            .then(a.cmp(&b))
    });

    let (split_at, threshold) = median_split(samples, indices, split_dim);
    let (left_slice, right_slice) = indices.split_at_mut(split_at);

    let left = build_recursive(samples, left_slice, dimension, max_leaf_size);
    let right = build_recursive(samples, right_slice, dimension, max_leaf_size);

    KdNode::Branch {
        split_dim,
        threshold,
        left: Box::new(left),
        right: Box::new(right),
    }
}

fn make_leaf(indices: &[usize]) -> KdNode {
    let mut point_indices = indices.to_vec();
    point_indices.sort_unstable();
    KdNode::Leaf { point_indices }
}

/// Picks the dimension with the largest range; the lowest index wins ties.
fn widest_dimension(samples: &[Vec<f64>], indices: &[usize], dimension: usize) -> (usize, f64) {
    let mut best_dim = 0;
    let mut best_spread = f64::NEG_INFINITY;

    for d in 0..dimension {
        let (lo, hi) = indices.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &i| {
            let v = samples[i][d];
            (lo.min(v), hi.max(v))
        });
        let spread = hi - lo;
        if spread > best_spread {
            best_spread = spread;
            best_dim = d;
        }
    }

    (best_dim, best_spread)
}

/// Chooses where to cut a group already sorted along `split_dim`.
///
/// The left side aims for `ceil(n / 2)` samples with the threshold being the
/// largest value it holds. Values equal to the threshold must all stay on the
/// left, so runs of duplicates can shift the cut; if the run reaches the end
/// of the group the cut moves to just before the run instead.
fn median_split(samples: &[Vec<f64>], sorted: &[usize], split_dim: usize) -> (usize, f64) {
    let value = |pos: usize| samples[sorted[pos]][split_dim];
    let n = sorted.len();
    let median = value((n + 1) / 2 - 1);

    let split_at = sorted.partition_point(|&i| samples[i][split_dim] <= median);
    if split_at < n {
        return (split_at, median);
    }

    // The caller guarantees a positive spread, so some value is below the median.
    let split_at = sorted.partition_point(|&i| samples[i][split_dim] < median);
    (split_at, value(split_at - 1))
}
