// src/core/indexing/vector/kdtree/search.rs

//! Logic for performing K-Nearest Neighbor (KNN) search in a KD-Tree.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::trace;

use super::error::KdTreeError;
use super::tree::KdNode;
use crate::core::types::Label;
use crate::core::vector::distance::DistanceKernel;

/// One result of a k-nearest-neighbor query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a> {
    /// Position of the sample in the build order.
    pub index: usize,
    pub sample: &'a [f64],
    pub label: &'a Label,
    pub distance: f64,
}

/// Candidate held in the bounded result set.
///
/// Ordered by distance, then by sample index, so that the heap's maximum is
/// the candidate to evict: the farthest one, and among equally far ones the
/// latest inserted.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    distance: f64,
    index: usize,
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.index.cmp(&other.index))
    }
}

/// Keeps the `capacity` best candidates seen so far.
#[derive(Debug)]
struct CandidateSet {
    heap: BinaryHeap<Candidate>,
    capacity: usize,
}

impl CandidateSet {
    fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity + 1),
            capacity,
        }
    }

    fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Distance of the worst retained candidate, or infinity until full.
    fn worst_distance(&self) -> f64 {
        if self.is_full() {
            self.heap.peek().map_or(f64::INFINITY, |c| c.distance)
        } else {
            f64::INFINITY
        }
    }

    fn offer(&mut self, candidate: Candidate) {
        if !self.is_full() {
            self.heap.push(candidate);
            return;
        }
        if let Some(mut worst) = self.heap.peek_mut() {
            // Overwriting the top re-sifts the heap when `worst` is dropped.
            if candidate < *worst {
                *worst = candidate;
            }
        }
    }

    fn into_sorted(self) -> Vec<(usize, f64)> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|c| (c.index, c.distance))
            .collect()
    }
}

/// Traversal counters of one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub leaves_visited: usize,
    pub distances_computed: usize,
    pub subtrees_pruned: usize,
}

/// Performs a K-Nearest Neighbor search from `root`.
///
/// `samples` is the store the tree was built over. Returns
/// `(sample_index, distance)` pairs sorted by ascending distance, ties by
/// ascending index. Fewer than `k` pairs come back only when the tree holds
/// fewer than `k` samples.
pub fn find_knn(
    root: &KdNode,
    samples: &[Vec<f64>],
    query: &[f64],
    k: usize,
    buffer: f64,
    kernel: &dyn DistanceKernel,
) -> Result<Vec<(usize, f64)>, KdTreeError> {
    find_knn_with_stats(root, samples, query, k, buffer, kernel).map(|(found, _)| found)
}

/// Like [`find_knn`], also returning how much of the tree was traversed.
pub fn find_knn_with_stats(
    root: &KdNode,
    samples: &[Vec<f64>],
    query: &[f64],
    k: usize,
    buffer: f64,
    kernel: &dyn DistanceKernel,
) -> Result<(Vec<(usize, f64)>, SearchStats), KdTreeError> {
    let mut best = CandidateSet::new(k);
    let mut stats = SearchStats::default();
    let inflation = 1.0 + buffer;

    search_recursive(root, samples, query, inflation, kernel, &mut best, &mut stats)?;

    trace!(
        "KNN search (k = {}, buffer = {}): {} leaves, {} distances, {} subtrees pruned",
        k,
        buffer,
        stats.leaves_visited,
        stats.distances_computed,
        stats.subtrees_pruned
    );

    Ok((best.into_sorted(), stats))
}

fn search_recursive(
    node: &KdNode,
    samples: &[Vec<f64>],
    query: &[f64],
    inflation: f64,
    kernel: &dyn DistanceKernel,
    best: &mut CandidateSet,
    stats: &mut SearchStats,
) -> Result<(), KdTreeError> {
    match node {
        KdNode::Leaf { point_indices } => {
            stats.leaves_visited += 1;
            for &index in point_indices {
                let point = samples.get(index).ok_or_else(|| {
                    KdTreeError::InternalError(format!(
                        "Point index {} from leaf is out of bounds for {} samples",
                        index,
                        samples.len()
                    ))
                })?;
                let distance = kernel
                    .compute(query, point)
                    .map_err(|e| KdTreeError::InternalError(e.to_string()))?;
                stats.distances_computed += 1;
                best.offer(Candidate { distance, index });
            }
        }
        KdNode::Branch { split_dim, threshold, left, right } => {
            let coord = query[*split_dim];
            let (near, far) = if coord <= *threshold {
                (left, right)
            } else {
                (right, left)
            };

            search_recursive(near, samples, query, inflation, kernel, best, stats)?;

            // Points across the plane are at least this far away under any kernel we accept.
            let plane_distance = (coord - *threshold).abs();
            if !best.is_full() || plane_distance * inflation <= best.worst_distance() {
                search_recursive(far, samples, query, inflation, kernel, best, stats)?;
            } else {
                stats.subtrees_pruned += 1;
            }
        }
    }
    Ok(())
}

/// Exhaustive k-nearest-neighbor scan over `samples`.
///
/// Same ordering and tie-break as [`find_knn`].
pub fn find_knn_linear(
    samples: &[Vec<f64>],
    query: &[f64],
    k: usize,
    kernel: &dyn DistanceKernel,
) -> Result<Vec<(usize, f64)>, KdTreeError> {
    if k == 0 {
        return Err(KdTreeError::InvalidParameter("k must be greater than 0.".to_string()));
    }
    let mut best = CandidateSet::new(k);
    for (index, point) in samples.iter().enumerate() {
        let distance = kernel
            .compute(query, point)
            .map_err(|e| KdTreeError::DimensionMismatch(e.to_string()))?;
        best.offer(Candidate { distance, index });
    }
    Ok(best.into_sorted())
}
