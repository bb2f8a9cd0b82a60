// src/core/indexing/vector/kdtree/tests/test_builder.rs

use crate::core::indexing::vector::kdtree::builder::build_kdtree;
use crate::core::indexing::vector::kdtree::error::KdTreeError;
use crate::core::indexing::vector::kdtree::tree::{KdNode, KdTree, DEFAULT_MAX_LEAF_SIZE};

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("l{}", i)).collect()
}

fn grid(n: usize) -> Vec<Vec<f64>> {
    (0..n).map(|i| vec![i as f64, (i * 2) as f64]).collect()
}

/// Walks the tree checking the split invariant and leaf capacity, and
/// returns every index found in the leaves.
fn collect_checked(node: &KdNode, samples: &[Vec<f64>], max_leaf_size: usize) -> Vec<usize> {
    match node {
        KdNode::Leaf { point_indices } => {
            assert!(point_indices.len() <= max_leaf_size, "leaf over capacity");
            point_indices.clone()
        }
        KdNode::Branch { split_dim, threshold, left, right } => {
            let left_indices = collect_checked(left, samples, max_leaf_size);
            let right_indices = collect_checked(right, samples, max_leaf_size);
            assert!(!left_indices.is_empty() && !right_indices.is_empty());
            for &i in &left_indices {
                assert!(samples[i][*split_dim] <= *threshold);
            }
            for &i in &right_indices {
                assert!(samples[i][*split_dim] > *threshold);
            }
            left_indices.into_iter().chain(right_indices).collect()
        }
    }
}

#[test]
fn test_build_empty() {
    let mut tree = KdTree::new(4).unwrap();
    let result = tree.build(Vec::new(), Vec::new());
    assert!(matches!(result, Err(KdTreeError::EmptyInput(_))));
    assert!(!tree.is_trained());
    assert_eq!(tree.height(), 0);
}

#[test]
fn test_zero_leaf_size_rejected() {
    assert!(matches!(KdTree::new(0), Err(KdTreeError::InvalidParameter(_))));
    assert!(matches!(build_kdtree(&grid(3), 0), Err(KdTreeError::InvalidParameter(_))));
}

#[test]
fn test_default_tree_matches_new() {
    let tree = KdTree::default();
    let fresh = KdTree::new(DEFAULT_MAX_LEAF_SIZE).unwrap();
    assert_eq!(tree.max_leaf_size(), fresh.max_leaf_size());
    assert!(!tree.is_trained());
    assert!(tree.is_empty());
    assert_eq!(tree.dimension(), 0);
    assert_eq!(tree.height(), 0);
}

#[test]
fn test_build_single_point() {
    let mut tree = KdTree::new(4).unwrap();
    tree.build(vec![vec![1.0, 2.0]], labels(1)).unwrap();

    assert!(tree.is_trained());
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.dimension(), 2);
    assert_eq!(tree.root(), Some(&KdNode::Leaf { point_indices: vec![0] }));
}

#[test]
fn test_build_multiple_points_leaf() {
    let (root, dimension) = build_kdtree(&grid(5), 5).unwrap();
    assert_eq!(dimension, 2);
    assert_eq!(root, KdNode::Leaf { point_indices: vec![0, 1, 2, 3, 4] });
}

#[test]
fn test_build_creates_branch() {
    let (root, _) = build_kdtree(&grid(17), 16).unwrap();
    match root {
        KdNode::Branch { .. } => {}
        KdNode::Leaf { .. } => panic!("Root should be a branch for 17 points."),
    }
}

#[test]
fn test_dimension_mismatch_error() {
    let samples = vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]];
    let result = build_kdtree(&samples, 4);
    assert!(matches!(result, Err(KdTreeError::DimensionMismatch(_))));
}

#[test]
fn test_build_dimension_zero_error() {
    let samples = vec![Vec::new(), Vec::new()];
    assert!(matches!(build_kdtree(&samples, 4), Err(KdTreeError::DimensionMismatch(_))));
}

#[test]
fn test_non_finite_rejected() {
    let samples = vec![vec![1.0, f64::NAN]];
    assert!(matches!(build_kdtree(&samples, 4), Err(KdTreeError::InvalidParameter(_))));
    let samples = vec![vec![f64::INFINITY, 0.0]];
    assert!(matches!(build_kdtree(&samples, 4), Err(KdTreeError::InvalidParameter(_))));
}

#[test]
fn test_label_count_mismatch() {
    let mut tree = KdTree::new(4).unwrap();
    let result = tree.build(grid(3), labels(2));
    assert!(matches!(result, Err(KdTreeError::DimensionMismatch(_))));
}

#[test]
fn test_simple_split_on_widest_dimension() {
    // x spans 7, y spans 6, so the root splits on x at its median.
    let samples = vec![
        vec![2.0, 3.0], // 0
        vec![5.0, 4.0], // 1
        vec![9.0, 6.0], // 2
        vec![4.0, 7.0], // 3
        vec![8.0, 1.0], // 4
        vec![7.0, 2.0], // 5
    ];
    let (root, _) = build_kdtree(&samples, 3).unwrap();

    match root {
        KdNode::Branch { split_dim, threshold, left, right } => {
            assert_eq!(split_dim, 0);
            assert_eq!(threshold, 5.0);
            assert_eq!(*left, KdNode::Leaf { point_indices: vec![0, 1, 3] });
            assert_eq!(*right, KdNode::Leaf { point_indices: vec![2, 4, 5] });
        }
        KdNode::Leaf { .. } => panic!("Root should be a branch with max leaf size 3."),
    }
}

#[test]
fn test_split_prefers_wider_second_dimension() {
    let samples: Vec<Vec<f64>> = (0..10).map(|i| vec![f64::from(i % 2), f64::from(i) * 10.0]).collect();
    let (root, _) = build_kdtree(&samples, 2).unwrap();
    match root {
        KdNode::Branch { split_dim, .. } => assert_eq!(split_dim, 1),
        KdNode::Leaf { .. } => panic!("expected a branch"),
    }
}

#[test]
fn test_invariants_and_balanced_height() {
    for (n, max_leaf_size) in [(8, 1), (8, 2), (100, 20), (300, 20), (1000, 7)] {
        // Coordinate-wise permutations of 0..n, so every split is an exact halving.
        let samples: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                let x = ((i * 7919) % n) as f64;
                let y = ((i * 31) % n) as f64 * 0.5;
                vec![x, y]
            })
            .collect();
        let mut tree = KdTree::new(max_leaf_size).unwrap();
        tree.build(samples.clone(), labels(n)).unwrap();

        let root = tree.root().unwrap();
        let mut indices = collect_checked(root, &samples, max_leaf_size);
        indices.sort_unstable();
        assert_eq!(indices, (0..n).collect::<Vec<_>>());

        let leaves = (n + max_leaf_size - 1) / max_leaf_size;
        let expected = (leaves as f64).log2().ceil() as usize + 1;
        assert_eq!(tree.height(), expected, "n = {}, max leaf size = {}", n, max_leaf_size);
    }
}

#[test]
fn test_duplicate_values_keep_invariant() {
    let mut samples = vec![vec![5.0, 0.0]; 12];
    samples.extend((0..6).map(|i| vec![f64::from(i), 1.0]));
    let (root, _) = build_kdtree(&samples, 3).unwrap();
    let mut indices = collect_checked(&root, &samples, samples.len());
    indices.sort_unstable();
    assert_eq!(indices, (0..samples.len()).collect::<Vec<_>>());
}

#[test]
fn test_identical_points_share_one_leaf() {
    let samples = vec![vec![1.0, 1.0]; 10];
    let (root, _) = build_kdtree(&samples, 3).unwrap();
    assert_eq!(root, KdNode::Leaf { point_indices: (0..10).collect() });
}

#[test]
fn test_build_is_deterministic() {
    let samples: Vec<Vec<f64>> = (0..200).map(|i| vec![((i * 7) % 13) as f64, ((i * 11) % 17) as f64]).collect();
    let (first, _) = build_kdtree(&samples, 4).unwrap();
    let (second, _) = build_kdtree(&samples, 4).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_failed_rebuild_keeps_previous_tree() {
    let mut tree = KdTree::new(2).unwrap();
    tree.build(grid(10), labels(10)).unwrap();
    let height = tree.height();

    assert!(tree.build(vec![vec![1.0], vec![1.0, 2.0]], labels(2)).is_err());
    assert!(tree.is_trained());
    assert_eq!(tree.height(), height);
    assert_eq!(tree.len(), 10);
    assert_eq!(tree.dimension(), 2);
}

#[test]
fn test_rebuild_replaces_tree() {
    let mut tree = KdTree::new(2).unwrap();
    tree.build(grid(10), labels(10)).unwrap();
    tree.build(vec![vec![1.0, 2.0, 3.0]], labels(1)).unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.dimension(), 3);
    assert_eq!(tree.height(), 1);
}
