pub mod vector;

pub use vector::kdtree::KdTree;
