//! The spatial index: an axis-cycling k-d tree over catalog points.
//!
//! [`KdTree::build`] partitions a catalog of [`LabPoint`]s by repeated
//! median selection; [`KdTree::nearest`] answers exact nearest-neighbor
//! queries with hyperplane pruning.

mod error;
mod kdtree;
mod point;

pub use error::TreeError;
pub use kdtree::KdTree;
pub use point::LabPoint;
