//! k-d tree construction and nearest-neighbor search.
//!
//! # Representation
//!
//! The tree is stored as one contiguous buffer of points arranged in
//! recursive median-partition order; nodes are implicit index ranges
//! rather than boxed structs. For the sub-range `[lo, hi)` reached at
//! depth `d`, the pivot sits at `lo + (hi - lo) / 2`, the left child is
//! the sub-range before it, the right child the sub-range after it, and
//! the split axis is `d mod 3`, cycling L -> a -> b -> L.
//!
//! This keeps construction allocation-free beyond the input vector
//! (sub-ranges are sorted in place) and makes the partition invariant
//! directly checkable over the buffer.
//!
//! # Complexity
//!
//! Construction is O(n log^2 n): log n levels, each stable-sorting its
//! sub-ranges. Queries visit O(log n) nodes in expectation for
//! well-distributed catalogs, O(n) in the worst case when pruning never
//! triggers. Both recurse to tree height, so stack depth is O(log n) for
//! balanced input; pathological inputs push that toward O(n), which is
//! accepted for catalog-scale data.

use crate::color::CieLab;

use super::error::TreeError;
use super::point::LabPoint;

/// An immutable 3-dimensional k-d tree over catalog points.
///
/// Built once from a non-empty catalog, then read-only for its entire
/// lifetime; no insertion or deletion is defined. Because queries never
/// mutate the tree, concurrent independent lookups through shared
/// references are safe once construction has completed.
///
/// # Example
///
/// ```
/// use lab_kdtree::{CieLab, KdTree, LabPoint, Srgb};
///
/// let catalog = vec![
///     LabPoint::new(CieLab::from("#000000".parse::<Srgb>().unwrap()), "#000000"),
///     LabPoint::new(CieLab::from("#FFFFFF".parse::<Srgb>().unwrap()), "#FFFFFF"),
///     LabPoint::new(CieLab::from("#FF0000".parse::<Srgb>().unwrap()), "#FF0000"),
/// ];
/// let tree = KdTree::build(catalog).unwrap();
///
/// let query = CieLab::from("#FAFAFA".parse::<Srgb>().unwrap());
/// assert_eq!(tree.nearest(query).unwrap().label, "#FFFFFF");
/// ```
#[derive(Debug, Clone)]
pub struct KdTree {
    points: Vec<LabPoint>,
}

impl KdTree {
    /// Build an index from a catalog of points.
    ///
    /// Deterministic for a fixed input order: sub-ranges are stable-sorted
    /// per axis, so equal axis values preserve their relative input order
    /// and repeated builds produce identical trees.
    ///
    /// # Errors
    ///
    /// - [`TreeError::EmptyInput`] if `points` is empty
    /// - [`TreeError::MalformedCoordinate`] if any point has a NaN or
    ///   infinite component
    pub fn build(points: Vec<LabPoint>) -> Result<Self, TreeError> {
        if points.is_empty() {
            return Err(TreeError::EmptyInput);
        }
        if let Some(bad) = points.iter().find(|p| !p.lab.is_finite()) {
            return Err(TreeError::MalformedCoordinate {
                label: bad.label.clone(),
            });
        }

        let mut points = points;
        partition(&mut points, 0);
        Ok(Self { points })
    }

    /// Number of points in the index.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the index holds no points.
    ///
    /// Note: This always returns `false` since empty catalogs are rejected
    /// at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All stored points, in partition order.
    ///
    /// This is the export half of the flat-sequence persistence path:
    /// feeding the returned slice back through [`KdTree::build`] yields an
    /// equivalent index without ever serializing tree structure.
    #[inline]
    pub fn points(&self) -> &[LabPoint] {
        &self.points
    }

    /// Find the catalog point nearest to `query` under Euclidean distance
    /// in CIELAB space.
    ///
    /// Returns a reference into the stored catalog, never a copy. Among
    /// equidistant candidates the first one reached in the fixed traversal
    /// order wins (the running best is only replaced on a strictly smaller
    /// distance), so the result is deterministic for a fixed tree and
    /// query.
    ///
    /// # Errors
    ///
    /// [`TreeError::MalformedQuery`] if `query` has a NaN or infinite
    /// component.
    pub fn nearest(&self, query: CieLab) -> Result<&LabPoint, TreeError> {
        if !query.is_finite() {
            return Err(TreeError::MalformedQuery);
        }

        let mut best = &self.points[self.points.len() / 2];
        let mut best_dist = f64::INFINITY;
        search(&self.points, query, 0, &mut best, &mut best_dist);
        Ok(best)
    }
}

/// Recursively arrange `range` into median-partition order.
///
/// Establishes the split invariant: after the stable sort on this depth's
/// axis, everything left of the median is <= the pivot on that axis and
/// everything right of it is >= the pivot. Deeper recursion only reorders
/// within the two sub-ranges, so the invariant survives at every level.
fn partition(range: &mut [LabPoint], depth: usize) {
    if range.len() < 2 {
        return;
    }

    let axis = depth % 3;
    range.sort_by(|p, q| p.lab.component(axis).total_cmp(&q.lab.component(axis)));

    let mid = range.len() / 2;
    let (left, rest) = range.split_at_mut(mid);
    partition(left, depth + 1);
    partition(&mut rest[1..], depth + 1);
}

/// Depth-first nearest-neighbor descent with hyperplane pruning.
///
/// The child on the query's side of the splitting plane is searched first
/// (query below the pivot on this axis goes left, ties go right, matching
/// the >= half of the split rule). The far child holds only points at
/// least `|query - pivot|` away along this axis, so it is skipped entirely
/// unless that gap is still below the best distance found so far.
fn search<'a>(
    range: &'a [LabPoint],
    query: CieLab,
    depth: usize,
    best: &mut &'a LabPoint,
    best_dist: &mut f64,
) {
    if range.is_empty() {
        return;
    }

    let mid = range.len() / 2;
    let pivot = &range[mid];

    let dist = pivot.lab.distance(query);
    if dist < *best_dist {
        *best_dist = dist;
        *best = pivot;
    }

    let axis = depth % 3;
    let plane_gap = query.component(axis) - pivot.lab.component(axis);
    let (near, far) = if plane_gap < 0.0 {
        (&range[..mid], &range[mid + 1..])
    } else {
        (&range[mid + 1..], &range[..mid])
    };

    search(near, query, depth + 1, best, best_dist);
    if plane_gap.abs() < *best_dist {
        search(far, query, depth + 1, best, best_dist);
    }
}
