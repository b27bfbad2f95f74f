//! Catalog point type

use crate::color::CieLab;

/// A catalog entry: an immutable CIELAB coordinate plus the opaque label
/// it was loaded under (typically the original hex code).
///
/// Distinct entries may share identical coordinates; the tree keeps all of
/// them and [`KdTree::nearest`](super::KdTree::nearest) resolves ties
/// deterministically.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabPoint {
    /// Position in CIELAB space.
    pub lab: CieLab,
    /// Opaque identifier reported back from queries.
    pub label: String,
}

impl LabPoint {
    /// Create a new catalog point.
    ///
    /// # Example
    ///
    /// ```
    /// use lab_kdtree::{CieLab, LabPoint, Srgb};
    ///
    /// let srgb: Srgb = "#FF0000".parse().unwrap();
    /// let point = LabPoint::new(CieLab::from(srgb), "#FF0000");
    /// assert_eq!(point.label, "#FF0000");
    /// ```
    pub fn new(lab: CieLab, label: impl Into<String>) -> Self {
        Self {
            lab,
            label: label.into(),
        }
    }
}
