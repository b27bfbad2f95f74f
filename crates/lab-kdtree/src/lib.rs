//! lab-kdtree: Exact nearest-color lookups in CIELAB space
//!
//! This library converts sRGB colors to CIELAB (D65, 2° observer) and
//! indexes a catalog of them in a 3-dimensional k-d tree for exact
//! nearest-neighbor queries under Euclidean distance.
//!
//! # Quick Start
//!
//! [`KdTree::build`] indexes a catalog; [`KdTree::nearest`] queries it:
//!
//! ```
//! use lab_kdtree::{CieLab, KdTree, LabPoint, Srgb};
//!
//! let catalog: Vec<LabPoint> = ["#000000", "#FFFFFF", "#FF0000"]
//!     .iter()
//!     .map(|hex| {
//!         let srgb: Srgb = hex.parse().unwrap();
//!         LabPoint::new(CieLab::from(srgb), *hex)
//!     })
//!     .collect();
//!
//! let tree = KdTree::build(catalog).unwrap();
//!
//! let query: Srgb = "#FAFAFA".parse().unwrap();
//! let nearest = tree.nearest(CieLab::from(query)).unwrap();
//! assert_eq!(nearest.label, "#FFFFFF");
//! ```
//!
//! # Color Spaces
//!
//! The library enforces type-safe color handling:
//!
//! - [`Srgb`]: Standard gamma-corrected sRGB for input (hex parsing)
//! - [`CieLab`]: Perceptually motivated space the index operates in
//!
//! # Determinism
//!
//! Construction and queries are fully deterministic: the same catalog in
//! the same order always yields the same tree, and ties in distance always
//! resolve to the same entry.

pub mod color;
pub mod tree;

#[cfg(test)]
mod domain_tests;

pub use color::{CieLab, ParseColorError, Srgb};
pub use tree::{KdTree, LabPoint, TreeError};
