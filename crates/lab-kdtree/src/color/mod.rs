//! Color types and conversion utilities
//!
//! This module provides type-safe color handling with compile-time
//! distinction between the storage color space and the perceptual one.
//!
//! # Color Spaces
//!
//! - **sRGB**: The standard color space catalogs and queries arrive in. Use for I/O.
//! - **CieLab**: Perceptually uniform coordinates. Everything the index stores and compares.
//!
//! # Example
//!
//! ```
//! use lab_kdtree::{CieLab, Srgb};
//!
//! // Parse a catalog entry (sRGB)
//! let srgb: Srgb = "#FF0000".parse().unwrap();
//!
//! // Convert to CIELAB for indexing and distance math
//! let lab = CieLab::from(srgb);
//! assert!(lab.l > 50.0 && lab.l < 56.0);
//! ```

mod error;
mod lab;
mod srgb;

pub use error::ParseColorError;
pub use lab::CieLab;
pub use srgb::Srgb;
