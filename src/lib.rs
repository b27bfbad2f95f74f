//! Labmatch - nearest-color lookup over a hex catalog in CIELAB space.
//!
//! This library exposes modules for integration testing.

pub mod cache;
pub mod catalog;
pub mod error;
