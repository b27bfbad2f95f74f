use std::path::PathBuf;

use lab_kdtree::{ParseColorError, TreeError};
use thiserror::Error;

/// Errors from reading and parsing a hex color catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid color on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseColorError,
    },

    #[error("Catalog contains no color entries")]
    Empty,
}

/// Errors from saving and loading the on-disk index cache.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode index: {0}")]
    Encode(#[source] bincode::Error),

    #[error("Failed to decode index: {0}")]
    Decode(#[source] bincode::Error),

    #[error("Not a labmatch index file (bad magic bytes)")]
    BadMagic,

    #[error("Unsupported index format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Index error: {0}")]
    Index(#[from] TreeError),
}
