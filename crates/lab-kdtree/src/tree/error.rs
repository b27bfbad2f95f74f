//! Error types for index construction and queries

use std::fmt;

/// Error type for building and querying the spatial index.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeError {
    /// Construction was given zero points; the nearest-neighbor contract
    /// is meaningless without at least one catalog entry.
    EmptyInput,
    /// A catalog entry has a NaN or infinite CIELAB component. Such values
    /// break the ordering used for median splits, so construction rejects
    /// them instead of building an incorrect tree.
    MalformedCoordinate {
        /// Label of the offending entry
        label: String,
    },
    /// The query coordinate has a NaN or infinite component.
    MalformedQuery,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::EmptyInput => {
                write!(f, "cannot build an index from zero points")
            }
            TreeError::MalformedCoordinate { label } => {
                write!(
                    f,
                    "catalog entry {:?} has a non-finite CIELAB coordinate",
                    label
                )
            }
            TreeError::MalformedQuery => {
                write!(f, "query has a non-finite CIELAB coordinate")
            }
        }
    }
}

impl std::error::Error for TreeError {}
