//! On-disk index cache.
//!
//! The cache stores the index's point buffer in its partitioned order,
//! never the tree structure itself: loading re-runs construction on the
//! saved buffer, which is cheap and keeps the file format independent of
//! the in-memory representation. The file is four magic bytes followed by
//! a bincode-encoded [`IndexBlob`].

use std::path::Path;

use lab_kdtree::{KdTree, LabPoint};
use serde::{Deserialize, Serialize};

use crate::error::CacheError;

const MAGIC: [u8; 4] = *b"LMIX";
const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct IndexBlob {
    version: u32,
    points: Vec<LabPoint>,
}

/// Write an index to `path`, replacing any existing file.
pub fn save_index(path: &Path, tree: &KdTree) -> Result<(), CacheError> {
    let blob = IndexBlob {
        version: FORMAT_VERSION,
        points: tree.points().to_vec(),
    };
    let mut bytes = MAGIC.to_vec();
    bincode::serialize_into(&mut bytes, &blob).map_err(CacheError::Encode)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Read an index back from `path`.
pub fn load_index(path: &Path) -> Result<KdTree, CacheError> {
    let bytes = std::fs::read(path)?;
    let payload = bytes
        .strip_prefix(&MAGIC)
        .ok_or(CacheError::BadMagic)?;
    let blob: IndexBlob = bincode::deserialize(payload).map_err(CacheError::Decode)?;
    if blob.version != FORMAT_VERSION {
        return Err(CacheError::UnsupportedVersion {
            found: blob.version,
            expected: FORMAT_VERSION,
        });
    }
    Ok(KdTree::build(blob.points)?)
}
