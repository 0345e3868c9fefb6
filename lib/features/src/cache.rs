//! Explicit process-wide snapshot cache.
//!
//! Loading is always caller-invoked; there is no implicit load-on-first-use
//! global. The cache is keyed by source path and hands out shared references
//! to immutable snapshots, so concurrent queries never need a lock of their
//! own. Invalidation is explicit.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ahash::AHashMap;
use anirec_core::{FeatureMatrix, RecordTable, Result};
use parking_lot::RwLock;
use tracing::debug;

use crate::load::load_and_process;

/// One immutable (table, matrix) pair produced by a data load.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub table: RecordTable,
    pub matrix: FeatureMatrix,
}

/// Cache of loaded snapshots keyed by source path.
#[derive(Default)]
pub struct SnapshotCache {
    snapshots: RwLock<AHashMap<PathBuf, Arc<Snapshot>>>,
}

impl SnapshotCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the snapshot for `path`, loading and caching it on first use.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Arc<Snapshot>> {
        let path = path.as_ref();
        if let Some(snapshot) = self.snapshots.read().get(path) {
            return Ok(snapshot.clone());
        }

        let (table, matrix) = load_and_process(path)?;
        let snapshot = Arc::new(Snapshot { table, matrix });
        let mut snapshots = self.snapshots.write();
        // A racing loader may have beaten us; keep the existing entry so all
        // callers share one snapshot.
        let entry = snapshots
            .entry(path.to_path_buf())
            .or_insert_with(|| snapshot.clone());
        Ok(entry.clone())
    }

    /// Drop the cached snapshot for `path`. Returns whether one was present.
    pub fn invalidate(&self, path: impl AsRef<Path>) -> bool {
        let removed = self.snapshots.write().remove(path.as_ref()).is_some();
        if removed {
            debug!(path = %path.as_ref().display(), "invalidated snapshot");
        }
        removed
    }

    /// Drop every cached snapshot.
    pub fn clear(&self) {
        self.snapshots.write().clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"name,genre,type,episodes,rating\n\
              A,Action,TV,12,7.0\n\
              B,Drama,Movie,1,8.0\n",
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_caches_by_path() {
        let file = write_csv();
        let cache = SnapshotCache::new();

        let first = cache.load(file.path()).unwrap();
        let second = cache.load(file.path()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_invalidate_forces_reload() {
        let file = write_csv();
        let cache = SnapshotCache::new();

        let first = cache.load(file.path()).unwrap();
        assert!(cache.invalidate(file.path()));
        assert!(cache.is_empty());
        assert!(!cache.invalidate(file.path()));

        let reloaded = cache.load(file.path()).unwrap();
        assert!(!Arc::ptr_eq(&first, &reloaded));
        assert_eq!(first.table, reloaded.table);
    }

    #[test]
    fn test_load_missing_path_errors() {
        let cache = SnapshotCache::new();
        assert!(cache.load("/nonexistent/anime.csv").is_err());
        assert!(cache.is_empty());
    }
}
