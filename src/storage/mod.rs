//! Storage module for persisting harvested articles
//!
//! Articles land on the filesystem as a raw-text file plus a JSON metadata
//! file per identifier, inside an output directory prepared fresh for each
//! run.

mod assets;

pub use assets::FsStore;

use crate::article::ArticleRecord;
use crate::StorageError;
use std::path::Path;
use tracing::debug;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Trait for article persistence backends
///
/// The pipeline hands each finished record to a store keyed by its
/// identifier; the store decides the on-disk format.
pub trait ArticleStore {
    /// Persists one article record
    fn save(&self, record: &ArticleRecord) -> StorageResult<()>;
}

/// Ensures a clean, empty output directory
///
/// Removes the directory tree if it already exists, then creates it
/// fresh. This runs before any network activity touches the output
/// location.
pub fn prepare_environment(base: &Path) -> std::io::Result<()> {
    if base.exists() {
        std::fs::remove_dir_all(base)?;
    }
    std::fs::create_dir_all(base)?;
    debug!(path = %base.display(), "output directory prepared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_prepare_environment_creates_directory() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("articles");

        prepare_environment(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_prepare_environment_clears_stale_content() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("articles");
        std::fs::create_dir_all(&target).unwrap();
        std::fs::write(target.join("1_raw.txt"), "stale").unwrap();

        prepare_environment(&target).unwrap();
        assert!(target.is_dir());
        assert_eq!(std::fs::read_dir(&target).unwrap().count(), 0);
    }
}
