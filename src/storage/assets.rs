//! Filesystem article store
//!
//! Each record becomes two files under the base directory: `{id}_raw.txt`
//! with the body text and `{id}_meta.json` with the metadata.

use crate::article::ArticleRecord;
use crate::storage::{ArticleStore, StorageResult};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Stores article records under a base directory
#[derive(Debug, Clone)]
pub struct FsStore {
    base: PathBuf,
}

impl FsStore {
    /// Creates a store rooted at the given directory
    ///
    /// The directory is expected to exist; `prepare_environment` sets it
    /// up at the start of a run.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn raw_path(&self, article_id: usize) -> PathBuf {
        self.base.join(format!("{article_id}_raw.txt"))
    }

    fn meta_path(&self, article_id: usize) -> PathBuf {
        self.base.join(format!("{article_id}_meta.json"))
    }
}

impl ArticleStore for FsStore {
    fn save(&self, record: &ArticleRecord) -> StorageResult<()> {
        fs::write(self.raw_path(record.article_id), &record.text)?;

        let meta = serde_json::to_string_pretty(record)?;
        fs::write(self.meta_path(record.article_id), meta)?;

        debug!(article_id = record.article_id, "article saved");
        Ok(())
    }
}
