mod prefix;


pub use prefix::PrefixValidator;

use crate::segmenter::SegmentError;
use std::fs;
use std::path::{Path, PathBuf};

/// Output directory holding one file per fragment, named `<prefix><n>`
#[derive(Debug, Clone)]
pub struct FragmentStore {
    dir: PathBuf,
}

impl FragmentStore {
    /// Use `dir` as a store, creating it if missing. Existing fragments are kept.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, SegmentError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| SegmentError::ResetStore {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Remove `dir` if it exists and recreate it empty
    pub fn reset(dir: impl Into<PathBuf>) -> Result<Self, SegmentError> {
        let dir = dir.into();
        if dir.exists() {
            tracing::debug!("Removing existing fragment store {}", dir.display());
            fs::remove_dir_all(&dir).map_err(|source| SegmentError::ResetStore {
                path: dir.clone(),
                source,
            })?;
        }
        fs::create_dir_all(&dir).map_err(|source| SegmentError::ResetStore {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of fragment `index` for `prefix`, e.g. `store/s12`
    pub fn fragment_path(&self, prefix: &str, index: usize) -> PathBuf {
        self.dir.join(format!("{}{}", prefix, index))
    }
}
