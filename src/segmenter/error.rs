use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SegmentError {
    #[error("Failed to read source {}: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create fragment {}: {source}", path.display())]
    CreateFragment {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write fragment {}: {source}", path.display())]
    WriteFragment {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to reset fragment store {}: {source}", path.display())]
    ResetStore {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid fragment prefix: {0}")]
    InvalidPrefix(String),
}
