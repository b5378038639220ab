//! Storage error types

use std::path::PathBuf;

use thiserror::Error;

use domain_analytics::AnalyticsError;

/// Errors that can occur while loading the dataset from disk
#[derive(Debug, Error)]
pub enum StoreError {
    /// The configured data directory does not exist
    #[error("Data directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// A data file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file is not a JSON array of the expected records
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The records parsed but break a dataset invariant
    #[error("Invalid dataset: {0}")]
    Dataset(#[from] AnalyticsError),
}

impl StoreError {
    /// Path of the file involved, when the error concerns a single file
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            StoreError::MissingDirectory(path) => Some(path.as_path()),
            StoreError::Io { path, .. } | StoreError::Parse { path, .. } => Some(path.as_path()),
            StoreError::Dataset(_) => None,
        }
    }
}
