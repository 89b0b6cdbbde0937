//! Error types for a restaurant run.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::pool::PoolError;

/// Underlying cause of a failed read or write.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON format: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum RestaurantError {
    /// An input file is missing or does not hold the expected JSON array.
    #[error("Failed to load data from file {}: {source}", .path.display())]
    DataLoad {
        path: PathBuf,
        #[source]
        source: DataError,
    },

    /// The output file could not be written.
    #[error("Failed to write data to file {}: {source}", .path.display())]
    DataWrite {
        path: PathBuf,
        #[source]
        source: DataError,
    },

    /// The worker pool could not be started or accept work.
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] PoolError),
}

impl RestaurantError {
    /// The file this error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            RestaurantError::DataLoad { path, .. } | RestaurantError::DataWrite { path, .. } => {
                Some(path.as_path())
            }
            RestaurantError::Dispatch(_) => None,
        }
    }
}
