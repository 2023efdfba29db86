//! Error types for sevendays.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can stop a sevendays run.
///
/// Malformed calendar lines are never reported through this type; they are
/// dropped by the line classifier.
#[derive(Debug, Error)]
pub enum SevenDaysError {
    /// The calendar file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON serialization failed.
    #[error("serialization error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A command-line argument was missing or invalid.
    #[error("{0}")]
    InvalidArgument(String),
}

impl SevenDaysError {
    /// Wrap an I/O error with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
