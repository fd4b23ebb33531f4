//! Error types for the CLI

use std::path::PathBuf;

use pocket_calculator::prelude::{InputError, SnapshotError};
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A key sequence could not be parsed
    #[error("Invalid keys: {0}")]
    Input(#[from] InputError),

    /// Snapshot encoding error
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// JSON rendering error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The persisted state file is unreadable
    #[error("Invalid state file {}: {source}", .path.display())]
    State {
        /// State file path
        path: PathBuf,
        /// Underlying snapshot error
        #[source]
        source: SnapshotError,
    },

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a state file error
    #[must_use]
    pub fn state(path: impl Into<PathBuf>, source: SnapshotError) -> Self {
        Self::State {
            path: path.into(),
            source,
        }
    }
}
