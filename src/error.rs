//! Error types for the docsync synchronization tool.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a synchronization run.
///
/// Missing files and unreadable comparison candidates are handled inline by
/// the reconciler (they force a copy or yield nothing to do); only failures
/// that leave the target tree in doubt surface here.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to copy {path:?}: {source}")]
    Copy {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to delete {path:?}: {source}")]
    Delete {
        path: PathBuf,
        source: std::io::Error,
    },
}
