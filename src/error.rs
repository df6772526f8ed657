//! Error types for treemenu
//!
//! Uses `thiserror` for library errors. Navigation errors are returned to the
//! caller of the failing operation and never retried or logged here.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for treemenu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for treemenu operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// `choose` was given an identifier that is not in the index
    #[error("node with id {id} not found")]
    NodeNotFound { id: String },

    /// `go_back` was called while already at the top level
    #[error("you haven't chosen any node")]
    NoSelection,

    /// The menu definition contains a cycle along one descent path
    #[error("circular menu reference detected: {}", cycle.join(" -> "))]
    CircularReference { cycle: Vec<String> },

    /// The cursor points at a node that is no longer in the index
    #[error("current node with id {id} not found in the index")]
    InternalConsistency { id: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Menu definition file could not be parsed
    #[error("invalid menu file {file}: {message}")]
    InvalidMenuFile { file: PathBuf, message: String },

    /// User config file could not be parsed
    #[error("invalid config file {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Menu definition file has an extension we don't know how to read
    #[error("unsupported menu file format: {file} (expected .toml, .json, .yaml or .yml)")]
    UnsupportedFormat { file: PathBuf },
}

impl MenuError {
    /// Errors a caller is expected to recover from (re-prompt, stay put).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, MenuError::NodeNotFound { .. } | MenuError::NoSelection)
    }
}
