//! Error types for cfgtree.
//!
//! Uses thiserror for derive macros. Absence and type mismatch on reads are
//! never errors (they surface as `None`); only contract violations, index
//! failures on list mutation and I/O or JSON problems end up here.

use crate::exit_codes;
use crate::registry::DocumentKey;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cfgtree operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A mutating path operation was given an empty path.
    #[error("invalid path '{0}': path cannot be empty")]
    InvalidPath(String),

    /// The addressed node does not exist.
    #[error("config node '{0}' does not exist")]
    NodeNotFound(String),

    /// The addressed node exists but holds no value.
    #[error("config node '{0}' has no value")]
    NoValue(String),

    /// A list element index was out of bounds.
    #[error("element index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The tree has no free node handles left.
    #[error("config tree is full: at most {limit} nodes")]
    TooManyNodes { limit: usize },

    /// The top-level JSON document was not an object.
    #[error("config document must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// JSON syntax or serialization failure.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Storage read/write failure.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document was saved or edited without being loaded first.
    #[error("config document {0} is not loaded")]
    NotLoaded(DocumentKey),
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::InvalidPath(_) => exit_codes::USER_ERROR,
            ConfigError::IndexOutOfRange { .. } => exit_codes::USER_ERROR,
            ConfigError::NodeNotFound(_) => exit_codes::NOT_FOUND,
            ConfigError::NoValue(_) => exit_codes::NOT_FOUND,
            ConfigError::NotLoaded(_) => exit_codes::NOT_FOUND,
            ConfigError::TooManyNodes { .. } => exit_codes::IO_FAILURE,
            ConfigError::NotAnObject(_) => exit_codes::IO_FAILURE,
            ConfigError::Json(_) => exit_codes::IO_FAILURE,
            ConfigError::Io { .. } => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for cfgtree operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
