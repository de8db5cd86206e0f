//! Error types for entity storage and operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type for entity operations
pub type Result<T> = std::result::Result<T, EntityError>;

/// Errors that can occur while storing or loading entities
#[derive(Debug, Error)]
pub enum EntityError {
    /// The id cannot be mapped to a shard path
    #[error("invalid minion id: {id}")]
    InvalidId { id: String },

    /// An entity file exists but could not be decoded
    #[error("corrupt entity file {path}: {message}")]
    Corrupt { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EntityError {
    /// Create an invalid id error
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId { id: id.into() }
    }
}
