//! Error types for kvpath
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using KvPathError
pub type Result<T> = std::result::Result<T, KvPathError>;

/// Unified error type for kvpath operations
#[derive(Debug, Error)]
pub enum KvPathError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Argument Errors
    // -------------------------------------------------------------------------
    #[error("Argument '{0}' is empty or missing")]
    Argument(String),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Key not found")]
    KeyNotFound,

    // -------------------------------------------------------------------------
    // Resolution Errors
    // -------------------------------------------------------------------------
    #[error("Resolution error: {0}")]
    Resolution(String),

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("Codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

impl KvPathError {
    /// Whether this is the distinguished exact-read miss.
    ///
    /// Only this error switches the resolver into prefix-scan mode;
    /// everything else propagates.
    pub fn is_not_found(&self) -> bool {
        matches!(self, KvPathError::KeyNotFound)
    }
}
