//! Error types for MimeKV
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using MimeError
pub type Result<T> = std::result::Result<T, MimeError>;

/// Unified error type for MimeKV operations
#[derive(Debug, Error)]
pub enum MimeError {
    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("key '{0}' doesn't exist")]
    KeyNotFound(String),

    #[error("snapshot not found: {}", .0.display())]
    SnapshotNotFound(PathBuf),

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("key cannot be empty")]
    EmptyKey,

    #[error("payload cannot be nil")]
    NilPayload,

    #[error("Content-Type cannot be empty")]
    EmptyContentType,

    #[error("Content-Type is not valid: {0:?}")]
    InvalidContentType(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Snapshot Errors
    // -------------------------------------------------------------------------
    #[error("Snapshot corruption detected: {0}")]
    CorruptSnapshot(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MimeError {
    /// True for both a missing key and a missing snapshot file
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound(_) | Self::SnapshotNotFound(_))
    }

    /// True for caller-input errors raised by the validator
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyKey | Self::NilPayload | Self::EmptyContentType | Self::InvalidContentType(_)
        )
    }
}
