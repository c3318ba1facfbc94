//! Custom error types for sdsm
//!
//! This module defines the error hierarchy for the save manager using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for sdsm operations
#[derive(Error, Debug)]
pub enum SdsmError {
    /// No directory matches the requested slot name
    #[error("Save slot not found: {name}")]
    SlotNotFound { name: String },

    /// The named or implied archive does not exist
    #[error("Backup archive not found: {}", .0.display())]
    ArchiveNotFound(PathBuf),

    /// Metadata document missing, malformed, or missing a required field
    #[error("Metadata error in {}: {reason}", path.display())]
    Metadata { path: PathBuf, reason: String },

    /// Season name or index outside the four fixed seasons
    #[error("Invalid season: {0}")]
    InvalidSeason(String),

    /// File I/O and archive errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl SdsmError {
    /// Create a "slot not found" error
    pub fn slot_not_found(name: impl Into<String>) -> Self {
        Self::SlotNotFound { name: name.into() }
    }

    /// Create a metadata error for the given document
    pub fn metadata(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Metadata {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a "not found" error (slot or archive)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SlotNotFound { .. } | Self::ArchiveNotFound(_))
    }

    /// Check if this is a metadata error
    pub fn is_metadata(&self) -> bool {
        matches!(self, Self::Metadata { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SdsmError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<zip::result::ZipError> for SdsmError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Io(format!("archive error: {}", err))
    }
}

impl From<serde_json::Error> for SdsmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for sdsm operations
pub type SdsmResult<T> = Result<T, SdsmError>;
