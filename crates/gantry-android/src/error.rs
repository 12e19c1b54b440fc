//! Error types for Android build resolution

use std::path::PathBuf;
use thiserror::Error;

use gantry_core::error::{PropertiesError, PubspecError};

/// Result type alias for Android build resolution
pub type Result<T> = std::result::Result<T, AndroidError>;

/// Android-side errors
#[derive(Debug, Error)]
pub enum AndroidError {
    /// Credential file is present but does not carry a complete credential set
    #[error("Incomplete keystore credentials in {}: missing {}", .path.display(), .fields.join(", "))]
    IncompleteCredentials { path: PathBuf, fields: Vec<String> },

    /// Android host directory does not exist
    #[error("Android directory not found at {}", .0.display())]
    AndroidDirNotFound(PathBuf),

    /// Credential file parsing failed
    #[error(transparent)]
    Properties(#[from] PropertiesError),

    /// Project version resolution failed
    #[error(transparent)]
    Pubspec(#[from] PubspecError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
