//! Error types for Gantry

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using GantryError
pub type Result<T> = std::result::Result<T, GantryError>;

/// Main error type for Gantry operations
#[derive(Debug, Error)]
pub enum GantryError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Property-file errors
    #[error(transparent)]
    Properties(#[from] PropertiesError),

    /// Pubspec-related errors
    #[error(transparent)]
    Pubspec(#[from] PubspecError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl GantryError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {}", .0.display())]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Property-file errors
#[derive(Debug, Error)]
pub enum PropertiesError {
    /// Property file not found
    #[error("Property file not found at {}", .0.display())]
    NotFound(PathBuf),

    /// A line that is neither blank, a comment, nor a key/value pair
    #[error("Malformed property in {} at line {}: {}", .path.display(), .line, .message)]
    Malformed {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// IO error reading the file
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Pubspec-related errors
#[derive(Debug, Error)]
pub enum PubspecError {
    /// pubspec.yaml not found
    #[error("pubspec.yaml not found at {}", .0.display())]
    NotFound(PathBuf),

    /// No version field present
    #[error("No version field found in {}", .0.display())]
    MissingVersion(PathBuf),

    /// Version name is not a valid semantic version
    #[error("Failed to parse version '{value}': {message}")]
    InvalidVersion { value: String, message: String },

    /// Build number suffix is not a positive integer
    #[error("Invalid build number '{0}': must be a positive integer")]
    InvalidBuildNumber(String),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
