//! Error types for chlog

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ChlogError
pub type Result<T> = std::result::Result<T, ChlogError>;

/// Main error type for chlog operations
#[derive(Debug, Error)]
pub enum ChlogError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Failed to append to the changelog file
    #[error("Failed to write changelog {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
