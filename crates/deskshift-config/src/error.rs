//! Configuration errors.

use std::path::PathBuf;

use deskshift_types::EntityParseError;
use thiserror::Error;

/// Errors that can occur while loading or saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Read {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The file could not be written.
    #[error("Failed to write config {path}: {source}")]
    Write {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// `init` refused to overwrite an existing file.
    #[error("Config already exists at {0}")]
    AlreadyExists(PathBuf),

    /// A volume key does not name an entity.
    #[error("Invalid volume key: {0}")]
    Entity(#[from] EntityParseError),

    /// A numeric setting is out of range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Dotted setting name.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
