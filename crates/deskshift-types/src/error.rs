//! Error types for deskshift.

use thiserror::Error;

use crate::EntityParseError;

/// Result type alias for deskshift operations.
pub type Result<T> = std::result::Result<T, DeskshiftError>;

/// Errors that can occur while resolving migration requests.
#[derive(Error, Debug)]
pub enum DeskshiftError {
    /// Platform not found in the catalog.
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    /// Plan key not defined for the platform.
    #[error("Unknown plan '{plan}' for platform {platform}")]
    UnknownPlan {
        /// The platform that was searched.
        platform: String,
        /// The missing plan key.
        plan: String,
    },

    /// The source platform has no export path for the entity.
    #[error("{platform} cannot export {entity}")]
    NotExportable {
        /// The source platform.
        platform: String,
        /// The entity that was requested.
        entity: String,
    },

    /// Invalid entity identifier.
    #[error(transparent)]
    Entity(#[from] EntityParseError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
