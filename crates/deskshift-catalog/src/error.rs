//! Catalog loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a platform catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        /// The catalog file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON is malformed.
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog defines no platforms.
    #[error("Catalog defines no platforms")]
    Empty,

    /// Two platforms share an identifier.
    #[error("Duplicate platform id: {0}")]
    DuplicatePlatform(String),

    /// Platform defines no plan tiers.
    #[error("Platform {0} defines no plans")]
    NoPlans(String),

    /// Two plan tiers of one platform share a key.
    #[error("Platform {platform} defines plan '{plan}' more than once")]
    DuplicatePlan {
        /// The platform identifier.
        platform: String,
        /// The repeated plan key.
        plan: String,
    },

    /// A numeric value is outside its allowed range.
    #[error("Platform {platform}: {field} {reason}")]
    InvalidValue {
        /// The platform identifier.
        platform: String,
        /// The offending field.
        field: String,
        /// What the value must satisfy.
        reason: &'static str,
    },
}
