//! Helpdesk platform catalog for the deskshift migration estimator.
//!
//! This crate provides the static facts the estimator works from: every
//! supported platform with its plan tiers, export/import capability sets,
//! batch sizes, complexity multiplier, and throughput buffer.
//!
//! # Example
//!
//! ```
//! use deskshift_catalog::PlatformCatalog;
//!
//! let catalog = PlatformCatalog::global();
//!
//! // Lookup by ID
//! if let Some(platform) = catalog.get("zendesk") {
//!     println!("{}: {} plans", platform.name(), platform.plans().len());
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/deskshift/deskshift/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod form;
mod validate;

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use deskshift_types::{DataEntity, PlatformCapability};
use serde::Deserialize;

pub use error::CatalogError;
pub use form::{DEFAULT_DESTINATION, DEFAULT_SOURCE, MigrationForm};

/// The platform catalog JSON embedded at compile time.
const PLATFORMS_JSON: &str = include_str!("../data/platforms.json");

/// Global catalog instance.
static CATALOG: OnceLock<PlatformCatalog> = OnceLock::new();

/// Raw JSON structure for deserialization.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    platforms: Vec<PlatformCapability>,
}

/// Immutable table of supported helpdesk platforms.
#[derive(Debug, Clone)]
pub struct PlatformCatalog {
    /// Platforms in declared order.
    platforms: Vec<PlatformCapability>,
    /// Lowercased id to position in `platforms`.
    index: HashMap<String, usize>,
}

impl PlatformCatalog {
    /// Returns the global catalog.
    ///
    /// The catalog is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        CATALOG.get_or_init(Self::load)
    }

    /// Loads the catalog from the embedded JSON data.
    fn load() -> Self {
        Self::from_json(PLATFORMS_JSON).expect("embedded platforms.json should be valid")
    }

    /// Creates a catalog from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::from_platforms(raw.platforms)
    }

    /// Creates a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            platforms = catalog.len(),
            "loaded platform catalog"
        );
        Ok(catalog)
    }

    /// Creates a catalog from platform definitions.
    ///
    /// # Errors
    ///
    /// Returns an error if the definitions fail validation.
    pub fn from_platforms(platforms: Vec<PlatformCapability>) -> Result<Self, CatalogError> {
        validate::validate(&platforms)?;
        let index = platforms
            .iter()
            .enumerate()
            .map(|(pos, platform)| (platform.id().to_lowercase(), pos))
            .collect();
        Ok(Self { platforms, index })
    }

    /// Looks up a platform by ID (case-insensitive).
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PlatformCapability> {
        self.index
            .get(&id.to_lowercase())
            .map(|&pos| &self.platforms[pos])
    }

    /// Returns all platforms in declared order.
    pub fn all(&self) -> impl Iterator<Item = &PlatformCapability> {
        self.platforms.iter()
    }

    /// Returns the total number of platforms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Searches platforms by name or ID pattern (case-insensitive).
    pub fn search(&self, pattern: &str) -> Vec<&PlatformCapability> {
        let pattern = pattern.to_lowercase();
        self.platforms
            .iter()
            .filter(|p| {
                p.id().to_lowercase().contains(&pattern)
                    || p.name().to_lowercase().contains(&pattern)
            })
            .collect()
    }

    /// Returns all platform IDs sorted alphabetically.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.platforms.iter().map(PlatformCapability::id).collect();
        ids.sort_unstable();
        ids
    }

    /// Returns the entities the source can export and the destination can import.
    ///
    /// Returns an empty list if either platform is unknown.
    #[must_use]
    pub fn mutual_entities(&self, source: &str, destination: &str) -> Vec<DataEntity> {
        let (Some(src), Some(dst)) = (self.get(source), self.get(destination)) else {
            return Vec::new();
        };
        DataEntity::ALL
            .into_iter()
            .filter(|&entity| src.can_export(entity) && dst.can_import(entity))
            .collect()
    }

    /// Returns platforms that can export the entity.
    pub fn exporters_of(&self, entity: DataEntity) -> impl Iterator<Item = &PlatformCapability> {
        self.platforms.iter().filter(move |p| p.can_export(entity))
    }

    /// Returns platforms that can import the entity.
    pub fn importers_of(&self, entity: DataEntity) -> impl Iterator<Item = &PlatformCapability> {
        self.platforms.iter().filter(move |p| p.can_import(entity))
    }
}

impl Default for PlatformCatalog {
    fn default() -> Self {
        Self::global().clone()
    }
}
