//! Configuration schema and file handling.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use deskshift_types::DataEntity;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Result};

/// Attachment upload bandwidth used when the file does not set one.
pub const DEFAULT_BANDWIDTH_MB_PER_MIN: f64 = 90.0;

/// Report format used when the file does not set one.
pub const DEFAULT_REPORT_FORMAT: &str = "text";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeskshiftConfig {
    /// Request defaults applied before command-line flags.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Platform catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Estimator tuning.
    #[serde(default)]
    pub estimator: EstimatorConfig,

    /// Report output.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Request defaults. Unset fields fall back to the form defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Source platform id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Source plan key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_plan: Option<String>,

    /// Destination platform id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    /// Destination plan key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_plan: Option<String>,

    /// Average attachments per ticket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_attachments_per_ticket: Option<f64>,

    /// Average attachment size in MB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_attachment_size_mb: Option<f64>,

    /// Record counts keyed by entity id.
    #[serde(default)]
    pub volumes: BTreeMap<String, u64>,
}

impl DefaultsConfig {
    /// Returns the volume table keyed by entity.
    ///
    /// # Errors
    ///
    /// Returns an error if a key does not name an entity.
    pub fn volumes(&self) -> Result<BTreeMap<DataEntity, u64>> {
        self.volumes
            .iter()
            .map(|(key, &count)| Ok((key.parse::<DataEntity>()?, count)))
            .collect()
    }
}

/// Platform catalog source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Replacement catalog JSON file; the embedded catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Estimator tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Attachment upload bandwidth in MB per minute.
    #[serde(default = "default_bandwidth")]
    pub attachment_bandwidth_mb_per_min: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            attachment_bandwidth_mb_per_min: default_bandwidth(),
        }
    }
}

/// Report output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Default report format name.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

const fn default_bandwidth() -> f64 {
    DEFAULT_BANDWIDTH_MB_PER_MIN
}

fn default_format() -> String {
    DEFAULT_REPORT_FORMAT.to_string()
}

impl DeskshiftConfig {
    /// Returns the default config file location.
    ///
    /// - Linux: `~/.config/deskshift/config.toml`
    /// - macOS: `~/Library/Application Support/deskshift/config.toml`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\deskshift\config\config.toml`
    ///
    /// Falls back to `~/.deskshift/config.toml`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "deskshift")
            .map_or_else(dirs_fallback, |dirs| dirs.config_dir().to_path_buf())
            .join("config.toml")
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is invalid.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the config at `path`, or the defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Loads the config from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_default() -> Result<Self> {
        Self::load(&Self::default_path())
    }

    /// Serializes the config as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the config to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, content).map_err(write_err)?;
        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Writes a default config to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AlreadyExists`] if the file exists and `force`
    /// is false, or an error if it cannot be written.
    pub fn init(path: &Path, force: bool) -> Result<Self> {
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// Checks numeric ranges and volume keys.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<()> {
        let bandwidth = self.estimator.attachment_bandwidth_mb_per_min;
        if !bandwidth.is_finite() || bandwidth <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "estimator.attachment_bandwidth_mb_per_min",
                reason: "must be a positive number",
            });
        }
        for (field, value) in [
            (
                "defaults.avg_attachments_per_ticket",
                self.defaults.avg_attachments_per_ticket,
            ),
            (
                "defaults.avg_attachment_size_mb",
                self.defaults.avg_attachment_size_mb,
            ),
        ] {
            if value.is_some_and(|v| !v.is_finite() || v < 0.0) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be zero or a positive number",
                });
            }
        }
        self.defaults.volumes()?;
        Ok(())
    }
}

fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".deskshift")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = DeskshiftConfig::default();
        assert!(config.defaults.source.is_none());
        assert!(config.catalog.path.is_none());
        assert!((config.estimator.attachment_bandwidth_mb_per_min - 90.0).abs() < f64::EPSILON);
        assert_eq!(config.report.format, "text");
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = DeskshiftConfig::from_toml_str("").unwrap();
        assert_eq!(config, DeskshiftConfig::default());
    }

    #[test]
    fn test_full_document() {
        let config = DeskshiftConfig::from_toml_str(
            r#"
            [defaults]
            source = "helpscout"
            destination = "zendesk"
            dest_plan = "suite_growth"
            avg_attachment_size_mb = 1.5

            [defaults.volumes]
            tickets = 250000
            custom-fields = 40

            [catalog]
            path = "/tmp/platforms.json"

            [estimator]
            attachment_bandwidth_mb_per_min = 120.0

            [report]
            format = "markdown"
            "#,
        )
        .unwrap();

        assert_eq!(config.defaults.destination.as_deref(), Some("zendesk"));
        assert_eq!(config.defaults.avg_attachment_size_mb, Some(1.5));
        let volumes = config.defaults.volumes().unwrap();
        assert_eq!(volumes[&DataEntity::Tickets], 250_000);
        assert_eq!(volumes[&DataEntity::CustomFields], 40);
        assert_eq!(config.catalog.path, Some(PathBuf::from("/tmp/platforms.json")));
        assert_eq!(config.report.format, "markdown");
    }

    #[test]
    fn test_invalid_toml() {
        let err = DeskshiftConfig::from_toml_str("[estimator\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = DeskshiftConfig::from_toml_str(
            "[estimator]\nattachment_bandwidth_mb_per_min = 0.0\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        let err =
            DeskshiftConfig::from_toml_str("[defaults]\navg_attachments_per_ticket = -1.0\n")
                .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "defaults.avg_attachments_per_ticket",
                ..
            }
        ));

        let err = DeskshiftConfig::from_toml_str("[defaults.volumes]\nwidgets = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Entity(_)));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = DeskshiftConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, DeskshiftConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = DeskshiftConfig::default();
        config.defaults.source = Some("intercom".to_string());
        config.defaults.volumes.insert("tickets".to_string(), 42);
        config.save(&path).unwrap();

        let loaded = DeskshiftConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_init_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        DeskshiftConfig::init(&path, false).unwrap();
        assert!(matches!(
            DeskshiftConfig::init(&path, false),
            Err(ConfigError::AlreadyExists(_))
        ));
        assert!(DeskshiftConfig::init(&path, true).is_ok());
    }

    #[test]
    fn test_default_path_file_name() {
        assert!(DeskshiftConfig::default_path().ends_with("config.toml"));
    }
}
