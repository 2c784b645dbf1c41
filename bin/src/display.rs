//! Shared loading and parsing helpers for the deskshift CLI.

use anyhow::{Context, Result, bail};
use deskshift_lib::{DataEntity, DeskshiftConfig, PlatformCatalog, ReportFormat};
use std::path::Path;

/// Loads the config file and the catalog it points at.
pub(crate) fn load_context(config_path: &Path) -> Result<(DeskshiftConfig, PlatformCatalog)> {
    let config = DeskshiftConfig::load(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    let catalog = load_catalog(&config)?;
    Ok((config, catalog))
}

/// Returns the replacement catalog named by the config, or the built-in one.
pub(crate) fn load_catalog(config: &DeskshiftConfig) -> Result<PlatformCatalog> {
    match &config.catalog.path {
        Some(path) => PlatformCatalog::from_path(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Ok(PlatformCatalog::global().clone()),
    }
}

/// Parses a `--volume` argument of the form `entity=count`.
pub(crate) fn parse_volume(s: &str) -> Result<(DataEntity, u64), String> {
    let (entity, count) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ENTITY=COUNT, got '{s}'"))?;
    let entity = entity.parse::<DataEntity>().map_err(|e| e.to_string())?;
    let count = count
        .trim()
        .replace('_', "")
        .parse::<u64>()
        .map_err(|e| format!("invalid count '{count}': {e}"))?;
    Ok((entity, count))
}

/// Picks the report format: explicit flag, then output extension, then config.
pub(crate) fn resolve_format(
    flag: Option<ReportFormat>,
    output: Option<&Path>,
    config: &DeskshiftConfig,
) -> Result<ReportFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }
    if let Some(ext) = output.and_then(Path::extension).and_then(|e| e.to_str())
        && let Ok(format) = ext.parse::<ReportFormat>()
    {
        return Ok(format);
    }
    config
        .report
        .format
        .parse::<ReportFormat>()
        .with_context(|| format!("Invalid report format in config: {}", config.report.format))
}

/// Formats a count with thousands separators.
pub(crate) fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Returns the capability marker used in tables.
pub(crate) const fn mark(supported: bool) -> &'static str {
    if supported { "yes" } else { "-" }
}

/// Rejects attachment figures that are negative or not finite.
pub(crate) fn check_non_negative(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        bail!("{name} must be zero or a positive number, got {value}");
    }
    Ok(value)
}
