//! Config command implementation.

use anyhow::{Context, Result};
use deskshift_lib::DeskshiftConfig;
use std::path::Path;

/// Write a default config file.
pub(crate) fn init(path: &Path, force: bool) -> Result<()> {
    DeskshiftConfig::init(path, force)
        .with_context(|| format!("Failed to initialize config at {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Print the effective configuration as TOML.
pub(crate) fn show(path: &Path) -> Result<()> {
    let config = DeskshiftConfig::load(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    if !path.exists() {
        println!("# {} does not exist; showing defaults", path.display());
    }
    print!("{}", config.to_toml_string()?);
    Ok(())
}

/// Print the config file path.
pub(crate) fn path(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}
