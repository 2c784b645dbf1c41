//! Compare command implementation.
//!
//! This module prints the entity compatibility matrix between a source and
//! a destination platform.

use anyhow::{Context, Result};
use deskshift_lib::{DataEntity, PlatformCatalog};

use crate::display::mark;

/// Show which entities can move between two platforms through their APIs.
pub(crate) fn compare(catalog: &PlatformCatalog, source: &str, destination: &str) -> Result<()> {
    let src = catalog
        .get(source)
        .with_context(|| format!("Unknown platform: {source}"))?;
    let dst = catalog
        .get(destination)
        .with_context(|| format!("Unknown platform: {destination}"))?;

    println!("{} -> {}\n", src.name(), dst.name());
    println!(
        "{:<30} {:>7} {:>7} {:>8}",
        "ENTITY", "EXPORT", "IMPORT", "PATH"
    );
    println!("{}", "-".repeat(55));

    for entity in DataEntity::ALL {
        let export = src.can_export(entity);
        let import = dst.can_import(entity);
        let path = match (export, import) {
            (true, true) => "api",
            (true, false) => "manual",
            (false, _) => "n/a",
        };
        println!(
            "{:<30} {:>7} {:>7} {:>8}",
            entity.label(),
            mark(export),
            mark(import),
            path
        );
    }

    let mutual = catalog.mutual_entities(src.id(), dst.id());
    println!(
        "\n{} of {} exportable entities migrate through the APIs.",
        mutual.len(),
        src.capabilities().export.len()
    );
    Ok(())
}
