//! Platforms command implementation.
//!
//! This module handles listing supported platforms with optional filtering.

use anyhow::Result;
use deskshift_lib::PlatformCatalog;

/// List supported platforms, optionally filtered by a search pattern.
pub(crate) fn list_platforms(catalog: &PlatformCatalog, search: Option<&str>) -> Result<()> {
    let platforms: Vec<_> = match search {
        Some(pattern) => catalog.search(pattern),
        None => catalog.all().collect(),
    };

    if platforms.is_empty() {
        println!("No platforms found.");
        return Ok(());
    }

    println!(
        "{:<12} {:<28} {:>6} {:>7} {:>7}",
        "ID", "NAME", "PLANS", "EXPORT", "IMPORT"
    );
    println!("{}", "-".repeat(64));

    for platform in &platforms {
        println!(
            "{:<12} {:<28} {:>6} {:>7} {:>7}",
            platform.id(),
            platform.name(),
            platform.plans().len(),
            platform.capabilities().export.len(),
            platform.capabilities().import.len(),
        );
    }

    println!("\nTotal: {} platforms", platforms.len());
    Ok(())
}
