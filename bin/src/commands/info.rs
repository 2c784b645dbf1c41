//! Info command implementation.
//!
//! This module handles displaying the plans, rate limits, and entity
//! capabilities of a single platform.

use anyhow::{Context, Result};
use deskshift_lib::{DataEntity, PlatformCatalog};

use crate::display::mark;

/// Show detailed information about a platform.
pub(crate) fn show_info(catalog: &PlatformCatalog, platform_id: &str) -> Result<()> {
    let platform = catalog
        .get(platform_id)
        .with_context(|| format!("Unknown platform: {platform_id}"))?;
    let features = platform.features();
    let limits = platform.limits();

    println!("Platform:   {}", platform.name());
    println!("ID:         {}", platform.id());
    println!("Import Batch Size: {}", features.batch_size);
    println!("Export Batch Size: {}", features.export_batch_size);
    println!("Ticket Complexity: x{}", features.complexity_multiplier);
    println!("Max Attachment:    {} MB", limits.max_attachment_size_mb);
    println!(
        "Throughput Buffer: {:.0}%",
        limits.throughput_buffer * 100.0
    );

    println!("\nPlans:");
    println!(
        "{:<20} {:<22} {:>8} {:>12} {:>8}",
        "KEY", "LABEL", "REQ/MIN", "CREATE/MIN", "EXPORT"
    );
    println!("{}", "-".repeat(74));
    for tier in platform.plans() {
        let plan = &tier.limits;
        println!(
            "{:<20} {:<22} {:>8} {:>12} {:>8}",
            tier.key,
            plan.label,
            plan.requests_per_minute,
            plan.effective_import_limit(),
            plan.effective_export_limit(),
        );
    }

    println!("\nCapabilities:");
    println!("{:<30} {:>7} {:>7}", "ENTITY", "EXPORT", "IMPORT");
    println!("{}", "-".repeat(46));
    for entity in DataEntity::ALL {
        println!(
            "{:<30} {:>7} {:>7}",
            entity.label(),
            mark(platform.can_export(entity)),
            mark(platform.can_import(entity)),
        );
    }

    Ok(())
}
