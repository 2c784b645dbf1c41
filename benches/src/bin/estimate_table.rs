//! Prints a markdown matrix of likely migration durations between every
//! platform pair, using the first plan of each platform.
//!
//! Run with: `cargo run --package deskshift-bench --bin estimate_table --release [small|medium|large]`

use deskshift_bench::Workload;
use deskshift_lib::{Estimator, PlatformCatalog};
use std::time::Instant;

fn main() {
    let workload = match std::env::args().nth(1).as_deref() {
        None | Some("medium") => Workload::Medium,
        Some("small") => Workload::Small,
        Some("large") => Workload::Large,
        Some(other) => {
            eprintln!("Unknown workload: {other} (expected small, medium, or large)");
            std::process::exit(1);
        }
    };

    let catalog = PlatformCatalog::global();
    let estimator = Estimator::global();
    let ids: Vec<&str> = catalog.all().map(|p| p.id()).collect();

    println!(
        "Likely duration, {workload} workload ({} tickets)\n",
        workload.tickets()
    );
    println!("| source \\ destination | {} |", ids.join(" | "));
    println!("|---|{}", "---|".repeat(ids.len()));

    let start = Instant::now();
    let mut runs = 0u32;
    for src in &ids {
        let mut cells = Vec::with_capacity(ids.len());
        for dst in &ids {
            let cell = workload.inputs(catalog, src, dst).map_or_else(
                || "-".to_string(),
                |inputs| {
                    runs += 1;
                    let result = estimator.estimate(&inputs, catalog);
                    format!(
                        "{} ({})",
                        Estimator::format_hours(result.total_duration_hours),
                        result.risk_level
                    )
                },
            );
            cells.push(cell);
        }
        println!("| {src} | {} |", cells.join(" | "));
    }

    println!("\n{runs} estimates in {:?}", start.elapsed());
}
