//! Estimator benchmarks across every platform pair.
//!
//! Run with: `cargo bench --package deskshift-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use deskshift_bench::{Workload, all_pairs};
use deskshift_lib::{Estimator, MigrationReport, PlatformCatalog, ReportFormat};
use std::hint::black_box;

fn estimate_benchmark(c: &mut Criterion) {
    let catalog = PlatformCatalog::global();
    let estimator = Estimator::global();

    let mut group = c.benchmark_group("estimate");
    for workload in Workload::ALL {
        let pairs = all_pairs(catalog, workload);
        group.throughput(Throughput::Elements(pairs.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("all_pairs", workload),
            &pairs,
            |b, pairs| {
                b.iter(|| {
                    for inputs in pairs {
                        black_box(estimator.estimate(black_box(inputs), catalog));
                    }
                });
            },
        );
    }
    group.finish();
}

fn catalog_benchmark(c: &mut Criterion) {
    let json = include_str!("../../crates/deskshift-catalog/data/platforms.json");
    c.bench_function("catalog/from_json", |b| {
        b.iter(|| PlatformCatalog::from_json(black_box(json)));
    });
}

fn report_benchmark(c: &mut Criterion) {
    let catalog = PlatformCatalog::global();
    let Some(inputs) = Workload::Medium.inputs(catalog, "zendesk", "freshdesk") else {
        return;
    };
    let result = Estimator::global().estimate(&inputs, catalog);
    let report = MigrationReport::new(inputs, result, catalog);

    let mut group = c.benchmark_group("report");
    for format in ReportFormat::all() {
        group.bench_with_input(BenchmarkId::from_parameter(format), format, |b, format| {
            b.iter(|| format.render(black_box(&report)));
        });
    }
    group.finish();
}

criterion_group!(benches, estimate_benchmark, catalog_benchmark, report_benchmark);
criterion_main!(benches);
