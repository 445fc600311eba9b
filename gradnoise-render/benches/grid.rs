#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gradnoise_render::{Execution, GradientStrategy, RenderConfig, normalize_to_u8, sample_grid};
use std::hint::black_box;

fn config(size: u32, execution: Execution, gradients: GradientStrategy) -> RenderConfig {
    RenderConfig {
        width: size,
        height: size,
        execution,
        gradients,
        ..RenderConfig::default()
    }
}

// ── Grid sampling ───────────────────────────────────────────────────────────

fn bench_grid(c: &mut Criterion) {
    let tables = RenderConfig::default()
        .build_tables()
        .expect("default tables are valid");

    let mut group = c.benchmark_group("grid_256");
    group.throughput(criterion::Throughput::Elements(256 * 256));
    for (name, execution, gradients) in [
        ("serial_table", Execution::Serial, GradientStrategy::Table),
        ("parallel_table", Execution::Parallel, GradientStrategy::Table),
        ("parallel_fibonacci", Execution::Parallel, GradientStrategy::Fibonacci),
    ] {
        let config = config(256, execution, gradients);
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
            b.iter(|| black_box(sample_grid(&tables, config)));
        });
    }
    group.finish();
}

// ── Normalization ───────────────────────────────────────────────────────────

fn bench_normalize(c: &mut Criterion) {
    let tables = RenderConfig::default()
        .build_tables()
        .expect("default tables are valid");
    let grid = sample_grid(&tables, &config(512, Execution::Parallel, GradientStrategy::Table));

    c.bench_function("normalize_512", |b| {
        b.iter(|| black_box(normalize_to_u8(black_box(grid.values()))));
    });
}

criterion_group!(benches, bench_grid, bench_normalize);
criterion_main!(benches);
