//! Benchmarks for scalar field derivation and histogram computation.
//!
//! Run with: cargo bench -p autoseg-volume
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p autoseg-volume -- --save-baseline main
//! 2. After changes: cargo bench -p autoseg-volume -- --baseline main

#![allow(
    missing_docs,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]

use autoseg_volume::{
    Components, DEFAULT_BIN_COUNT, ImageVolume, compute_histogram, derive_scalar_field,
};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

// =============================================================================
// Test Volume Generation
// =============================================================================

/// A cube volume with a radial intensity falloff from the center.
fn radial_volume(n: usize, components: Components) -> ImageVolume {
    let c = (n as f32 - 1.0) / 2.0;
    let mut samples = Vec::with_capacity(n * n * n * components.count());
    for k in 0..n {
        for j in 0..n {
            for i in 0..n {
                let d = ((i as f32 - c).powi(2) + (j as f32 - c).powi(2) + (k as f32 - c).powi(2))
                    .sqrt();
                let v = (1.0 - d / (c * 1.8)).clamp(0.0, 1.0);
                for _ in 0..components.count() {
                    samples.push(v);
                }
            }
        }
    }
    ImageVolume::from_samples([n, n, n], components, samples).unwrap_or_else(|e| panic!("{e}"))
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("Histogram");
    group.sample_size(20);

    for n in [16_usize, 32, 64] {
        let volume = radial_volume(n, Components::Gray);
        let field = derive_scalar_field(&volume);
        group.throughput(Throughput::Elements((n * n * n) as u64));
        group.bench_with_input(BenchmarkId::new("gray", n), &n, |b, _| {
            b.iter(|| compute_histogram(black_box(&volume), black_box(&field), DEFAULT_BIN_COUNT));
        });
    }

    group.finish();
}

fn bench_scalar_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("ScalarField");

    let volume = radial_volume(64, Components::Rgb);
    group.throughput(Throughput::Elements(64 * 64 * 64));
    group.bench_function("luminance_64", |b| {
        b.iter(|| derive_scalar_field(black_box(&volume)));
    });

    let field = derive_scalar_field(&volume);
    group.bench_function("sample_center", |b| {
        b.iter(|| field.sample(black_box([0.5, 0.5, 0.5])));
    });

    group.finish();
}

criterion_group!(benches, bench_histogram, bench_scalar_field);
criterion_main!(benches);
