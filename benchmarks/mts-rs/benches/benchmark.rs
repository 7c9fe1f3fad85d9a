//! MTS benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Distance scalability (reference size and variable count)
//! - Orthogonal array generation (algebraic and L12 designs)
//! - Variable selection (sequential vs parallel runs)
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mts_rs::prelude::*;
use rand::prelude::*;
use rand_distr::Normal;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a space of independent standard normal variables.
fn generate_normal_space(samples: usize, variables: usize, seed: u64) -> Space<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(0.0, 1.0).unwrap();

    let values: Vec<f64> = (0..samples * variables)
        .map(|_| dist.sample(&mut rng))
        .collect();
    Space::from_row_major(values, samples, variables).unwrap()
}

/// Generate abnormal samples: the first half of the variables are shifted.
fn generate_abnormal_space(samples: usize, variables: usize, seed: u64) -> Space<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(0.0, 1.0).unwrap();

    let mut values = Vec::with_capacity(samples * variables);
    for _ in 0..samples {
        for v in 0..variables {
            let shift = if v < variables / 2 { 4.0 } else { 0.0 };
            values.push(dist.sample(&mut rng) + shift);
        }
    }
    Space::from_row_major(values, samples, variables).unwrap()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_distances(c: &mut Criterion) {
    let mut group = c.benchmark_group("distances");
    group.sample_size(50);

    let mts = Mts::builder().build().unwrap();

    for samples in [50, 200, 1_000] {
        group.throughput(Throughput::Elements(samples as u64));

        let reference = generate_normal_space(samples, 8, 42);
        let test = generate_abnormal_space(samples, 8, 7);

        group.bench_with_input(BenchmarkId::new("samples", samples), &samples, |b, _| {
            b.iter(|| {
                mts.distances(black_box(&reference), black_box(&test))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_variables(c: &mut Criterion) {
    let mut group = c.benchmark_group("variables");
    group.sample_size(50);

    let mts = Mts::builder().build().unwrap();

    for variables in [4, 16, 32] {
        let reference = generate_normal_space(200, variables, 42);
        let model = mts.fit(&reference).unwrap();
        let test = generate_abnormal_space(50, variables, 7);

        group.bench_with_input(
            BenchmarkId::new("fitted", variables),
            &variables,
            |b, _| {
                b.iter(|| {
                    model
                        .distances(mts.provider(), black_box(&test))
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_orthogonal_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("orthogonal_array");
    group.sample_size(100);

    let mts = Mts::<f64>::builder().build().unwrap();

    for variables in [7, 11, 31, 127] {
        group.bench_with_input(
            BenchmarkId::new("generate", variables),
            &variables,
            |b, &v| b.iter(|| mts.orthogonal_array(black_box(v)).unwrap()),
        );
    }
    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    group.sample_size(20);

    let sequential = Mts::builder().build().unwrap();
    let parallel = Mts::builder().parallel(true).build().unwrap();

    for variables in [7, 11, 15] {
        let reference = generate_normal_space(100, variables, 42);
        let test = generate_abnormal_space(20, variables, 7);

        group.bench_with_input(
            BenchmarkId::new("sequential", variables),
            &variables,
            |b, _| {
                b.iter(|| {
                    sequential
                        .select_useful_variables(black_box(&reference), black_box(&test))
                        .unwrap()
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", variables),
            &variables,
            |b, _| {
                b.iter(|| {
                    parallel
                        .select_useful_variables(black_box(&reference), black_box(&test))
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_distances,
    bench_variables,
    bench_orthogonal_array,
    bench_selection,
);

criterion_main!(benches);
