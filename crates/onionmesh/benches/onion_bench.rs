//! Criterion benchmarks for onion construction.
//! Focus sizes: n in {10, 100, 1000}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use onionmesh::prelude::*;

fn cloud(count: usize, seed: u64) -> Vec<Vec2> {
    draw_point_cloud(
        CloudCfg { count, half_extent: 100.0 },
        ReplayToken { seed, index: 0 },
    )
}

fn bench_onion(c: &mut Criterion) {
    let mut group = c.benchmark_group("onion");
    for &n in &[10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("peel", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 43),
                |points| {
                    let _layers = peel(&points);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("triangulate", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 44),
                |points| {
                    let _tri = OnionTriangulation::new(&points);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_onion);
criterion_main!(benches);
