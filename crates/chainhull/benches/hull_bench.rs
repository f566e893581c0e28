//! Criterion benchmarks for the in-place hull.
//! Sizes: n in {1e2, 1e3, 1e4, 1e5, 1e6}, flat buffers and point slices.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use chainhull::sample::{draw_points, ReplayToken, SampleCfg, Shape};
use chainhull::{compute_hull, compute_hull_with, FlatPoints, HullCfg};

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[100usize, 1_000, 10_000, 100_000, 1_000_000] {
        let cfg = SampleCfg {
            count: n,
            shape: Shape::Square,
        };
        let pts = draw_points(cfg, ReplayToken { seed: 43, index: 0 });
        let flat: Vec<f64> = pts.iter().flat_map(|p| [p[0], p[1]]).collect();

        group.bench_with_input(BenchmarkId::new("flat", n), &flat, |b, flat| {
            b.iter_batched(
                || flat.clone(),
                |mut data| {
                    let hull = compute_hull(FlatPoints::new(&mut data).unwrap());
                    let _k = hull.as_slice().len() / 2;
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("pairs_pooled", n), &pts, |b, pts| {
            let cfg = HullCfg {
                reuse_buffers: true,
                ..HullCfg::default()
            };
            b.iter_batched(
                || pts.clone(),
                |mut data| {
                    let _k = compute_hull_with(&mut data[..], cfg).len();
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
