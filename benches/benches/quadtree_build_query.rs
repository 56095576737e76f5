// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bramble_quadtree::{Point, QuadTree, Rect};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f32(&mut self) -> f32 {
        let v = self.next_u64() >> 40;
        (v as f32) / ((1u64 << 24) as f32)
    }
}

fn gen_uniform_points(count: usize, w: f32, h: f32) -> Vec<Point> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        out.push(Point::new(rng.next_f32() * w, rng.next_f32() * h));
    }
    out
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f32) -> Vec<Point> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f32() * 2000.0, rng.next_f32() * 2000.0));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f32() - 0.5) * spread;
            let dy = (rng.next_f32() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn gen_banded_points(n_bands: usize, per_band: usize, band_height: f32, width: f32) -> Vec<Point> {
    let mut out = Vec::with_capacity(n_bands * per_band);
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    for b in 0..n_bands {
        let y0 = b as f32 * band_height * 2.0;
        for _ in 0..per_band {
            out.push(Point::new(
                rng.next_f32() * width,
                y0 + rng.next_f32() * band_height,
            ));
        }
    }
    out
}

/// Capacity heuristic from the crate docs: roughly sqrt of the working set.
fn capacity_for(count: usize) -> u32 {
    ((count as f32).sqrt() as u32).max(1)
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");
    for &n in &[1024usize, 4096, 16384] {
        let points = gen_uniform_points(n, 2000.0, 2000.0);
        let boundary = Rect::new(0.0, 0.0, 2000.0, 2000.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("uniform_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::new(boundary, capacity_for(n), 8),
                |mut tree| {
                    tree.rebuild(&points);
                    black_box(tree.node_count());
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("uniform_fit_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::new(boundary, capacity_for(n), 8),
                |mut tree| {
                    tree.rebuild_and_fit_to(&points);
                    black_box(tree.node_count());
                },
                BatchSize::SmallInput,
            )
        });
    }

    let clustered = gen_clustered_points(64, 64, 40.0);
    group.throughput(Throughput::Elements(clustered.len() as u64));
    group.bench_function("clustered_4096", |b| {
        b.iter_batched(
            || QuadTree::new(Rect::new(0.0, 0.0, 2048.0, 2048.0), 64, 8),
            |mut tree| {
                tree.rebuild(&clustered);
                black_box(tree.node_count());
            },
            BatchSize::SmallInput,
        )
    });

    let banded = gen_banded_points(32, 128, 16.0, 2000.0);
    group.throughput(Throughput::Elements(banded.len() as u64));
    group.bench_function("banded_4096", |b| {
        b.iter_batched(
            || QuadTree::new(Rect::new(0.0, 0.0, 2000.0, 1024.0), 64, 8),
            |mut tree| {
                tree.rebuild(&banded);
                black_box(tree.node_count());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let query = Rect::new(400.0, 400.0, 800.0, 800.0);
    for &n in &[1024usize, 4096, 16384] {
        let points = gen_uniform_points(n, 2000.0, 2000.0);
        let tree = QuadTree::with_objects(
            Rect::new(0.0, 0.0, 2000.0, 2000.0),
            &points,
            capacity_for(n),
            8,
        );
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("quadtree_n{}", n), |b| {
            let mut hits = Vec::new();
            b.iter(|| {
                hits.clear();
                tree.query_range(query, &mut hits);
                black_box(hits.len());
            })
        });
        group.bench_function(format!("brute_force_n{}", n), |b| {
            let mut hits: Vec<u32> = Vec::new();
            b.iter(|| {
                hits.clear();
                for (i, p) in points.iter().enumerate() {
                    if query.contains(*p) {
                        hits.push(i as u32);
                    }
                }
                black_box(hits.len());
            })
        });
    }

    // Many small vision-range queries, the per-frame neighbor pattern.
    let n = 4096;
    let points = gen_uniform_points(n, 2000.0, 2000.0);
    let tree = QuadTree::with_objects(
        Rect::new(0.0, 0.0, 2000.0, 2000.0),
        &points,
        capacity_for(n),
        8,
    );
    group.throughput(Throughput::Elements(n as u64));
    group.bench_function("neighbor_queries_n4096", |b| {
        let mut hits = Vec::new();
        b.iter(|| {
            let mut total = 0usize;
            for p in &points {
                hits.clear();
                let vision = Rect::new(p.x - 50.0, p.y - 50.0, p.x + 50.0, p.y + 50.0);
                tree.query_range(vision, &mut hits);
                total += hits.len();
            }
            black_box(total);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_rebuild, bench_query);
criterion_main!(benches);
