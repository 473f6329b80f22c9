// Copyright 2026 the Quadbin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use quadbin_tree::{Forest, Sample, Thresholds};

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
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_samples(count: usize) -> Vec<Sample> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let x = rng.next_f64() * 20.0;
            let y = rng.next_f64() * 20.0 + 45.0;
            let value = rng.next_f64() * 100.0;
            Sample::new(x, y, value)
        })
        .collect()
}

fn four_tile_forest() -> Forest {
    let mut forest = Forest::new(Thresholds::default_bins(), 10);
    forest.add_root(Rect::new(0.0, 45.0, 10.0, 55.0));
    forest.add_root(Rect::new(10.0, 45.0, 20.0, 55.0));
    forest.add_root(Rect::new(0.0, 55.0, 10.0, 65.0));
    forest.add_root(Rect::new(10.0, 55.0, 20.0, 65.0));
    forest
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("forest");
    for &n in &[1_000usize, 10_000, 100_000] {
        let samples = gen_samples(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("build_finish_n{}", n), |b| {
            b.iter_batched(
                four_tile_forest,
                |mut forest| {
                    let accepted = forest.extend(samples.iter().copied());
                    forest.finish();
                    black_box(accepted)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_neighbor_walk(c: &mut Criterion) {
    let mut forest = four_tile_forest();
    let _ = forest.extend(gen_samples(50_000));
    forest.finish();
    let leaves = forest.leaves();

    let mut group = c.benchmark_group("forest");
    group.throughput(Throughput::Elements(leaves.len() as u64));
    group.bench_function("walk_neighbor_links", |b| {
        b.iter(|| {
            let tree = forest.tree();
            let links: usize = leaves.iter().map(|l| tree.neighbors(*l).len()).sum();
            black_box(links)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_neighbor_walk);
criterion_main!(benches);
