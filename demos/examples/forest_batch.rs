// Copyright 2026 the Quadbin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Batch build.
//!
//! Build a four-tile forest from a large pseudo-random sample batch with the
//! default depth-bin table, then print partition and neighbor-graph stats.
//!
//! Run:
//! - `cargo run -p quadbin_demos --example forest_batch --release`

use std::time::Instant;

use kurbo::Rect;
use quadbin_tree::{Forest, Sample, Thresholds};

const SAMPLES: usize = 230_000;
const MAX_DEPTH: u8 = 10;

struct Rng(u64);

impl Rng {
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

fn main() {
    let mut rng = Rng(0x5EED_5EED_5EED_5EED);
    let batch: Vec<Sample> = (0..SAMPLES)
        .map(|_| {
            let x = rng.next_f64() * 20.0;
            let y = rng.next_f64() * 20.0 + 45.0;
            let value = rng.next_f64() * 100.0;
            Sample::new(x, y, value)
        })
        .collect();

    let mut forest = Forest::new(Thresholds::default_bins(), MAX_DEPTH);
    forest.add_root(Rect::new(0.0, 45.0, 10.0, 55.0));
    forest.add_root(Rect::new(10.0, 45.0, 20.0, 55.0));
    forest.add_root(Rect::new(0.0, 55.0, 10.0, 65.0));
    forest.add_root(Rect::new(10.0, 55.0, 20.0, 65.0));

    let t0 = Instant::now();
    let accepted = forest.extend(batch.iter().copied());
    let built = t0.elapsed();
    forest.finish();
    let finished = t0.elapsed();

    let tree = forest.tree();
    let leaves = forest.leaves();
    let links: usize = leaves.iter().map(|l| tree.neighbors(*l).len()).sum();
    let mut depth_histogram = [0_usize; MAX_DEPTH as usize + 1];
    for leaf in &leaves {
        depth_histogram[tree.depth(*leaf).unwrap() as usize] += 1;
    }

    println!("inserted {accepted}/{SAMPLES} samples in {built:?}");
    println!("finalize + join done at {finished:?}");
    println!("nodes alive: {}", tree.alive_count());
    println!("leaves: {} ({} neighbor links)", leaves.len(), links / 2);
    for (depth, count) in depth_histogram.iter().enumerate() {
        if *count > 0 {
            println!("  depth {depth:2}: {count} leaves");
        }
    }
}
