// Copyright 2026 the Quadbin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forest basics.
//!
//! Build a two-tile forest, refine the left tile across a bin boundary,
//! join, and walk the resulting leaf neighbor graph.
//!
//! Run:
//! - `cargo run -p quadbin_demos --example forest_basics`

use kurbo::Rect;
use quadbin_tree::{Forest, Sample, Thresholds};

fn main() {
    // Two bins: values below 10.0 and values in [10.0, 100.0).
    let mut forest = Forest::new(Thresholds::new(vec![10.0, 100.0]), 2);
    let left = forest.add_root(Rect::new(0.0, 0.0, 10.0, 10.0));
    let right = forest.add_root(Rect::new(10.0, 0.0, 20.0, 10.0));

    // The left tile straddles the bin boundary and subdivides; the right
    // tile sees one bin and stays coarse.
    let accepted = forest.extend([
        Sample::new(1.0, 1.0, 5.0),
        Sample::new(9.0, 9.0, 50.0),
        Sample::new(15.0, 5.0, 5.0),
    ]);
    println!("accepted {accepted} samples");

    forest.finish();

    let tree = forest.tree();
    for leaf in forest.leaves() {
        let rect = tree.rect(leaf).unwrap();
        println!(
            "leaf {:?} rect={:?} depth={} bin={:?} neighbors={}",
            leaf,
            rect,
            tree.depth(leaf).unwrap(),
            tree.bin(leaf),
            tree.neighbors(leaf).len(),
        );
    }

    // The right tile borders the left tile's eastern leaf column.
    let east_low = tree.children(left).unwrap()[1];
    assert!(
        tree.neighbors(right).contains(&east_low),
        "join should link the right tile to the left tile's east column"
    );
    assert!(tree.is_leaf(right), "uniform tile must stay a single leaf");
}
