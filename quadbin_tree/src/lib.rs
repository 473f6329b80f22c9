// Copyright 2026 the Quadbin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadbin Tree: an adaptive, bin-refined region quadtree with a leaf
//! neighbor graph.
//!
//! Quadbin Tree classifies 2-D samples into discrete value bins and refines
//! its spatial partition only where the classification changes: a region
//! whose samples all fall into one bin stays a single coarse leaf no matter
//! how many samples it receives, while a region straddling a bin boundary is
//! split into quadrants, down to a configured maximum depth. Alongside the
//! partition it maintains an explicit adjacency graph between leaf regions —
//! every link symmetric, kept consistent through every subdivision, join,
//! and removal — including across several independently rooted trees that
//! tile a larger plane.
//!
//! - [`TreeGeneric`]: the arena of region nodes; insertion, adaptive
//!   subdivision, neighbor maintenance, cross-tree joining, finalization.
//! - [`ForestGeneric`]: drives a batch of samples into a set of root tiles
//!   and stitches the per-tree graphs into one spanning graph.
//! - [`Classifier`] / [`Thresholds`]: the pure value-to-bin mapping; the
//!   refinement pattern is entirely determined by it.
//! - [`NodeId`]: generational handle of a node; neighbor sets store handles,
//!   never owning references.
//!
//! Geometry comes from [`kurbo`], with half-open partition semantics layered
//! on top by [`quadbin_geom`]: a point on a shared boundary belongs to
//! exactly one region, and two regions are adjacent only when they share an
//! edge segment of positive length.
//!
//! ## Construction protocol
//!
//! Build, then query; the structure is not designed for mutation after the
//! join phase. The expected sequence is:
//!
//! 1. [`ForestGeneric::add_root`] for each tile of the target region (tiles
//!    must partition it exactly).
//! 2. [`ForestGeneric::insert`] / [`ForestGeneric::extend`] for the sample
//!    batch.
//! 3. [`ForestGeneric::finish`]: releases transient samples and joins every
//!    pair of roots.
//! 4. Read the result: per-leaf rectangle, bin, and neighbor set via the
//!    accessors on [`TreeGeneric`].
//!
//! Everything is single-threaded and synchronous; no operation blocks or
//! performs I/O. Separate forests may be built on separate threads, but a
//! single tree or forest must not be mutated concurrently.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Rect;
//! use quadbin_tree::{Forest, Sample, Thresholds};
//!
//! // Two bins: values below 10.0 and values in [10.0, 100.0).
//! let mut forest = Forest::new(Thresholds::new(vec![10.0, 100.0]), 4);
//! let left = forest.add_root(Rect::new(0.0, 0.0, 10.0, 10.0));
//! let right = forest.add_root(Rect::new(10.0, 0.0, 20.0, 10.0));
//!
//! // A bin boundary crossing inside the left tile refines it; the right
//! // tile stays coarse.
//! forest.extend([
//!     Sample::new(1.0, 1.0, 5.0),
//!     Sample::new(9.0, 9.0, 50.0),
//!     Sample::new(15.0, 5.0, 5.0),
//! ]);
//! forest.finish();
//!
//! let tree = forest.tree();
//! assert!(!tree.is_leaf(left));
//! assert!(tree.is_leaf(right));
//!
//! // The right tile borders the left tile's eastern leaf column.
//! let east_low = tree.children(left).unwrap()[1];
//! assert!(tree.neighbors(right).contains(&east_low));
//! assert_eq!(tree.bin(east_low), None); // never received a sample
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod classify;
pub mod forest;
pub mod tree;
pub mod types;

pub use classify::{Classifier, Thresholds};
pub use forest::{Forest, ForestGeneric};
pub use tree::{Tree, TreeGeneric};
pub use types::{NodeFlags, NodeId, Sample};
