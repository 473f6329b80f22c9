// Copyright 2026 the Quadbin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forest orchestration: batch insertion across roots and pairwise joining.

use alloc::vec::Vec;
use kurbo::Rect;

use crate::classify::{Classifier, Thresholds};
use crate::tree::TreeGeneric;
use crate::types::{NodeId, Sample};

/// A set of independently rooted region trees tiling a larger plane.
///
/// Root rectangles are expected to tile the target region exactly, with no
/// gaps or overlaps; the forest does not verify this. Each sample is routed
/// to the root containing it, each root refines independently, and
/// [`finish`](Self::finish) then stitches the per-tree neighbor graphs into
/// one graph spanning the whole forest.
pub struct ForestGeneric<C: Classifier> {
    tree: TreeGeneric<C>,
    roots: Vec<NodeId>,
}

/// A forest classified by an ascending [`Thresholds`] table.
pub type Forest = ForestGeneric<Thresholds>;

impl<C: Classifier> core::fmt::Debug for ForestGeneric<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ForestGeneric")
            .field("roots", &self.roots.len())
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}

impl<C: Classifier> ForestGeneric<C> {
    /// Create an empty forest with the given classifier and depth cap.
    pub fn new(classifier: C, max_depth: u8) -> Self {
        Self {
            tree: TreeGeneric::new(classifier, max_depth),
            roots: Vec::new(),
        }
    }

    /// Add a root tile covering `rect`.
    pub fn add_root(&mut self, rect: Rect) -> NodeId {
        let root = self.tree.new_root(rect);
        self.roots.push(root);
        root
    }

    /// Insert a sample, routing it to the root whose tile contains it.
    ///
    /// Roots tile the plane under half-open semantics, so at most one
    /// accepts. Returns `false` when the sample lies outside every tile.
    pub fn insert(&mut self, sample: Sample) -> bool {
        for i in 0..self.roots.len() {
            if self.tree.insert(self.roots[i], sample) {
                return true;
            }
        }
        false
    }

    /// Insert a batch of samples, returning how many were accepted.
    pub fn extend<I: IntoIterator<Item = Sample>>(&mut self, samples: I) -> usize {
        samples.into_iter().filter(|s| self.insert(*s)).count()
    }

    /// Finalize every root, then join every ordered pair of distinct roots.
    ///
    /// After this the transient sample storage is released and the neighbor
    /// graph connects adjacent leaves across all root boundaries.
    pub fn finish(&mut self) {
        for i in 0..self.roots.len() {
            self.tree.finalize(self.roots[i]);
        }
        for i in 0..self.roots.len() {
            for j in 0..self.roots.len() {
                if i != j {
                    self.tree.join(self.roots[i], self.roots[j]);
                }
            }
        }
    }

    /// The root ids, in insertion order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Read access to the underlying tree arena.
    pub fn tree(&self) -> &TreeGeneric<C> {
        &self.tree
    }

    /// Collect every leaf in the forest, root by root.
    pub fn leaves(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        for &root in &self.roots {
            out.extend(self.tree.leaves(root));
        }
        out
    }
}
