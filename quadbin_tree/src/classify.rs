// Copyright 2026 the Quadbin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value classification: mapping a scalar to a discrete bin index.

use alloc::vec::Vec;

/// Maps a scalar value to a bin index.
///
/// Implementations must be pure and total: every finite value maps to an
/// index, and equal inputs always produce equal outputs. The tree refines its
/// partition exactly where two samples in the same leaf classify differently,
/// so the classifier fully determines the refinement pattern.
pub trait Classifier {
    /// The bin index for `value`.
    fn bin_of(&self, value: f64) -> usize;
}

/// An ascending table of bin thresholds.
///
/// With `N` thresholds, [`bin_of`](Classifier::bin_of) returns the index of
/// the first threshold strictly greater than the value, or `N` when no
/// threshold exceeds it — so every value maps into `[0, N]`. Bin 0 is the
/// most extreme bin and thresholds must be strictly ascending.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Thresholds(Vec<f64>);

impl Thresholds {
    /// Create a threshold table. `bounds` must be strictly ascending.
    pub fn new(bounds: Vec<f64>) -> Self {
        debug_assert!(
            bounds.windows(2).all(|w| w[0] < w[1]),
            "thresholds must be strictly ascending"
        );
        Self(bounds)
    }

    /// The eleven-threshold depth table used by the demos and benches:
    /// `{0, 6, 7, 8, 9, 10, 12, 15, 20, 30, 50}`.
    pub fn default_bins() -> Self {
        Self::new(alloc::vec![
            0.0, 6.0, 7.0, 8.0, 9.0, 10.0, 12.0, 15.0, 20.0, 30.0, 50.0
        ])
    }

    /// Number of thresholds (one less than the number of reachable bins).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the table has no thresholds (every value maps to bin 0).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Classifier for Thresholds {
    fn bin_of(&self, value: f64) -> usize {
        self.0.partition_point(|t| *t <= value)
    }
}
