// Copyright 2026 the Quadbin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the region tree: node identifiers, flags, and samples.

use kurbo::Point;

/// Identifier for a node in the tree.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On allocation, a fresh slot starts at generation `1`.
/// - On removal, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// ### Liveness
///
/// Use [`TreeGeneric::is_alive`](crate::TreeGeneric::is_alive) to check whether a `NodeId` still
/// refers to a live node. Stale `NodeId`s never alias a different live node because the
/// generation must match. Neighbor sets are scrubbed eagerly on removal, so a live node never
/// holds a stale neighbor id; the generation check is the backstop for ids retained by callers.
///
/// ### Notes
///
/// - The generation increments on slot reuse and never decreases.
/// - `u32` is ample for practical lifetimes; behavior on generation overflow is unspecified.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node state bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Leaf has received at least one sample; its recorded bin is meaningful.
        const SEEDED    = 0b0000_0001;
        /// Transient sample storage has been released.
        const FINALIZED = 0b0000_0010;
    }
}

/// A 2-D measurement: a position and the scalar value observed there.
///
/// Samples are supplied by the caller in a batch. Leaves hold copies only
/// while the tree is under construction; finalization releases them all.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample {
    /// Position of the measurement.
    pub pos: Point,
    /// Observed scalar value, classified into a bin by the tree.
    pub value: f64,
}

impl Sample {
    /// Create a sample from raw coordinates and a value.
    pub fn new(x: f64, y: f64, value: f64) -> Self {
        Self {
            pos: Point::new(x, y),
            value,
        }
    }
}
