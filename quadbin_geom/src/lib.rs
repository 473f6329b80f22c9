// Copyright 2026 the Quadbin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadbin Geom: half-open rectangle semantics over [`kurbo::Rect`].
//!
//! Quadbin Geom is a small building block for grid and quadtree partitions.
//!
//! - Treats a `Rect` as half-open: a point on the `x1` or `y1` edge belongs to
//!   the neighboring rectangle, never to this one. For any set of rectangles
//!   forming an exact partition, every point matches exactly one of them.
//! - Splits a rectangle into its four quadrants at the x/y midpoints, in a
//!   fixed, documented order.
//! - Tests two rectangles for edge adjacency: a shared edge segment of
//!   positive length, with opposite orientation. Rectangles meeting only at a
//!   corner are not adjacent.
//!
//! It does not define its own point/rect types; [`kurbo`] is the geometry
//! vocabulary, and this crate only layers partition semantics on top.
//! Centroids come straight from [`Rect::center`], which is also where the
//! quadrant split takes its midpoints.
//!
//! Coordinates are assumed finite (no NaNs). The adjacency test compares edge
//! coordinates exactly, which is reliable when rectangles come from an exact
//! tiling and midpoint splits of it (shared edges then inherit identical
//! coordinates rather than being recomputed).
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use quadbin_geom::{contains_half_open, edge_adjacent, quadrants};
//!
//! let r = Rect::new(0.0, 0.0, 10.0, 10.0);
//! assert!(contains_half_open(r, Point::new(0.0, 0.0)));
//! assert!(!contains_half_open(r, Point::new(10.0, 5.0)));
//!
//! let [q0, q1, q2, q3] = quadrants(r);
//! assert_eq!(q0, Rect::new(0.0, 0.0, 5.0, 5.0));
//! assert!(edge_adjacent(q0, q1));
//! // Diagonal quadrants only share the center point.
//! assert!(!edge_adjacent(q0, q3));
//! ```
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

use kurbo::{Point, Rect};

/// Whether `rect` contains `pt` under half-open semantics.
///
/// True iff `pt.x ∈ [x0, x1)` and `pt.y ∈ [y0, y1)`. This differs from
/// [`Rect::contains`], which is closed on all edges and would double-count
/// points on shared boundaries of a partition.
#[inline]
pub fn contains_half_open(rect: Rect, pt: Point) -> bool {
    pt.x >= rect.x0 && pt.x < rect.x1 && pt.y >= rect.y0 && pt.y < rect.y1
}

/// Split `rect` at its x/y midpoints into four equal quadrants.
///
/// Order is fixed: `[low-x/low-y, high-x/low-y, low-x/high-y, high-x/high-y]`.
/// Under [`contains_half_open`] the quadrants partition `rect` exactly, with
/// no gap or overlap: points on the midlines belong to the high side.
#[inline]
pub fn quadrants(rect: Rect) -> [Rect; 4] {
    let mid = rect.center();
    [
        Rect::new(rect.x0, rect.y0, mid.x, mid.y),
        Rect::new(mid.x, rect.y0, rect.x1, mid.y),
        Rect::new(rect.x0, mid.y, mid.x, rect.y1),
        Rect::new(mid.x, mid.y, rect.x1, rect.y1),
    ]
}

/// Whether `a` and `b` share a common edge segment of positive length.
///
/// True iff one rectangle's right edge coincides with the other's left edge
/// while their y-ranges overlap, or one's bottom edge coincides with the
/// other's top edge while their x-ranges overlap. The overlap must have
/// positive length: rectangles touching only at a single corner point are not
/// adjacent. Symmetric in its arguments.
#[inline]
pub fn edge_adjacent(a: Rect, b: Rect) -> bool {
    let x_overlap = a.x0 < b.x1 && b.x0 < a.x1;
    let y_overlap = a.y0 < b.y1 && b.y0 < a.y1;
    ((a.x1 == b.x0 || b.x1 == a.x0) && y_overlap)
        || ((a.y1 == b.y0 || b.y1 == a.y0) && x_overlap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_open_edges() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(contains_half_open(r, Point::new(0.0, 0.0)));
        assert!(contains_half_open(r, Point::new(9.999, 9.999)));
        assert!(!contains_half_open(r, Point::new(10.0, 0.0)));
        assert!(!contains_half_open(r, Point::new(0.0, 10.0)));
        assert!(!contains_half_open(r, Point::new(-0.001, 5.0)));
    }

    #[test]
    fn quadrant_order_and_geometry() {
        let r = Rect::new(0.0, 0.0, 10.0, 20.0);
        let q = quadrants(r);
        assert_eq!(q[0], Rect::new(0.0, 0.0, 5.0, 10.0));
        assert_eq!(q[1], Rect::new(5.0, 0.0, 10.0, 10.0));
        assert_eq!(q[2], Rect::new(0.0, 10.0, 5.0, 20.0));
        assert_eq!(q[3], Rect::new(5.0, 10.0, 10.0, 20.0));
    }

    #[test]
    fn quadrants_partition_exactly() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let q = quadrants(r);
        // Interior points, midline points, and the center must each match
        // exactly one quadrant.
        let probes = [
            Point::new(1.0, 1.0),
            Point::new(9.0, 1.0),
            Point::new(1.0, 9.0),
            Point::new(9.0, 9.0),
            Point::new(5.0, 1.0),
            Point::new(1.0, 5.0),
            Point::new(5.0, 5.0),
            Point::new(0.0, 0.0),
        ];
        for p in probes {
            let matches = q.iter().filter(|r| contains_half_open(**r, p)).count();
            assert_eq!(matches, 1, "point {p:?} must land in exactly one quadrant");
        }
        // Points outside the parent match no quadrant.
        assert!(!q.iter().any(|r| contains_half_open(*r, Point::new(10.0, 10.0))));
    }

    #[test]
    fn edge_adjacency_vertical_and_horizontal() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 20.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 20.0);
        assert!(edge_adjacent(a, right));
        assert!(edge_adjacent(right, a));
        assert!(edge_adjacent(a, below));
        assert!(edge_adjacent(below, a));
    }

    #[test]
    fn partial_edge_overlap_is_adjacent() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let shifted = Rect::new(10.0, 5.0, 20.0, 15.0);
        assert!(edge_adjacent(a, shifted));
        assert!(edge_adjacent(shifted, a));
    }

    #[test]
    fn corner_touch_is_not_adjacent() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let diagonal = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(!edge_adjacent(a, diagonal));
        assert!(!edge_adjacent(diagonal, a));
    }

    #[test]
    fn disjoint_and_overlapping_are_not_adjacent() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!edge_adjacent(a, Rect::new(11.0, 0.0, 20.0, 10.0)));
        // Proper overlap shares no opposing edge pair.
        assert!(!edge_adjacent(a, Rect::new(5.0, 5.0, 15.0, 15.0)));
        assert!(!edge_adjacent(a, a));
    }

    #[test]
    fn sibling_quadrants_adjacency() {
        let q = quadrants(Rect::new(0.0, 0.0, 10.0, 10.0));
        // Side pairs share an edge; the two diagonal pairs only share the center.
        assert!(edge_adjacent(q[0], q[1]));
        assert!(edge_adjacent(q[0], q[2]));
        assert!(edge_adjacent(q[1], q[3]));
        assert!(edge_adjacent(q[2], q[3]));
        assert!(!edge_adjacent(q[0], q[3]));
        assert!(!edge_adjacent(q[1], q[2]));
    }
}
