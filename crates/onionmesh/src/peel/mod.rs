//! Onion peeling: successive convex hulls over a fixed point slice.
//!
//! Purpose
//! - Partition a point set into nested convex layers, outer to inner, each a
//!   counterclockwise cyclic sequence of indices into the input slice.
//! - One angular sort up front: the working order is sorted by polar angle
//!   around the peel origin once, and every later scan inherits that order
//!   because filtering preserves it.
//!
//! The origin (the lowest point in y-then-x order) belongs to the outer
//! layer but is carried through every later scan as slot 0, purely as the
//! angular reference; `inner_scan` never emits it again.

mod scan;
#[cfg(test)]
mod tests;

pub use scan::{inner_scan, outer_scan};

use std::cmp::Ordering;

use crate::geom::{polar_cmp, yx_cmp, Vec2};

/// Decompose `points` into convex layers, outer to inner.
///
/// Every input index appears in exactly one layer. An empty slice yields no
/// layers; a single point yields one singleton layer.
pub fn peel(points: &[Vec2]) -> Vec<Vec<usize>> {
    if points.is_empty() {
        return Vec::new();
    }
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.swap(0, select_origin(points));
    let origin = points[order[0]];
    order[1..].sort_by(|&i, &j| polar_cmp(origin, points[i], points[j]));

    let mut layers = Vec::new();
    loop {
        let (layer, remainder) = if layers.is_empty() {
            outer_scan(&order, points)
        } else {
            inner_scan(&order, points)
        };
        layers.push(layer);
        // A remainder of one index is the bare origin seed: nothing left.
        if remainder.len() <= 1 {
            break;
        }
        order = remainder;
    }
    layers
}

/// Index of the lowest point in y-then-x order; the peel origin.
fn select_origin(points: &[Vec2]) -> usize {
    let mut best = 0;
    for i in 1..points.len() {
        if yx_cmp(&points[i], &points[best]) == Ordering::Less {
            best = i;
        }
    }
    best
}

/// Position within `ring` of its lowest point in y-then-x order.
///
/// This is the layer's anchor: the seed vertex for the strip walk. The
/// lowest points of nested convex rings are angularly compatible starting
/// positions, which keeps the walk monotone.
pub fn lowest_position(ring: &[usize], points: &[Vec2]) -> usize {
    let mut best = 0;
    for pos in 1..ring.len() {
        if yx_cmp(&points[ring[pos]], &points[ring[best]]) == Ordering::Less {
            best = pos;
        }
    }
    best
}
