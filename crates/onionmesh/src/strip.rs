//! Advancing-front triangulation of the strip between adjacent layers.
//!
//! Both walks move two cursors once around the outer and inner rings,
//! emitting one connecting edge per step, and stop when both cursors are
//! simultaneously back at their seeds; at most `m + n` edges per strip.
//! Each cursor is capped at one revolution: once a ring is spent, the other
//! cursor finishes its lap regardless of the local geometry, so out-of-phase
//! advance decisions cannot orbit the rings indefinitely.
//! Modulo arithmetic makes single-point "rings" fall out of the same loop.

use crate::geom::{is_ccw, tri_min_angle, Vec2};

/// Which advancing-front walk to run between adjacent layers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Advance whichever cursor keeps the front convex; no quality criterion.
    Greedy,
    /// When both advances are admissible, pick the one whose committed
    /// triangle pair has the larger minimum interior angle (fewer slivers).
    #[default]
    MaxMinAngle,
}

/// Triangulate the annular strip between `outer` and `inner` (both CCW
/// cyclic index rings), appending connecting edges to `edges`.
///
/// The walk starts at the outer ring's anchor. `MaxMinAngle` seeds the inner
/// cursor at the inner point nearest to the outer anchor, which keeps the
/// first connecting edge short; `Greedy` starts at the inner anchor.
///
/// Terminates unconditionally after at most `m + n` emissions: each cursor
/// advances at most one full revolution around its ring.
pub fn triangulate_strip(
    points: &[Vec2],
    outer: &[usize],
    inner: &[usize],
    outer_anchor: usize,
    inner_anchor: usize,
    strategy: Strategy,
    edges: &mut Vec<(usize, usize)>,
) {
    debug_assert!(!outer.is_empty() && !inner.is_empty());
    let m = outer.len();
    let n = inner.len();
    let mut c0 = outer_anchor;
    let mut c1 = match strategy {
        Strategy::Greedy => inner_anchor,
        Strategy::MaxMinAngle => nearest_position(points, points[outer[c0]], inner),
    };
    let (end0, end1) = (c0, c1);
    let mut laps0 = 0;
    let mut laps1 = 0;
    loop {
        debug_assert!(laps0 + laps1 < m + n, "strip walk past one revolution per ring");
        edges.push((outer[c0], inner[c1]));
        let next0 = (c0 + 1) % m;
        let next1 = (c1 + 1) % n;
        let p0 = points[outer[c0]];
        let pn0 = points[outer[next0]];
        let q1 = points[inner[c1]];
        let qn1 = points[inner[next1]];
        // A spent ring hands the walk to the other cursor unconditionally;
        // the geometric advance decisions alone can fall out of phase and
        // orbit both rings without the cursors ever re-aligning at the seeds.
        let advance_outer = if laps0 == m {
            false
        } else if laps1 == n {
            true
        } else if is_ccw(p0, q1, qn1) {
            // Advancing inner would fold the front backward; outer moves.
            true
        } else if strategy == Strategy::MaxMinAngle && !is_ccw(pn0, q1, qn1) {
            // Both advances admissible: let triangle quality decide.
            !inner_advance_wins(p0, pn0, q1, qn1)
        } else {
            false
        };
        if advance_outer {
            c0 = next0;
            laps0 += 1;
        } else {
            c1 = next1;
            laps1 += 1;
        }
        if c0 == end0 && c1 == end1 {
            break;
        }
    }
}

/// Fan-triangulate `ring` from its first point. Rings of up to three points
/// are already covered by their boundary and need no extra edges.
pub fn close_layer(ring: &[usize], edges: &mut Vec<(usize, usize)>) {
    if ring.len() > 3 {
        for &idx in &ring[1..] {
            edges.push((ring[0], idx));
        }
    }
}

/// Compare the two candidate triangle pairs by minimum interior angle.
///
/// Non-finite angles (coincident points) lose deterministically, so NaN can
/// never steer the walk or stall termination.
fn inner_advance_wins(p0: Vec2, pn0: Vec2, q1: Vec2, qn1: Vec2) -> bool {
    let inner_pair = tri_min_angle(p0, q1, qn1).min(tri_min_angle(p0, qn1, pn0));
    let outer_pair = tri_min_angle(p0, pn0, q1).min(tri_min_angle(pn0, qn1, q1));
    if !inner_pair.is_finite() {
        return false;
    }
    if !outer_pair.is_finite() {
        return true;
    }
    inner_pair > outer_pair
}

/// Ring position whose point lies nearest to `target`.
fn nearest_position(points: &[Vec2], target: Vec2, ring: &[usize]) -> usize {
    let mut best = 0;
    let mut best_dist = (points[ring[0]] - target).norm();
    for pos in 1..ring.len() {
        let dist = (points[ring[pos]] - target).norm();
        if dist < best_dist {
            best = pos;
            best_dist = dist;
        }
    }
    best
}
