//! The two Graham-scan variants behind the peel.
//!
//! Both scans work over *slots*: positions into the angle-sorted working
//! order, not point indices. Each returns `(layer, remainder)` where the
//! layer is a CCW index ring and the remainder (still in angular order) is
//! the working order for the next, deeper scan.
//!
//! `outer_scan` is a classic Graham scan pivoting on the origin itself.
//! `inner_scan` computes the hull of the slots *excluding* the origin seed:
//! the seed sits strictly below the remaining points, so the angular order
//! around it is still usable, but the hull no longer closes through it. A
//! second, backward pass reconciles the slots adjacent to the seed's
//! angular position; see the notes on that pass below.

use std::collections::VecDeque;

use crate::geom::{is_ccw, strictly_ccw, Vec2};

/// Hull scan for the first layer.
///
/// Pops require a strict left turn, so collinear points are discarded from
/// the boundary and land in the remainder: only maximal hull vertices make
/// up the layer.
pub fn outer_scan(order: &[usize], points: &[Vec2]) -> (Vec<usize>, Vec<usize>) {
    debug_assert!(!order.is_empty());
    if order.len() <= 2 {
        return (order.to_vec(), Vec::new());
    }

    let mut stack: Vec<usize> = vec![0, 1];
    let mut dropped = vec![false; order.len()];
    for slot in 2..order.len() {
        while stack.len() >= 2 {
            let prev = stack[stack.len() - 1];
            let base = stack[stack.len() - 2];
            if strictly_ccw(points[order[base]], points[order[prev]], points[order[slot]]) {
                break;
            }
            dropped[prev] = true;
            stack.pop();
        }
        stack.push(slot);
    }

    let layer: Vec<usize> = stack.into_iter().map(|slot| order[slot]).collect();
    // The origin seeds the remainder: it stays the angular reference for
    // every deeper scan even though it belongs to this layer alone.
    let mut remainder = vec![order[0]];
    remainder.extend((1..order.len()).filter(|&s| dropped[s]).map(|s| order[s]));
    (layer, remainder)
}

/// Hull scan for every layer after the first.
///
/// Slot 0 is the origin seed; it already belongs to an earlier layer and is
/// never part of this one, but it anchors the angular order. Small candidate
/// sets short-circuit: two or three slots form the layer directly, four
/// slots need only an orientation test to come out counterclockwise.
pub fn inner_scan(order: &[usize], points: &[Vec2]) -> (Vec<usize>, Vec<usize>) {
    debug_assert!(order.len() >= 2);
    let n = order.len();
    if n <= 3 {
        return (order[1..].to_vec(), Vec::new());
    }
    if n == 4 {
        let (a, b, c) = (order[1], order[2], order[3]);
        let layer = if is_ccw(points[a], points[b], points[c]) {
            vec![a, b, c]
        } else {
            vec![a, c, b]
        };
        return (layer, Vec::new());
    }

    let mut hull: VecDeque<usize> = VecDeque::with_capacity(n);
    hull.extend([0, 1, 2]);
    let mut dropped = vec![false; n];

    // Forward pass: plain Graham scan with the seed still in place. Pops are
    // non-strict so the lowest-angle slot survives as the cyclic low end even
    // when it sits on a run collinear with the seed.
    for slot in 3..n {
        while hull.len() >= 2 {
            let prev = hull[hull.len() - 1];
            let base = hull[hull.len() - 2];
            if is_ccw(points[order[base]], points[order[prev]], points[order[slot]]) {
                break;
            }
            dropped[prev] = true;
            hull.pop_back();
        }
        hull.push_back(slot);
    }

    // The seed is interior-or-below relative to this layer, so the chain must
    // not close through it: remove it from the low end. The extreme vertex of
    // the seedless hull can sit anywhere in the angular order, so walk back
    // from the high-angle end re-testing every dropped slot; slot 1 is forced
    // into that sweep so the cycle is re-closed at the low end last.
    dropped[1] = true;
    hull.pop_front();
    for slot in (1..n).rev() {
        if !dropped[slot] {
            continue;
        }
        let mut prev = match hull.pop_back() {
            Some(p) => p,
            None => break,
        };
        while let Some(&base) = hull.back() {
            if is_ccw(points[order[base]], points[order[prev]], points[order[slot]]) {
                break;
            }
            dropped[prev] = true;
            hull.pop_back();
            prev = base;
        }
        dropped[prev] = false;
        dropped[slot] = false;
        hull.push_back(prev);
        hull.push_back(slot);
    }
    // Slot 1 now sits at both ends of the chain; keep the front copy.
    dropped[1] = false;
    hull.pop_back();

    let layer: Vec<usize> = hull.into_iter().map(|slot| order[slot]).collect();
    let mut remainder = vec![order[0]];
    remainder.extend((1..n).filter(|&s| dropped[s]).map(|s| order[s]));
    (layer, remainder)
}
